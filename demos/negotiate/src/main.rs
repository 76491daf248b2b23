#[macro_use]
extern crate log;

mod app;

use std::env;

use anyhow::{Context, Result};
use log::LevelFilter;

use suite_negotiator::{Priorities, Transport};

use app::App;

// usage: demo-negotiate [priorities.json] [level] [tls|dtls]
fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let level = match args.get(2) {
        Some(level) => level
            .parse::<LevelFilter>()
            .with_context(|| format!("invalid log level {:?}", level))?,
        None => LevelFilter::Debug,
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .expect("A logger was already initialized");

    let priorities = match args.get(1) {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path))?;
            Priorities::from_json(&json)?
        }
        None => Priorities::default(),
    };
    let transport = match args.get(3).map(String::as_str) {
        Some("dtls") => Transport::Dtls,
        _ => Transport::Tls,
    };

    info!("Negotiation Demo started");

    let mut app = App::new(priorities, transport);
    app.run()
}

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate serde_derive;

pub mod alert;
pub mod algorithm;
pub mod availability;
pub mod cipher_suite;
pub mod config;
pub mod credentials;
pub mod curve;
mod error;
pub mod extension;
pub mod kx;
pub mod negotiation;
pub mod offer;
pub mod priority;
pub mod protocol_version;
pub mod session;
pub mod state;

pub use cipher_suite::{CipherSuiteEntry, CipherSuiteId};
pub use config::{Priorities, PrioritiesBuilder};
pub use credentials::{CertificateSelector, CredentialStore};
pub use error::{Error, IoError, Result};
pub use negotiation::{NegotiatedSuite, PeerList};
pub use offer::ClientOffer;
pub use priority::PriorityList;
pub use protocol_version::ProtocolVersion;
pub use session::{Session, Transport};

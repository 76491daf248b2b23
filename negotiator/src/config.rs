use derive_builder::Builder;

use crate::algorithm::BuiltinBackend;
use crate::curve::named_group::{default_groups, NamedGroup};
use crate::error::*;
use crate::offer::MAX_CIPHERSUITE_SIZE;
use crate::priority::PriorityList;
use crate::protocol_version::ProtocolVersion;

/// Priorities is the negotiation configuration shared by every session
/// created from it.
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(default)]
#[serde(default)]
pub struct Priorities {
    /// Cipher suites in local preference order.
    pub cipher_suites: PriorityList,
    /// Enabled protocol versions, TLS and DTLS alike.
    pub protocols: Vec<ProtocolVersion>,
    /// Named groups in local preference order.
    pub groups: Vec<NamedGroup>,
    /// Drive server negotiation by the local order instead of the peer's.
    pub server_precedence: bool,
    /// Refuse block ciphers unless encrypt-then-MAC was negotiated.
    pub force_etm: bool,
    /// Append TLS_FALLBACK_SCSV to client offers.
    pub fallback: bool,
    /// Upper bound on suites written into a client offer.
    pub max_offered_suites: usize,
}

impl Default for Priorities {
    fn default() -> Self {
        Priorities {
            cipher_suites: PriorityList::all_available(&BuiltinBackend),
            protocols: vec![
                ProtocolVersion::Tls1_3,
                ProtocolVersion::Tls1_2,
                ProtocolVersion::Tls1_1,
                ProtocolVersion::Tls1_0,
                ProtocolVersion::Dtls1_2,
                ProtocolVersion::Dtls1_0,
            ],
            groups: default_groups(),
            server_precedence: false,
            force_etm: false,
            fallback: false,
            max_offered_suites: MAX_CIPHERSUITE_SIZE,
        }
    }
}

impl Priorities {
    pub fn builder() -> PrioritiesBuilder {
        PrioritiesBuilder::default()
    }

    /// Parses a JSON priority configuration. Missing fields keep their
    /// defaults and suite names are resolved against the registry.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Other(e.to_string()))
    }
}

impl PrioritiesBuilder {
    pub fn finish(&self) -> Result<Priorities> {
        self.build().map_err(|e| Error::Other(e.to_string()))
    }
}

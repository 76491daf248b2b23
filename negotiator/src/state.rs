use crate::algorithm::PrfAlgorithm;
use crate::cipher_suite::CipherSuiteEntry;
use crate::curve::named_group::NamedGroup;
use crate::negotiation::NegotiatedSuite;
use crate::protocol_version::ProtocolVersion;

// State holds the handshake facts cipher suite negotiation depends on, and
// the outcome once negotiation succeeded
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    pub version: Option<ProtocolVersion>, // nil until the version is negotiated

    pub cand_ec_group: Option<NamedGroup>,
    pub cand_dh_group: Option<NamedGroup>,
    pub supported_groups_received: bool,
    pub have_ffdhe: bool, // peer advertised a FFDHE group

    pub etm_negotiated: bool,
    pub psk_binder_prf: Option<PrfAlgorithm>, // PRF of the first binder once a PSK is selected
    pub premaster_set: bool,
    pub safe_renegotiation_offered: bool,

    pub cipher_suite: Option<&'static CipherSuiteEntry>,
    pub group: Option<NamedGroup>,
    pub certificate: Option<usize>,
}

impl Default for State {
    fn default() -> Self {
        State {
            version: None,

            cand_ec_group: None,
            cand_dh_group: None,
            supported_groups_received: false,
            have_ffdhe: false,

            etm_negotiated: false,
            psk_binder_prf: None,
            premaster_set: false,
            safe_renegotiation_offered: false,

            cipher_suite: None,
            group: None,
            certificate: None,
        }
    }
}

impl State {
    pub fn psk_selected(&self) -> bool {
        self.psk_binder_prf.is_some()
    }

    /// Stores a negotiation outcome for the later handshake steps. The group
    /// is only replaced when the outcome selected one.
    pub fn apply_outcome(&mut self, outcome: &NegotiatedSuite) {
        self.cipher_suite = Some(outcome.suite);
        if let Some(group) = outcome.group {
            self.group = Some(group);
        }
        if outcome.certificate.is_some() {
            self.certificate = outcome.certificate;
        }
    }
}

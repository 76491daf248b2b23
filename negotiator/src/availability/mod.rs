use std::fmt;

use crate::credentials::CredentialStore;
use crate::curve::named_group::NamedGroup;
use crate::kx::{CredentialType, KeyExchangeAlgorithm};
use crate::state::State;

/// KxStatus is the verdict on whether a key exchange can run with what the
/// session has established so far.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KxStatus {
    /// The exchange can run, over the group if one is required.
    Ready(Option<NamedGroup>),
    NoEcGroup,
    NoDhParams,
    /// The peer advertised FFDHE groups, so static server parameters may
    /// not be used in place of a negotiated group.
    StaticDhRejected,
    NoSrpCredentials,
}

impl KxStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, KxStatus::Ready(_))
    }

    pub fn group(&self) -> Option<NamedGroup> {
        match self {
            KxStatus::Ready(group) => *group,
            _ => None,
        }
    }
}

impl fmt::Display for KxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KxStatus::Ready(Some(group)) => write!(f, "ready over {}", group),
            KxStatus::Ready(None) => write!(f, "ready"),
            KxStatus::NoEcGroup => write!(f, "no elliptic curve group in common"),
            KxStatus::NoDhParams => write!(f, "no DH parameters configured"),
            KxStatus::StaticDhRejected => {
                write!(f, "peer advertised FFDHE groups, static DH parameters rejected")
            }
            KxStatus::NoSrpCredentials => write!(f, "no SRP credentials configured"),
        }
    }
}

/// Whether the credential of `credential_type` can provide server DH
/// parameters. Credential kinds that never carry DH parameters need none.
pub fn dh_params_available(credentials: &CredentialStore, credential_type: CredentialType) -> bool {
    match credential_type {
        CredentialType::Certificate | CredentialType::Anon | CredentialType::Psk => credentials
            .get(credential_type)
            .map_or(false, |c| c.has_dh_params()),
        CredentialType::Srp => true,
    }
}

/// Checks the prerequisites of `kx` against the session state. `None` is
/// the key exchange of TLS 1.3 suites and is always satisfiable here.
///
/// Nothing is written back: a selected group is carried in the returned
/// status for the caller to apply.
pub fn kx_is_ok(
    state: &State,
    credentials: &CredentialStore,
    kx: Option<KeyExchangeAlgorithm>,
    credential_type: CredentialType,
) -> KxStatus {
    let kx = match kx {
        Some(kx) => kx,
        None => return KxStatus::Ready(None),
    };

    let mut group = None;
    if kx.is_ecc() {
        match state.cand_ec_group {
            Some(ec_group) => group = Some(ec_group),
            None => return KxStatus::NoEcGroup,
        }
    } else if kx.is_dhe() {
        match state.cand_dh_group {
            Some(dh_group) => group = Some(dh_group),
            None => {
                if state.have_ffdhe {
                    return KxStatus::StaticDhRejected;
                }
                if !dh_params_available(credentials, credential_type) {
                    return KxStatus::NoDhParams;
                }
            }
        }
    }

    if kx.is_srp() && !credentials.has(CredentialType::Srp) {
        return KxStatus::NoSrpCredentials;
    }

    KxStatus::Ready(group)
}


use byteorder::{BigEndian, WriteBytesExt};

use crate::cipher_suite::{TLS_EMPTY_RENEGOTIATION_INFO_SCSV, TLS_FALLBACK_SCSV};
use crate::error::*;
use crate::kx::CredentialType;
use crate::session::Session;

/// Most suite ids a client offer carries, signaling values included.
pub const MAX_CIPHERSUITE_SIZE: usize = 256;

/// ClientOffer describes what [`Session::client_cipher_suites`] appended.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientOffer {
    /// Bytes appended, length prefix included.
    pub written: usize,
    /// Real suites offered, signaling values excluded.
    pub suites: usize,
    pub safe_renegotiation_signaled: bool,
    pub fallback_signaled: bool,
}

impl Session {
    /// Writes the `cipher_suites` field of a ClientHello to the end of `out`:
    /// a 16-bit length followed by the ids of every locally preferred suite
    /// this client can use, then the requested signaling values.
    ///
    /// On error nothing is appended to `out`.
    pub fn client_cipher_suites(&mut self, out: &mut Vec<u8>, add_scsv: bool) -> Result<ClientOffer> {
        let dtls = self.is_dtls();
        let max_version = self
            .priorities
            .version_max(dtls)
            .ok_or(Error::ErrNoPrioritiesWereSet)?;
        if let Some(min_version) = self.priorities.version_min(dtls) {
            log::trace!("offering suites for {} to {}", min_version, max_version);
        }

        let fallback = self.priorities.fallback;
        let signaling = usize::from(add_scsv) + usize::from(fallback);
        let limit = self
            .priorities
            .max_offered_suites
            .min(MAX_CIPHERSUITE_SIZE.saturating_sub(signaling));

        let mut payload = Vec::with_capacity(2 * (limit + signaling));
        let mut suites = 0;
        for entry in self.priorities.cipher_suites.iter() {
            match entry.min_version_for(dtls) {
                Some(min) if min <= max_version => {}
                _ => continue,
            }

            if let Some(kx) = entry.kx {
                if !self.state.premaster_set && !self.credentials.has(kx.client_credential_type()) {
                    log::trace!("{} skipped: no {} credentials", entry.id, kx.client_credential_type());
                    continue;
                }
                if kx.is_srp() && !self.credentials.has(CredentialType::Srp) {
                    log::trace!("{} skipped: no SRP credentials", entry.id);
                    continue;
                }
            }

            if suites == limit {
                log::warn!("client offer is full at {} cipher suites", limit);
                break;
            }

            log::debug!("Keeping ciphersuite {} ({})", entry.id, entry.short_name());
            payload.extend_from_slice(&entry.id.to_bytes());
            suites += 1;
        }

        if add_scsv {
            payload.extend_from_slice(&TLS_EMPTY_RENEGOTIATION_INFO_SCSV.to_bytes());
        }
        if fallback {
            payload.extend_from_slice(&TLS_FALLBACK_SCSV.to_bytes());
        }

        let written = 2 + payload.len();
        out.try_reserve(written)
            .map_err(|_| Error::ErrMemoryAllocation)?;
        out.write_u16::<BigEndian>(payload.len() as u16)?;
        out.extend_from_slice(&payload);

        if add_scsv {
            self.state.safe_renegotiation_offered = true;
        }

        Ok(ClientOffer {
            written,
            suites,
            safe_renegotiation_signaled: add_scsv,
            fallback_signaled: fallback,
        })
    }
}

#[cfg(test)]
mod negotiation_test;

pub mod peer_list;

pub use peer_list::PeerList;

use crate::algorithm::CipherType;
use crate::availability::kx_is_ok;
use crate::cipher_suite::CipherSuiteEntry;
use crate::credentials::CertificateSelector;
use crate::curve::named_group::{NamedGroup, DEFAULT_EC_GROUP};
use crate::error::*;
use crate::kx::CredentialType;
use crate::protocol_version::ProtocolVersion;
use crate::session::Session;

/// NegotiatedSuite is the outcome of a successful negotiation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NegotiatedSuite {
    pub suite: &'static CipherSuiteEntry,
    /// Group the key exchange runs over, when it needs one.
    pub group: Option<NamedGroup>,
    /// Certificate chosen by the selector, for certificate-based exchanges.
    pub certificate: Option<usize>,
}

enum Probe {
    Chosen(NegotiatedSuite),
    // key exchange prerequisites or PSK binder PRF not met
    Rejected,
    NoCertificate,
}

impl Session {
    /// Picks the suite for this handshake from `peer` and the local
    /// priority list and stores it, with its group and certificate, into
    /// the session state.
    pub fn negotiate(
        &mut self,
        peer: &PeerList,
        selector: &mut dyn CertificateSelector,
    ) -> Result<&'static CipherSuiteEntry> {
        let outcome = self.find_common_cipher_suite(peer, selector)?;
        self.state.apply_outcome(&outcome);
        Ok(outcome.suite)
    }

    /// Server side suite selection. The first suite that is mutually
    /// listed, valid for the negotiated version and satisfiable with the
    /// local credentials wins.
    ///
    /// The only state written is the default EC candidate assumed for peers
    /// that sent no supported_groups extension; the chosen group and
    /// certificate are returned for the caller to persist.
    pub fn find_common_cipher_suite(
        &mut self,
        peer: &PeerList,
        selector: &mut dyn CertificateSelector,
    ) -> Result<NegotiatedSuite> {
        let version = self.state.version.ok_or(Error::ErrNoCipherSuites)?;

        // RFC 4492 clients that omit supported_groups still support secp256r1
        if !version.tls13_semantics()
            && self.state.cand_ec_group.is_none()
            && !self.state.supported_groups_received
        {
            self.state.cand_ec_group = Some(DEFAULT_EC_GROUP);
        }

        let outcome = if self.priorities.server_precedence {
            self.server_precedence_pass(version, peer, selector)
        } else {
            self.client_precedence_pass(version, peer, selector)
        };

        match outcome {
            Some(outcome) => {
                log::debug!(
                    "selected cipher suite {} ({})",
                    outcome.suite.id,
                    outcome.suite.short_name()
                );
                Ok(outcome)
            }
            None => Err(Error::ErrNoCipherSuites),
        }
    }

    fn client_precedence_pass(
        &self,
        version: ProtocolVersion,
        peer: &PeerList,
        selector: &mut dyn CertificateSelector,
    ) -> Option<NegotiatedSuite> {
        for candidate in peer.iter() {
            log::debug!(
                "checking {} ({}) for compatibility",
                candidate.id,
                candidate.short_name()
            );
            if !self.admits(candidate, version) {
                continue;
            }

            for local in self.priorities.cipher_suites.iter() {
                if local.id != candidate.id {
                    continue;
                }
                match self.probe(version, candidate, selector) {
                    Probe::Chosen(outcome) => return Some(outcome),
                    Probe::Rejected => continue,
                    // a failed certificate probe gives up on this candidate
                    Probe::NoCertificate => break,
                }
            }
        }
        None
    }

    fn server_precedence_pass(
        &self,
        version: ProtocolVersion,
        peer: &PeerList,
        selector: &mut dyn CertificateSelector,
    ) -> Option<NegotiatedSuite> {
        for local in self.priorities.cipher_suites.iter() {
            if !self.admits(local, version) {
                continue;
            }

            for candidate in peer.iter() {
                log::debug!(
                    "checking {} ({}) for compatibility",
                    candidate.id,
                    candidate.short_name()
                );
                if local.id != candidate.id {
                    continue;
                }
                match self.probe(version, candidate, selector) {
                    Probe::Chosen(outcome) => return Some(outcome),
                    // any failure abandons the rest of the peer list for this local suite
                    Probe::Rejected | Probe::NoCertificate => break,
                }
            }
        }
        None
    }

    // version range and encrypt-then-MAC filters
    fn admits(&self, entry: &CipherSuiteEntry, version: ProtocolVersion) -> bool {
        if !entry.supports_version(version, self.is_dtls()) {
            log::trace!("{} not valid for {}", entry.id, version);
            return false;
        }
        if self.priorities.force_etm
            && !self.state.etm_negotiated
            && entry.cipher.cipher_type() == CipherType::Block
        {
            log::trace!("{} needs encrypt-then-MAC", entry.id);
            return false;
        }
        true
    }

    fn probe(
        &self,
        version: ProtocolVersion,
        candidate: &'static CipherSuiteEntry,
        selector: &mut dyn CertificateSelector,
    ) -> Probe {
        let credential_type = match candidate.kx {
            Some(kx) if !version.tls13_semantics() => kx.server_credential_type(),
            _ => CredentialType::Certificate,
        };

        let status = kx_is_ok(&self.state, &self.credentials, candidate.kx, credential_type);
        if !status.is_ok() {
            log::trace!("{} rejected: {}", candidate.id, status);
            return Probe::Rejected;
        }

        let mut certificate = None;
        if let Some(binder_prf) = self.state.psk_binder_prf {
            if binder_prf != candidate.prf {
                log::trace!(
                    "{} rejected: PRF {} does not match the PSK binder {}",
                    candidate.id,
                    candidate.prf,
                    binder_prf
                );
                return Probe::Rejected;
            }
        } else if credential_type == CredentialType::Certificate {
            match selector.select_certificate(candidate) {
                Ok(index) => certificate = Some(index),
                Err(err) => {
                    log::trace!("{} rejected: {}", candidate.id, err);
                    return Probe::NoCertificate;
                }
            }
        }

        Probe::Chosen(NegotiatedSuite {
            suite: candidate,
            group: status.group(),
            certificate,
        })
    }
}

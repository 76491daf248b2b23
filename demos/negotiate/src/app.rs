use std::sync::Arc;

use anyhow::Result;

use suite_negotiator::credentials::{
    CertificateCredentials, CertificateKeyType, CertifiedKey, CredentialStore, DhParamsSource,
    SecurityParameter,
};
use suite_negotiator::extension::supported_groups::SupportedGroups;
use suite_negotiator::{PeerList, Priorities, Session, Transport};

pub struct App {
    client: Session,
    server: Session,
}

impl App {
    pub fn new(priorities: Priorities, transport: Transport) -> Self {
        let priorities = Arc::new(priorities);

        let client_credentials =
            CredentialStore::new().with_certificate(CertificateCredentials::default());
        let server_credentials = CredentialStore::new().with_certificate(CertificateCredentials {
            certificates: vec![
                CertifiedKey {
                    key_type: CertificateKeyType::Ecdsa,
                    chain: vec![],
                },
                CertifiedKey {
                    key_type: CertificateKeyType::Rsa,
                    chain: vec![],
                },
            ],
            dh_params: Some(DhParamsSource::SecurityLevel(SecurityParameter::Medium)),
        });

        App {
            client: Session::new(transport, priorities.clone(), Arc::new(client_credentials)),
            server: Session::new(transport, priorities, Arc::new(server_credentials)),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut cipher_suites = vec![];
        let offer = self.client.client_cipher_suites(&mut cipher_suites, true)?;
        info!(
            "Client send -> {} cipher suites in {} bytes",
            offer.suites, offer.written
        );

        let mut supported_groups = vec![];
        SupportedGroups {
            groups: self.client.priorities().groups.clone(),
        }
        .marshal(&mut supported_groups)?;

        let peer = PeerList::unmarshal(&mut cipher_suites.as_slice())?;
        let peer_groups = SupportedGroups::unmarshal(&mut supported_groups.as_slice())?;
        info!(
            "Server recv <- {} known cipher suites, {} groups",
            peer.len(),
            peer_groups.groups.len()
        );

        let is_dtls = self.server.is_dtls();
        self.server.state.version = self.server.priorities().version_max(is_dtls);
        self.server.select_candidate_groups(&peer_groups);

        let certificates = self
            .server
            .credentials()
            .certificate
            .clone()
            .unwrap_or_default();
        let mut selector = &certificates;

        match self.server.negotiate(&peer, &mut selector) {
            Ok(suite) => {
                info!(
                    "Server selected {} ({}) for {:?}",
                    suite.id,
                    suite.display_name,
                    self.server.state.version
                );
                if let Some(group) = self.server.state.group {
                    info!("Key exchange group: {}", group);
                }
                if let Some(index) = self.server.state.certificate {
                    info!("Certificate: {:?}", certificates.certificates[index].key_type);
                }
                Ok(())
            }
            Err(error) => {
                warn!("Server Error: {}, sending {} alert", error, error.alert());
                Err(error.into())
            }
        }
    }
}

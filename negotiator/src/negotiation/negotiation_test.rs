use super::*;

use crate::algorithm::PrfAlgorithm;
use crate::cipher_suite::{lookup_by_id, CipherSuiteId};
use crate::config::{Priorities, PrioritiesBuilder};
use crate::credentials::*;
use crate::priority::PriorityList;
use crate::session::Transport;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

fn ids(raw: &[u16]) -> Vec<CipherSuiteId> {
    raw.iter().map(|id| CipherSuiteId(*id)).collect()
}

fn suite(id: u16) -> &'static CipherSuiteEntry {
    lookup_by_id(CipherSuiteId(id)).expect("known suite")
}

fn local(raw: &[u16]) -> PrioritiesBuilder {
    let mut builder = Priorities::builder();
    builder.cipher_suites(PriorityList::from_ids(&ids(raw)).expect("known suites"));
    builder
}

fn peer(raw: &[u16]) -> PeerList {
    PeerList::from_ids(&ids(raw))
}

fn certificates() -> CertificateCredentials {
    CertificateCredentials {
        certificates: vec![
            CertifiedKey {
                key_type: CertificateKeyType::Rsa,
                chain: vec![vec![0x30, 0x82, 0x01]],
            },
            CertifiedKey {
                key_type: CertificateKeyType::Ecdsa,
                chain: vec![vec![0x30, 0x82, 0x02]],
            },
        ],
        dh_params: None,
    }
}

fn server(
    priorities: &PrioritiesBuilder,
    credentials: CredentialStore,
    version: ProtocolVersion,
) -> Result<Session> {
    let transport = if version.is_dtls() {
        Transport::Dtls
    } else {
        Transport::Tls
    };
    let mut session = Session::new(
        transport,
        Arc::new(priorities.finish()?),
        Arc::new(credentials),
    );
    session.state.version = Some(version);
    Ok(session)
}

fn accept_all(_: &CipherSuiteEntry) -> Result<usize> {
    Ok(0)
}

#[test]
fn test_precedence_decides_between_mutual_suites() -> Result<()> {
    let credentials = CredentialStore::new().with_certificate(certificates());

    let tests = vec![
        (false, 0x002f), // peer order wins
        (true, 0x009c),  // local order wins
    ];

    for (server_precedence, expected) in tests {
        let mut priorities = local(&[0x009c, 0x002f]);
        priorities.server_precedence(server_precedence);
        let mut session = server(&priorities, credentials.clone(), ProtocolVersion::Tls1_2)?;

        let outcome =
            session.find_common_cipher_suite(&peer(&[0x002f, 0x009c]), &mut accept_all)?;
        assert_eq!(
            outcome.suite.id,
            CipherSuiteId(expected),
            "server_precedence={}",
            server_precedence
        );
    }
    Ok(())
}

#[test]
fn test_tls13_only_suite_is_filtered_by_version() -> Result<()> {
    let credentials = CredentialStore::new().with_certificate(certificates());

    for server_precedence in [false, true] {
        let mut priorities = local(&[0x1301, 0x002f]);
        priorities.server_precedence(server_precedence);
        let mut session = server(&priorities, credentials.clone(), ProtocolVersion::Tls1_2)?;

        let outcome = session.find_common_cipher_suite(&peer(&[0x002f]), &mut accept_all)?;
        assert_eq!(outcome.suite.canonical_name, "TLS_RSA_WITH_AES_128_CBC_SHA");
        assert_eq!(outcome.group, None);
        assert_eq!(outcome.certificate, Some(0));
    }
    Ok(())
}

#[test]
fn test_ecdhe_rsa_gcm_version_scoping() -> Result<()> {
    let credentials = CredentialStore::new().with_certificate(certificates());
    let priorities = local(&[0xc02f]);

    let mut tls13 = server(&priorities, credentials.clone(), ProtocolVersion::Tls1_3)?;
    tls13.state.cand_ec_group = Some(NamedGroup::X25519);
    assert_eq!(
        tls13.find_common_cipher_suite(&peer(&[0xc02f]), &mut accept_all),
        Err(Error::ErrNoCipherSuites)
    );

    let mut tls12 = server(&priorities, credentials, ProtocolVersion::Tls1_2)?;
    tls12.state.supported_groups_received = true;
    tls12.state.cand_ec_group = Some(NamedGroup::X25519);
    let outcome = tls12.find_common_cipher_suite(&peer(&[0xc02f]), &mut accept_all)?;
    assert_eq!(outcome.suite.id, CipherSuiteId::from_bytes([0xc0, 0x2f]));
    assert_eq!(outcome.group, Some(NamedGroup::X25519));
    Ok(())
}

#[test]
fn test_default_ec_group_without_supported_groups() -> Result<()> {
    let credentials = CredentialStore::new().with_certificate(certificates());
    let priorities = local(&[0xc02f, 0x002f]);

    let mut legacy = server(&priorities, credentials.clone(), ProtocolVersion::Tls1_2)?;
    let outcome = legacy.find_common_cipher_suite(&peer(&[0xc02f, 0x002f]), &mut accept_all)?;
    assert_eq!(outcome.suite.id, CipherSuiteId(0xc02f));
    assert_eq!(outcome.group, Some(DEFAULT_EC_GROUP));
    assert_eq!(legacy.state.cand_ec_group, Some(NamedGroup::Secp256r1));

    // the extension was sent but no curve matched
    let mut modern = server(&priorities, credentials.clone(), ProtocolVersion::Tls1_2)?;
    modern.state.supported_groups_received = true;
    let outcome = modern.find_common_cipher_suite(&peer(&[0xc02f, 0x002f]), &mut accept_all)?;
    assert_eq!(outcome.suite.id, CipherSuiteId(0x002f));
    assert_eq!(modern.state.cand_ec_group, None);

    let mut tls13 = server(&local(&[0x1301]), credentials, ProtocolVersion::Tls1_3)?;
    let outcome = tls13.find_common_cipher_suite(&peer(&[0x1301]), &mut accept_all)?;
    assert_eq!(outcome.suite.id, CipherSuiteId(0x1301));
    assert_eq!(outcome.group, None);
    assert_eq!(tls13.state.cand_ec_group, None);
    Ok(())
}

#[test]
fn test_dhe_requires_params_or_group() -> Result<()> {
    let priorities = local(&[0x009e, 0x002f]);
    let offered = peer(&[0x009e, 0x002f]);

    // no parameters of any kind
    let bare = CredentialStore::new().with_certificate(certificates());
    let mut session = server(&priorities, bare.clone(), ProtocolVersion::Tls1_2)?;
    let outcome = session.find_common_cipher_suite(&offered, &mut accept_all)?;
    assert_eq!(outcome.suite.id, CipherSuiteId(0x002f));

    // static parameters
    let with_params = CredentialStore::new().with_certificate(CertificateCredentials {
        dh_params: Some(DhParamsSource::SecurityLevel(SecurityParameter::Medium)),
        ..certificates()
    });
    let mut session = server(&priorities, with_params.clone(), ProtocolVersion::Tls1_2)?;
    let outcome = session.find_common_cipher_suite(&offered, &mut accept_all)?;
    assert_eq!(outcome.suite.id, CipherSuiteId(0x009e));
    assert_eq!(outcome.group, None);

    // static parameters are no good once the peer advertised FFDHE groups
    let mut session = server(&priorities, with_params, ProtocolVersion::Tls1_2)?;
    session.state.have_ffdhe = true;
    let outcome = session.find_common_cipher_suite(&offered, &mut accept_all)?;
    assert_eq!(outcome.suite.id, CipherSuiteId(0x002f));

    // a negotiated named group needs no parameters
    let mut session = server(&priorities, bare, ProtocolVersion::Tls1_2)?;
    session.state.have_ffdhe = true;
    session.state.cand_dh_group = Some(NamedGroup::Ffdhe2048);
    let outcome = session.find_common_cipher_suite(&offered, &mut accept_all)?;
    assert_eq!(outcome.suite.id, CipherSuiteId(0x009e));
    assert_eq!(outcome.group, Some(NamedGroup::Ffdhe2048));
    Ok(())
}

#[test]
fn test_psk_binder_prf_must_match() -> Result<()> {
    let credentials = CredentialStore::new()
        .with_certificate(certificates())
        .with_psk(PskCredentials::default());

    for server_precedence in [false, true] {
        let mut priorities = local(&[0x1302, 0x1301]);
        priorities.server_precedence(server_precedence);
        let mut session = server(&priorities, credentials.clone(), ProtocolVersion::Tls1_3)?;
        session.state.psk_binder_prf = Some(PrfAlgorithm::Sha256);

        let mut probes = 0;
        let mut selector = |_: &CipherSuiteEntry| -> Result<usize> {
            probes += 1;
            Ok(0)
        };
        let outcome =
            session.find_common_cipher_suite(&peer(&[0x1302, 0x1301]), &mut selector)?;
        assert_eq!(outcome.suite.id, CipherSuiteId(0x1301));
        assert_eq!(outcome.suite.prf, PrfAlgorithm::Sha256);
        assert_eq!(outcome.certificate, None);
        assert_eq!(probes, 0, "a selected PSK skips certificate selection");
    }

    let mut session = server(&local(&[0x00a9]), credentials, ProtocolVersion::Tls1_2)?;
    session.state.psk_binder_prf = Some(PrfAlgorithm::Sha256);
    assert_eq!(
        session.find_common_cipher_suite(&peer(&[0x00a9]), &mut accept_all),
        Err(Error::ErrNoCipherSuites)
    );
    Ok(())
}

#[test]
fn test_certificate_failure_moves_to_next_candidate() -> Result<()> {
    let rsa_only = CertificateCredentials {
        certificates: vec![CertifiedKey {
            key_type: CertificateKeyType::Rsa,
            chain: vec![],
        }],
        dh_params: None,
    };
    let credentials = CredentialStore::new().with_certificate(rsa_only.clone());

    for server_precedence in [false, true] {
        let mut priorities = local(&[0xc02b, 0xc02f]);
        priorities.server_precedence(server_precedence);
        let mut session = server(&priorities, credentials.clone(), ProtocolVersion::Tls1_2)?;

        let mut probed = vec![];
        let mut selector = |suite: &CipherSuiteEntry| -> Result<usize> {
            probed.push(suite.id);
            let mut credentials = &rsa_only;
            credentials.select_certificate(suite)
        };
        let outcome =
            session.find_common_cipher_suite(&peer(&[0xc02b, 0xc02f]), &mut selector)?;
        assert_eq!(outcome.suite.id, CipherSuiteId(0xc02f));
        assert_eq!(outcome.certificate, Some(0));
        assert_eq!(probed, ids(&[0xc02b, 0xc02f]));
    }

    let mut session = server(&local(&[0xc02b]), credentials, ProtocolVersion::Tls1_2)?;
    assert_eq!(
        session.find_common_cipher_suite(&peer(&[0xc02b]), &mut NoCertificate),
        Err(Error::ErrNoCipherSuites)
    );
    Ok(())
}

#[test]
fn test_non_certificate_exchanges_skip_selection() -> Result<()> {
    let credentials = CredentialStore::new().with_anon(AnonCredentials {
        dh_params: Some(DhParamsSource::Explicit(vec![0x30, 0x06])),
    });
    let mut session = server(&local(&[0x0034]), credentials, ProtocolVersion::Tls1_2)?;

    let outcome = session.find_common_cipher_suite(&peer(&[0x0034]), &mut NoCertificate)?;
    assert_eq!(outcome.suite.kx, Some(crate::kx::KeyExchangeAlgorithm::AnonDh));
    assert_eq!(outcome.certificate, None);
    Ok(())
}

#[test]
fn test_srp_rsa_needs_srp_credentials() -> Result<()> {
    let priorities = local(&[0xc01e]);
    let offered = peer(&[0xc01e]);

    let certificate_only = CredentialStore::new().with_certificate(certificates());
    let mut session = server(&priorities, certificate_only.clone(), ProtocolVersion::Tls1_2)?;
    assert_eq!(
        session.find_common_cipher_suite(&offered, &mut accept_all),
        Err(Error::ErrNoCipherSuites)
    );

    let with_srp = certificate_only.with_srp(SrpCredentials {
        username: "alice".to_owned(),
    });
    let mut session = server(&priorities, with_srp, ProtocolVersion::Tls1_2)?;
    let outcome = session.find_common_cipher_suite(&offered, &mut accept_all)?;
    assert_eq!(outcome.suite.id, CipherSuiteId(0xc01e));
    assert_eq!(outcome.certificate, Some(0));
    Ok(())
}

#[test]
fn test_force_etm_filters_block_ciphers() -> Result<()> {
    let credentials = CredentialStore::new().with_certificate(certificates());
    let mut priorities = local(&[0x002f, 0x0005, 0x009c]);
    priorities.force_etm(true);
    let offered = peer(&[0x002f, 0x0005, 0x009c]);

    let mut session = server(&priorities, credentials.clone(), ProtocolVersion::Tls1_2)?;
    let outcome = session.find_common_cipher_suite(&offered, &mut accept_all)?;
    assert_eq!(outcome.suite.id, CipherSuiteId(0x0005), "stream ciphers are exempt");

    let mut session = server(&priorities, credentials, ProtocolVersion::Tls1_2)?;
    session.state.etm_negotiated = true;
    let outcome = session.find_common_cipher_suite(&offered, &mut accept_all)?;
    assert_eq!(outcome.suite.id, CipherSuiteId(0x002f));
    Ok(())
}

#[test]
fn test_dtls_uses_dtls_ranges() -> Result<()> {
    let credentials = CredentialStore::new().with_certificate(certificates());
    let priorities = local(&[0x0005, 0x1301, 0x009c, 0x002f]);
    let offered = peer(&[0x0005, 0x1301, 0x009c, 0x002f]);

    let mut dtls12 = server(&priorities, credentials.clone(), ProtocolVersion::Dtls1_2)?;
    let outcome = dtls12.find_common_cipher_suite(&offered, &mut accept_all)?;
    assert_eq!(outcome.suite.id, CipherSuiteId(0x009c));

    let mut dtls10 = server(&priorities, credentials, ProtocolVersion::Dtls1_0)?;
    let outcome = dtls10.find_common_cipher_suite(&offered, &mut accept_all)?;
    assert_eq!(outcome.suite.id, CipherSuiteId(0x002f));
    Ok(())
}

#[test]
fn test_no_version_or_no_overlap() -> Result<()> {
    let credentials = CredentialStore::new().with_certificate(certificates());
    let mut session = server(&local(&[0x002f]), credentials.clone(), ProtocolVersion::Tls1_2)?;
    session.state.version = None;
    assert_eq!(
        session.find_common_cipher_suite(&peer(&[0x002f]), &mut accept_all),
        Err(Error::ErrNoCipherSuites)
    );

    let mut session = server(&local(&[0x002f]), credentials, ProtocolVersion::Tls1_2)?;
    let err = session
        .find_common_cipher_suite(&peer(&[0x009c]), &mut accept_all)
        .expect_err("nothing in common");
    assert_eq!(err, Error::ErrNoCipherSuites);
    assert_eq!(err.alert(), crate::alert::AlertDescription::HandshakeFailure);
    Ok(())
}

#[test]
fn test_negotiate_persists_outcome() -> Result<()> {
    let credentials = CredentialStore::new().with_certificate(certificates());
    let mut session = server(&local(&[0xc02b]), credentials, ProtocolVersion::Tls1_2)?;
    session.state.supported_groups_received = true;
    session.state.cand_ec_group = Some(NamedGroup::Secp384r1);

    let mut selector = |suite: &CipherSuiteEntry| -> Result<usize> {
        let mut credentials = &certificates();
        credentials.select_certificate(suite)
    };
    let chosen = session.negotiate(&peer(&[0xc02b]), &mut selector)?;

    assert_eq!(chosen.id, CipherSuiteId(0xc02b));
    assert_eq!(session.state.cipher_suite, Some(suite(0xc02b)));
    assert_eq!(session.state.group, Some(NamedGroup::Secp384r1));
    assert_eq!(session.state.certificate, Some(1));
    Ok(())
}

#[test]
fn test_negotiation_is_deterministic() -> Result<()> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
    let credentials = CredentialStore::new()
        .with_certificate(CertificateCredentials {
            dh_params: Some(DhParamsSource::SecurityLevel(SecurityParameter::High)),
            ..certificates()
        })
        .with_psk(PskCredentials::default())
        .with_anon(AnonCredentials::default());
    let pool: Vec<u16> = vec![
        0x1301, 0x1302, 0x002f, 0x009c, 0x009d, 0x009e, 0xc02b, 0xc02f, 0xc013, 0x0034, 0x00a8,
        0x0005,
    ];

    for _ in 0..64 {
        let mut local_ids = pool.clone();
        local_ids.shuffle(&mut rng);
        local_ids.truncate(rng.gen_range(1..=pool.len()));
        let mut peer_ids = pool.clone();
        peer_ids.shuffle(&mut rng);
        peer_ids.truncate(rng.gen_range(1..=pool.len()));

        let mut priorities = local(&local_ids);
        priorities.server_precedence(rng.gen());
        let version = if rng.gen() {
            ProtocolVersion::Tls1_2
        } else {
            ProtocolVersion::Tls1_3
        };
        let offered = peer(&peer_ids);

        let mut first = server(&priorities, credentials.clone(), version)?;
        let mut second = server(&priorities, credentials.clone(), version)?;
        let a = first.find_common_cipher_suite(&offered, &mut accept_all);
        let b = second.find_common_cipher_suite(&offered, &mut accept_all);
        assert_eq!(a, b);

        if let Ok(outcome) = a {
            assert!(local_ids.contains(&outcome.suite.id.0));
            assert!(peer_ids.contains(&outcome.suite.id.0));
            assert!(outcome.suite.supports_version(version, false));
        }
    }
    Ok(())
}

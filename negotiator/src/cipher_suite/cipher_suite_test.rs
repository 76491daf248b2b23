use super::*;

use std::collections::HashSet;

#[test]
fn test_cipher_suite_ids_are_unique() {
    let mut seen = HashSet::new();
    for entry in cipher_suites() {
        assert!(seen.insert(entry.id), "duplicate id {}", entry.id);
    }
    assert_eq!(seen.len(), count());
}

#[test]
fn test_lookup_by_id_returns_the_row() {
    for entry in cipher_suites() {
        let found = lookup_by_id(entry.id).expect("every row is reachable by id");
        assert_eq!(found, entry, "lookup of {}", entry.id);
    }
    assert_eq!(lookup_by_id(CipherSuiteId(0xfefe)), None);
    assert_eq!(lookup_by_id(TLS_EMPTY_RENEGOTIATION_INFO_SCSV), None);
    assert_eq!(lookup_by_id(TLS_FALLBACK_SCSV), None);
}

#[test]
fn test_lookup_by_triple_matches_the_triple() {
    for entry in cipher_suites() {
        match entry.kx {
            Some(kx) => {
                let found = lookup_by_triple(kx, entry.cipher, entry.mac)
                    .expect("legacy rows are reachable by triple");
                assert_eq!(found.kx, entry.kx);
                assert_eq!(found.cipher, entry.cipher);
                assert_eq!(found.mac, entry.mac);
                assert!(
                    index_of(found) <= index_of(entry),
                    "triple lookup of {} found a later row",
                    entry.display_name
                );
            }
            None => {
                assert_eq!(entry.min_version, ProtocolVersion::Tls1_3);
                assert_eq!(entry.mac, MacAlgorithm::Aead);
            }
        }
    }
}

#[test]
fn test_tls13_rows_have_no_dtls_range() {
    for entry in cipher_suites().iter().filter(|e| e.kx.is_none()) {
        assert_eq!(entry.max_version, ProtocolVersion::Tls1_3);
        assert_eq!(entry.min_dtls_version, None);
        assert_eq!(entry.max_dtls_version, None);
        assert!(!entry.supports_version(ProtocolVersion::Tls1_2, false));
        assert!(entry.supports_version(ProtocolVersion::Tls1_3, false));
    }
}

#[test]
fn test_cipher_suite_table_layout() {
    assert_eq!(count(), 188);

    let first = entry_at(0).expect("table is not empty");
    assert_eq!(first.id, CipherSuiteId(0x1301));
    assert_eq!(first.short_name(), "AES_128_GCM_SHA256");

    let last = entry_at(count() - 1).expect("table is not empty");
    assert_eq!(last.id, CipherSuiteId(0xc102));
    assert_eq!(last.kx, Some(KeyExchangeAlgorithm::VkoGost12));
    assert_eq!(last.prf, PrfAlgorithm::Streebog256);
    assert_eq!(last.min_dtls_version, None);

    assert_eq!(entry_at(count()), None);
}

#[test]
fn test_ecdhe_rsa_aes_128_gcm_row() {
    let entry = lookup_by_id(CipherSuiteId::from_bytes([0xc0, 0x2f])).expect("known suite");

    assert_eq!(entry.display_name, "TLS_ECDHE_RSA_AES_128_GCM_SHA256");
    assert_eq!(entry.canonical_name, "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256");
    assert_eq!(entry.kx, Some(KeyExchangeAlgorithm::EcdheRsa));
    assert_eq!(entry.cipher, CipherAlgorithm::Aes128Gcm);
    assert_eq!(entry.mac, MacAlgorithm::Aead);
    assert!(entry.supports_version(ProtocolVersion::Tls1_2, false));
    assert!(!entry.supports_version(ProtocolVersion::Tls1_1, false));
    assert!(!entry.supports_version(ProtocolVersion::Tls1_3, false));
    assert!(entry.supports_version(ProtocolVersion::Dtls1_2, true));
    assert!(!entry.supports_version(ProtocolVersion::Dtls1_0, true));
}

#[test]
fn test_cipher_suite_get_name_and_id() -> Result<()> {
    let tests = vec![
        (
            KeyExchangeAlgorithm::Rsa,
            CipherAlgorithm::Aes128Cbc,
            MacAlgorithm::Sha1,
            "RSA_AES_128_CBC_SHA1",
            CipherSuiteId(0x002f),
        ),
        (
            KeyExchangeAlgorithm::EcdheEcdsa,
            CipherAlgorithm::Aes256Gcm,
            MacAlgorithm::Aead,
            "ECDHE_ECDSA_AES_256_GCM_SHA384",
            CipherSuiteId(0xc02c),
        ),
        (
            KeyExchangeAlgorithm::Psk,
            CipherAlgorithm::Chacha20Poly1305,
            MacAlgorithm::Aead,
            "PSK_CHACHA20_POLY1305",
            CipherSuiteId(0xccab),
        ),
    ];

    for (kx, cipher, mac, name, id) in tests {
        assert_eq!(cipher_suite_get_name(kx, cipher, mac), Some(name));
        assert_eq!(cipher_suite_get_id(kx, cipher, mac)?, id, "id of {}", name);
    }

    assert_eq!(
        cipher_suite_get_name(KeyExchangeAlgorithm::Srp, CipherAlgorithm::Aes128Gcm, MacAlgorithm::Aead),
        None
    );
    assert_eq!(
        cipher_suite_get_id(KeyExchangeAlgorithm::Srp, CipherAlgorithm::Aes128Gcm, MacAlgorithm::Aead),
        Err(Error::ErrInvalidRequest)
    );

    Ok(())
}

#[test]
fn test_cipher_suite_info_enumeration() {
    let mut index = 0;
    while let Some(info) = cipher_suite_info(index) {
        let entry = entry_at(index).expect("info and entry_at agree");
        assert_eq!(info.id, entry.id);
        assert_eq!(info.name, entry.display_name);
        assert!(info.name.starts_with("TLS_"), "{}", info.name);
        assert_eq!(info.min_version, entry.min_version);
        index += 1;
    }
    assert_eq!(index, count());
}

#[test]
fn test_lookup_by_name_forms() {
    let tests = vec![
        "TLS_RSA_AES_128_CBC_SHA1",
        "TLS_RSA_WITH_AES_128_CBC_SHA",
        "RSA_AES_128_CBC_SHA1",
        "tls_rsa_with_aes_128_cbc_sha",
    ];

    for name in tests {
        let entry = lookup_by_name(name).expect("name resolves");
        assert_eq!(entry.id, CipherSuiteId(0x002f), "resolving {}", name);
    }
    assert_eq!(lookup_by_name("TLS_RSA_WITH_ROT13"), None);
}

#[test]
fn test_lookup_helpers_by_id() {
    assert_eq!(
        lookup_kx_by_id(CipherSuiteId(0x0033)),
        Some(KeyExchangeAlgorithm::DheRsa)
    );
    assert_eq!(lookup_kx_by_id(CipherSuiteId(0x1302)), None);
    assert_eq!(
        lookup_name_by_id(CipherSuiteId(0x1302)),
        Some("AES_256_GCM_SHA384")
    );
}

#[test]
fn test_cipher_suite_id_string() {
    let tests = vec![
        (CipherSuiteId(0xc02f), "c0.2f"),
        (TLS_EMPTY_RENEGOTIATION_INFO_SCSV, "00.ff"),
        (TLS_FALLBACK_SCSV, "56.00"),
    ];

    for (id, expected) in tests {
        assert_eq!(id.to_string(), expected);
        assert_eq!(CipherSuiteId::from_bytes(id.to_bytes()), id);
    }
    assert!(TLS_FALLBACK_SCSV.is_scsv());
    assert!(!CipherSuiteId(0x002f).is_scsv());
}

use super::{suite, suite_prf, suite_tls13, CipherSuiteEntry};
use crate::algorithm::{CipherAlgorithm as Cipher, MacAlgorithm as Mac, PrfAlgorithm as Prf};
use crate::kx::KeyExchangeAlgorithm as Kx;
use crate::protocol_version::ProtocolVersion as V;

pub(crate) static CIPHER_SUITES: &[CipherSuiteEntry] = &[
    // TLS 1.3
    suite_tls13(
        [0x13, 0x01],
        "TLS_AES_128_GCM_SHA256",
        "TLS_AES_128_GCM_SHA256",
        Cipher::Aes128Gcm,
        Prf::Sha256,
    ),
    suite_tls13(
        [0x13, 0x02],
        "TLS_AES_256_GCM_SHA384",
        "TLS_AES_256_GCM_SHA384",
        Cipher::Aes256Gcm,
        Prf::Sha384,
    ),
    suite_tls13(
        [0x13, 0x03],
        "TLS_CHACHA20_POLY1305_SHA256",
        "TLS_CHACHA20_POLY1305_SHA256",
        Cipher::Chacha20Poly1305,
        Prf::Sha256,
    ),
    suite_tls13(
        [0x13, 0x04],
        "TLS_AES_128_CCM_SHA256",
        "TLS_AES_128_CCM_SHA256",
        Cipher::Aes128Ccm,
        Prf::Sha256,
    ),
    suite_tls13(
        [0x13, 0x05],
        "TLS_AES_128_CCM_8_SHA256",
        "TLS_AES_128_CCM_8_SHA256",
        Cipher::Aes128Ccm8,
        Prf::Sha256,
    ),
    // RSA-NULL
    suite(
        [0x00, 0x01],
        "TLS_RSA_NULL_MD5",
        "TLS_RSA_WITH_NULL_MD5",
        Cipher::Null,
        Kx::Rsa,
        Mac::Md5,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x02],
        "TLS_RSA_NULL_SHA1",
        "TLS_RSA_WITH_NULL_SHA",
        Cipher::Null,
        Kx::Rsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x3B],
        "TLS_RSA_NULL_SHA256",
        "TLS_RSA_WITH_NULL_SHA256",
        Cipher::Null,
        Kx::Rsa,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    // RSA
    suite(
        [0x00, 0x05],
        "TLS_RSA_ARCFOUR_128_SHA1",
        "TLS_RSA_WITH_RC4_128_SHA",
        Cipher::Arcfour128,
        Kx::Rsa,
        Mac::Sha1,
        V::Ssl3,
        None,
    ),
    suite(
        [0x00, 0x04],
        "TLS_RSA_ARCFOUR_128_MD5",
        "TLS_RSA_WITH_RC4_128_MD5",
        Cipher::Arcfour128,
        Kx::Rsa,
        Mac::Md5,
        V::Ssl3,
        None,
    ),
    suite(
        [0x00, 0x0A],
        "TLS_RSA_3DES_EDE_CBC_SHA1",
        "TLS_RSA_WITH_3DES_EDE_CBC_SHA",
        Cipher::TripleDesCbc,
        Kx::Rsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x2F],
        "TLS_RSA_AES_128_CBC_SHA1",
        "TLS_RSA_WITH_AES_128_CBC_SHA",
        Cipher::Aes128Cbc,
        Kx::Rsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x35],
        "TLS_RSA_AES_256_CBC_SHA1",
        "TLS_RSA_WITH_AES_256_CBC_SHA",
        Cipher::Aes256Cbc,
        Kx::Rsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0xBA],
        "TLS_RSA_CAMELLIA_128_CBC_SHA256",
        "TLS_RSA_WITH_CAMELLIA_128_CBC_SHA256",
        Cipher::Camellia128Cbc,
        Kx::Rsa,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0x00, 0xC0],
        "TLS_RSA_CAMELLIA_256_CBC_SHA256",
        "TLS_RSA_WITH_CAMELLIA_256_CBC_SHA256",
        Cipher::Camellia256Cbc,
        Kx::Rsa,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0x00, 0x41],
        "TLS_RSA_CAMELLIA_128_CBC_SHA1",
        "TLS_RSA_WITH_CAMELLIA_128_CBC_SHA",
        Cipher::Camellia128Cbc,
        Kx::Rsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x84],
        "TLS_RSA_CAMELLIA_256_CBC_SHA1",
        "TLS_RSA_WITH_CAMELLIA_256_CBC_SHA",
        Cipher::Camellia256Cbc,
        Kx::Rsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x3C],
        "TLS_RSA_AES_128_CBC_SHA256",
        "TLS_RSA_WITH_AES_128_CBC_SHA256",
        Cipher::Aes128Cbc,
        Kx::Rsa,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0x00, 0x3D],
        "TLS_RSA_AES_256_CBC_SHA256",
        "TLS_RSA_WITH_AES_256_CBC_SHA256",
        Cipher::Aes256Cbc,
        Kx::Rsa,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    // GCM
    suite(
        [0x00, 0x9C],
        "TLS_RSA_AES_128_GCM_SHA256",
        "TLS_RSA_WITH_AES_128_GCM_SHA256",
        Cipher::Aes128Gcm,
        Kx::Rsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0x00, 0x9D],
        "TLS_RSA_AES_256_GCM_SHA384",
        "TLS_RSA_WITH_AES_256_GCM_SHA384",
        Cipher::Aes256Gcm,
        Kx::Rsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0xC0, 0x7A],
        "TLS_RSA_CAMELLIA_128_GCM_SHA256",
        "TLS_RSA_WITH_CAMELLIA_128_GCM_SHA256",
        Cipher::Camellia128Gcm,
        Kx::Rsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x7B],
        "TLS_RSA_CAMELLIA_256_GCM_SHA384",
        "TLS_RSA_WITH_CAMELLIA_256_GCM_SHA384",
        Cipher::Camellia256Gcm,
        Kx::Rsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    // CCM
    suite(
        [0xC0, 0x9C],
        "TLS_RSA_AES_128_CCM",
        "TLS_RSA_WITH_AES_128_CCM",
        Cipher::Aes128Ccm,
        Kx::Rsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0x9D],
        "TLS_RSA_AES_256_CCM",
        "TLS_RSA_WITH_AES_256_CCM",
        Cipher::Aes256Ccm,
        Kx::Rsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    // CCM_8
    suite(
        [0xC0, 0xA0],
        "TLS_RSA_AES_128_CCM_8",
        "TLS_RSA_WITH_AES_128_CCM_8",
        Cipher::Aes128Ccm8,
        Kx::Rsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0xA1],
        "TLS_RSA_AES_256_CCM_8",
        "TLS_RSA_WITH_AES_256_CCM_8",
        Cipher::Aes256Ccm8,
        Kx::Rsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    // DHE_DSS
    suite(
        [0x00, 0x66],
        "TLS_DHE_DSS_ARCFOUR_128_SHA1",
        "TLS_DHE_DSS_RC4_128_SHA",
        Cipher::Arcfour128,
        Kx::DheDss,
        Mac::Sha1,
        V::Ssl3,
        None,
    ),
    suite(
        [0x00, 0x13],
        "TLS_DHE_DSS_3DES_EDE_CBC_SHA1",
        "TLS_DHE_DSS_WITH_3DES_EDE_CBC_SHA",
        Cipher::TripleDesCbc,
        Kx::DheDss,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x32],
        "TLS_DHE_DSS_AES_128_CBC_SHA1",
        "TLS_DHE_DSS_WITH_AES_128_CBC_SHA",
        Cipher::Aes128Cbc,
        Kx::DheDss,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x38],
        "TLS_DHE_DSS_AES_256_CBC_SHA1",
        "TLS_DHE_DSS_WITH_AES_256_CBC_SHA",
        Cipher::Aes256Cbc,
        Kx::DheDss,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0xBD],
        "TLS_DHE_DSS_CAMELLIA_128_CBC_SHA256",
        "TLS_DHE_DSS_WITH_CAMELLIA_128_CBC_SHA256",
        Cipher::Camellia128Cbc,
        Kx::DheDss,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0x00, 0xC3],
        "TLS_DHE_DSS_CAMELLIA_256_CBC_SHA256",
        "TLS_DHE_DSS_WITH_CAMELLIA_256_CBC_SHA256",
        Cipher::Camellia256Cbc,
        Kx::DheDss,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0x00, 0x44],
        "TLS_DHE_DSS_CAMELLIA_128_CBC_SHA1",
        "TLS_DHE_DSS_WITH_CAMELLIA_128_CBC_SHA",
        Cipher::Camellia128Cbc,
        Kx::DheDss,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x87],
        "TLS_DHE_DSS_CAMELLIA_256_CBC_SHA1",
        "TLS_DHE_DSS_WITH_CAMELLIA_256_CBC_SHA",
        Cipher::Camellia256Cbc,
        Kx::DheDss,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x40],
        "TLS_DHE_DSS_AES_128_CBC_SHA256",
        "TLS_DHE_DSS_WITH_AES_128_CBC_SHA256",
        Cipher::Aes128Cbc,
        Kx::DheDss,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0x00, 0x6A],
        "TLS_DHE_DSS_AES_256_CBC_SHA256",
        "TLS_DHE_DSS_WITH_AES_256_CBC_SHA256",
        Cipher::Aes256Cbc,
        Kx::DheDss,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    // GCM
    suite(
        [0x00, 0xA2],
        "TLS_DHE_DSS_AES_128_GCM_SHA256",
        "TLS_DHE_DSS_WITH_AES_128_GCM_SHA256",
        Cipher::Aes128Gcm,
        Kx::DheDss,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0x00, 0xA3],
        "TLS_DHE_DSS_AES_256_GCM_SHA384",
        "TLS_DHE_DSS_WITH_AES_256_GCM_SHA384",
        Cipher::Aes256Gcm,
        Kx::DheDss,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0xC0, 0x80],
        "TLS_DHE_DSS_CAMELLIA_128_GCM_SHA256",
        "TLS_DHE_DSS_WITH_CAMELLIA_128_GCM_SHA256",
        Cipher::Camellia128Gcm,
        Kx::DheDss,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x81],
        "TLS_DHE_DSS_CAMELLIA_256_GCM_SHA384",
        "TLS_DHE_DSS_WITH_CAMELLIA_256_GCM_SHA384",
        Cipher::Camellia256Gcm,
        Kx::DheDss,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    // DHE_RSA
    suite(
        [0x00, 0x16],
        "TLS_DHE_RSA_3DES_EDE_CBC_SHA1",
        "TLS_DHE_RSA_WITH_3DES_EDE_CBC_SHA",
        Cipher::TripleDesCbc,
        Kx::DheRsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x33],
        "TLS_DHE_RSA_AES_128_CBC_SHA1",
        "TLS_DHE_RSA_WITH_AES_128_CBC_SHA",
        Cipher::Aes128Cbc,
        Kx::DheRsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x39],
        "TLS_DHE_RSA_AES_256_CBC_SHA1",
        "TLS_DHE_RSA_WITH_AES_256_CBC_SHA",
        Cipher::Aes256Cbc,
        Kx::DheRsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0xBE],
        "TLS_DHE_RSA_CAMELLIA_128_CBC_SHA256",
        "TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA256",
        Cipher::Camellia128Cbc,
        Kx::DheRsa,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0x00, 0xC4],
        "TLS_DHE_RSA_CAMELLIA_256_CBC_SHA256",
        "TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA256",
        Cipher::Camellia256Cbc,
        Kx::DheRsa,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0x00, 0x45],
        "TLS_DHE_RSA_CAMELLIA_128_CBC_SHA1",
        "TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA",
        Cipher::Camellia128Cbc,
        Kx::DheRsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x88],
        "TLS_DHE_RSA_CAMELLIA_256_CBC_SHA1",
        "TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA",
        Cipher::Camellia256Cbc,
        Kx::DheRsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x67],
        "TLS_DHE_RSA_AES_128_CBC_SHA256",
        "TLS_DHE_RSA_WITH_AES_128_CBC_SHA256",
        Cipher::Aes128Cbc,
        Kx::DheRsa,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0x00, 0x6B],
        "TLS_DHE_RSA_AES_256_CBC_SHA256",
        "TLS_DHE_RSA_WITH_AES_256_CBC_SHA256",
        Cipher::Aes256Cbc,
        Kx::DheRsa,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    // GCM
    suite(
        [0x00, 0x9E],
        "TLS_DHE_RSA_AES_128_GCM_SHA256",
        "TLS_DHE_RSA_WITH_AES_128_GCM_SHA256",
        Cipher::Aes128Gcm,
        Kx::DheRsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0x00, 0x9F],
        "TLS_DHE_RSA_AES_256_GCM_SHA384",
        "TLS_DHE_RSA_WITH_AES_256_GCM_SHA384",
        Cipher::Aes256Gcm,
        Kx::DheRsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0xC0, 0x7C],
        "TLS_DHE_RSA_CAMELLIA_128_GCM_SHA256",
        "TLS_DHE_RSA_WITH_CAMELLIA_128_GCM_SHA256",
        Cipher::Camellia128Gcm,
        Kx::DheRsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x7D],
        "TLS_DHE_RSA_CAMELLIA_256_GCM_SHA384",
        "TLS_DHE_RSA_WITH_CAMELLIA_256_GCM_SHA384",
        Cipher::Camellia256Gcm,
        Kx::DheRsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0xCC, 0xAA],
        "TLS_DHE_RSA_CHACHA20_POLY1305",
        "TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256",
        Cipher::Chacha20Poly1305,
        Kx::DheRsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    // CCM
    suite(
        [0xC0, 0x9E],
        "TLS_DHE_RSA_AES_128_CCM",
        "TLS_DHE_RSA_WITH_AES_128_CCM",
        Cipher::Aes128Ccm,
        Kx::DheRsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0x9F],
        "TLS_DHE_RSA_AES_256_CCM",
        "TLS_DHE_RSA_WITH_AES_256_CCM",
        Cipher::Aes256Ccm,
        Kx::DheRsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0xA2],
        "TLS_DHE_RSA_AES_128_CCM_8",
        "TLS_DHE_RSA_WITH_AES_128_CCM_8",
        Cipher::Aes128Ccm8,
        Kx::DheRsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0xA3],
        "TLS_DHE_RSA_AES_256_CCM_8",
        "TLS_DHE_RSA_WITH_AES_256_CCM_8",
        Cipher::Aes256Ccm8,
        Kx::DheRsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    // DHE
    // ECC-RSA
    suite(
        [0xC0, 0x10],
        "TLS_ECDHE_RSA_NULL_SHA1",
        "TLS_ECDHE_RSA_WITH_NULL_SHA",
        Cipher::Null,
        Kx::EcdheRsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x12],
        "TLS_ECDHE_RSA_3DES_EDE_CBC_SHA1",
        "TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA",
        Cipher::TripleDesCbc,
        Kx::EcdheRsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x13],
        "TLS_ECDHE_RSA_AES_128_CBC_SHA1",
        "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA",
        Cipher::Aes128Cbc,
        Kx::EcdheRsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x14],
        "TLS_ECDHE_RSA_AES_256_CBC_SHA1",
        "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA",
        Cipher::Aes256Cbc,
        Kx::EcdheRsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite_prf(
        [0xC0, 0x28],
        "TLS_ECDHE_RSA_AES_256_CBC_SHA384",
        "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA384",
        Cipher::Aes256Cbc,
        Kx::EcdheRsa,
        Mac::Sha384,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0xC0, 0x11],
        "TLS_ECDHE_RSA_ARCFOUR_128_SHA1",
        "TLS_ECDHE_RSA_WITH_RC4_128_SHA",
        Cipher::Arcfour128,
        Kx::EcdheRsa,
        Mac::Sha1,
        V::Ssl3,
        None,
    ),
    suite(
        [0xC0, 0x76],
        "TLS_ECDHE_RSA_CAMELLIA_128_CBC_SHA256",
        "TLS_ECDHE_RSA_WITH_CAMELLIA_128_CBC_SHA256",
        Cipher::Camellia128Cbc,
        Kx::EcdheRsa,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x77],
        "TLS_ECDHE_RSA_CAMELLIA_256_CBC_SHA384",
        "TLS_ECDHE_RSA_WITH_CAMELLIA_256_CBC_SHA384",
        Cipher::Camellia256Cbc,
        Kx::EcdheRsa,
        Mac::Sha384,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    // ECDHE-ECDSA
    suite(
        [0xC0, 0x06],
        "TLS_ECDHE_ECDSA_NULL_SHA1",
        "TLS_ECDHE_ECDSA_WITH_NULL_SHA",
        Cipher::Null,
        Kx::EcdheEcdsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x08],
        "TLS_ECDHE_ECDSA_3DES_EDE_CBC_SHA1",
        "TLS_ECDHE_ECDSA_WITH_3DES_EDE_CBC_SHA",
        Cipher::TripleDesCbc,
        Kx::EcdheEcdsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x09],
        "TLS_ECDHE_ECDSA_AES_128_CBC_SHA1",
        "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA",
        Cipher::Aes128Cbc,
        Kx::EcdheEcdsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x0A],
        "TLS_ECDHE_ECDSA_AES_256_CBC_SHA1",
        "TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA",
        Cipher::Aes256Cbc,
        Kx::EcdheEcdsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x07],
        "TLS_ECDHE_ECDSA_ARCFOUR_128_SHA1",
        "TLS_ECDHE_ECDSA_WITH_RC4_128_SHA",
        Cipher::Arcfour128,
        Kx::EcdheEcdsa,
        Mac::Sha1,
        V::Ssl3,
        None,
    ),
    suite(
        [0xC0, 0x72],
        "TLS_ECDHE_ECDSA_CAMELLIA_128_CBC_SHA256",
        "TLS_ECDHE_ECDSA_WITH_CAMELLIA_128_CBC_SHA256",
        Cipher::Camellia128Cbc,
        Kx::EcdheEcdsa,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x73],
        "TLS_ECDHE_ECDSA_CAMELLIA_256_CBC_SHA384",
        "TLS_ECDHE_ECDSA_WITH_CAMELLIA_256_CBC_SHA384",
        Cipher::Camellia256Cbc,
        Kx::EcdheEcdsa,
        Mac::Sha384,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    // More ECC
    suite(
        [0xC0, 0x23],
        "TLS_ECDHE_ECDSA_AES_128_CBC_SHA256",
        "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256",
        Cipher::Aes128Cbc,
        Kx::EcdheEcdsa,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0x27],
        "TLS_ECDHE_RSA_AES_128_CBC_SHA256",
        "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256",
        Cipher::Aes128Cbc,
        Kx::EcdheRsa,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0x86],
        "TLS_ECDHE_ECDSA_CAMELLIA_128_GCM_SHA256",
        "TLS_ECDHE_ECDSA_WITH_CAMELLIA_128_GCM_SHA256",
        Cipher::Camellia128Gcm,
        Kx::EcdheEcdsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x87],
        "TLS_ECDHE_ECDSA_CAMELLIA_256_GCM_SHA384",
        "TLS_ECDHE_ECDSA_WITH_CAMELLIA_256_GCM_SHA384",
        Cipher::Camellia256Gcm,
        Kx::EcdheEcdsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0xC0, 0x2B],
        "TLS_ECDHE_ECDSA_AES_128_GCM_SHA256",
        "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256",
        Cipher::Aes128Gcm,
        Kx::EcdheEcdsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x2C],
        "TLS_ECDHE_ECDSA_AES_256_GCM_SHA384",
        "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384",
        Cipher::Aes256Gcm,
        Kx::EcdheEcdsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0xC0, 0x2F],
        "TLS_ECDHE_RSA_AES_128_GCM_SHA256",
        "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256",
        Cipher::Aes128Gcm,
        Kx::EcdheRsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x30],
        "TLS_ECDHE_RSA_AES_256_GCM_SHA384",
        "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
        Cipher::Aes256Gcm,
        Kx::EcdheRsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite_prf(
        [0xC0, 0x24],
        "TLS_ECDHE_ECDSA_AES_256_CBC_SHA384",
        "TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA384",
        Cipher::Aes256Cbc,
        Kx::EcdheEcdsa,
        Mac::Sha384,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0xC0, 0x8A],
        "TLS_ECDHE_RSA_CAMELLIA_128_GCM_SHA256",
        "TLS_ECDHE_RSA_WITH_CAMELLIA_128_GCM_SHA256",
        Cipher::Camellia128Gcm,
        Kx::EcdheRsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x8B],
        "TLS_ECDHE_RSA_CAMELLIA_256_GCM_SHA384",
        "TLS_ECDHE_RSA_WITH_CAMELLIA_256_GCM_SHA384",
        Cipher::Camellia256Gcm,
        Kx::EcdheRsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0xCC, 0xA8],
        "TLS_ECDHE_RSA_CHACHA20_POLY1305",
        "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256",
        Cipher::Chacha20Poly1305,
        Kx::EcdheRsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xCC, 0xA9],
        "TLS_ECDHE_ECDSA_CHACHA20_POLY1305",
        "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256",
        Cipher::Chacha20Poly1305,
        Kx::EcdheEcdsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0xAC],
        "TLS_ECDHE_ECDSA_AES_128_CCM",
        "TLS_ECDHE_ECDSA_WITH_AES_128_CCM",
        Cipher::Aes128Ccm,
        Kx::EcdheEcdsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0xAD],
        "TLS_ECDHE_ECDSA_AES_256_CCM",
        "TLS_ECDHE_ECDSA_WITH_AES_256_CCM",
        Cipher::Aes256Ccm,
        Kx::EcdheEcdsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0xAE],
        "TLS_ECDHE_ECDSA_AES_128_CCM_8",
        "TLS_ECDHE_ECDSA_WITH_AES_128_CCM_8",
        Cipher::Aes128Ccm8,
        Kx::EcdheEcdsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0xAF],
        "TLS_ECDHE_ECDSA_AES_256_CCM_8",
        "TLS_ECDHE_ECDSA_WITH_AES_256_CCM_8",
        Cipher::Aes256Ccm8,
        Kx::EcdheEcdsa,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    // ECC - PSK
    suite(
        [0xC0, 0x34],
        "TLS_ECDHE_PSK_3DES_EDE_CBC_SHA1",
        "TLS_ECDHE_PSK_WITH_3DES_EDE_CBC_SHA",
        Cipher::TripleDesCbc,
        Kx::EcdhePsk,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x35],
        "TLS_ECDHE_PSK_AES_128_CBC_SHA1",
        "TLS_ECDHE_PSK_WITH_AES_128_CBC_SHA",
        Cipher::Aes128Cbc,
        Kx::EcdhePsk,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x36],
        "TLS_ECDHE_PSK_AES_256_CBC_SHA1",
        "TLS_ECDHE_PSK_WITH_AES_256_CBC_SHA",
        Cipher::Aes256Cbc,
        Kx::EcdhePsk,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x37],
        "TLS_ECDHE_PSK_AES_128_CBC_SHA256",
        "TLS_ECDHE_PSK_WITH_AES_128_CBC_SHA256",
        Cipher::Aes128Cbc,
        Kx::EcdhePsk,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x38],
        "TLS_ECDHE_PSK_AES_256_CBC_SHA384",
        "TLS_ECDHE_PSK_WITH_AES_256_CBC_SHA384",
        Cipher::Aes256Cbc,
        Kx::EcdhePsk,
        Mac::Sha384,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0xC0, 0x33],
        "TLS_ECDHE_PSK_ARCFOUR_128_SHA1",
        "TLS_ECDHE_PSK_WITH_RC4_128_SHA",
        Cipher::Arcfour128,
        Kx::EcdhePsk,
        Mac::Sha1,
        V::Ssl3,
        None,
    ),
    suite(
        [0xC0, 0x39],
        "TLS_ECDHE_PSK_NULL_SHA1",
        "TLS_ECDHE_PSK_WITH_NULL_SHA",
        Cipher::Null,
        Kx::EcdhePsk,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x3A],
        "TLS_ECDHE_PSK_NULL_SHA256",
        "TLS_ECDHE_PSK_WITH_NULL_SHA256",
        Cipher::Null,
        Kx::EcdhePsk,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x3B],
        "TLS_ECDHE_PSK_NULL_SHA384",
        "TLS_ECDHE_PSK_WITH_NULL_SHA384",
        Cipher::Null,
        Kx::EcdhePsk,
        Mac::Sha384,
        V::Tls1_0,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0xC0, 0x9A],
        "TLS_ECDHE_PSK_CAMELLIA_128_CBC_SHA256",
        "TLS_ECDHE_PSK_WITH_CAMELLIA_128_CBC_SHA256",
        Cipher::Camellia128Cbc,
        Kx::EcdhePsk,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x9B],
        "TLS_ECDHE_PSK_CAMELLIA_256_CBC_SHA384",
        "TLS_ECDHE_PSK_WITH_CAMELLIA_256_CBC_SHA384",
        Cipher::Camellia256Cbc,
        Kx::EcdhePsk,
        Mac::Sha384,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    // PSK
    suite(
        [0x00, 0x8A],
        "TLS_PSK_ARCFOUR_128_SHA1",
        "TLS_PSK_WITH_RC4_128_SHA",
        Cipher::Arcfour128,
        Kx::Psk,
        Mac::Sha1,
        V::Ssl3,
        None,
    ),
    suite(
        [0x00, 0x8B],
        "TLS_PSK_3DES_EDE_CBC_SHA1",
        "TLS_PSK_WITH_3DES_EDE_CBC_SHA",
        Cipher::TripleDesCbc,
        Kx::Psk,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x8C],
        "TLS_PSK_AES_128_CBC_SHA1",
        "TLS_PSK_WITH_AES_128_CBC_SHA",
        Cipher::Aes128Cbc,
        Kx::Psk,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x8D],
        "TLS_PSK_AES_256_CBC_SHA1",
        "TLS_PSK_WITH_AES_256_CBC_SHA",
        Cipher::Aes256Cbc,
        Kx::Psk,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0xAE],
        "TLS_PSK_AES_128_CBC_SHA256",
        "TLS_PSK_WITH_AES_128_CBC_SHA256",
        Cipher::Aes128Cbc,
        Kx::Psk,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0x00, 0xA9],
        "TLS_PSK_AES_256_GCM_SHA384",
        "TLS_PSK_WITH_AES_256_GCM_SHA384",
        Cipher::Aes256Gcm,
        Kx::Psk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0xC0, 0x8E],
        "TLS_PSK_CAMELLIA_128_GCM_SHA256",
        "TLS_PSK_WITH_CAMELLIA_128_GCM_SHA256",
        Cipher::Camellia128Gcm,
        Kx::Psk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x8F],
        "TLS_PSK_CAMELLIA_256_GCM_SHA384",
        "TLS_PSK_WITH_CAMELLIA_256_GCM_SHA384",
        Cipher::Camellia256Gcm,
        Kx::Psk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0x00, 0xA8],
        "TLS_PSK_AES_128_GCM_SHA256",
        "TLS_PSK_WITH_AES_128_GCM_SHA256",
        Cipher::Aes128Gcm,
        Kx::Psk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0x00, 0x2C],
        "TLS_PSK_NULL_SHA1",
        "TLS_PSK_WITH_NULL_SHA",
        Cipher::Null,
        Kx::Psk,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0xB0],
        "TLS_PSK_NULL_SHA256",
        "TLS_PSK_WITH_NULL_SHA256",
        Cipher::Null,
        Kx::Psk,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0x94],
        "TLS_PSK_CAMELLIA_128_CBC_SHA256",
        "TLS_PSK_WITH_CAMELLIA_128_CBC_SHA256",
        Cipher::Camellia128Cbc,
        Kx::Psk,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x95],
        "TLS_PSK_CAMELLIA_256_CBC_SHA384",
        "TLS_PSK_WITH_CAMELLIA_256_CBC_SHA384",
        Cipher::Camellia256Cbc,
        Kx::Psk,
        Mac::Sha384,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite_prf(
        [0x00, 0xAF],
        "TLS_PSK_AES_256_CBC_SHA384",
        "TLS_PSK_WITH_AES_256_CBC_SHA384",
        Cipher::Aes256Cbc,
        Kx::Psk,
        Mac::Sha384,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite_prf(
        [0x00, 0xB1],
        "TLS_PSK_NULL_SHA384",
        "TLS_PSK_WITH_NULL_SHA384",
        Cipher::Null,
        Kx::Psk,
        Mac::Sha384,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    // RSA-PSK
    suite(
        [0x00, 0x92],
        "TLS_RSA_PSK_ARCFOUR_128_SHA1",
        "TLS_RSA_PSK_WITH_RC4_128_SHA",
        Cipher::Arcfour128,
        Kx::RsaPsk,
        Mac::Sha1,
        V::Tls1_0,
        None,
    ),
    suite(
        [0x00, 0x93],
        "TLS_RSA_PSK_3DES_EDE_CBC_SHA1",
        "TLS_RSA_PSK_WITH_3DES_EDE_CBC_SHA",
        Cipher::TripleDesCbc,
        Kx::RsaPsk,
        Mac::Sha1,
        V::Tls1_0,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x94],
        "TLS_RSA_PSK_AES_128_CBC_SHA1",
        "TLS_RSA_PSK_WITH_AES_128_CBC_SHA",
        Cipher::Aes128Cbc,
        Kx::RsaPsk,
        Mac::Sha1,
        V::Tls1_0,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x95],
        "TLS_RSA_PSK_AES_256_CBC_SHA1",
        "TLS_RSA_PSK_WITH_AES_256_CBC_SHA",
        Cipher::Aes256Cbc,
        Kx::RsaPsk,
        Mac::Sha1,
        V::Tls1_0,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x92],
        "TLS_RSA_PSK_CAMELLIA_128_GCM_SHA256",
        "TLS_RSA_PSK_WITH_CAMELLIA_128_GCM_SHA256",
        Cipher::Camellia128Gcm,
        Kx::RsaPsk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x93],
        "TLS_RSA_PSK_CAMELLIA_256_GCM_SHA384",
        "TLS_RSA_PSK_WITH_CAMELLIA_256_GCM_SHA384",
        Cipher::Camellia256Gcm,
        Kx::RsaPsk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0x00, 0xAC],
        "TLS_RSA_PSK_AES_128_GCM_SHA256",
        "TLS_RSA_PSK_WITH_AES_128_GCM_SHA256",
        Cipher::Aes128Gcm,
        Kx::RsaPsk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0x00, 0xB6],
        "TLS_RSA_PSK_AES_128_CBC_SHA256",
        "TLS_RSA_PSK_WITH_AES_128_CBC_SHA256",
        Cipher::Aes128Cbc,
        Kx::RsaPsk,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0x00, 0x2E],
        "TLS_RSA_PSK_NULL_SHA1",
        "TLS_RSA_PSK_WITH_NULL_SHA",
        Cipher::Null,
        Kx::RsaPsk,
        Mac::Sha1,
        V::Tls1_0,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0xB8],
        "TLS_RSA_PSK_NULL_SHA256",
        "TLS_RSA_PSK_WITH_NULL_SHA256",
        Cipher::Null,
        Kx::RsaPsk,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0x00, 0xAD],
        "TLS_RSA_PSK_AES_256_GCM_SHA384",
        "TLS_RSA_PSK_WITH_AES_256_GCM_SHA384",
        Cipher::Aes256Gcm,
        Kx::RsaPsk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite_prf(
        [0x00, 0xB7],
        "TLS_RSA_PSK_AES_256_CBC_SHA384",
        "TLS_RSA_PSK_WITH_AES_256_CBC_SHA384",
        Cipher::Aes256Cbc,
        Kx::RsaPsk,
        Mac::Sha384,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite_prf(
        [0x00, 0xB9],
        "TLS_RSA_PSK_NULL_SHA384",
        "TLS_RSA_PSK_WITH_NULL_SHA384",
        Cipher::Null,
        Kx::RsaPsk,
        Mac::Sha384,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0xC0, 0x98],
        "TLS_RSA_PSK_CAMELLIA_128_CBC_SHA256",
        "TLS_RSA_PSK_WITH_CAMELLIA_128_CBC_SHA256",
        Cipher::Camellia128Cbc,
        Kx::RsaPsk,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x99],
        "TLS_RSA_PSK_CAMELLIA_256_CBC_SHA384",
        "TLS_RSA_PSK_WITH_CAMELLIA_256_CBC_SHA384",
        Cipher::Camellia256Cbc,
        Kx::RsaPsk,
        Mac::Sha384,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    // DHE-PSK
    suite(
        [0x00, 0x8E],
        "TLS_DHE_PSK_ARCFOUR_128_SHA1",
        "TLS_DHE_PSK_WITH_RC4_128_SHA",
        Cipher::Arcfour128,
        Kx::DhePsk,
        Mac::Sha1,
        V::Ssl3,
        None,
    ),
    suite(
        [0x00, 0x8F],
        "TLS_DHE_PSK_3DES_EDE_CBC_SHA1",
        "TLS_DHE_PSK_WITH_3DES_EDE_CBC_SHA",
        Cipher::TripleDesCbc,
        Kx::DhePsk,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x90],
        "TLS_DHE_PSK_AES_128_CBC_SHA1",
        "TLS_DHE_PSK_WITH_AES_128_CBC_SHA",
        Cipher::Aes128Cbc,
        Kx::DhePsk,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x91],
        "TLS_DHE_PSK_AES_256_CBC_SHA1",
        "TLS_DHE_PSK_WITH_AES_256_CBC_SHA",
        Cipher::Aes256Cbc,
        Kx::DhePsk,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0xB2],
        "TLS_DHE_PSK_AES_128_CBC_SHA256",
        "TLS_DHE_PSK_WITH_AES_128_CBC_SHA256",
        Cipher::Aes128Cbc,
        Kx::DhePsk,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0x00, 0xAA],
        "TLS_DHE_PSK_AES_128_GCM_SHA256",
        "TLS_DHE_PSK_WITH_AES_128_GCM_SHA256",
        Cipher::Aes128Gcm,
        Kx::DhePsk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0x00, 0x2D],
        "TLS_DHE_PSK_NULL_SHA1",
        "TLS_DHE_PSK_WITH_NULL_SHA",
        Cipher::Null,
        Kx::DhePsk,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0xB4],
        "TLS_DHE_PSK_NULL_SHA256",
        "TLS_DHE_PSK_WITH_NULL_SHA256",
        Cipher::Null,
        Kx::DhePsk,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0x00, 0xB5],
        "TLS_DHE_PSK_NULL_SHA384",
        "TLS_DHE_PSK_WITH_NULL_SHA384",
        Cipher::Null,
        Kx::DhePsk,
        Mac::Sha384,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite_prf(
        [0x00, 0xB3],
        "TLS_DHE_PSK_AES_256_CBC_SHA384",
        "TLS_DHE_PSK_WITH_AES_256_CBC_SHA384",
        Cipher::Aes256Cbc,
        Kx::DhePsk,
        Mac::Sha384,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite_prf(
        [0x00, 0xAB],
        "TLS_DHE_PSK_AES_256_GCM_SHA384",
        "TLS_DHE_PSK_WITH_AES_256_GCM_SHA384",
        Cipher::Aes256Gcm,
        Kx::DhePsk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0xC0, 0x96],
        "TLS_DHE_PSK_CAMELLIA_128_CBC_SHA256",
        "TLS_DHE_PSK_WITH_CAMELLIA_128_CBC_SHA256",
        Cipher::Camellia128Cbc,
        Kx::DhePsk,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x97],
        "TLS_DHE_PSK_CAMELLIA_256_CBC_SHA384",
        "TLS_DHE_PSK_WITH_CAMELLIA_256_CBC_SHA384",
        Cipher::Camellia256Cbc,
        Kx::DhePsk,
        Mac::Sha384,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0xC0, 0x90],
        "TLS_DHE_PSK_CAMELLIA_128_GCM_SHA256",
        "TLS_DHE_PSK_WITH_CAMELLIA_128_GCM_SHA256",
        Cipher::Camellia128Gcm,
        Kx::DhePsk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x91],
        "TLS_DHE_PSK_CAMELLIA_256_GCM_SHA384",
        "TLS_DHE_PSK_WITH_CAMELLIA_256_GCM_SHA384",
        Cipher::Camellia256Gcm,
        Kx::DhePsk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0xC0, 0xA4],
        "TLS_PSK_AES_128_CCM",
        "TLS_PSK_WITH_AES_128_CCM",
        Cipher::Aes128Ccm,
        Kx::Psk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0xA5],
        "TLS_PSK_AES_256_CCM",
        "TLS_PSK_WITH_AES_256_CCM",
        Cipher::Aes256Ccm,
        Kx::Psk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0xA6],
        "TLS_DHE_PSK_AES_128_CCM",
        "TLS_DHE_PSK_WITH_AES_128_CCM",
        Cipher::Aes128Ccm,
        Kx::DhePsk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0xA7],
        "TLS_DHE_PSK_AES_256_CCM",
        "TLS_DHE_PSK_WITH_AES_256_CCM",
        Cipher::Aes256Ccm,
        Kx::DhePsk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0xA8],
        "TLS_PSK_AES_128_CCM_8",
        "TLS_PSK_WITH_AES_128_CCM_8",
        Cipher::Aes128Ccm8,
        Kx::Psk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0xA9],
        "TLS_PSK_AES_256_CCM_8",
        "TLS_PSK_WITH_AES_256_CCM_8",
        Cipher::Aes256Ccm8,
        Kx::Psk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0xAA],
        "TLS_DHE_PSK_AES_128_CCM_8",
        "TLS_PSK_DHE_WITH_AES_128_CCM_8",
        Cipher::Aes128Ccm8,
        Kx::DhePsk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xC0, 0xAB],
        "TLS_DHE_PSK_AES_256_CCM_8",
        "TLS_PSK_DHE_WITH_AES_256_CCM_8",
        Cipher::Aes256Ccm8,
        Kx::DhePsk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xCC, 0xAD],
        "TLS_DHE_PSK_CHACHA20_POLY1305",
        "TLS_DHE_PSK_WITH_CHACHA20_POLY1305_SHA256",
        Cipher::Chacha20Poly1305,
        Kx::DhePsk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xCC, 0xAC],
        "TLS_ECDHE_PSK_CHACHA20_POLY1305",
        "TLS_ECDHE_PSK_WITH_CHACHA20_POLY1305_SHA256",
        Cipher::Chacha20Poly1305,
        Kx::EcdhePsk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xCC, 0xAE],
        "TLS_RSA_PSK_CHACHA20_POLY1305",
        "TLS_RSA_PSK_WITH_CHACHA20_POLY1305_SHA256",
        Cipher::Chacha20Poly1305,
        Kx::RsaPsk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0xCC, 0xAB],
        "TLS_PSK_CHACHA20_POLY1305",
        "TLS_PSK_WITH_CHACHA20_POLY1305_SHA256",
        Cipher::Chacha20Poly1305,
        Kx::Psk,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    // DH_ANON
    suite(
        [0x00, 0x18],
        "TLS_DH_ANON_ARCFOUR_128_MD5",
        "TLS_DH_anon_WITH_RC4_128_MD5",
        Cipher::Arcfour128,
        Kx::AnonDh,
        Mac::Md5,
        V::Ssl3,
        None,
    ),
    suite(
        [0x00, 0x1B],
        "TLS_DH_ANON_3DES_EDE_CBC_SHA1",
        "TLS_DH_anon_WITH_3DES_EDE_CBC_SHA",
        Cipher::TripleDesCbc,
        Kx::AnonDh,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x34],
        "TLS_DH_ANON_AES_128_CBC_SHA1",
        "TLS_DH_anon_WITH_AES_128_CBC_SHA",
        Cipher::Aes128Cbc,
        Kx::AnonDh,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x3A],
        "TLS_DH_ANON_AES_256_CBC_SHA1",
        "TLS_DH_anon_WITH_AES_256_CBC_SHA",
        Cipher::Aes256Cbc,
        Kx::AnonDh,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0xBF],
        "TLS_DH_ANON_CAMELLIA_128_CBC_SHA256",
        "TLS_DH_anon_WITH_CAMELLIA_128_CBC_SHA256",
        Cipher::Camellia128Cbc,
        Kx::AnonDh,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0x00, 0xC5],
        "TLS_DH_ANON_CAMELLIA_256_CBC_SHA256",
        "TLS_DH_anon_WITH_CAMELLIA_256_CBC_SHA256",
        Cipher::Camellia256Cbc,
        Kx::AnonDh,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0x00, 0x46],
        "TLS_DH_ANON_CAMELLIA_128_CBC_SHA1",
        "TLS_DH_anon_WITH_CAMELLIA_128_CBC_SHA",
        Cipher::Camellia128Cbc,
        Kx::AnonDh,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x89],
        "TLS_DH_ANON_CAMELLIA_256_CBC_SHA1",
        "TLS_DH_anon_WITH_CAMELLIA_256_CBC_SHA",
        Cipher::Camellia256Cbc,
        Kx::AnonDh,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0x00, 0x6C],
        "TLS_DH_ANON_AES_128_CBC_SHA256",
        "TLS_DH_anon_WITH_AES_128_CBC_SHA256",
        Cipher::Aes128Cbc,
        Kx::AnonDh,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0x00, 0x6D],
        "TLS_DH_ANON_AES_256_CBC_SHA256",
        "TLS_DH_anon_WITH_AES_256_CBC_SHA256",
        Cipher::Aes256Cbc,
        Kx::AnonDh,
        Mac::Sha256,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite(
        [0x00, 0xA6],
        "TLS_DH_ANON_AES_128_GCM_SHA256",
        "TLS_DH_anon_WITH_AES_128_GCM_SHA256",
        Cipher::Aes128Gcm,
        Kx::AnonDh,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0x00, 0xA7],
        "TLS_DH_ANON_AES_256_GCM_SHA384",
        "TLS_DH_anon_WITH_AES_256_GCM_SHA384",
        Cipher::Aes256Gcm,
        Kx::AnonDh,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    suite(
        [0xC0, 0x84],
        "TLS_DH_ANON_CAMELLIA_128_GCM_SHA256",
        "TLS_DH_anon_WITH_CAMELLIA_128_GCM_SHA256",
        Cipher::Camellia128Gcm,
        Kx::AnonDh,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
    ),
    suite_prf(
        [0xC0, 0x85],
        "TLS_DH_ANON_CAMELLIA_256_GCM_SHA384",
        "TLS_DH_anon_WITH_CAMELLIA_256_GCM_SHA384",
        Cipher::Camellia256Gcm,
        Kx::AnonDh,
        Mac::Aead,
        V::Tls1_2,
        Some(V::Dtls1_2),
        Prf::Sha384,
    ),
    // ECC-ANON
    suite(
        [0xC0, 0x15],
        "TLS_ECDH_ANON_NULL_SHA1",
        "TLS_ECDH_anon_WITH_NULL_SHA",
        Cipher::Null,
        Kx::AnonEcdh,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x17],
        "TLS_ECDH_ANON_3DES_EDE_CBC_SHA1",
        "TLS_ECDH_anon_WITH_3DES_EDE_CBC_SHA",
        Cipher::TripleDesCbc,
        Kx::AnonEcdh,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x18],
        "TLS_ECDH_ANON_AES_128_CBC_SHA1",
        "TLS_ECDH_anon_WITH_AES_128_CBC_SHA",
        Cipher::Aes128Cbc,
        Kx::AnonEcdh,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x19],
        "TLS_ECDH_ANON_AES_256_CBC_SHA1",
        "TLS_ECDH_anon_WITH_AES_256_CBC_SHA",
        Cipher::Aes256Cbc,
        Kx::AnonEcdh,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x16],
        "TLS_ECDH_ANON_ARCFOUR_128_SHA1",
        "TLS_ECDH_anon_WITH_RC4_128_SHA",
        Cipher::Arcfour128,
        Kx::AnonEcdh,
        Mac::Sha1,
        V::Ssl3,
        None,
    ),
    // SRP
    suite(
        [0xC0, 0x1A],
        "TLS_SRP_SHA_3DES_EDE_CBC_SHA1",
        "TLS_SRP_SHA_WITH_3DES_EDE_CBC_SHA",
        Cipher::TripleDesCbc,
        Kx::Srp,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x1D],
        "TLS_SRP_SHA_AES_128_CBC_SHA1",
        "TLS_SRP_SHA_WITH_AES_128_CBC_SHA",
        Cipher::Aes128Cbc,
        Kx::Srp,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x20],
        "TLS_SRP_SHA_AES_256_CBC_SHA1",
        "TLS_SRP_SHA_WITH_AES_256_CBC_SHA",
        Cipher::Aes256Cbc,
        Kx::Srp,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x1C],
        "TLS_SRP_SHA_DSS_3DES_EDE_CBC_SHA1",
        "TLS_SRP_SHA_DSS_WITH_3DES_EDE_CBC_SHA",
        Cipher::TripleDesCbc,
        Kx::SrpDss,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x1B],
        "TLS_SRP_SHA_RSA_3DES_EDE_CBC_SHA1",
        "TLS_SRP_SHA_RSA_WITH_3DES_EDE_CBC_SHA",
        Cipher::TripleDesCbc,
        Kx::SrpRsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x1F],
        "TLS_SRP_SHA_DSS_AES_128_CBC_SHA1",
        "TLS_SRP_SHA_DSS_WITH_AES_128_CBC_SHA",
        Cipher::Aes128Cbc,
        Kx::SrpDss,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x1E],
        "TLS_SRP_SHA_RSA_AES_128_CBC_SHA1",
        "TLS_SRP_SHA_RSA_WITH_AES_128_CBC_SHA",
        Cipher::Aes128Cbc,
        Kx::SrpRsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x22],
        "TLS_SRP_SHA_DSS_AES_256_CBC_SHA1",
        "TLS_SRP_SHA_DSS_WITH_AES_256_CBC_SHA",
        Cipher::Aes256Cbc,
        Kx::SrpDss,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite(
        [0xC0, 0x21],
        "TLS_SRP_SHA_RSA_AES_256_CBC_SHA1",
        "TLS_SRP_SHA_RSA_WITH_AES_256_CBC_SHA",
        Cipher::Aes256Cbc,
        Kx::SrpRsa,
        Mac::Sha1,
        V::Ssl3,
        Some(V::Dtls0_9),
    ),
    suite_prf(
        [0xC1, 0x02],
        "TLS_GOSTR341112_256_28147_CNT_IMIT",
        "TLS_GOSTR341112_256_WITH_28147_CNT_IMIT",
        Cipher::Gost28147Tc26zCnt,
        Kx::VkoGost12,
        Mac::Gost28147Tc26zImit,
        V::Tls1_2,
        None,
        Prf::Streebog256,
    ),
];

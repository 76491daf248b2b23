use std::fmt;

// CipherType tells how a bulk cipher protects records
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CipherType {
    Stream,
    Block,
    Aead,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CipherAlgorithm {
    Null,
    Arcfour128,
    TripleDesCbc,
    Aes128Cbc,
    Aes256Cbc,
    Camellia128Cbc,
    Camellia256Cbc,
    Aes128Gcm,
    Aes256Gcm,
    Camellia128Gcm,
    Camellia256Gcm,
    Aes128Ccm,
    Aes256Ccm,
    Aes128Ccm8,
    Aes256Ccm8,
    Chacha20Poly1305,
    Gost28147Tc26zCnt,
}

impl CipherAlgorithm {
    pub fn cipher_type(&self) -> CipherType {
        match *self {
            CipherAlgorithm::Null | CipherAlgorithm::Arcfour128 => CipherType::Stream,
            // counter mode with a separate imitovstavka MAC
            CipherAlgorithm::Gost28147Tc26zCnt => CipherType::Stream,
            CipherAlgorithm::TripleDesCbc
            | CipherAlgorithm::Aes128Cbc
            | CipherAlgorithm::Aes256Cbc
            | CipherAlgorithm::Camellia128Cbc
            | CipherAlgorithm::Camellia256Cbc => CipherType::Block,
            _ => CipherType::Aead,
        }
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            CipherAlgorithm::Null => "NULL",
            CipherAlgorithm::Arcfour128 => "ARCFOUR-128",
            CipherAlgorithm::TripleDesCbc => "3DES-CBC",
            CipherAlgorithm::Aes128Cbc => "AES-128-CBC",
            CipherAlgorithm::Aes256Cbc => "AES-256-CBC",
            CipherAlgorithm::Camellia128Cbc => "CAMELLIA-128-CBC",
            CipherAlgorithm::Camellia256Cbc => "CAMELLIA-256-CBC",
            CipherAlgorithm::Aes128Gcm => "AES-128-GCM",
            CipherAlgorithm::Aes256Gcm => "AES-256-GCM",
            CipherAlgorithm::Camellia128Gcm => "CAMELLIA-128-GCM",
            CipherAlgorithm::Camellia256Gcm => "CAMELLIA-256-GCM",
            CipherAlgorithm::Aes128Ccm => "AES-128-CCM",
            CipherAlgorithm::Aes256Ccm => "AES-256-CCM",
            CipherAlgorithm::Aes128Ccm8 => "AES-128-CCM-8",
            CipherAlgorithm::Aes256Ccm8 => "AES-256-CCM-8",
            CipherAlgorithm::Chacha20Poly1305 => "CHACHA20-POLY1305",
            CipherAlgorithm::Gost28147Tc26zCnt => "GOST28147-TC26Z-CNT",
        };
        write!(f, "{}", s)
    }
}

// MacAlgorithm::Aead marks suites whose cipher provides integrity itself
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MacAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Aead,
    Gost28147Tc26zImit,
}

impl fmt::Display for MacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            MacAlgorithm::Md5 => "MD5",
            MacAlgorithm::Sha1 => "SHA1",
            MacAlgorithm::Sha256 => "SHA256",
            MacAlgorithm::Sha384 => "SHA384",
            MacAlgorithm::Aead => "AEAD",
            MacAlgorithm::Gost28147Tc26zImit => "GOST28147-TC26Z-IMIT",
        };
        write!(f, "{}", s)
    }
}

/// PrfAlgorithm is the hash driving the key schedule of a suite.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrfAlgorithm {
    Sha256,
    Sha384,
    Streebog256,
}

impl fmt::Display for PrfAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PrfAlgorithm::Sha256 => write!(f, "SHA256"),
            PrfAlgorithm::Sha384 => write!(f, "SHA384"),
            PrfAlgorithm::Streebog256 => write!(f, "STREEBOG-256"),
        }
    }
}

/// CryptoBackend answers whether a primitive is usable in the running build.
pub trait CryptoBackend {
    fn cipher_exists(&self, cipher: CipherAlgorithm) -> bool;
    fn mac_exists(&self, mac: MacAlgorithm) -> bool;
}

/// BuiltinBackend reports the primitives compiled into this crate. The GOST
/// family is only present with the `gost` feature.
#[derive(Copy, Clone, Debug, Default)]
pub struct BuiltinBackend;

impl CryptoBackend for BuiltinBackend {
    fn cipher_exists(&self, cipher: CipherAlgorithm) -> bool {
        match cipher {
            CipherAlgorithm::Gost28147Tc26zCnt => cfg!(feature = "gost"),
            _ => true,
        }
    }

    fn mac_exists(&self, mac: MacAlgorithm) -> bool {
        match mac {
            MacAlgorithm::Gost28147Tc26zImit => cfg!(feature = "gost"),
            _ => true,
        }
    }
}

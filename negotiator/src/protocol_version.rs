use std::fmt;

/// ProtocolVersion identifies a TLS or DTLS protocol revision. Versions of
/// the same transport compare in release order; comparing a TLS version
/// with a DTLS version is meaningless.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProtocolVersion {
    #[serde(rename = "SSL3.0")]
    Ssl3 = 1,
    #[serde(rename = "TLS1.0")]
    Tls1_0 = 2,
    #[serde(rename = "TLS1.1")]
    Tls1_1 = 3,
    #[serde(rename = "TLS1.2")]
    Tls1_2 = 4,
    #[serde(rename = "TLS1.3")]
    Tls1_3 = 5,
    #[serde(rename = "DTLS0.9")]
    Dtls0_9 = 200,
    #[serde(rename = "DTLS1.0")]
    Dtls1_0 = 201,
    #[serde(rename = "DTLS1.2")]
    Dtls1_2 = 202,
}

pub const TLS_VERSION_MAX: ProtocolVersion = ProtocolVersion::Tls1_3;
pub const DTLS_VERSION_MIN: ProtocolVersion = ProtocolVersion::Dtls0_9;
pub const DTLS_VERSION_MAX: ProtocolVersion = ProtocolVersion::Dtls1_2;

impl ProtocolVersion {
    pub fn is_dtls(&self) -> bool {
        matches!(
            self,
            ProtocolVersion::Dtls0_9 | ProtocolVersion::Dtls1_0 | ProtocolVersion::Dtls1_2
        )
    }

    /// True for versions negotiated with TLS 1.3 handshake semantics, where
    /// suites carry no key exchange of their own.
    pub fn tls13_semantics(&self) -> bool {
        *self == ProtocolVersion::Tls1_3
    }

    /// The (major, minor) pair carried in record and hello headers.
    pub fn wire_version(&self) -> (u8, u8) {
        match *self {
            ProtocolVersion::Ssl3 => (3, 0),
            ProtocolVersion::Tls1_0 => (3, 1),
            ProtocolVersion::Tls1_1 => (3, 2),
            ProtocolVersion::Tls1_2 => (3, 3),
            ProtocolVersion::Tls1_3 => (3, 4),
            ProtocolVersion::Dtls0_9 => (1, 0),
            ProtocolVersion::Dtls1_0 => (254, 255),
            ProtocolVersion::Dtls1_2 => (254, 253),
        }
    }

    pub fn from_wire_version(major: u8, minor: u8) -> Option<Self> {
        match (major, minor) {
            (3, 0) => Some(ProtocolVersion::Ssl3),
            (3, 1) => Some(ProtocolVersion::Tls1_0),
            (3, 2) => Some(ProtocolVersion::Tls1_1),
            (3, 3) => Some(ProtocolVersion::Tls1_2),
            (3, 4) => Some(ProtocolVersion::Tls1_3),
            (1, 0) => Some(ProtocolVersion::Dtls0_9),
            (254, 255) => Some(ProtocolVersion::Dtls1_0),
            (254, 253) => Some(ProtocolVersion::Dtls1_2),
            _ => None,
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            ProtocolVersion::Ssl3 => "SSL3.0",
            ProtocolVersion::Tls1_0 => "TLS1.0",
            ProtocolVersion::Tls1_1 => "TLS1.1",
            ProtocolVersion::Tls1_2 => "TLS1.2",
            ProtocolVersion::Tls1_3 => "TLS1.3",
            ProtocolVersion::Dtls0_9 => "DTLS0.9",
            ProtocolVersion::Dtls1_0 => "DTLS1.0",
            ProtocolVersion::Dtls1_2 => "DTLS1.2",
        };
        write!(f, "{}", s)
    }
}

use std::fmt;

use crate::error::*;

// https://www.iana.org/assignments/tls-parameters/tls-parameters.xhtml#tls-parameters-8
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedGroup {
    Secp192r1 = 0x0013,
    Secp224r1 = 0x0015,
    Secp256r1 = 0x0017,
    Secp384r1 = 0x0018,
    Secp521r1 = 0x0019,
    X25519 = 0x001d,
    X448 = 0x001e,
    Ffdhe2048 = 0x0100,
    Ffdhe3072 = 0x0101,
    Ffdhe4096 = 0x0102,
    Ffdhe6144 = 0x0103,
    Ffdhe8192 = 0x0104,
    Unsupported,
}

/// Curve assumed when a peer offers EC suites without a supported_groups
/// extension (RFC 4492).
pub const DEFAULT_EC_GROUP: NamedGroup = NamedGroup::Secp256r1;

impl From<u16> for NamedGroup {
    fn from(val: u16) -> Self {
        match val {
            0x0013 => NamedGroup::Secp192r1,
            0x0015 => NamedGroup::Secp224r1,
            0x0017 => NamedGroup::Secp256r1,
            0x0018 => NamedGroup::Secp384r1,
            0x0019 => NamedGroup::Secp521r1,
            0x001d => NamedGroup::X25519,
            0x001e => NamedGroup::X448,
            0x0100 => NamedGroup::Ffdhe2048,
            0x0101 => NamedGroup::Ffdhe3072,
            0x0102 => NamedGroup::Ffdhe4096,
            0x0103 => NamedGroup::Ffdhe6144,
            0x0104 => NamedGroup::Ffdhe8192,
            _ => NamedGroup::Unsupported,
        }
    }
}

impl NamedGroup {
    pub fn is_ffdhe(&self) -> bool {
        matches!(
            self,
            NamedGroup::Ffdhe2048
                | NamedGroup::Ffdhe3072
                | NamedGroup::Ffdhe4096
                | NamedGroup::Ffdhe6144
                | NamedGroup::Ffdhe8192
        )
    }

    pub fn is_ec(&self) -> bool {
        !self.is_ffdhe() && *self != NamedGroup::Unsupported
    }

    pub fn from_name(name: &str) -> Result<Self> {
        let group = match name.to_ascii_lowercase().as_str() {
            "secp192r1" => NamedGroup::Secp192r1,
            "secp224r1" => NamedGroup::Secp224r1,
            "secp256r1" => NamedGroup::Secp256r1,
            "secp384r1" => NamedGroup::Secp384r1,
            "secp521r1" => NamedGroup::Secp521r1,
            "x25519" => NamedGroup::X25519,
            "x448" => NamedGroup::X448,
            "ffdhe2048" => NamedGroup::Ffdhe2048,
            "ffdhe3072" => NamedGroup::Ffdhe3072,
            "ffdhe4096" => NamedGroup::Ffdhe4096,
            "ffdhe6144" => NamedGroup::Ffdhe6144,
            "ffdhe8192" => NamedGroup::Ffdhe8192,
            _ => return Err(Error::ErrInvalidNamedGroup(name.to_owned())),
        };
        Ok(group)
    }
}

pub fn default_groups() -> Vec<NamedGroup> {
    vec![
        NamedGroup::X25519,
        NamedGroup::Secp256r1,
        NamedGroup::Secp384r1,
        NamedGroup::Secp521r1,
        NamedGroup::X448,
        NamedGroup::Ffdhe2048,
        NamedGroup::Ffdhe3072,
        NamedGroup::Ffdhe4096,
        NamedGroup::Ffdhe6144,
        NamedGroup::Ffdhe8192,
    ]
}

impl fmt::Display for NamedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            NamedGroup::Secp192r1 => "SECP192R1",
            NamedGroup::Secp224r1 => "SECP224R1",
            NamedGroup::Secp256r1 => "SECP256R1",
            NamedGroup::Secp384r1 => "SECP384R1",
            NamedGroup::Secp521r1 => "SECP521R1",
            NamedGroup::X25519 => "X25519",
            NamedGroup::X448 => "X448",
            NamedGroup::Ffdhe2048 => "FFDHE2048",
            NamedGroup::Ffdhe3072 => "FFDHE3072",
            NamedGroup::Ffdhe4096 => "FFDHE4096",
            NamedGroup::Ffdhe6144 => "FFDHE6144",
            NamedGroup::Ffdhe8192 => "FFDHE8192",
            NamedGroup::Unsupported => "unsupported group",
        };
        write!(f, "{}", s)
    }
}

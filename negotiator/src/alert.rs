use std::fmt;

use crate::error::Error;

/// Alert descriptions a handshake driver sends when negotiation fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AlertDescription {
    HandshakeFailure = 40,
    IllegalParameter = 47,
    DecodeError = 50,
    InsufficientSecurity = 71,
    InternalError = 80,
    InappropriateFallback = 86,
    Invalid,
}

impl fmt::Display for AlertDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AlertDescription::HandshakeFailure => write!(f, "HandshakeFailure"),
            AlertDescription::IllegalParameter => write!(f, "IllegalParameter"),
            AlertDescription::DecodeError => write!(f, "DecodeError"),
            AlertDescription::InsufficientSecurity => write!(f, "InsufficientSecurity"),
            AlertDescription::InternalError => write!(f, "InternalError"),
            AlertDescription::InappropriateFallback => write!(f, "InappropriateFallback"),
            _ => write!(f, "Invalid alert description"),
        }
    }
}

impl From<u8> for AlertDescription {
    fn from(val: u8) -> Self {
        match val {
            40 => AlertDescription::HandshakeFailure,
            47 => AlertDescription::IllegalParameter,
            50 => AlertDescription::DecodeError,
            71 => AlertDescription::InsufficientSecurity,
            80 => AlertDescription::InternalError,
            86 => AlertDescription::InappropriateFallback,
            _ => AlertDescription::Invalid,
        }
    }
}

impl Error {
    /// The fatal alert a handshake driver closes the connection with when
    /// this error ends the handshake.
    pub fn alert(&self) -> AlertDescription {
        match self {
            Error::ErrNoCipherSuites => AlertDescription::HandshakeFailure,
            Error::ErrInvalidPacketLength | Error::ErrLengthMismatch => {
                AlertDescription::DecodeError
            }
            _ => AlertDescription::InternalError,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_alert_description() {
        let tests = vec![
            (40u8, AlertDescription::HandshakeFailure),
            (50u8, AlertDescription::DecodeError),
            (80u8, AlertDescription::InternalError),
            (86u8, AlertDescription::InappropriateFallback),
            (0u8, AlertDescription::Invalid),
        ];

        for (raw, expected) in tests {
            let description = AlertDescription::from(raw);
            assert_eq!(description, expected, "from {}", raw);
            if description != AlertDescription::Invalid {
                assert_eq!(description as u8, raw);
            }
        }
    }

    #[test]
    fn test_error_alert() {
        let tests = vec![
            (Error::ErrNoCipherSuites, AlertDescription::HandshakeFailure),
            (Error::ErrInvalidPacketLength, AlertDescription::DecodeError),
            (Error::ErrLengthMismatch, AlertDescription::DecodeError),
            (Error::ErrMemoryAllocation, AlertDescription::InternalError),
            (Error::ErrNoPrioritiesWereSet, AlertDescription::InternalError),
        ];

        for (err, expected) in tests {
            assert_eq!(err.alert(), expected, "alert for {}", err);
        }
    }
}

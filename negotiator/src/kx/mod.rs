use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyExchangeAlgorithm {
    Rsa,
    DheDss,
    DheRsa,
    EcdheRsa,
    EcdheEcdsa,
    Psk,
    DhePsk,
    RsaPsk,
    EcdhePsk,
    Srp,
    SrpRsa,
    SrpDss,
    AnonDh,
    AnonEcdh,
    VkoGost12,
}

/// CredentialType names the kind of credential a key exchange consumes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CredentialType {
    Certificate,
    Anon,
    Psk,
    Srp,
}

impl fmt::Display for CredentialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CredentialType::Certificate => write!(f, "certificate"),
            CredentialType::Anon => write!(f, "anonymous"),
            CredentialType::Psk => write!(f, "psk"),
            CredentialType::Srp => write!(f, "srp"),
        }
    }
}

impl KeyExchangeAlgorithm {
    /// Ephemeral elliptic-curve exchanges, which need a negotiated EC group.
    pub fn is_ecc(&self) -> bool {
        matches!(
            self,
            KeyExchangeAlgorithm::EcdheRsa
                | KeyExchangeAlgorithm::EcdheEcdsa
                | KeyExchangeAlgorithm::AnonEcdh
                | KeyExchangeAlgorithm::EcdhePsk
        )
    }

    /// Finite-field ephemeral exchanges, which need a named group or
    /// server DH parameters.
    pub fn is_dhe(&self) -> bool {
        matches!(
            self,
            KeyExchangeAlgorithm::DheRsa
                | KeyExchangeAlgorithm::DheDss
                | KeyExchangeAlgorithm::AnonDh
                | KeyExchangeAlgorithm::DhePsk
        )
    }

    pub fn is_srp(&self) -> bool {
        matches!(
            self,
            KeyExchangeAlgorithm::Srp | KeyExchangeAlgorithm::SrpRsa | KeyExchangeAlgorithm::SrpDss
        )
    }

    pub fn server_credential_type(&self) -> CredentialType {
        match *self {
            KeyExchangeAlgorithm::Srp => CredentialType::Srp,
            KeyExchangeAlgorithm::Psk
            | KeyExchangeAlgorithm::DhePsk
            | KeyExchangeAlgorithm::RsaPsk
            | KeyExchangeAlgorithm::EcdhePsk => CredentialType::Psk,
            KeyExchangeAlgorithm::AnonDh | KeyExchangeAlgorithm::AnonEcdh => CredentialType::Anon,
            _ => CredentialType::Certificate,
        }
    }

    pub fn client_credential_type(&self) -> CredentialType {
        match *self {
            KeyExchangeAlgorithm::SrpRsa | KeyExchangeAlgorithm::SrpDss => CredentialType::Srp,
            _ => self.server_credential_type(),
        }
    }

    pub fn credential_type(&self, server: bool) -> CredentialType {
        if server {
            self.server_credential_type()
        } else {
            self.client_credential_type()
        }
    }
}

impl fmt::Display for KeyExchangeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            KeyExchangeAlgorithm::Rsa => "RSA",
            KeyExchangeAlgorithm::DheDss => "DHE-DSS",
            KeyExchangeAlgorithm::DheRsa => "DHE-RSA",
            KeyExchangeAlgorithm::EcdheRsa => "ECDHE-RSA",
            KeyExchangeAlgorithm::EcdheEcdsa => "ECDHE-ECDSA",
            KeyExchangeAlgorithm::Psk => "PSK",
            KeyExchangeAlgorithm::DhePsk => "DHE-PSK",
            KeyExchangeAlgorithm::RsaPsk => "RSA-PSK",
            KeyExchangeAlgorithm::EcdhePsk => "ECDHE-PSK",
            KeyExchangeAlgorithm::Srp => "SRP",
            KeyExchangeAlgorithm::SrpRsa => "SRP-RSA",
            KeyExchangeAlgorithm::SrpDss => "SRP-DSS",
            KeyExchangeAlgorithm::AnonDh => "ANON-DH",
            KeyExchangeAlgorithm::AnonEcdh => "ANON-ECDH",
            KeyExchangeAlgorithm::VkoGost12 => "VKO-GOST-12",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_kx_credential_mapping() {
        let tests = vec![
            (KeyExchangeAlgorithm::Rsa, CredentialType::Certificate, CredentialType::Certificate),
            (KeyExchangeAlgorithm::DheDss, CredentialType::Certificate, CredentialType::Certificate),
            (KeyExchangeAlgorithm::EcdheEcdsa, CredentialType::Certificate, CredentialType::Certificate),
            (KeyExchangeAlgorithm::VkoGost12, CredentialType::Certificate, CredentialType::Certificate),
            (KeyExchangeAlgorithm::Psk, CredentialType::Psk, CredentialType::Psk),
            (KeyExchangeAlgorithm::RsaPsk, CredentialType::Psk, CredentialType::Psk),
            (KeyExchangeAlgorithm::EcdhePsk, CredentialType::Psk, CredentialType::Psk),
            (KeyExchangeAlgorithm::Srp, CredentialType::Srp, CredentialType::Srp),
            (KeyExchangeAlgorithm::SrpRsa, CredentialType::Certificate, CredentialType::Srp),
            (KeyExchangeAlgorithm::SrpDss, CredentialType::Certificate, CredentialType::Srp),
            (KeyExchangeAlgorithm::AnonDh, CredentialType::Anon, CredentialType::Anon),
            (KeyExchangeAlgorithm::AnonEcdh, CredentialType::Anon, CredentialType::Anon),
        ];

        for (kx, server, client) in tests {
            assert_eq!(kx.credential_type(true), server, "server credential for {}", kx);
            assert_eq!(kx.credential_type(false), client, "client credential for {}", kx);
        }
    }

    #[test]
    fn test_kx_families_are_disjoint() {
        let all = [
            KeyExchangeAlgorithm::Rsa,
            KeyExchangeAlgorithm::DheDss,
            KeyExchangeAlgorithm::DheRsa,
            KeyExchangeAlgorithm::EcdheRsa,
            KeyExchangeAlgorithm::EcdheEcdsa,
            KeyExchangeAlgorithm::Psk,
            KeyExchangeAlgorithm::DhePsk,
            KeyExchangeAlgorithm::RsaPsk,
            KeyExchangeAlgorithm::EcdhePsk,
            KeyExchangeAlgorithm::Srp,
            KeyExchangeAlgorithm::SrpRsa,
            KeyExchangeAlgorithm::SrpDss,
            KeyExchangeAlgorithm::AnonDh,
            KeyExchangeAlgorithm::AnonEcdh,
            KeyExchangeAlgorithm::VkoGost12,
        ];

        for kx in all {
            let families = [kx.is_ecc(), kx.is_dhe(), kx.is_srp()];
            assert!(
                families.iter().filter(|f| **f).count() <= 1,
                "{} belongs to several families",
                kx
            );
        }
        assert!(KeyExchangeAlgorithm::AnonEcdh.is_ecc());
        assert!(KeyExchangeAlgorithm::DhePsk.is_dhe());
        assert!(!KeyExchangeAlgorithm::Rsa.is_dhe());
        assert!(!KeyExchangeAlgorithm::VkoGost12.is_ecc());
    }
}

use std::fmt;
use std::sync::Arc;

use crate::cipher_suite::CipherSuiteEntry;
use crate::error::*;
use crate::kx::{CredentialType, KeyExchangeAlgorithm};

pub type DhParamsCallback = Arc<dyn Fn() -> Option<Vec<u8>> + Send + Sync>;

/// Security parameter used to pick a well-known DH group automatically.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SecurityParameter {
    Low,
    Legacy,
    Medium,
    High,
    Ultra,
}

/// DhParamsSource is how a server credential provides DH parameters for
/// finite-field key exchanges that were not negotiated through a named group.
#[derive(Clone)]
pub enum DhParamsSource {
    /// PKCS#3 encoded parameters.
    Explicit(Vec<u8>),
    Callback(DhParamsCallback),
    SecurityLevel(SecurityParameter),
}

impl fmt::Debug for DhParamsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DhParamsSource::Explicit(params) => {
                f.debug_tuple("Explicit").field(&params.len()).finish()
            }
            DhParamsSource::Callback(_) => f.write_str("Callback"),
            DhParamsSource::SecurityLevel(level) => {
                f.debug_tuple("SecurityLevel").field(level).finish()
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CertificateKeyType {
    Rsa,
    Dsa,
    Ecdsa,
    Gost,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CertifiedKey {
    pub key_type: CertificateKeyType,
    /// DER encoded chain, leaf first.
    pub chain: Vec<Vec<u8>>,
}

#[derive(Clone, Debug, Default)]
pub struct CertificateCredentials {
    pub certificates: Vec<CertifiedKey>,
    pub dh_params: Option<DhParamsSource>,
}

#[derive(Clone, Debug, Default)]
pub struct AnonCredentials {
    pub dh_params: Option<DhParamsSource>,
}

#[derive(Clone, Debug, Default)]
pub struct PskCredentials {
    pub identity_hint: Option<String>,
    pub dh_params: Option<DhParamsSource>,
}

#[derive(Clone, Debug, Default)]
pub struct SrpCredentials {
    pub username: String,
}

/// CredentialStore holds the credentials configured for one endpoint.
#[derive(Clone, Debug, Default)]
pub struct CredentialStore {
    pub certificate: Option<CertificateCredentials>,
    pub anon: Option<AnonCredentials>,
    pub psk: Option<PskCredentials>,
    pub srp: Option<SrpCredentials>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_certificate(mut self, certificate: CertificateCredentials) -> Self {
        self.certificate = Some(certificate);
        self
    }

    pub fn with_anon(mut self, anon: AnonCredentials) -> Self {
        self.anon = Some(anon);
        self
    }

    pub fn with_psk(mut self, psk: PskCredentials) -> Self {
        self.psk = Some(psk);
        self
    }

    pub fn with_srp(mut self, srp: SrpCredentials) -> Self {
        self.srp = Some(srp);
        self
    }

    pub fn get(&self, credential_type: CredentialType) -> Option<Credentials<'_>> {
        match credential_type {
            CredentialType::Certificate => self.certificate.as_ref().map(Credentials::Certificate),
            CredentialType::Anon => self.anon.as_ref().map(Credentials::Anon),
            CredentialType::Psk => self.psk.as_ref().map(Credentials::Psk),
            CredentialType::Srp => self.srp.as_ref().map(Credentials::Srp),
        }
    }

    pub fn has(&self, credential_type: CredentialType) -> bool {
        self.get(credential_type).is_some()
    }
}

/// Credentials is a borrowed view of one configured credential, tagged by
/// its kind.
#[derive(Copy, Clone, Debug)]
pub enum Credentials<'a> {
    Certificate(&'a CertificateCredentials),
    Anon(&'a AnonCredentials),
    Psk(&'a PskCredentials),
    Srp(&'a SrpCredentials),
}

impl<'a> Credentials<'a> {
    pub fn credential_type(&self) -> CredentialType {
        match self {
            Credentials::Certificate(_) => CredentialType::Certificate,
            Credentials::Anon(_) => CredentialType::Anon,
            Credentials::Psk(_) => CredentialType::Psk,
            Credentials::Srp(_) => CredentialType::Srp,
        }
    }

    /// True when explicit parameters, a parameter callback or a security
    /// level for automatic selection is configured.
    pub fn has_dh_params(&self) -> bool {
        match self {
            Credentials::Certificate(c) => c.dh_params.is_some(),
            Credentials::Anon(c) => c.dh_params.is_some(),
            Credentials::Psk(c) => c.dh_params.is_some(),
            Credentials::Srp(_) => false,
        }
    }

    pub fn has_srp(&self) -> bool {
        matches!(self, Credentials::Srp(_))
    }
}

/// CertificateSelector picks the local certificate to present with a
/// candidate suite. It returns the index of the chosen certificate and must
/// leave no trace when it fails.
pub trait CertificateSelector {
    fn select_certificate(&mut self, suite: &CipherSuiteEntry) -> Result<usize>;
}

impl<F> CertificateSelector for F
where
    F: FnMut(&CipherSuiteEntry) -> Result<usize>,
{
    fn select_certificate(&mut self, suite: &CipherSuiteEntry) -> Result<usize> {
        self(suite)
    }
}

impl CertificateKeyType {
    /// Whether a key of this type can authenticate the suite's key exchange.
    /// TLS 1.3 suites accept any RSA or ECDSA key.
    pub fn is_compatible(&self, kx: Option<KeyExchangeAlgorithm>) -> bool {
        match kx {
            None => matches!(self, CertificateKeyType::Rsa | CertificateKeyType::Ecdsa),
            Some(KeyExchangeAlgorithm::Rsa)
            | Some(KeyExchangeAlgorithm::DheRsa)
            | Some(KeyExchangeAlgorithm::EcdheRsa)
            | Some(KeyExchangeAlgorithm::SrpRsa) => *self == CertificateKeyType::Rsa,
            Some(KeyExchangeAlgorithm::DheDss) | Some(KeyExchangeAlgorithm::SrpDss) => {
                *self == CertificateKeyType::Dsa
            }
            Some(KeyExchangeAlgorithm::EcdheEcdsa) => *self == CertificateKeyType::Ecdsa,
            Some(KeyExchangeAlgorithm::VkoGost12) => *self == CertificateKeyType::Gost,
            Some(_) => true,
        }
    }
}

// Picks the first configured certificate whose key fits the suite.
impl CertificateSelector for &CertificateCredentials {
    fn select_certificate(&mut self, suite: &CipherSuiteEntry) -> Result<usize> {
        self.certificates
            .iter()
            .position(|c| c.key_type.is_compatible(suite.kx))
            .ok_or(Error::ErrNoCertificateForCipherSuite)
    }
}

/// Selector for endpoints without certificates; every probe fails.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoCertificate;

impl CertificateSelector for NoCertificate {
    fn select_certificate(&mut self, _suite: &CipherSuiteEntry) -> Result<usize> {
        Err(Error::ErrNoCertificateForCipherSuite)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cipher_suite::{lookup_by_id, CipherSuiteId};

    fn rsa_and_ecdsa() -> CertificateCredentials {
        CertificateCredentials {
            certificates: vec![
                CertifiedKey {
                    key_type: CertificateKeyType::Ecdsa,
                    chain: vec![vec![0x30, 0x82]],
                },
                CertifiedKey {
                    key_type: CertificateKeyType::Rsa,
                    chain: vec![vec![0x30, 0x82]],
                },
            ],
            dh_params: None,
        }
    }

    #[test]
    fn test_credential_store_get() {
        let store = CredentialStore::new()
            .with_psk(PskCredentials::default())
            .with_anon(AnonCredentials {
                dh_params: Some(DhParamsSource::SecurityLevel(SecurityParameter::Medium)),
            });

        assert!(store.has(CredentialType::Psk));
        assert!(store.has(CredentialType::Anon));
        assert!(!store.has(CredentialType::Certificate));
        assert!(!store.has(CredentialType::Srp));

        let anon = store.get(CredentialType::Anon).expect("anon is configured");
        assert_eq!(anon.credential_type(), CredentialType::Anon);
        assert!(anon.has_dh_params());
        assert!(!anon.has_srp());

        let psk = store.get(CredentialType::Psk).expect("psk is configured");
        assert!(!psk.has_dh_params());
    }

    #[test]
    fn test_dh_params_sources() {
        let sources = vec![
            DhParamsSource::Explicit(vec![0x30, 0x06]),
            DhParamsSource::Callback(Arc::new(|| None)),
            DhParamsSource::SecurityLevel(SecurityParameter::High),
        ];

        for source in sources {
            let certificate = CertificateCredentials {
                certificates: vec![],
                dh_params: Some(source.clone()),
            };
            assert!(
                Credentials::Certificate(&certificate).has_dh_params(),
                "{:?}",
                source
            );
        }
    }

    #[test]
    fn test_certificate_credentials_selector() {
        let credentials = rsa_and_ecdsa();
        let mut selector = &credentials;

        let tests = vec![
            (0xc02b, Ok(0)),                                    // ECDHE-ECDSA
            (0xc02f, Ok(1)),                                    // ECDHE-RSA
            (0x1301, Ok(0)),                                    // TLS 1.3
            (0x0032, Err(Error::ErrNoCertificateForCipherSuite)), // DHE-DSS
        ];

        for (id, expected) in tests {
            let suite = lookup_by_id(CipherSuiteId(id)).expect("known suite");
            assert_eq!(
                selector.select_certificate(suite),
                expected,
                "selecting for {}",
                suite.display_name
            );
        }
    }

    #[test]
    fn test_closure_selector() {
        let mut probes = 0;
        let mut selector = |_: &CipherSuiteEntry| -> Result<usize> {
            probes += 1;
            Ok(7)
        };
        let suite = lookup_by_id(CipherSuiteId(0x002f)).expect("known suite");
        assert_eq!(selector.select_certificate(suite), Ok(7));
        assert_eq!(probes, 1);

        let mut none = NoCertificate;
        assert_eq!(
            none.select_certificate(suite),
            Err(Error::ErrNoCertificateForCipherSuite)
        );
    }
}

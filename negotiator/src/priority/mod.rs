use crate::algorithm::{BuiltinBackend, CryptoBackend};
use crate::cipher_suite::{self, CipherSuiteEntry, CipherSuiteId};
use crate::config::Priorities;
use crate::error::*;
use crate::protocol_version::{ProtocolVersion, DTLS_VERSION_MAX, TLS_VERSION_MAX};

/// PriorityList is the locally preferred subset of the registry, most
/// preferred first. A suite appears at most once.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PriorityList {
    entries: Vec<&'static CipherSuiteEntry>,
}

impl PriorityList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every registry row whose primitives the backend provides, in
    /// declaration order.
    pub fn all_available(backend: &dyn CryptoBackend) -> Self {
        cipher_suite::cipher_suites()
            .iter()
            .filter(|e| backend.cipher_exists(e.cipher) && backend.mac_exists(e.mac))
            .collect()
    }

    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let mut list = PriorityList::new();
        for name in names {
            let name = name.as_ref();
            let entry = cipher_suite::lookup_by_name(name)
                .ok_or_else(|| Error::ErrInvalidCipherSuiteName(name.to_owned()))?;
            list.push(entry);
        }
        Ok(list)
    }

    pub fn from_ids(ids: &[CipherSuiteId]) -> Result<Self> {
        let mut list = PriorityList::new();
        for id in ids {
            let entry = cipher_suite::lookup_by_id(*id).ok_or(Error::ErrUnknownCipherSuite)?;
            list.push(entry);
        }
        Ok(list)
    }

    /// Appends `entry` unless it is already listed. Returns whether it was added.
    pub fn push(&mut self, entry: &'static CipherSuiteEntry) -> bool {
        if self.contains(entry.id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn contains(&self, id: CipherSuiteId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&'static CipherSuiteEntry> {
        self.entries.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static CipherSuiteEntry> + '_ {
        self.entries.iter().copied()
    }
}

impl FromIterator<&'static CipherSuiteEntry> for PriorityList {
    fn from_iter<I: IntoIterator<Item = &'static CipherSuiteEntry>>(iter: I) -> Self {
        let mut list = PriorityList::new();
        for entry in iter {
            list.push(entry);
        }
        list
    }
}

impl TryFrom<Vec<String>> for PriorityList {
    type Error = Error;

    fn try_from(names: Vec<String>) -> Result<Self> {
        PriorityList::from_names(&names)
    }
}

impl From<PriorityList> for Vec<String> {
    fn from(list: PriorityList) -> Self {
        list.iter().map(|e| e.display_name.to_owned()).collect()
    }
}

impl Priorities {
    /// Highest enabled version for the transport.
    pub fn version_max(&self, dtls: bool) -> Option<ProtocolVersion> {
        self.protocols
            .iter()
            .copied()
            .filter(|v| v.is_dtls() == dtls)
            .max()
    }

    /// Lowest enabled version for the transport.
    pub fn version_min(&self, dtls: bool) -> Option<ProtocolVersion> {
        self.protocols
            .iter()
            .copied()
            .filter(|v| v.is_dtls() == dtls)
            .min()
    }

    /// Maps position `index` of the priority list to its registry index, for
    /// use with [`cipher_suite::cipher_suite_info`].
    ///
    /// Indices past the end report `ErrRequestedDataNotAvailable`. A listed
    /// suite that cannot be used with this build or with any enabled protocol
    /// reports `ErrUnknownCipherSuite`.
    pub fn cipher_suite_index(&self, index: usize) -> Result<usize> {
        self.cipher_suite_index_with(index, &BuiltinBackend)
    }

    pub fn cipher_suite_index_with(&self, index: usize, backend: &dyn CryptoBackend) -> Result<usize> {
        let entry = self
            .cipher_suites
            .get(index)
            .ok_or(Error::ErrRequestedDataNotAvailable)?;

        let mut max_tls = None;
        let mut max_dtls = None;
        for &version in &self.protocols {
            if version <= TLS_VERSION_MAX {
                max_tls = max_tls.max(Some(version));
            } else if version <= DTLS_VERSION_MAX {
                max_dtls = max_dtls.max(Some(version));
            }
        }

        let registry_index = cipher_suite::index_of(entry).ok_or(Error::ErrUnknownCipherSuite)?;
        if !backend.cipher_exists(entry.cipher) || !backend.mac_exists(entry.mac) {
            log::trace!(
                "{} ({}) lacks a primitive in this build",
                entry.id,
                entry.short_name()
            );
            return Err(Error::ErrUnknownCipherSuite);
        }

        let tls_ok = max_tls.map_or(false, |max| max >= entry.min_version);
        let dtls_ok = match (max_dtls, entry.min_dtls_version) {
            (Some(max), Some(min)) => max >= min,
            _ => false,
        };
        if tls_ok || dtls_ok {
            Ok(registry_index)
        } else {
            Err(Error::ErrUnknownCipherSuite)
        }
    }
}

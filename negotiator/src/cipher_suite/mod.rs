#[cfg(test)]
mod cipher_suite_test;

mod cipher_suite_table;

use std::collections::HashMap;
use std::fmt;
use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::algorithm::{CipherAlgorithm, MacAlgorithm, PrfAlgorithm};
use crate::error::*;
use crate::kx::KeyExchangeAlgorithm;
use crate::protocol_version::{ProtocolVersion, DTLS_VERSION_MAX};

use cipher_suite_table::CIPHER_SUITES;

// CipherSuiteId is the 2-byte IANA identifier of a cipher suite
// https://www.iana.org/assignments/tls-parameters/tls-parameters.xhtml#tls-parameters-4
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct CipherSuiteId(pub u16);

/// Safe renegotiation signaling value (RFC 5746).
pub const TLS_EMPTY_RENEGOTIATION_INFO_SCSV: CipherSuiteId = CipherSuiteId(0x00ff);
/// Downgrade protection signaling value (RFC 7507).
pub const TLS_FALLBACK_SCSV: CipherSuiteId = CipherSuiteId(0x5600);

impl CipherSuiteId {
    pub const fn from_bytes(id: [u8; 2]) -> Self {
        CipherSuiteId(((id[0] as u16) << 8) | id[1] as u16)
    }

    pub fn to_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub fn is_scsv(self) -> bool {
        self == TLS_EMPTY_RENEGOTIATION_INFO_SCSV || self == TLS_FALLBACK_SCSV
    }

    pub fn marshal<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u16::<BigEndian>(self.0)?;
        Ok(())
    }

    pub fn unmarshal<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(CipherSuiteId(reader.read_u16::<BigEndian>()?))
    }
}

impl From<u16> for CipherSuiteId {
    fn from(val: u16) -> Self {
        CipherSuiteId(val)
    }
}

impl fmt::Display for CipherSuiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [major, minor] = self.to_bytes();
        write!(f, "{:02x}.{:02x}", major, minor)
    }
}

/// CipherSuiteEntry is one immutable row of the registry.
///
/// Suites without a key exchange (`kx == None`) are TLS 1.3 suites: they are
/// valid only from TLS 1.3 on and fold confidentiality and integrity into a
/// single AEAD cipher, so `mac` is always [`MacAlgorithm::Aead`].
#[derive(Debug, PartialEq, Eq)]
pub struct CipherSuiteEntry {
    pub id: CipherSuiteId,
    pub display_name: &'static str,
    pub canonical_name: &'static str,
    pub cipher: CipherAlgorithm,
    pub kx: Option<KeyExchangeAlgorithm>,
    pub mac: MacAlgorithm,
    pub min_version: ProtocolVersion,
    pub max_version: ProtocolVersion,
    /// `None` when the suite is not defined for DTLS.
    pub min_dtls_version: Option<ProtocolVersion>,
    pub max_dtls_version: Option<ProtocolVersion>,
    pub prf: PrfAlgorithm,
}

impl CipherSuiteEntry {
    /// Display name without the `TLS_` prefix.
    pub fn short_name(&self) -> &'static str {
        self.display_name
            .strip_prefix("TLS_")
            .unwrap_or(self.display_name)
    }

    /// Lowest version the suite can be used with on the given transport.
    pub fn min_version_for(&self, dtls: bool) -> Option<ProtocolVersion> {
        if dtls {
            self.min_dtls_version
        } else {
            Some(self.min_version)
        }
    }

    /// Whether `version` falls inside the suite's range for the transport.
    pub fn supports_version(&self, version: ProtocolVersion, dtls: bool) -> bool {
        if dtls {
            match (self.min_dtls_version, self.max_dtls_version) {
                (Some(min), Some(max)) => min <= version && version <= max,
                _ => false,
            }
        } else {
            self.min_version <= version && version <= self.max_version
        }
    }
}

#[allow(clippy::too_many_arguments)]
const fn suite(
    id: [u8; 2],
    display_name: &'static str,
    canonical_name: &'static str,
    cipher: CipherAlgorithm,
    kx: KeyExchangeAlgorithm,
    mac: MacAlgorithm,
    min_version: ProtocolVersion,
    min_dtls_version: Option<ProtocolVersion>,
) -> CipherSuiteEntry {
    suite_prf(
        id,
        display_name,
        canonical_name,
        cipher,
        kx,
        mac,
        min_version,
        min_dtls_version,
        PrfAlgorithm::Sha256,
    )
}

#[allow(clippy::too_many_arguments)]
const fn suite_prf(
    id: [u8; 2],
    display_name: &'static str,
    canonical_name: &'static str,
    cipher: CipherAlgorithm,
    kx: KeyExchangeAlgorithm,
    mac: MacAlgorithm,
    min_version: ProtocolVersion,
    min_dtls_version: Option<ProtocolVersion>,
    prf: PrfAlgorithm,
) -> CipherSuiteEntry {
    let max_dtls_version = match min_dtls_version {
        Some(_) => Some(DTLS_VERSION_MAX),
        None => None,
    };
    CipherSuiteEntry {
        id: CipherSuiteId::from_bytes(id),
        display_name,
        canonical_name,
        cipher,
        kx: Some(kx),
        mac,
        min_version,
        max_version: ProtocolVersion::Tls1_2,
        min_dtls_version,
        max_dtls_version,
        prf,
    }
}

const fn suite_tls13(
    id: [u8; 2],
    display_name: &'static str,
    canonical_name: &'static str,
    cipher: CipherAlgorithm,
    prf: PrfAlgorithm,
) -> CipherSuiteEntry {
    CipherSuiteEntry {
        id: CipherSuiteId::from_bytes(id),
        display_name,
        canonical_name,
        cipher,
        kx: None,
        mac: MacAlgorithm::Aead,
        min_version: ProtocolVersion::Tls1_3,
        max_version: ProtocolVersion::Tls1_3,
        min_dtls_version: None,
        max_dtls_version: None,
        prf,
    }
}

lazy_static! {
    static ref SUITES_BY_ID: HashMap<CipherSuiteId, &'static CipherSuiteEntry> =
        CIPHER_SUITES.iter().map(|entry| (entry.id, entry)).collect();
}

/// All registry rows in declaration order.
pub fn cipher_suites() -> &'static [CipherSuiteEntry] {
    CIPHER_SUITES
}

pub fn count() -> usize {
    CIPHER_SUITES.len()
}

/// Row `index` in declaration order, whether or not its primitives are
/// available in this build.
pub fn entry_at(index: usize) -> Option<&'static CipherSuiteEntry> {
    CIPHER_SUITES.get(index)
}

/// Declaration index of a registry row.
pub fn index_of(entry: &CipherSuiteEntry) -> Option<usize> {
    CIPHER_SUITES.iter().position(|e| e.id == entry.id)
}

pub fn lookup_by_id(id: CipherSuiteId) -> Option<&'static CipherSuiteEntry> {
    SUITES_BY_ID.get(&id).copied()
}

pub fn lookup_kx_by_id(id: CipherSuiteId) -> Option<KeyExchangeAlgorithm> {
    lookup_by_id(id).and_then(|entry| entry.kx)
}

pub fn lookup_name_by_id(id: CipherSuiteId) -> Option<&'static str> {
    lookup_by_id(id).map(|entry| entry.short_name())
}

/// First row, in declaration order, carrying exactly this algorithm triple.
/// TLS 1.3 rows never match since they have no key exchange.
pub fn lookup_by_triple(
    kx: KeyExchangeAlgorithm,
    cipher: CipherAlgorithm,
    mac: MacAlgorithm,
) -> Option<&'static CipherSuiteEntry> {
    CIPHER_SUITES
        .iter()
        .find(|e| e.kx == Some(kx) && e.cipher == cipher && e.mac == mac)
}

/// Resolves a configured suite name. Display names, canonical IANA names
/// and short names are accepted, ignoring ASCII case.
pub fn lookup_by_name(name: &str) -> Option<&'static CipherSuiteEntry> {
    CIPHER_SUITES.iter().find(|e| {
        e.display_name.eq_ignore_ascii_case(name)
            || e.canonical_name.eq_ignore_ascii_case(name)
            || e.short_name().eq_ignore_ascii_case(name)
    })
}

/// Short name of the TLS 1.2-or-earlier suite built from these algorithms.
pub fn cipher_suite_get_name(
    kx: KeyExchangeAlgorithm,
    cipher: CipherAlgorithm,
    mac: MacAlgorithm,
) -> Option<&'static str> {
    lookup_by_triple(kx, cipher, mac).map(|entry| entry.short_name())
}

pub fn cipher_suite_get_id(
    kx: KeyExchangeAlgorithm,
    cipher: CipherAlgorithm,
    mac: MacAlgorithm,
) -> Result<CipherSuiteId> {
    lookup_by_triple(kx, cipher, mac)
        .map(|entry| entry.id)
        .ok_or(Error::ErrInvalidRequest)
}

/// CipherSuiteInfo is the introspection view of one registry row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CipherSuiteInfo {
    pub name: &'static str,
    pub id: CipherSuiteId,
    pub kx: Option<KeyExchangeAlgorithm>,
    pub cipher: CipherAlgorithm,
    pub mac: MacAlgorithm,
    pub min_version: ProtocolVersion,
}

/// Enumerates the registry; `None` once `index` reaches [`count`].
pub fn cipher_suite_info(index: usize) -> Option<CipherSuiteInfo> {
    entry_at(index).map(|entry| CipherSuiteInfo {
        name: entry.display_name,
        id: entry.id,
        kx: entry.kx,
        cipher: entry.cipher,
        mac: entry.mac,
        min_version: entry.min_version,
    })
}

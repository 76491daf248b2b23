use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

use crate::cipher_suite::*;
use crate::error::*;

/// PeerList is the suite list of a received ClientHello, in wire order,
/// reduced to ids the registry knows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PeerList {
    entries: Vec<&'static CipherSuiteEntry>,
    pub scsv_present: bool,
    pub fallback_scsv_present: bool,
}

impl PeerList {
    pub fn new(entries: Vec<&'static CipherSuiteEntry>) -> Self {
        PeerList {
            entries,
            ..Default::default()
        }
    }

    /// Builds the list from raw ids, dropping signaling values and ids
    /// unknown to the registry.
    pub fn from_ids(ids: &[CipherSuiteId]) -> Self {
        let mut list = PeerList::default();
        for id in ids {
            list.add(*id);
        }
        list
    }

    fn add(&mut self, id: CipherSuiteId) {
        if id == TLS_EMPTY_RENEGOTIATION_INFO_SCSV {
            self.scsv_present = true;
        } else if id == TLS_FALLBACK_SCSV {
            self.fallback_scsv_present = true;
        } else if let Some(entry) = lookup_by_id(id) {
            self.entries.push(entry);
        } else {
            log::warn!("peer offered unknown cipher suite {}", id);
        }
    }

    /// Decodes the `cipher_suites` field of a ClientHello: a 16-bit length
    /// followed by 2-byte suite ids.
    pub fn unmarshal<R: Read>(reader: &mut R) -> Result<Self> {
        let length = reader.read_u16::<BigEndian>()? as usize;
        if length % 2 != 0 {
            return Err(Error::ErrInvalidPacketLength);
        }

        let mut body = vec![0u8; length];
        reader
            .read_exact(&mut body)
            .map_err(|_| Error::ErrInvalidPacketLength)?;

        let mut list = PeerList::default();
        for id in body.chunks_exact(2) {
            list.add(CipherSuiteId::from_bytes([id[0], id[1]]));
        }
        Ok(list)
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

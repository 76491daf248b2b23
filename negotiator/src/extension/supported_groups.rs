use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::curve::named_group::*;
use crate::error::*;
use crate::session::Session;

// https://tools.ietf.org/html/rfc8422#section-5.1.1
// https://tools.ietf.org/html/rfc7919#section-2
#[derive(Clone, Debug, PartialEq)]
pub struct SupportedGroups {
    pub groups: Vec<NamedGroup>,
}

impl SupportedGroups {
    pub fn size(&self) -> usize {
        2 + 2 + self.groups.len() * 2
    }

    pub fn marshal<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u16::<BigEndian>(2 + 2 * self.groups.len() as u16)?;
        writer.write_u16::<BigEndian>(2 * self.groups.len() as u16)?;
        for v in &self.groups {
            writer.write_u16::<BigEndian>(*v as u16)?;
        }

        Ok(writer.flush()?)
    }

    pub fn unmarshal<R: Read>(reader: &mut R) -> Result<Self> {
        let extension_length = reader.read_u16::<BigEndian>()? as usize;
        let list_length = reader.read_u16::<BigEndian>()? as usize;
        if extension_length != list_length + 2 {
            return Err(Error::ErrLengthMismatch);
        }
        if list_length % 2 != 0 {
            return Err(Error::ErrInvalidPacketLength);
        }

        let mut groups = vec![];
        for _ in 0..list_length / 2 {
            let group = reader.read_u16::<BigEndian>()?.into();
            groups.push(group);
        }

        Ok(SupportedGroups { groups })
    }
}

impl Session {
    /// Records a received supported_groups extension and picks the
    /// candidate EC and FFDHE groups from it. With server precedence the
    /// local group order decides, otherwise the peer's order does.
    pub fn select_candidate_groups(&mut self, peer: &SupportedGroups) {
        let local = &self.priorities.groups;
        let state = &mut self.state;

        state.supported_groups_received = true;
        if peer.groups.iter().any(|g| g.is_ffdhe()) {
            state.have_ffdhe = true;
        }

        let ordered: Vec<NamedGroup> = if self.priorities.server_precedence {
            local
                .iter()
                .copied()
                .filter(|g| peer.groups.contains(g))
                .collect()
        } else {
            peer.groups
                .iter()
                .copied()
                .filter(|g| local.contains(g))
                .collect()
        };

        for group in ordered {
            if group.is_ec() && state.cand_ec_group.is_none() {
                log::trace!("candidate EC group {}", group);
                state.cand_ec_group = Some(group);
            } else if group.is_ffdhe() && state.cand_dh_group.is_none() {
                log::trace!("candidate DH group {}", group);
                state.cand_dh_group = Some(group);
            }
        }
    }
}

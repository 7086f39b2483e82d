use crate::reader::MessageReader;
use dug_domain::DomainError;

/// Size of the fixed DNS message header.
pub const HEADER_LEN: usize = 12;
/// Flags word for an outgoing query: standard QUERY opcode with RD set.
pub const QUERY_FLAGS: u16 = 0x0100;
/// The only class this resolver speaks (IN).
pub const CLASS_IN: u16 = 1;

/// Fixed 12-byte DNS message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsHeader {
    pub id: u16,
    pub flags: u16,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl DnsHeader {
    /// Header for a single-question recursive query.
    pub fn query(id: u16) -> Self {
        Self {
            id,
            flags: QUERY_FLAGS,
            qdcount: 1,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }

    pub fn encode(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&self.qdcount.to_be_bytes());
        buf.extend_from_slice(&self.ancount.to_be_bytes());
        buf.extend_from_slice(&self.nscount.to_be_bytes());
        buf.extend_from_slice(&self.arcount.to_be_bytes());
    }

    pub fn decode(reader: &mut MessageReader<'_>) -> Result<Self, DomainError> {
        Ok(Self {
            id: reader.read_u16()?,
            flags: reader.read_u16()?,
            qdcount: reader.read_u16()?,
            ancount: reader.read_u16()?,
            nscount: reader.read_u16()?,
            arcount: reader.read_u16()?,
        })
    }

    pub fn is_response(&self) -> bool {
        self.flags & 0x8000 != 0
    }

    pub fn truncated(&self) -> bool {
        self.flags & 0x0200 != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & 0x0100 != 0
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & 0x000F) as u8
    }
}

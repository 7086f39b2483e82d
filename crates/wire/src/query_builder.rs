//! DNS query construction in raw wire format.
//!
//! Builds the 12-byte header and single question section by hand; no
//! compression is used on the way out.

use crate::header::{DnsHeader, CLASS_IN};
use crate::name;
use dug_domain::{DnsQuestion, DomainError};
use tracing::debug;

/// Builds single-question DNS query messages.
pub struct QueryBuilder;

impl QueryBuilder {
    /// Serializes a recursive query for `question` with a random
    /// transaction ID.
    pub fn build_query(question: &DnsQuestion) -> Result<Vec<u8>, DomainError> {
        let (_, bytes) = Self::build_query_with_id(question)?;
        Ok(bytes)
    }

    /// Serializes a recursive query and returns the generated
    /// transaction ID alongside the bytes, for response matching.
    pub fn build_query_with_id(question: &DnsQuestion) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);
        let bytes = Self::encode(id, question)?;
        Ok((id, bytes))
    }

    /// Serializes a recursive query with a caller-chosen transaction ID.
    pub fn encode(id: u16, question: &DnsQuestion) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        DnsHeader::query(id).encode(&mut buf);
        name::encode_name(&mut buf, &question.domain)?;
        buf.extend_from_slice(&question.record_type.to_u16().to_be_bytes());
        buf.extend_from_slice(&CLASS_IN.to_be_bytes());

        debug!(
            id,
            domain = %question.domain,
            record_type = %question.record_type,
            len = buf.len(),
            "DNS query built"
        );
        Ok(buf)
    }
}

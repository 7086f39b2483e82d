use crate::header::DnsHeader;
use crate::name;
use crate::reader::MessageReader;
use dug_domain::{DnsAnswer, DomainError, RecordType};
use tracing::{debug, warn};

/// Parses raw DNS responses into typed A/AAAA answers.
pub struct ResponseParser;

impl ResponseParser {
    /// Walks header, question section, then `ANCOUNT` records, falling
    /// back to `NSCOUNT` when the answer section is empty.
    ///
    /// Fails without partial results:
    ///
    /// * `MalformedMessage` on truncation, reserved label types,
    ///   pointer chains, compressed question names, or an RDLENGTH that
    ///   does not match the record type
    /// * `UnsupportedRecord` when any walked record is not A or AAAA
    pub fn parse(response_bytes: &[u8]) -> Result<Vec<DnsAnswer>, DomainError> {
        let mut reader = MessageReader::new(response_bytes);
        let header = DnsHeader::decode(&mut reader)?;

        if header.truncated() {
            warn!(id = header.id, "response marked truncated, parsing anyway");
        }

        // Authoritative-only responses carry their records in the
        // authority section instead of the answer section.
        let record_count = if header.ancount > 0 {
            header.ancount
        } else {
            header.nscount
        };
        let used_authority = header.ancount == 0 && header.nscount > 0;

        for _ in 0..header.qdcount {
            Self::skip_question(&mut reader)?;
        }

        let mut answers = Vec::new();
        for _ in 0..record_count {
            answers.push(Self::read_record(&mut reader)?);
        }

        debug!(
            id = header.id,
            rcode = header.rcode(),
            answers = answers.len(),
            authority_fallback = used_authority,
            "DNS response parsed"
        );
        Ok(answers)
    }

    fn skip_question(reader: &mut MessageReader<'_>) -> Result<(), DomainError> {
        name::skip_inline_name(reader)?;
        // QTYPE + QCLASS
        reader.skip(4)
    }

    fn read_record(reader: &mut MessageReader<'_>) -> Result<DnsAnswer, DomainError> {
        let name = name::decode_name(reader)?;
        let rtype = reader.read_u16()?;
        let _class = reader.read_u16()?;
        let ttl = reader.read_u32()?;
        let rdlength = reader.read_u16()? as usize;

        let address = match RecordType::from_u16(rtype) {
            Some(RecordType::A) => {
                if rdlength != 4 {
                    return Err(DomainError::MalformedMessage(format!(
                        "A record with RDLENGTH {}",
                        rdlength
                    )));
                }
                render_ipv4(reader.take(4)?)
            }
            Some(RecordType::AAAA) => {
                if rdlength != 16 {
                    return Err(DomainError::MalformedMessage(format!(
                        "AAAA record with RDLENGTH {}",
                        rdlength
                    )));
                }
                render_ipv6(reader.take(16)?)
            }
            _ => return Err(DomainError::UnsupportedRecord(rtype)),
        };

        Ok(DnsAnswer { name, ttl, address })
    }
}

fn render_ipv4(octets: &[u8]) -> String {
    octets
        .iter()
        .map(|octet| octet.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Renders 16 bytes as eight colon-separated lowercase hex groups.
///
/// Leading zeros are stripped per group and an all-zero group renders as
/// `0`; runs of zero groups are never collapsed to `::`.
fn render_ipv6(bytes: &[u8]) -> String {
    let mut groups = Vec::with_capacity(8);
    for pair in bytes.chunks_exact(2) {
        let group = u16::from_be_bytes([pair[0], pair[1]]);
        groups.push(format!("{:x}", group));
    }
    groups.join(":")
}

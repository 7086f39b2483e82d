//! RFC 1035 domain-name encoding and decoding, including message
//! compression (pointer labels).

use crate::reader::MessageReader;
use dug_domain::DomainError;

pub const MAX_LABEL_LEN: usize = 63;
/// Limit on the encoded form: length bytes, label bytes and terminator.
pub const MAX_NAME_LEN: usize = 255;

/// Top two bits of a length byte that mark a compression pointer.
const POINTER_MASK: u8 = 0xC0;

/// Encodes `domain` as length-prefixed labels followed by the zero
/// terminator.
///
/// Rejected before any byte is written:
/// * Empty name or empty label (`"a..b"`, leading dot)
/// * Label longer than 63 bytes
/// * Label containing non-printable or non-ASCII bytes
/// * Encoded form longer than 255 bytes
///
/// A single trailing dot is accepted and ignored.
pub fn encode_name(buf: &mut Vec<u8>, domain: &str) -> Result<(), DomainError> {
    let trimmed = domain.strip_suffix('.').unwrap_or(domain);
    if trimmed.is_empty() {
        return Err(DomainError::InvalidName("empty domain name".to_string()));
    }

    let mut encoded_len = 1;
    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidName(format!(
                "empty label in '{}'",
                domain
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidName(format!(
                "label '{}' exceeds {} bytes",
                label, MAX_LABEL_LEN
            )));
        }
        if !label.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(DomainError::InvalidName(format!(
                "label '{}' contains non-printable bytes",
                label
            )));
        }
        encoded_len += 1 + label.len();
    }
    if encoded_len > MAX_NAME_LEN {
        return Err(DomainError::InvalidName(format!(
            "encoded name is {} bytes, limit is {}",
            encoded_len, MAX_NAME_LEN
        )));
    }

    for label in trimmed.split('.') {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);
    Ok(())
}

/// Decodes a possibly-compressed name at the reader's current position.
///
/// The cursor is left just past the name as it appears at the call site:
/// past the zero terminator for an inline name, or past the two pointer
/// bytes when the name ends in one.
///
/// Names may mix inline labels with a terminating pointer, but only one
/// level of indirection is honored; a pointer reached after a jump is
/// treated as malformed, as are the reserved `01`/`10` label types.
pub fn decode_name(reader: &mut MessageReader<'_>) -> Result<String, DomainError> {
    let mut name = String::new();
    let mut resume: Option<usize> = None;

    loop {
        let len = reader.read_u8()?;
        if len == 0 {
            break;
        }
        if len & POINTER_MASK == POINTER_MASK {
            if resume.is_some() {
                return Err(DomainError::MalformedMessage(
                    "compression pointer chain".to_string(),
                ));
            }
            let low = reader.read_u8()?;
            let target = pointer_offset(len, low);
            resume = Some(reader.position());
            reader.seek(target)?;
            continue;
        }
        if len & POINTER_MASK != 0 {
            return Err(DomainError::MalformedMessage(format!(
                "reserved label type 0x{:02x}",
                len & POINTER_MASK
            )));
        }
        let label = reader.take(len as usize)?;
        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(&String::from_utf8_lossy(label));
    }

    if let Some(pos) = resume {
        reader.seek(pos)?;
    }
    Ok(name)
}

/// Advances the reader past an inline name (labels + terminator).
///
/// Compression pointers are not valid here; question names are always
/// written inline.
pub fn skip_inline_name(reader: &mut MessageReader<'_>) -> Result<(), DomainError> {
    loop {
        let len = reader.read_u8()?;
        if len == 0 {
            return Ok(());
        }
        if len & POINTER_MASK != 0 {
            return Err(DomainError::MalformedMessage(
                "compressed name in question section".to_string(),
            ));
        }
        reader.skip(len as usize)?;
    }
}

/// Absolute offset carried in a two-byte compression pointer.
fn pointer_offset(high: u8, low: u8) -> usize {
    (((high & 0x3F) as usize) << 8) | low as usize
}

#![allow(dead_code)]

/// Composes raw DNS response buffers for parser tests.
///
/// Offsets are the caller's responsibility. The first question name
/// starts at byte 12, which is what answer-name compression pointers
/// here usually target.
pub struct ResponseBuilder {
    buf: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(512),
        }
    }

    pub fn header(mut self, id: u16, flags: u16, counts: [u16; 4]) -> Self {
        self.buf.extend_from_slice(&id.to_be_bytes());
        self.buf.extend_from_slice(&flags.to_be_bytes());
        for count in counts {
            self.buf.extend_from_slice(&count.to_be_bytes());
        }
        self
    }

    /// Standard response header: QR + RD + RA set, NOERROR, one question.
    pub fn response_header(self, id: u16, ancount: u16, nscount: u16) -> Self {
        self.header(id, 0x8180, [1, ancount, nscount, 0])
    }

    pub fn question(mut self, domain: &str, qtype: u16) -> Self {
        self = self.name_inline(domain);
        self.buf.extend_from_slice(&qtype.to_be_bytes());
        self.buf.extend_from_slice(&1u16.to_be_bytes());
        self
    }

    pub fn name_inline(mut self, domain: &str) -> Self {
        for label in domain.split('.') {
            self.buf.push(label.len() as u8);
            self.buf.extend_from_slice(label.as_bytes());
        }
        self.buf.push(0);
        self
    }

    pub fn name_pointer(mut self, offset: u16) -> Self {
        self.buf.extend_from_slice(&(0xC000 | offset).to_be_bytes());
        self
    }

    /// Fixed RR fields that follow the name: TYPE, CLASS IN, TTL, RDLENGTH.
    pub fn record_fields(mut self, rtype: u16, ttl: u32, rdlength: u16) -> Self {
        self.buf.extend_from_slice(&rtype.to_be_bytes());
        self.buf.extend_from_slice(&1u16.to_be_bytes());
        self.buf.extend_from_slice(&ttl.to_be_bytes());
        self.buf.extend_from_slice(&rdlength.to_be_bytes());
        self
    }

    /// A record whose name is a pointer to the question name.
    pub fn a_record_compressed(mut self, ttl: u32, octets: [u8; 4]) -> Self {
        self = self.name_pointer(12).record_fields(1, ttl, 4);
        self.buf.extend_from_slice(&octets);
        self
    }

    /// AAAA record whose name is a pointer to the question name.
    pub fn aaaa_record_compressed(mut self, ttl: u32, octets: [u8; 16]) -> Self {
        self = self.name_pointer(12).record_fields(28, ttl, 16);
        self.buf.extend_from_slice(&octets);
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

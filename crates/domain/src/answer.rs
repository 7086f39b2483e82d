use std::fmt;

/// One decoded answer record.
///
/// `address` is stored pre-rendered: dotted decimal for A records, eight
/// colon-separated hex groups for AAAA records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    pub name: String,
    pub ttl: u32,
    pub address: String,
}

impl DnsAnswer {
    pub fn new(name: impl Into<String>, ttl: u32, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ttl,
            address: address.into(),
        }
    }
}

impl fmt::Display for DnsAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.ttl, self.address)
    }
}

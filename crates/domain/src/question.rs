use crate::record_type::RecordType;

/// A single DNS question: one domain, one record type, class IN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    pub domain: String,
    pub record_type: RecordType,
}

impl DnsQuestion {
    pub fn new(domain: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }
}

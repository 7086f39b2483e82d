//! Dug Domain Layer
pub mod answer;
pub mod config;
pub mod errors;
pub mod question;
pub mod record_type;

pub use answer::DnsAnswer;
pub use config::{CliOverrides, ConfigError, ResolverConfig, PUBLIC_DNS_SERVERS};
pub use errors::DomainError;
pub use question::DnsQuestion;
pub use record_type::RecordType;

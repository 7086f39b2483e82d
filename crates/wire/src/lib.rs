//! Dug Wire Layer
//!
//! Hand-rolled DNS wire-format codec: query serialization and A/AAAA
//! response parsing, including RFC 1035 name compression.
pub mod header;
pub mod name;
pub mod query_builder;
pub mod reader;
pub mod response_parser;

pub use header::{DnsHeader, CLASS_IN, HEADER_LEN, QUERY_FLAGS};
pub use query_builder::QueryBuilder;
pub use reader::MessageReader;
pub use response_parser::ResponseParser;

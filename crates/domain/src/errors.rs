use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidName(String),

    #[error("Unknown query type: {0}")]
    UnsupportedType(String),

    #[error("Unsupported record type in answer: {0}")]
    UnsupportedRecord(u16),

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Invalid server address: {0}")]
    InvalidServerAddress(String),

    #[error("Query timeout waiting for {server}")]
    QueryTimeout { server: String },

    #[error("I/O error: {0}")]
    Io(String),
}

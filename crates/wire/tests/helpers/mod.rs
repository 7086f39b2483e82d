pub mod response_builder;

pub use response_builder::ResponseBuilder;

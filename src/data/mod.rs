pub mod payload;
pub mod request;

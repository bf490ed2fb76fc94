pub mod conversion;
pub mod encoding;
pub mod env;
pub mod error;
pub mod logger;

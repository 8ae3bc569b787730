pub mod database_definition;
pub mod error;
pub mod naming;
pub mod scalar;
pub mod transport;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;

mod client;
mod error;
pub mod queries;
mod session;

pub use client::{Client, ClientConfig, DEFAULT_BASE_URL};
pub use error::{Error, GraphqlError, Result};
pub use session::Session;

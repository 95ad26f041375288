pub mod client;
pub mod error;

pub use client::{ApiClient, ClientError, Transport};
pub use error::ApiError;

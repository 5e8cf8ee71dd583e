//! Types shared between the gateway's feature crates and its server layer

mod error;

pub use error::{ErrorBody, ErrorDetails, HttpError};

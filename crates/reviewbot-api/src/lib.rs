//! Client for the homework review status API.
//!
//! One endpoint, one verb: `GET <endpoint>?from_date=<cursor>` with an
//! `Authorization: OAuth <token>` header. The crate splits the call into
//! the HTTP request itself ([`client`]) and the shape validation of the
//! JSON body ([`response`]), with one [`ApiError`] variant per failure
//! category so callers can tell transport trouble from a malformed body.

pub mod client;
pub mod error;
pub mod response;

pub use client::HomeworkClient;
pub use error::{ApiError, Result};
pub use response::{Homework, StatusBatch};

//! A functional HTTP response API with content negotiation
//!
//! This crate builds [`http::Response`] values whose body is a [`ResponseBody`]. A response
//! is started from a status, headers are added fluently, and exactly one terminal call
//! attaches the body:
//!
//! - [`BodyBuilder::body`] / [`BodyBuilder::body_value_and_await`]: a single value
//! - [`BodyBuilder::body_and_await`]: a lazily encoded stream of elements
//! - [`BodyBuilder::build`] / [`BodyBuilder::build_and_await`]: no body
//!
//! # Example
//!
//! ```no_run
//! use http::StatusCode;
//! use http_body_util::BodyExt;
//! use micro_response::{ElementType, status};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let response = status(StatusCode::OK)
//!     .content_type(&mime::TEXT_PLAIN)
//!     .header("X-TEST-HEADER", "TEST-VALUE")
//!     .body("Hello World")?;
//!
//! let bytes = response.into_body().collect().await?.to_bytes();
//! assert_eq!(&bytes[..], b"Hello World");
//!
//! let response = status(StatusCode::OK)
//!     .content_type(&mime::APPLICATION_JSON)
//!     .body_and_await(futures::stream::iter(vec![1, 2]), ElementType::of())
//!     .await?;
//!
//! let bytes = response.into_body().collect().await?.to_bytes();
//! assert_eq!(&bytes[..], b"[1,2]");
//! # Ok(())
//! # }
//! ```
//!
//! # Content negotiation
//!
//! The [`Codec`] is picked from the `Content-Type` header present at the terminal call.
//! See the [`codec`] module for the full table.
//!
//! # Error Handling
//!
//! - [`ResponseError::Http`]: an invalid status or header, reported by the terminal call
//! - [`ResponseError::Encode`]: the body couldn't be written with the negotiated codec
//!
//! For streamed bodies encoding happens while the body is polled, so an element that
//! fails to encode ends the body with an error frame instead.

mod body;
mod builder;
mod error;
mod reactive;

pub mod codec;

pub use body::ResponseBody;
pub use builder::{BodyBuilder, ok, status};
pub use codec::{Codec, ElementType, Entity};
pub use error::{EncodeError, ResponseError};

//! A scoped builder DSL over [`micro_response`]
//!
//! Instead of chaining builder calls, a response is described inside a block that
//! receives the builder, and the block's result is handed to the matching
//! `micro_response` terminal call. A DSL-built response is the same value as the one the
//! fluent API builds from the same inputs: same status, same headers, same body.
//!
//! There are two flavours:
//!
//! - [`blocking`]: `response(|r| ..)` returns the response right away
//! - [`reactive`]: `response(|r| ..).await`, with support for streamed bodies
//!
//! Both provide `make_default_response`, which captures a status, content type and
//! headers once and applies them before every block.
//!
//! # Example
//!
//! ```
//! use http::StatusCode;
//! use micro_response_dsl::blocking::make_default_response;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! let ok_json = make_default_response(
//!     StatusCode::OK,
//!     Some(mime::APPLICATION_JSON),
//!     Some([("X-TEST-HEADER", "TEST-VALUE")].into()),
//! );
//!
//! let response = ok_json
//!     .respond(|r| {
//!         r.body(User { name: "Jun".to_string(), age: 25 });
//!     })
//!     .unwrap();
//!
//! assert_eq!(response.status(), StatusCode::OK);
//! assert_eq!(response.headers()[http::header::CONTENT_TYPE], "application/json");
//! ```
//!
//! # Body resolution
//!
//! When the block is done, the body is resolved once:
//!
//! 1. a value body, if one was set and isn't null (`None`, `()`)
//! 2. otherwise a stream body, if one was set with an element type
//! 3. otherwise no body
//!
//! Errors from the response builder (invalid header names or values, values the
//! negotiated codec can't write) are returned as they are.

mod body;
mod headers;
mod parts;
mod preset;

pub mod blocking;
pub mod reactive;

pub use headers::{Headers, HeadersBuilder};
pub use parts::ResponseParts;
pub use preset::Preset;

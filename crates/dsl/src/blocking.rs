//! The response DSL for blocking handlers.
//!
//! ```
//! use http::StatusCode;
//! use micro_response_dsl::blocking::response;
//!
//! let response = response(|r| {
//!     r.status(StatusCode::OK)
//!         .content_type(mime::TEXT_PLAIN)
//!         .header(("X-TEST-HEADER", "TEST-VALUE"))
//!         .body("Hello World");
//! })
//! .unwrap();
//!
//! assert_eq!(response.status(), StatusCode::OK);
//! assert_eq!(response.headers()["x-test-header"], "TEST-VALUE");
//! ```

use crate::headers::Headers;
use crate::parts::{ResponseParts, impl_head_setters};
use crate::preset::Preset;
use http::{Response, StatusCode};
use micro_response::{Entity, ResponseBody, ResponseError};
use mime::Mime;
use serde::Serialize;
use tracing::trace;

/// Builds a response by running `init` against a fresh [`ResponseBuilder`].
pub fn response<F>(init: F) -> Result<Response<ResponseBody>, ResponseError>
where
    F: FnOnce(&mut ResponseBuilder),
{
    let mut builder = ResponseBuilder::new();
    init(&mut builder);
    builder.build()
}

/// Captures a status, content type and headers that every response built through the
/// returned [`DefaultResponse`] starts from.
pub fn make_default_response(status: StatusCode, content_type: Option<Mime>, headers: Option<Headers>) -> DefaultResponse {
    DefaultResponse { preset: Preset::new(status, content_type, headers) }
}

#[derive(Debug, Default)]
pub struct ResponseBuilder {
    parts: ResponseParts,
    body: Option<Entity>,
}

impl_head_setters!(ResponseBuilder);

impl ResponseBuilder {
    /// Sets the body, replacing any previous one. A null value (`None`, `()`) means no body.
    pub fn body<T>(&mut self, value: T) -> &mut Self
    where
        T: Serialize + Send + 'static,
    {
        self.body = Some(Entity::new(value));
        self
    }

    /// Sets the body, or clears it when `value` is `None`.
    pub fn body_opt<T>(&mut self, value: Option<T>) -> &mut Self
    where
        T: Serialize + Send + 'static,
    {
        self.body = value.map(Entity::new);
        self
    }

    pub fn build(self) -> Result<Response<ResponseBody>, ResponseError> {
        let builder = self.parts.into_body_builder();

        match self.body.filter(|entity| !entity.is_null()) {
            Some(entity) => builder.entity(entity),
            None => builder.build(),
        }
    }
}

/// The entry point returned by [`make_default_response`].
#[derive(Debug, Clone)]
pub struct DefaultResponse {
    preset: Preset,
}

impl DefaultResponse {
    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    /// Builds a response from the preset; `init` runs last and may override any of it.
    pub fn respond<F>(&self, init: F) -> Result<Response<ResponseBody>, ResponseError>
    where
        F: FnOnce(&mut ResponseBuilder),
    {
        trace!(status = %self.preset.status, "respond with default response");

        let mut builder = ResponseBuilder::from_preset(&self.preset);
        init(&mut builder);
        builder.build()
    }
}

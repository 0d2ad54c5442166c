//! The response DSL for async handlers.
//!
//! Besides a single value, a body can be a [`Stream`]. Its elements are encoded lazily,
//! with the encoder picked by the declared element type: either given explicitly with
//! [`ResponseBuilder::body_with_type`], or taken from the stream's `Item` type by
//! [`ResponseBuilder::body`].
//!
//! ```
//! use http::StatusCode;
//! use micro_response_dsl::reactive::response;
//!
//! # async fn run() -> Result<(), micro_response::ResponseError> {
//! let response = response(|r| {
//!     r.status(StatusCode::OK)
//!         .content_type(mime::APPLICATION_JSON)
//!         .body(|| futures::stream::iter(vec!["Hello", "World"]));
//! })
//! .await?;
//!
//! assert!(response.body().is_stream());
//! # Ok(())
//! # }
//! ```

use crate::body::{BodyDescriptor, StreamSlot};
use crate::headers::Headers;
use crate::parts::{ResponseParts, impl_head_setters};
use crate::preset::Preset;
use futures::Stream;
use http::{Response, StatusCode};
use micro_response::{ElementType, Entity, ResponseBody, ResponseError};
use mime::Mime;
use serde::Serialize;
use tracing::trace;

/// Builds a response by running `init` against a fresh [`ResponseBuilder`].
pub async fn response<F>(init: F) -> Result<Response<ResponseBody>, ResponseError>
where
    F: FnOnce(&mut ResponseBuilder),
{
    let mut builder = ResponseBuilder::new();
    init(&mut builder);
    builder.build().await
}

/// Captures a status, content type and headers that every response built through the
/// returned [`DefaultResponse`] starts from.
pub fn make_default_response(status: StatusCode, content_type: Option<Mime>, headers: Option<Headers>) -> DefaultResponse {
    DefaultResponse { preset: Preset::new(status, content_type, headers) }
}

#[derive(Debug, Default)]
pub struct ResponseBuilder {
    parts: ResponseParts,
    value: Option<Entity>,
    stream: Option<StreamSlot>,
}

impl_head_setters!(ResponseBuilder);

impl ResponseBuilder {
    /// Sets a single value body. A non-null value takes precedence over a stream body; a
    /// null one (`None`, `()`) lets a stream body through.
    pub fn body_value<T>(&mut self, value: T) -> &mut Self
    where
        T: Serialize + Send + 'static,
    {
        self.value = Some(Entity::new(value));
        self
    }

    /// Sets a single value body, or clears it when `value` is `None`.
    pub fn body_value_opt<T>(&mut self, value: Option<T>) -> &mut Self
    where
        T: Serialize + Send + 'static,
    {
        self.value = value.map(Entity::new);
        self
    }

    /// Sets a stream body with an explicit element type.
    ///
    /// Without an element type there is no way to encode the elements, and the response
    /// is built without a body.
    pub fn body_with_type<S, P>(&mut self, element_type: Option<ElementType<S::Item>>, producer: P) -> &mut Self
    where
        S: Stream + Send + 'static,
        P: FnOnce() -> S,
    {
        self.body_opt_with_type(element_type, || Some(producer()))
    }

    /// Same as [`ResponseBuilder::body_with_type`] for a producer that may have no stream
    /// to give. `None` clears any stream body set before.
    pub fn body_opt_with_type<S, P>(&mut self, element_type: Option<ElementType<S::Item>>, producer: P) -> &mut Self
    where
        S: Stream + Send + 'static,
        P: FnOnce() -> Option<S>,
    {
        self.stream = producer().map(|stream| StreamSlot::new(element_type, stream));
        self
    }

    /// Sets a stream body whose element type is the stream's `Item`.
    pub fn body<S, P>(&mut self, producer: P) -> &mut Self
    where
        S: Stream + Send + 'static,
        S::Item: Serialize,
        P: FnOnce() -> S,
    {
        self.body_with_type(Some(ElementType::of()), producer)
    }

    /// Sets a stream body whose element type is the stream's `Item`, or clears it when
    /// the producer returns `None`.
    pub fn body_opt<S, P>(&mut self, producer: P) -> &mut Self
    where
        S: Stream + Send + 'static,
        S::Item: Serialize,
        P: FnOnce() -> Option<S>,
    {
        self.body_opt_with_type(Some(ElementType::of()), producer)
    }

    pub async fn build(self) -> Result<Response<ResponseBody>, ResponseError> {
        let builder = self.parts.into_body_builder();

        match BodyDescriptor::resolve(self.value, self.stream) {
            BodyDescriptor::Value(entity) => builder.entity_and_await(entity).await,
            BodyDescriptor::Stream(stream) => stream.write(builder).await,
            BodyDescriptor::Empty => builder.build_and_await().await,
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
    pub async fn respond<F>(&self, init: F) -> Result<Response<ResponseBody>, ResponseError>
    where
        F: FnOnce(&mut ResponseBuilder),
    {
        trace!(status = %self.preset.status, "respond with default response");

        let mut builder = ResponseBuilder::from_preset(&self.preset);
        init(&mut builder);
        builder.build().await
    }
}

//! Awaitable terminal calls for handlers running on an async runtime.
//!
//! The blocking terminals in [`crate::builder`] fully encode the body before returning.
//! The calls here return futures, and [`BodyBuilder::body_and_await`] additionally keeps
//! the body lazy: elements are pulled and encoded only while the body is being written.

use crate::builder::BodyBuilder;
use crate::codec::{Codec, ElementType, EncodedStream, Entity};
use crate::{ResponseBody, ResponseError};
use futures::Stream;
use http::Response;
use serde::Serialize;
use tracing::trace;

impl BodyBuilder {
    /// Finishes the response with a single value body.
    pub async fn body_value_and_await<T>(self, value: T) -> Result<Response<ResponseBody>, ResponseError>
    where
        T: Serialize + Send + 'static,
    {
        self.entity_and_await(Entity::new(value)).await
    }

    pub async fn entity_and_await(self, entity: Entity) -> Result<Response<ResponseBody>, ResponseError> {
        self.entity(entity)
    }

    /// Finishes the response with a streamed body.
    ///
    /// `element_type` picks the encoder for every element; the content type picks the
    /// framing around them.
    pub async fn body_and_await<S>(self, stream: S, element_type: ElementType<S::Item>) -> Result<Response<ResponseBody>, ResponseError>
    where
        S: Stream + Send + 'static,
    {
        let head = self.head()?;
        let codec = Codec::from_headers(head.headers());
        trace!(codec = codec.name(), element_type = element_type.name(), "write streamed body");

        let body = EncodedStream::new(stream, element_type, codec);
        Ok(head.map(|()| ResponseBody::stream(body)))
    }

    /// Finishes the response without a body.
    pub async fn build_and_await(self) -> Result<Response<ResponseBody>, ResponseError> {
        self.build()
    }
}

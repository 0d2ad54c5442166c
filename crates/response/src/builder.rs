//! The fluent response builder.
//!
//! [`BodyBuilder`] collects the status line and headers, then one terminal call attaches
//! the body and produces the finished [`Response`]. Header conversion errors are kept
//! inside the builder and reported by the terminal call, never earlier.

use crate::codec::{Codec, Entity};
use crate::{ResponseBody, ResponseError};
use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use http::response::Builder;
use http::{Response, StatusCode};
use mime::Mime;
use serde::Serialize;
use tracing::trace;

/// Starts a response with the given status.
pub fn status(status: StatusCode) -> BodyBuilder {
    BodyBuilder::new(status)
}

/// Starts a `200 OK` response.
pub fn ok() -> BodyBuilder {
    BodyBuilder::new(StatusCode::OK)
}

#[derive(Debug)]
pub struct BodyBuilder {
    inner: Builder,
}

impl BodyBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self { inner: Response::builder().status(status) }
    }

    /// Appends a header.
    ///
    /// Like [`http::response::Builder::header`], a repeated name adds another value
    /// instead of replacing the first one.
    pub fn header<K, V>(self, key: K, value: V) -> Self
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
    {
        Self { inner: self.inner.header(key, value) }
    }

    /// Appends every pair in order.
    pub fn headers<I, K, V>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
    {
        headers.into_iter().fold(self, |builder, (key, value)| builder.header(key, value))
    }

    /// Sets the `Content-Type` header, replacing any previous content type.
    pub fn content_type(mut self, content_type: &Mime) -> Self {
        if let Some(headers) = self.inner.headers_mut() {
            headers.remove(CONTENT_TYPE);
        }
        self.header(CONTENT_TYPE, content_type.as_ref())
    }

    /// Finishes the response with a single value body, written with the codec
    /// negotiated from the content type.
    pub fn body<T>(self, value: T) -> Result<Response<ResponseBody>, ResponseError>
    where
        T: Serialize + Send + 'static,
    {
        self.entity(Entity::new(value))
    }

    /// Same as [`BodyBuilder::body`] for a value whose type has already been erased.
    pub fn entity(self, entity: Entity) -> Result<Response<ResponseBody>, ResponseError> {
        let head = self.head()?;
        let codec = Codec::from_headers(head.headers());
        trace!(codec = codec.name(), entity = entity.type_name(), "write entity body");

        let bytes = entity.encode(codec)?;
        Ok(head.map(|()| ResponseBody::once(bytes)))
    }

    /// Finishes the response without a body.
    pub fn build(self) -> Result<Response<ResponseBody>, ResponseError> {
        let head = self.head()?;
        Ok(head.map(|()| ResponseBody::empty()))
    }

    pub(crate) fn head(self) -> Result<Response<()>, ResponseError> {
        Ok(self.inner.body(())?)
    }
}

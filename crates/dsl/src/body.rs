use futures::future::BoxFuture;
use futures::{FutureExt, Stream};
use http::Response;
use micro_response::{BodyBuilder, ElementType, Entity, ResponseBody, ResponseError};
use std::fmt;
use tracing::debug;

type WriteStream = Box<dyn FnOnce(BodyBuilder) -> BoxFuture<'static, Result<Response<ResponseBody>, ResponseError>> + Send>;

/// A stream body together with its declared element type.
pub(crate) struct DeclaredStream {
    element_type: &'static str,
    write: WriteStream,
}

impl DeclaredStream {
    pub(crate) fn new<S>(element_type: ElementType<S::Item>, stream: S) -> Self
    where
        S: Stream + Send + 'static,
    {
        Self {
            element_type: element_type.name(),
            write: Box::new(move |builder: BodyBuilder| builder.body_and_await(stream, element_type).boxed()),
        }
    }

    pub(crate) fn element_type(&self) -> &'static str {
        self.element_type
    }

    pub(crate) async fn write(self, builder: BodyBuilder) -> Result<Response<ResponseBody>, ResponseError> {
        (self.write)(builder).await
    }
}

impl fmt::Debug for DeclaredStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeclaredStream").field("element_type", &self.element_type).finish_non_exhaustive()
    }
}

/// A stream body as it was handed to a builder: with or without an element type.
#[derive(Debug)]
pub(crate) enum StreamSlot {
    Declared(DeclaredStream),
    Undeclared,
}

impl StreamSlot {
    pub(crate) fn new<S>(element_type: Option<ElementType<S::Item>>, stream: S) -> Self
    where
        S: Stream + Send + 'static,
    {
        match element_type {
            Some(element_type) => StreamSlot::Declared(DeclaredStream::new(element_type, stream)),
            None => StreamSlot::Undeclared,
        }
    }
}

/// The body a builder resolves to when it is finished.
#[derive(Debug)]
pub(crate) enum BodyDescriptor {
    Empty,
    Value(Entity),
    Stream(DeclaredStream),
}

impl BodyDescriptor {
    /// A non-null value always wins over a stream, and a stream without a declared
    /// element type is dropped.
    // TODO: an undeclared stream should probably be reported instead of silently
    // producing an empty body, once callers can handle a builder error for it.
    pub(crate) fn resolve(value: Option<Entity>, stream: Option<StreamSlot>) -> Self {
        let descriptor = match (value.filter(|entity| !entity.is_null()), stream) {
            (Some(entity), _) => BodyDescriptor::Value(entity),
            (None, Some(StreamSlot::Declared(stream))) => BodyDescriptor::Stream(stream),
            (None, Some(StreamSlot::Undeclared) | None) => BodyDescriptor::Empty,
        };

        match &descriptor {
            BodyDescriptor::Stream(stream) => {
                debug!(body = descriptor.kind(), element_type = stream.element_type(), "resolved response body");
            }
            _ => debug!(body = descriptor.kind(), "resolved response body"),
        }
        descriptor
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            BodyDescriptor::Empty => "empty",
            BodyDescriptor::Value(_) => "value",
            BodyDescriptor::Stream(_) => "stream",
        }
    }
}

use crate::codec::Codec;
use crate::error::EncodeError;
use bytes::Bytes;
use serde::Serialize;
use std::fmt;

type ElementEncoder<T> = fn(&T, Codec) -> Result<Bytes, EncodeError>;

/// The declared element type of a streamed body.
///
/// Stream elements are not inspected at runtime to find a writer for them: the writer is
/// fixed up front by the element type, and the negotiated [`Codec`] decides the framing.
pub struct ElementType<T> {
    name: &'static str,
    encoder: ElementEncoder<T>,
}

impl<T: Serialize> ElementType<T> {
    /// The element type of `T`, written through its `Serialize` impl.
    pub fn of() -> Self {
        Self { name: std::any::type_name::<T>(), encoder: encode_serialize::<T> }
    }
}

impl<T> ElementType<T> {
    /// An element type with a custom encoder, for elements that aren't `Serialize` or
    /// that need a different representation on the wire.
    pub fn with_encoder(name: &'static str, encoder: ElementEncoder<T>) -> Self {
        Self { name, encoder }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn encode(&self, element: &T, codec: Codec) -> Result<Bytes, EncodeError> {
        (self.encoder)(element, codec)
    }
}

fn encode_serialize<T: Serialize>(element: &T, codec: Codec) -> Result<Bytes, EncodeError> {
    codec.encode_value(element)
}

impl<T> Clone for ElementType<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ElementType<T> {}

impl<T> fmt::Debug for ElementType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementType").field("name", &self.name).finish_non_exhaustive()
    }
}

use crate::codec::Codec;
use crate::error::EncodeError;
use bytes::Bytes;
use serde::Serialize;
use serde::ser::{self, Impossible};
use std::fmt;

type EncodeFn = Box<dyn FnOnce(Codec) -> Result<Bytes, EncodeError> + Send>;

/// A single response value whose concrete type has been erased.
///
/// The value is kept unencoded until the terminal builder call knows the negotiated
/// codec, so the content type may be set after the value.
pub struct Entity {
    type_name: &'static str,
    is_null: bool,
    encode: EncodeFn,
}

impl Entity {
    pub fn new<T>(value: T) -> Self
    where
        T: Serialize + Send + 'static,
    {
        Self {
            type_name: std::any::type_name::<T>(),
            is_null: matches!(value.serialize(NullCheck), Ok(true)),
            encode: Box::new(move |codec| codec.encode_value(&value)),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns true when the value serializes to nothing: `None`, `()` or a unit struct.
    pub fn is_null(&self) -> bool {
        self.is_null
    }

    pub fn encode(self, codec: Codec) -> Result<Bytes, EncodeError> {
        (self.encode)(codec)
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity").field("type_name", &self.type_name).field("is_null", &self.is_null).finish_non_exhaustive()
    }
}

// Answers `Ok(true)` for values json writes as `null`; bails out on the first anything else.
struct NullCheck;

#[derive(Debug)]
struct NotNull;

impl fmt::Display for NotNull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not null")
    }
}

impl std::error::Error for NotNull {}

impl ser::Error for NotNull {
    fn custom<T: fmt::Display>(_msg: T) -> Self {
        NotNull
    }
}

macro_rules! not_null {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
        fn $method(self, _v: $ty) -> Result<bool, NotNull> {
            Ok(false)
        }
        )*
    };
}

impl ser::Serializer for NullCheck {
    type Ok = bool;
    type Error = NotNull;

    type SerializeSeq = Impossible<bool, NotNull>;
    type SerializeTuple = Impossible<bool, NotNull>;
    type SerializeTupleStruct = Impossible<bool, NotNull>;
    type SerializeTupleVariant = Impossible<bool, NotNull>;
    type SerializeMap = Impossible<bool, NotNull>;
    type SerializeStruct = Impossible<bool, NotNull>;
    type SerializeStructVariant = Impossible<bool, NotNull>;

    not_null! {
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_f32: f32,
        serialize_f64: f64,
        serialize_char: char,
        serialize_str: &str,
        serialize_bytes: &[u8],
    }

    fn serialize_none(self) -> Result<bool, NotNull> {
        Ok(true)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<bool, NotNull> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<bool, NotNull> {
        Ok(true)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<bool, NotNull> {
        Ok(true)
    }

    fn serialize_unit_variant(self, _name: &'static str, _index: u32, _variant: &'static str) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(self, _name: &'static str, value: &T) -> Result<bool, NotNull> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, NotNull> {
        Err(NotNull)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, NotNull> {
        Err(NotNull)
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeTupleStruct, NotNull> {
        Err(NotNull)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, NotNull> {
        Err(NotNull)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, NotNull> {
        Err(NotNull)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct, NotNull> {
        Err(NotNull)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, NotNull> {
        Err(NotNull)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_late() {
        let entity = Entity::new(vec![1, 2]);
        assert_eq!(entity.type_name(), "alloc::vec::Vec<i32>");
        assert_eq!(entity.encode(Codec::Json).unwrap(), Bytes::from_static(b"[1,2]"));
    }

    #[test]
    fn null_values() {
        assert!(Entity::new(None::<String>).is_null());
        assert!(Entity::new(Some(None::<u32>)).is_null());
        assert!(Entity::new(()).is_null());

        assert!(!Entity::new(Some("Hello World")).is_null());
        assert!(!Entity::new("").is_null());
        assert!(!Entity::new(0).is_null());
        assert!(!Entity::new(Vec::<i32>::new()).is_null());
    }

    #[test]
    fn encode_error_is_returned() {
        let entity = Entity::new(vec![1, 2]);
        assert!(matches!(entity.encode(Codec::Text), Err(EncodeError::Unsupported { .. })));
    }
}

//! Content negotiation for response bodies.
//!
//! The [`Codec`] used for a response is picked from the `Content-Type` header that is
//! present when a terminal builder call runs. Single values are written as one chunk;
//! element streams are written one frame per element, with the framing the codec needs
//! (array brackets for JSON, newlines for NDJSON, `data:` events for event streams).

mod element;
mod entity;
mod stream;

pub use element::ElementType;
pub use entity::Entity;
pub(crate) use stream::EncodedStream;

use crate::error::EncodeError;
use bytes::{BufMut, Bytes, BytesMut};
use http::HeaderMap;
use mime::Mime;
use serde::Serialize;

const APPLICATION_NDJSON: &str = "x-ndjson";
const APPLICATION_STREAM: &str = "stream";

/// The body writer chosen for a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// `application/json` and any `+json` suffix
    Json,
    /// `application/x-ndjson`, `application/stream+json`
    NdJson,
    /// `text/event-stream`
    EventStream,
    /// any other `text/*` type
    Text,
    /// no content type, or one no other codec claims
    Raw,
}

impl Codec {
    /// Selects the codec for the given content type.
    pub fn select(content_type: Option<&Mime>) -> Self {
        let Some(mime) = content_type else {
            return Self::Raw;
        };

        let (type_, subtype, suffix) = (mime.type_(), mime.subtype(), mime.suffix());

        if type_ == mime::TEXT {
            if subtype == mime::EVENT_STREAM { Self::EventStream } else { Self::Text }
        } else if type_ == mime::APPLICATION && subtype == APPLICATION_NDJSON {
            Self::NdJson
        } else if type_ == mime::APPLICATION && subtype == APPLICATION_STREAM && suffix == Some(mime::JSON) {
            Self::NdJson
        } else if subtype == mime::JSON || suffix == Some(mime::JSON) {
            Self::Json
        } else {
            Self::Raw
        }
    }

    /// Selects the codec from the `Content-Type` header, falling back to [`Codec::Raw`]
    /// when the header is missing or unparsable.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let content_type = headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<Mime>().ok());

        Self::select(content_type.as_ref())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Codec::Json => "application/json",
            Codec::NdJson => "application/x-ndjson",
            Codec::EventStream => "text/event-stream",
            Codec::Text => "text/*",
            Codec::Raw => "*/*",
        }
    }

    /// Encodes a single value.
    ///
    /// Stream elements go through the same function; [`Codec::frame_element`] adds the
    /// per-element framing afterwards.
    pub fn encode_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<Bytes, EncodeError> {
        match self {
            Codec::Json | Codec::NdJson => Ok(Bytes::from(serde_json::to_vec(value)?)),
            Codec::EventStream => match render(value)? {
                Rendered::Text(text) => Ok(event_frame(&text)),
                Rendered::Json(json) => Ok(event_frame(&String::from_utf8_lossy(&json))),
            },
            Codec::Text => match render(value)? {
                Rendered::Text(text) => Ok(Bytes::from(text)),
                Rendered::Json(json) if json == b"null" => Ok(Bytes::new()),
                Rendered::Json(json) if matches!(json.first(), Some(b'{' | b'[')) => Err(EncodeError::unsupported(
                    std::any::type_name::<T>(),
                    self.name(),
                    "structured values need a json content type",
                )),
                Rendered::Json(json) => Ok(Bytes::from(json)),
            },
            Codec::Raw => match render(value)? {
                Rendered::Text(text) => Ok(Bytes::from(text)),
                Rendered::Json(json) => Ok(Bytes::from(json)),
            },
        }
    }

    /// Wraps an encoded element with the separators the codec needs between elements.
    pub(crate) fn frame_element(&self, encoded: Bytes, first: bool) -> Bytes {
        match self {
            Codec::Json => {
                let mut buf = BytesMut::with_capacity(encoded.len() + 1);
                buf.put_u8(if first { b'[' } else { b',' });
                buf.put(encoded);
                buf.freeze()
            }
            Codec::NdJson => {
                let mut buf = BytesMut::with_capacity(encoded.len() + 1);
                buf.put(encoded);
                buf.put_u8(b'\n');
                buf.freeze()
            }
            Codec::EventStream | Codec::Text | Codec::Raw => encoded,
        }
    }

    /// The trailing bytes written once the element stream is exhausted.
    pub(crate) fn close_stream(&self, empty: bool) -> Option<Bytes> {
        match self {
            Codec::Json if empty => Some(Bytes::from_static(b"[]")),
            Codec::Json => Some(Bytes::from_static(b"]")),
            _ => None,
        }
    }
}

enum Rendered {
    Text(String),
    Json(Vec<u8>),
}

// strings are written as-is by every codec that isn't json based
fn render<T: Serialize + ?Sized>(value: &T) -> Result<Rendered, EncodeError> {
    let json = serde_json::to_vec(value)?;
    if json.first() == Some(&b'"') {
        Ok(Rendered::Text(serde_json::from_slice(&json)?))
    } else {
        Ok(Rendered::Json(json))
    }
}

// https://html.spec.whatwg.org/multipage/server-sent-events.html#event-stream-interpretation
fn event_frame(data: &str) -> Bytes {
    let mut string = String::with_capacity(data.len() + 8);

    let mut lines = data.lines().peekable();
    if lines.peek().is_none() {
        string.push_str("data: \n");
    }

    for line in lines {
        string.push_str("data: ");
        string.push_str(line);
        string.push('\n');
    }

    string.push('\n');
    Bytes::from(string)
}

use crate::headers::{Headers, HeadersBuilder};
use http::StatusCode;
use micro_response::BodyBuilder;
use mime::Mime;

/// Everything about a response except its body.
///
/// Both the blocking and the reactive builders keep one of these and hand it to the
/// response builder right before the terminal call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseParts {
    pub status: StatusCode,
    pub content_type: Option<Mime>,
    pub headers: Headers,
}

impl Default for ResponseParts {
    fn default() -> Self {
        Self { status: StatusCode::OK, content_type: None, headers: Headers::new() }
    }
}

impl ResponseParts {
    /// Runs `init` against a fresh [`HeadersBuilder`] and merges the result, overwriting
    /// headers that were set before.
    pub(crate) fn merge_headers<F>(&mut self, init: F)
    where
        F: FnOnce(&mut HeadersBuilder),
    {
        let mut builder = HeadersBuilder::new();
        init(&mut builder);
        self.headers.extend(builder.into_headers());
    }

    /// Content type first, then every header.
    pub(crate) fn into_body_builder(self) -> BodyBuilder {
        let mut builder = micro_response::status(self.status);

        if let Some(content_type) = &self.content_type {
            builder = builder.content_type(content_type);
        }

        builder.headers(self.headers)
    }
}

/// The head setters shared by the blocking and the reactive `ResponseBuilder`.
///
/// The builder must have a `parts: ResponseParts` field and implement `Default`.
macro_rules! impl_head_setters {
    ($builder:ty) => {
        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            pub(crate) fn from_preset(preset: &$crate::preset::Preset) -> Self {
                let mut builder = Self::new();
                preset.apply(&mut builder.parts);
                builder
            }

            pub fn status(&mut self, status: http::StatusCode) -> &mut Self {
                self.parts.status = status;
                self
            }

            pub fn content_type(&mut self, content_type: mime::Mime) -> &mut Self {
                self.parts.content_type = Some(content_type);
                self
            }

            /// Runs `init` against a fresh [`HeadersBuilder`](crate::HeadersBuilder) and
            /// merges what it collected.
            pub fn headers<F>(&mut self, init: F) -> &mut Self
            where
                F: FnOnce(&mut $crate::headers::HeadersBuilder),
            {
                self.parts.merge_headers(init);
                self
            }

            pub fn header<K, V>(&mut self, pair: (K, V)) -> &mut Self
            where
                K: Into<String>,
                V: Into<String>,
            {
                self.headers(|h| {
                    h.header(pair);
                })
            }

            pub fn parts(&self) -> &$crate::parts::ResponseParts {
                &self.parts
            }
        }
    };
}

pub(crate) use impl_head_setters;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_ok() {
        let parts = ResponseParts::default();

        assert_eq!(parts.status, StatusCode::OK);
        assert_eq!(parts.content_type, None);
        assert!(parts.headers.is_empty());
    }

    #[test]
    fn merge_overwrites() {
        let mut parts = ResponseParts::default();
        parts.merge_headers(|h| {
            h.header(("X-A", "1")).header(("X-B", "1"));
        });
        parts.merge_headers(|h| {
            h.header(("X-A", "2"));
        });

        assert_eq!(parts.headers.get("X-A"), Some("2"));
        assert_eq!(parts.headers.get("X-B"), Some("1"));
    }

    #[test]
    fn content_type_goes_first() {
        let mut parts = ResponseParts { content_type: Some(mime::TEXT_PLAIN), ..ResponseParts::default() };
        parts.merge_headers(|h| {
            h.header(("X-TEST-HEADER", "TEST-VALUE"));
        });

        let response = parts.into_body_builder().build().unwrap();
        assert_eq!(response.headers().get(http::header::CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(response.headers().get("x-test-header").unwrap(), "TEST-VALUE");
    }
}

use crate::headers::Headers;
use crate::parts::ResponseParts;
use http::StatusCode;
use mime::Mime;

/// The fixed starting point of a default response.
///
/// A preset is never changed by the responses built from it: each one starts from a
/// fresh builder and applies the preset before the caller's block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub status: StatusCode,
    pub content_type: Option<Mime>,
    pub headers: Option<Headers>,
}

impl Preset {
    pub fn new(status: StatusCode, content_type: Option<Mime>, headers: Option<Headers>) -> Self {
        Self { status, content_type, headers }
    }

    /// Status, then content type, then headers pair by pair through the usual merge.
    pub(crate) fn apply(&self, parts: &mut ResponseParts) {
        parts.status = self.status;

        if let Some(content_type) = &self.content_type {
            parts.content_type = Some(content_type.clone());
        }

        if let Some(headers) = &self.headers {
            parts.merge_headers(|h| {
                for (name, value) in headers.iter() {
                    h.header((name, value));
                }
            });
        }
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("http error: {source}")]
    Http {
        #[from]
        source: http::Error,
    },

    #[error("encode error: {source}")]
    Encode {
        #[from]
        source: EncodeError,
    },
}

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("json error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("can't write {type_name} as {media_type}: {reason}")]
    Unsupported { type_name: &'static str, media_type: String, reason: String },
}

impl EncodeError {
    pub fn unsupported<M: ToString, S: ToString>(type_name: &'static str, media_type: M, reason: S) -> Self {
        Self::Unsupported { type_name, media_type: media_type.to_string(), reason: reason.to_string() }
    }
}

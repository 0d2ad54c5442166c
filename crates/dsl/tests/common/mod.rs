use bytes::Bytes;
use http::{HeaderMap, Response, StatusCode};
use http_body_util::BodyExt;
use micro_response::ResponseBody;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dummy {
    pub name: String,
    pub age: u32,
}

impl Dummy {
    pub fn new(name: &str, age: u32) -> Self {
        Self { name: name.to_string(), age }
    }
}

/// Everything observable about a response, with the body read to the end.
#[derive(Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

pub async fn snapshot(response: Response<ResponseBody>) -> Snapshot {
    let (parts, body) = response.into_parts();
    let body = body.collect().await.expect("body should be readable").to_bytes();
    Snapshot { status: parts.status, headers: parts.headers, body }
}

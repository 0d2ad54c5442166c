use http::StatusCode;
use http_body_util::BodyExt;
use micro_response_dsl::{blocking, reactive};
use serde::Serialize;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Serialize)]
struct User {
    name: String,
    age: u32,
}

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let hello = blocking::response(|r| {
        r.status(StatusCode::OK)
            .content_type(mime::TEXT_PLAIN)
            .header(("X-TEST-HEADER", "TEST-VALUE"))
            .body("Hello World");
    });

    let ok_json = reactive::make_default_response(
        StatusCode::OK,
        Some(mime::APPLICATION_JSON),
        Some([("X-TEST-HEADER", "TEST-VALUE")].into()),
    );

    let users = ok_json
        .respond(|r| {
            r.body(|| {
                futures::stream::iter(vec![
                    User { name: "Hello".to_string(), age: 0 },
                    User { name: "World".to_string(), age: 1 },
                ])
            });
        })
        .await;

    for response in [hello, users] {
        let response = match response {
            Ok(response) => response,
            Err(e) => {
                error!(cause = %e, "build response error");
                continue;
            }
        };

        let (parts, body) = response.into_parts();
        match body.collect().await {
            Ok(collected) => {
                let bytes = collected.to_bytes();
                info!(status = %parts.status, headers = ?parts.headers, body = %String::from_utf8_lossy(&bytes), "built response");
            }
            Err(e) => error!(cause = %e, "read response body error"),
        }
    }
}

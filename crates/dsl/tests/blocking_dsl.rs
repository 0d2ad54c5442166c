mod common;

use common::{Dummy, snapshot};
use http::StatusCode;
use http::header::CONTENT_TYPE;
use micro_response::ResponseError;
use micro_response_dsl::blocking::{make_default_response, response};

#[tokio::test]
async fn same_as_fluent_api() {
    let fluent_api = micro_response::status(StatusCode::OK)
        .content_type(&mime::TEXT_PLAIN)
        .header("X-TEST-HEADER", "TEST-VALUE")
        .body("Hello World")
        .unwrap();

    let dsl = response(|r| {
        r.status(StatusCode::OK)
            .content_type(mime::TEXT_PLAIN)
            .header(("X-TEST-HEADER", "TEST-VALUE"))
            .body("Hello World");
    })
    .unwrap();

    let fluent_api = snapshot(fluent_api).await;
    let dsl = snapshot(dsl).await;

    assert_eq!(dsl, fluent_api);
    assert_eq!(&dsl.body[..], b"Hello World");
}

#[tokio::test]
async fn header_builder() {
    let fluent_api = micro_response::status(StatusCode::OK)
        .header(CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
        .header("X-TEST-HEADER", "TEST-VALUE")
        .body(Dummy::new("Jun", 25))
        .unwrap();

    let dsl = response(|r| {
        r.status(StatusCode::OK)
            .headers(|h| {
                h.header((CONTENT_TYPE.as_str(), mime::APPLICATION_JSON.as_ref()));
                h.header(("X-TEST-HEADER", "TEST-VALUE"));
            })
            .body(Dummy::new("Jun", 25));
    })
    .unwrap();

    let fluent_api = snapshot(fluent_api).await;
    let dsl = snapshot(dsl).await;

    assert_eq!(dsl, fluent_api);
    assert_eq!(serde_json::from_slice::<Dummy>(&dsl.body).unwrap(), Dummy::new("Jun", 25));
}

#[tokio::test]
async fn default_response() {
    let ok_json = make_default_response(
        StatusCode::OK,
        Some(mime::APPLICATION_JSON),
        Some([("X-TEST-HEADER", "TEST-VALUE")].into()),
    );

    let dsl = ok_json
        .respond(|r| {
            r.body(Dummy::new("Jun", 25));
        })
        .unwrap();

    let fluent_api = micro_response::status(StatusCode::OK)
        .content_type(&mime::APPLICATION_JSON)
        .header("X-TEST-HEADER", "TEST-VALUE")
        .body(Dummy::new("Jun", 25))
        .unwrap();

    assert_eq!(snapshot(dsl).await, snapshot(fluent_api).await);
}

#[tokio::test]
async fn default_response_override() {
    let ok_json = make_default_response(StatusCode::OK, Some(mime::APPLICATION_JSON), Some([("X", "1")].into()));

    let dsl = ok_json
        .respond(|r| {
            r.status(StatusCode::CREATED).body(Dummy::new("Jun", 25));
        })
        .unwrap();

    let dsl = snapshot(dsl).await;
    assert_eq!(dsl.status, StatusCode::CREATED);
    assert_eq!(dsl.headers["x"], "1");
    assert_eq!(dsl.headers[CONTENT_TYPE], "application/json");
}

#[tokio::test]
async fn default_response_without_content_type_and_headers() {
    let no_content = make_default_response(StatusCode::NO_CONTENT, None, None);

    let dsl = snapshot(no_content.respond(|_| {}).unwrap()).await;
    let fluent_api = snapshot(micro_response::status(StatusCode::NO_CONTENT).build().unwrap()).await;

    assert_eq!(dsl, fluent_api);
    assert!(dsl.headers.is_empty());
    assert!(dsl.body.is_empty());
}

#[tokio::test]
async fn terse_header_form() {
    let used_header_builder = response(|r| {
        r.status(StatusCode::OK)
            .headers(|h| {
                h.header((CONTENT_TYPE.as_str(), mime::APPLICATION_JSON.as_ref()));
                h.header(("X-TEST-HEADER", "TEST-VALUE"));
            })
            .body(Dummy::new("Jun", 25));
    })
    .unwrap();

    let used_add_assign = response(|r| {
        r.status(StatusCode::OK)
            .headers(|h| {
                *h += (CONTENT_TYPE.as_str(), mime::APPLICATION_JSON.as_ref());
                *h += ("X-TEST-HEADER", "TEST-VALUE");
            })
            .body(Dummy::new("Jun", 25));
    })
    .unwrap();

    assert_eq!(used_header_builder.headers(), used_add_assign.headers());
}

#[tokio::test]
async fn later_header_wins() {
    let verbose = response(|r| {
        r.headers(|h| {
            h.header(("X-TEST-HEADER", "1"));
            h.header(("X-TEST-HEADER", "2"));
        });
    })
    .unwrap();

    let terse = response(|r| {
        r.headers(|h| {
            *h += ("X-TEST-HEADER", "1");
            *h += ("X-TEST-HEADER", "2");
        });
    })
    .unwrap();

    let across_blocks = response(|r| {
        r.header(("X-TEST-HEADER", "1")).header(("X-TEST-HEADER", "2"));
    })
    .unwrap();

    for response in [&verbose, &terse, &across_blocks] {
        let values: Vec<_> = response.headers().get_all("x-test-header").iter().collect();
        assert_eq!(values, vec!["2"]);
    }
}

#[tokio::test]
async fn equivalent_for_every_combination() {
    let statuses = [StatusCode::OK, StatusCode::CREATED, StatusCode::NOT_FOUND];
    let content_types = [None, Some(mime::TEXT_PLAIN), Some(mime::APPLICATION_JSON)];
    let header_sets: [&[(&str, &str)]; 3] = [&[], &[("X-A", "1")], &[("X-A", "1"), ("X-B", "2")]];
    let bodies = [None, Some("Hello World")];

    for status in statuses {
        for content_type in &content_types {
            for headers in header_sets {
                for body in bodies {
                    let dsl = response(|r| {
                        r.status(status);
                        if let Some(content_type) = content_type {
                            r.content_type(content_type.clone());
                        }
                        r.headers(|h| {
                            h.headers(headers.iter().copied());
                        });
                        r.body_opt(body);
                    })
                    .unwrap();

                    let mut fluent_api = micro_response::status(status);
                    if let Some(content_type) = content_type {
                        fluent_api = fluent_api.content_type(content_type);
                    }
                    fluent_api = fluent_api.headers(headers.iter().copied());
                    let fluent_api = match body {
                        Some(body) => fluent_api.body(body),
                        None => fluent_api.build(),
                    }
                    .unwrap();

                    assert_eq!(snapshot(dsl).await, snapshot(fluent_api).await);
                }
            }
        }
    }
}

#[tokio::test]
async fn null_body_is_no_body() {
    let dsl = response(|r| {
        r.content_type(mime::APPLICATION_JSON).body(None::<Dummy>);
    })
    .unwrap();

    let fluent_api = micro_response::status(StatusCode::OK).content_type(&mime::APPLICATION_JSON).build().unwrap();

    assert!(dsl.body().is_empty());
    assert_eq!(snapshot(dsl).await, snapshot(fluent_api).await);
}

#[test]
fn invalid_header_is_reported_by_build() {
    let result = response(|r| {
        r.header(("X-TEST-HEADER", "bad\r\nvalue")).body("Hello World");
    });

    assert!(matches!(result, Err(ResponseError::Http { .. })));
}

#[test]
fn encode_error_is_returned_unchanged() {
    let result = response(|r| {
        r.content_type(mime::TEXT_PLAIN).body(Dummy::new("Jun", 25));
    });

    assert!(matches!(result, Err(ResponseError::Encode { .. })));
}

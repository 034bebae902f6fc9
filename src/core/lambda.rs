//! Conversions between Lambda HTTP events and the adapter's request and
//! response types. Bodies are carried byte for byte in both directions.

use axum::body::Body;
use axum::extract::Request;
use axum::response::Response;
use lambda_http::Body as LambdaBody;

pub fn into_gateway_request(event: lambda_http::Request) -> Request {
    let (parts, body) = event.into_parts();
    Request::from_parts(parts, Body::from(body.to_vec()))
}

/// Empty bodies become [`LambdaBody::Empty`], valid UTF-8 becomes text and
/// anything else is sent as binary.
pub async fn into_lambda_response(
    response: Response,
) -> Result<lambda_http::Response<LambdaBody>, axum::Error> {
    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await?;

    let body = if bytes.is_empty() {
        LambdaBody::Empty
    } else {
        match String::from_utf8(bytes.to_vec()) {
            Ok(text) => LambdaBody::Text(text),
            Err(e) => LambdaBody::Binary(e.into_bytes()),
        }
    };

    Ok(lambda_http::Response::from_parts(parts, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvConfigProvider;
    use crate::core::GatewayAdapter;
    use axum::http::{header, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;

    fn event(method: &str, uri: &str, body: LambdaBody) -> lambda_http::Request {
        lambda_http::http::Request::builder()
            .method(method)
            .uri(uri)
            .header("x-site", "ovo")
            .body(body)
            .unwrap()
    }

    async fn body_bytes(req: Request) -> Vec<u8> {
        req.into_body().collect().await.unwrap().to_bytes().to_vec()
    }

    #[tokio::test]
    async fn test_request_keeps_method_headers_and_text_body() {
        let req = into_gateway_request(event(
            "PUT",
            "/settings?ref=main",
            LambdaBody::Text("{\"roles\":[]}".to_string()),
        ));

        assert_eq!(req.method(), "PUT");
        assert_eq!(req.uri().path(), "/settings");
        assert_eq!(req.uri().query(), Some("ref=main"));
        assert_eq!(req.headers()["x-site"], "ovo");
        assert_eq!(body_bytes(req).await, b"{\"roles\":[]}".to_vec());
    }

    #[tokio::test]
    async fn test_request_keeps_binary_and_empty_bodies() {
        let binary = vec![0xff, 0x00, 0xfe, 0x10];
        let req = into_gateway_request(event("POST", "/", LambdaBody::Binary(binary.clone())));
        assert_eq!(body_bytes(req).await, binary);

        let req = into_gateway_request(event("GET", "/health", LambdaBody::Empty));
        assert!(body_bytes(req).await.is_empty());
    }

    #[tokio::test]
    async fn test_text_response_becomes_text_body() {
        let response = Response::builder()
            .status(StatusCode::CREATED)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"ok\":true}"))
            .unwrap();

        let converted = into_lambda_response(response).await.unwrap();

        assert_eq!(converted.status(), StatusCode::CREATED);
        assert_eq!(converted.headers()[header::CONTENT_TYPE], "application/json");
        match converted.body() {
            LambdaBody::Text(text) => assert_eq!(text, "{\"ok\":true}"),
            other => panic!("expected text body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_utf8_response_becomes_binary_body() {
        let bytes = vec![0xff, 0xfe, 0x00, 0x80];
        let response = Response::new(Body::from(bytes.clone()));

        let converted = into_lambda_response(response).await.unwrap();

        match converted.body() {
            LambdaBody::Binary(data) => assert_eq!(data, &bytes),
            other => panic!("expected binary body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_response_becomes_empty_body() {
        let response = Response::builder()
            .status(StatusCode::NO_CONTENT)
            .body(Body::empty())
            .unwrap();

        let converted = into_lambda_response(response).await.unwrap();

        assert_eq!(converted.status(), StatusCode::NO_CONTENT);
        assert!(matches!(converted.body(), LambdaBody::Empty));
    }

    #[tokio::test]
    async fn test_event_round_trip_through_adapter() {
        let adapter = GatewayAdapter::new(Arc::new(EnvConfigProvider::from_vars([(
            "GITGATEWAY_GITHUB_REPO",
            "ovo/cms-content",
        )])));

        let req = into_gateway_request(event("GET", "/settings", LambdaBody::Empty));
        let converted = into_lambda_response(adapter.handle(req).await)
            .await
            .unwrap();

        assert_eq!(converted.status(), StatusCode::OK);
        match converted.body() {
            LambdaBody::Text(text) => {
                let body: serde_json::Value = serde_json::from_str(text).unwrap();
                assert_eq!(body["github_enabled"], true);
            }
            other => panic!("expected text body, got {:?}", other),
        }
    }
}

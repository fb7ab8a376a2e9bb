//! Diagnostic echo handler.

use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::{header::HOST, HeaderMap, Method, StatusCode, Uri, Version},
    response::{IntoResponse, Response},
};
use log::debug;

use super::super::types::SharedCounter;

/// Counts the request, then echoes its path, request line, headers, host,
/// remote address and query parameters back as plain text.
pub async fn echo_handler(
    State(counter): State<SharedCounter>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    method: Method,
    uri: Uri,
    version: Version,
    headers: HeaderMap,
) -> Response {
    let count = counter.increment().await;
    debug!("{} {} from {} (request #{})", method, uri, remote, count);

    let body = render_echo(&method, &uri, version, &headers, remote);
    (StatusCode::OK, body).into_response()
}

fn render_echo(
    method: &Method,
    uri: &Uri,
    version: Version,
    headers: &HeaderMap,
    remote: SocketAddr,
) -> String {
    let mut body = format!("Echo URL.Path = {:?}\n", uri.path());
    body.push_str(&format!("{method} {uri} {version:?}\n"));

    for name in headers.keys() {
        let values: Vec<&str> = headers
            .get_all(name)
            .iter()
            .map(|v| v.to_str().unwrap_or("<non-ascii>"))
            .collect();
        body.push_str(&format!("Header[{:?}] = {:?}\n", name.as_str(), values));
    }

    let host = headers
        .get(HOST)
        .and_then(|h| h.to_str().ok())
        .or_else(|| uri.host())
        .unwrap_or_default();
    body.push_str(&format!("Host = {host:?}\n"));
    body.push_str(&format!("RemoteAddr = {:?}\n", remote.to_string()));

    let mut form: BTreeMap<String, Vec<String>> = BTreeMap::new();
    if let Some(query) = uri.query() {
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            form.entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }
    }
    for (key, values) in &form {
        body.push_str(&format!("Form[{key:?}] = {values:?}\n"));
    }

    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_render_echo_lists_path_headers_and_form() {
        let uri: Uri = "/hello/world?b=2&a=1&a=3".parse().expect("uri");
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("localhost:8000"));
        headers.insert("x-test", HeaderValue::from_static("yes"));
        let remote: SocketAddr = "127.0.0.1:40000".parse().expect("addr");

        let body = render_echo(&Method::GET, &uri, Version::HTTP_11, &headers, remote);

        assert!(body.starts_with("Echo URL.Path = \"/hello/world\"\n"));
        assert!(body.contains("GET /hello/world?b=2&a=1&a=3 HTTP/1.1\n"));
        assert!(body.contains("Header[\"x-test\"] = [\"yes\"]\n"));
        assert!(body.contains("Host = \"localhost:8000\"\n"));
        assert!(body.contains("RemoteAddr = \"127.0.0.1:40000\"\n"));
        assert!(body.contains("Form[\"a\"] = [\"1\", \"3\"]\nForm[\"b\"] = [\"2\"]\n"));
    }

    #[test]
    fn test_render_echo_without_host_header() {
        let uri: Uri = "/".parse().expect("uri");
        let remote: SocketAddr = "[::1]:5000".parse().expect("addr");
        let body = render_echo(&Method::POST, &uri, Version::HTTP_11, &HeaderMap::new(), remote);
        assert!(body.contains("Host = \"\"\n"));
        assert!(!body.contains("Form["));
    }
}

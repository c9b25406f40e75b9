use axum::{
    body::{Body, Bytes},
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        HeaderMap, Method, Request, StatusCode,
    },
    Router,
};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::error::TestError;

/// Drives a router one request at a time, like a single browser tab.
///
/// The most recent session cookie handed out by the server is sent with every
/// following request, and dropped again when the server expires it.
pub struct TestClient {
    router: Router,
    cookie: Option<String>,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            cookie: None,
        }
    }

    /// Cookie currently sent with requests, as `name=value`.
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    /// Replaces the cookie, e.g. to replay one captured earlier.
    pub fn set_cookie(&mut self, cookie: Option<String>) {
        self.cookie = cookie;
    }

    pub async fn get(&mut self, path: &str) -> Result<TestResponse, TestError> {
        let request = self.request(Method::GET, path).body(Body::empty())?;
        self.send(request).await
    }

    /// Posts `fields` as `application/x-www-form-urlencoded`.
    pub async fn post_form(
        &mut self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<TestResponse, TestError> {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();

        self.post(path, "application/x-www-form-urlencoded", body)
            .await
    }

    /// Posts a raw `body` with the given content type.
    pub async fn post(
        &mut self,
        path: &str,
        content_type: &str,
        body: impl Into<Body>,
    ) -> Result<TestResponse, TestError> {
        let request = self
            .request(Method::POST, path)
            .header(CONTENT_TYPE, content_type)
            .body(body.into())?;

        self.send(request).await
    }

    fn request(&self, method: Method, path: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(path);

        match &self.cookie {
            Some(cookie) => builder.header(COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> Result<TestResponse, TestError> {
        let response = match self.router.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let (parts, body) = response.into_parts();
        self.store_cookie(&parts.headers);

        let body = axum::body::to_bytes(body, usize::MAX).await?;

        Ok(TestResponse {
            status: parts.status,
            headers: parts.headers,
            body,
        })
    }

    fn store_cookie(&mut self, headers: &HeaderMap) {
        let Some(set_cookie) = headers
            .get(SET_COOKIE)
            .and_then(|value| value.to_str().ok())
        else {
            return;
        };

        let mut attributes = set_cookie.split(';').map(str::trim);
        let pair = attributes.next().unwrap_or_default();
        let expired = attributes.any(|attr| attr.eq_ignore_ascii_case("Max-Age=0"));

        let value_is_empty = pair
            .split_once('=')
            .map_or(true, |(_, value)| value.is_empty());

        self.cookie = if expired || value_is_empty {
            None
        } else {
            Some(pair.to_string())
        };
    }
}

/// Collected response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Target of a redirect, if this is one.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TestError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

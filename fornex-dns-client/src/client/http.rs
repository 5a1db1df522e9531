//! Fornex HTTP 请求方法

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;

use super::{AUTH_SCHEME, FornexClient};

impl FornexClient {
    /// One authenticated round trip. Returns the raw 2xx body.
    ///
    /// Both headers are set exactly once, body or not.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        let url = format!("{}{path}", self.base_url);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(AUTHORIZATION, format!("{AUTH_SCHEME} {}", self.api_key))
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            request = request.body(body);
        }

        HttpUtils::execute_request(request, method.as_str(), path).await
    }

    /// 执行 GET 请求
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.send(Method::GET, path, None).await?;
        HttpUtils::parse_json(&body)
    }

    /// 执行 POST 请求
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let payload = HttpUtils::to_json(body)?;
        let body = self.send(Method::POST, path, Some(payload)).await?;
        HttpUtils::parse_json(&body)
    }

    /// 执行 PUT 请求
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let payload = HttpUtils::to_json(body)?;
        let body = self.send(Method::PUT, path, Some(payload)).await?;
        HttpUtils::parse_json(&body)
    }

    /// 执行 DELETE 请求，响应体不解析
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, None).await.map(|_| ())
    }
}

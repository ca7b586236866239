//! Outbound HTTP client for the backend API.
//!
//! # Responsibilities
//! - Build `{api_url}/users[/{id}]` URLs
//! - Issue one outbound call per inbound request
//! - Decode the backend's JSON body and keep its status untouched

use std::time::Duration;

use axum::http::StatusCode;
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;

use crate::backend::types::{BackendResponse, UserId};
use crate::config::BackendConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::http::request::X_REQUEST_ID;

/// Client for the backend's user resource.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    /// Base URL without a trailing slash.
    base_url: String,
}

impl BackendClient {
    /// Create a client from the backend configuration.
    pub fn new(config: &BackendConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(GatewayError::Client)?;

        Ok(Self::with_client(client, &config.api_url))
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: Client, api_url: &str) -> Self {
        Self {
            client,
            base_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the users collection, or of one user when `id` is given.
    pub fn users_url(&self, id: Option<&UserId>) -> String {
        match id {
            Some(id) => format!("{}/users/{}", self.base_url, id),
            None => format!("{}/users", self.base_url),
        }
    }

    /// `GET {api_url}/users`
    pub async fn list_users(&self, request_id: Option<&str>) -> GatewayResult<BackendResponse> {
        let req = self.request(Method::GET, None, request_id);
        self.send_json(req).await
    }

    /// `GET {api_url}/users/{id}`
    pub async fn get_user(
        &self,
        id: &UserId,
        request_id: Option<&str>,
    ) -> GatewayResult<BackendResponse> {
        let req = self.request(Method::GET, Some(id), request_id);
        self.send_json(req).await
    }

    /// `POST {api_url}/users` with the given JSON body.
    pub async fn create_user(
        &self,
        body: &Value,
        request_id: Option<&str>,
    ) -> GatewayResult<BackendResponse> {
        let req = self.request(Method::POST, None, request_id).json(body);
        self.send_json(req).await
    }

    /// `PUT {api_url}/users/{id}` with the given JSON body.
    pub async fn update_user(
        &self,
        id: &UserId,
        body: &Value,
        request_id: Option<&str>,
    ) -> GatewayResult<BackendResponse> {
        let req = self.request(Method::PUT, Some(id), request_id).json(body);
        self.send_json(req).await
    }

    /// `DELETE {api_url}/users/{id}`. The backend body is never read.
    pub async fn delete_user(
        &self,
        id: &UserId,
        request_id: Option<&str>,
    ) -> GatewayResult<BackendResponse> {
        let req = self.request(Method::DELETE, Some(id), request_id);
        let status = self.send(req).await?.status();
        Ok(BackendResponse::empty(status))
    }

    fn request(
        &self,
        method: Method,
        id: Option<&UserId>,
        request_id: Option<&str>,
    ) -> RequestBuilder {
        let url = self.users_url(id);
        tracing::debug!(method = %method, url = %url, "Forwarding to backend");

        let req = self.client.request(method, url);
        match request_id {
            Some(request_id) => req.header(X_REQUEST_ID, request_id),
            None => req,
        }
    }

    async fn send(&self, req: RequestBuilder) -> GatewayResult<reqwest::Response> {
        req.send().await.map_err(GatewayError::from_transport)
    }

    async fn send_json(&self, req: RequestBuilder) -> GatewayResult<BackendResponse> {
        let response = self.send(req).await?;
        let status: StatusCode = response.status();
        let body = response
            .json::<Value>()
            .await
            .map_err(GatewayError::from_body)?;

        tracing::debug!(status = %status, "Backend responded");
        Ok(BackendResponse::json(status, body))
    }
}

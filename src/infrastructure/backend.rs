//! # Lunch Backend Client
//!
//! Implements `LunchBackend` over the Yap REST API using `reqwest`.
//! Every request carries the bot bypass token so the backend skips its own login.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::domain::config::BackendConfig;
use crate::domain::error::BackendError;
use crate::domain::traits::LunchBackend;
use crate::domain::types::{BackendMessage, Location, QuickAddRequest, VisitRequest};

const PLAN_PATH: &str = "/api/locations/plan";
const RANDOM_PATH: &str = "/api/locations/plan/random";
const ADD_VISIT_PATH: &str = "/api/locations/addVisit";
const QUICK_ADD_PATH: &str = "/api/locations/quick";
const TOKEN_HEADER: &str = "botbypasstoken";

pub struct YapClient {
    http: Client,
    base_url: String,
    token: String,
}

impl YapClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            token: config.resolve_token()?,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header("Content-Type", "application/json")
            .header(TOKEN_HEADER, &self.token)
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, BackendError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        parse_reply(status, &body)
    }
}

/// Turn a raw HTTP reply into `T`, mapping non-2xx statuses to `BackendError::Status`.
fn parse_reply<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, BackendError> {
    if !status.is_success() {
        return Err(BackendError::Status {
            status: status.as_u16(),
            body: body.trim().to_string(),
        });
    }
    serde_json::from_str(body).map_err(|e| BackendError::Decode(e.to_string()))
}

#[async_trait]
impl LunchBackend for YapClient {
    async fn plan(&self) -> Result<Vec<Location>, BackendError> {
        tracing::debug!("GET {}", PLAN_PATH);
        self.execute(self.request(Method::GET, PLAN_PATH)).await
    }

    async fn random(&self) -> Result<BackendMessage, BackendError> {
        tracing::debug!("GET {}", RANDOM_PATH);
        self.execute(self.request(Method::GET, RANDOM_PATH)).await
    }

    async fn add_visit(&self, name: &str) -> Result<BackendMessage, BackendError> {
        tracing::debug!("POST {} name='{}'", ADD_VISIT_PATH, name);
        let builder = self
            .request(Method::POST, ADD_VISIT_PATH)
            .json(&VisitRequest { name });
        self.execute(builder).await
    }

    async fn quick_add(&self, name: &str, author: &str) -> Result<BackendMessage, BackendError> {
        tracing::debug!("PUT {} name='{}' author='{}'", QUICK_ADD_PATH, name, author);
        let builder = self
            .request(Method::PUT, QUICK_ADD_PATH)
            .json(&QuickAddRequest { name, author });
        self.execute(builder).await
    }
}

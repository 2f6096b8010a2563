//! Test server and response assertions

use std::collections::HashMap;
use std::time::Duration;

use aid_api::{create_app, create_app_state, run_server};
use aid_common::AppConfig;
use anyhow::{Context, Result};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A running API server bound to 127.0.0.1 on an OS-assigned port
pub struct TestServer {
    pub base_url: String,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        let state = create_app_state(config).await?;
        let app = create_app(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            run_server(app, listener).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            base_url: format!("http://{addr}"),
            client,
            _handle: handle,
        })
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.client.request(method, format!("{}{}", self.base_url, path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.request(Method::GET, path, None).send().await?)
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.request(Method::POST, path, None).json(body).send().await?)
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.request(Method::GET, path, Some(token)).send().await?)
    }

    pub async fn post_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Ok(self
            .request(Method::POST, path, Some(token))
            .json(body)
            .send()
            .await?)
    }

    pub async fn put_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Ok(self
            .request(Method::PUT, path, Some(token))
            .json(body)
            .send()
            .await?)
    }

    pub async fn patch_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Ok(self
            .request(Method::PATCH, path, Some(token))
            .json(body)
            .send()
            .await?)
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.request(Method::DELETE, path, Some(token)).send().await?)
    }
}

/// Configuration from the environment with a port of 0 and a generous rate limit
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let overrides: HashMap<&str, String> = HashMap::from([
        ("API_HOST", "127.0.0.1".to_string()),
        ("API_PORT", "0".to_string()),
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "10000".to_string()),
        ("RATE_LIMIT_BURST", "10000".to_string()),
        ("DATABASE_MAX_CONNECTIONS", "5".to_string()),
        ("DATABASE_MIN_CONNECTIONS", "1".to_string()),
        ("DATABASE_RUN_MIGRATIONS", "true".to_string()),
    ]);

    AppConfig::from_lookup(|key| {
        overrides.get(key).cloned().or_else(|| std::env::var(key).ok()).or_else(|| {
            (key == "JWT_SECRET").then(|| "integration-test-secret".to_string())
        })
    })
    .context("Config error")
}

/// Whether the database-backed tests can run
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Assert the status and return the parsed body
pub async fn assert_json(response: Response, expected_status: StatusCode) -> Result<Value> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected_status {
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    serde_json::from_str(&body).with_context(|| format!("Body is not JSON: {body}"))
}

/// Assert the status and return the `data` member of the envelope
pub async fn assert_data(response: Response, expected_status: StatusCode) -> Result<Value> {
    let mut body = assert_json(response, expected_status).await?;
    if body["success"] != Value::Bool(true) {
        anyhow::bail!("Expected success envelope, got {body}");
    }
    Ok(body["data"].take())
}

/// Assert an error status and return `error.message`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body = assert_json(response, expected_status).await?;
    if body["success"] != Value::Bool(false) {
        anyhow::bail!("Expected error envelope, got {body}");
    }
    body["error"]["message"]
        .as_str()
        .map(ToString::to_string)
        .with_context(|| format!("Missing error.message in {body}"))
}

pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    assert_json(response, expected_status).await.map(|_| ())
}

/// Id field of a response object
pub fn id_of(value: &Value, field: &str) -> Result<i64> {
    value[field]
        .as_i64()
        .with_context(|| format!("Missing numeric `{field}` in {value}"))
}

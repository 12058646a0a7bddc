//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use eventhub_api::{create_app, create_app_state_with_geocoder};
use eventhub_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, GeocodingConfig, JwtConfig,
    RateLimitConfig, ServerConfig, TallyConfig,
};
use eventhub_core::{Coordinates, DomainError, Geocoder, Place};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Coordinates every resolvable address maps to
pub const FIXED_POINT: (f64, f64) = (-74.0721, 4.711);

/// Address the fixed geocoder cannot resolve
pub const UNKNOWN_ADDRESS: &str = "Nowhere at all";

/// Geocoder answering every lookup from memory
#[derive(Debug, Default)]
pub struct FixedGeocoder;

#[async_trait]
impl Geocoder for FixedGeocoder {
    async fn locate(&self, address: &str) -> Result<Coordinates, DomainError> {
        if address == UNKNOWN_ADDRESS {
            return Err(DomainError::LocationNotFound(address.to_string()));
        }
        Coordinates::new(FIXED_POINT.0, FIXED_POINT.1)
    }

    async fn nearby_places(
        &self,
        origin: Coordinates,
        _radius_meters: u32,
    ) -> Result<Vec<Place>, DomainError> {
        Ok(vec![Place {
            id: "poi.1".to_string(),
            name: "Cafe".to_string(),
            place_name: "Cafe, Bogota".to_string(),
            coordinates: origin,
            category: Some("cafe".to_string()),
        }])
    }
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state_with_geocoder(config, Arc::new(FixedGeocoder)).await?;
        let app = create_app(state);

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url(), path)
    }

    /// GET outside the versioned prefix (health probes)
    pub async fn get_root(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .put(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }
}

/// Test configuration over `DATABASE_URL`
///
/// Rate limiting is generous so parallel tests do not trip it.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let url = std::env::var("DATABASE_URL")?;

    Ok(AppConfig {
        app: AppSettings {
            name: "eventhub-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url,
            max_connections: 5,
            min_connections: 1,
            statement_timeout_ms: 5_000,
            run_migrations: true,
        },
        jwt: JwtConfig {
            secret: "integration-test-secret-that-is-long-enough".to_string(),
            access_token_expiry: 900,
            refresh_token_expiry: 3_600,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1_000,
            burst: 1_000,
        },
        cors: CorsConfig {
            allowed_origins: vec![],
        },
        geocoding: GeocodingConfig {
            access_token: None,
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        },
        tally: TallyConfig::default(),
    })
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Success envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub data: T,
}

/// Assert response status and unwrap the `data` field of the envelope
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    let envelope: Envelope<T> = response.json().await?;
    anyhow::ensure!(envelope.status == "OK", "Unexpected envelope status {}", envelope.status);
    Ok(envelope.data)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error status and return the error code from the body
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let status = response.status();
    let body: crate::fixtures::ErrorResponse = response.json().await?;
    anyhow::ensure!(
        status == expected_status,
        "Expected status {expected_status}, got {status}: {body:?}"
    );
    Ok(body.error.code)
}

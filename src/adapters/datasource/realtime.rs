//! Realtime database REST client
//!
//! Reads collections from a Firebase-style realtime database with
//! `GET {database_url}/{collection}.json`, appending `auth=<secret>` when a
//! secret is configured. A `null` body means the collection does not exist.

use super::traits::DataSource;
use crate::config::{DataSourceConfig, SecretString};
use crate::domain::{DashboardError, FetchError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Connect timeout, independent of the per-request timeout
const CONNECT_TIMEOUT_SECONDS: u64 = 30;

/// Connected realtime database client
///
/// Obtain one with [`RealtimeDbClient::connect`] and release it with
/// [`RealtimeDbClient::close`].
pub struct RealtimeDbClient {
    base_url: Url,
    client: Client,
    auth_secret: Option<SecretString>,
}

impl RealtimeDbClient {
    /// Builds the HTTP client and validates the database URL
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Configuration`] if `database_url` is missing
    /// or not a valid URL, and [`FetchError::ConnectionFailed`] if the HTTP
    /// client cannot be built.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use clinic_dashboard::adapters::datasource::{DataSource, RealtimeDbClient};
    /// use clinic_dashboard::config::{DataSourceConfig, DataSourceTarget};
    ///
    /// # async fn example() -> clinic_dashboard::domain::Result<()> {
    /// let config = DataSourceConfig {
    ///     target: DataSourceTarget::RealtimeDatabase,
    ///     database_url: Some("https://clinic-inventory.firebaseio.com".to_string()),
    ///     auth_secret: None,
    ///     timeout_seconds: 60,
    ///     snapshot_path: None,
    /// };
    ///
    /// let client = RealtimeDbClient::connect(&config)?;
    /// let facilities = client.read_collection("facility_data").await?;
    /// client.close();
    /// # Ok(())
    /// # }
    /// ```
    pub fn connect(config: &DataSourceConfig) -> Result<Self> {
        let raw = config.database_url.as_deref().ok_or_else(|| {
            DashboardError::Configuration("data_source.database_url is not set".to_string())
        })?;
        let base_url = normalize_base_url(raw)?;

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECONDS))
            .build()
            .map_err(|e| FetchError::ConnectionFailed(format!("Failed to build HTTP client: {e}")))?;

        tracing::info!(
            database_url = %base_url,
            timeout_seconds = config.timeout_seconds,
            authenticated = config.auth_secret.is_some(),
            "Connected to realtime database"
        );

        Ok(Self {
            base_url,
            client,
            auth_secret: config.auth_secret.clone(),
        })
    }

    /// Root URL every collection path is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// REST URL for a collection, including the auth query when configured
    pub fn collection_url(&self, name: &str) -> Result<Url> {
        let mut url = self
            .base_url
            .join(&format!("{name}.json"))
            .map_err(|e| FetchError::for_collection(name, e))?;

        if let Some(secret) = &self.auth_secret {
            url.query_pairs_mut()
                .append_pair("auth", secret.expose_secret().as_ref());
        }

        Ok(url)
    }
}

#[async_trait]
impl DataSource for RealtimeDbClient {
    async fn read_collection(&self, name: &str) -> Result<Option<Value>> {
        let url = self.collection_url(name)?;

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::for_collection(name, transport_error(&e)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let err = if status.is_server_error() {
                FetchError::ServerError {
                    status: status.as_u16(),
                    message: body,
                }
            } else {
                FetchError::ClientError {
                    status: status.as_u16(),
                    message: body,
                }
            };
            tracing::warn!(collection = name, status = status.as_u16(), "Collection read rejected");
            return Err(FetchError::for_collection(name, err).into());
        }

        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::for_collection(name, transport_error(&e)))?;

        let value: Value = serde_json::from_str(&body).map_err(|e| {
            FetchError::for_collection(name, FetchError::InvalidResponse(e.to_string()))
        })?;

        tracing::debug!(collection = name, bytes = body.len(), "Collection read");

        Ok(match value {
            Value::Null => None,
            other => Some(other),
        })
    }

    fn describe(&self) -> String {
        format!("realtime database at {}", self.base_url)
    }

    fn close(self: Box<Self>) {
        tracing::info!(database_url = %self.base_url, "Closed realtime database connection");
    }
}

impl RealtimeDbClient {
    /// Releases the HTTP client
    pub fn close(self) {
        DataSource::close(Box::new(self));
    }
}

/// Parses the database URL so that relative joins append to its path
fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|e| {
        DashboardError::Configuration(format!("data_source.database_url '{raw}' is invalid: {e}"))
    })?;

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);

    Ok(url)
}

fn transport_error(err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(err.to_string())
    } else {
        FetchError::ConnectionFailed(err.to_string())
    }
}

//! Configuration loading and representation.
//!
//! Configuration is resolved once at process start into plain structs and passed
//! by reference. Nothing here reads the environment lazily.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value '{value}': {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

pub const DEFAULT_MINIO_ENDPOINT: &str = "localhost";
pub const DEFAULT_MINIO_PORT: u16 = 9000;
pub const DEFAULT_MINIO_ACCESS_KEY: &str = "minioadmin";
pub const DEFAULT_MINIO_SECRET_KEY: &str = "minioadmin";
pub const DEFAULT_MINIO_BUCKET: &str = "oncc-documents";
pub const DEFAULT_MINIO_REGION: &str = "us-east-1";

/// Object-storage (MinIO / S3-compatible) connection parameters.
///
/// Serialized with the field names the object-storage client expects
/// (`endPoint`, `useSSL`, ...).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    pub end_point: String,
    pub port: u16,
    #[serde(rename = "useSSL")]
    pub use_ssl: bool,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub region: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            end_point: DEFAULT_MINIO_ENDPOINT.to_string(),
            port: DEFAULT_MINIO_PORT,
            use_ssl: false,
            access_key: DEFAULT_MINIO_ACCESS_KEY.to_string(),
            secret_key: DEFAULT_MINIO_SECRET_KEY.to_string(),
            bucket: DEFAULT_MINIO_BUCKET.to_string(),
            region: DEFAULT_MINIO_REGION.to_string(),
        }
    }
}

impl StorageConfig {
    /// Resolve from `MINIO_*` environment variables, substituting defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary key/value source.
    ///
    /// Unset or empty variables fall back to their default silently. Only
    /// `MINIO_USE_SSL=true` enables TLS.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("MINIO_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: "MINIO_PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.port,
        };

        Ok(Self {
            end_point: get("MINIO_ENDPOINT").unwrap_or(defaults.end_point),
            port,
            use_ssl: get("MINIO_USE_SSL").is_some_and(|v| v == "true"),
            access_key: get("MINIO_ACCESS_KEY").unwrap_or(defaults.access_key),
            secret_key: get("MINIO_SECRET_KEY").unwrap_or(defaults.secret_key),
            bucket: get("MINIO_BUCKET").unwrap_or(defaults.bucket),
            region: get("MINIO_REGION").unwrap_or(defaults.region),
        })
    }

    /// Base URL of the object-storage endpoint.
    pub fn endpoint_url(&self) -> String {
        let scheme = if self.use_ssl { "https" } else { "http" };
        format!("{scheme}://{}:{}", self.end_point, self.port)
    }
}

impl core::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("end_point", &self.end_point)
            .field("port", &self.port)
            .field("use_ssl", &self.use_ssl)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .finish()
    }
}

pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";
pub const DEFAULT_NOTIFICATIONS_CHANNEL: &str = "oncc.notifications";
pub const DEFAULT_MAIL_FROM: &str = "no-reply@oncc.cm";

/// Settings of the notification subscriber process.
#[derive(Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    pub database_url: String,
    pub redis_url: String,
    pub channel: String,
    /// Recipients of campaign and store audit notifications.
    pub audit_recipients: Vec<String>,
    pub mail_from: String,
    /// Object storage holding the documents notifications may refer to.
    pub storage: StorageConfig,
}

impl NotifierConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL is required")?;
        let redis_url = lookup("REDIS_URL").unwrap_or_else(|| DEFAULT_REDIS_URL.to_string());
        let channel = lookup("NOTIFICATIONS_CHANNEL")
            .unwrap_or_else(|| DEFAULT_NOTIFICATIONS_CHANNEL.to_string());
        let audit_recipients = lookup("NOTIFY_AUDIT_RECIPIENTS")
            .map(|raw| parse_list(&raw))
            .unwrap_or_default();
        let mail_from = lookup("NOTIFY_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string());
        let storage = StorageConfig::from_lookup(&lookup).context("invalid object-storage configuration")?;

        Ok(Self {
            database_url,
            redis_url,
            channel,
            audit_recipients,
            mail_from,
            storage,
        })
    }
}

impl core::fmt::Debug for NotifierConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NotifierConfig")
            .field("database_url", &"<redacted>")
            .field("redis_url", &self.redis_url)
            .field("channel", &self.channel)
            .field("audit_recipients", &self.audit_recipients)
            .field("mail_from", &self.mail_from)
            .field("storage", &self.storage)
            .finish()
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

//! Client for the hosted REST database that receives form submissions.
//!
//! Every write is best effort: callers go through [`persist_or_log`], which never
//! fails and reports where the record ended up.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use super::metrics::{record_store_call, record_submission};
use crate::config::StoreConfig;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store credentials are not configured")]
    NotConfigured,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Store rejected the insert with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    fn metric_label(&self) -> &'static str {
        match self {
            StoreError::NotConfigured => "not_configured",
            StoreError::Connection(_) => "connection_error",
            StoreError::Rejected { .. } => "rejected",
            StoreError::Serialization(_) => "serialization_error",
        }
    }
}

/// Where a submission ended up.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StorageOutcome {
    Supabase,
    LocalLogs,
}

impl StorageOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageOutcome::Supabase => "supabase",
            StorageOutcome::LocalLogs => "local_logs",
        }
    }
}

#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn insert(&self, table: &str, record: &serde_json::Value) -> Result<(), StoreError>;
    fn is_configured(&self) -> bool;
}

/// PostgREST-style insert: `POST {url}/rest/v1/{table}`.
pub struct SupabaseStore {
    config: StoreConfig,
    client: Client,
}

impl SupabaseStore {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StoreError::Connection(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn table_url(&self, base_url: &str, table: &str) -> String {
        format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table)
    }
}

#[async_trait]
impl SubmissionStore for SupabaseStore {
    async fn insert(&self, table: &str, record: &serde_json::Value) -> Result<(), StoreError> {
        let (base_url, api_key) = match (&self.config.url, &self.config.api_key) {
            (Some(url), Some(key)) if self.config.is_configured() => (url, key.expose_secret()),
            _ => return Err(StoreError::NotConfigured),
        };

        let response = self
            .client
            .post(self.table_url(base_url, table))
            .header("apikey", api_key.as_str())
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to reach store: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected { status, body });
        }

        Ok(())
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }
}

/// Forward `record` to `table`, or log it when the store is unconfigured or
/// the insert fails. Never returns an error.
pub async fn persist_or_log<T: Serialize>(
    store: &dyn SubmissionStore,
    form: &'static str,
    table: &str,
    record: &T,
) -> StorageOutcome {
    let outcome = match serde_json::to_value(record) {
        Ok(payload) => match store.insert(table, &payload).await {
            Ok(()) => {
                record_store_call(table, "success");
                tracing::info!(form, table, "Submission stored");
                StorageOutcome::Supabase
            }
            Err(StoreError::NotConfigured) => {
                tracing::info!(
                    form,
                    table,
                    record = %payload,
                    "Store not configured, submission logged locally"
                );
                StorageOutcome::LocalLogs
            }
            Err(e) => {
                record_store_call(table, e.metric_label());
                tracing::warn!(
                    form,
                    table,
                    error = %e,
                    record = %payload,
                    "Store insert failed, submission logged locally"
                );
                StorageOutcome::LocalLogs
            }
        },
        Err(e) => {
            let e = StoreError::Serialization(e.to_string());
            record_store_call(table, e.metric_label());
            tracing::error!(form, table, error = %e, "Could not encode submission");
            StorageOutcome::LocalLogs
        }
    };

    record_submission(form, outcome.as_str());
    outcome
}

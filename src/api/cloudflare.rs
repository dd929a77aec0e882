use std::time::Duration;

use super::{client::DnsApiClient, models::*};
use crate::error::{Error, Result};
use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

const API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

pub struct CloudflareClient {
    client: reqwest::Client,
    base_url: String,
}

#[async_trait]
impl DnsApiClient for CloudflareClient {
    async fn list_records(&self, zone_id: &str, token: &str) -> Result<Vec<ProviderRecord>> {
        let response = self
            .client
            .get(format!("{}/zones/{}/dns_records", self.base_url, zone_id))
            .headers(Self::build_headers())
            .bearer_auth(token)
            .send()
            .await?;

        let parsed: ApiResponse<Vec<ProviderRecord>> = Self::read_envelope(response).await?;
        Ok(parsed.result.unwrap_or_default())
    }

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        token: &str,
        update: &DnsRecordUpdate,
    ) -> Result<()> {
        let response = self
            .client
            .put(format!(
                "{}/zones/{}/dns_records/{}",
                self.base_url, zone_id, record_id
            ))
            .headers(Self::build_headers())
            .bearer_auth(token)
            .json(update)
            .send()
            .await?;

        let _: ApiResponse<serde_json::Value> = Self::read_envelope(response).await?;
        Ok(())
    }
}

impl CloudflareClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_base_url(API_BASE_URL, timeout)
    }

    /// Points the client at another API root. Used to talk to a local stand-in.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn build_headers() -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        headers
    }

    /// Turns a non-2xx status, an unreadable body or `success: false` into
    /// `Error::Provider`, keeping the raw body for the log.
    async fn read_envelope<T: DeserializeOwned + Default>(
        response: reqwest::Response,
    ) -> Result<ApiResponse<T>> {
        let status = response.status();
        let text = response.text().await?;
        debug!("Cloudflare responded {}: {}", status, text);

        if !status.is_success() {
            return Err(Error::provider(status.as_u16(), text));
        }

        let parsed: ApiResponse<T> = serde_json::from_str(&text).map_err(|e| {
            Error::provider(
                status.as_u16(),
                format!("Failed to parse API response: {}. Response: {}", e, text),
            )
        })?;

        if !parsed.success {
            return Err(Error::provider(status.as_u16(), text));
        }

        Ok(parsed)
    }
}

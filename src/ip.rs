use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use log::info;

use crate::error::{Error, Result};

#[async_trait]
pub trait IpSource: Send + Sync {
    async fn current_ip(&self) -> Result<Ipv4Addr>;
}

/// Asks a plain-text "what is my IP" endpoint, over IPv4 only.
pub struct HttpIpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpIpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        // Binding to the IPv4 wildcard rules out IPv6 connections, so the
        // endpoint can only ever see (and echo back) our IPv4 address.
        let client = reqwest::Client::builder()
            .local_address(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl IpSource for HttpIpSource {
    async fn current_ip(&self) -> Result<Ipv4Addr> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let ip = parse_ipv4(&body)?;
        info!("Current IP: {}", ip);

        Ok(ip)
    }
}

pub fn parse_ipv4(raw: &str) -> Result<Ipv4Addr> {
    let trimmed = raw.trim();
    Ipv4Addr::from_str(trimmed).map_err(|_| Error::InvalidAddress(trimmed.to_string()))
}

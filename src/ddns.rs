use std::net::Ipv4Addr;

use log::{error, info, warn};

use crate::api::{DnsApiClient, DnsRecordUpdate};
use crate::cache::IpCache;
use crate::config::Zone;
use crate::error::Result;
use crate::ip::IpSource;
use crate::resolver::resolve_zone_records;

/// How a single reconciliation pass ended. Only a failure to learn the
/// current IP is an `Err`; everything here is a normal exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    /// Current IP matched the cached one, nothing was sent to the provider.
    Unchanged,
    /// Every zone was updated and the cache now holds the new IP.
    Updated,
    /// At least one zone failed; the cache was left as it was.
    PartialFailure { failed_zones: Vec<String> },
    /// Every zone was updated but the new IP could not be saved.
    CommitFailed,
}

pub struct CloudflareDdns {
    zones: Vec<Zone>,
    ip_source: Box<dyn IpSource>,
    client: Box<dyn DnsApiClient>,
    cache: IpCache,
}

impl CloudflareDdns {
    pub fn new(
        zones: Vec<Zone>,
        ip_source: Box<dyn IpSource>,
        client: Box<dyn DnsApiClient>,
        cache: IpCache,
    ) -> Self {
        Self {
            zones,
            ip_source,
            client,
            cache,
        }
    }

    pub async fn run_once(&self) -> Result<PassOutcome> {
        info!("Running...");

        let last_ip = self.last_ip().await;
        let current_ip = self.ip_source.current_ip().await?;

        if last_ip == Some(current_ip) {
            info!("IP has not changed. Exiting...");
            return Ok(PassOutcome::Unchanged);
        }

        // Every zone gets a go, whatever happened to the ones before it.
        let mut failed_zones = Vec::new();
        for zone in &self.zones {
            if !self.update_zone(zone, current_ip).await {
                failed_zones.push(zone.name.clone());
            }
        }

        if !failed_zones.is_empty() {
            error!(
                "Failed to update zones {:?}; keeping the cached IP so the next run retries everything",
                failed_zones
            );
            return Ok(PassOutcome::PartialFailure { failed_zones });
        }

        match self.cache.write_last_ip(current_ip).await {
            Ok(()) => {
                info!("All records updated successfully. Exiting...");
                Ok(PassOutcome::Updated)
            }
            Err(e) => {
                error!("All records updated but the current IP could not be saved: {}", e);
                Ok(PassOutcome::CommitFailed)
            }
        }
    }

    async fn last_ip(&self) -> Option<Ipv4Addr> {
        match self.cache.read_last_ip().await {
            Ok(ip) => {
                match ip {
                    Some(ip) => info!("Last IP: {}", ip),
                    None => info!("No last IP recorded in {}", self.cache.path().display()),
                }
                ip
            }
            Err(e) => {
                warn!("Could not read last IP, treating it as unknown: {}", e);
                None
            }
        }
    }

    /// Returns whether every resolved record in the zone took the new IP.
    async fn update_zone(&self, zone: &Zone, ip: Ipv4Addr) -> bool {
        let records = match resolve_zone_records(self.client.as_ref(), zone).await {
            Ok(records) => records,
            Err(e) => {
                error!("Failed to read records in zone {}: {}", zone.name, e);
                return false;
            }
        };

        let content = ip.to_string();
        let mut succeeded = true;

        for record in &records {
            info!("Updating record: {} in zone: {}", record.name, zone.name);
            let update = DnsRecordUpdate::a_record(&record.name, &content, record.proxied);

            match self
                .client
                .update_record(&zone.id, &record.id, &zone.token, &update)
                .await
            {
                Ok(()) => info!("Record {} updated successfully", record.name),
                Err(e) => {
                    error!("Failed to update record {}: {}", record.name, e);
                    succeeded = false;
                }
            }
        }

        succeeded
    }
}

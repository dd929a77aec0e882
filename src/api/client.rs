use super::models::*;
use crate::error::Result;
use async_trait::async_trait;

/// Both calls are authorized per zone, so the token travels with each request.
#[async_trait]
pub trait DnsApiClient: Send + Sync {
    async fn list_records(&self, zone_id: &str, token: &str) -> Result<Vec<ProviderRecord>>;

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        token: &str,
        update: &DnsRecordUpdate,
    ) -> Result<()>;
}

use log::{info, warn};

use crate::api::DnsApiClient;
use crate::config::Zone;
use crate::error::Result;

/// A configured record paired with the provider's id for it. Lives for one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRecord {
    pub id: String,
    pub name: String,
    pub proxied: bool,
}

/// Lists the zone once and matches every configured name against it.
///
/// Names the provider doesn't know about are skipped with a warning. The
/// first listing entry wins when a name appears more than once. Only a
/// failed listing is an error.
pub async fn resolve_zone_records(
    client: &dyn DnsApiClient,
    zone: &Zone,
) -> Result<Vec<ResolvedRecord>> {
    info!("Reading zone {} to find record ids", zone.name);
    let listing = client.list_records(&zone.id, &zone.token).await?;

    let mut resolved = Vec::with_capacity(zone.records.len());
    for spec in &zone.records {
        match listing.iter().find(|record| record.name == spec.name) {
            Some(record) => {
                info!("Found record id for {}: {}", spec.name, record.id);
                resolved.push(ResolvedRecord {
                    id: record.id.clone(),
                    name: spec.name.clone(),
                    proxied: record.proxied,
                });
            }
            None => warn!(
                "Record {} is not present in zone {}, skipping",
                spec.name, zone.name
            ),
        }
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DnsRecordUpdate, ProviderRecord};
    use crate::config::RecordSpec;
    use crate::error::Error;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticListing {
        records: Vec<ProviderRecord>,
        fail: bool,
        list_calls: AtomicUsize,
    }

    impl StaticListing {
        fn new(records: Vec<ProviderRecord>) -> Self {
            Self {
                records,
                fail: false,
                list_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl DnsApiClient for StaticListing {
        async fn list_records(&self, _zone_id: &str, _token: &str) -> Result<Vec<ProviderRecord>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::provider(403, "forbidden"));
            }
            Ok(self.records.clone())
        }

        async fn update_record(
            &self,
            _zone_id: &str,
            _record_id: &str,
            _token: &str,
            _update: &DnsRecordUpdate,
        ) -> Result<()> {
            unreachable!("resolver never updates")
        }
    }

    fn provider_record(id: &str, name: &str, proxied: bool) -> ProviderRecord {
        ProviderRecord {
            id: id.to_string(),
            name: name.to_string(),
            proxied,
        }
    }

    fn zone(records: &[&str]) -> Zone {
        Zone {
            id: "z1".to_string(),
            name: "example.com".to_string(),
            token: "secret".to_string(),
            records: records
                .iter()
                .map(|name| RecordSpec {
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_lists_zone_once_for_many_records() {
        let client = StaticListing::new(vec![
            provider_record("r1", "home.example.com", true),
            provider_record("r2", "office.example.com", false),
        ]);

        let resolved = resolve_zone_records(
            &client,
            &zone(&["home.example.com", "office.example.com"]),
        )
        .await
        .unwrap();

        assert_eq!(client.list_calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            resolved,
            vec![
                ResolvedRecord {
                    id: "r1".to_string(),
                    name: "home.example.com".to_string(),
                    proxied: true,
                },
                ResolvedRecord {
                    id: "r2".to_string(),
                    name: "office.example.com".to_string(),
                    proxied: false,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_name_is_skipped() {
        let client = StaticListing::new(vec![provider_record("r1", "home.example.com", false)]);

        let resolved = resolve_zone_records(&client, &zone(&["gone.example.com", "home.example.com"]))
            .await
            .unwrap();

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, "r1");
    }

    #[tokio::test]
    async fn test_first_duplicate_wins() {
        let client = StaticListing::new(vec![
            provider_record("first", "home.example.com", false),
            provider_record("second", "home.example.com", true),
        ]);

        let resolved = resolve_zone_records(&client, &zone(&["home.example.com"]))
            .await
            .unwrap();

        assert_eq!(resolved[0].id, "first");
        assert!(!resolved[0].proxied);
    }

    #[tokio::test]
    async fn test_listing_failure_propagates() {
        let mut client = StaticListing::new(Vec::new());
        client.fail = true;

        let result = resolve_zone_records(&client, &zone(&["home.example.com"])).await;

        assert!(matches!(result, Err(Error::Provider { status: 403, .. })));
    }
}

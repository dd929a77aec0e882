use serde::{Deserialize, Serialize};

/// Cloudflare's sentinel TTL meaning "automatic".
pub const TTL_AUTOMATIC: u32 = 1;
pub const RECORD_TYPE_A: &str = "A";

/// One entry of a zone's `dns_records` listing. Fields we don't use are ignored.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ProviderRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub proxied: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DnsRecordUpdate {
    pub r#type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub proxied: bool,
}

impl DnsRecordUpdate {
    pub fn a_record(name: &str, content: &str, proxied: bool) -> Self {
        Self {
            r#type: RECORD_TYPE_A.to_string(),
            name: name.to_string(),
            content: content.to_string(),
            ttl: TTL_AUTOMATIC,
            proxied,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub result: Option<T>,
    pub success: bool,
}

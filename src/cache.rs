use std::io::ErrorKind;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

use log::info;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};
use crate::ip::parse_ipv4;

/// Single-value store for the last IPv4 address applied to every zone.
/// The file holds the bare address and nothing else.
#[derive(Debug, Clone)]
pub struct IpCache {
    path: PathBuf,
}

impl IpCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing or empty file means "no prior IP". Anything else that goes
    /// wrong is reported so the caller can decide how loud to be about it.
    pub async fn read_last_ip(&self) -> Result<Option<Ipv4Addr>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::storage(&self.path, e)),
        };

        if contents.trim().is_empty() {
            return Ok(None);
        }

        parse_ipv4(&contents).map(Some)
    }

    /// Writes next to the target and renames over it, so a crash leaves
    /// either the old value or the new one.
    pub async fn write_last_ip(&self, ip: Ipv4Addr) -> Result<()> {
        let temp_path = self.temp_path();
        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| Error::storage(&temp_path, e))?;
            file.write_all(ip.to_string().as_bytes())
                .await
                .map_err(|e| Error::storage(&temp_path, e))?;
            file.sync_all()
                .await
                .map_err(|e| Error::storage(&temp_path, e))?;
        }

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| Error::storage(&self.path, e))?;

        info!("Current IP saved to {}", self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

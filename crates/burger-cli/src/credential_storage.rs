use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use burger::{ApiUrl, CredentialStore, Error};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

#[derive(Debug, Default, Serialize, Deserialize)]
struct CredentialData {
    api_url: String,
    access_token: Option<String>,
    refresh_token: Option<String>,
}

/// Credentials kept as json in the work directory, one file per API url
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    api_url: ApiUrl,
    lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(work_dir: &Path, api_url: ApiUrl) -> Self {
        let file_name = format!(
            "credentials_{}.json",
            api_url
                .to_string()
                .replace("://", "_")
                .replace(['/', ':'], "_")
        );

        Self {
            path: work_dir.join(file_name),
            api_url,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<CredentialData, Error> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(self.empty()),
            Err(err) => return Err(Error::Custom(err.to_string())),
        };

        let data: CredentialData = serde_json::from_str(&contents)?;
        if data.api_url == self.api_url.to_string() {
            Ok(data)
        } else {
            tracing::warn!(
                "Ignoring credentials stored for {} while talking to {}",
                data.api_url,
                self.api_url
            );
            Ok(self.empty())
        }
    }

    fn write(&self, data: &CredentialData) -> Result<(), Error> {
        if data.access_token.is_none() && data.refresh_token.is_none() {
            return match fs::remove_file(&self.path) {
                Err(err) if err.kind() != ErrorKind::NotFound => Err(Error::Custom(err.to_string())),
                _ => Ok(()),
            };
        }

        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json).map_err(|err| Error::Custom(err.to_string()))
    }

    fn empty(&self) -> CredentialData {
        CredentialData {
            api_url: self.api_url.to_string(),
            ..Default::default()
        }
    }

    async fn get(&self, field: fn(CredentialData) -> Option<String>) -> Option<String> {
        let _guard = self.lock.lock().await;
        match self.read() {
            Ok(data) => field(data),
            Err(err) => {
                tracing::warn!("Could not read {}: {}", self.path.display(), err);
                None
            }
        }
    }

    async fn update(&self, apply: impl FnOnce(&mut CredentialData)) -> Result<(), Error> {
        let _guard = self.lock.lock().await;
        let mut data = self.read().unwrap_or_else(|_| self.empty());
        apply(&mut data);
        self.write(&data)
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn access_token(&self) -> Option<String> {
        self.get(|data| data.access_token).await
    }

    async fn set_access_token(&self, token: Option<String>) -> Result<(), Error> {
        self.update(|data| data.access_token = token).await
    }

    async fn refresh_token(&self) -> Option<String> {
        self.get(|data| data.refresh_token).await
    }

    async fn set_refresh_token(&self, token: Option<String>) -> Result<(), Error> {
        self.update(|data| data.refresh_token = token).await
    }
}

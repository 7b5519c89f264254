use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::models::{CreateEnvelope, InventoryItem, ItemEnvelope, ListEnvelope, NewInventoryItem};

/// Errors from the remote inventory service. Transport failures and non-2xx
/// responses both abort the calling operation with local state unchanged.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid inventory service URL: {0}")]
    BadBaseUrl(#[from] url::ParseError),

    #[error("request to inventory service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("inventory service returned {status} for {method} {path}")]
    Status {
        method: &'static str,
        path: String,
        status: StatusCode,
    },
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Client for the remote inventory service. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Clone)]
pub struct InventoryClient {
    http: reqwest::Client,
    base: Url,
}

impl InventoryClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn list_items(&self) -> Result<Vec<InventoryItem>> {
        let url = self.endpoint("api/inventories");
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ServiceError::Status {
                method: "GET",
                path: url,
                status: response.status(),
            });
        }
        let envelope: ListEnvelope = response.json().await?;
        Ok(envelope.data.into_iter().map(InventoryItem::from).collect())
    }

    pub async fn create_item(&self, candidate: &NewInventoryItem) -> Result<InventoryItem> {
        let url = self.endpoint("api/inventories");
        let response = self
            .http
            .post(&url)
            .json(&CreateEnvelope { data: candidate })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ServiceError::Status {
                method: "POST",
                path: url,
                status: response.status(),
            });
        }
        let envelope: ItemEnvelope = response.json().await?;
        Ok(envelope.data.into())
    }

    // The body of a successful delete is ignored; the service is not required
    // to return one.
    pub async fn delete_item(&self, document_id: &str) -> Result<()> {
        let url = self.endpoint(&format!(
            "api/inventories/{}",
            urlencoding::encode(document_id)
        ));
        let response = self.http.delete(&url).send().await?;
        if !response.status().is_success() {
            return Err(ServiceError::Status {
                method: "DELETE",
                path: url,
                status: response.status(),
            });
        }
        Ok(())
    }
}

use contracts::sales::SalesRecord;
use once_cell::sync::OnceCell;
use thiserror::Error;

use super::config::SalesApiConfig;

/// Failures at the remote-fetch boundary.
///
/// Connect errors, timeouts and body-decode errors arrive through
/// `reqwest::Error`; non-2xx answers are reported separately because the
/// sales API signals bad filters with plain status codes.
#[derive(Debug, Error)]
pub enum SalesApiError {
    #[error("sales API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("sales API returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// HTTP client for the external sales dataset endpoint
pub struct SalesApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl SalesApiClient {
    pub fn new(config: &SalesApiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch the dataset with the resolved region/year filters.
    ///
    /// Both parameters go out as-is: the empty string is the API's own
    /// "no filter" value, so there is nothing to special-case here.
    pub async fn fetch_products(
        &self,
        regiao: &str,
        ano: &str,
    ) -> Result<Vec<SalesRecord>, SalesApiError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("regiao", regiao), ("ano", ano)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SalesApiError::Status(status));
        }

        let records = response.json::<Vec<SalesRecord>>().await?;
        Ok(records)
    }
}

static CLIENT: OnceCell<SalesApiClient> = OnceCell::new();

/// Build the shared client from configuration. Called once from `main`.
pub fn init_client(config: &SalesApiConfig) -> anyhow::Result<()> {
    let client = SalesApiClient::new(config)?;
    CLIENT
        .set(client)
        .map_err(|_| anyhow::anyhow!("sales API client already initialized"))?;

    tracing::info!("Sales API client initialized for {}", config.base_url);
    Ok(())
}

/// Shared client accessor. Panics if `init_client` has not run.
pub fn get_client() -> &'static SalesApiClient {
    CLIENT
        .get()
        .expect("sales API client is not initialized - call init_client first")
}

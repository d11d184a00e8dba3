//! Bitcoin to fiat conversion against a live quote.

use anyhow::{Context, Result, anyhow, bail};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::core::config::{ConverterConfig, DEFAULT_ENDPOINT};
use crate::core::currency::Currency;
use crate::core::error::{ConvertError, ConvertResult};
use crate::core::http::{HttpClient, HttpResponse};
use crate::core::number::NumberFormat;
use crate::core::quote::ExchangeQuote;
use crate::providers::coindesk::CoindeskQuote;
use crate::providers::reqwest_client::ReqwestClient;

/// Returned in place of a rate or converted amount when the quote could not
/// be retrieved or read.
pub const RATE_UNAVAILABLE: f64 = -1.0;

pub struct RateConverter {
    client: Arc<dyn HttpClient>,
    endpoint: String,
    number_format: NumberFormat,
    timeout: Option<Duration>,
}

impl Default for RateConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl RateConverter {
    /// Converter using a default `reqwest` client and the public endpoint.
    pub fn new() -> Self {
        Self::with_client(Arc::new(ReqwestClient::new()))
    }

    pub fn with_client(client: Arc<dyn HttpClient>) -> Self {
        RateConverter {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            number_format: NumberFormat::default(),
            timeout: None,
        }
    }

    pub fn from_config(config: &ConverterConfig) -> Result<Self> {
        config.number_format.validate()?;
        let client = ReqwestClient::from_config(config)?;

        let mut converter = Self::with_client(Arc::new(client))
            .with_endpoint(&config.endpoint)
            .with_number_format(config.number_format);
        converter.timeout = config.timeout();
        Ok(converter)
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    /// Bounds each quote fetch, including reading the body.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Current price of one bitcoin in `currency`, or [`RATE_UNAVAILABLE`]
    /// if anything goes wrong while fetching or reading the quote.
    #[instrument(name = "ExchangeRate", skip(self), fields(currency = %currency))]
    pub async fn get_exchange_rate(&self, currency: Currency) -> f64 {
        match self.fetch_rate(currency).await {
            Ok(rate) => {
                debug!(rate, "Fetched exchange rate");
                rate
            }
            Err(e) => {
                warn!("Exchange rate unavailable: {e:#}");
                RATE_UNAVAILABLE
            }
        }
    }

    /// Value of `coins` bitcoin in `currency`.
    ///
    /// Negative amounts are rejected before any request is made. When the
    /// rate is unavailable the result is [`RATE_UNAVAILABLE`].
    pub async fn convert_bitcoins(&self, currency: Currency, coins: f64) -> ConvertResult<f64> {
        if coins < 0.0 {
            return Err(ConvertError::InvalidArgument(format!(
                "Coins must be greater than or equal to 0, got {coins}"
            )));
        }

        let rate = self.get_exchange_rate(currency).await;
        if rate >= 0.0 {
            Ok(rate * coins)
        } else {
            Ok(RATE_UNAVAILABLE)
        }
    }

    /// Fetches the quote for every supported currency in one request.
    pub async fn fetch_quote(&self) -> Result<ExchangeQuote> {
        let document = self.fetch_document().await?;
        Ok(document.into_exchange_quote(&self.number_format))
    }

    async fn fetch_rate(&self, currency: Currency) -> Result<f64> {
        self.fetch_document()
            .await?
            .rate(currency, &self.number_format)
    }

    async fn fetch_document(&self) -> Result<CoindeskQuote> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.request_document())
                .await
                .map_err(|_| anyhow!("Quote request timed out after {:?}", limit))?,
            None => self.request_document().await,
        }
    }

    async fn request_document(&self) -> Result<CoindeskQuote> {
        debug!("Requesting quote from {}", self.endpoint);
        let mut response = self.client.get(&self.endpoint).await?;

        let document = self.read_document(response.as_mut()).await;
        let released = response
            .close()
            .await
            .context("Failed to release quote response");

        let document = document?;
        released?;
        Ok(document)
    }

    async fn read_document(&self, response: &mut dyn HttpResponse) -> Result<CoindeskQuote> {
        if !response.is_success() {
            bail!(
                "HTTP error: {} for URL: {}",
                response.status(),
                self.endpoint
            );
        }

        let body = response
            .text()
            .await
            .context("Failed to read quote response")?;
        CoindeskQuote::parse(&body)
    }
}

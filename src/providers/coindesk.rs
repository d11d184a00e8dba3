//! CoinDesk "current price" document

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use crate::core::currency::Currency;
use crate::core::number::NumberFormat;
use crate::core::quote::ExchangeQuote;

/// Quote body kept as untyped JSON so that each lookup only depends on the
/// fields it reads.
#[derive(Debug, Clone)]
pub struct CoindeskQuote {
    body: Value,
}

impl CoindeskQuote {
    pub fn parse(body: &str) -> Result<Self> {
        let body = serde_json::from_str(body).context("Failed to parse quote response")?;
        Ok(CoindeskQuote { body })
    }

    /// Rate at `bpi.<code>.rate`. Strings are parsed with `format`, JSON
    /// numbers are taken as they are.
    pub fn rate(&self, currency: Currency, format: &NumberFormat) -> Result<f64> {
        let bpi = self
            .body
            .get("bpi")
            .filter(|bpi| bpi.is_object())
            .ok_or_else(|| anyhow!("Quote has no bpi section"))?;
        let entry = bpi
            .get(currency.code())
            .ok_or_else(|| anyhow!("No rate data found for currency: {}", currency))?;
        let raw = entry
            .get("rate")
            .filter(|rate| !rate.is_null())
            .ok_or_else(|| anyhow!("Rate missing for currency: {}", currency))?;

        match raw {
            Value::String(text) => format
                .parse(text)
                .with_context(|| format!("Invalid rate for currency: {currency}")),
            Value::Number(number) => number
                .as_f64()
                .ok_or_else(|| anyhow!("Invalid rate for currency: {}", currency)),
            other => Err(anyhow!(
                "Invalid rate for currency: {}: unexpected {}",
                currency,
                other
            )),
        }
    }

    pub fn updated(&self) -> Option<DateTime<Utc>> {
        let raw = self.body.get("time")?.get("updatedISO")?.as_str()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }

    pub fn chart_name(&self) -> Option<&str> {
        self.body.get("chartName")?.as_str()
    }

    /// Entries that are missing or do not parse are left out.
    pub fn into_exchange_quote(self, format: &NumberFormat) -> ExchangeQuote {
        let mut rates = HashMap::new();
        for currency in Currency::ALL {
            match self.rate(currency, format) {
                Ok(rate) => {
                    rates.insert(currency, rate);
                }
                Err(e) => debug!(%currency, error = %e, "Skipping currency"),
            }
        }

        ExchangeQuote {
            rates,
            updated: self.updated(),
            chart_name: self.chart_name().map(str::to_string),
        }
    }
}

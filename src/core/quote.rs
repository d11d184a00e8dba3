//! Quote types

use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::currency::Currency;

/// Bitcoin price in each fiat currency at fetch time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeQuote {
    pub rates: HashMap<Currency, f64>,
    pub updated: Option<DateTime<Utc>>,
    pub chart_name: Option<String>,
}

impl ExchangeQuote {
    pub fn rate(&self, currency: Currency) -> Result<f64> {
        self.rates
            .get(&currency)
            .copied()
            .ok_or_else(|| anyhow!("No rate found for currency: {}", currency))
    }

    pub fn convert(&self, currency: Currency, coins: f64) -> Result<f64> {
        Ok(self.rate(currency)? * coins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_rate_lookup() {
        let quote = ExchangeQuote {
            rates: HashMap::from([(Currency::USD, 11486.5341)]),
            ..Default::default()
        };

        assert_eq!(quote.rate(Currency::USD).unwrap(), 11486.5341);
        assert_eq!(quote.convert(Currency::USD, 2.0).unwrap(), 22973.0682);
        assert_eq!(
            quote.rate(Currency::EUR).unwrap_err().to_string(),
            "No rate found for currency: EUR"
        );
    }
}

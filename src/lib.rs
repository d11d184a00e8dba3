pub mod converter;
pub mod core;
pub mod providers;

pub use crate::converter::{RATE_UNAVAILABLE, RateConverter};
pub use crate::core::{ConvertError, ConverterConfig, Currency, ExchangeQuote, NumberFormat};

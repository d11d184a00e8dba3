//! Core business logic abstractions

pub mod config;
pub mod currency;
pub mod error;
pub mod http;
pub mod log;
pub mod number;
pub mod quote;

// Re-export main types for cleaner imports
pub use config::ConverterConfig;
pub use currency::Currency;
pub use error::{ConvertError, ConvertResult};
pub use http::{HttpClient, HttpResponse};
pub use number::NumberFormat;
pub use quote::ExchangeQuote;

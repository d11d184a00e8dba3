pub mod coindesk;
pub mod reqwest_client;

pub use coindesk::CoindeskQuote;
pub use reqwest_client::ReqwestClient;

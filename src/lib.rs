pub mod cli;
pub mod config;
pub mod io;
pub mod logging;
pub mod sales;

pub use config::Settings;
pub use sales::{SaleRecord, SalesError, SalesResult, SalesTotal, calculate_sales_total};

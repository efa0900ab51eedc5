pub mod config;
pub mod constants;
pub mod dates;
pub mod defaults;
pub mod error;
pub mod filter;
pub mod locale;
pub mod logging;
pub mod mapper;
pub mod reconcile;
pub mod snapshot;
pub mod source;
pub mod types;
pub mod urls;

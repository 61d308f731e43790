pub mod context;
pub mod format;
pub mod gateway;
pub mod mapping;

pub use crate::domain::model::{LookupRequest, LookupResult, LookupView};
pub use crate::domain::ports::{ConfigProvider, DateStyle, WhoisProvider};
pub use crate::utils::error::Result;

//! Workspace metapackage used by the cross-crate tests

pub use api_gateway;
pub use common;
pub use market_data;
pub use portfolio_service;

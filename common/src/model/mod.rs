//! Domain models for the ETF gateway

pub mod etf;
pub mod fees;
pub mod history;
pub mod market;
pub mod portfolio;

//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod analysis;

pub use analysis::{
    AnalysisError, AnalysisReport, DeliveryStatus, RankTableCommand, RankTableHandler,
    RunAnalysisCommand, RunAnalysisHandler,
};

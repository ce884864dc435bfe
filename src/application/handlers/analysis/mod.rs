//! Analysis handlers.
//!
//! Handlers that run the TOPSIS pipeline on uploaded or inline tables.

mod rank_table;
mod run_analysis;

pub use rank_table::{RankTableCommand, RankTableHandler};
pub use run_analysis::{
    AnalysisError, AnalysisReport, DeliveryStatus, RunAnalysisCommand, RunAnalysisHandler,
};

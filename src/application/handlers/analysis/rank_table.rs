//! RankTableHandler - Ranks a CSV table passed inline, without files or delivery.

use tracing::debug;

use crate::domain::topsis::csv_format::parse_csv;
use crate::domain::topsis::{PipelineError, ResultTable, TopsisPipeline, ValidationMode};

/// Command to rank an inline CSV table.
#[derive(Debug, Clone)]
pub struct RankTableCommand {
    pub csv: String,
    pub weights: String,
    pub impacts: String,
}

/// Handler for inline ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankTableHandler {
    pipeline: TopsisPipeline,
}

impl RankTableHandler {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            pipeline: TopsisPipeline::new(mode),
        }
    }

    pub fn handle(&self, cmd: &RankTableCommand) -> Result<ResultTable, PipelineError> {
        let matrix = parse_csv(cmd.csv.as_bytes()).map_err(|e| PipelineError::Invalid(vec![e]))?;
        debug!(rows = matrix.row_count(), "Ranking inline table");
        self.pipeline.run(&matrix, &cmd.weights, &cmd.impacts)
    }
}

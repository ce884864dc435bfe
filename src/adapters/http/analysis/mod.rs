//! HTTP adapter for TOPSIS analysis endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnalysisResponse, ErrorResponse, FormError, HealthResponse, RankRequest, RankResponse,
    RankedRowView, UploadForm,
};
pub use handlers::{AnalysisApiError, AnalysisAppState};
pub use routes::{analysis_router, app_router};

use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("storage failure: {0}")]
    Storage(#[from] DbErr),
}

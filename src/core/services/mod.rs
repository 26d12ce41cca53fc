pub mod settlement_service;

pub use settlement_service::{PeriodSettlement, SettlementService};

use crate::errors::SettlementError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Settlement(#[from] SettlementError),
    #[error("{0}")]
    Invalid(String),
}

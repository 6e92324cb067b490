pub mod errors;
pub mod valuation_service;

pub use errors::ValuationError;
pub use valuation_service::ValuationService;

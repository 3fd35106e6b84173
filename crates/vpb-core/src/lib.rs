pub mod annual;
pub mod audit;
pub mod error;
pub mod extraction;
pub mod period;
pub mod report;
pub mod schedule;
pub mod types;

pub use error::VpbError;
pub use types::*;

/// Standard result type for all VPB operations
pub type VpbResult<T> = Result<T, VpbError>;

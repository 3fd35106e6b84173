use thiserror::Error;

#[derive(Debug, Error)]
pub enum VpbError {
    #[error("no quarterly data with positive revenue was found to process")]
    NoValidPeriods,

    #[error("computation failed: {reason}")]
    Computation { reason: String },
}

impl From<serde_json::Error> for VpbError {
    fn from(e: serde_json::Error) -> Self {
        VpbError::Computation {
            reason: e.to_string(),
        }
    }
}

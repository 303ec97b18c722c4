use thiserror::Error;

/// The central error type for the circular buffer crate.
///
/// Only construction and the application layer can fail. Overflow is handled
/// by evicting the oldest element and an empty `pop` yields `None`, so
/// neither shows up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingBufferError {
    #[error("Invalid capacity {requested}: a ring buffer needs at least one slot")]
    InvalidCapacity { requested: usize },

    #[error("Failed to allocate storage for {capacity} slots")]
    AllocationFailure { capacity: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, RingBufferError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;
pub const EXIT_USAGE_ERROR: u8 = 3;

/// Determine the appropriate process exit code for an error.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    // Context layers wrap the typed error, so walk the whole chain
    for cause in e.chain() {
        if let Some(err) = cause.downcast_ref::<RingBufferError>() {
            return match err {
                RingBufferError::Config(_) => EXIT_CONFIG_ERROR,
                RingBufferError::InvalidOperation(_) | RingBufferError::InvalidCapacity { .. } => {
                    EXIT_USAGE_ERROR
                }
                RingBufferError::AllocationFailure { .. } => EXIT_ERROR,
            };
        }
    }

    EXIT_ERROR
}

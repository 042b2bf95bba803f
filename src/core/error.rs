//! Error types for the stack and guard components

/// Result type for threadstack operations
pub type Result<T> = std::result::Result<T, ThreadError>;

/// Errors that can occur when spawning, joining, or releasing threads
///
/// An empty stack is not represented here: `try_pop` reports the empty
/// condition as `None` because it is an expected, frequent outcome, not a
/// failure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ThreadError {
    /// Guard no longer owns a live, joinable thread handle
    #[error("No joinable thread: {message}")]
    InvalidThread {
        /// What was attempted on the missing handle
        message: String,
    },

    /// Failed to spawn a thread with details
    #[error("Failed to spawn thread '{name}': {message}")]
    SpawnError {
        /// Requested thread name
        name: String,
        /// Error message
        message: String,
        /// Source IO error
        #[source]
        source: Option<std::io::Error>,
    },

    /// Joined thread terminated by panic
    #[error("Failed to join thread '{name}': {message}")]
    JoinError {
        /// Name of the thread that failed to join
        name: String,
        /// Error message
        message: String,
    },
}

impl ThreadError {
    /// Create an invalid thread error
    pub fn invalid_thread(message: impl Into<String>) -> Self {
        ThreadError::InvalidThread {
            message: message.into(),
        }
    }

    /// Create a spawn error
    pub fn spawn(name: impl Into<String>, message: impl Into<String>) -> Self {
        ThreadError::SpawnError {
            name: name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a spawn error with source
    pub fn spawn_with_source(
        name: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        ThreadError::SpawnError {
            name: name.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a join error
    pub fn join(name: impl Into<String>, message: impl Into<String>) -> Self {
        ThreadError::JoinError {
            name: name.into(),
            message: message.into(),
        }
    }
}

//! Convenient re-exports for common types and traits

pub use crate::core::{Result, ThreadError};
pub use crate::guard::JoinGuard;
pub use crate::stack::{ConcurrentStack, StackStats};

//! Core types for the stack and guard components

pub mod error;

pub use error::{Result, ThreadError};

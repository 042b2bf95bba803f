//! # Threadstack
//!
//! A small concurrency crate pairing a mutex-guarded LIFO stack with
//! RAII thread-join guards.
//!
//! ## Features
//!
//! - **ConcurrentStack**: LIFO container safe for concurrent push/pop,
//!   built on `parking_lot` mutual exclusion
//! - **JoinGuard**: exclusive ownership of a thread handle with a
//!   join-on-scope-exit guarantee, including panic-unwind exits
//! - **Stack Statistics**: relaxed-atomic operation counters per stack
//! - **Non-blocking Pop**: empty stacks report `None` rather than erroring
//!
//! ## Quick Start
//!
//! ```rust
//! use threadstack::prelude::*;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<()> {
//! let stack = Arc::new(ConcurrentStack::new());
//! stack.push(1);
//!
//! // Workers close over the shared stack; guards join them on scope exit.
//! {
//!     let shared = Arc::clone(&stack);
//!     let _guard = JoinGuard::spawn(move || shared.push(4))?;
//!     stack.push(2);
//! }
//!
//! // All guarded workers have joined here; drain from the main thread.
//! while let Some(value) = stack.try_pop() {
//!     println!("popped {}", value);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Explicit Join
//!
//! ```rust
//! use threadstack::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut guard = JoinGuard::spawn_named("adder", || 2 + 2)?;
//! assert_eq!(guard.join()?, 4);
//! # Ok(())
//! # }
//! ```
//!
//! The stack takes one coarse lock per operation. That is a
//! simple-correctness baseline for light contention, not a high-throughput
//! design; operations are O(1) and hold the lock only for the single
//! structural mutation or read.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod guard;
pub mod prelude;
pub mod stack;

pub use crate::core::{Result, ThreadError};
pub use crate::guard::JoinGuard;
pub use crate::stack::{ConcurrentStack, StackStats};

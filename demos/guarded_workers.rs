//! Guarded worker threads sharing a concurrent stack
//!
//! Reproduces the classic interleaving: the main thread and two guarded
//! workers push into one stack, the guards join, and the main thread
//! drains. Run several times to see the interleaving vary.
//!
//! Run with: RUST_LOG=warn cargo run --example guarded_workers

use std::sync::Arc;
use threadstack::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Threadstack - Guarded Workers Example ===\n");

    let stack = Arc::new(ConcurrentStack::new());

    stack.push(1);

    let shared = Arc::clone(&stack);
    let mut worker_a = JoinGuard::spawn_named("worker-a", move || shared.push(4))?;

    stack.push(2);

    let shared = Arc::clone(&stack);
    let mut worker_b = JoinGuard::spawn_named("worker-b", move || shared.push(3))?;

    worker_a.join()?;
    worker_b.join()?;

    print!("Drained: ");
    while let Some(value) = stack.try_pop() {
        print!("{} ", value);
    }
    println!();

    // Guards also join automatically when dropped; a panic in the worker
    // is logged from the drop path rather than propagated.
    {
        let shared = Arc::clone(&stack);
        let _guard = JoinGuard::spawn_named("background", move || {
            for i in 10..15 {
                shared.push(i);
            }
        })?;
    }
    println!("Background worker pushed {} values", stack.len());

    Ok(())
}

//! Basic concurrent stack usage example
//!
//! Demonstrates push, non-blocking pop, emptiness checks, and statistics.
//!
//! Run with: cargo run --example basic_stack

use threadstack::prelude::*;

fn main() {
    println!("=== Threadstack - Basic Stack Example ===\n");

    let stack = ConcurrentStack::new();

    println!("1. Pushing values:");
    for i in 1..=5 {
        stack.push(i);
        println!("   pushed {}", i);
    }

    println!("\n2. Stack state:");
    println!("   len = {}", stack.len());
    println!("   is_empty = {}", stack.is_empty());

    println!("\n3. Draining (LIFO order):");
    while let Some(value) = stack.try_pop() {
        println!("   popped {}", value);
    }

    // Empty pop is an expected condition, not an error
    println!("\n4. Pop on empty: {:?}", stack.try_pop());

    println!("\n5. Statistics:");
    println!("   pushes:     {}", stack.stats().get_pushes());
    println!("   pops:       {}", stack.stats().get_pops());
    println!("   empty pops: {}", stack.stats().get_empty_pops());
}

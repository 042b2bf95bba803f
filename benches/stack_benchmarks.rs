use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::sync::Arc;
use threadstack::prelude::*;

fn benchmark_push_pop_single_thread(c: &mut Criterion) {
    c.bench_function("push_pop_single_thread_1000", |b| {
        b.iter_batched(
            ConcurrentStack::new,
            |stack| {
                for i in 0..1000u64 {
                    stack.push(black_box(i));
                }
                while let Some(value) = stack.try_pop() {
                    black_box(value);
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn benchmark_contended_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_push");

    for threads in [2usize, 4, 8] {
        group.bench_function(format!("pushers_{}", threads), |b| {
            b.iter(|| {
                let stack = Arc::new(ConcurrentStack::new());
                let guards: Vec<_> = (0..threads)
                    .map(|t| {
                        let stack = Arc::clone(&stack);
                        JoinGuard::spawn(move || {
                            for i in 0..250u64 {
                                stack.push(t as u64 * 250 + i);
                            }
                        })
                        .expect("Failed to spawn pusher")
                    })
                    .collect();
                drop(guards);
                black_box(stack.len());
            });
        });
    }

    group.finish();
}

fn benchmark_guard_spawn_join(c: &mut Criterion) {
    c.bench_function("guard_spawn_join", |b| {
        b.iter(|| {
            let mut guard = JoinGuard::spawn(|| black_box(1 + 1)).expect("Failed to spawn");
            guard.join().expect("Failed to join");
        });
    });
}

criterion_group!(
    benches,
    benchmark_push_pop_single_thread,
    benchmark_contended_push,
    benchmark_guard_spawn_join
);
criterion_main!(benches);

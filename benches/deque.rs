use criterion::{Criterion, black_box, criterion_group, criterion_main};
use int_collections::IntDeque;
use std::collections::VecDeque;

fn bench_deque(c: &mut Criterion) {
    let n = 1024;
    {
        let mut group = c.benchmark_group("VecDeque vs IntDeque (PushFront 1024)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_front(black_box(i));
                }
                d
            })
        });

        group.bench_function("IntDeque", |b| {
            b.iter(|| {
                let mut d = IntDeque::new();
                for i in 0..n {
                    d.push_front(black_box(i));
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs IntDeque (Get 1024)");
        let mut d_std = VecDeque::new();
        let mut d_int = IntDeque::new();
        for i in 0..n {
            d_std.push_front(i);
            d_int.push_front(i);
        }

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                for i in 0..n as usize {
                    black_box(d_std.get(black_box(i)));
                }
            })
        });

        group.bench_function("IntDeque", |b| {
            b.iter(|| {
                for i in 0..n as usize {
                    black_box(d_int.get(black_box(i)));
                }
            })
        });
        group.finish();
    }
}

fn bench_rotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("IntDeque rotate (1024)");
    let full: IntDeque = (0..1024).collect();
    let mut partial = IntDeque::with_capacity(2048);
    partial.extend(0..1024);

    group.bench_function("full ring", |b| {
        let mut d = full.clone();
        b.iter(|| d.rotate_left(black_box(17)))
    });

    group.bench_function("partial ring", |b| {
        let mut d = partial.clone();
        b.iter(|| d.rotate_left(black_box(17)))
    });
    group.finish();
}

criterion_group!(benches, bench_deque, bench_rotate);
criterion_main!(benches);

//! Tree traversal benchmarks
//!
//! Compares typed and JSON-backed pre-order traversal over balanced trees of
//! increasing size.
//!
//! Run with: `cargo bench --bench tree_bench -p toolbelt-common
//! --features foundation`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Value};
use toolbelt_common::tree::{find, flatten, for_each, for_each_value_default, TreeNode};

struct Node {
    id: usize,
    children: Vec<Node>,
}

impl TreeNode for Node {
    fn children(&self) -> Option<&[Self]> {
        Some(&self.children)
    }
}

/// Builds `width` roots, each with `width` children, `levels` deep.
fn typed_forest(width: usize, levels: usize, next_id: &mut usize) -> Vec<Node> {
    (0..width)
        .map(|_| {
            let id = *next_id;
            *next_id += 1;
            let children =
                if levels > 1 { typed_forest(width, levels - 1, next_id) } else { Vec::new() };
            Node { id, children }
        })
        .collect()
}

fn json_forest(width: usize, levels: usize, next_id: &mut usize) -> Value {
    let nodes: Vec<Value> = (0..width)
        .map(|_| {
            let id = *next_id;
            *next_id += 1;
            if levels > 1 {
                json!({ "id": id, "children": json_forest(width, levels - 1, next_id) })
            } else {
                json!({ "id": id })
            }
        })
        .collect();
    Value::Array(nodes)
}

fn node_count(width: usize, levels: usize) -> u64 {
    (1..=levels).map(|level| width.pow(level as u32) as u64).sum()
}

// ============================================================================
// Traversal Benchmarks
// ============================================================================

fn bench_for_each_typed(c: &mut Criterion) {
    let mut group = c.benchmark_group("for_each_typed");

    for levels in [2, 4, 6] {
        let forest = typed_forest(4, levels, &mut 0);
        group.throughput(Throughput::Elements(node_count(4, levels)));
        group.bench_with_input(BenchmarkId::from_parameter(levels), &forest, |b, forest| {
            b.iter(|| {
                let mut sum = 0usize;
                for_each(Some(forest.as_slice()), |node, _| sum += node.id);
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_for_each_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("for_each_json");

    for levels in [2, 4, 6] {
        let forest = json_forest(4, levels, &mut 0);
        group.throughput(Throughput::Elements(node_count(4, levels)));
        group.bench_with_input(BenchmarkId::from_parameter(levels), &forest, |b, forest| {
            b.iter(|| {
                let mut visited = 0usize;
                for_each_value_default(Some(forest), |_, _| visited += 1);
                black_box(visited)
            });
        });
    }

    group.finish();
}

fn bench_flatten_and_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_queries");
    let forest = typed_forest(4, 6, &mut 0);
    let last = node_count(4, 6) as usize - 1;

    group.bench_function("flatten", |b| {
        b.iter(|| black_box(flatten(Some(forest.as_slice())).len()));
    });
    group.bench_function("find_last", |b| {
        b.iter(|| black_box(find(Some(forest.as_slice()), |node| node.id == black_box(last))));
    });

    group.finish();
}

criterion_group!(tree_benches, bench_for_each_typed, bench_for_each_json, bench_flatten_and_find);
criterion_main!(tree_benches);

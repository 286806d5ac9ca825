use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use formula_ast::{Node, NodeKind};

fn node(kind: NodeKind, raw: &str) -> Node {
    Node::of(kind, raw).unwrap()
}

/// Left-leaning chain `1 + 1 + ... + 1`.
fn long_sum(terms: usize) -> Node {
    let mut tree = node(NodeKind::Number, "1");
    for _i in 1..terms {
        tree = node(NodeKind::BinaryOperator, "+")
            .with_child(tree)
            .with_child(node(NodeKind::Number, "1"));
    }
    tree
}

fn visit(c: &mut Criterion) {
    let mut group = c.benchmark_group("visit");

    let tree = long_sum(1000);
    group.throughput(Throughput::Elements(tree.count() as u64));
    group.bench_function("visit-numbers", |b| {
        b.iter(|| {
            let mut numbers = 0;
            tree.visit(|_| numbers += 1, |node| node.kind() == NodeKind::Number);
            numbers
        })
    });
}

fn transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    let tree = long_sum(1000);
    group.throughput(Throughput::Elements(tree.count() as u64));
    group.bench_function("identity", |b| {
        b.iter(|| {
            let mut tree = tree.clone();
            tree.transform(|children| children);
            tree
        })
    });
    group.bench_function("drop-numbers", |b| {
        b.iter(|| {
            let mut tree = tree.clone();
            tree.transform(|children| {
                children
                    .into_iter()
                    .filter(|child| child.kind() != NodeKind::Number)
                    .collect()
            });
            tree
        })
    });
}

criterion_group!(benches, visit, transform);
criterion_main!(benches);

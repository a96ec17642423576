use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use lineage_hash::CommitId;
use lineage_revwalk::Lineage;
use lineage_source::{GraphBuilder, MemorySource};

/// A long mainline with a feature branch forked near the tip and a merge of a
/// side branch every 100 commits.
fn history(len: usize) -> (Lineage<MemorySource>, CommitId, CommitId) {
    let mut graph = GraphBuilder::new();
    let mut tip = graph.commit("root", &[]);
    for i in 0..len {
        tip = if i % 100 == 99 {
            let side = graph.commit(&format!("side-{i}"), &[tip]);
            graph.commit(&format!("main-{i}"), &[tip, side])
        } else {
            graph.commit(&format!("main-{i}"), &[tip])
        };
    }
    let feature = graph.chain("feature", 20, Some(tip));
    let main = graph.chain("main-after", 5, Some(tip));
    (
        Lineage::new(graph.build()),
        feature[feature.len() - 1],
        main[main.len() - 1],
    )
}

fn ancestry(c: &mut Criterion) {
    let (lineage, feature, main) = history(50_000);

    let mut group = c.benchmark_group("deep_history");
    group.sample_size(20);

    group.bench_function("ancestors_50k", |b| {
        b.iter(|| lineage.ancestors(black_box(&main)).unwrap().len())
    });

    group.bench_function("ahead_behind_50k", |b| {
        b.iter(|| lineage.ahead_behind_ids(black_box(&feature), black_box(&main)).unwrap())
    });

    group.bench_function("commit_range_feature", |b| {
        b.iter_batched(
            || (main, feature),
            |(from, to)| lineage.commit_range(&from, &to).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, ancestry);
criterion_main!(benches);

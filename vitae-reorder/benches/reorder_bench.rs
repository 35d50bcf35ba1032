use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use serde_json::json;
use vitae_model::Section;
use vitae_reorder::{apply_group_order, apply_member_order, array_move, group_sections};
use vitae_types::{SectionId, SectionKind};

/// A flat list of `n` sections cycling through every kind, so groups stay
/// balanced and interleaved the way imported resumes arrive.
fn sections(n: usize) -> Vec<Section> {
    (0..n)
        .map(|i| {
            Section::new(
                SectionId::new(format!("sec-{i}")),
                SectionKind::ALL[i % SectionKind::ALL.len()],
                json!({"title": format!("entry {i}")}),
            )
        })
        .collect()
}

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");
    for size in [16, 128, 1024] {
        let flat = sections(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &flat, |b, flat| {
            b.iter(|| black_box(group_sections(flat)));
        });
    }
    group.finish();
}

fn bench_member_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("member_reconcile");
    for size in [16, 128, 1024] {
        let flat = sections(size);
        let grouped = group_sections(&flat);
        let members = grouped.members(SectionKind::Education).unwrap();
        let mut member_order: Vec<SectionId> = members.iter().map(|s| s.id.clone()).collect();
        member_order.reverse();

        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(grouped, member_order),
            |b, (grouped, member_order)| {
                b.iter(|| {
                    black_box(
                        apply_member_order(grouped, SectionKind::Education, member_order)
                            .expect("valid order"),
                    )
                });
            },
        );
    }
    group.finish();
}

fn bench_group_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_reconcile");
    for size in [16, 128, 1024] {
        let flat = sections(size);
        let grouped = group_sections(&flat);
        let mut group_order = grouped.order().to_vec();
        array_move(&mut group_order, 0, group_order.len() - 1);

        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(grouped, group_order),
            |b, (grouped, group_order)| {
                b.iter(|| black_box(apply_group_order(grouped, group_order).expect("valid order")));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_grouping,
    bench_member_reconcile,
    bench_group_reconcile
);
criterion_main!(benches);

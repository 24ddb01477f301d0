//! Benchmarks for navigation view building and active-page tracking
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sitenav::nav::*;
use std::sync::Arc;

/// `folders` folders of `pages` pages each
fn create_test_tree(folders: usize, pages: usize) -> Arc<NavTree> {
    let roots = (0..folders)
        .map(|f| {
            NavNode::folder(
                format!("folder_{}", f),
                Label::Key(format!("nav_folder_{}", f)),
                (0..pages)
                    .map(|p| {
                        NavNode::page(
                            format!("page_{}_{}", f, p),
                            Label::Text(format!("Page {}.{}", f, p)),
                            format!("html/{}/{}.html", f, p),
                        )
                    })
                    .collect(),
            )
        })
        .collect();
    Arc::new(NavTree::new(roots).unwrap())
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for (folders, pages) in [(4, 8), (16, 16), (32, 64)] {
        let tree = create_test_tree(folders, pages);
        group.throughput(Throughput::Elements(tree.node_count() as u64));

        group.bench_function(format!("build_{}x{}", folders, pages), |b| {
            b.iter(|| NavView::from_tree(black_box(Arc::clone(&tree))))
        });
    }

    group.finish();
}

fn bench_set_active(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_active");

    for (folders, pages) in [(4, 8), (16, 16), (32, 64)] {
        let tree = create_test_tree(folders, pages);
        let mut view = NavView::from_tree(Arc::clone(&tree));
        let last_page = format!("page_{}_{}", folders - 1, pages - 1);

        group.bench_function(format!("last_page_{}x{}", folders, pages), |b| {
            b.iter(|| set_active(&mut view, black_box(&last_page)))
        });

        group.bench_function(format!("lookup_{}x{}", folders, pages), |b| {
            b.iter(|| tree.page_info(black_box(&last_page)).is_some())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_set_active);
criterion_main!(benches);

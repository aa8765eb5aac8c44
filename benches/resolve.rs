// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkquote-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkquote and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use linkquote::dom::Document;
use linkquote::query::{find_references, first_reference};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group name in this file: `query.resolve`
// - Case IDs must remain stable across refactors.
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("query.resolve");

    for (case_id, posts, links_per_post) in
        [("small", 16_u64, 4_u64), ("medium", 256, 8), ("large", 1024, 16)]
    {
        let doc = fixtures::thread_page(posts, links_per_post);
        // Post 2 always links to post 1 first.
        let container = doc
            .element_by_id(fixtures::post_id(2).as_str())
            .expect("container in fixture");
        let target = fixtures::visible_post();

        group.throughput(Throughput::Elements(links_per_post));
        group.bench_function(format!("first/{case_id}"), |b| {
            b.iter(|| black_box(first_reference(&doc, container, &target)));
        });
        group.bench_function(format!("all/{case_id}"), |b| {
            b.iter(|| black_box(find_references(&doc, container, &target).count()));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = bench_resolve
}
criterion_main!(benches);

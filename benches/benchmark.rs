//! Performance benchmarks for page-outline.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A small landing page for the full extract + refine path
//! - A pathological flat document where the sibling-scan guard matters

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use page_outline::{extract, extract_with_options, refine, Options};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Product</title>
    <meta name="description" content="A sample landing page for benchmarking.">
    <meta property="og:title" content="Sample Product">
    <script type="application/ld+json">{"@type": "WebPage", "name": "Sample Product"}</script>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/pricing">Pricing</a>
    </nav>
    <section class="hero bg-blue" style="background-color: #0044cc">
        <h1>Build faster</h1>
        <p>Everything you need to ship a product, in one place.</p>
        <a class="btn btn-primary" href="/signup">Get started</a>
    </section>
    <section class="features">
        <h2>Features</h2>
        <ul>
            <li>Fast builds</li>
            <li>Safe deploys</li>
        </ul>
        <h3>Integrations</h3>
        <p>Connect the tools your team already uses.</p>
    </section>
    <section class="alert-warning">
        <h2>Heads up</h2>
        <p>Pricing changes next month.</p>
    </section>
    <footer>
        <p>Copyright 2026</p>
    </footer>
</body>
</html>
"#;

fn bench_extract_default(c: &mut Criterion) {
    c.bench_function("extract_default", |b| {
        b.iter(|| extract(black_box(SAMPLE_HTML)));
    });
}

fn bench_extract_and_refine(c: &mut Criterion) {
    let options = Options {
        url: Some("https://example.com/".to_string()),
        ..Options::default()
    };

    c.bench_function("extract_and_refine", |b| {
        b.iter(|| extract_with_options(black_box(SAMPLE_HTML), black_box(&options)).map(refine));
    });
}

/// Flat documents: many siblings under few headings.
fn bench_flat_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat");

    for siblings in [100usize, 1_000, 10_000] {
        let mut html = String::from("<body>");
        for h in 0..5 {
            html.push_str(&format!("<h2>Heading {h}</h2>"));
            for i in 0..siblings / 5 {
                html.push_str(&format!("<p>Paragraph {i} under heading {h}.</p>"));
            }
        }
        html.push_str("</body>");

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract", siblings), &html, |b, html| {
            b.iter(|| extract(black_box(html)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_default,
    bench_extract_and_refine,
    bench_flat_documents
);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use mdanchor_engine::{decorate, render};

fn generate_html_document(sections: usize) -> String {
    let mut markdown = String::new();
    for i in 0..sections {
        markdown.push_str(&format!("# Section {i}\n\nSome paragraph text.\n\n"));
        markdown.push_str(&format!("## Subsection {i}\n\n- one\n- two\n\n"));
    }
    render(&markdown)
}

fn bench_decorate(c: &mut Criterion) {
    let mut group = c.benchmark_group("decorate");
    group.sample_size(10);

    let html = generate_html_document(100);
    group.bench_function("decorate_200_headings", |b| {
        b.iter(|| {
            let decorated = decorate(std::hint::black_box(&html));
            std::hint::black_box(decorated);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_decorate);
criterion_main!(benches);

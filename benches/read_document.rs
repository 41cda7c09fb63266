use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mse_text::{read_tree, Reader, ReaderOptions};

fn synthetic_document(cards: usize) -> String {
    let mut text = String::from("mse version: 0.1.0\nset info:\n\ttitle: Benchmark\n");
    for index in 0..cards {
        text.push_str(&format!(
            "card:\n\tname: Card {index}\n\tcopies: {}\n\trule text:\n\t\tfirst line of card {index}\n\t\t\n\t\tsecond line\n",
            index % 4 + 1,
        ));
    }
    text
}

fn bench_read_document(c: &mut Criterion) {
    let small = synthetic_document(10);
    let large = synthetic_document(1_000);

    c.bench_function("read_tree 10 cards", |b| {
        b.iter(|| {
            let options = ReaderOptions::new().with_lenient(true);
            let mut reader = Reader::from_str(black_box(&small), "bench", &options).unwrap();
            black_box(read_tree(&mut reader).unwrap())
        })
    });

    c.bench_function("read_tree 1000 cards", |b| {
        b.iter(|| {
            let options = ReaderOptions::new().with_lenient(true);
            let mut reader = Reader::from_str(black_box(&large), "bench", &options).unwrap();
            black_box(read_tree(&mut reader).unwrap())
        })
    });
}

criterion_group!(benches, bench_read_document);
criterion_main!(benches);

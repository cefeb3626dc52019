use criterion::{black_box, criterion_group, criterion_main, Criterion};
use turbine::Tokenizer;

const SAMPLE: &str = r#"// compute a greeting
if ready {
    print "hello, \"world\""
} else {
    return 42
}
"#;

fn bench_tokenize(c: &mut Criterion) {
    let tokenizer = Tokenizer::new();
    let source = SAMPLE.repeat(200);

    c.bench_function("tokenize sample program", |b| {
        b.iter(|| tokenizer.tokenize(black_box(&source)).count())
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);

use criterion::{black_box, Criterion, criterion_group, criterion_main};
use faer::Mat;
use tmatrix::DynamicMatrix;

fn bench_matmul_vs_faer(c: &mut Criterion) {
    let n = 100;
    let a = DynamicMatrix::from_fn(n, |i, j| ((i * n + j) as f64).sin()).unwrap();
    let b = DynamicMatrix::from_fn(n, |i, j| ((i * n + j) as f64).cos()).unwrap();

    c.bench_function("tmatrix matmul", |ben| {
        ben.iter(|| {
            let _c = (black_box(&a) * black_box(&b)).unwrap();
        })
    });

    let fa = Mat::from(&a);
    let fb = Mat::from(&b);
    c.bench_function("faer raw matmul", |ben| {
        ben.iter(|| {
            let _c = black_box(&fa) * black_box(&fb);
        })
    });
}

criterion_group!(benches, bench_matmul_vs_faer);
criterion_main!(benches);

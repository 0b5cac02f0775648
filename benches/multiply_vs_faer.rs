use criterion::{black_box, Criterion, criterion_group, criterion_main};
use faer::Mat;
use polymul::{Matrix, MulOptions, Multiplier, Value};

fn bench_matmul_vs_faer(c: &mut Criterion) {
    let n = 64;
    let data: Vec<f64> = (0..n*n).map(|i| (i as f64).sin()).collect();
    let a = Mat::from_fn(n, n, |i, j| data[j * n + i]);
    let b = Mat::from_fn(n, n, |i, j| data[i * n + j].cos());
    let va = Value::Matrix(Matrix::from_faer(&a));
    let vb = Value::Matrix(Matrix::from_faer(&b));

    c.bench_function("polymul matmul serial", |ben| {
        let ctx = Multiplier::with_options(MulOptions { parallel_min_rows: usize::MAX, ..Default::default() });
        ben.iter(|| {
            let _p = ctx.multiply(black_box(&va), black_box(&vb)).unwrap();
        })
    });

    c.bench_function("polymul matmul parallel", |ben| {
        let ctx = Multiplier::with_options(MulOptions { parallel_min_rows: 1, ..Default::default() });
        ben.iter(|| {
            let _p = ctx.multiply(black_box(&va), black_box(&vb)).unwrap();
        })
    });

    c.bench_function("faer raw matmul", |ben| {
        ben.iter(|| {
            let _p = black_box(&a) * black_box(&b);
        })
    });
}

criterion_group!(benches, bench_matmul_vs_faer);
criterion_main!(benches);

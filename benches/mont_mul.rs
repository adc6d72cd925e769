use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use montmul::{
    Bm17, Bm17Simd, Cios, CiosF64, Delayed29, Delayed30, FieldPreset, MontParams,
    MontgomeryMultiplier, ScalarAlu, chain,
};

const CHAIN_LEN: usize = 1 << 12;

const A0: &str = "05552c9522974fd00772ef23d45519d4d3a486218b3a0d238a25560beda10ce9";
const B0: &str = "094c0e4dc5769c3bcc4c984fa08b0ceaf437545d83d259471a983cf05e97f19b";

fn bench_multiplier<M: MontgomeryMultiplier>(
    group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>,
    m: &M,
    label: &str,
) {
    let (Ok(a), Ok(b)) = (A0.parse::<M::Int>(), B0.parse::<M::Int>()) else {
        panic!("bench operands must be valid hex");
    };
    group.bench_with_input(BenchmarkId::new(label, CHAIN_LEN), &(a, b), |bencher, &(a, b)| {
        bencher.iter(|| black_box(chain(m, black_box(a), black_box(b), CHAIN_LEN)));
    });
}

pub fn mont_mul_benchmarks(c: &mut Criterion) {
    let params: MontParams = FieldPreset::Bls12_377Fr.get_params();
    let mut group = c.benchmark_group("Montgomery chain");

    bench_multiplier(&mut group, &Cios::from_params(&params), "cios 8x32");
    bench_multiplier(&mut group, &Bm17::from_params(&params), "bm17 scalar");
    bench_multiplier(&mut group, &Bm17Simd::<ScalarAlu>::from_params(&params), "bm17 vector (scalar alu)");
    bench_multiplier(&mut group, &<Bm17Simd>::from_params(&params), "bm17 vector (default alu)");
    bench_multiplier(&mut group, &CiosF64::<ScalarAlu>::from_params(&params), "f64 cios (scalar alu)");
    bench_multiplier(&mut group, &<CiosF64>::from_params(&params), "f64 cios (default alu)");
    bench_multiplier(&mut group, &Delayed30::from_params(&params), "delayed 9x30");
    bench_multiplier(&mut group, &Delayed29::from_params(&params), "delayed 9x29");
    group.finish();
}

criterion_group!(benches, mont_mul_benchmarks);
criterion_main!(benches);

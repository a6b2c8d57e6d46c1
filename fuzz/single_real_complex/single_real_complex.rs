#![no_main]

use fourier_engine::{dft_direct, fft_fast, lift_real};
use libfuzzer_sys::fuzz_target;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    log2: u8,
    re: f64,
}

fuzz_target!(|data: Target| {
    if !data.re.is_finite() || data.re.abs() > 10000. {
        return;
    }
    let size = 1usize << (data.log2 % 10);
    let samples = (0..size)
        .map(|i| data.re + i as f64 * 0.1)
        .collect::<Vec<_>>();
    let fast = fft_fast(&lift_real(&samples)).unwrap();
    let reference = dft_direct(&samples).unwrap();
    let scale = reference.iter().map(|z| z.norm()).fold(1.0, f64::max);
    for (k, (a, b)) in fast.iter().zip(reference.iter()).enumerate() {
        assert!((a - b).norm() <= 1e-9 * scale, "bin {k}: {a} != {b}");
    }
    for k in 1..size {
        assert!((fast[size - k] - fast[k].conj()).norm() <= 1e-9 * scale);
    }
});

#![no_main]

use fourier_engine::Fourier;
use libfuzzer_sys::fuzz_target;
use num_complex::Complex;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    forward: bool,
    log2: u8,
    re: f32,
    im: f32,
}

fuzz_target!(|data: Target| {
    let size = 1usize << (data.log2 % 15);
    let executor = if data.forward {
        Fourier::make_forward_fft_f32(size).unwrap()
    } else {
        Fourier::make_inverse_fft_f32(size).unwrap()
    };
    let mut chunk = vec![Complex::new(data.re, data.im); size];
    executor.execute(&mut chunk).unwrap();
    let mut test_target = vec![Complex::new(data.re, data.im); size];
    executor
        .execute_out_of_place(&chunk, &mut test_target)
        .unwrap();
});

#![no_main]

use fourier_engine::{FftDirection, FftOptions, FourierError, LengthPolicy, transform};
use libfuzzer_sys::fuzz_target;
use num_complex::Complex;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    forward: bool,
    policy: u8,
    threads: u8,
    size: u16,
    re: f64,
    im: f64,
}

fuzz_target!(|data: Target| {
    if data.size > 4100 {
        return;
    }
    let policy = match data.policy % 3 {
        0 => LengthPolicy::Reject,
        1 => LengthPolicy::ZeroPad,
        _ => LengthPolicy::DirectFallback,
    };
    let options = FftOptions::default()
        .with_length_policy(policy)
        .with_thread_count(data.threads as usize % 5 + 1)
        .with_parallel_threshold(256);
    let direction = if data.forward {
        FftDirection::Forward
    } else {
        FftDirection::Inverse
    };
    let n = data.size as usize;
    let chunk = (0..n)
        .map(|i| Complex::new(data.re + i as f64, data.im - i as f64))
        .collect::<Vec<_>>();

    match transform(&chunk, direction, &options) {
        Ok(spectrum) => {
            assert_eq!(spectrum.signal_length(), n);
            assert!(spectrum.len() >= n);
        }
        Err(FourierError::InvalidLength(len)) => {
            assert_eq!(policy, LengthPolicy::Reject);
            assert_eq!(len, n);
        }
        Err(FourierError::NonFiniteInput(_)) | Err(FourierError::NumericOverflow(_)) => {
            assert!(
                !data.re.is_finite()
                    || !data.im.is_finite()
                    || data.re.abs() > 1e300
                    || data.im.abs() > 1e300
            );
        }
        Err(err) => panic!("unexpected error {err} for {data:?}"),
    }
});

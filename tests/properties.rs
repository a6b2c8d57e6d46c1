/*
 * // Copyright (c) Radzivon Bartoshyk 6/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use fourier_engine::{
    Complex, FftDirection, FftOptions, FourierError, LengthPolicy, dft_direct, fft_fast, ifft_fast,
    lift_real, transform,
};
use proptest::prelude::*;

fn complex_signal(max_log2: u32) -> impl Strategy<Value = Vec<Complex<f64>>> {
    (0..=max_log2).prop_flat_map(|log2| {
        prop::collection::vec(
            (-1.0f64..1.0, -1.0f64..1.0).prop_map(|(re, im)| Complex::new(re, im)),
            1usize << log2,
        )
    })
}

fn real_signal(max_log2: u32) -> impl Strategy<Value = Vec<f64>> {
    (0..=max_log2).prop_flat_map(|log2| prop::collection::vec(-100.0f64..100.0, 1usize << log2))
}

fn max_norm(data: &[Complex<f64>]) -> f64 {
    data.iter().map(|z| z.norm()).fold(1.0, f64::max)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_fast_agrees_with_reference(signal in complex_signal(10)) {
        let fast = fft_fast(&signal).unwrap();
        let reference = dft_direct(&signal).unwrap();
        let scale = max_norm(&reference);
        prop_assert_eq!(fast.len(), signal.len());
        for (k, (a, b)) in fast.iter().zip(reference.iter()).enumerate() {
            prop_assert!((a - b).norm() <= 1e-9 * scale, "bin {}: {} != {}", k, a, b);
        }
    }

    #[test]
    fn prop_linearity(
        pair in (0u32..=8).prop_flat_map(|log2| {
            let n = 1usize << log2;
            (
                prop::collection::vec((-1.0f64..1.0, -1.0f64..1.0), n),
                prop::collection::vec((-1.0f64..1.0, -1.0f64..1.0), n),
            )
        }),
        a in -4.0f64..4.0,
        b in -4.0f64..4.0,
    ) {
        let x = pair.0.iter().map(|&(re, im)| Complex::new(re, im)).collect::<Vec<_>>();
        let y = pair.1.iter().map(|&(re, im)| Complex::new(re, im)).collect::<Vec<_>>();
        let combined = x
            .iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| xi * a + yi * b)
            .collect::<Vec<_>>();
        let lhs = fft_fast(&combined).unwrap();
        let fx = fft_fast(&x).unwrap();
        let fy = fft_fast(&y).unwrap();
        let scale = max_norm(&lhs);
        for k in 0..lhs.len() {
            let rhs = fx[k] * a + fy[k] * b;
            prop_assert!((lhs[k] - rhs).norm() <= 1e-10 * scale, "bin {}", k);
        }
    }

    #[test]
    fn prop_parseval(signal in complex_signal(10)) {
        let spectrum = fft_fast(&signal).unwrap();
        let time_energy: f64 = signal.iter().map(|z| z.norm_sqr()).sum();
        let freq_energy: f64 = spectrum.iter().map(|z| z.norm_sqr()).sum();
        let expected = time_energy * signal.len() as f64;
        prop_assert!(
            (freq_energy - expected).abs() <= 1e-9 * expected.max(1.0),
            "{} != {}", freq_energy, expected
        );
    }

    #[test]
    fn prop_real_input_is_conjugate_symmetric(samples in real_signal(10)) {
        let spectrum = fft_fast(&lift_real(&samples)).unwrap();
        let n = spectrum.len();
        let scale = max_norm(&spectrum);
        for k in 1..n {
            prop_assert!(
                (spectrum[n - k] - spectrum[k].conj()).norm() <= 1e-9 * scale,
                "bin {} does not mirror bin {}", n - k, k
            );
        }
    }

    #[test]
    fn prop_roundtrip(signal in complex_signal(10)) {
        let restored = ifft_fast(&fft_fast(&signal).unwrap()).unwrap();
        for (a, b) in restored.iter().zip(signal.iter()) {
            prop_assert!((a - b).norm() <= 1e-12);
        }
    }

    #[test]
    fn prop_policies_for_arbitrary_lengths(samples in prop::collection::vec(-1.0f64..1.0, 0..200)) {
        let signal = lift_real(&samples);
        let n = signal.len();
        let rejected = fft_fast(&signal);
        if n <= 1 || n.is_power_of_two() {
            prop_assert_eq!(rejected.unwrap().len(), n);
        } else {
            prop_assert_eq!(rejected, Err(FourierError::InvalidLength(n)));
        }

        let padded = transform(
            &signal,
            FftDirection::Forward,
            &FftOptions::default().with_length_policy(LengthPolicy::ZeroPad),
        )
        .unwrap();
        prop_assert_eq!(padded.signal_length(), n);
        prop_assert_eq!(padded.len(), if n <= 1 { n } else { n.next_power_of_two() });

        let fallback = transform(
            &signal,
            FftDirection::Forward,
            &FftOptions::default().with_length_policy(LengthPolicy::DirectFallback),
        )
        .unwrap();
        let reference = dft_direct(&samples).unwrap();
        prop_assert_eq!(fallback.len(), n);
        let scale = max_norm(&reference);
        for (a, b) in fallback.bins().iter().zip(reference.iter()) {
            prop_assert!((a - b).norm() <= 1e-9 * scale);
        }
    }
}

#[test]
fn parallel_transform_matches_reference() {
    let signal = (0..8192)
        .map(|i| Complex::new((i as f64 * 0.01).sin(), (i as f64 * 0.003).cos()))
        .collect::<Vec<_>>();
    let options = FftOptions::default().with_thread_count(4);
    let parallel = transform(&signal, FftDirection::Forward, &options).unwrap();
    let sequential = fft_fast(&signal).unwrap();
    let scale = max_norm(&sequential);
    for (a, b) in parallel.bins().iter().zip(sequential.iter()) {
        assert!((a - b).norm() <= 1e-12 * scale);
    }
}

#[test]
fn sine_peak_lands_in_expected_bin() {
    let sample_rate = 8000.0;
    let samples = (0..1024)
        .map(|i| (2.0 * std::f64::consts::PI * 1000.0 * i as f64 / sample_rate).sin())
        .collect::<Vec<_>>();
    let spectrum = transform(
        &lift_real(&samples),
        FftDirection::Forward,
        &FftOptions::default(),
    )
    .unwrap();
    let peak = spectrum.peak_bin().unwrap();
    assert_eq!(peak, 128);
    assert!((spectrum.bin_frequency(peak, sample_rate).unwrap() - 1000.0).abs() < 1e-9);
}

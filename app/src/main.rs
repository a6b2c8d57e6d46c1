use fourier_engine::{FftDirection, FftOptions, LengthPolicy, lift_real, transform};
use rand::Rng;
use rustfft::FftPlanner;
use rustfft::num_complex::Complex;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const SAMPLE_RATE: f64 = 44100.0;

/// Two tones plus a little noise, `len` samples long.
fn synth_signal(len: usize, tones: &[(f64, f64)]) -> Vec<f64> {
    let mut rng = rand::rng();
    (0..len)
        .map(|i| {
            let t = i as f64 / SAMPLE_RATE;
            tones
                .iter()
                .map(|&(freq, amp)| amp * (2.0 * std::f64::consts::PI * freq * t).sin())
                .sum::<f64>()
                + rng.random_range(-0.01..0.01)
        })
        .collect()
}

fn compare_with_rustfft(signal: &[Complex<f64>], ours: &[Complex<f64>]) -> f64 {
    let mut reference = signal.to_vec();
    FftPlanner::new()
        .plan_fft_forward(reference.len())
        .process(&mut reference);
    ours.iter()
        .zip(reference.iter())
        .map(|(a, b)| (a - b).norm())
        .fold(0.0, f64::max)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tones = [(440.0, 1.0), (1250.0, 0.5)];

    for (len, policy) in [
        (1 << 16, LengthPolicy::Reject),
        (44100, LengthPolicy::ZeroPad),
        (4410, LengthPolicy::DirectFallback),
    ] {
        let samples = synth_signal(len, &tones);
        let signal = lift_real(&samples);
        let options = FftOptions::default()
            .with_length_policy(policy)
            .with_thread_count(std::thread::available_parallelism().map_or(1, |x| x.get()));

        let start = Instant::now();
        let spectrum = match transform(&signal, FftDirection::Forward, &options) {
            Ok(spectrum) => spectrum,
            Err(err) => {
                warn!("transform of {len} samples failed: {err}");
                continue;
            }
        };
        let elapsed = start.elapsed();

        let peak = spectrum.peak_bin().unwrap_or(0);
        let peak_frequency = spectrum.bin_frequency(peak, SAMPLE_RATE).unwrap_or(0.0);
        info!(
            samples = len,
            bins = spectrum.len(),
            padded = spectrum.is_padded(),
            strategy = ?spectrum.strategy(),
            "peak at {peak_frequency:.1} Hz in {elapsed:?}"
        );

        if !spectrum.is_padded() {
            let max_error = compare_with_rustfft(&signal, spectrum.bins());
            info!("max deviation from rustfft: {max_error:e}");
        }
    }
}

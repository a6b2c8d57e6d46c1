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
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use fourier_engine::{FftDirection, FftOptions, Fourier};
use num_complex::Complex;
use rand::Rng;
use rustfft::FftPlanner;

fn random_input(n: usize) -> Vec<Complex<f64>> {
    let mut input = vec![Complex::<f64>::default(); n];
    for z in input.iter_mut() {
        *z = Complex {
            re: rand::rng().random(),
            im: rand::rng().random(),
        };
    }
    input
}

pub fn bench_power_averages(c: &mut Criterion) {
    c.bench_function("rustfft powers of two", |b| {
        b.iter_batched(
            || {
                (1..=14)
                    .map(|log2| {
                        let n = 1usize << log2;
                        let input: Vec<Complex<f64>> =
                            (0..n).map(|i| Complex::new(i as f64, 0.0)).collect();
                        let fft = FftPlanner::<f64>::new().plan_fft_forward(n);
                        (input, fft)
                    })
                    .collect::<Vec<_>>()
            },
            |plans_and_inputs| {
                for (input, fft) in plans_and_inputs.iter() {
                    let mut c = input.to_vec();
                    fft.process(&mut c);
                }
            },
            BatchSize::LargeInput,
        );
    });

    c.bench_function("fourier powers of two", |b| {
        b.iter_batched(
            || {
                (1..=14)
                    .map(|log2| {
                        let n = 1usize << log2;
                        let input: Vec<Complex<f64>> =
                            (0..n).map(|i| Complex::new(i as f64, 0.0)).collect();
                        let fft = Fourier::make_forward_fft_f64(n).unwrap();
                        (input, fft)
                    })
                    .collect::<Vec<_>>()
            },
            |plans_and_inputs| {
                for (i, (input, fft)) in plans_and_inputs.iter().enumerate() {
                    let mut c = input.to_vec();
                    if let Err(err) = fft.execute(&mut c) {
                        panic!("err: {err} on {i}");
                    }
                }
            },
            BatchSize::LargeInput,
        );
    });
}

fn check_power_group(c: &mut Criterion, n: usize, group: &str) {
    let input_power = random_input(n);

    c.bench_function(format!("rustfft {group}").as_str(), |b| {
        let plan = FftPlanner::new().plan_fft_forward(input_power.len());
        let mut working = input_power.to_vec();
        b.iter(|| {
            plan.process(&mut working);
        })
    });

    c.bench_function(format!("fourier {group}").as_str(), |b| {
        let plan = Fourier::make_forward_fft_f64(input_power.len()).unwrap();
        let mut working = input_power.to_vec();
        b.iter(|| {
            plan.execute(&mut working).unwrap();
        })
    });

    c.bench_function(format!("fourier {group}s").as_str(), |b| {
        let plan = Fourier::make_forward_fft_f32(input_power.len()).unwrap();
        let mut working = input_power
            .iter()
            .map(|&x| Complex::new(x.re as f32, x.im as f32))
            .collect::<Vec<_>>();
        b.iter(|| {
            plan.execute(&mut working).unwrap();
        })
    });
}

fn check_parallel_group(c: &mut Criterion, n: usize, threads: usize) {
    let input = random_input(n);
    let options = FftOptions::default()
        .with_thread_count(threads)
        .with_parallel_threshold(1);

    c.bench_function(format!("fourier {n} x{threads} threads").as_str(), |b| {
        let plan = Fourier::make_fft::<f64>(n, FftDirection::Forward, &options).unwrap();
        let mut working = input.to_vec();
        b.iter(|| {
            plan.execute(&mut working).unwrap();
        })
    });
}

fn check_direct(c: &mut Criterion, n: usize) {
    let input = random_input(n);
    c.bench_function(format!("fourier direct {n}").as_str(), |b| {
        let plan = Fourier::make_dft::<f64>(n, FftDirection::Forward).unwrap();
        let mut working = input.to_vec();
        b.iter(|| {
            plan.execute(&mut working).unwrap();
        })
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_power_averages(c);

    check_power_group(c, 1024, "power1024");
    check_power_group(c, 1 << 16, "power65536");

    for threads in [1, 2, 4] {
        check_parallel_group(c, 1 << 18, threads);
    }

    check_direct(c, 441);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

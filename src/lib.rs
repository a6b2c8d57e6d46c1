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
#![forbid(unsafe_code)]
//! Discrete Fourier transforms of real and complex sequences.
//!
//! Two families of executors are planned by [Fourier]: the direct `O(N²)`
//! summation, which handles every length and serves as the reference, and
//! radix-2 decimation-in-time for power-of-two lengths, optionally fanned out
//! on a thread pool. [dft_direct], [fft_fast], [ifft_fast] and [transform] are
//! the one-shot entry points.
//!
//! Executors are unnormalized: a forward then inverse execution scales the
//! signal by `N`. The one-shot inverse calls apply the `1/N` factor.
mod butterflies;
mod complex_fma;
mod dft;
mod err;
mod options;
mod parallel;
mod radix2;
mod spectrum;
mod traits;
mod transform;
mod util;

pub use err::FourierError;
pub use num_complex::{Complex, Complex32, Complex64};
pub use options::{FftOptions, LengthPolicy};
pub use spectrum::{Spectrum, time_axis};
pub use traits::FftSample;
pub use transform::{dft_direct, fft_fast, ifft_fast, lift_real, transform};

use crate::butterflies::{Butterfly2, Identity};
use crate::dft::Dft;
use crate::parallel::ParallelRadix2;
use crate::radix2::Radix2;
use num_traits::AsPrimitive;
use tracing::debug;

pub trait FftExecutor<T: Copy> {
    /// Transforms `in_place`, which must hold exactly [FftExecutor::length] samples.
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), FourierError>;

    /// Transforms `src` into `dst`, leaving `src` untouched.
    fn execute_out_of_place(
        &self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
    ) -> Result<(), FourierError> {
        if src.len() != self.length() {
            return Err(FourierError::InvalidOutOfPlaceLength(
                self.length(),
                src.len(),
            ));
        }
        if dst.len() != self.length() {
            return Err(FourierError::InvalidOutOfPlaceLength(
                self.length(),
                dst.len(),
            ));
        }
        dst.copy_from_slice(src);
        self.execute(dst)
    }

    fn direction(&self) -> FftDirection;

    fn length(&self) -> usize;

    fn strategy(&self) -> FftStrategy;
}

/// Sign of the transform exponent.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FftDirection {
    /// `exp(-2πi·k·n/N)`
    Forward,
    /// `exp(+2πi·k·n/N)`
    Inverse,
}

/// Algorithm a planned executor runs.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FftStrategy {
    /// Lengths 0 and 1.
    Identity,
    /// Hard-coded small butterfly.
    Butterfly,
    Radix2,
    ParallelRadix2,
    /// Direct summation.
    Direct,
}

pub struct Fourier {}

impl Fourier {
    fn strategy<T: FftSample>(
        n: usize,
        fft_direction: FftDirection,
        options: &FftOptions,
    ) -> Result<Box<dyn FftExecutor<T> + Send + Sync>, FourierError>
    where
        f64: AsPrimitive<T>,
    {
        options.validate()?;
        let executor: Box<dyn FftExecutor<T> + Send + Sync> = if n <= 1 {
            Box::new(Identity::new(n, fft_direction))
        } else if n == 2 {
            Box::new(Butterfly2::new(fft_direction))
        } else if n.is_power_of_two() {
            if options.parallel_for(n) {
                Box::new(ParallelRadix2::new(
                    n,
                    fft_direction,
                    options.thread_count,
                )?)
            } else {
                Box::new(Radix2::new(n, fft_direction)?)
            }
        } else {
            match options.length_policy {
                LengthPolicy::DirectFallback => Box::new(Dft::new(n, fft_direction)?),
                // Padding changes the length, callers plan for the padded size instead.
                LengthPolicy::Reject | LengthPolicy::ZeroPad => {
                    return Err(FourierError::InvalidLength(n));
                }
            }
        };
        debug!(
            length = n,
            direction = ?fft_direction,
            strategy = ?executor.strategy(),
            threads = options.thread_count,
            "planned transform"
        );
        Ok(executor)
    }

    /// Plans a transform of length `n` under `options`.
    pub fn make_fft<T: FftSample>(
        n: usize,
        fft_direction: FftDirection,
        options: &FftOptions,
    ) -> Result<Box<dyn FftExecutor<T> + Send + Sync>, FourierError>
    where
        f64: AsPrimitive<T>,
    {
        Fourier::strategy(n, fft_direction, options)
    }

    /// Plans the direct summation for any `n`, regardless of length.
    pub fn make_dft<T: FftSample>(
        n: usize,
        fft_direction: FftDirection,
    ) -> Result<Box<dyn FftExecutor<T> + Send + Sync>, FourierError>
    where
        f64: AsPrimitive<T>,
    {
        debug!(length = n, direction = ?fft_direction, "planned direct summation");
        Dft::new(n, fft_direction)
            .map(|x| Box::new(x) as Box<dyn FftExecutor<T> + Send + Sync>)
    }

    pub fn make_forward_fft_f32(
        n: usize,
    ) -> Result<Box<dyn FftExecutor<f32> + Send + Sync>, FourierError> {
        Fourier::strategy(n, FftDirection::Forward, &FftOptions::default())
    }

    pub fn make_forward_fft_f64(
        n: usize,
    ) -> Result<Box<dyn FftExecutor<f64> + Send + Sync>, FourierError> {
        Fourier::strategy(n, FftDirection::Forward, &FftOptions::default())
    }

    pub fn make_inverse_fft_f32(
        n: usize,
    ) -> Result<Box<dyn FftExecutor<f32> + Send + Sync>, FourierError> {
        Fourier::strategy(n, FftDirection::Inverse, &FftOptions::default())
    }

    pub fn make_inverse_fft_f64(
        n: usize,
    ) -> Result<Box<dyn FftExecutor<f64> + Send + Sync>, FourierError> {
        Fourier::strategy(n, FftDirection::Inverse, &FftOptions::default())
    }
}

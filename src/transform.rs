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
use crate::err::try_vec;
use crate::traits::FftSample;
use crate::util::first_non_finite;
use crate::{
    FftDirection, FftOptions, FftStrategy, Fourier, FourierError, LengthPolicy, Spectrum,
};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};
use tracing::{debug, trace};

/// Lifts real samples into complex ones with zero imaginary parts.
pub fn lift_real<T: FftSample>(samples: &[T]) -> Vec<Complex<T>> {
    samples.iter().map(|&re| Complex::new(re, T::zero())).collect()
}

/// Reference transform by direct summation, for real or complex samples of
/// any length. `O(N²)`; meant for verification and short odd-length inputs.
pub fn dft_direct<S: Copy + Into<Complex<f64>>>(
    samples: &[S],
) -> Result<Vec<Complex<f64>>, FourierError> {
    let mut data = try_vec![Complex::<f64>::zero(); samples.len()];
    for (dst, &src) in data.iter_mut().zip(samples.iter()) {
        *dst = src.into();
    }
    if let Some(index) = first_non_finite(&data) {
        return Err(FourierError::NonFiniteInput(index));
    }

    let executor = Fourier::make_dft::<f64>(data.len(), FftDirection::Forward)?;
    executor.execute(&mut data)?;

    if let Some(index) = first_non_finite(&data) {
        return Err(FourierError::NumericOverflow(index));
    }
    Ok(data)
}

/// Forward fast transform of a power-of-two length sequence.
///
/// Other lengths fail with [FourierError::InvalidLength]; use [transform] with
/// a [LengthPolicy] to pad or fall back instead.
pub fn fft_fast(samples: &[Complex<f64>]) -> Result<Vec<Complex<f64>>, FourierError> {
    transform(samples, FftDirection::Forward, &FftOptions::default()).map(Spectrum::into_bins)
}

/// Inverse of [fft_fast], normalized by `1/N`.
pub fn ifft_fast(spectrum: &[Complex<f64>]) -> Result<Vec<Complex<f64>>, FourierError> {
    transform(spectrum, FftDirection::Inverse, &FftOptions::default()).map(Spectrum::into_bins)
}

/// Plans and runs a single transform of `samples` under `options`.
///
/// Inverse transforms are normalized by `1/len()`. Under
/// [LengthPolicy::ZeroPad] the returned spectrum may be longer than the input.
pub fn transform<T: FftSample>(
    samples: &[Complex<T>],
    direction: FftDirection,
    options: &FftOptions,
) -> Result<Spectrum<T>, FourierError>
where
    f64: AsPrimitive<T>,
{
    options.validate()?;
    if options.check_finite {
        if let Some(index) = first_non_finite(samples) {
            return Err(FourierError::NonFiniteInput(index));
        }
    }

    let n = samples.len();
    let pad = n > 1 && !n.is_power_of_two() && options.length_policy == LengthPolicy::ZeroPad;
    let plan_length = if pad {
        let padded = n.next_power_of_two();
        debug!(
            length = n,
            padded, "zero padding changes bin spacing to sample_rate / {padded}"
        );
        padded
    } else {
        n
    };

    let executor = Fourier::make_fft::<T>(plan_length, direction, options)?;
    if executor.strategy() == FftStrategy::Direct {
        trace!(length = n, "direct summation serves non power-of-two length");
    }

    let mut data = try_vec![Complex::<T>::zero(); plan_length];
    data[..n].copy_from_slice(samples);
    executor.execute(&mut data)?;

    if direction == FftDirection::Inverse && plan_length > 1 {
        let scale: T = (1.0 / plan_length as f64).as_();
        for z in data.iter_mut() {
            *z = z.scale(scale);
        }
    }

    if options.check_finite {
        if let Some(index) = first_non_finite(&data) {
            return Err(FourierError::NumericOverflow(index));
        }
    }

    Ok(Spectrum::new(data, n, executor.strategy(), direction))
}

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
use crate::complex_fma::c_mul_add_fast;
use crate::err::try_vec;
use crate::traits::FftSample;
use crate::util::compute_twiddle;
use crate::{FftDirection, FftExecutor, FftStrategy, FourierError};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// Direct evaluation of the DFT sum, `O(N²)`.
///
/// Serves lengths the radix-2 path cannot, and acts as the reference the fast
/// executors are checked against. The twiddle for `(k, n)` is the table entry
/// at `k·n mod N`, so no angle is ever evaluated outside `[0, 2π)`.
pub(crate) struct Dft<T> {
    execution_length: usize,
    twiddles: Vec<Complex<T>>,
    direction: FftDirection,
}

impl<T: FftSample> Dft<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(size: usize, fft_direction: FftDirection) -> Result<Dft<T>, FourierError> {
        Ok(Dft {
            execution_length: size,
            twiddles: generate_twiddles_dft(size, fft_direction)?,
            direction: fft_direction,
        })
    }

    fn accumulate(&self, src: &[Complex<T>], dst: &mut [Complex<T>]) {
        for (k, dst) in dst.iter_mut().enumerate() {
            let mut sum = Complex::<T>::zero();
            let mut twiddle_idx = 0usize;
            for &sample in src.iter() {
                sum = c_mul_add_fast(sample, self.twiddles[twiddle_idx], sum);
                twiddle_idx += k;
                if twiddle_idx >= self.twiddles.len() {
                    twiddle_idx -= self.twiddles.len();
                }
            }
            *dst = sum;
        }
    }
}

pub(crate) fn generate_twiddles_dft<T: FftSample>(
    size: usize,
    fft_direction: FftDirection,
) -> Result<Vec<Complex<T>>, FourierError>
where
    f64: AsPrimitive<T>,
{
    let mut twiddles = try_vec![Complex::<T>::default(); size];
    for (k, dst) in twiddles.iter_mut().enumerate() {
        *dst = compute_twiddle(k, size, fft_direction);
    }
    Ok(twiddles)
}

impl<T: FftSample> FftExecutor<T> for Dft<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), FourierError> {
        if in_place.len() != self.execution_length {
            return Err(FourierError::InvalidInPlaceLength(
                self.execution_length,
                in_place.len(),
            ));
        }
        if self.execution_length <= 1 {
            return Ok(());
        }

        let mut output = try_vec![Complex::<T>::default(); self.execution_length];
        self.accumulate(in_place, &mut output);
        in_place.copy_from_slice(&output);
        Ok(())
    }

    fn execute_out_of_place(
        &self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
    ) -> Result<(), FourierError> {
        if src.len() != self.execution_length {
            return Err(FourierError::InvalidOutOfPlaceLength(
                self.execution_length,
                src.len(),
            ));
        }
        if dst.len() != self.execution_length {
            return Err(FourierError::InvalidOutOfPlaceLength(
                self.execution_length,
                dst.len(),
            ));
        }
        self.accumulate(src, dst);
        Ok(())
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    fn length(&self) -> usize {
        self.execution_length
    }

    fn strategy(&self) -> FftStrategy {
        FftStrategy::Direct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[Complex<f64>], expected: &[Complex<f64>], tol: f64) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, b)) in actual.iter().zip(expected.iter()).enumerate() {
            assert!(
                (a - b).norm() <= tol,
                "bin {i}: {a} != {b} (tolerance {tol})"
            );
        }
    }

    #[test]
    fn test_dft_alternating_signal() {
        let dft = Dft::new(4, FftDirection::Forward).unwrap();
        let mut data = [1.0, 0.0, -1.0, 0.0].map(|re| Complex::new(re, 0.0));
        dft.execute(&mut data).unwrap();
        let expected = [0.0, 2.0, 0.0, 2.0].map(|re| Complex::new(re, 0.0));
        assert_close(&data, &expected, 1e-12);
    }

    #[test]
    fn test_dft_impulse_is_flat() {
        let dft = Dft::new(7, FftDirection::Forward).unwrap();
        let mut data = vec![Complex::<f64>::zero(); 7];
        data[0] = Complex::new(2.5, -1.0);
        dft.execute(&mut data).unwrap();
        assert_close(&data, &[Complex::new(2.5, -1.0); 7], 1e-12);
    }

    #[test]
    fn test_dft_roundtrip_odd_sizes() {
        for size in [3usize, 5, 6, 9, 12, 17] {
            let forward = Dft::new(size, FftDirection::Forward).unwrap();
            let inverse = Dft::new(size, FftDirection::Inverse).unwrap();
            let src = (0..size)
                .map(|i| Complex::new(i as f64 * 0.5 - 1.0, (i % 3) as f64))
                .collect::<Vec<_>>();
            let mut data = src.clone();
            forward.execute(&mut data).unwrap();
            inverse.execute(&mut data).unwrap();
            let scaled = data
                .iter()
                .map(|&z| z * (1.0 / size as f64))
                .collect::<Vec<_>>();
            assert_close(&scaled, &src, 1e-12);
        }
    }

    #[test]
    fn test_dft_degenerate_lengths() {
        let empty = Dft::<f64>::new(0, FftDirection::Forward).unwrap();
        empty.execute(&mut []).unwrap();
        let single = Dft::new(1, FftDirection::Forward).unwrap();
        let mut data = [Complex::new(4.0f64, -3.0)];
        single.execute(&mut data).unwrap();
        assert_eq!(data, [Complex::new(4.0, -3.0)]);
    }

    #[test]
    fn test_dft_rejects_wrong_length() {
        let dft = Dft::<f64>::new(4, FftDirection::Forward).unwrap();
        let mut data = vec![Complex::zero(); 3];
        assert_eq!(
            dft.execute(&mut data),
            Err(FourierError::InvalidInPlaceLength(4, 3))
        );
        let mut dst = vec![Complex::zero(); 5];
        assert_eq!(
            dft.execute_out_of_place(&[Complex::zero(); 4], &mut dst),
            Err(FourierError::InvalidOutOfPlaceLength(4, 5))
        );
    }
}

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
use crate::complex_fma::c_butterfly;
use crate::traits::FftSample;
use crate::util::{bit_reverse_indices, permute_inplace, radix2_stage_twiddles};
use crate::{FftDirection, FftExecutor, FftStrategy, FourierError};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Iterative radix-2 decimation-in-time: bit reversal permutation followed by
/// `log2(N)` in-place butterfly passes.
///
/// Rounding error grows with the number of passes, roughly `O(log N · ε)`
/// relative to the spectrum norm, so `f64` keeps about 13 significant digits
/// at `N = 2^20`.
pub(crate) struct Radix2<T> {
    twiddles: Vec<Complex<T>>,
    permutations: Vec<usize>,
    execution_length: usize,
    direction: FftDirection,
}

impl<T: FftSample> Radix2<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(size: usize, fft_direction: FftDirection) -> Result<Radix2<T>, FourierError> {
        if !size.is_power_of_two() {
            return Err(FourierError::InvalidLength(size));
        }

        let twiddles = radix2_stage_twiddles(size, fft_direction)?;

        // Bit-reversal permutation
        let rev = bit_reverse_indices(size)?;

        Ok(Radix2 {
            permutations: rev,
            execution_length: size,
            twiddles,
            direction: fft_direction,
        })
    }
}

/// Runs the butterfly passes `len = first_len, 2·first_len, .., data.len()`
/// over data whose chunks of `first_len / 2` are already transformed.
/// `twiddles` must start at the `first_len` stage.
pub(crate) fn radix2_passes<T: FftSample>(
    data: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    first_len: usize,
) {
    let mut len = first_len;
    let mut m_twiddles = twiddles;
    while len <= data.len() {
        let half = len / 2;
        let (stage, rest) = m_twiddles.split_at(half);
        for chunk in data.chunks_exact_mut(len) {
            let (evens, odds) = chunk.split_at_mut(half);
            for ((u, v), &tw) in evens.iter_mut().zip(odds.iter_mut()).zip(stage.iter()) {
                let (top, bottom) = c_butterfly(*u, *v, tw);
                *u = top;
                *v = bottom;
            }
        }
        len *= 2;
        m_twiddles = rest;
    }
}

impl<T: FftSample> FftExecutor<T> for Radix2<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), FourierError> {
        if self.execution_length != in_place.len() {
            return Err(FourierError::InvalidInPlaceLength(
                self.execution_length,
                in_place.len(),
            ));
        }

        permute_inplace(in_place, &self.permutations);
        radix2_passes(in_place, &self.twiddles, 2);
        Ok(())
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    fn length(&self) -> usize {
        self.execution_length
    }

    fn strategy(&self) -> FftStrategy {
        FftStrategy::Radix2
    }
}

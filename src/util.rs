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
use crate::traits::{FftSample, FftTrigonometry};
use crate::{FftDirection, FourierError};
use num_complex::Complex;
use num_traits::{AsPrimitive, Float};

/// `exp(∓2πi·index/fft_len)`, the sign fixed by `direction`.
pub(crate) fn compute_twiddle<T: Float + FftTrigonometry + 'static>(
    index: usize,
    fft_len: usize,
    direction: FftDirection,
) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    let angle = (-2. * index as f64 / fft_len as f64).as_();
    let (v_sin, v_cos) = angle.sincos_pi();

    let result = Complex {
        re: v_cos,
        im: v_sin,
    };

    match direction {
        FftDirection::Forward => result,
        FftDirection::Inverse => result.conj(),
    }
}

/// Twiddles of every butterfly stage of a radix-2 transform of `size`,
/// stage `len = 2, 4, .., size` stored back to back (`len / 2` each).
pub(crate) fn radix2_stage_twiddles<T: FftSample>(
    size: usize,
    direction: FftDirection,
) -> Result<Vec<Complex<T>>, FourierError>
where
    f64: AsPrimitive<T>,
{
    let count = size.saturating_sub(1);
    let mut twiddles = Vec::new();
    twiddles
        .try_reserve_exact(count)
        .map_err(|_| FourierError::OutOfMemory(count))?;

    let mut len = 2;
    while len <= size {
        for k in 0..len / 2 {
            twiddles.push(compute_twiddle(k, len, direction));
        }
        len *= 2;
    }
    Ok(twiddles)
}

/// Bit reversal permutation
pub(crate) fn bit_reverse_indices(n: usize) -> Result<Vec<usize>, FourierError> {
    if n <= 1 {
        return Ok(try_vec![0usize; n]);
    }
    let bits = n.trailing_zeros();
    let mut indices = try_vec![0usize; n];
    for (i, dst) in indices.iter_mut().enumerate() {
        *dst = i.reverse_bits() >> (usize::BITS - bits);
    }
    Ok(indices)
}

pub(crate) fn permute_inplace<T: Copy>(table: &mut [T], lut: &[usize]) {
    for (i, &j) in lut.iter().enumerate() {
        if i < j {
            table.swap(i, j);
        }
    }
}

/// Index of the first coefficient with a NaN or infinite component.
pub(crate) fn first_non_finite<T: Float>(data: &[Complex<T>]) -> Option<usize> {
    data.iter()
        .position(|z| !z.re.is_finite() || !z.im.is_finite())
}

/// `ceil(log2(n))` for `n >= 1`.
pub(crate) fn ceil_log2(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}

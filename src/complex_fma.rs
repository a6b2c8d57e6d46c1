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
use num_complex::Complex;
use num_traits::{MulAdd, Num};
use std::ops::{Mul, Neg};

/// `a * b` as `(ac - bd, ad + bc)`, each component with one fused multiply-add.
#[inline(always)]
pub(crate) fn c_mul_fast<T>(a: Complex<T>, b: Complex<T>) -> Complex<T>
where
    T: Copy + Mul<T, Output = T> + Neg<Output = T> + MulAdd<T, Output = T>,
{
    Complex {
        re: a.re.mul_add(b.re, -(a.im * b.im)),
        im: a.re.mul_add(b.im, a.im * b.re),
    }
}

/// `acc + a * b`
#[inline(always)]
pub(crate) fn c_mul_add_fast<T>(a: Complex<T>, b: Complex<T>, acc: Complex<T>) -> Complex<T>
where
    T: Copy + Mul<T, Output = T> + Neg<Output = T> + MulAdd<T, Output = T>,
{
    Complex {
        re: a.re.mul_add(b.re, (-a.im).mul_add(b.im, acc.re)),
        im: a.re.mul_add(b.im, a.im.mul_add(b.re, acc.im)),
    }
}

/// Radix-2 butterfly over a twiddled odd term: `(u + w·v, u - w·v)`.
#[inline(always)]
pub(crate) fn c_butterfly<T>(
    u: Complex<T>,
    v: Complex<T>,
    w: Complex<T>,
) -> (Complex<T>, Complex<T>)
where
    T: Copy + Num + Neg<Output = T> + MulAdd<T, Output = T>,
{
    let t = c_mul_fast(w, v);
    (u + t, u - t)
}

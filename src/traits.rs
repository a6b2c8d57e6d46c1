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
use num_traits::{AsPrimitive, Float, MulAdd};
use std::fmt::Debug;

/// Evaluates `sin(πx)` and `cos(πx)` together.
pub trait FftTrigonometry {
    fn sincos_pi(self) -> (Self, Self)
    where
        Self: Sized;
}

impl FftTrigonometry for f32 {
    #[inline]
    fn sincos_pi(self) -> (Self, Self) {
        // Evaluated in double precision, single precision twiddles lose ~1 ulp otherwise.
        let (s, c) = (self as f64 * std::f64::consts::PI).sin_cos();
        (s as f32, c as f32)
    }
}

impl FftTrigonometry for f64 {
    #[inline]
    fn sincos_pi(self) -> (Self, Self) {
        // Exact quadrant values keep twiddles like -i from picking up 6e-17 residue.
        let doubled = self * 2.0;
        if doubled == doubled.round() {
            return match doubled.rem_euclid(4.0) as u8 {
                0 => (0.0, 1.0),
                1 => (1.0, 0.0),
                2 => (0.0, -1.0),
                _ => (-1.0, 0.0),
            };
        }
        (self * std::f64::consts::PI).sin_cos()
    }
}

/// Floating point precision the engine can run at.
///
/// Implemented for `f32` and `f64`. All arithmetic of a plan happens in the
/// sample type, so `f64` is the precision of choice for analysis work.
pub trait FftSample:
    Float
    + FftTrigonometry
    + MulAdd<Self, Output = Self>
    + Default
    + Debug
    + Send
    + Sync
    + 'static
    + AsPrimitive<f64>
{
}

impl FftSample for f32 {}

impl FftSample for f64 {}

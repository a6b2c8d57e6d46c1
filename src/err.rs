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
use std::error::Error;
use std::fmt::Formatter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FourierError {
    OutOfMemory(usize),
    InvalidLength(usize),
    InvalidInPlaceLength(usize, usize),
    InvalidOutOfPlaceLength(usize, usize),
    NonFiniteInput(usize),
    NumericOverflow(usize),
    InvalidThreadCount(usize),
    InvalidSampleRate,
}

impl Error for FourierError {}

impl std::fmt::Display for FourierError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FourierError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} elements to vector"))
            }
            FourierError::InvalidLength(length) => f.write_fmt(format_args!(
                "Length {length} is not a power of two and no fallback policy is configured"
            )),
            FourierError::InvalidInPlaceLength(s0, s1) => f.write_fmt(format_args!(
                "In-place length expected to be {s0}, but it was {s1}"
            )),
            FourierError::InvalidOutOfPlaceLength(s0, s1) => f.write_fmt(format_args!(
                "Out-of-place length expected to be {s0}, but it was {s1}"
            )),
            FourierError::NonFiniteInput(index) => f.write_fmt(format_args!(
                "Sample at index {index} is not finite"
            )),
            FourierError::NumericOverflow(index) => f.write_fmt(format_args!(
                "Coefficient at index {index} overflowed to a non-finite value"
            )),
            FourierError::InvalidThreadCount(count) => {
                f.write_fmt(format_args!("Thread count must be at least 1, got {count}"))
            }
            FourierError::InvalidSampleRate => {
                f.write_str("Sample rate must be finite and greater than zero")
            }
        }
    }
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::FourierError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;

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
use crate::{FftDirection, FftExecutor, FftStrategy, FourierError};
use num_complex::Complex;
use num_traits::Num;
use std::marker::PhantomData;

/// Transform of length 0 or 1: the sequence is its own spectrum.
pub(crate) struct Identity<T> {
    pub(crate) phantom_data: PhantomData<T>,
    pub(crate) execution_length: usize,
    pub(crate) direction: FftDirection,
}

impl<T> Identity<T> {
    pub(crate) fn new(size: usize, fft_direction: FftDirection) -> Self {
        debug_assert!(size <= 1);
        Self {
            phantom_data: PhantomData,
            execution_length: size,
            direction: fft_direction,
        }
    }
}

impl<T: Copy> FftExecutor<T> for Identity<T> {
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), FourierError> {
        if in_place.len() != self.execution_length {
            return Err(FourierError::InvalidInPlaceLength(
                self.execution_length,
                in_place.len(),
            ));
        }
        Ok(())
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    fn length(&self) -> usize {
        self.execution_length
    }

    fn strategy(&self) -> FftStrategy {
        FftStrategy::Identity
    }
}

pub(crate) struct Butterfly2<T> {
    pub(crate) phantom_data: PhantomData<T>,
    pub(crate) direction: FftDirection,
}

impl<T> Butterfly2<T> {
    pub(crate) fn new(fft_direction: FftDirection) -> Self {
        Self {
            direction: fft_direction,
            phantom_data: PhantomData,
        }
    }
}

impl<T: Copy + Num> FftExecutor<T> for Butterfly2<T> {
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), FourierError> {
        if in_place.len() != 2 {
            return Err(FourierError::InvalidInPlaceLength(2, in_place.len()));
        }

        let u0 = in_place[0];
        let u1 = in_place[1];
        // Both twiddles of a 2-point transform are ±1, direction does not matter.
        in_place[0] = u0 + u1;
        in_place[1] = u0 - u1;
        Ok(())
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    fn length(&self) -> usize {
        2
    }

    fn strategy(&self) -> FftStrategy {
        FftStrategy::Butterfly
    }
}

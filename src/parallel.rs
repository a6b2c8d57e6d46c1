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
use crate::radix2::{Radix2, radix2_passes};
use crate::traits::FftSample;
use crate::util::{bit_reverse_indices, ceil_log2, radix2_stage_twiddles};
use crate::{FftDirection, FftExecutor, FftStrategy, FourierError};
use novtb::{ParallelZonedIterator, TbSliceMut};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Radix-2 decimation-in-time with the top recursion levels fanned out on a
/// thread pool.
///
/// The first `depth` levels of the even/odd split are flattened: the input is
/// decimated into `2^depth` strided sub-sequences, stored in recursion order,
/// which share no state and are transformed as independent pool tasks. After
/// the join the remaining `depth` butterfly passes combine them sequentially.
pub(crate) struct ParallelRadix2<T> {
    leaf: Radix2<T>,
    twiddles: Vec<Complex<T>>,
    residues: Vec<usize>,
    execution_length: usize,
    blocks: usize,
    thread_count: usize,
    direction: FftDirection,
}

impl<T: FftSample> ParallelRadix2<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(
        size: usize,
        fft_direction: FftDirection,
        thread_count: usize,
    ) -> Result<ParallelRadix2<T>, FourierError> {
        if !size.is_power_of_two() {
            return Err(FourierError::InvalidLength(size));
        }
        if thread_count == 0 {
            return Err(FourierError::InvalidThreadCount(thread_count));
        }

        let depth = ceil_log2(thread_count).min(size.trailing_zeros());
        let blocks = 1usize << depth;

        Ok(ParallelRadix2 {
            leaf: Radix2::new(size / blocks, fft_direction)?,
            twiddles: radix2_stage_twiddles(size, fft_direction)?,
            // Block `p` of the recursion order holds residue `bitrev(p)` mod `blocks`.
            residues: bit_reverse_indices(blocks)?,
            execution_length: size,
            blocks,
            thread_count,
            direction: fft_direction,
        })
    }
}

impl<T: FftSample> FftExecutor<T> for ParallelRadix2<T>
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

        let sub_length = self.execution_length / self.blocks;
        let mut scratch = try_vec![Complex::<T>::default(); self.execution_length];

        for (block, &residue) in scratch
            .chunks_exact_mut(sub_length)
            .zip(self.residues.iter())
        {
            for (dst, src) in block
                .iter_mut()
                .zip(in_place.iter().skip(residue).step_by(self.blocks))
            {
                *dst = *src;
            }
        }

        if self.thread_count > 1 && self.blocks > 1 {
            let pool = novtb::ThreadPool::new(self.thread_count);
            scratch
                .tb_par_chunks_exact_mut(sub_length)
                .for_each(&pool, |block| {
                    // Blocks are exactly `sub_length` long, the leaf cannot reject them.
                    let executed = self.leaf.execute(block);
                    debug_assert!(executed.is_ok());
                });
        } else {
            for block in scratch.chunks_exact_mut(sub_length) {
                self.leaf.execute(block)?;
            }
        }

        in_place.copy_from_slice(&scratch);
        radix2_passes(in_place, &self.twiddles[sub_length - 1..], 2 * sub_length);
        Ok(())
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    fn length(&self) -> usize {
        self.execution_length
    }

    fn strategy(&self) -> FftStrategy {
        FftStrategy::ParallelRadix2
    }
}

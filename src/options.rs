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
use crate::FourierError;

/// What a fast transform does with a length that is not a power of two.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum LengthPolicy {
    /// Fail with [FourierError::InvalidLength].
    #[default]
    Reject,
    /// Append zeros up to the next power of two. The spectrum gets more,
    /// narrower bins, see [crate::Spectrum::is_padded].
    ZeroPad,
    /// Serve the call with the direct `O(N²)` summation.
    DirectFallback,
}

/// Configuration shared by planning and the high-level transform calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FftOptions {
    pub length_policy: LengthPolicy,
    /// Worker threads for the parallel fast path, `1` keeps everything on the caller's thread.
    pub thread_count: usize,
    /// Smallest length that is fanned out on the thread pool.
    pub parallel_threshold: usize,
    /// Reject NaN/Inf samples and report non-finite coefficients.
    pub check_finite: bool,
}

pub(crate) const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

impl Default for FftOptions {
    fn default() -> Self {
        Self {
            length_policy: LengthPolicy::Reject,
            thread_count: 1,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            check_finite: true,
        }
    }
}

impl FftOptions {
    #[must_use]
    pub fn with_length_policy(mut self, length_policy: LengthPolicy) -> Self {
        self.length_policy = length_policy;
        self
    }

    #[must_use]
    pub fn with_thread_count(mut self, thread_count: usize) -> Self {
        self.thread_count = thread_count;
        self
    }

    #[must_use]
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    #[must_use]
    pub fn with_check_finite(mut self, check_finite: bool) -> Self {
        self.check_finite = check_finite;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), FourierError> {
        if self.thread_count == 0 {
            return Err(FourierError::InvalidThreadCount(0));
        }
        Ok(())
    }

    /// Whether a power-of-two transform of `n` should use the thread pool.
    pub(crate) fn parallel_for(&self, n: usize) -> bool {
        self.thread_count > 1 && n >= self.parallel_threshold.max(2)
    }
}

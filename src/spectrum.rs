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
use crate::traits::FftSample;
use crate::{FftDirection, FftStrategy, FourierError};
use num_complex::Complex;

/// Frequency-domain result of a transform call.
///
/// Bin `k` corresponds to `k · sample_rate / len()`. For real input the bins
/// past `len() / 2` mirror the lower half as complex conjugates.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum<T> {
    bins: Vec<Complex<T>>,
    signal_length: usize,
    strategy: FftStrategy,
    direction: FftDirection,
}

impl<T: FftSample> Spectrum<T> {
    pub(crate) fn new(
        bins: Vec<Complex<T>>,
        signal_length: usize,
        strategy: FftStrategy,
        direction: FftDirection,
    ) -> Self {
        Self {
            bins,
            signal_length,
            strategy,
            direction,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    #[inline]
    pub fn bins(&self) -> &[Complex<T>] {
        &self.bins
    }

    pub fn into_bins(self) -> Vec<Complex<T>> {
        self.bins
    }

    /// Length of the caller's sequence before any padding.
    #[inline]
    pub fn signal_length(&self) -> usize {
        self.signal_length
    }

    /// True when zero padding made the spectrum longer than the signal,
    /// which narrows each bin to `sample_rate / len()`.
    #[inline]
    pub fn is_padded(&self) -> bool {
        self.bins.len() != self.signal_length
    }

    #[inline]
    pub fn strategy(&self) -> FftStrategy {
        self.strategy
    }

    #[inline]
    pub fn direction(&self) -> FftDirection {
        self.direction
    }

    /// `|X[k]|` for every bin.
    pub fn magnitudes(&self) -> Vec<T> {
        self.bins.iter().map(|z| z.norm()).collect()
    }

    /// Magnitudes of the non-mirrored bins `0..len()/2`.
    pub fn half_magnitudes(&self) -> Vec<T> {
        self.bins
            .iter()
            .take(self.bins.len() / 2)
            .map(|z| z.norm())
            .collect()
    }

    /// Centre frequency of bin `k`; an empty spectrum has no bins to place.
    pub fn bin_frequency(&self, k: usize, sample_rate: f64) -> Result<f64, FourierError> {
        validate_sample_rate(sample_rate)?;
        if self.bins.is_empty() {
            return Err(FourierError::InvalidLength(0));
        }
        Ok(k as f64 * sample_rate / self.bins.len() as f64)
    }

    /// Frequencies of the bins [Spectrum::half_magnitudes] covers.
    pub fn frequency_axis(&self, sample_rate: f64) -> Result<Vec<f64>, FourierError> {
        validate_sample_rate(sample_rate)?;
        let n = self.bins.len() as f64;
        Ok((0..self.bins.len() / 2)
            .map(|k| k as f64 * sample_rate / n)
            .collect())
    }

    /// Dominant bin of the lower half `0..len()/2`, DC included.
    ///
    /// Ties resolve to the lowest bin. `None` when every candidate is zero.
    pub fn peak_bin(&self) -> Option<usize> {
        self.bins
            .iter()
            .enumerate()
            .take(self.bins.len() / 2)
            .map(|(k, z)| {
                let power: f64 = z.norm_sqr().as_();
                (k, power)
            })
            .filter(|&(_, power)| power > 0.0)
            .fold(None, |best: Option<(usize, f64)>, (k, power)| match best {
                Some((_, best_power)) if best_power >= power => best,
                _ => Some((k, power)),
            })
            .map(|(k, _)| k)
    }
}

/// Sample instants `i / sample_rate` of an `n` sample signal.
pub fn time_axis(n: usize, sample_rate: f64) -> Result<Vec<f64>, FourierError> {
    validate_sample_rate(sample_rate)?;
    Ok((0..n).map(|i| i as f64 / sample_rate).collect())
}

fn validate_sample_rate(sample_rate: f64) -> Result<(), FourierError> {
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(FourierError::InvalidSampleRate);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spectrum(values: &[(f64, f64)]) -> Spectrum<f64> {
        Spectrum::new(
            values.iter().map(|&(re, im)| Complex::new(re, im)).collect(),
            values.len(),
            FftStrategy::Radix2,
            FftDirection::Forward,
        )
    }

    #[test]
    fn test_frequency_axis_matches_bin_spacing() {
        let s = spectrum(&[(0.0, 0.0); 8]);
        assert_eq!(
            s.frequency_axis(8000.0).unwrap(),
            vec![0.0, 1000.0, 2000.0, 3000.0]
        );
        assert_eq!(s.bin_frequency(3, 44100.0).unwrap(), 3.0 * 44100.0 / 8.0);
        assert_eq!(s.frequency_axis(0.0), Err(FourierError::InvalidSampleRate));
        assert_eq!(
            s.bin_frequency(1, f64::NAN),
            Err(FourierError::InvalidSampleRate)
        );
    }

    #[test]
    fn test_magnitudes() {
        let s = spectrum(&[(3.0, 4.0), (0.0, -2.0), (1.0, 0.0), (0.0, 2.0)]);
        assert_eq!(s.magnitudes(), vec![5.0, 2.0, 1.0, 2.0]);
        assert_eq!(s.half_magnitudes(), vec![5.0, 2.0]);
        assert!(!s.is_padded());
    }

    #[test]
    fn test_peak_bin_lower_half() {
        let s = spectrum(&[
            (1.0, 0.0),
            (1.0, 0.0),
            (0.0, 3.0),
            (2.0, 0.0),
            (0.0, 0.0),
            (2.0, 0.0),
            (0.0, -3.0),
            (1.0, 0.0),
        ]);
        assert_eq!(s.peak_bin(), Some(2));
        assert_eq!(spectrum(&[(1.0, 0.0)]).peak_bin(), None);
    }

    #[test]
    fn test_peak_bin_constant_signal() {
        let constant = crate::transform(
            &crate::lift_real(&[5.0f64, 5.0, 5.0, 5.0]),
            FftDirection::Forward,
            &crate::FftOptions::default(),
        )
        .unwrap();
        assert_eq!(constant.peak_bin(), Some(0));
        assert_eq!(constant.bin_frequency(0, 8000.0).unwrap(), 0.0);

        let pair = spectrum(&[(2.0, 0.0), (0.0, 0.0)]);
        assert_eq!(pair.peak_bin(), Some(0));

        let silent = spectrum(&[(0.0, 0.0); 8]);
        assert_eq!(silent.peak_bin(), None);
    }

    #[test]
    fn test_empty_spectrum_has_no_bin_frequency() {
        let empty = crate::transform::<f64>(
            &[],
            FftDirection::Forward,
            &crate::FftOptions::default(),
        )
        .unwrap();
        assert!(empty.is_empty());
        assert_eq!(
            empty.bin_frequency(0, 8000.0),
            Err(FourierError::InvalidLength(0))
        );
        assert_eq!(empty.frequency_axis(8000.0).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_time_axis() {
        assert_eq!(time_axis(4, 2.0).unwrap(), vec![0.0, 0.5, 1.0, 1.5]);
        assert_eq!(time_axis(4, -1.0), Err(FourierError::InvalidSampleRate));
    }
}

/// Summary statistics of a dataset of `f32` samples.
///
/// Computed in a single pass; used to report the fitness spread of a
/// population per generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    /// Number of samples.
    pub count: usize,
    /// Smallest sample.
    pub min: f32,
    /// Largest sample.
    pub max: f32,
    /// Arithmetic mean.
    pub mean: f32,
    /// Population standard deviation.
    pub std_dev: f32,
}

impl DescriptiveStats {
    /// Accumulates statistics over `samples`.
    ///
    /// Returns `None` for an empty dataset.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(samples: I) -> Option<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut count = 0_usize;
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0_f32;
        let mut sum_sq = 0.0_f32;
        for sample in samples {
            count += 1;
            min = min.min(sample);
            max = max.max(sample);
            sum += sample;
            sum_sq += sample * sample;
        }
        if count == 0 {
            return None;
        }
        let n = count as f32;
        let mean = sum / n;
        // Population variance; guard against tiny negative values from
        // floating-point cancellation.
        let variance = (sum_sq / n - mean * mean).max(0.0);
        Some(Self {
            count,
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_none() {
        assert_eq!(DescriptiveStats::new(std::iter::empty()), None);
    }

    #[test]
    fn single_sample() {
        let stats = DescriptiveStats::new([3.5]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min, 3.5);
        assert_eq!(stats.max, 3.5);
        assert_eq!(stats.mean, 3.5);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn known_values() {
        let stats = DescriptiveStats::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.count, 8);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert!((stats.mean - 5.0).abs() < 1e-6);
        assert!((stats.std_dev - 2.0).abs() < 1e-5);
    }

    #[test]
    fn identical_samples_have_zero_spread() {
        let stats = DescriptiveStats::new([1.25; 10]).unwrap();
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.min, stats.max);
    }
}

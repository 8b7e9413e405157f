//! Simulated price-path sets.

/// Ordered collection of simulated price paths, one per trial.
///
/// Every path has the same length and starts at the initial price. The set
/// is read-only once returned by the simulator.
///
/// # Examples
///
/// ```rust
/// use quant_sim::gbm::{GbmParams, GbmPathSimulator, SimulationConfig};
///
/// let config = SimulationConfig::builder().steps(5).trials(3).seed(1).build().unwrap();
/// let paths = GbmPathSimulator::new(config)
///     .simulate(GbmParams::new(50.0, 0.0, 0.02))
///     .unwrap();
///
/// assert_eq!(paths.trials(), 3);
/// assert_eq!(paths.steps(), 5);
/// assert_eq!(paths.terminal_prices().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricePathSet {
    paths: Vec<Vec<f64>>,
    steps: usize,
}

impl PricePathSet {
    pub(crate) fn new(paths: Vec<Vec<f64>>, steps: usize) -> Self {
        debug_assert!(paths.iter().all(|p| p.len() == steps));
        Self { paths, steps }
    }

    /// Number of trials.
    #[inline]
    pub fn trials(&self) -> usize {
        self.paths.len()
    }

    /// Number of prices per trial.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Path for trial `index`.
    #[inline]
    pub fn path(&self, index: usize) -> Option<&[f64]> {
        self.paths.get(index).map(Vec::as_slice)
    }

    /// Iterates the paths in trial order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.paths.iter().map(Vec::as_slice)
    }

    /// Final price of every trial.
    pub fn terminal_prices(&self) -> Vec<f64> {
        self.paths
            .iter()
            .map(|path| path[path.len() - 1])
            .collect()
    }

    /// Per-step average across trials.
    pub fn mean_path(&self) -> Vec<f64> {
        let n = self.paths.len() as f64;
        let mut mean = vec![0.0; self.steps];
        for path in &self.paths {
            for (acc, &price) in mean.iter_mut().zip(path) {
                *acc += price;
            }
        }
        mean.iter_mut().for_each(|v| *v /= n);
        mean
    }

    /// Hands the paths to the caller.
    #[inline]
    pub fn into_inner(self) -> Vec<Vec<f64>> {
        self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> PricePathSet {
        PricePathSet::new(vec![vec![10.0, 12.0, 11.0], vec![10.0, 8.0, 13.0]], 3)
    }

    #[test]
    fn test_accessors() {
        let set = sample_set();
        assert_eq!(set.trials(), 2);
        assert_eq!(set.steps(), 3);
        assert_eq!(set.path(1), Some(&[10.0, 8.0, 13.0][..]));
        assert_eq!(set.path(2), None);
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    fn test_terminal_prices() {
        assert_eq!(sample_set().terminal_prices(), vec![11.0, 13.0]);
    }

    #[test]
    fn test_mean_path() {
        assert_eq!(sample_set().mean_path(), vec![10.0, 10.0, 12.0]);
    }

    #[test]
    fn test_into_inner() {
        let inner = sample_set().into_inner();
        assert_eq!(inner.len(), 2);
        assert_eq!(inner[0], vec![10.0, 12.0, 11.0]);
    }
}

/// Bollinger Bands — rolling mean ± `num_std` population standard deviations
/// over the trailing `window` closes (ddof=0, the pandas default for bands).
#[derive(Debug, Clone)]
pub struct Bollinger {
    pub window: usize,
    pub num_std: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerOutput {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl Bollinger {
    pub fn new(window: usize, num_std: f64) -> Self {
        assert!(window >= 2, "Bollinger window must be >= 2");
        Self { window, num_std }
    }

    /// Compute the bands over the last `window` closes (oldest first).
    /// Returns `None` if there are fewer than `window` values.
    pub fn compute(&self, closes: &[f64]) -> Option<BollingerOutput> {
        if closes.len() < self.window {
            return None;
        }

        let tail = &closes[closes.len() - self.window..];
        let middle = tail.iter().sum::<f64>() / self.window as f64;
        let variance =
            tail.iter().map(|v| (v - middle).powi(2)).sum::<f64>() / self.window as f64;
        let std = variance.sqrt();

        Some(BollingerOutput {
            upper: middle + self.num_std * std,
            middle,
            lower: middle - self.num_std * std,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bollinger_returns_none_with_insufficient_data() {
        let bb = Bollinger::new(20, 2.0);
        let prices = vec![50.0; 19];
        assert!(bb.compute(&prices).is_none());
    }

    #[test]
    fn bollinger_bands_collapse_on_a_flat_series() {
        let bb = Bollinger::new(20, 2.0);
        let prices = vec![50.0; 25];
        let out = bb.compute(&prices).unwrap();
        assert!((out.upper - 50.0).abs() < 1e-12);
        assert!((out.middle - 50.0).abs() < 1e-12);
        assert!((out.lower - 50.0).abs() < 1e-12);
    }

    #[test]
    fn bollinger_known_population_std() {
        // mean = 5, population std = 2 for this classic series
        let bb = Bollinger::new(8, 2.0);
        let prices = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let out = bb.compute(&prices).unwrap();
        assert!((out.middle - 5.0).abs() < 1e-12);
        assert!((out.upper - 9.0).abs() < 1e-12);
        assert!((out.lower - 1.0).abs() < 1e-12);
    }

    #[test]
    fn bollinger_uses_only_the_trailing_window() {
        let bb = Bollinger::new(4, 2.0);
        // Early outliers must not affect the bands
        let mut prices = vec![1000.0, 0.001];
        prices.extend([10.0, 10.0, 10.0, 10.0]);
        let out = bb.compute(&prices).unwrap();
        assert!((out.middle - 10.0).abs() < 1e-12);
        assert!((out.upper - 10.0).abs() < 1e-12);
    }
}

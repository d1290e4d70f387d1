use super::ema::Ema;

/// MACD (Moving Average Convergence/Divergence) indicator.
///
/// MACD line = EMA(fast) − EMA(slow), signal line = EMA of the MACD line over
/// `signal` periods. Both use the pandas `adjust=False` recursion, so the
/// values line up with the common charting implementations.
#[derive(Debug, Clone)]
pub struct Macd {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

/// The latest MACD line and signal line values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdOutput {
    pub line: f64,
    pub signal: f64,
}

impl Macd {
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        assert!(fast < slow, "MACD fast period must be less than slow period");
        Self { fast, slow, signal }
    }

    /// Fewest closes needed before the signal line is worth reading.
    pub fn min_len(&self) -> usize {
        self.slow + self.signal
    }

    /// Compute the latest MACD values from a slice of close prices
    /// (oldest first). Returns `None` if there isn't enough data.
    pub fn compute(&self, closes: &[f64]) -> Option<MacdOutput> {
        if closes.len() < self.min_len() {
            return None;
        }

        let fast = Ema::new(self.fast).series(closes);
        let slow = Ema::new(self.slow).series(closes);
        let line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
        let signal = Ema::new(self.signal).series(&line);

        Some(MacdOutput {
            line: *line.last()?,
            signal: *signal.last()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macd_returns_none_with_insufficient_data() {
        let macd = Macd::new(12, 26, 9);
        let prices = vec![100.0; 34]; // need >= 35
        assert!(macd.compute(&prices).is_none());
    }

    #[test]
    fn macd_is_zero_on_a_flat_series() {
        let macd = Macd::new(12, 26, 9);
        let prices = vec![100.0; 60];
        let out = macd.compute(&prices).unwrap();
        assert!(out.line.abs() < 1e-9, "flat series MACD line: {}", out.line);
        assert!(out.signal.abs() < 1e-9, "flat series signal: {}", out.signal);
    }

    #[test]
    fn macd_leads_signal_in_a_steady_uptrend() {
        // In a linear uptrend the MACD line rises toward its asymptote and the
        // slower signal line trails below it.
        let macd = Macd::new(12, 26, 9);
        let prices: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let out = macd.compute(&prices).unwrap();
        assert!(out.line > 0.0);
        assert!(out.line > out.signal, "line {} <= signal {}", out.line, out.signal);
    }

    #[test]
    fn macd_trails_signal_in_a_steady_downtrend() {
        let macd = Macd::new(12, 26, 9);
        let prices: Vec<f64> = (0..60).map(|i| 200.0 - i as f64).collect();
        let out = macd.compute(&prices).unwrap();
        assert!(out.line < 0.0);
        assert!(out.line < out.signal, "line {} >= signal {}", out.line, out.signal);
    }
}

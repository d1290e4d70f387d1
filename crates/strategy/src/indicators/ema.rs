/// EMA (Exponential Moving Average) indicator.
///
/// Matches pandas `ewm(span=window, adjust=False).mean()`: the recursion is
/// seeded with the first observation, then
/// `value = α·price + (1−α)·prev` with `α = 2/(window+1)`.
///
/// A value exists for any non-empty series; it only becomes fully
/// representative once roughly `window` closes have been seen.
#[derive(Debug, Clone)]
pub struct Ema {
    pub window: usize,
}

impl Ema {
    pub fn new(window: usize) -> Self {
        assert!(window >= 1, "EMA window must be >= 1");
        Self { window }
    }

    /// Final EMA value over a slice of close prices (oldest first).
    /// Returns `None` on an empty slice.
    pub fn compute(&self, closes: &[f64]) -> Option<f64> {
        self.series(closes).last().copied()
    }

    /// Full EMA series, one value per input close.
    pub fn series(&self, closes: &[f64]) -> Vec<f64> {
        let k = 2.0 / (self.window as f64 + 1.0);
        let mut out = Vec::with_capacity(closes.len());
        let mut prev: Option<f64> = None;
        for &price in closes {
            let value = match prev {
                None => price,
                Some(p) => price * k + p * (1.0 - k),
            };
            out.push(value);
            prev = Some(value);
        }
        out
    }
}

use common::Candle;

/// ATR (Average True Range) — Wilder smoothing.
///
/// True range of the first bar is `high − low` (no previous close); every
/// later bar uses `max(high − low, |high − prev_close|, |low − prev_close|)`.
/// The average is seeded with the mean of the first `window` true ranges and
/// then smoothed as `ATR = (prev_ATR·(N−1) + TR) / N`.
#[derive(Debug, Clone)]
pub struct Atr {
    pub window: usize,
}

impl Atr {
    pub fn new(window: usize) -> Self {
        assert!(window >= 1, "ATR window must be >= 1");
        Self { window }
    }

    /// Compute ATR over a candle window (oldest first).
    /// Returns `None` if there are fewer than `window` candles.
    pub fn compute(&self, candles: &[Candle]) -> Option<f64> {
        if candles.len() < self.window {
            return None;
        }

        let mut prev_close: Option<f64> = None;
        let true_ranges: Vec<f64> = candles
            .iter()
            .map(|c| {
                let tr = match prev_close {
                    None => c.high - c.low,
                    Some(pc) => (c.high - c.low)
                        .max((c.high - pc).abs())
                        .max((c.low - pc).abs()),
                };
                prev_close = Some(c.close);
                tr
            })
            .collect();

        let mut atr =
            true_ranges[..self.window].iter().sum::<f64>() / self.window as f64;
        for &tr in &true_ranges[self.window..] {
            atr = (atr * (self.window as f64 - 1.0) + tr) / self.window as f64;
        }
        Some(atr)
    }
}

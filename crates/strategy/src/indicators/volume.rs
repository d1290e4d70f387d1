/// Trailing mean of volume, mirroring a rolling tail mean: averages the last
/// `window` values, or everything available when the series is shorter.
#[derive(Debug, Clone)]
pub struct VolumeSma {
    pub window: usize,
}

impl VolumeSma {
    pub fn new(window: usize) -> Self {
        assert!(window >= 1, "volume window must be >= 1");
        Self { window }
    }

    /// Mean of the last `window` volumes (oldest first).
    /// Returns `None` on an empty slice.
    pub fn compute(&self, volumes: &[f64]) -> Option<f64> {
        if volumes.is_empty() {
            return None;
        }
        let n = self.window.min(volumes.len());
        let tail = &volumes[volumes.len() - n..];
        Some(tail.iter().sum::<f64>() / n as f64)
    }
}

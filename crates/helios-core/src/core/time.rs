/// Wall-clock frame timer.
/// Turns monotonically increasing timestamps (requestAnimationFrame
/// milliseconds) into per-frame deltas in seconds.
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Elapsed seconds since the previous call. The first call returns 0.0,
    /// as does a timestamp that goes backwards.
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// Runtime configuration, threaded explicitly into the time axis builder and
/// the presentation layer instead of living in a global.
///
/// The CSV dumps carry no rate metadata, so the sample rate is an
/// application constant rather than a CLI flag.
#[derive(Debug, Clone, Copy)]
pub struct ScopeConfig {
    /// Sample rate of the recorded audio, in Hz.
    pub sample_rate_hz: f64,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 44_100.0,
        }
    }
}

impl ScopeConfig {
    /// Time between two sample rows, in milliseconds.
    pub fn sample_period_ms(&self) -> f64 {
        1000.0 / self.sample_rate_hz
    }
}

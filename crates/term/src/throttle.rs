/// Decides when the main loop should redraw.
///
/// The quiz screen only changes on input or on a countdown tick, so frames are
/// drawn when the snapshot fingerprint changes and otherwise refreshed at most
/// once per `refresh_interval_ms` (keeps the screen intact after external
/// scribbles without redrawing every poll).
#[derive(Debug, Clone)]
pub struct FrameThrottle {
    refresh_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl FrameThrottle {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Forget the last frame so the next call renders.
    pub fn reset(&mut self) {
        self.last_fingerprint = None;
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.refresh_interval_ms;
        if !changed && !stale {
            return false;
        }

        self.last_render_ms = now_ms;
        self.last_fingerprint = Some(fingerprint);
        true
    }
}

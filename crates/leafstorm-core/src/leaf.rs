/// Fixed-cadence leaf stream.
///
/// Spawn times sit on a grid `start + k * interval`. When the clock skips
/// several grid points at once (timers are heavily throttled while the tab
/// is hidden) a single spawn is issued and the grid is moved past `now`.
#[derive(Clone, Debug)]
pub struct LeafStream {
    interval_ms: f64,
    next_due_ms: Option<f64>,
}

impl LeafStream {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            next_due_ms: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn next_due_ms(&self) -> Option<f64> {
        self.next_due_ms
    }

    /// Arm the stream. The first leaf is spawned immediately; returns `false`
    /// if the stream was already running.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.next_due_ms.is_some() {
            return false;
        }
        self.next_due_ms = Some(now_ms + self.interval_ms);
        true
    }

    /// Returns `true` when a leaf is due at `now_ms`.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let Some(due) = self.next_due_ms else {
            return false;
        };
        if now_ms < due {
            return false;
        }
        let mut next = due + self.interval_ms;
        if next <= now_ms {
            let skipped = ((now_ms - due) / self.interval_ms).floor();
            log::debug!("[leaf] clock jumped, coalescing {} spawns", skipped);
            next = due + (skipped + 1.0) * self.interval_ms;
        }
        self.next_due_ms = Some(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_immediate_and_once() {
        let mut s = LeafStream::new(8140.0);
        assert!(!s.poll(0.0));
        assert!(s.start(0.0));
        assert!(!s.start(10.0));
        assert_eq!(s.next_due_ms(), Some(8140.0));
    }

    #[test]
    fn grid_does_not_drift() {
        let mut s = LeafStream::new(100.0);
        s.start(0.0);
        assert!(!s.poll(99.0));
        assert!(s.poll(116.0)); // late frame
        assert_eq!(s.next_due_ms(), Some(200.0));
        assert!(s.poll(200.0));
        assert_eq!(s.next_due_ms(), Some(300.0));
    }

    #[test]
    fn long_gap_coalesces_into_one_spawn() {
        let mut s = LeafStream::new(100.0);
        s.start(0.0);
        assert!(s.poll(1_050.0));
        assert_eq!(s.next_due_ms(), Some(1_100.0));
        assert!(!s.poll(1_050.0));
    }
}

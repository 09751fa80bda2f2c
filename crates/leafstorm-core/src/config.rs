//! Effect configuration.
//!
//! Everything here is fixed at start-up. `FxConfig::default()` reproduces the
//! page's tuned values from `constants.rs`; tests build tighter variants.

use crate::constants::*;
use crate::error::FxError;

/// A visual resource and its intrinsic animation length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectAsset {
    pub src: &'static str,
    pub lifetime_ms: f64,
}

impl EffectAsset {
    pub const fn new(src: &'static str, lifetime_ms: f64) -> Self {
        Self { src, lifetime_ms }
    }
}

/// Randomization bounds for one lightning burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstParams {
    pub count_min: u32,
    pub count_max: u32,
    pub x_range: (f32, f32),
    pub y_range: (f32, f32),
    pub gap_range_ms: (f64, f64),
}

impl Default for BurstParams {
    fn default() -> Self {
        Self {
            count_min: BURST_COUNT_MIN,
            count_max: BURST_COUNT_MAX,
            x_range: FLASH_X_RANGE,
            y_range: FLASH_Y_RANGE,
            gap_range_ms: FLASH_GAP_RANGE_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FxConfig {
    pub leaf: EffectAsset,
    pub leaf_interval_ms: f64,
    pub leaf_pre_roll_ms: Option<f64>,
    pub bolt: EffectAsset,
    /// Deadline after which a bolt is torn down even if `animationend` never
    /// arrives. `None` relies on the completion event alone.
    pub bolt_fallback_ms: Option<f64>,
    pub grace_ms: f64,
    pub burst: BurstParams,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            leaf: EffectAsset::new(LEAF_SRC, LEAF_DURATION_MS),
            leaf_interval_ms: leaf_interval_ms(),
            leaf_pre_roll_ms: Some(LEAF_PRE_ROLL_MS),
            bolt: EffectAsset::new(BOLT_SRC, BOLT_LIFETIME_MS),
            bolt_fallback_ms: Some(BOLT_LIFETIME_MS + GRACE_PERIOD_MS),
            grace_ms: GRACE_PERIOD_MS,
            burst: BurstParams::default(),
        }
    }
}

impl FxConfig {
    pub fn validate(&self) -> Result<(), FxError> {
        if !positive(self.leaf.lifetime_ms) {
            return Err(FxError::InvalidConfig("leaf lifetime must be positive"));
        }
        if !positive(self.leaf_interval_ms) {
            return Err(FxError::InvalidConfig("leaf interval must be positive"));
        }
        if self.leaf_pre_roll_ms.is_some_and(|p| p < 0.0) {
            return Err(FxError::InvalidConfig("pre-roll must not be negative"));
        }
        if self.grace_ms < 0.0 {
            return Err(FxError::InvalidConfig("grace period must not be negative"));
        }
        if self.bolt_fallback_ms.is_some_and(|f| !positive(f)) {
            return Err(FxError::InvalidConfig("bolt fallback must be positive"));
        }
        let b = &self.burst;
        if b.count_min == 0 || b.count_min > b.count_max {
            return Err(FxError::InvalidConfig("burst count range is empty"));
        }
        if !ordered(b.x_range.0, b.x_range.1) || !ordered(b.y_range.0, b.y_range.1) {
            return Err(FxError::InvalidConfig("flash position range is empty"));
        }
        if !positive(b.gap_range_ms.0) || !ordered(b.gap_range_ms.0, b.gap_range_ms.1) {
            return Err(FxError::InvalidConfig("flash gap range must be positive and non-empty"));
        }
        Ok(())
    }

    /// Upper bound on leaves attached at the same time.
    pub fn max_concurrent_leaves(&self) -> usize {
        ((self.leaf.lifetime_ms + self.grace_ms) / self.leaf_interval_ms).ceil() as usize
    }
}

// NaN fails both
#[inline]
fn positive(x: f64) -> bool {
    x > 0.0
}

#[inline]
fn ordered<T: PartialOrd>(lo: T, hi: T) -> bool {
    lo < hi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = FxConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.leaf_interval_ms, 8140.0);
        assert_eq!(cfg.max_concurrent_leaves(), 3);
    }

    #[test]
    fn rejects_inverted_ranges() {
        let mut cfg = FxConfig::default();
        cfg.burst.count_min = 4;
        assert!(matches!(cfg.validate(), Err(FxError::InvalidConfig(_))));

        let mut cfg = FxConfig::default();
        cfg.burst.gap_range_ms = (520.0, 180.0);
        assert!(cfg.validate().is_err());

        let mut cfg = FxConfig::default();
        cfg.leaf_interval_ms = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = FxConfig::default();
        cfg.leaf.lifetime_ms = f64::NAN;
        assert!(cfg.validate().is_err());
    }
}

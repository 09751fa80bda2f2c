// Timing and layout constants shared by the core scheduler and the web frontend.
// All times are milliseconds on the page clock (`performance.now()`).

// Leaf stream
pub const LEAF_SRC: &str = "asset/leaf.png";
pub const LEAF_DURATION_MS: f64 = 22_000.0; // one leaf crossing the screen
pub const LEAF_INTERVAL_RATIO: f64 = 0.37; // next leaf starts this far into the previous one
pub const LEAF_PRE_ROLL_MS: f64 = 300.0; // negative start delay, leaf enters already moving

// Extra time a unit stays attached after its lifetime before forced teardown
pub const GRACE_PERIOD_MS: f64 = 500.0;

// Lightning
pub const BOLT_SRC: &str = "asset/lightning.png";
pub const BOLT_LIFETIME_MS: f64 = 900.0; // expected length of the bolt keyframes

pub const BURST_COUNT_MIN: u32 = 2;
pub const BURST_COUNT_MAX: u32 = 3; // inclusive

// Viewport-percentage ranges for flash placement
pub const FLASH_X_RANGE: (f32, f32) = (10.0, 90.0); // vw
pub const FLASH_Y_RANGE: (f32, f32) = (10.0, 60.0); // vh

// Gap between consecutive flashes of one burst, [min, max)
pub const FLASH_GAP_RANGE_MS: (f64, f64) = (180.0, 520.0);

#[inline]
pub fn leaf_interval_ms() -> f64 {
    (LEAF_DURATION_MS * LEAF_INTERVAL_RATIO).round()
}

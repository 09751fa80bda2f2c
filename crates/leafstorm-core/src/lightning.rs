//! Lightning burst planning.
//!
//! A burst is 2-3 flashes at random positions. Delays are a running sum that
//! starts at zero, so flashes within one burst always fire in order.

use crate::config::BurstParams;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flash {
    /// Offset from the trigger, in milliseconds.
    pub delay_ms: f64,
    /// Viewport-percentage position (`x` in vw, `y` in vh).
    pub position: Vec2,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BurstPlan {
    pub flashes: SmallVec<[Flash; 3]>,
}

impl BurstPlan {
    pub fn len(&self) -> usize {
        self.flashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashes.is_empty()
    }

    pub fn total_ms(&self) -> f64 {
        self.flashes.last().map(|f| f.delay_ms).unwrap_or(0.0)
    }
}

pub fn plan_burst<R: Rng + ?Sized>(rng: &mut R, params: &BurstParams) -> BurstPlan {
    let count = rng.gen_range(params.count_min..=params.count_max);
    let mut flashes = SmallVec::new();
    let mut delay = 0.0;
    for _ in 0..count {
        let x = rng.gen_range(params.x_range.0..=params.x_range.1);
        let y = rng.gen_range(params.y_range.0..=params.y_range.1);
        flashes.push(Flash {
            delay_ms: delay,
            position: Vec2::new(x, y),
        });
        delay += rng.gen_range(params.gap_range_ms.0..params.gap_range_ms.1);
    }
    BurstPlan { flashes }
}

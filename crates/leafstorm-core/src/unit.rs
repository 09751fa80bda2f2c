//! Transient visual units and the set of units currently attached to the page.

use crate::config::EffectAsset;
use fnv::FnvHashMap;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitKind {
    Leaf,
    Bolt,
}

/// CSS custom properties consumed by the leaf keyframes.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingVars {
    pub duration_s: f64,
    pub start_offset_s: Option<f64>,
}

impl TimingVars {
    /// `(name, value)` pairs ready for `style.setProperty`.
    pub fn css_pairs(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![("--dur", format!("{}s", self.duration_s))];
        if let Some(ad) = self.start_offset_s {
            out.push(("--ad", format!("{}s", ad)));
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransientUnit {
    pub id: UnitId,
    pub kind: UnitKind,
    pub asset: EffectAsset,
    pub created_at_ms: f64,
    /// Viewport-percentage position; leaves have none.
    pub position: Option<Vec2>,
    pub pre_roll_ms: Option<f64>,
    pub started: bool,
}

impl TransientUnit {
    pub fn lifetime_ms(&self) -> f64 {
        self.asset.lifetime_ms
    }

    pub fn timing(&self) -> TimingVars {
        TimingVars {
            duration_s: self.asset.lifetime_ms / 1000.0,
            start_offset_s: self.pre_roll_ms.map(|p| -p / 1000.0),
        }
    }
}

#[derive(Default, Debug)]
pub struct ActiveSet {
    units: FnvHashMap<UnitId, TransientUnit>,
}

impl ActiveSet {
    pub fn insert(&mut self, unit: TransientUnit) {
        self.units.insert(unit.id, unit);
    }

    /// Returns `true` only the first time a given id is removed.
    pub fn remove(&mut self, id: UnitId) -> bool {
        self.units.remove(&id).is_some()
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.units.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn count(&self, kind: UnitKind) -> usize {
        self.units.values().filter(|u| u.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: u64) -> TransientUnit {
        TransientUnit {
            id: UnitId(id),
            kind: UnitKind::Leaf,
            asset: EffectAsset::new("leaf.png", 22_000.0),
            created_at_ms: 0.0,
            position: None,
            pre_roll_ms: Some(300.0),
            started: true,
        }
    }

    #[test]
    fn remove_is_idempotent() {
        let mut set = ActiveSet::default();
        set.insert(leaf(1));
        set.insert(leaf(2));
        assert!(set.remove(UnitId(1)));
        assert!(!set.remove(UnitId(1)));
        assert_eq!(set.len(), 1);
        assert!(set.contains(UnitId(2)));
    }

    #[test]
    fn timing_vars_use_seconds_and_negative_offset() {
        let vars = leaf(1).timing();
        assert_eq!(
            vars.css_pairs(),
            vec![("--dur", "22s".to_string()), ("--ad", "-0.3s".to_string())]
        );
    }
}

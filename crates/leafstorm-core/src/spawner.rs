//! Ephemeral visual effect spawner.
//!
//! A spawn goes through an optional preload step: the frontend decodes the
//! asset and reports back through [`Spawner::preload_settled`]. Only then is
//! the unit created and inserted into the active set.

use crate::config::EffectAsset;
use crate::error::FxError;
use crate::unit::{ActiveSet, TransientUnit, UnitId, UnitKind};
use fnv::FnvHashMap;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PreloadTicket(pub u64);

#[derive(Clone, Debug)]
struct PendingSpawn {
    kind: UnitKind,
    asset: EffectAsset,
    position: Option<Vec2>,
    pre_roll_ms: Option<f64>,
}

#[derive(Default)]
pub struct Spawner {
    active: ActiveSet,
    pending: FnvHashMap<PreloadTicket, PendingSpawn>,
    next_ticket: u64,
    next_unit: u64,
}

impl Spawner {
    pub fn request(
        &mut self,
        kind: UnitKind,
        asset: EffectAsset,
        position: Option<Vec2>,
        pre_roll_ms: Option<f64>,
    ) -> PreloadTicket {
        let ticket = PreloadTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending.insert(
            ticket,
            PendingSpawn {
                kind,
                asset,
                position,
                pre_roll_ms,
            },
        );
        ticket
    }

    /// Resolve a pending preload. Failures drop the spawn without a trace.
    pub fn preload_settled(
        &mut self,
        ticket: PreloadTicket,
        result: Result<(), FxError>,
        now_ms: f64,
    ) -> Option<TransientUnit> {
        let pending = self.pending.remove(&ticket)?;
        if let Err(e) = result {
            log::debug!("[spawner] dropped {} ({})", pending.asset.src, e);
            return None;
        }
        Some(self.create(
            pending.kind,
            pending.asset,
            pending.position,
            pending.pre_roll_ms,
            now_ms,
        ))
    }

    /// Create a unit right away, without waiting for a decode.
    pub fn attach(
        &mut self,
        kind: UnitKind,
        asset: EffectAsset,
        position: Option<Vec2>,
        now_ms: f64,
    ) -> TransientUnit {
        self.create(kind, asset, position, None, now_ms)
    }

    fn create(
        &mut self,
        kind: UnitKind,
        asset: EffectAsset,
        position: Option<Vec2>,
        pre_roll_ms: Option<f64>,
        now_ms: f64,
    ) -> TransientUnit {
        let id = UnitId(self.next_unit);
        self.next_unit += 1;
        let unit = TransientUnit {
            id,
            kind,
            asset,
            created_at_ms: now_ms,
            position,
            pre_roll_ms,
            started: true,
        };
        self.active.insert(unit.clone());
        unit
    }

    pub fn remove(&mut self, id: UnitId) -> bool {
        self.active.remove(id)
    }

    pub fn active(&self) -> &ActiveSet {
        &self.active
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

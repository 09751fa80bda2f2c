//! The effect stage: one owner for every timer, unit and random draw.
//!
//! The frontend feeds it time (`tick`), input (`trigger_burst`) and platform
//! completions (`preload_settled`, `animation_finished`, `flash_finished`).
//! Each call appends the DOM work it implies to `out`; the stage itself never
//! touches the page.

use crate::config::FxConfig;
use crate::error::FxError;
use crate::leaf::LeafStream;
use crate::lightning::{plan_burst, BurstPlan};
use crate::overlay::FlashOverlay;
use crate::spawner::{PreloadTicket, Spawner};
use crate::timeline::Timeline;
use crate::unit::{ActiveSet, TransientUnit, UnitId, UnitKind};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// Visible as soon as it is attached.
    Immediate,
    /// Attach unstyled, add the `show` class on the next animation frame.
    NextFrame,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Preload {
        ticket: PreloadTicket,
        src: &'static str,
    },
    Attach {
        unit: TransientUnit,
        reveal: Reveal,
    },
    Detach(UnitId),
    EnsureFxLayer,
    ShowFlash {
        position: Vec2,
    },
    HideFlash,
}

#[derive(Clone, Copy, Debug)]
enum Scheduled {
    Teardown(UnitId),
    Flash(Vec2),
}

pub struct Stage {
    config: FxConfig,
    spawner: Spawner,
    leaves: LeafStream,
    overlay: FlashOverlay,
    timeline: Timeline<Scheduled>,
    rng: StdRng,
}

impl Stage {
    pub fn new(config: FxConfig, seed: u64) -> Result<Self, FxError> {
        config.validate()?;
        Ok(Self {
            leaves: LeafStream::new(config.leaf_interval_ms),
            config,
            spawner: Spawner::default(),
            overlay: FlashOverlay::default(),
            timeline: Timeline::default(),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &FxConfig {
        &self.config
    }

    pub fn active(&self) -> &ActiveSet {
        self.spawner.active()
    }

    pub fn overlay(&self) -> &FlashOverlay {
        &self.overlay
    }

    pub fn pending_preloads(&self) -> usize {
        self.spawner.pending_len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timeline.len()
    }

    /// Earliest time at which `tick` has work to do: the next leaf or the
    /// next scheduled teardown/flash.
    pub fn next_deadline(&self) -> Option<f64> {
        match (self.leaves.next_due_ms(), self.timeline.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Start the leaf stream with one immediate leaf.
    pub fn start(&mut self, now_ms: f64, out: &mut Vec<Command>) {
        if self.leaves.start(now_ms) {
            log::info!(
                "[stage] leaf stream every {} ms (max {} on screen)",
                self.leaves.interval_ms(),
                self.config.max_concurrent_leaves()
            );
            self.request_leaf(out);
        }
    }

    pub fn tick(&mut self, now_ms: f64, out: &mut Vec<Command>) {
        if self.leaves.poll(now_ms) {
            self.request_leaf(out);
        }
        self.drain_timeline(now_ms, out);
    }

    fn request_leaf(&mut self, out: &mut Vec<Command>) {
        let asset = self.config.leaf;
        let ticket =
            self.spawner
                .request(UnitKind::Leaf, asset, None, self.config.leaf_pre_roll_ms);
        out.push(Command::Preload {
            ticket,
            src: asset.src,
        });
    }

    pub fn preload_settled(
        &mut self,
        ticket: PreloadTicket,
        result: Result<(), FxError>,
        now_ms: f64,
        out: &mut Vec<Command>,
    ) {
        if let Some(unit) = self.spawner.preload_settled(ticket, result, now_ms) {
            let deadline = now_ms + unit.lifetime_ms() + self.config.grace_ms;
            self.timeline.schedule(deadline, Scheduled::Teardown(unit.id));
            out.push(Command::Attach {
                unit,
                reveal: Reveal::Immediate,
            });
        }
    }

    /// Plan a burst of flashes starting at `now_ms`. A zero-delay flash is
    /// emitted right away.
    pub fn trigger_burst(&mut self, now_ms: f64, out: &mut Vec<Command>) -> BurstPlan {
        let plan = plan_burst(&mut self.rng, &self.config.burst);
        log::debug!("[stage] burst of {} over {:.0} ms", plan.len(), plan.total_ms());
        for flash in &plan.flashes {
            self.timeline
                .schedule(now_ms + flash.delay_ms, Scheduled::Flash(flash.position));
        }
        self.drain_timeline(now_ms, out);
        plan
    }

    /// `animationend` fired on a unit. Removal is idempotent.
    pub fn animation_finished(&mut self, id: UnitId, out: &mut Vec<Command>) {
        self.teardown(id, out);
    }

    /// `animationend` fired on the flash overlay.
    pub fn flash_finished(&mut self, out: &mut Vec<Command>) {
        if self.overlay.hide() {
            out.push(Command::HideFlash);
        }
    }

    fn drain_timeline(&mut self, now_ms: f64, out: &mut Vec<Command>) {
        while let Some((due, event)) = self.timeline.pop_due(now_ms) {
            match event {
                Scheduled::Teardown(id) => self.teardown(id, out),
                Scheduled::Flash(position) => self.fire_flash(due, position, out),
            }
        }
    }

    fn teardown(&mut self, id: UnitId, out: &mut Vec<Command>) {
        if self.spawner.remove(id) {
            out.push(Command::Detach(id));
        }
    }

    fn fire_flash(&mut self, due_ms: f64, position: Vec2, out: &mut Vec<Command>) {
        if self.overlay.ensure() {
            out.push(Command::EnsureFxLayer);
        }
        let unit = self
            .spawner
            .attach(UnitKind::Bolt, self.config.bolt, Some(position), due_ms);
        if let Some(fallback) = self.config.bolt_fallback_ms {
            self.timeline
                .schedule(due_ms + fallback, Scheduled::Teardown(unit.id));
        }
        out.push(Command::Attach {
            unit,
            reveal: Reveal::NextFrame,
        });
        self.overlay.show_at(position);
        out.push(Command::ShowFlash { position });
    }
}

use crate::audio::Player;
use crate::overlay::Layers;
use fnv::FnvHashMap;
use leafstorm_core::{AudioToggle, FocusState, FxConfig, Stage, UnitId};
use std::cell::{Cell, RefCell};
use web_sys as web;

/// Everything the event handlers share. Lives for the whole page, handed
/// around as `Rc<Fx>`; each field is borrowed only for the length of one
/// handler step.
pub struct Fx {
    pub document: web::Document,
    pub stage: RefCell<Stage>,
    pub focus: RefCell<FocusState>,
    pub audio: RefCell<AudioToggle>,
    pub player: Player,
    pub nodes: RefCell<FnvHashMap<UnitId, web::HtmlImageElement>>,
    pub layers: RefCell<Option<Layers>>,
    /// Pending `setTimeout` handle for the next stage deadline.
    pub timer: Cell<Option<i32>>,
    pub wake: RefCell<Option<js_sys::Function>>,
}

impl Fx {
    pub fn new(document: web::Document, config: FxConfig) -> anyhow::Result<Self> {
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let stage = Stage::new(config, seed)?;
        let player = Player::new(&document)?;
        Ok(Self {
            document,
            stage: RefCell::new(stage),
            focus: RefCell::new(FocusState::default()),
            audio: RefCell::new(AudioToggle::default()),
            player,
            nodes: RefCell::new(FnvHashMap::default()),
            layers: RefCell::new(None),
            timer: Cell::new(None),
            wake: RefCell::new(None),
        })
    }
}

pub mod audio;
pub mod config;
pub mod constants;
pub mod error;
pub mod focus;
pub mod leaf;
pub mod lightning;
pub mod overlay;
pub mod spawner;
pub mod stage;
pub mod timeline;
pub mod unit;

pub use audio::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use focus::*;
pub use leaf::*;
pub use lightning::*;
pub use overlay::*;
pub use spawner::*;
pub use stage::*;
pub use timeline::Timeline;
pub use unit::*;

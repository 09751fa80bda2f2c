// DOM contract shared with the page markup and stylesheet.

// Existing page elements
pub const BACKGROUND_SELECTOR: &str = ".background";
pub const HITBOX_SELECTOR: &str = ".character-hitbox";
pub const CHARACTER_SELECTOR: &str = ".character";
pub const LOGO_SELECTOR: &str = ".logo";
pub const GAME_INFO_SELECTOR: &str = ".game-info";
pub const BGM_TOGGLE_ID: &str = "bgm-toggle";

// Elements created on demand
pub const SCREEN_DIM_CLASS: &str = "screen-dim";
pub const FX_LAYER_CLASS: &str = "fx-layer";
pub const FLASH_SCRIM_CLASS: &str = "flash-scrim";
pub const LEAF_CLASS: &str = "leaf-stream";
pub const BOLT_CLASS: &str = "lightning-bolt";

// State classes
pub const SHOW_CLASS: &str = "show";
pub const FOCUS_CLASS: &str = "focus";
pub const HOVER_CLASS: &str = "is-hover";
pub const OPEN_CLASS: &str = "open";

// CSS custom properties
pub const FLASH_X_VAR: &str = "--x"; // vw
pub const FLASH_Y_VAR: &str = "--y"; // vh

// Background music
pub const BGM_SRC: &str = "asset/bgm.mp3";
pub const BGM_VOLUME: f64 = 0.6;

#[inline]
pub fn class_selector(class: &str) -> String {
    format!(".{}", class)
}

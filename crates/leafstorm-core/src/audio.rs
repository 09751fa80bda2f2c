//! Background music toggle.
//!
//! The logical state (`enabled`) is what the user asked for. Starting
//! playback is asynchronous and may be rejected by the browser's autoplay
//! policy, so every `Play` carries an attempt number and its outcome is fed
//! back through [`AudioToggle::play_settled`]. Outcomes of superseded attempts
//! never change the logical state.

use crate::error::FxError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayAttempt(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCommand {
    /// Start or resume playback and report back with this attempt.
    Play(PlayAttempt),
    /// Pause without rewinding; logical state unchanged.
    Pause,
    /// Pause and rewind to the start.
    Stop,
}

/// Two-valued presentation of the toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indicator {
    pub muted: bool,
}

impl Indicator {
    pub fn glyph(self) -> &'static str {
        if self.muted {
            "🔇"
        } else {
            "🔊"
        }
    }

    pub fn aria_pressed(self) -> &'static str {
        if self.muted {
            "false"
        } else {
            "true"
        }
    }

    pub fn label(self) -> &'static str {
        if self.muted {
            "Play background music"
        } else {
            "Mute background music"
        }
    }
}

#[derive(Debug, Default)]
pub struct AudioToggle {
    enabled: bool,
    hidden: bool,
    attempt: u32,
}

impl AudioToggle {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn indicator(&self) -> Indicator {
        Indicator {
            muted: !self.enabled,
        }
    }

    fn next_attempt(&mut self) -> PlayAttempt {
        self.attempt = self.attempt.wrapping_add(1);
        PlayAttempt(self.attempt)
    }

    /// User pressed the button. The indicator flips immediately.
    pub fn toggle(&mut self) -> AudioCommand {
        if self.enabled {
            self.enabled = false;
            // late successes of the previous attempt must not count
            self.next_attempt();
            log::debug!("[audio] off");
            AudioCommand::Stop
        } else {
            self.enabled = true;
            log::debug!("[audio] on (optimistic)");
            AudioCommand::Play(self.next_attempt())
        }
    }

    /// Outcome of a `Play` command.
    pub fn play_settled(
        &mut self,
        attempt: PlayAttempt,
        result: Result<(), FxError>,
    ) -> Option<AudioCommand> {
        let current = attempt.0 == self.attempt;
        match result {
            Ok(()) if !self.enabled => Some(AudioCommand::Stop),
            Ok(()) if self.hidden => Some(AudioCommand::Pause),
            Ok(()) => None,
            Err(e) if current && self.enabled => {
                log::debug!("[audio] reverting to off: {}", e);
                self.enabled = false;
                None
            }
            Err(_) => None,
        }
    }

    /// Page visibility changed.
    pub fn visibility_changed(&mut self, hidden: bool) -> Option<AudioCommand> {
        if self.hidden == hidden {
            return None;
        }
        self.hidden = hidden;
        if !self.enabled {
            return None;
        }
        if hidden {
            // pausing rejects a pending play(); that rejection must be stale
            self.next_attempt();
            Some(AudioCommand::Pause)
        } else {
            Some(AudioCommand::Play(self.next_attempt()))
        }
    }
}

// Host-side tests for the background music toggle.

use leafstorm_core::*;

fn rejected() -> Result<(), FxError> {
    Err(FxError::PlaybackRejected("NotAllowedError".into()))
}

fn play_attempt(cmd: AudioCommand) -> PlayAttempt {
    match cmd {
        AudioCommand::Play(a) => a,
        other => panic!("expected Play, got {other:?}"),
    }
}

#[test]
fn starts_muted() {
    let a = AudioToggle::default();
    assert!(!a.is_enabled());
    assert_eq!(a.indicator().glyph(), "🔇");
    assert_eq!(a.indicator().aria_pressed(), "false");
}

#[test]
fn toggle_on_is_optimistic_and_reverts_on_rejection() {
    let mut a = AudioToggle::default();
    let attempt = play_attempt(a.toggle());
    assert!(a.is_enabled());
    assert_eq!(a.indicator(), Indicator { muted: false });
    assert_eq!(a.indicator().glyph(), "🔊");

    assert_eq!(a.play_settled(attempt, rejected()), None);
    assert!(!a.is_enabled());
    assert_eq!(a.indicator(), Indicator { muted: true });

    // no retry: the next toggle turns it on again
    assert!(matches!(a.toggle(), AudioCommand::Play(_)));
}

#[test]
fn toggle_off_stops_and_rewinds() {
    let mut a = AudioToggle::default();
    let attempt = play_attempt(a.toggle());
    assert_eq!(a.play_settled(attempt, Ok(())), None);
    assert_eq!(a.toggle(), AudioCommand::Stop);
    assert!(a.indicator().muted);
}

#[test]
fn hidden_tab_pauses_and_visible_resumes() {
    let mut a = AudioToggle::default();
    let attempt = play_attempt(a.toggle());
    a.play_settled(attempt, Ok(()));
    assert_eq!(a.visibility_changed(true), Some(AudioCommand::Pause));
    assert!(a.is_enabled());
    let resume = play_attempt(a.visibility_changed(false).expect("resume"));
    assert_eq!(a.play_settled(resume, Ok(())), None);
    assert!(a.is_enabled());
}

#[test]
fn toggled_off_while_hidden_does_not_resume() {
    let mut a = AudioToggle::default();
    let attempt = play_attempt(a.toggle());
    a.play_settled(attempt, Ok(()));
    assert_eq!(a.visibility_changed(true), Some(AudioCommand::Pause));
    assert_eq!(a.toggle(), AudioCommand::Stop);
    assert_eq!(a.visibility_changed(false), None);
    assert!(!a.is_enabled());
}

#[test]
fn failed_resume_reverts_to_off() {
    let mut a = AudioToggle::default();
    let attempt = play_attempt(a.toggle());
    a.play_settled(attempt, Ok(()));
    a.visibility_changed(true);
    let resume = play_attempt(a.visibility_changed(false).expect("resume"));
    a.play_settled(resume, rejected());
    assert!(!a.is_enabled());
    assert_eq!(a.indicator().aria_pressed(), "false");
}

#[test]
fn late_success_after_toggle_off_stops_again() {
    let mut a = AudioToggle::default();
    let attempt = play_attempt(a.toggle());
    assert_eq!(a.toggle(), AudioCommand::Stop);
    assert_eq!(a.play_settled(attempt, Ok(())), Some(AudioCommand::Stop));
    assert!(!a.is_enabled());
}

#[test]
fn stale_rejection_does_not_override_newer_attempt() {
    let mut a = AudioToggle::default();
    let first = play_attempt(a.toggle());
    a.visibility_changed(true);
    let second = play_attempt(a.visibility_changed(false).expect("resume"));
    assert_eq!(a.play_settled(first, rejected()), None);
    assert!(a.is_enabled());
    assert_eq!(a.play_settled(second, Ok(())), None);
    assert!(a.is_enabled());
}

#[test]
fn success_landing_while_hidden_pauses() {
    let mut a = AudioToggle::default();
    let attempt = play_attempt(a.toggle());
    assert_eq!(a.visibility_changed(true), Some(AudioCommand::Pause));
    assert_eq!(a.play_settled(attempt, Ok(())), Some(AudioCommand::Pause));
}

#[test]
fn visibility_while_off_is_ignored() {
    let mut a = AudioToggle::default();
    assert_eq!(a.visibility_changed(true), None);
    assert_eq!(a.visibility_changed(false), None);
    assert_eq!(a.visibility_changed(false), None);
}

#[test]
fn hide_during_pending_play_keeps_state_on() {
    let mut a = AudioToggle::default();
    let attempt = play_attempt(a.toggle());
    assert_eq!(a.visibility_changed(true), Some(AudioCommand::Pause));
    // pause() aborts the pending play() promise
    let aborted = Err(FxError::PlaybackRejected("AbortError".into()));
    assert_eq!(a.play_settled(attempt, aborted), None);
    assert!(a.is_enabled());
    assert!(!a.indicator().muted);
    assert!(matches!(a.visibility_changed(false), Some(AudioCommand::Play(_))));
}

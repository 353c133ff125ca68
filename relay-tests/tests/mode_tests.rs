//! Tests für die Animationen der Status-LED
//!
//! Die Endlos-Animationen laufen per `select` neben `idle()` und werden
//! danach gedroppt, genau wie im Indicator.

mod common;

use common::{Recorder, idle};
use embassy_futures::block_on;
use embassy_futures::select::select;
use relay_core::Mode;
use relay_core::modes::{
    COMMISSIONING_STEP_MS, CYCLE_STEP_MS, FAIL_BLINK_MS, RED_BLINK_MS, paint, play,
};
use relay_core::types::{BLUE, GREEN, OFF, RED};

/// Spielt `mode` für ungefähr `polls` Frames und bricht dann ab
fn play_for(mode: Mode, polls: usize) -> Recorder {
    let recorder = Recorder::new();
    let mut strip = recorder.strip();
    let mut delay = recorder.frame_delay();
    block_on(select(play(mode, &mut strip, &mut delay), idle(polls)));
    recorder
}

#[test]
fn test_red_blink_alternates_red_and_off() {
    let recorder = play_for(Mode::RedBlink, 8);
    let frames = recorder.frames();

    assert!(frames.len() >= 4);
    for (i, frame) in frames.iter().enumerate() {
        let expected = if i % 2 == 0 { RED } else { OFF };
        assert_eq!(*frame, expected, "frame {i}");
    }
    assert!(
        recorder
            .frame_delays
            .borrow()
            .iter()
            .all(|ms| *ms == RED_BLINK_MS)
    );
}

#[test]
fn test_fail_blinks_faster_than_red_blink() {
    let recorder = play_for(Mode::Fail, 8);

    assert_eq!(&recorder.frames()[..2], &[RED, OFF]);
    assert!(
        recorder
            .frame_delays
            .borrow()
            .iter()
            .all(|ms| *ms == FAIL_BLINK_MS)
    );
    assert!(FAIL_BLINK_MS < RED_BLINK_MS);
}

#[test]
fn test_commissioning_cycles_red_green_blue() {
    let recorder = play_for(Mode::CommissioningInProgress, 10);
    let frames = recorder.frames();

    assert!(frames.len() >= 6);
    assert_eq!(&frames[..6], &[RED, GREEN, BLUE, RED, GREEN, BLUE]);
    assert!(
        recorder
            .frame_delays
            .borrow()
            .iter()
            .all(|ms| *ms == COMMISSIONING_STEP_MS)
    );
}

#[test]
fn test_cycle_red_green() {
    let recorder = play_for(Mode::CycleRedGreen, 6);

    assert_eq!(&recorder.frames()[..4], &[RED, GREEN, RED, GREEN]);
    assert!(
        recorder
            .frame_delays
            .borrow()
            .iter()
            .all(|ms| *ms == CYCLE_STEP_MS)
    );
}

#[test]
fn test_success_is_single_shot() {
    let recorder = Recorder::new();
    let mut strip = recorder.strip();
    let mut delay = recorder.frame_delay();

    // Kehrt ohne Abbruch zurück
    block_on(play(Mode::Success, &mut strip, &mut delay));

    assert_eq!(recorder.frames(), vec![GREEN]);
    assert!(recorder.frame_delays.borrow().is_empty());
}

#[test]
fn test_off_paints_black_once() {
    let recorder = Recorder::new();
    let mut strip = recorder.strip();
    let mut delay = recorder.frame_delay();

    block_on(play(Mode::Off, &mut strip, &mut delay));

    assert_eq!(recorder.frames(), vec![OFF]);
}

#[test]
fn test_refresh_failure_does_not_stop_animation() {
    let recorder = Recorder::new();
    recorder.fail_next_refresh.set(true);
    let mut strip = recorder.strip();
    let mut delay = recorder.frame_delay();

    block_on(select(play(Mode::RedBlink, &mut strip, &mut delay), idle(6)));

    // Erster Frame (Rot) ging verloren, danach läuft das Blinken weiter
    let frames = recorder.frames();
    assert!(frames.len() >= 3);
    assert_eq!(&frames[..3], &[OFF, RED, OFF]);
}

#[test]
fn test_paint_writes_pixel_zero() {
    let recorder = Recorder::new();
    let mut strip = recorder.strip();

    paint(&mut strip, BLUE);
    paint(&mut strip, OFF);

    assert_eq!(recorder.frames(), vec![BLUE, OFF]);
}

//! Mocks und Helfer für die Host-Tests
//!
//! Alle Mocks schreiben in geteilte `Rc<RefCell<..>>` Logs, damit Tests
//! nach dem Übergeben an den Indicator noch hineinschauen können.

#![allow(dead_code)]

use core::future::Future;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embassy_futures::block_on;
use embassy_futures::select::{Either, select};
use embassy_futures::yield_now;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embedded_hal::digital::{self, ErrorKind, OutputPin};
use embedded_hal_async::delay::DelayNs;
use relay_core::{
    Indicator, IndicatorShared, IndicatorSnapshot, LedError, LedStrip, RelayDriver, RelayError,
    StripFactory,
};
use rgb::RGB8;

pub type Shared = IndicatorShared<NoopRawMutex>;

// ============================================================================
// Mock LED Strip
// ============================================================================

/// Aufzeichnung aller Hardware-Zugriffe
#[derive(Clone, Default)]
pub struct Recorder {
    /// Übertragene Frames (Pixel 0 bei jedem refresh)
    pub frames: Rc<RefCell<Vec<RGB8>>>,
    pub settle_delays: Rc<RefCell<Vec<u32>>>,
    pub frame_delays: Rc<RefCell<Vec<u32>>>,
    pub strips_created: Rc<Cell<u32>>,
    /// Simuliere Fehler beim nächsten refresh()
    pub fail_next_refresh: Rc<Cell<bool>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn factory(&self) -> MockStripFactory {
        MockStripFactory {
            recorder: self.clone(),
            fail: false,
        }
    }

    pub fn strip(&self) -> MockStrip {
        MockStrip {
            pixel: RGB8::default(),
            recorder: self.clone(),
        }
    }

    pub fn settle_delay(&self) -> YieldDelay {
        YieldDelay {
            log: self.settle_delays.clone(),
        }
    }

    pub fn frame_delay(&self) -> YieldDelay {
        YieldDelay {
            log: self.frame_delays.clone(),
        }
    }

    pub fn frames(&self) -> Vec<RGB8> {
        self.frames.borrow().clone()
    }

    pub fn last_frame(&self) -> Option<RGB8> {
        self.frames.borrow().last().copied()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.borrow().len()
    }
}

pub struct MockStrip {
    pixel: RGB8,
    recorder: Recorder,
}

impl LedStrip for MockStrip {
    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), LedError> {
        if index != 0 {
            return Err(LedError::InvalidIndex);
        }
        self.pixel = color;
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), LedError> {
        if self.recorder.fail_next_refresh.replace(false) {
            return Err(LedError::RefreshFailed);
        }
        self.recorder.frames.borrow_mut().push(self.pixel);
        Ok(())
    }
}

pub struct MockStripFactory {
    recorder: Recorder,
    /// Simuliere Fehler bei create()
    pub fail: bool,
}

impl StripFactory for MockStripFactory {
    type Strip = MockStrip;

    fn create(&mut self) -> Result<MockStrip, LedError> {
        if self.fail {
            return Err(LedError::CreateFailed);
        }
        self.recorder
            .strips_created
            .set(self.recorder.strips_created.get() + 1);
        Ok(self.recorder.strip())
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Zeichnet die angeforderte Dauer auf und gibt die CPU einmal ab
///
/// Es vergeht keine echte Zeit, aber jede Wartestelle bleibt ein
/// Suspend-Punkt wie mit embassy-time.
#[derive(Clone)]
pub struct YieldDelay {
    log: Rc<RefCell<Vec<u32>>>,
}

impl DelayNs for YieldDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(ns / 1_000_000);
        yield_now().await;
    }

    async fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(us / 1_000);
        yield_now().await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(ms);
        yield_now().await;
    }
}

// ============================================================================
// Mock Relay / Pin
// ============================================================================

#[derive(Default)]
pub struct MockRelay {
    pub calls: Vec<bool>,
    pub init_count: usize,
    /// Simuliere Fehler beim nächsten set()
    pub fail_next_set: bool,
}

impl MockRelay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RelayDriver for MockRelay {
    fn init(&mut self) -> Result<(), RelayError> {
        self.init_count += 1;
        Ok(())
    }

    fn set(&mut self, on: bool) -> Result<(), RelayError> {
        self.calls.push(on);
        if self.fail_next_set {
            self.fail_next_set = false;
            return Err(RelayError::SetLevelFailed);
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// GPIO-Ausgang, der alle Pegel aufzeichnet (true = High)
#[derive(Clone, Default)]
pub struct MockPin {
    pub levels: Rc<RefCell<Vec<bool>>>,
    pub fail: Rc<Cell<bool>>,
}

impl digital::ErrorType for MockPin {
    type Error = PinFault;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), PinFault> {
        if self.fail.get() {
            return Err(PinFault);
        }
        self.levels.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), PinFault> {
        if self.fail.get() {
            return Err(PinFault);
        }
        self.levels.borrow_mut().push(true);
        Ok(())
    }
}

// ============================================================================
// Async Helfer
// ============================================================================

/// Lässt den Indicator neben einem Test-Skript laufen, bis das Skript fertig ist
pub fn run_with_indicator<T>(
    shared: &Shared,
    recorder: &Recorder,
    script: impl Future<Output = T>,
) -> T {
    let indicator = Indicator::new(
        shared,
        recorder.factory(),
        recorder.settle_delay(),
        recorder.frame_delay(),
    );
    run_indicator(indicator, script)
}

pub fn run_indicator<T>(
    indicator: Indicator<'_, NoopRawMutex, MockStripFactory, YieldDelay>,
    script: impl Future<Output = T>,
) -> T {
    match block_on(select(indicator.run(), script)) {
        Either::First(_) => unreachable!("indicator never returns"),
        Either::Second(output) => output,
    }
}

/// Wartet, bis der veröffentlichte Zustand die Bedingung erfüllt
pub async fn wait_until(
    shared: &Shared,
    done: impl Fn(&IndicatorSnapshot) -> bool,
) -> IndicatorSnapshot {
    for _ in 0..10_000 {
        let snapshot = shared.snapshot();
        if done(&snapshot) {
            return snapshot;
        }
        yield_now().await;
    }
    panic!("indicator stuck in {:?}", shared.snapshot());
}

/// Gibt die CPU `polls` mal ab (Animation läuft weiter)
pub async fn idle(polls: usize) {
    for _ in 0..polls {
        yield_now().await;
    }
}

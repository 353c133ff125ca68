//! RGB Mode Controller
//!
//! Der [`Indicator`] ist der einzige Besitzer von Modus, Worker und LED Strip.
//! Alle anderen Komponenten halten nur einen [`ModeController`] und stellen
//! Modus-Wünsche in eine Queue. Dadurch werden alle Wechsel serialisiert und
//! in Ankunftsreihenfolge ausgeführt.
//!
//! Der "Worker" ist die Animations-Future des aktiven Modus. Sie läuft im
//! Indicator-Task neben dem Warten auf neue Wünsche (`select`). Abbrechen
//! heißt: Future droppen. Beendet sich die Animation selbst (`Success`),
//! wird der Worker-Slot sofort geleert.

use core::cell::Cell;
use core::pin::pin;

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, TrySendError};
use embedded_hal_async::delay::DelayNs;

use crate::modes;
use crate::traits::StripFactory;
use crate::types::{Mode, OFF};

/// Wartezeit vor dem Abbau der alten Animation (gilt auch beim ersten Modus)
pub const SETTLE_DELAY_MS: u32 = 3000;

/// Anzahl Modus-Wünsche, die während einer Settle-Phase anstehen können
pub const MODE_QUEUE_DEPTH: usize = 8;

/// Beobachtbarer Zustand des Indicators
///
/// Wird nach jeder Änderung vom Indicator veröffentlicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorSnapshot {
    /// Aktuell aktiver Modus
    pub mode: Mode,
    /// Modus des laufenden Workers (`None` = kein Worker)
    pub worker: Option<Mode>,
    /// LED Strip wurde erstellt
    pub strip_ready: bool,
    /// Gestartete Worker seit Boot
    pub started: u32,
    /// Abgebrochene Worker seit Boot
    pub cancelled: u32,
    /// Von selbst beendete Worker seit Boot
    pub completed: u32,
}

impl IndicatorSnapshot {
    const INITIAL: Self = Self {
        mode: Mode::Off,
        worker: None,
        strip_ready: false,
        started: 0,
        cancelled: 0,
        completed: 0,
    };

    pub fn active_workers(&self) -> usize {
        usize::from(self.worker.is_some())
    }
}

// ============================================================================
// Shared State (Queue + Snapshot)
// ============================================================================

/// Gemeinsamer Zustand zwischen Indicator und seinen Controllern
///
/// Muss 'static sein (StaticCell in der Firmware), damit Tasks ihn teilen.
pub struct IndicatorShared<M: RawMutex> {
    requests: Channel<M, Mode, MODE_QUEUE_DEPTH>,
    state: Mutex<M, Cell<IndicatorSnapshot>>,
}

impl<M: RawMutex> IndicatorShared<M> {
    pub const fn new() -> Self {
        Self {
            requests: Channel::new(),
            state: Mutex::new(Cell::new(IndicatorSnapshot::INITIAL)),
        }
    }

    pub fn controller(&self) -> ModeController<'_, M> {
        ModeController { shared: self }
    }

    pub fn snapshot(&self) -> IndicatorSnapshot {
        self.state.lock(|state| state.get())
    }

    /// Anzahl noch nicht verarbeiteter Modus-Wünsche
    pub fn pending_requests(&self) -> usize {
        self.requests.len()
    }

    fn publish(&self, snapshot: IndicatorSnapshot) {
        self.state.lock(|state| state.set(snapshot));
    }
}

impl<M: RawMutex> Default for IndicatorShared<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle zum Setzen des Modus
///
/// `set_mode` ist der einzige Weg, den Indicator-Zustand zu ändern.
pub struct ModeController<'a, M: RawMutex> {
    shared: &'a IndicatorShared<M>,
}

impl<M: RawMutex> Clone for ModeController<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: RawMutex> Copy for ModeController<'_, M> {}

impl<'a, M: RawMutex> ModeController<'a, M> {
    /// Stellt einen Modus-Wunsch ein, wartet falls die Queue voll ist
    pub async fn set_mode(&self, mode: Mode) {
        self.shared.requests.send(mode).await;
    }

    /// Nicht-blockierende Variante für synchrone Callbacks
    pub fn try_set_mode(&self, mode: Mode) -> Result<(), TrySendError<Mode>> {
        self.shared.requests.try_send(mode)
    }

    /// Stellt einen Modus-Wunsch ein, ohne je zu warten
    ///
    /// Ist die Queue voll, fliegt der älteste wartende Wunsch raus. Der
    /// neueste Wunsch bestimmt den Endzustand und geht nie verloren.
    /// Gibt den verdrängten Wunsch zurück.
    pub fn request_mode(&self, mode: Mode) -> Option<Mode> {
        let mut dropped = None;
        let mut mode = mode;
        loop {
            match self.shared.requests.try_send(mode) {
                Ok(()) => return dropped,
                Err(TrySendError::Full(rejected)) => {
                    mode = rejected;
                    if let Ok(oldest) = self.shared.requests.try_receive() {
                        dropped = Some(oldest);
                    }
                }
            }
        }
    }

    pub fn snapshot(&self) -> IndicatorSnapshot {
        self.shared.snapshot()
    }
}

// ============================================================================
// Indicator (Actor)
// ============================================================================

/// Besitzer von Modus, Worker und LED Strip
///
/// # Trait-basierte Abstraktion
/// - `F: StripFactory` erstellt den Strip beim ersten Modus (RMT oder Mock)
/// - `D: DelayNs` liefert Settle- und Frame-Delays (embassy-time oder Mock)
pub struct Indicator<'a, M: RawMutex, F: StripFactory, D: DelayNs> {
    shared: &'a IndicatorShared<M>,
    factory: F,
    strip: Option<F::Strip>,
    settle: D,
    frames: D,
    settle_delay_ms: u32,
    state: IndicatorSnapshot,
}

impl<'a, M, F, D> Indicator<'a, M, F, D>
where
    M: RawMutex,
    F: StripFactory,
    D: DelayNs,
{
    /// # Parameter
    /// - `settle`: Delay für die Wartezeit vor jedem Moduswechsel
    /// - `frames`: Delay für die Animations-Frames
    pub fn new(shared: &'a IndicatorShared<M>, factory: F, settle: D, frames: D) -> Self {
        Self {
            shared,
            factory,
            strip: None,
            settle,
            frames,
            settle_delay_ms: SETTLE_DELAY_MS,
            state: IndicatorSnapshot::INITIAL,
        }
    }

    pub fn with_settle_delay_ms(mut self, settle_delay_ms: u32) -> Self {
        self.settle_delay_ms = settle_delay_ms;
        self
    }

    /// Hauptschleife: wartet auf Modus-Wünsche und spielt den aktiven Modus ab
    pub async fn run(mut self) -> ! {
        info!("Indicator: running, settle delay {} ms", self.settle_delay_ms);
        self.shared.publish(self.state);

        loop {
            let next = self.next_transition().await;
            self.apply(next);
        }
    }

    /// Animiert, bis ein abweichender Modus angefordert wurde und die
    /// Settle-Zeit abgelaufen ist
    async fn next_transition(&mut self) -> Mode {
        let shared = self.shared;
        let settle_ms = self.settle_delay_ms;

        if let (Some(mode), Some(strip)) = (self.state.worker, self.strip.as_mut()) {
            let mut animation = pin!(modes::play(mode, strip, &mut self.frames));

            loop {
                match select(shared.requests.receive(), animation.as_mut()).await {
                    Either::First(next) if next == self.state.mode => {
                        debug!("Indicator: {:?} already active", next);
                    }
                    Either::First(next) => {
                        // alte Animation läuft während der Settle-Zeit weiter
                        let mut pause = pin!(self.settle.delay_ms(settle_ms));
                        if let Either::Second(()) =
                            select(pause.as_mut(), animation.as_mut()).await
                        {
                            record_completion(shared, &mut self.state, mode);
                            pause.await;
                        }
                        return next;
                    }
                    Either::Second(()) => {
                        record_completion(shared, &mut self.state, mode);
                        break;
                    }
                }
            }
        }

        loop {
            let next = shared.requests.receive().await;
            if next == self.state.mode {
                debug!("Indicator: {:?} already active", next);
                continue;
            }
            self.settle.delay_ms(settle_ms).await;
            return next;
        }
    }

    /// Bricht den alten Worker ab und startet den neuen Modus
    fn apply(&mut self, mode: Mode) {
        if let Some(previous) = self.state.worker.take() {
            info!("Indicator: cancelled {:?}", previous);
            self.state.cancelled += 1;
        }
        self.state.mode = mode;

        if mode == Mode::Off {
            if let Some(strip) = self.strip.as_mut() {
                modes::paint(strip, OFF);
            }
            info!("Indicator: LED off");
            self.shared.publish(self.state);
            return;
        }

        if self.strip.is_none() {
            match self.factory.create() {
                Ok(strip) => {
                    info!("Indicator: LED strip created");
                    self.strip = Some(strip);
                    self.state.strip_ready = true;
                }
                // Die Status-LED ist Pflicht: ohne sie kein Weiterlaufen
                Err(e) => panic!("LED strip creation failed: {:?}", e),
            }
        }

        self.state.worker = Some(mode);
        self.state.started += 1;
        info!("Indicator: started {:?}", mode);
        self.shared.publish(self.state);
    }
}

fn record_completion<M: RawMutex>(
    shared: &IndicatorShared<M>,
    state: &mut IndicatorSnapshot,
    mode: Mode,
) {
    debug!("Indicator: {:?} finished", mode);
    state.worker = None;
    state.completed += 1;
    shared.publish(*state);
}

// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod matter;
pub mod tasks;

// Re-exports von relay-core
pub use relay_core::{DeviceEvent, Mode, ModeController};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

// ============================================================================
// Type-Aliase
// ============================================================================

/// Modus-Queue + Snapshot der Status-LED
///
/// CriticalSectionRawMutex, weil die Matter Callbacks nicht aus dem
/// Embassy Executor kommen.
pub type IndicatorChannel = relay_core::IndicatorShared<CriticalSectionRawMutex>;

/// Controller-Handle für den Event Router
pub type IndicatorController = ModeController<'static, CriticalSectionRawMutex>;

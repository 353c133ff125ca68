//! Relay Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie enthält die Hardware-Traits, die Status-LED Animationen, den Mode
//! Controller und den Event Router für den Matter Relais-Knoten.

#![no_std]
#![allow(unused_macros)]

#[macro_use]
mod macros;

pub mod endpoint;
pub mod indicator;
pub mod modes;
pub mod relay;
pub mod router;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use endpoint::{EndpointBinding, create_on_off_endpoint};
pub use indicator::{
    Indicator, IndicatorShared, IndicatorSnapshot, MODE_QUEUE_DEPTH, ModeController,
    SETTLE_DELAY_MS,
};
pub use relay::PinRelay;
pub use router::EventRouter;
pub use traits::{AttributeError, LedError, LedStrip, RelayDriver, RelayError, StripFactory};
pub use types::{AttributeValue, DeviceEvent, EndpointId, IdentifyKind, Mode, UpdatePhase};

// Logging-Shim: leitet an defmt (Firmware) oder log (Host) weiter.
// Ohne Feature werden die Argumente nur ausgewertet, es wird nichts geloggt.

#[cfg(feature = "defmt")]
macro_rules! relay_log {
    (debug, $($arg:expr),* $(,)?) => { defmt::debug!($($arg),*) };
    (info, $($arg:expr),* $(,)?) => { defmt::info!($($arg),*) };
    (warn, $($arg:expr),* $(,)?) => { defmt::warn!($($arg),*) };
    (error, $($arg:expr),* $(,)?) => { defmt::error!($($arg),*) };
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! relay_log {
    (debug, $($arg:expr),* $(,)?) => { log::debug!($($arg),*) };
    (info, $($arg:expr),* $(,)?) => { log::info!($($arg),*) };
    (warn, $($arg:expr),* $(,)?) => { log::warn!($($arg),*) };
    (error, $($arg:expr),* $(,)?) => { log::error!($($arg),*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! relay_log {
    ($level:ident, $($arg:expr),* $(,)?) => {{ $( let _ = &$arg; )* }};
}

macro_rules! debug {
    ($($arg:expr),* $(,)?) => (relay_log!(debug, $($arg),*));
}

macro_rules! info {
    ($($arg:expr),* $(,)?) => (relay_log!(info, $($arg),*));
}

macro_rules! warn {
    ($($arg:expr),* $(,)?) => (relay_log!(warn, $($arg),*));
}

macro_rules! error {
    ($($arg:expr),* $(,)?) => (relay_log!(error, $($arg),*));
}

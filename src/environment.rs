//! Process environment side effects derived from [`Settings`].

use std::env;

use tracing::info;

use crate::Settings;

/// Variable the C library and most runtimes read the local zone from.
pub const TZ_VAR: &str = "TZ";

/// Export the configured timezone through `TZ`.
///
/// Returns the zone name that was applied, or `None` when no timezone is
/// enabled and the environment was left untouched.
///
/// # Safety
///
/// Mutates the process environment. The caller must ensure no other thread
/// reads or writes environment variables concurrently, which in practice
/// means calling this during startup before any threads are spawned.
pub unsafe fn apply_timezone(settings: &Settings) -> Option<&'static str> {
    let zone = settings.locale.timezone.as_ref()?;
    // SAFETY: upheld by the caller per this function's contract.
    unsafe {
        env::set_var(TZ_VAR, zone.name());
    }
    info!(timezone = zone.name(), offset_minutes = zone.offset_minutes(), "applied TZ");
    Some(zone.name())
}

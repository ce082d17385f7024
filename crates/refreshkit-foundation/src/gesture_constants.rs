//! Shared gesture constants for consistent touch/pointer handling.
//!
//! These values are in logical pixels. For very high-density touch screens,
//! consider scaling by the device's DPI factor.

/// Accumulated vertical drag distance past which a completed pan gesture
/// commits a refresh.
///
/// The running total is signed: downward movement increases it, upward
/// movement decreases it, so a drag that reverses back past its origin
/// will not commit when released.
pub const REFRESH_DISTANCE_THRESHOLD: f32 = 50.0;

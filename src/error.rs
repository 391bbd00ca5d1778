//! Unified error types for the coffee maker controller.
//!
//! A single `Error` enum that every subsystem converts into, so callers
//! match on one type.  All variants are `Copy` so they can be stored in the
//! brew state and the event queue without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level controller error
// ---------------------------------------------------------------------------

/// Every fallible operation in the controller funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A brew precondition was violated.
    Brew(BrewFault),
    /// A pot exchange was rejected.
    Pot(PotError),
    /// Configuration is invalid or could not be parsed.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brew(e) => write!(f, "brew: {e}"),
            Self::Pot(e) => write!(f, "pot: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Brew faults
// ---------------------------------------------------------------------------

/// Reasons a brew cycle refuses to start or stops part-way.
///
/// Every fault except `AlreadyBrewing` leaves the controller in
/// `BrewState::Faulted` with `brew_in_progress() == false`, ready for the
/// caller to remedy the condition and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrewFault {
    /// `brew_coffee` was called while a brew session is still running.
    AlreadyBrewing,
    /// The reservoir holds no water above its baseline.
    NoWater,
    /// The plate is empty once the water has boiled.
    NoPot,
    /// The grounds hopper holds no coffee above its baseline.
    NoCoffee,
}

impl fmt::Display for BrewFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyBrewing => write!(f, "brew already in progress"),
            Self::NoWater => write!(f, "reservoir is empty"),
            Self::NoPot => write!(f, "no pot on the plate"),
            Self::NoCoffee => write!(f, "grounds hopper is empty"),
        }
    }
}

impl From<BrewFault> for Error {
    fn from(e: BrewFault) -> Self {
        Self::Brew(e)
    }
}

// ---------------------------------------------------------------------------
// Pot exchange errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PotError {
    /// `take_pot` with nothing on the plate.
    NoPotToTake,
    /// `put_pot` while a pot is already held.
    PotAlreadyPresent,
}

impl fmt::Display for PotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPotToTake => write!(f, "no pot to take"),
            Self::PotAlreadyPresent => write!(f, "a pot is already on the plate"),
        }
    }
}

impl From<PotError> for Error {
    fn from(e: PotError) -> Self {
        Self::Pot(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Controller-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

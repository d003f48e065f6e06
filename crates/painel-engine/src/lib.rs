//! Pure scheduling core for the panel: recurrence expansion, message
//! template rendering, and phone number validation.
//!
//! Everything in this crate is a pure function over immutable inputs.
//! The only ambient input, the current wall-clock time, is injected
//! through the [`clock::Clock`] capability so callers (and tests) decide
//! what "now" means.

pub mod clock;
pub mod phone;
pub mod recurrence;
pub mod template;

// Shared helpers

pub mod icons;

pub use icons::{ChargeStatus, Glyphs};

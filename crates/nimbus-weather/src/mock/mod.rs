//! Synthetic weather and air-quality data.
//!
//! Payloads here are shaped exactly like the live upstream responses but
//! are generated locally, with no network dependency, for development and
//! demo use. Generation is randomized but internally consistent: fields
//! that logically depend on one another are derived from a single draw.

pub mod air;
pub mod city;
pub mod indices;
pub mod weather;

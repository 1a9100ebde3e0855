//! Window math and the series generator.
//!
//! Modules include:
//! - `window`: jittered window starts, window ends, and evenly spaced timestamps
//! - `generate`: validation plus the per-label sampling loop
/// The generator: validation plus the per-label sampling loop.
pub mod generate;
/// Jitter, window-end, and evenly-spaced timestamp helpers.
pub mod window;

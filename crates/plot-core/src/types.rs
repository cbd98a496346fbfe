// File: crates/plot-core/src/types.rs
// Summary: Shared sizes and per-pad margins.

/// Default canvas width in pixels.
pub const WIDTH: i32 = 1024;
/// Default canvas height in pixels.
pub const HEIGHT: i32 = 640;

/// Margins between a pad's edge and its plot frame, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(64, 20, 32, 48)
    }
}

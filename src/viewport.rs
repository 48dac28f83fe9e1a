//! Container-size observation.
//!
//! The host's windowing system delivers dimension changes; the viewport
//! records the latest one. Observation is total and idempotent (last
//! write wins), and the field reinitializes downstream state on every
//! signal, not only on a dimension delta.

/// Pixel dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Tracks the latest observed container size.
#[derive(Debug, Default)]
pub struct Viewport {
    size: Extent,
}

impl Viewport {
    pub fn new() -> Self {
        Self { size: Extent::ZERO }
    }

    /// Record a dimension signal and return the size the drawing surface
    /// should back. Never fails; zero dimensions are valid.
    pub fn observe(&mut self, width: u32, height: u32) -> Extent {
        self.size = Extent { width, height };
        self.size
    }

    pub fn size(&self) -> Extent {
        self.size
    }
}

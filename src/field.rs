//! Host-facing facade tying the field together.
//!
//! `ParticleField` owns the pool, the canvas, the viewport and the
//! scheduler as one explicit state object; nothing ambient, so each
//! piece stays unit-testable on its own. The host mounts it, forwards
//! resize signals and frame callbacks, and unmounts with `stop()`.

use crate::canvas::Canvas;
use crate::pool::ParticlePool;
use crate::render;
use crate::scheduler::{FrameHandle, Scheduler};
use crate::viewport::{Extent, Viewport};

pub struct ParticleField {
    pool: ParticlePool,
    canvas: Canvas,
    viewport: Viewport,
    scheduler: Scheduler,
}

impl ParticleField {
    /// Mount for a container of the given pixel dimensions. Zero on
    /// either axis is valid (empty pool, inert canvas).
    pub fn new(width: u32, height: u32) -> Self {
        let mut viewport = Viewport::new();
        let size = viewport.observe(width, height);
        Self {
            pool: ParticlePool::new(size.width, size.height),
            canvas: Canvas::new(size.width, size.height),
            viewport,
            scheduler: Scheduler::new(),
        }
    }

    /// Like [`ParticleField::new`] with a fixed pool seed, for tests.
    pub fn seeded(width: u32, height: u32, seed: u64) -> Self {
        let mut field = Self::new(width, height);
        field.pool = ParticlePool::seeded(width, height, seed);
        field
    }

    /// Begin the frame loop; returns the first frame handle to schedule.
    /// A no-op (`None`) when already running.
    pub fn start(&mut self) -> Option<FrameHandle> {
        self.scheduler.start()
    }

    /// Halt the frame loop. After this returns, `advance` rejects every
    /// outstanding handle, so no further surface mutation occurs.
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Resize signal from the host.
    ///
    /// Unconditional: the canvas backing store is reallocated and the
    /// pool respawned even when the dimensions match the previous
    /// observation, so bursts of identical signals stay harmless.
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        let size = self.viewport.observe(width, height);
        self.canvas.resize(size.width, size.height);
        self.pool.resize(size.width, size.height);
    }

    /// One frame callback: step the pool, render into the canvas, and
    /// return the next handle to schedule.
    ///
    /// Gated by the scheduler: a stale handle, or any handle after
    /// `stop()`, mutates nothing and returns `None`.
    pub fn advance(&mut self, handle: FrameHandle) -> Option<FrameHandle> {
        let next = self.scheduler.tick(handle)?;
        self.pool.step();
        render::render(&self.pool, &mut self.canvas);
        Some(next)
    }

    /// The frame most recently rendered by `advance`.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    /// The latest observed container size.
    pub fn extent(&self) -> Extent {
        self.viewport.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_sizes_pool_and_canvas() {
        let field = ParticleField::seeded(400, 400, 11);
        assert_eq!(field.pool().len(), 10);
        assert_eq!(field.canvas().width(), 400);
        assert_eq!(field.extent(), Extent { width: 400, height: 400 });
    }

    #[test]
    fn test_advance_steps_and_renders() {
        let mut field = ParticleField::seeded(400, 400, 11);
        let before = field.pool().particles().to_vec();
        let h0 = field.start().unwrap();
        let h1 = field.advance(h0).unwrap();
        assert_ne!(field.pool().particles(), &before[..]);
        // The canvas now holds the background wash at minimum.
        assert!(field.canvas().pixel(0, 0).a == 255);
        assert!(field.advance(h1).is_some());
    }

    #[test]
    fn test_stop_freezes_the_pool() {
        let mut field = ParticleField::seeded(400, 400, 11);
        let h0 = field.start().unwrap();
        let h1 = field.advance(h0).unwrap();
        field.stop();

        let frozen = field.pool().particles().to_vec();
        for handle in [h0, h1] {
            assert_eq!(field.advance(handle), None);
        }
        assert_eq!(field.pool().particles(), &frozen[..]);
    }

    #[test]
    fn test_stale_handle_mutates_nothing() {
        let mut field = ParticleField::seeded(400, 400, 11);
        let h0 = field.start().unwrap();
        let _h1 = field.advance(h0).unwrap();
        let snapshot = field.pool().particles().to_vec();
        // Duplicate delivery of an already-consumed registration.
        assert_eq!(field.advance(h0), None);
        assert_eq!(field.pool().particles(), &snapshot[..]);
    }

    #[test]
    fn test_resize_rebuilds_both_surfaces() {
        let mut field = ParticleField::seeded(400, 400, 11);
        field.handle_resize(800, 400);
        assert_eq!(field.pool().len(), 20);
        assert_eq!(field.canvas().width(), 800);

        field.handle_resize(0, 0);
        assert_eq!(field.pool().len(), 0);
        assert_eq!(field.canvas().pixels().len(), 0);
    }

    #[test]
    fn test_degenerate_mount_still_runs() {
        let mut field = ParticleField::new(0, 0);
        let h0 = field.start().unwrap();
        // The loop runs harmlessly over an empty pool.
        let h1 = field.advance(h0).unwrap();
        assert!(field.advance(h1).is_some());
        assert!(field.pool().is_empty());
    }
}

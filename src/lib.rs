//! # driftfield
//!
//! An ambient particle field with proximity links: a continuously
//! running simulation-and-rendering loop painting drifting, flickering
//! dots onto a resizable surface, with a translucent line between every
//! pair of particles that comes close enough.
//!
//! The simulation and rasterization run entirely on the CPU; the GPU is
//! only used to blit the finished frame into a window.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() {
//!     if let Err(err) = driftfield::window::run() {
//!         eprintln!("driftfield: {err}");
//!     }
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Particles
//!
//! Each particle carries a position, a fixed drift velocity and radius,
//! a flicker phase, and a visual category (`Primary` or `Accent`). The
//! pool holds `floor(width * height / 16000)` of them and is rebuilt
//! from scratch on every resize signal.
//!
//! ### Links
//!
//! Every frame, each pair of particles closer than 90 px gets a line
//! whose opacity fades linearly with distance. Links are derived,
//! never stored.
//!
//! ### Lifecycle
//!
//! The [`Scheduler`] is an explicit `Idle`/`Running` state machine with
//! per-frame registration handles: `start()` issues the first handle,
//! every accepted tick issues the next, and `stop()` invalidates the
//! pending one so late callbacks mutate nothing.
//!
//! ## Driving it yourself
//!
//! [`ParticleField`] is the host-facing object; the built-in
//! [`window::run`] drives it with winit, but any host can:
//!
//! ```
//! use driftfield::ParticleField;
//!
//! let mut field = ParticleField::new(400, 400);
//! let mut handle = field.start().unwrap();
//! for _ in 0..60 {
//!     handle = field.advance(handle).unwrap();
//! }
//! field.stop();
//! let frame = field.canvas(); // RGBA8 pixels of the last frame
//! # let _ = frame;
//! ```

pub mod canvas;
pub mod connections;
pub mod error;
pub mod field;
pub mod particle;
pub mod pool;
pub mod render;
pub mod scheduler;
pub mod viewport;
pub mod window;

pub use canvas::{Canvas, Rgba, Rgba8, Surface};
pub use connections::{links, Connection, LINK_ALPHA, LINK_RADIUS};
pub use error::{GpuError, RunError, SnapshotError};
pub use field::ParticleField;
pub use glam::Vec2;
pub use particle::{Particle, ParticleKind, PHASE_STEP};
pub use pool::{ParticlePool, DENSITY_DIVISOR};
pub use scheduler::{FrameHandle, Scheduler};
pub use viewport::{Extent, Viewport};

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::canvas::{Canvas, Rgba, Surface};
    pub use crate::connections::{links, Connection};
    pub use crate::field::ParticleField;
    pub use crate::particle::{Particle, ParticleKind};
    pub use crate::pool::ParticlePool;
    pub use crate::scheduler::{FrameHandle, Scheduler};
    pub use crate::viewport::{Extent, Viewport};
    pub use crate::Vec2;
}

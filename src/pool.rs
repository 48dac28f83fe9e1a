//! Particle pool: ownership, (re)initialization and the per-frame step.
//!
//! The pool is the only mutable state of the simulation. It is rebuilt
//! from scratch on every resize signal; old particles are never carried
//! over or rescaled.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::debug;

use crate::particle::Particle;

/// Surface area per particle, in square pixels. The pool size is
/// `floor(width * height / DENSITY_DIVISOR)`, which bounds the cost of
/// the quadratic link scan: denser surfaces get proportionally more
/// particles, and that quadratic ceiling is the accepted trade-off.
pub const DENSITY_DIVISOR: u64 = 16_000;

/// Owns the current set of particles and the surface bounds they live in.
#[derive(Debug, Clone)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: SmallRng,
}

impl ParticlePool {
    /// Create a pool for a `width` x `height` surface.
    ///
    /// Always succeeds: `width * height < 16000` (including zero on
    /// either axis) yields a valid empty pool.
    pub fn new(width: u32, height: u32) -> Self {
        Self::seeded(width, height, entropy_seed())
    }

    /// Like [`ParticlePool::new`] with a caller-supplied RNG seed, for
    /// repeatable tests.
    pub fn seeded(width: u32, height: u32, seed: u64) -> Self {
        let mut pool = Self {
            particles: Vec::new(),
            width: width as f32,
            height: height as f32,
            rng: SmallRng::seed_from_u64(seed),
        };
        pool.respawn(width, height);
        pool
    }

    /// Number of particles the formula prescribes for a surface.
    pub fn target_count(width: u32, height: u32) -> usize {
        (width as u64 * height as u64 / DENSITY_DIVISOR) as usize
    }

    /// Discard every particle and respawn for the given surface.
    ///
    /// Unconditional: the pool is rebuilt even when the dimensions match
    /// the previous ones, so a burst of identical resize signals is
    /// harmless but each one produces fresh particle identities.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.respawn(width, height);
    }

    fn respawn(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
        let count = Self::target_count(width, height);

        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles
                .push(Particle::spawn(&mut self.rng, self.width, self.height));
        }

        debug!(width, height, count, "particle pool respawned");
    }

    /// Advance every particle by one frame.
    ///
    /// Pure over pool state: no allocation, no RNG, deterministic given
    /// the same particles and bounds.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.advance(self.width, self.height);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Surface width the particles wrap against.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Surface height the particles wrap against.
    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Seed drawn from the wall clock; reproducibility of the field is a
/// non-goal, tests go through [`ParticlePool::seeded`].
fn entropy_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::PHASE_STEP;

    #[test]
    fn test_pool_size_formula() {
        assert_eq!(ParticlePool::new(400, 400).len(), 10);
        assert_eq!(ParticlePool::new(1280, 720).len(), 57);
        // Below the divisor the pool is valid but empty.
        assert_eq!(ParticlePool::new(100, 100).len(), 0);
        assert_eq!(ParticlePool::new(0, 0).len(), 0);
        assert_eq!(ParticlePool::new(0, 4000).len(), 0);
    }

    #[test]
    fn test_step_is_deterministic() {
        let mut a = ParticlePool::seeded(400, 400, 3);
        let mut b = a.clone();
        for _ in 0..10 {
            a.step();
            b.step();
        }
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_step_advances_phase() {
        let mut pool = ParticlePool::seeded(400, 400, 3);
        let before: Vec<f32> = pool.particles().iter().map(|p| p.phase).collect();
        pool.step();
        for (p, old) in pool.particles().iter().zip(before) {
            assert!((p.phase - old - PHASE_STEP).abs() < 1e-6);
        }
    }

    #[test]
    fn test_step_on_empty_pool() {
        let mut pool = ParticlePool::new(0, 0);
        pool.step();
        assert!(pool.is_empty());
    }

    #[test]
    fn test_resize_discards_identities() {
        let mut pool = ParticlePool::seeded(400, 400, 3);
        let before = pool.particles().to_vec();

        // Same dimensions still respawn: reinitialization is keyed on the
        // signal, not on a dimension delta.
        pool.resize(400, 400);
        assert_eq!(pool.len(), 10);
        assert_ne!(pool.particles(), &before[..]);
    }

    #[test]
    fn test_resize_to_degenerate_surface() {
        let mut pool = ParticlePool::seeded(400, 400, 3);
        pool.resize(0, 0);
        assert!(pool.is_empty());
        pool.resize(400, 400);
        assert_eq!(pool.len(), 10);
    }
}

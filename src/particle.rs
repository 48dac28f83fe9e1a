//! Particle records and spawn randomization.
//!
//! A particle is a value owned exclusively by the pool. `radius`,
//! `velocity` and `kind` are fixed at spawn; `position` and `phase`
//! advance once per frame.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Phase advance per simulation step (constant virtual step, not
/// wall-clock-scaled).
pub const PHASE_STEP: f32 = 0.004;

/// Smallest spawn radius, in pixels.
pub const MIN_RADIUS: f32 = 0.2;
/// Largest spawn radius (exclusive), in pixels.
pub const MAX_RADIUS: f32 = 1.6;
/// Per-axis speed bound (exclusive), in pixels per frame.
pub const MAX_SPEED: f32 = 0.1;

/// Visual category of a particle, chosen once at spawn with 60/40 odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Primary,
    Accent,
}

/// A single animated point of the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Constrained to `[0, width) x [0, height)` of the surface.
    pub position: Vec2,
    /// Per-axis drift in `[-0.1, 0.1)` pixels per frame.
    pub velocity: Vec2,
    /// Dot radius in `[0.2, 1.6)` pixels.
    pub radius: f32,
    /// Flicker phase; unbounded, only ever consumed through `sin`.
    pub phase: f32,
    pub kind: ParticleKind,
}

impl Particle {
    /// Spawn one particle somewhere on a `width` x `height` surface.
    ///
    /// Callers must only spawn onto a surface with positive area; the
    /// pool never spawns when either dimension is zero.
    pub fn spawn(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);

        let kind = if rng.gen::<f32>() < 0.6 {
            ParticleKind::Primary
        } else {
            ParticleKind::Accent
        };

        Self {
            position: Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
            velocity: Vec2::new(
                rng.gen_range(-MAX_SPEED..MAX_SPEED),
                rng.gen_range(-MAX_SPEED..MAX_SPEED),
            ),
            radius: rng.gen_range(MIN_RADIUS..MAX_RADIUS),
            phase: rng.gen_range(0.0..TAU),
            kind,
        }
    }

    /// Advance one frame: bump the phase, integrate the velocity, and
    /// wrap each axis independently against the surface bounds.
    pub fn advance(&mut self, width: f32, height: f32) {
        self.phase += PHASE_STEP;
        self.position += self.velocity;
        self.position.x = wrap(self.position.x, width);
        self.position.y = wrap(self.position.y, height);
    }
}

/// Wrap `value` into `[0, bound)`. Crossing an edge reappears at the
/// opposite edge; this never clamps.
pub(crate) fn wrap(value: f32, bound: f32) -> f32 {
    let wrapped = value.rem_euclid(bound);
    // rem_euclid can round up to exactly `bound` for tiny negatives.
    if wrapped >= bound {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_ranges() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = Particle::spawn(&mut rng, 640.0, 480.0);
            assert!(p.position.x >= 0.0 && p.position.x < 640.0);
            assert!(p.position.y >= 0.0 && p.position.y < 480.0);
            assert!(p.radius >= MIN_RADIUS && p.radius < MAX_RADIUS);
            assert!(p.velocity.x >= -MAX_SPEED && p.velocity.x < MAX_SPEED);
            assert!(p.velocity.y >= -MAX_SPEED && p.velocity.y < MAX_SPEED);
            assert!(p.phase >= 0.0 && p.phase < TAU);
        }
    }

    #[test]
    fn test_advance_bumps_phase() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut p = Particle::spawn(&mut rng, 100.0, 100.0);
        let before = p.phase;
        p.advance(100.0, 100.0);
        assert!((p.phase - before - PHASE_STEP).abs() < 1e-6);
    }

    #[test]
    fn test_advance_keeps_immutable_fields() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut p = Particle::spawn(&mut rng, 100.0, 100.0);
        let (radius, velocity, kind) = (p.radius, p.velocity, p.kind);
        for _ in 0..50 {
            p.advance(100.0, 100.0);
        }
        assert_eq!(p.radius, radius);
        assert_eq!(p.velocity, velocity);
        assert_eq!(p.kind, kind);
    }

    #[test]
    fn test_wrap_crosses_edges() {
        assert!((wrap(-0.05, 100.0) - 99.95).abs() < 1e-4);
        assert!((wrap(100.05, 100.0) - 0.05).abs() < 1e-4);
        assert_eq!(wrap(0.0, 100.0), 0.0);
        assert_eq!(wrap(50.0, 100.0), 50.0);
    }

    #[test]
    fn test_wrap_never_returns_bound() {
        // Tiny negatives can round back up to the bound itself.
        let w = wrap(-1.0e-9, 100.0);
        assert!(w >= 0.0 && w < 100.0);
    }
}

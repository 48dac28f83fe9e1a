//! Proximity links between particle pairs.
//!
//! A link is a transient relation recomputed every frame, never stored:
//! the evaluator yields a lazy sequence of descriptors the renderer
//! consumes immediately.

use glam::Vec2;

use crate::particle::Particle;

/// Pair distance below which a link is drawn, in pixels.
pub const LINK_RADIUS: f32 = 90.0;

/// Link opacity as the pair distance approaches zero; fades linearly to
/// nothing at [`LINK_RADIUS`].
pub const LINK_ALPHA: f32 = 0.07;

/// One link between two particle positions for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub a: Vec2,
    pub b: Vec2,
    pub alpha: f32,
}

/// Scan every unordered pair `(i, j)`, `i < j`, and yield a link for the
/// ones closer than [`LINK_RADIUS`].
///
/// O(n^2) by design: the pool size is bounded by the density divisor, so
/// the quadratic scan is the accepted ceiling and a spatial index would
/// be overkill here.
pub fn links(particles: &[Particle]) -> impl Iterator<Item = Connection> + '_ {
    particles.iter().enumerate().flat_map(move |(i, a)| {
        particles[i + 1..].iter().filter_map(move |b| {
            let distance = a.position.distance(b.position);
            (distance < LINK_RADIUS).then(|| Connection {
                a: a.position,
                b: b.position,
                alpha: LINK_ALPHA * (1.0 - distance / LINK_RADIUS),
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::ParticleKind;

    fn at(x: f32, y: f32) -> Particle {
        Particle {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            radius: 1.0,
            phase: 0.0,
            kind: ParticleKind::Primary,
        }
    }

    #[test]
    fn test_link_inside_radius() {
        let particles = [at(0.0, 0.0), at(89.9, 0.0)];
        let found: Vec<Connection> = links(&particles).collect();
        assert_eq!(found.len(), 1);
        let expected = 0.07 * (1.0 - 89.9 / 90.0);
        assert!((found[0].alpha - expected).abs() < 1e-6);
        assert!((found[0].alpha - 0.0000778).abs() < 1e-5);
    }

    #[test]
    fn test_no_link_at_or_past_radius() {
        let particles = [at(0.0, 0.0), at(90.0, 0.0)];
        assert_eq!(links(&particles).count(), 0);
        let particles = [at(0.0, 0.0), at(90.1, 0.0)];
        assert_eq!(links(&particles).count(), 0);
    }

    #[test]
    fn test_alpha_decreases_with_distance() {
        let mut last = f32::INFINITY;
        for d in [0.0, 10.0, 45.0, 80.0, 89.99] {
            let particles = [at(0.0, 0.0), at(d, 0.0)];
            let link = links(&particles).next().unwrap();
            assert!(link.alpha < last, "alpha not decreasing at d={}", d);
            assert!(link.alpha > 0.0);
            last = link.alpha;
        }
    }

    #[test]
    fn test_each_pair_visited_once() {
        // Three mutually close particles: exactly the 3 unordered pairs.
        let particles = [at(0.0, 0.0), at(10.0, 0.0), at(0.0, 10.0)];
        assert_eq!(links(&particles).count(), 3);
    }

    #[test]
    fn test_empty_and_singleton() {
        assert_eq!(links(&[]).count(), 0);
        assert_eq!(links(&[at(5.0, 5.0)]).count(), 0);
    }
}

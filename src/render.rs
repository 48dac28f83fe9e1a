//! Frame rendering: clear, particles, links.
//!
//! One frame is a pure read of the pool painted onto a [`Surface`]:
//! clear the whole surface, fill a flickering dot per particle, then
//! stroke every proximity link on top.

use crate::canvas::{Rgba, Surface};
use crate::connections::links;
use crate::particle::ParticleKind;
use crate::pool::ParticlePool;

/// Near-black green wash behind the field.
pub const BACKGROUND: Rgba = Rgba::new(0.012, 0.043, 0.031, 1.0);
/// Primary particle tint (emerald).
pub const PRIMARY: Rgba = Rgba::new(0.204, 0.827, 0.6, 1.0);
/// Accent particle tint (pale emerald).
pub const ACCENT: Rgba = Rgba::new(0.655, 0.906, 0.718, 1.0);
/// Link stroke tint; the per-link alpha comes from the evaluator.
pub const LINK: Rgba = Rgba::new(0.42, 0.88, 0.69, 1.0);

/// Stroke width of a link line, in pixels.
pub const LINK_WIDTH: f32 = 0.5;

/// Peak fill opacity for Primary particles.
const PRIMARY_OPACITY: f32 = 0.6;
/// Accent peak opacity, dimmed to 70% of Primary's scale.
const ACCENT_OPACITY: f32 = 0.42;

/// Phase-driven flicker factor in `0..=1`.
fn flicker(phase: f32) -> f32 {
    (phase.sin() * 0.4 + 0.5).clamp(0.0, 1.0)
}

/// Paint one frame of the pool onto `surface`.
///
/// A zero-particle pool produces a cleared surface and nothing else.
pub fn render(pool: &ParticlePool, surface: &mut impl Surface) {
    surface.clear(BACKGROUND);

    for particle in pool.particles() {
        let (tint, opacity) = match particle.kind {
            ParticleKind::Primary => (PRIMARY, PRIMARY_OPACITY),
            ParticleKind::Accent => (ACCENT, ACCENT_OPACITY),
        };
        surface.fill_circle(
            particle.position,
            particle.radius,
            tint.with_alpha(flicker(particle.phase) * opacity),
        );
    }

    for link in links(pool.particles()) {
        surface.stroke_line(link.a, link.b, LINK_WIDTH, LINK.with_alpha(link.alpha));
    }
}

//! Hover particles on the stat cards

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const PARTICLES_PER_BURST: usize = 5;
pub const RISE_PX: f64 = 50.0;
pub const DURATION_MS: u64 = 1_000;
pub const SIZE_PX: f64 = 4.0;
/// Particles shrink from full size to this scale while rising
pub const END_SCALE: f64 = 0.0;
pub const COLOR: &str = "var(--accent-green)";

/// Card bounding box in viewport pixels (`getBoundingClientRect`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
}

/// A set of particles that float up and fade, then are removed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleBurst {
    pub particles: Vec<Particle>,
    pub rise_px: f64,
    pub end_scale: f64,
    pub duration_ms: u64,
}

impl ParticleBurst {
    pub fn spawn<R: Rng + ?Sized>(rect: CardRect, rng: &mut R) -> Self {
        let particles = (0..PARTICLES_PER_BURST)
            .map(|_| Particle {
                left: rect.left + rng.r#gen::<f64>() * rect.width.max(0.0),
                top: rect.top + rng.r#gen::<f64>() * rect.height.max(0.0),
            })
            .collect();
        Self {
            particles,
            rise_px: RISE_PX,
            end_scale: END_SCALE,
            duration_ms: DURATION_MS,
        }
    }
}

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::{CLUSTER_SIZE, HEIGHT_SHIFT, SPREAD};
use crate::locator::{TermMatch, locate};
use crate::vec3::Vec3;

/// Instruction for one cube: where it sits, how it is turned, what color it
/// takes. Created in batches and never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Vec3,
    pub color: Color,
}

/// Generate the CLUSTER_SIZE placements for one matched occurrence.
///
/// x and z jitter uniformly within [-SPREAD/2, +SPREAD/2). y is the match
/// height shifted down by HEIGHT_SHIFT and shared by the whole cluster.
/// Rotations are independent draws in [0, 2π) with no semantic meaning.
pub fn cluster(m: &TermMatch, color: Color, rng: &mut impl Rng) -> Vec<Placement> {
    let tau = std::f64::consts::TAU;
    (0..CLUSTER_SIZE)
        .map(|_| Placement {
            position: Vec3::new(
                (rng.random::<f64>() - 0.5) * SPREAD,
                m.height - HEIGHT_SHIFT,
                (rng.random::<f64>() - 0.5) * SPREAD,
            ),
            rotation: Vec3::new(
                rng.random::<f64>() * tau,
                rng.random::<f64>() * tau,
                rng.random::<f64>() * tau,
            ),
            color,
        })
        .collect()
}

/// Locate every exact occurrence of `term` and emit one cluster per match.
///
/// Returns exactly `CLUSTER_SIZE × matches` placements in match order; zero
/// matches (or an empty token stream) yield an empty batch rather than an
/// error.
pub fn place_term(
    tokens: &[String],
    term: &str,
    color: Color,
    rng: &mut impl Rng,
) -> Vec<Placement> {
    let mut placements = Vec::new();
    for m in locate(tokens, term) {
        placements.extend(cluster(&m, color, rng));
    }
    placements
}

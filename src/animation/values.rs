use glam::Vec3;
use smallvec::SmallVec;

use crate::resources::Color;

/// Upper bound on inline morph targets; larger sets spill to the heap.
pub const MAX_MORPH_TARGETS: usize = 8;

pub trait Interpolatable: Clone {
    fn interpolate_linear(start: &Self, end: &Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: &Self, end: &Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: &Self, end: &Self, t: f32) -> Self {
        start.lerp(*end, t)
    }
}

impl Interpolatable for Color {
    fn interpolate_linear(start: &Self, end: &Self, t: f32) -> Self {
        start.lerp(*end, t)
    }
}

/// Morph target influences, one weight per target.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MorphWeights {
    pub weights: SmallVec<[f32; MAX_MORPH_TARGETS]>,
}

impl MorphWeights {
    #[must_use]
    pub fn zeros(count: usize) -> Self {
        Self {
            weights: SmallVec::from_elem(0.0, count),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.weights
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.weights.iter().all(|w| w.is_finite())
    }
}

impl From<&[f32]> for MorphWeights {
    fn from(weights: &[f32]) -> Self {
        Self {
            weights: SmallVec::from_slice(weights),
        }
    }
}

impl<const N: usize> From<[f32; N]> for MorphWeights {
    fn from(weights: [f32; N]) -> Self {
        Self::from(&weights[..])
    }
}

impl From<Vec<f32>> for MorphWeights {
    fn from(weights: Vec<f32>) -> Self {
        Self {
            weights: SmallVec::from_vec(weights),
        }
    }
}

impl Interpolatable for MorphWeights {
    /// Mismatched keyframe lengths produce the shorter length; the
    /// animator's shape check rejects such results.
    fn interpolate_linear(start: &Self, end: &Self, t: f32) -> Self {
        let weights = start
            .weights
            .iter()
            .zip(&end.weights)
            .map(|(a, b)| a + (b - a) * t)
            .collect();
        Self { weights }
    }
}

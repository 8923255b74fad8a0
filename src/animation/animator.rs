//! Scroll Animator
//!
//! Maps the current scroll progress to the per-frame animation outputs by
//! sampling the three tables of a [`ScrollTimeline`].
//!
//! # Failure model
//!
//! Sampling is split in two layers:
//!
//! - [`ScrollAnimator::try_sample`] and the per-output `try_sample_*`
//!   methods return a [`Result`] and never touch the cached outputs.
//! - [`ScrollAnimator::sample`] is the per-frame entry point. Each output
//!   that fails validation keeps its last valid value and the failure is
//!   logged; the call itself cannot fail.
//!
//! # Frame coherence
//!
//! Consecutive frames usually sample nearby progress values, so each table
//! keeps a [`KeyframeCursor`] and bracketing is O(1) in the common case.

use glam::Vec3;

use crate::animation::progress::sanitize_progress;
use crate::animation::timeline::{CAMERA_TRACK, COLOR_TRACK, MORPH_TRACK, ScrollTimeline};
use crate::animation::tracks::KeyframeCursor;
use crate::animation::values::MorphWeights;
use crate::errors::{Error, Result};
use crate::resources::Color;

/// The values published to the rendering layer every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationOutputs {
    /// Morph target weights. Exposed for renderers with morph targets;
    /// the bundled scene rig only stores them.
    pub morph_influences: MorphWeights,
    pub camera_position: Vec3,
    pub color: Color,
}

impl AnimationOutputs {
    /// Outputs before the first sample, for `morph_targets` weights.
    #[must_use]
    pub fn initial(morph_targets: usize) -> Self {
        Self {
            morph_influences: MorphWeights::zeros(morph_targets),
            camera_position: Vec3::new(0.0, 0.0, 5.0),
            color: Color::WHITE,
        }
    }
}

impl Default for AnimationOutputs {
    fn default() -> Self {
        Self::initial(crate::animation::timeline::LANDING_MORPH_TARGETS)
    }
}

#[derive(Debug, Clone, Default)]
struct TrackCursors {
    morph: KeyframeCursor,
    camera: KeyframeCursor,
    color: KeyframeCursor,
}

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    timeline: ScrollTimeline,
    progress: f32,
    cursors: TrackCursors,
    outputs: AnimationOutputs,
}

impl ScrollAnimator {
    /// Animator over the landing-page timeline.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeline(ScrollTimeline::landing())
    }

    #[must_use]
    pub fn with_timeline(timeline: ScrollTimeline) -> Self {
        let outputs = AnimationOutputs::initial(timeline.morph_targets());
        Self {
            timeline,
            progress: 0.0,
            cursors: TrackCursors::default(),
            outputs,
        }
    }

    /// Records the latest scroll progress. Out-of-range and non-finite
    /// values are clamped; outputs are not recomputed until the next sample.
    pub fn set_scroll_progress(&mut self, progress: f32) {
        let clamped = sanitize_progress(progress);
        if clamped.to_bits() != progress.to_bits() {
            log::trace!("Scroll progress {progress} clamped to {clamped}");
        }
        self.progress = clamped;
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn timeline(&self) -> &ScrollTimeline {
        &self.timeline
    }

    /// Mutable access for swapping tables at runtime through the checked
    /// `set_*` methods of [`ScrollTimeline`].
    pub fn timeline_mut(&mut self) -> &mut ScrollTimeline {
        &mut self.timeline
    }

    /// The last valid outputs.
    #[must_use]
    pub fn outputs(&self) -> &AnimationOutputs {
        &self.outputs
    }

    /// Samples every table at the current progress and refreshes the cache.
    ///
    /// An output that fails validation keeps its previous value.
    pub fn sample(&mut self) -> AnimationOutputs {
        match self.try_sample_morph() {
            Ok(weights) => self.outputs.morph_influences = weights,
            Err(e) => log::warn!("Keeping previous morph influences: {e}"),
        }
        match self.try_sample_camera() {
            Ok(position) => self.outputs.camera_position = position,
            Err(e) => log::warn!("Keeping previous camera position: {e}"),
        }
        match self.try_sample_color() {
            Ok(color) => self.outputs.color = color,
            Err(e) => log::warn!("Keeping previous color: {e}"),
        }

        self.outputs.clone()
    }

    /// Samples all three tables, failing on the first invalid output.
    /// The cache is left untouched.
    pub fn try_sample(&mut self) -> Result<AnimationOutputs> {
        Ok(AnimationOutputs {
            morph_influences: self.try_sample_morph()?,
            camera_position: self.try_sample_camera()?,
            color: self.try_sample_color()?,
        })
    }

    pub fn try_sample_morph(&mut self) -> Result<MorphWeights> {
        let weights = self
            .timeline
            .morph()
            .sample_with_cursor(self.progress, &mut self.cursors.morph);

        let expected = self.timeline.morph_targets();
        if weights.len() != expected {
            return Err(Error::ShapeMismatch {
                track: MORPH_TRACK,
                expected,
                actual: weights.len(),
            });
        }
        if !weights.is_finite() {
            return Err(Error::InvalidSample(MORPH_TRACK));
        }
        Ok(weights)
    }

    pub fn try_sample_camera(&mut self) -> Result<Vec3> {
        let position = self
            .timeline
            .camera()
            .sample_with_cursor(self.progress, &mut self.cursors.camera);

        if position.is_finite() {
            Ok(position)
        } else {
            Err(Error::InvalidSample(CAMERA_TRACK))
        }
    }

    pub fn try_sample_color(&mut self) -> Result<Color> {
        let color = self
            .timeline
            .color()
            .sample_with_cursor(self.progress, &mut self.cursors.color);

        if color.is_valid() {
            Ok(color)
        } else {
            Err(Error::InvalidSample(COLOR_TRACK))
        }
    }
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new()
    }
}

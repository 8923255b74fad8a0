//! Keyframe tables keyed by scroll progress.
//!
//! A [`ScrollTimeline`] bundles the three tables sampled every frame:
//! morph influences, camera position, and material color. Every table is
//! validated on construction to have strictly increasing inputs spanning
//! exactly `[0, 1]`, and replacement tables go through the same checks.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::tracks::KeyframeTrack;
use crate::animation::values::{Interpolatable, MorphWeights};
use crate::errors::{Error, Result};
use crate::resources::Color;

pub const MORPH_TRACK: &str = "morph_influences";
pub const CAMERA_TRACK: &str = "camera_position";
pub const COLOR_TRACK: &str = "color";

/// Number of morph targets driven by the landing-page timeline.
pub const LANDING_MORPH_TARGETS: usize = 5;

/// One keyframe table in serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDesc<V> {
    pub times: Vec<f32>,
    pub values: Vec<V>,
}

/// Serialized form of a [`ScrollTimeline`].
///
/// ```json
/// {
///   "morph":  { "times": [0, 1], "values": [[0, 0], [1, 1]] },
///   "camera": { "times": [0, 1], "values": [[0, 0, 5], [0, 2, 10]] },
///   "color":  { "times": [0, 1], "values": ["#ffffff", "#0000ff"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineDesc {
    pub morph: TableDesc<Vec<f32>>,
    pub camera: TableDesc<[f32; 3]>,
    pub color: TableDesc<Color>,
}

/// The three tables sampled every frame.
///
/// Tables are only installed through [`new`](Self::new) or the `set_*`
/// methods, which validate them, so a timeline always spans `[0, 1]` with
/// finite keyframes, one morph width, and in-gamut colors.
#[derive(Debug, Clone)]
pub struct ScrollTimeline {
    morph: KeyframeTrack<MorphWeights>,
    camera: KeyframeTrack<Vec3>,
    color: KeyframeTrack<Color>,
    morph_targets: usize,
}

impl ScrollTimeline {
    pub fn new(
        morph: KeyframeTrack<MorphWeights>,
        camera: KeyframeTrack<Vec3>,
        color: KeyframeTrack<Color>,
    ) -> Result<Self> {
        let morph_targets = check_morph(&morph, None)?;
        check_camera(&camera)?;
        check_color(&color)?;

        Ok(Self {
            morph,
            camera,
            color,
            morph_targets,
        })
    }

    /// The tables used by every section of the landing page.
    ///
    /// Morph targets switch on one at a time over five equal steps, the
    /// camera pulls up and back, and the color runs white, red, blue.
    #[must_use]
    pub fn landing() -> Self {
        let morph = landing_track(
            MORPH_TRACK,
            vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0],
            vec![
                MorphWeights::from([0.0, 0.0, 0.0, 0.0, 0.0]),
                MorphWeights::from([0.2, 0.0, 0.0, 0.0, 0.0]),
                MorphWeights::from([0.2, 0.4, 0.0, 0.0, 0.0]),
                MorphWeights::from([0.2, 0.4, 0.6, 0.0, 0.0]),
                MorphWeights::from([0.2, 0.4, 0.6, 0.8, 0.0]),
                MorphWeights::from([0.2, 0.4, 0.6, 0.8, 1.0]),
            ],
        );
        let camera = landing_track(
            CAMERA_TRACK,
            vec![0.0, 1.0],
            vec![Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 2.0, 10.0)],
        );
        let color = landing_track(
            COLOR_TRACK,
            vec![0.0, 0.5, 1.0],
            vec![Color::WHITE, Color::RED, Color::BLUE],
        );

        Self {
            morph,
            camera,
            color,
            morph_targets: LANDING_MORPH_TARGETS,
        }
    }

    pub fn from_desc(desc: TimelineDesc) -> Result<Self> {
        let morph = KeyframeTrack::linear(
            MORPH_TRACK,
            desc.morph.times,
            desc.morph
                .values
                .into_iter()
                .map(MorphWeights::from)
                .collect(),
        )?;
        let camera = KeyframeTrack::linear(
            CAMERA_TRACK,
            desc.camera.times,
            desc.camera
                .values
                .into_iter()
                .map(Vec3::from_array)
                .collect(),
        )?;
        let color = KeyframeTrack::linear(COLOR_TRACK, desc.color.times, desc.color.values)?;

        Self::new(morph, camera, color)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let desc: TimelineDesc = serde_json::from_str(json)?;
        Self::from_desc(desc)
    }

    #[must_use]
    pub fn to_desc(&self) -> TimelineDesc {
        TimelineDesc {
            morph: TableDesc {
                times: self.morph.times().to_vec(),
                values: self
                    .morph
                    .values()
                    .iter()
                    .map(|w| w.as_slice().to_vec())
                    .collect(),
            },
            camera: TableDesc {
                times: self.camera.times().to_vec(),
                values: self.camera.values().iter().map(Vec3::to_array).collect(),
            },
            color: TableDesc {
                times: self.color.times().to_vec(),
                values: self.color.values().to_vec(),
            },
        }
    }

    /// Number of weights every morph keyframe carries.
    #[must_use]
    pub fn morph_targets(&self) -> usize {
        self.morph_targets
    }

    #[must_use]
    pub fn morph(&self) -> &KeyframeTrack<MorphWeights> {
        &self.morph
    }

    #[must_use]
    pub fn camera(&self) -> &KeyframeTrack<Vec3> {
        &self.camera
    }

    #[must_use]
    pub fn color(&self) -> &KeyframeTrack<Color> {
        &self.color
    }

    /// Replaces the morph table. The new table must keep the current
    /// number of morph targets.
    pub fn set_morph(&mut self, track: KeyframeTrack<MorphWeights>) -> Result<()> {
        check_morph(&track, Some(self.morph_targets))?;
        self.morph = track;
        Ok(())
    }

    pub fn set_camera(&mut self, track: KeyframeTrack<Vec3>) -> Result<()> {
        check_camera(&track)?;
        self.camera = track;
        Ok(())
    }

    pub fn set_color(&mut self, track: KeyframeTrack<Color>) -> Result<()> {
        check_color(&track)?;
        self.color = track;
        Ok(())
    }

    /// Assembles a timeline without validation, for exercising the
    /// animator's handling of malformed tables.
    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(
        morph: KeyframeTrack<MorphWeights>,
        camera: KeyframeTrack<Vec3>,
        color: KeyframeTrack<Color>,
        morph_targets: usize,
    ) -> Self {
        Self {
            morph,
            camera,
            color,
            morph_targets,
        }
    }
}

impl Default for ScrollTimeline {
    fn default() -> Self {
        Self::landing()
    }
}

/// Validates a morph table and returns its width. With `expected`, the
/// width must match it.
fn check_morph(track: &KeyframeTrack<MorphWeights>, expected: Option<usize>) -> Result<usize> {
    track.ensure_unit_domain()?;

    let width = expected.unwrap_or_else(|| track.values()[0].len());
    if let Some(bad) = track.values().iter().find(|w| w.len() != width) {
        return Err(Error::ShapeMismatch {
            track: MORPH_TRACK,
            expected: width,
            actual: bad.len(),
        });
    }
    if !track.values().iter().all(MorphWeights::is_finite) {
        return Err(Error::InvalidSample(MORPH_TRACK));
    }
    Ok(width)
}

fn check_camera(track: &KeyframeTrack<Vec3>) -> Result<()> {
    track.ensure_unit_domain()?;
    if track.values().iter().copied().all(Vec3::is_finite) {
        Ok(())
    } else {
        Err(Error::InvalidSample(CAMERA_TRACK))
    }
}

fn check_color(track: &KeyframeTrack<Color>) -> Result<()> {
    track.ensure_unit_domain()?;
    match track.values().iter().find(|c| !c.is_valid()) {
        Some(bad) => Err(Error::InvalidColor(bad.to_hex())),
        None => Ok(()),
    }
}

fn landing_track<T: Interpolatable>(
    name: &'static str,
    times: Vec<f32>,
    values: Vec<T>,
) -> KeyframeTrack<T> {
    match KeyframeTrack::linear(name, times, values) {
        Ok(track) => track,
        Err(e) => unreachable!("built-in track '{name}' is malformed: {e}"),
    }
}

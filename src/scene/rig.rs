//! The consumer side of the animator: a camera and a material that ease
//! toward the sampled outputs a little every frame.

use crate::animation::{AnimationOutputs, MorphWeights};
use crate::app::settings::AnimatorSettings;
use crate::resources::StandardMaterial;
use crate::scene::Camera;

#[derive(Debug, Clone)]
pub struct SceneRig {
    pub camera: Camera,
    pub material: StandardMaterial,
    /// Last sampled morph weights. Stored for renderers that drive morph
    /// targets; the rig itself does not deform anything.
    pub morph_influences: MorphWeights,
    camera_smoothing: f32,
    color_smoothing: f32,
}

impl SceneRig {
    /// Rig starting at rest on `initial`.
    #[must_use]
    pub fn new(settings: &AnimatorSettings, initial: &AnimationOutputs) -> Self {
        Self {
            camera: Camera::default().with_position(initial.camera_position),
            material: StandardMaterial::new(initial.color),
            morph_influences: initial.morph_influences.clone(),
            camera_smoothing: settings.camera_smoothing(),
            color_smoothing: settings.color_smoothing(),
        }
    }

    /// Eases camera and material toward `outputs`; morph weights are copied.
    pub fn apply(&mut self, outputs: &AnimationOutputs) {
        self.camera
            .ease_toward(outputs.camera_position, self.camera_smoothing);
        self.material.ease_color(outputs.color, self.color_smoothing);
        self.morph_influences.clone_from(&outputs.morph_influences);
    }
}

impl Default for SceneRig {
    fn default() -> Self {
        Self::new(&AnimatorSettings::default(), &AnimationOutputs::default())
    }
}

use crate::resources::Color;

/// Physically based surface parameters for the section model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardMaterial {
    pub color: Color,
    pub roughness: f32,
    pub metalness: f32,
}

impl StandardMaterial {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            roughness: 0.5,
            metalness: 0.5,
        }
    }

    #[must_use]
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness.clamp(0.0, 1.0);
        self
    }

    /// Moves the base color a fraction `alpha` of the way toward `target`.
    pub fn ease_color(&mut self, target: Color, alpha: f32) {
        self.color = self.color.lerp(target, alpha);
    }
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

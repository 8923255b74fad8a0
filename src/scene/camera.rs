use glam::{Mat4, Vec3};

/// Perspective camera that always looks at the scene origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Vertical field of view, stored in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Camera {
    /// `fov` is given in degrees.
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov: fov.to_radians(),
            aspect,
            near,
            far,
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Updates the aspect ratio from a viewport size; zero heights are ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if height > 0.0 && width > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Moves the camera a fraction `alpha` of the way toward `goal`.
    pub fn ease_toward(&mut self, goal: Vec3, alpha: f32) {
        self.position = self.position.lerp(goal, alpha);
    }

    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        // glam's perspective_rh maps depth to [0, 1] (WebGPU/Vulkan convention)
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for Camera {
    /// 60° field of view, depth range 0.1 to 100, placed at `(0, 0, 5)`.
    fn default() -> Self {
        Self::new_perspective(60.0, 16.0 / 9.0, 0.1, 100.0)
    }
}

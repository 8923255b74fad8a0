pub mod camera;
pub mod rig;

pub use camera::Camera;
pub use rig::SceneRig;

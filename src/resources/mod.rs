//! Plain data resources driven by the animator:
//! - Color: linear RGB with hex interchange
//! - Material: the standard surface material the scene color is applied to

pub mod color;
pub mod material;

pub use color::Color;
pub use material::StandardMaterial;

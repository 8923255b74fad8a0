//! # Scrollscape
//!
//! Scroll-driven keyframe animation for the small 3D scenes of a landing
//! page. A normalized scroll position is sampled through fixed keyframe
//! tables once per rendered frame, producing a camera position, a
//! material color, and a set of morph target weights.
//!
//! ```rust,ignore
//! use scrollscape::ScrollAnimator;
//!
//! let mut animator = ScrollAnimator::new();
//! animator.set_scroll_progress(0.5);
//! let outputs = animator.sample();
//! assert_eq!(outputs.color.to_hex(), "#ff0000");
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod app;
pub mod errors;
pub mod resources;
pub mod scene;

pub use animation::{
    AnimationOutputs, KeyframeTrack, MorphWeights, ScrollAnimator, ScrollMetrics, ScrollTimeline,
};
pub use app::{AnimatorSettings, ScrollSession, Section};
pub use errors::{Error, Result};
pub use resources::{Color, StandardMaterial};
pub use scene::{Camera, SceneRig};

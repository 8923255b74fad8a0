pub mod animator;
pub mod progress;
pub mod timeline;
pub mod tracks;
pub mod values;

pub use animator::{AnimationOutputs, ScrollAnimator};
pub use progress::{ScrollMetrics, sanitize_progress};
pub use timeline::{ScrollTimeline, TableDesc, TimelineDesc};
pub use tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
pub use values::{Interpolatable, MorphWeights};

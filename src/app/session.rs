//! Scroll Session
//!
//! Platform-independent glue between page events and the scene:
//!
//! ```text
//! scroll events ──► Debouncer ──► ScrollMetrics::progress ──► ScrollAnimator
//!                                                                  │ tick()
//!                                                                  ▼
//!                                                   AnimationOutputs ──► SceneRig
//! ```
//!
//! The session runs on a single thread: event callbacks write, the frame
//! callback reads, and the latest write before a tick wins.

use crate::animation::{AnimationOutputs, ScrollAnimator, ScrollMetrics, ScrollTimeline};
use crate::app::Instant;
use crate::app::debounce::Debouncer;
use crate::app::settings::AnimatorSettings;
use crate::scene::SceneRig;

#[derive(Debug, Clone)]
pub struct ScrollSession {
    settings: AnimatorSettings,
    metrics: ScrollMetrics,
    pending_scroll: Debouncer<f32>,
    animator: ScrollAnimator,
    rig: SceneRig,
    frame_count: u64,
}

impl ScrollSession {
    /// Session over the landing-page timeline. Progress is computed from
    /// `metrics` right away, without waiting for a scroll event.
    #[must_use]
    pub fn new(settings: AnimatorSettings, metrics: ScrollMetrics) -> Self {
        Self::with_timeline(settings, ScrollTimeline::landing(), metrics)
    }

    #[must_use]
    pub fn with_timeline(
        settings: AnimatorSettings,
        timeline: ScrollTimeline,
        metrics: ScrollMetrics,
    ) -> Self {
        let mut animator = ScrollAnimator::with_timeline(timeline);
        animator.set_scroll_progress(metrics.progress());
        let rig = SceneRig::new(&settings, animator.outputs());

        log::debug!(
            "Scroll session started at progress {:.3} ({}ms debounce)",
            animator.progress(),
            settings.debounce_ms()
        );

        Self {
            pending_scroll: Debouncer::new(settings.debounce()),
            settings,
            metrics,
            animator,
            rig,
            frame_count: 0,
        }
    }

    /// Records a scroll offset. Progress follows once the debounce window
    /// has passed without further scrolling.
    pub fn on_scroll(&mut self, now: Instant, scroll_top: f32) {
        self.pending_scroll.call(now, scroll_top);
    }

    /// Records a full page measurement taken in a scroll callback. Heights
    /// apply at once; the scroll offset is debounced like [`on_scroll`](Self::on_scroll).
    pub fn on_measure(&mut self, now: Instant, metrics: ScrollMetrics) {
        self.metrics.document_height = metrics.document_height;
        self.metrics.viewport_height = metrics.viewport_height;
        self.on_scroll(now, metrics.scroll_top);
    }

    /// Applies new page dimensions and recomputes progress immediately.
    pub fn on_resize(&mut self, document_height: f32, viewport_height: f32) {
        self.metrics.document_height = document_height;
        self.metrics.viewport_height = viewport_height;
        self.animator.set_scroll_progress(self.metrics.progress());
    }

    /// Advances one rendered frame: applies any settled scroll offset,
    /// samples the animator, and eases the rig toward the result.
    pub fn tick(&mut self, now: Instant) -> &AnimationOutputs {
        if let Some(scroll_top) = self.pending_scroll.poll(now) {
            self.metrics.scroll_top = scroll_top;
            self.animator.set_scroll_progress(self.metrics.progress());
        }

        let outputs = self.animator.sample();
        self.rig.apply(&outputs);
        self.frame_count += 1;

        self.animator.outputs()
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.animator.progress()
    }

    #[must_use]
    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    #[must_use]
    pub fn outputs(&self) -> &AnimationOutputs {
        self.animator.outputs()
    }

    #[must_use]
    pub fn rig(&self) -> &SceneRig {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut SceneRig {
        &mut self.rig
    }

    #[must_use]
    pub fn animator(&self) -> &ScrollAnimator {
        &self.animator
    }

    #[must_use]
    pub fn settings(&self) -> &AnimatorSettings {
        &self.settings
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

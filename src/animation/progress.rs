/// Clamps a scroll progress value into `[0, 1]`.
///
/// Non-finite input never propagates: NaN maps to 0 and the infinities
/// map to the nearest end.
#[inline]
#[must_use]
pub fn sanitize_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Page measurements a scroll progress value is derived from, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Vertical scroll offset of the viewport.
    pub scroll_top: f32,
    /// Full scrollable height of the document.
    pub document_height: f32,
    /// Height of the visible viewport.
    pub viewport_height: f32,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(scroll_top: f32, document_height: f32, viewport_height: f32) -> Self {
        Self {
            scroll_top,
            document_height,
            viewport_height,
        }
    }

    /// Distance the viewport can travel.
    #[must_use]
    pub fn scrollable_range(&self) -> f32 {
        self.document_height - self.viewport_height
    }

    /// `scroll_top / (document_height - viewport_height)`, clamped to `[0, 1]`.
    ///
    /// A document that fits in the viewport has no range and reports 0.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let range = self.scrollable_range();
        if range.is_nan() || range <= 0.0 {
            return 0.0;
        }
        sanitize_progress(self.scroll_top / range)
    }
}

/// DOM id the adapter assigns to the overlay element, so a stale overlay can
/// be located and removed before a new one is attached.
pub const OVERLAY_ELEMENT_ID: &str = "filepeek-preview-overlay";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageViewModel {
    /// The overlay to render, or `None` when no preview is open.
    pub overlay: Option<OverlayView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    pub element_id: &'static str,
    pub body: OverlayBody,
}

/// What the overlay's content element should be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayBody {
    /// `src` for an inline frame covering most of the viewport.
    InlineFrame { src: String },
    /// `src` for an image element, aspect ratio preserved within the viewport.
    Image { src: String },
}

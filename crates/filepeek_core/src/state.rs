use crate::view_model::{OverlayBody, OverlayView, PageViewModel, OVERLAY_ELEMENT_ID};

pub type RequestId = u64;

/// Content held by the single overlay slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayContent {
    /// PDF payload, rendered in an inline frame sized to most of the viewport.
    PdfFrame { data_url: String },
    /// Image payload, rendered preserving aspect ratio within the viewport.
    Image { data_url: String },
}

/// Rendering branch for a fetched payload's media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Pdf,
    Image,
    Unsupported,
}

/// Maps a media type string to its rendering branch.
pub fn classify_media(mime_type: &str) -> MediaKind {
    if mime_type.contains("application/pdf") {
        MediaKind::Pdf
    } else if mime_type.starts_with("image/") {
        MediaKind::Image
    } else {
        MediaKind::Unsupported
    }
}

/// Page-context state: the overlay slot and the request-id counter.
///
/// At most one overlay exists at any time; showing a new preview replaces the
/// slot's content, closing clears it. The DOM adapter keys its Escape-key
/// listener off slot occupancy, so clearing the slot also retires the
/// listener.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    overlay: Option<OverlayContent>,
    next_request_id: RequestId,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PageViewModel {
        PageViewModel {
            overlay: self.overlay.as_ref().map(|content| OverlayView {
                element_id: OVERLAY_ELEMENT_ID,
                body: match content {
                    OverlayContent::PdfFrame { data_url } => OverlayBody::InlineFrame {
                        src: data_url.clone(),
                    },
                    OverlayContent::Image { data_url } => OverlayBody::Image {
                        src: data_url.clone(),
                    },
                },
            }),
        }
    }

    pub fn overlay(&self) -> Option<&OverlayContent> {
        self.overlay.as_ref()
    }

    pub(crate) fn show_overlay(&mut self, content: OverlayContent) {
        // Remove-then-create: the old slot content is dropped before the
        // replacement goes in, which is what keeps the invariant race-free
        // under cooperative scheduling.
        self.overlay = Some(content);
    }

    /// Clears the overlay slot. Idempotent.
    pub(crate) fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Allocates the id for the next boundary request. Ids start at 1 so the
    /// logging layer can treat 0 as "no request".
    pub(crate) fn allocate_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }
}

use crate::state::{classify_media, MediaKind, OverlayContent};
use crate::{DownloadRequest, Effect, Msg, PageState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::ControlClicked { dom_id, name_label } => {
            let request = DownloadRequest::from_control(&dom_id, name_label.as_deref());
            let request_id = state.allocate_request_id();
            vec![Effect::FetchFile {
                request_id,
                request,
            }]
        }
        Msg::FetchSucceeded {
            request_id: _,
            data_url,
            mime_type,
        } => match classify_media(&mime_type) {
            MediaKind::Pdf => {
                state.show_overlay(OverlayContent::PdfFrame { data_url });
                Vec::new()
            }
            MediaKind::Image => {
                state.show_overlay(OverlayContent::Image { data_url });
                Vec::new()
            }
            // Any open overlay comes down before the notice goes up; an
            // unsupported result leaves zero overlays behind.
            MediaKind::Unsupported => {
                state.close_overlay();
                vec![Effect::NotifyUnsupportedFormat { mime_type }]
            }
        },
        Msg::FetchFailed {
            request_id: _,
            error,
        } => {
            vec![Effect::NotifyPreviewFailed { detail: error }]
        }
        Msg::CloseClicked | Msg::EscapePressed => {
            state.close_overlay();
            Vec::new()
        }
    };

    (state, effects)
}

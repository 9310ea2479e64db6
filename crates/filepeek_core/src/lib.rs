//! Filepeek core: pure page-context state machine.
//!
//! Everything in this crate is deterministic and IO-free. The DOM adapter
//! feeds [`Msg`] values in, `update` returns the next state plus the effects
//! the adapter must execute (send a fetch request across the privilege
//! boundary, show a user notice). The overlay is an explicit single-slot
//! handle; the adapter renders whatever the view model says and nothing else.
mod effect;
mod extract;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use extract::{
    file_id_from_dom_id, file_name_from_label, DownloadRequest, DEFAULT_FILE_ID, DEFAULT_FILE_NAME,
};
pub use msg::Msg;
pub use state::{classify_media, MediaKind, OverlayContent, PageState, RequestId};
pub use update::update;
pub use view_model::{OverlayBody, OverlayView, PageViewModel, OVERLAY_ELEMENT_ID};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked a discovered download control. The adapter has already
    /// suppressed the host page's native download action and captured the
    /// control's DOM identifier plus the text of its file-name label, when
    /// that label exists and carries the file-name cell class.
    ControlClicked {
        dom_id: String,
        name_label: Option<String>,
    },
    /// The privileged context answered a fetch request with a payload.
    FetchSucceeded {
        request_id: crate::RequestId,
        data_url: String,
        mime_type: String,
    },
    /// The privileged context answered with a failure, or the adapter
    /// observed that no response will arrive.
    FetchFailed {
        request_id: crate::RequestId,
        error: String,
    },
    /// User clicked the overlay's close affordance.
    CloseClicked,
    /// User pressed Escape.
    EscapePressed,
}

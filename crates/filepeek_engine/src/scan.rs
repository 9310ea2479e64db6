use engine_logging::engine_debug;
use scraper::{ElementRef, Html, Selector};

/// Structural signature of a download control: a button carrying the
/// download-icon class and an inline handler for the host's dispatch
/// framework.
pub const DOWNLOAD_CONTROL_SELECTOR: &str =
    r#"button[class*="fa-download"][onclick*="PrimeFaces.ab"]"#;

/// Class token of the row container enclosing a download control.
const ROW_CONTAINER_CLASS: &str = "fileListCell";

/// Class marker of the cell holding the file-name label.
const NAME_LABEL_CLASS: &str = "downloadCellFilNm";

/// A download control discovered in a document snapshot, with the raw inputs
/// the page-context extraction functions work from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredControl {
    /// The control's DOM identifier, empty when the markup carries none.
    pub dom_id: String,
    /// Text of the file-name label, present only when the row's preceding
    /// sibling is classed as a file-name cell.
    pub name_label: Option<String>,
}

/// Pure scan of a document snapshot: returns the download controls in
/// document order. Host-markup changes only touch this adapter; the
/// extraction functions downstream are unaffected.
pub fn scan_document(html: &str) -> Vec<DiscoveredControl> {
    let Ok(selector) = Selector::parse(DOWNLOAD_CONTROL_SELECTOR) else {
        return Vec::new();
    };
    let doc = Html::parse_document(html);
    let controls: Vec<DiscoveredControl> = doc
        .select(&selector)
        .map(|button| DiscoveredControl {
            dom_id: button.value().id().unwrap_or_default().to_string(),
            name_label: name_label_for(button),
        })
        .collect();
    engine_debug!("discovered {} download controls", controls.len());
    controls
}

/// Walks from the control to its enclosing row container, then to that row's
/// immediately preceding sibling element, and reads its text only when it is
/// classed as a file-name cell.
fn name_label_for(button: ElementRef<'_>) -> Option<String> {
    let row = button.ancestors().filter_map(ElementRef::wrap).find(|el| {
        el.value().name() == "div"
            && el
                .value()
                .classes()
                .any(|class| class == ROW_CONTAINER_CLASS)
    })?;
    let label = row.prev_siblings().filter_map(ElementRef::wrap).next()?;
    let class_attr = label.value().attr("class").unwrap_or_default();
    if !class_attr.contains(NAME_LABEL_CLASS) {
        return None;
    }
    Some(label.text().collect::<String>())
}

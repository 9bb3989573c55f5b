//! Snapshot exporter: bake the current session into a standalone, inert
//! HTML document offered as a timestamped file download. Export is read-only
//! over the session; a failure never disturbs the live state.

use chrono::Utc;
use promptform_render_html::{render_page, PageOptions};
use thiserror::Error;

use crate::session::Session;
use crate::view;

/// Filename prefix of exported documents.
pub const EXPORT_FILE_PREFIX: &str = "assumption-form";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize session state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A finished export: bytes plus download metadata.
pub struct ExportedDocument {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Render the inert document. Event wirings and the save section are
/// stripped, every field value and the selected product are baked in as
/// static attributes, and the full session state rides along as JSON in a
/// data-session attribute on the root node.
pub fn export_document(session: &Session, inline_css: Option<&str>) -> Result<ExportedDocument, ExportError> {
    let state_json = serde_json::to_string(&session.state())?;
    let root = view::render_app_inert(session).attr("data-session", &state_json);

    let page = render_page(&PageOptions {
        root,
        title: Some("Assumption Form".to_string()),
        inline_css: inline_css.map(str::to_string),
        scripts: Vec::new(),
        sse_url: None,
        mount_selector: None,
        inert: true,
    });

    // ISO-like timestamp with colons swapped for filesystem safety
    let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S");
    Ok(ExportedDocument {
        filename: format!("{}-{}.html", EXPORT_FILE_PREFIX, timestamp),
        content_type: "text/html; charset=utf-8",
        bytes: page.into_bytes(),
    })
}

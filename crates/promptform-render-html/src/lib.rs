//! promptform-render-html — Render DomNode trees to HTML strings
//!
//! Produces SSR-ready HTML with data-key and data-a_ attributes for client
//! hydration, and inert standalone pages for the snapshot exporter.

use promptform_dom::DomNode;

/// Void elements that must not have closing tags
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Render a DomNode tree to an HTML string.
pub fn render_to_html(node: &DomNode) -> String {
    let mut buf = String::with_capacity(4096);
    write_node(node, &mut buf);
    buf
}

/// Options for rendering a full HTML page.
pub struct PageOptions {
    pub root: DomNode,
    pub title: Option<String>,
    pub inline_css: Option<String>,
    pub scripts: Vec<String>,
    pub sse_url: Option<String>,
    pub mount_selector: Option<String>,
    /// Inert pages carry no scripts and no client bootstrap. Used by the
    /// snapshot exporter so the artifact has no executable behavior.
    pub inert: bool,
}

/// Render a full HTML page with SSR content, styles, and client bootstrap.
pub fn render_page(opts: &PageOptions) -> String {
    let body_html = render_to_html(&opts.root);

    let mut html = String::with_capacity(body_html.len() + 2048);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\" />\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");

    if let Some(title) = &opts.title {
        html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    }

    if let Some(css) = &opts.inline_css {
        html.push_str(&format!("<style>{}</style>", css));
    }

    html.push_str("\n</head>\n<body>\n");

    // Mount point with SSR content
    let mount = opts.mount_selector.as_deref().unwrap_or("#app");
    let id = mount.trim_start_matches('#');
    html.push_str(&format!("<div id=\"{}\">{}</div>\n", id, body_html));

    if !opts.inert {
        for src in &opts.scripts {
            html.push_str(&format!("<script src=\"{}\"></script>\n", escape_attr(src)));
        }

        if let Some(sse_url) = &opts.sse_url {
            html.push_str("<script>\n");
            html.push_str(&format!("Promptform.connect(\"{}\", \"{}\");\n", sse_url, mount));
            html.push_str("</script>\n");
        }
    }

    html.push_str("</body>\n</html>");
    html
}

fn write_node(node: &DomNode, buf: &mut String) {
    let is_void = VOID_ELEMENTS.contains(&node.tag.as_str());

    buf.push('<');
    buf.push_str(&node.tag);

    // data-key attribute
    if let Some(key) = &node.key {
        buf.push_str(" data-key=\"");
        buf.push_str(&escape_attr(key));
        buf.push('"');
    }

    // HTML attributes
    if let Some(attrs) = &node.attrs {
        // Sort for deterministic output
        let mut keys: Vec<&String> = attrs.keys().collect();
        keys.sort();
        for k in keys {
            let v = &attrs[k];
            buf.push(' ');
            buf.push_str(k);
            buf.push_str("=\"");
            buf.push_str(&escape_attr(v));
            buf.push('"');
        }
    }

    // Event attributes → data-a_ prefix
    if let Some(events) = &node.events {
        let mut keys: Vec<&String> = events.keys().collect();
        keys.sort();
        for k in keys {
            let v = &events[k];
            buf.push_str(" data-a_");
            buf.push_str(k);
            buf.push_str("=\"");
            buf.push_str(&escape_attr(v));
            buf.push('"');
        }
    }

    buf.push('>');

    // Text content
    if let Some(text) = &node.text {
        buf.push_str(&escape_html(text));
    }

    // Children
    for child in node.children_iter() {
        write_node(child, buf);
    }

    // Closing tag (skip for void elements)
    if !is_void {
        buf.push_str("</");
        buf.push_str(&node.tag);
        buf.push('>');
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

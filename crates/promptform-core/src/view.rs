//! View construction: build the DomNode tree for the whole form from the
//! catalogs and the session. Pure — reads the session, never writes it.
//!
//! Field edits are patched in place on the client from the action response;
//! only a product switch re-renders the page, so the collapsible prompt
//! blocks keep their open/closed state across edits.

use promptform_dom::DomNode;

use crate::catalog::{self, FieldDescriptor, PromptDescriptor, PROMPT_FIELDS};
use crate::session::Session;

/// The live page tree, save section included.
pub fn render_app(session: &Session) -> DomNode {
    app_tree(session, true)
}

/// The export tree: no save section, no event wirings. Input values and the
/// selected product are already baked in as attributes by the builders.
pub fn render_app_inert(session: &Session) -> DomNode {
    let mut root = app_tree(session, false);
    root.strip_events();
    root
}

fn app_tree(session: &Session, include_save: bool) -> DomNode {
    let groups = session.groups();
    let mut root = DomNode::new("div")
        .key("app")
        .attr("class", "app")
        .child(header())
        .child(product_bar(session))
        .child(field_section(
            "Product Information",
            "product-info-grid",
            groups.product_info,
            session,
        ))
        .child(field_section(
            "Funding Options",
            "funding-options-grid",
            groups.funding_options,
            session,
        ))
        .child(field_section(
            "Funding Situation",
            "funding-grid",
            groups.funding_situation,
            session,
        ))
        .child(prompt_section(session));

    if include_save {
        root = root.child(save_section());
    }
    root
}

fn header() -> DomNode {
    DomNode::new("div")
        .key("header")
        .attr("class", "form-header")
        .child(DomNode::text("h1", "Assumption Form"))
        .child(
            DomNode::text("p", "Fill in the assumptions to generate the narrative prompts.")
                .attr("class", "form-subtitle"),
        )
}

fn product_bar(session: &Session) -> DomNode {
    let mut select = DomNode::new("select")
        .key("product")
        .attr("id", "product")
        .attr("name", "product")
        .on("change", "switch_product");

    for id in catalog::product_ids() {
        let mut option = DomNode::text("option", id).attr("value", id);
        if id == session.product() {
            option = option.attr("selected", "selected");
        }
        select = select.child(option);
    }

    DomNode::new("div")
        .key("product-bar")
        .attr("class", "product-bar")
        .child(DomNode::text("label", "Product").attr("for", "product"))
        .child(select)
}

fn field_section(
    title: &str,
    container_key: &str,
    fields: &'static [FieldDescriptor],
    session: &Session,
) -> DomNode {
    let grid = DomNode::new("div")
        .key(container_key)
        .attr("class", "field-grid")
        .children(fields.iter().map(|d| field_control(d, session.field(d.key))));

    DomNode::new("section")
        .attr("class", "section")
        .child(DomNode::text("h2", title))
        .child(grid)
}

fn field_control(d: &FieldDescriptor, value: &str) -> DomNode {
    DomNode::new("div")
        .key(&format!("f-{}", d.key))
        .attr("class", "field")
        .child(DomNode::text("label", d.label).attr("for", d.key))
        .child(
            DomNode::new("input")
                .key(&format!("i-{}", d.key))
                .attr("type", d.kind)
                .attr("id", d.key)
                .attr("name", d.key)
                .attr("value", value)
                .attr("placeholder", d.label)
                .attr("autocomplete", "off")
                .on("input", "set_field"),
        )
}

fn prompt_section(session: &Session) -> DomNode {
    DomNode::new("section")
        .attr("class", "section")
        .child(DomNode::text("h2", "Prompts"))
        .child(
            DomNode::new("div")
                .key("prompts-grid")
                .attr("class", "prompts")
                .children(PROMPT_FIELDS.iter().map(|d| prompt_block(d, session.prompt(d.key)))),
        )
}

/// One collapsible, expanded-by-default prompt block: label, copy control
/// and a read-only text region. The text region's key is what the client
/// patches after each edit.
fn prompt_block(d: &PromptDescriptor, text: &str) -> DomNode {
    DomNode::new("div")
        .key(&format!("p-{}", d.key))
        .attr("class", "prompt")
        .child(DomNode::text("label", d.label))
        .child(
            DomNode::text("button", "Copy")
                .key(&format!("copy-{}", d.key))
                .attr("type", "button")
                .attr("class", "copy-btn")
                .attr("data-prompt", d.key)
                .on("click", "copy_prompt"),
        )
        .child(
            DomNode::new("details")
                .attr("open", "open")
                .child(DomNode::text("summary", "Show/Hide"))
                .child(
                    DomNode::text("div", text)
                        .key(&format!("prompt-{}", d.key))
                        .attr("class", "prompt-block"),
                ),
        )
}

fn save_section() -> DomNode {
    DomNode::new("div")
        .key("save-section")
        .attr("class", "save-section")
        .child(
            DomNode::text("button", "Save Current State to Disk")
                .key("save-btn")
                .attr("type", "button")
                .attr("class", "save-btn")
                .on("click", "export"),
        )
}

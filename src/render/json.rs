//! JSON renderer: the finished tree for template layers and tooling.
//!
//! Each node carries the accessors a template needs, already evaluated
//! against the run configuration.

use crate::error::TreeError;
use crate::model::AccessLevel;
use crate::pages::{Category, PageIndex};
use crate::render::Renderer;
use crate::taxonomy::Type;
use crate::tree::{Diagnostic, DocTree, Node};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct TreeView<'a> {
    categories: &'a [Category],
    roots: Vec<NodeView<'a>>,
    diagnostics: &'a [Diagnostic],
}

#[derive(Serialize)]
struct NodeView<'a> {
    name: &'a str,
    kind: &'a Type,
    #[serde(skip_serializing_if = "Option::is_none")]
    type_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dash_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    qualified_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    access: Option<AccessLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    section: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    declaration: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    other_language_declaration: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    abstract_text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    discussion: Option<&'a str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    deprecated: bool,
    page: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    omit_content_from_parent: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<NodeView<'a>>,
}

fn view<'a>(node: Node<'a>, pages: &'a PageIndex) -> NodeView<'a> {
    let decl = node.decl();
    let config = node.config();
    let synthetic = node.is_synthetic();
    NodeView {
        name: node.name(),
        kind: node.kind(),
        type_name: node.kind().name(),
        dash_type: node.kind().dash_type(),
        url: pages.url(node.id()),
        qualified_name: (!synthetic).then(|| node.fully_qualified_module_name()),
        access: (!synthetic).then_some(decl.access),
        section: node.section(),
        declaration: decl.display_declaration(config),
        other_language_declaration: decl.display_other_language_declaration(config),
        note: node.declaration_note(),
        abstract_text: decl.abstract_text.as_deref(),
        discussion: decl.discussion.as_deref(),
        deprecated: decl.deprecated,
        page: node.render_as_page(),
        omit_content_from_parent: node.omit_content_from_parent(),
        children: node.children().map(|c| view(c, pages)).collect(),
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, tree: &DocTree, pages: &PageIndex) -> Result<String, TreeError> {
        let doc = TreeView {
            categories: pages.categories(),
            roots: tree.roots().map(|r| view(r, pages)).collect(),
            diagnostics: tree.diagnostics(),
        };
        let mut out = serde_json::to_string_pretty(&doc)?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

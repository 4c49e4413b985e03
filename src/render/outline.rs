//! Plain-text outline of the documentation tree, one node per line.

use crate::error::TreeError;
use crate::pages::PageIndex;
use crate::render::Renderer;
use crate::tree::{DocTree, Node};

pub struct OutlineRenderer;

impl Renderer for OutlineRenderer {
    fn render(&self, tree: &DocTree, pages: &PageIndex) -> Result<String, TreeError> {
        let mut out = String::new();
        for root in tree.roots() {
            render_node(&mut out, root, pages, 0);
        }
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}

fn render_node(out: &mut String, node: Node<'_>, pages: &PageIndex, depth: usize) {
    out.push_str(&"  ".repeat(depth));
    if node.kind().is_mark() {
        out.push_str(&format!("-- {} --\n", node.section().unwrap_or_default()));
        return;
    }
    out.push_str(node.name());
    if let Some(type_name) = node.kind().name() {
        out.push_str(&format!(" [{}]", type_name));
    }
    if let Some(note) = node.declaration_note() {
        out.push_str(&format!(" ({})", note));
    }
    if node.render_as_page() {
        if let Some(url) = pages.url(node.id()) {
            out.push_str(&format!(" -> {}", url));
        }
    }
    out.push('\n');
    for child in node.children() {
        render_node(out, child, pages, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::Record;
    use crate::pages::{assign, EnglishPluralizer};
    use crate::tree::TreeBuilder;

    #[test]
    fn outline_lists_tree() {
        let tree = TreeBuilder::new(&Config::default())
            .build(vec![
                Record {
                    kind: "source.lang.swift.decl.class".into(),
                    name: "View".into(),
                    ..Default::default()
                },
                Record {
                    kind: "source.lang.swift.syntaxtype.comment.mark".into(),
                    name: "MARK: - Drawing".into(),
                    parent: Some(0),
                    ..Default::default()
                },
                Record {
                    kind: "source.lang.swift.decl.function.method.instance".into(),
                    name: "draw()".into(),
                    parent: Some(0),
                    default_implementation: true,
                    from_protocol_extension: true,
                    ..Default::default()
                },
            ])
            .unwrap();
        let pages = assign(&tree, &EnglishPluralizer);
        let out = OutlineRenderer.render(&tree, &pages).unwrap();
        assert_eq!(
            out,
            "Classes -> Classes.html\n\
             \x20\x20View [Class] -> Classes/View.html\n\
             \x20\x20\x20\x20-- Drawing --\n\
             \x20\x20\x20\x20draw() [Instance Method] (Default implementation, extension method)\n"
        );
    }
}

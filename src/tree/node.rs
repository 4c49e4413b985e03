//! Read-only view of one arena node and the accessors that walk the tree.

use super::{DocTree, NodeId};
use crate::config::Config;
use crate::model::Declaration;
use crate::taxonomy::Type;
use regex::Regex;

#[derive(Clone, Copy)]
pub struct Node<'a> {
    tree: &'a DocTree,
    id: NodeId,
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("name", &self.name())
            .finish()
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<'a> Node<'a> {
    pub(crate) fn new(tree: &'a DocTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn decl(&self) -> &'a Declaration {
        &self.tree.nodes[self.id.index()].decl
    }

    pub fn kind(&self) -> &'a Type {
        &self.decl().kind
    }

    pub fn name(&self) -> &'a str {
        &self.decl().name
    }

    pub fn config(&self) -> &'a Config {
        &self.tree.config
    }

    pub fn is_synthetic(&self) -> bool {
        self.tree.nodes[self.id.index()].synthetic
    }

    pub fn section(&self) -> Option<&'a str> {
        self.tree.nodes[self.id.index()].section.as_deref()
    }

    pub fn merged_into(&self) -> Option<Node<'a>> {
        self.tree.nodes[self.id.index()]
            .merged_into
            .map(|id| self.tree.node(id))
    }

    pub fn parent_in_code(&self) -> Option<Node<'a>> {
        self.tree.nodes[self.id.index()]
            .parent_in_code
            .map(|id| self.tree.node(id))
    }

    pub fn parent_in_doc(&self) -> Option<Node<'a>> {
        self.tree.nodes[self.id.index()]
            .parent_in_doc
            .map(|id| self.tree.node(id))
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let tree = self.tree;
        tree.nodes[self.id.index()]
            .children
            .iter()
            .map(move |&id| tree.node(id))
    }

    pub fn has_children(&self) -> bool {
        !self.tree.nodes[self.id.index()].children.is_empty()
    }

    pub fn render_as_page(&self) -> bool {
        self.has_children()
            || self.kind().is_markdown()
            || (self.config().separate_global_declarations && self.kind().is_global())
    }

    /// The parent page links here instead of inlining the content.
    pub fn omit_content_from_parent(&self) -> bool {
        self.config().separate_global_declarations && self.render_as_page()
    }

    /// Lexical ancestors from the root down to this node.
    pub fn namespace_path(&self) -> Vec<Node<'a>> {
        let mut path = vec![*self];
        let mut current = self.parent_in_code();
        while let Some(node) = current {
            path.push(node);
            current = node.parent_in_code();
        }
        path.reverse();
        path
    }

    pub fn fully_qualified_name(&self) -> String {
        self.namespace_path()
            .iter()
            .map(|n| n.name())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Matches the qualified name in free text, allowing generic arguments
    /// after each segment (`Outer<T>.Inner`).
    pub fn fully_qualified_name_regex(&self) -> Result<Regex, regex::Error> {
        let pattern = self
            .namespace_path()
            .iter()
            .map(|n| regex::escape(n.name()))
            .collect::<Vec<_>>()
            .join(r"(?:<.*?>)?\.");
        Regex::new(&pattern)
    }

    pub fn fully_qualified_module_name(&self) -> String {
        let name = self.fully_qualified_name();
        let root = self.namespace_path()[0];
        match root.decl().module.as_deref() {
            Some(module) => format!("{}.{}", module, name),
            None => name,
        }
    }

    /// Documentation ancestors from the root down to this node.
    pub fn docs_path(&self) -> Vec<Node<'a>> {
        let mut path = vec![*self];
        let mut current = self.parent_in_doc();
        while let Some(node) = current {
            path.push(node);
            current = node.parent_in_doc();
        }
        path.reverse();
        path
    }

    /// Should this node say which module it came from?
    pub fn need_doc_module_note(&self) -> bool {
        let config = self.config();
        if !config.multiple_modules() {
            return false;
        }
        let Some(doc_module) = self.decl().doc_module.as_deref() else {
            return false;
        };
        if self.docs_path()[0].name() == doc_module {
            return false;
        }
        match self.parent_in_code() {
            None => !self.render_as_page(),
            Some(parent) => {
                let parent_module = parent
                    .decl()
                    .module
                    .as_deref()
                    .or(parent.decl().doc_module.as_deref());
                parent_module != Some(doc_module)
            }
        }
    }

    pub fn declaration_note(&self) -> Option<String> {
        let decl = self.decl();
        let mut notes: Vec<String> = Vec::new();
        if decl.default_implementation {
            notes.push("default implementation".to_string());
        }
        if decl.from_protocol_extension {
            notes.push("extension method".to_string());
        }
        if decl.is_async {
            notes.push("asynchronous".to_string());
        }
        if self.need_doc_module_note() {
            if let Some(module) = decl.doc_module.as_deref() {
                notes.push(format!("from {}", module));
            }
        }
        if notes.is_empty() {
            return None;
        }
        let joined = notes.join(", ");
        let mut chars = joined.chars();
        chars
            .next()
            .map(|first| first.to_uppercase().chain(chars).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::model::Record;
    use crate::tree::{DocTree, TreeBuilder};

    fn rec(
        kind: &str,
        name: &str,
        module: &str,
        doc_module: &str,
        parent: Option<usize>,
    ) -> Record {
        Record {
            kind: kind.to_string(),
            name: name.to_string(),
            module: Some(module.to_string()),
            doc_module: Some(doc_module.to_string()),
            parent,
            ..Default::default()
        }
    }

    fn two_modules() -> Config {
        Config {
            documented_modules: vec!["Core".into(), "UI".into()],
            ..Default::default()
        }
    }

    fn build(config: &Config, records: Vec<Record>) -> DocTree {
        TreeBuilder::new(config).build(records).unwrap()
    }

    const STRUCT: &str = "source.lang.swift.decl.struct";
    const EXTENSION: &str = "source.lang.swift.decl.extension";
    const METHOD: &str = "source.lang.swift.decl.function.method.instance";
    const FUNC: &str = "source.lang.swift.decl.function.free";

    #[test]
    fn qualified_name_regex_allows_generic_arguments() {
        let tree = build(
            &Config::default(),
            vec![
                rec(STRUCT, "Outer", "Core", "Core", None),
                rec(STRUCT, "Inner", "Core", "Core", Some(0)),
            ],
        );
        let regex = tree
            .find("Outer.Inner")
            .unwrap()
            .fully_qualified_name_regex()
            .unwrap();
        assert!(regex.is_match("Outer<T>.Inner"));
        assert!(regex.is_match("see Outer.Inner for details"));
        assert!(!regex.is_match("OuterXInner"));
    }

    #[test]
    fn module_note_when_code_parent_is_from_another_module() {
        let tree = build(
            &two_modules(),
            vec![
                rec(STRUCT, "Model", "Core", "Core", None),
                rec(EXTENSION, "Model", "Core", "UI", None),
                rec(METHOD, "render()", "Core", "UI", Some(1)),
            ],
        );
        let render = tree.find("Model.render()").unwrap();
        assert!(render.need_doc_module_note());
        assert_eq!(render.declaration_note().as_deref(), Some("From UI"));
    }

    #[test]
    fn module_note_for_top_level_inline_declaration() {
        let tree = build(&two_modules(), vec![rec(FUNC, "f()", "Core", "UI", None)]);
        let f = tree.find("f()").unwrap();
        assert!(!f.render_as_page());
        assert!(f.need_doc_module_note());
    }

    #[test]
    fn no_module_note_inside_own_module() {
        let tree = build(&two_modules(), vec![rec(FUNC, "f()", "UI", "UI", None)]);
        let f = tree.find("f()").unwrap();
        assert_eq!(f.docs_path()[0].name(), "UI");
        assert!(!f.need_doc_module_note());
        assert_eq!(f.declaration_note(), None);

        let single = build(&Config::default(), vec![rec(FUNC, "f()", "Core", "UI", None)]);
        assert!(!single.find("f()").unwrap().need_doc_module_note());
    }

    #[test]
    fn declaration_note_joins_in_fixed_order() {
        let mut method = rec(METHOD, "load()", "Core", "Core", Some(0));
        method.default_implementation = true;
        method.is_async = true;
        let tree = build(
            &Config::default(),
            vec![rec(STRUCT, "Store", "Core", "Core", None), method],
        );
        assert_eq!(
            tree.find("Store.load()").unwrap().declaration_note().as_deref(),
            Some("Default implementation, asynchronous")
        );
    }
}

//! Documentation tree: an index-addressed arena of declarations.
//!
//! Every node has two parents. `parent_in_code` is the lexical container as
//! written in source; `parent_in_doc` is the node it is documented under,
//! which differs for members of merged extensions and for top-level
//! declarations (they sit under synthetic category groups). Documentation
//! links are written once, by [`DocTree::attach`], and never change.

pub mod build;
mod node;

pub use build::TreeBuilder;
pub use node::Node;

use crate::config::Config;
use crate::error::TreeError;
use crate::model::Declaration;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub(crate) struct DocNode {
    pub(crate) decl: Declaration,
    pub(crate) parent_in_code: Option<NodeId>,
    pub(crate) parent_in_doc: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// Section heading this node is listed under on its parent's page.
    pub(crate) section: Option<String>,
    /// Set on extension fragments whose members moved to a canonical node.
    pub(crate) merged_into: Option<NodeId>,
    pub(crate) synthetic: bool,
}

/// Something odd about the input that did not stop assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub nodes: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct DocTree {
    pub(crate) nodes: Vec<DocNode>,
    pub(crate) roots: Vec<NodeId>,
    pub(crate) config: Config,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl DocTree {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            config,
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn push(
        &mut self,
        decl: Declaration,
        parent_in_code: Option<NodeId>,
        synthetic: bool,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(DocNode {
            decl,
            parent_in_code,
            parent_in_doc: None,
            children: Vec::new(),
            section: None,
            merged_into: None,
            synthetic,
        });
        id
    }

    /// Give `parent` its documentation children, pointing each child back at it.
    pub(crate) fn attach(
        &mut self,
        parent: NodeId,
        children: Vec<NodeId>,
    ) -> Result<(), TreeError> {
        for &child in &children {
            if let Some(existing) = self.nodes[child.0].parent_in_doc {
                return Err(TreeError::DocParentReassigned {
                    node: child.0,
                    existing: existing.0,
                    new: parent.0,
                });
            }
        }
        for &child in &children {
            self.nodes[child.0].parent_in_doc = Some(parent);
        }
        self.nodes[parent.0].children = children;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of arena slots, including merged fragments and pruned nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Node<'_> {
        Node::new(self, id)
    }

    pub fn roots(&self) -> impl Iterator<Item = Node<'_>> + '_ {
        self.roots.iter().map(move |&id| self.node(id))
    }

    /// Every node reachable in the documentation forest, depth-first, in order.
    pub fn walk(&self) -> Vec<Node<'_>> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(self.node(id));
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    /// First node in the documentation forest with this fully qualified name.
    pub fn find(&self, qualified_name: &str) -> Option<Node<'_>> {
        self.walk()
            .into_iter()
            .find(|n| !n.is_synthetic() && n.fully_qualified_name() == qualified_name)
    }
}

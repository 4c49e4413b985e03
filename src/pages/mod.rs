//! Page assignment: file names and URLs for the finished tree.
//!
//! Nodes that render as pages get a file named after `docs_filename`,
//! placed in the directory of the page that encloses them. Everything else
//! is an anchor on its enclosing page.

mod plural;

pub use plural::{EnglishPluralizer, Pluralize};

use crate::taxonomy::Type;
use crate::tree::{DocTree, NodeId};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub node: NodeId,
    pub filename: String,
    pub url: String,
}

/// One entry of the top-level category directory.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub kind: Type,
    pub name: String,
    pub plural_name: String,
    pub url_name: String,
    pub plural_url_name: String,
    pub dash_type: String,
}

#[derive(Debug, Default)]
pub struct PageIndex {
    pages: Vec<Page>,
    urls: HashMap<NodeId, String>,
    categories: Vec<Category>,
}

impl PageIndex {
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn url(&self, id: NodeId) -> Option<&str> {
        self.urls.get(&id).map(String::as_str)
    }

    pub fn page(&self, id: NodeId) -> Option<&Page> {
        self.pages.iter().find(|p| p.node == id)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

/// Make a name safe to use as a file name. Letters, digits, `-`, `_` and
/// `.` pass through, spaces become `-`, everything else is percent-encoded.
pub fn safe_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            c if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') => out.push(c),
            ' ' => out.push('-'),
            c => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    if out.is_empty() || out.starts_with('.') {
        out.insert(0, '_');
    }
    out
}

/// Reserve `base` in a directory, appending `-2`, `-3`, ... on collision.
/// Comparison ignores case for case-insensitive file systems.
fn reserve(base: String, used: &mut HashSet<String>) -> String {
    if used.insert(base.to_lowercase()) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}-{}", base, n);
        if used.insert(candidate.to_lowercase()) {
            debug!("file name {} taken, using {}", base, candidate);
            return candidate;
        }
        n += 1;
    }
}

pub fn assign(tree: &DocTree, pluralizer: &dyn Pluralize) -> PageIndex {
    let mut index = PageIndex {
        categories: categories(pluralizer),
        ..Default::default()
    };
    let ext = tree.config().page_extension.clone();
    let mut used = HashSet::new();
    let roots: Vec<NodeId> = tree.roots().map(|r| r.id()).collect();
    for root in roots {
        visit(tree, root, "", None, &ext, &mut used, &mut index);
    }
    index
}

fn visit(
    tree: &DocTree,
    id: NodeId,
    dir: &str,
    enclosing_url: Option<&str>,
    ext: &str,
    used: &mut HashSet<String>,
    index: &mut PageIndex,
) {
    let node = tree.node(id);
    if !node.render_as_page() {
        let anchor = node
            .decl()
            .usr
            .clone()
            .unwrap_or_else(|| safe_filename(node.name()));
        let url = format!("{}#/{}", enclosing_url.unwrap_or(""), anchor);
        index.urls.insert(id, url);
        return;
    }

    let filename = reserve(safe_filename(&node.decl().docs_filename()), used);
    let path = if dir.is_empty() {
        filename.clone()
    } else {
        format!("{}/{}", dir, filename)
    };
    let url = format!("{}.{}", path, ext);
    index.pages.push(Page {
        node: id,
        filename,
        url: url.clone(),
    });
    index.urls.insert(id, url.clone());

    let mut scope = HashSet::new();
    let children: Vec<NodeId> = node.children().map(|c| c.id()).collect();
    for child in children {
        visit(tree, child, &path, Some(&url), ext, &mut scope, index);
    }
}

fn categories(pluralizer: &dyn Pluralize) -> Vec<Category> {
    Type::all()
        .into_iter()
        .filter_map(|ty| {
            Some(Category {
                name: ty.name()?.to_string(),
                plural_name: ty.plural_name(pluralizer)?,
                url_name: ty.url_name()?.to_string(),
                plural_url_name: ty.plural_url_name(pluralizer)?,
                dash_type: ty.dash_type()?.to_string(),
                kind: ty,
            })
        })
        .collect()
}

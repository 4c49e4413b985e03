//! Tree assembly: link records, merge extension fragments, group top-level
//! declarations into categories.
//!
//! Fragments of the same type (the primary declaration plus any number of
//! extensions or categories, possibly spread over several files) are grouped
//! by owning module and qualified name. One fragment becomes canonical and
//! receives every fragment's members as documentation children; the members
//! keep their lexical parent.

use super::{Diagnostic, DocTree, NodeId};
use crate::config::Config;
use crate::error::TreeError;
use crate::model::{Declaration, Record};
use crate::pages::{EnglishPluralizer, Pluralize};
use crate::taxonomy::{Kind, Type};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

pub struct TreeBuilder<'a> {
    config: &'a Config,
    pluralizer: &'a dyn Pluralize,
}

type GroupKey = (String, String);

/// Top-level declarations bucketed by category kind.
type Categories = BTreeMap<Kind, Vec<NodeId>>;

impl<'a> TreeBuilder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            pluralizer: &EnglishPluralizer,
        }
    }

    pub fn with_pluralizer(mut self, pluralizer: &'a dyn Pluralize) -> Self {
        self.pluralizer = pluralizer;
        self
    }

    pub fn build(&self, records: Vec<Record>) -> Result<DocTree, TreeError> {
        validate_parents(&records)?;

        let parents: Vec<Option<usize>> = records.iter().map(|r| r.parent).collect();
        let decls: Vec<Declaration> = records.into_iter().map(Declaration::from).collect();
        let kept = kept_records(&decls, &parents);

        let mut tree = DocTree::new(self.config.clone());
        let mut ids: Vec<Option<NodeId>> = vec![None; decls.len()];
        let mut dropped = 0usize;
        // Parents may appear after their children in the input, so link in a
        // second pass.
        for (index, decl) in decls.into_iter().enumerate() {
            if kept[index] {
                ids[index] = Some(tree.push(decl, None, false));
            } else {
                dropped += 1;
            }
        }
        for (index, parent) in parents.iter().enumerate() {
            if let (Some(id), Some(parent)) = (ids[index], parent) {
                tree.nodes[id.index()].parent_in_code = ids[*parent];
            }
        }
        if dropped > 0 {
            debug!("dropped {} records that are not documentable", dropped);
        }

        let (code_children, code_roots) = code_children(&tree);
        assign_sections(&mut tree, &code_children, &code_roots);
        label_constrained_members(&mut tree, &code_children);

        let merged_children = merge_fragments(&mut tree, &code_children);

        // Documentation children for every node that survived the merge.
        let real_nodes = tree.nodes.len();
        for index in 0..real_nodes {
            let id = NodeId(index);
            if tree.nodes[index].merged_into.is_some() {
                continue;
            }
            let source = merged_children.get(&id).unwrap_or(&code_children[index]);
            let mut children: Vec<NodeId> = source
                .iter()
                .copied()
                .filter(|c| tree.nodes[c.index()].merged_into.is_none())
                .collect();
            order_by_hint(&tree, &mut children);
            tree.attach(id, children)?;
        }

        let top_level: Vec<NodeId> = code_roots
            .into_iter()
            .filter(|id| tree.nodes[id.index()].merged_into.is_none())
            .collect();
        self.group_top_level(&mut tree, top_level)?;

        Ok(tree)
    }

    /// Put guides at the root and everything else under category groups,
    /// nested under one root per module when several are documented.
    fn group_top_level(&self, tree: &mut DocTree, top_level: Vec<NodeId>) -> Result<(), TreeError> {
        let mut guides = Vec::new();
        let mut modules: Vec<(String, Categories)> = self
            .config
            .documented_modules
            .iter()
            .map(|m| (m.clone(), Categories::new()))
            .collect();
        let mut single = Categories::new();

        for id in top_level {
            let decl = &tree.nodes[id.index()].decl;
            if decl.kind.is_markdown() {
                guides.push(id);
                continue;
            }
            if decl.kind.is_mark() {
                debug!("ignoring top-level mark {}", decl.name);
                continue;
            }
            let category = category_kind(&decl.kind);
            if self.config.multiple_modules() {
                let module = self.attributed_module(decl);
                let slot = match modules.iter().position(|(name, _)| *name == module) {
                    Some(slot) => slot,
                    None => {
                        modules.push((module, Categories::new()));
                        modules.len() - 1
                    }
                };
                modules[slot].1.entry(category).or_default().push(id);
            } else {
                single.entry(category).or_default().push(id);
            }
        }

        let mut roots = guides;
        if self.config.multiple_modules() {
            for (module, categories) in modules {
                if categories.is_empty() {
                    continue;
                }
                let groups = self.category_groups(tree, categories)?;
                let root = tree.push(Declaration::overview(module.clone(), module), None, true);
                tree.attach(root, groups)?;
                roots.push(root);
            }
        } else {
            roots.extend(self.category_groups(tree, single)?);
        }
        tree.roots = roots;
        Ok(())
    }

    fn category_groups(
        &self,
        tree: &mut DocTree,
        categories: Categories,
    ) -> Result<Vec<NodeId>, TreeError> {
        let mut groups = Vec::new();
        for (kind, mut members) in categories {
            let ty = Type::Known(kind);
            let name = ty.plural_name(self.pluralizer).unwrap_or_default();
            let url = ty.plural_url_name(self.pluralizer).unwrap_or_default();
            order_by_hint(tree, &mut members);
            let group = tree.push(Declaration::overview(name, url), None, true);
            tree.attach(group, members)?;
            groups.push(group);
        }
        Ok(groups)
    }

    /// Module a top-level declaration is listed under.
    fn attributed_module(&self, decl: &Declaration) -> String {
        let module = if decl.kind.is_extension() && !decl.type_from_doc_module() {
            decl.doc_module.as_ref().or(decl.module.as_ref())
        } else {
            decl.module.as_ref().or(decl.doc_module.as_ref())
        };
        module
            .or(self.config.documented_modules.first())
            .cloned()
            .unwrap_or_default()
    }
}

/// Swift extensions and unmerged Objective-C categories are all listed
/// under "Extensions".
fn category_kind(kind: &Type) -> Kind {
    if kind.is_extension() {
        return Kind::SwiftExtension;
    }
    kind.kind().unwrap_or(Kind::SwiftExtension)
}

fn validate_parents(records: &[Record]) -> Result<(), TreeError> {
    let len = records.len();
    for (index, record) in records.iter().enumerate() {
        if let Some(parent) = record.parent {
            if parent >= len {
                return Err(TreeError::UnknownParent {
                    index,
                    name: record.name.clone(),
                    parent,
                    len,
                });
            }
        }
    }
    for (index, record) in records.iter().enumerate() {
        let mut current = record.parent;
        let mut steps = 0usize;
        while let Some(parent) = current {
            if parent == index {
                return Err(TreeError::Cycle {
                    index,
                    name: record.name.clone(),
                });
            }
            steps += 1;
            // Leads into a cycle it is not part of; a member reports it
            if steps > len {
                break;
            }
            current = records[parent].parent;
        }
    }
    Ok(())
}

/// A record is kept when it and all its lexical ancestors are documentable
/// declarations, guides or task marks (section headings).
fn kept_records(decls: &[Declaration], parents: &[Option<usize>]) -> Vec<bool> {
    let keepable = |d: &Declaration| {
        d.kind.is_declaration()
            || d.kind.is_markdown()
            || d.kind.is_task_mark(&d.name)
    };
    (0..decls.len())
        .map(|index| {
            let mut current = Some(index);
            while let Some(i) = current {
                if !keepable(&decls[i]) {
                    return false;
                }
                current = parents[i];
            }
            true
        })
        .collect()
}

fn code_children(tree: &DocTree) -> (Vec<Vec<NodeId>>, Vec<NodeId>) {
    let mut children = vec![Vec::new(); tree.nodes.len()];
    let mut roots = Vec::new();
    for (index, node) in tree.nodes.iter().enumerate() {
        match node.parent_in_code {
            Some(parent) => children[parent.index()].push(NodeId(index)),
            None => roots.push(NodeId(index)),
        }
    }
    (children, roots)
}

/// `"MARK: - Helpers -"` → `Some("Helpers")`; a bare separator clears the section.
pub(crate) fn mark_label(text: &str) -> Option<String> {
    let text = text.strip_prefix("MARK:").unwrap_or(text);
    let label = text.trim().trim_matches('-').trim();
    if label.is_empty() {
        None
    } else {
        Some(label.to_string())
    }
}

fn assign_sections(tree: &mut DocTree, code_children: &[Vec<NodeId>], code_roots: &[NodeId]) {
    for siblings in code_children.iter().map(Vec::as_slice).chain([code_roots]) {
        let mut current: Option<String> = None;
        for &id in siblings {
            let node = &mut tree.nodes[id.index()];
            if node.decl.kind.is_mark() {
                current = mark_label(&node.decl.name);
                node.section = current.clone();
            } else {
                node.section = node.decl.mark.clone().or_else(|| current.clone());
            }
        }
    }
}

/// Qualified name used to match fragments: categories match their owner.
fn merge_name(tree: &DocTree, id: NodeId) -> String {
    let node = &tree.nodes[id.index()];
    let own = match node.decl.objc_category_name() {
        Some([owner, _]) => owner.to_string(),
        None => node.decl.name.clone(),
    };
    match node.parent_in_code {
        Some(parent) => format!("{}.{}", tree.node(parent).fully_qualified_name(), own),
        None => own,
    }
}

fn constrained_label(section: Option<&str>, requirements: &str) -> String {
    match section {
        Some(section) => format!("{}, available where {}", section, requirements),
        None => format!("Available where {}", requirements),
    }
}

/// Members of a constrained extension are listed under "Available where ...",
/// whether or not the extension merges into another fragment.
fn label_constrained_members(tree: &mut DocTree, code_children: &[Vec<NodeId>]) {
    for (index, members) in code_children.iter().enumerate() {
        let decl = &tree.nodes[index].decl;
        if !decl.constrained_extension() {
            continue;
        }
        let Some(requirements) = decl.generic_requirements.clone() else {
            continue;
        };
        for &child in members {
            let node = &mut tree.nodes[child.index()];
            node.section = Some(constrained_label(node.section.as_deref(), &requirements));
        }
    }
}

/// Merge fragments of the same type. Returns the documentation children of
/// each canonical node.
fn merge_fragments(
    tree: &mut DocTree,
    code_children: &[Vec<NodeId>],
) -> HashMap<NodeId, Vec<NodeId>> {
    let mut groups: HashMap<GroupKey, Vec<NodeId>> = HashMap::new();
    let mut order: Vec<GroupKey> = Vec::new();

    for index in 0..tree.nodes.len() {
        let decl = &tree.nodes[index].decl;
        if !(decl.kind.is_extensible() || decl.kind.is_extension()) {
            continue;
        }
        let module = decl
            .module
            .clone()
            .or_else(|| decl.doc_module.clone())
            .unwrap_or_default();
        let key = (module, merge_name(tree, NodeId(index)));
        let members = groups.entry(key.clone()).or_default();
        if members.is_empty() {
            order.push(key);
        }
        members.push(NodeId(index));
    }

    let mut merged = HashMap::new();
    for key in order {
        let members = &groups[&key];
        if members.len() < 2 {
            continue;
        }
        let kind_of = |id: &NodeId| tree.nodes[id.index()].decl.kind.clone();
        let primaries: Vec<NodeId> = members
            .iter()
            .copied()
            .filter(|id| !kind_of(id).is_extension())
            .collect();

        let canonical = primaries.first().copied().unwrap_or(members[0]);
        let canonical_kind = kind_of(&canonical);

        let clashing: Vec<NodeId> = primaries
            .iter()
            .copied()
            .filter(|id| kind_of(id) != canonical_kind)
            .collect();
        let same_kind = primaries
            .iter()
            .filter(|id| kind_of(id) == canonical_kind)
            .count();
        if !clashing.is_empty() {
            let message = format!(
                "{} is declared with conflicting kinds; declarations kept separate",
                key.1
            );
            warn!("{}", message);
            let mut nodes = vec![canonical];
            nodes.extend(&clashing);
            tree.diagnostics.push(Diagnostic { message, nodes });
        }
        if same_kind > 1 {
            let message = format!("{} is declared more than once; members merged", key.1);
            warn!("{}", message);
            tree.diagnostics.push(Diagnostic {
                message,
                nodes: primaries.clone(),
            });
        }

        let fragments: Vec<NodeId> = members
            .iter()
            .copied()
            .filter(|id| *id != canonical && !clashing.contains(id))
            .collect();

        // Categories of a type that is not documented here are shown under
        // the owner's name once several of them merge.
        if primaries.is_empty() {
            let decl = &mut tree.nodes[canonical.index()].decl;
            let owner = decl.objc_category_name().map(|[owner, _]| owner.to_string());
            if let Some(owner) = owner {
                decl.name = owner;
            }
        }

        let mut children = Vec::new();
        for fragment in std::iter::once(canonical).chain(fragments.iter().copied()) {
            children.extend(code_children[fragment.index()].iter().copied());
            if fragment != canonical {
                tree.nodes[fragment.index()].merged_into = Some(canonical);
            }
        }
        debug!("merged {} fragments into {}", fragments.len(), key.1);
        merged.insert(canonical, children);
    }
    merged
}

/// Stable sort by navigation-order hint when any sibling has one.
fn order_by_hint(tree: &DocTree, children: &mut [NodeId]) {
    let hint = |id: &NodeId| tree.nodes[id.index()].decl.nav_order;
    if children.iter().any(|c| hint(c).is_some()) {
        children.sort_by_key(|c| match hint(c) {
            Some(order) => (0, order),
            None => (1, 0),
        });
    }
}

//! Access-level pruning of the documentation tree.

use crate::model::AccessLevel;
use crate::tree::{DocTree, NodeId};
use tracing::debug;

/// Remove every node below `minimum` together with its documentation
/// subtree. Groups and marks are exempt from the access test: groups go
/// away once empty, marks once nothing is left in their section. Guides
/// always stay.
pub fn prune(mut tree: DocTree, minimum: AccessLevel) -> DocTree {
    let roots = std::mem::take(&mut tree.roots);
    let mut removed = 0usize;
    let kept: Vec<NodeId> = roots
        .into_iter()
        .filter(|&root| retain(&mut tree, root, minimum, &mut removed))
        .collect();
    tree.roots = kept;
    if removed > 0 {
        debug!("pruned {} subtrees below {}", removed, minimum);
    }
    tree
}

fn retain(tree: &mut DocTree, id: NodeId, minimum: AccessLevel, removed: &mut usize) -> bool {
    let decl = &tree.nodes[id.index()].decl;
    let exempt = decl.kind.is_overview() || decl.kind.is_mark() || decl.kind.is_markdown();
    let is_group = decl.kind.is_overview();
    if !exempt && decl.access < minimum {
        *removed += 1;
        return false;
    }

    let children = std::mem::take(&mut tree.nodes[id.index()].children);
    let mut kept: Vec<NodeId> = children
        .into_iter()
        .filter(|&child| retain(tree, child, minimum, removed))
        .collect();
    drop_empty_marks(tree, &mut kept);
    let empty = kept.is_empty();
    tree.nodes[id.index()].children = kept;

    !(is_group && empty)
}

/// A mark survives only if a non-mark sibling follows it before the next mark.
fn drop_empty_marks(tree: &DocTree, siblings: &mut Vec<NodeId>) {
    let is_mark = |id: NodeId| tree.nodes[id.index()].decl.kind.is_mark();
    let keep: Vec<bool> = (0..siblings.len())
        .map(|i| {
            if !is_mark(siblings[i]) {
                return true;
            }
            siblings[i + 1..]
                .iter()
                .take_while(|&&next| !is_mark(next))
                .next()
                .is_some()
        })
        .collect();
    let mut flags = keep.into_iter();
    siblings.retain(|_| flags.next().unwrap_or(true));
}

//! decltree: classify introspected declarations and assemble them into a
//! documentation tree.
//!
//! The pipeline, leaves first:
//!
//! 1. **Classify**: [`taxonomy::classify`] maps raw kind strings to [`taxonomy::Type`]
//! 2. **Assemble**: [`tree::TreeBuilder`] links records, merges extension
//!    fragments and groups top-level declarations into categories
//! 3. **Prune**: [`filter::prune`] drops declarations below the access threshold
//! 4. **Name**: [`pages::assign`] picks file names and URLs for pages
//!
//! Rendering is left to [`render`] and to whatever template layer consumes
//! the JSON output.

pub mod abstracts;
pub mod config;
pub mod coverage;
pub mod error;
pub mod filter;
pub mod model;
pub mod pages;
pub mod render;
pub mod search;
pub mod taxonomy;
pub mod tree;

pub use config::Config;
pub use error::TreeError;
pub use model::{AccessLevel, Declaration, Record};
pub use tree::{DocTree, Node, NodeId, TreeBuilder};

/// Assemble and prune in one step, using the configured access threshold.
pub fn document(records: Vec<Record>, config: &Config) -> Result<DocTree, TreeError> {
    let tree = TreeBuilder::new(config).build(records)?;
    Ok(filter::prune(tree, config.min_acl))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_prunes_with_configured_threshold() {
        let records = vec![
            Record {
                kind: "source.lang.swift.decl.struct".into(),
                name: "Public".into(),
                access: Some(AccessLevel::Public),
                ..Default::default()
            },
            Record {
                kind: "source.lang.swift.decl.struct".into(),
                name: "Hidden".into(),
                access: Some(AccessLevel::Internal),
                ..Default::default()
            },
        ];
        let tree = document(records.clone(), &Config::default()).unwrap();
        assert!(tree.find("Hidden").is_none());
        assert!(tree.find("Public").is_some());

        let internal = Config {
            min_acl: AccessLevel::Internal,
            ..Default::default()
        };
        let tree = document(records, &internal).unwrap();
        assert!(tree.find("Hidden").is_some());
    }
}

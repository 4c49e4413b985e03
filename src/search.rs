//! Search index keyed by URL.

use crate::pages::PageIndex;
use crate::tree::DocTree;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchEntry {
    pub name: String,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
}

pub fn build(tree: &DocTree, pages: &PageIndex) -> BTreeMap<String, SearchEntry> {
    let mut index = BTreeMap::new();
    for node in tree.walk() {
        if node.is_synthetic() || node.kind().is_mark() {
            continue;
        }
        let Some(url) = pages.url(node.id()) else {
            continue;
        };
        let parent_name = node
            .parent_in_doc()
            .filter(|p| !p.is_synthetic())
            .map(|p| p.name().to_string());
        index.insert(
            url.to_string(),
            SearchEntry {
                name: node.name().to_string(),
                abstract_text: node.decl().abstract_text.clone(),
                parent_name,
            },
        );
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::Record;
    use crate::pages::{assign, EnglishPluralizer};
    use crate::tree::TreeBuilder;

    #[test]
    fn indexes_declarations_by_url() {
        let records = vec![
            Record {
                kind: "source.lang.swift.decl.class".into(),
                name: "Client".into(),
                abstract_text: Some("Talks to the server.".into()),
                ..Default::default()
            },
            Record {
                kind: "source.lang.swift.decl.function.method.instance".into(),
                name: "send()".into(),
                usr: Some("s:6Client4sendyyF".into()),
                parent: Some(0),
                ..Default::default()
            },
        ];
        let tree = TreeBuilder::new(&Config::default()).build(records).unwrap();
        let pages = assign(&tree, &EnglishPluralizer);
        let index = build(&tree, &pages);

        assert_eq!(index.len(), 2);
        let client = &index["Classes/Client.html"];
        assert_eq!(client.parent_name, None);
        assert_eq!(client.abstract_text.as_deref(), Some("Talks to the server."));
        let send = &index["Classes/Client.html#/s:6Client4sendyyF"];
        assert_eq!(send.parent_name.as_deref(), Some("Client"));
    }
}

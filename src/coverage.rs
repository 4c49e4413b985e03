//! Documentation coverage and the undocumented-symbol report.

use crate::abstracts::AbstractLookup;
use crate::tree::DocTree;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UndocumentedEntry {
    pub file: Option<String>,
    pub line: Option<u32>,
    pub symbol: String,
    pub symbol_kind: String,
    pub warning: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coverage {
    pub documented: usize,
    pub total: usize,
    /// Whole percent, rounded down.
    pub percent: usize,
    pub warnings: Vec<UndocumentedEntry>,
}

/// Count documented declarations in the (already filtered) tree. Nodes that
/// should not prompt for documentation (external extensions, USR-less Swift
/// declarations) are left out of both counts unless they are documented.
pub fn report(tree: &DocTree, abstracts: &dyn AbstractLookup) -> Coverage {
    let config = tree.config();
    let mut documented = 0;
    let mut warnings = Vec::new();

    for node in tree.walk() {
        let decl = node.decl();
        if node.is_synthetic() || !decl.kind.is_declaration() {
            continue;
        }
        let has_prose = decl.is_documented()
            || (node.render_as_page() && decl.alternative_abstract(abstracts).is_some());
        if has_prose {
            documented += 1;
        } else if decl.mark_undocumented(config) {
            warnings.push(UndocumentedEntry {
                file: decl.location.file.clone(),
                line: decl.location.line,
                symbol: node.fully_qualified_name(),
                symbol_kind: decl.kind.raw_kind().to_string(),
                warning: "undocumented",
            });
        }
    }

    let total = documented + warnings.len();
    let percent = if total == 0 { 100 } else { documented * 100 / total };
    Coverage {
        documented,
        total,
        percent,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstracts::NoAbstracts;
    use crate::config::Config;
    use crate::model::Record;
    use crate::tree::TreeBuilder;

    #[test]
    fn counts_documented_and_lists_the_rest() {
        let records = vec![
            Record {
                kind: "source.lang.swift.decl.struct".into(),
                name: "Point".into(),
                usr: Some("s:5Point".into()),
                abstract_text: Some("A point.".into()),
                ..Default::default()
            },
            Record {
                kind: "source.lang.swift.decl.var.instance".into(),
                name: "x".into(),
                usr: Some("s:5Point1x".into()),
                file: Some("Point.swift".into()),
                line: Some(3),
                parent: Some(0),
                ..Default::default()
            },
            Record {
                kind: "source.lang.swift.decl.var.instance".into(),
                name: "y".into(),
                parent: Some(0),
                ..Default::default()
            },
        ];
        let tree = TreeBuilder::new(&Config::default()).build(records).unwrap();
        let coverage = report(&tree, &NoAbstracts);
        // `y` has no USR, so it is not reported
        assert_eq!(coverage.documented, 1);
        assert_eq!(coverage.total, 2);
        assert_eq!(coverage.percent, 50);
        assert_eq!(
            coverage.warnings,
            vec![UndocumentedEntry {
                file: Some("Point.swift".into()),
                line: Some(3),
                symbol: "Point.x".into(),
                symbol_kind: "source.lang.swift.decl.var.instance".into(),
                warning: "undocumented",
            }]
        );
    }

    #[test]
    fn module_tagged_records_are_reported_without_module_list() {
        let records = vec![Record {
            kind: "source.lang.swift.decl.struct".into(),
            name: "Point".into(),
            module: Some("Geo".into()),
            usr: Some("s:3Geo5PointV".into()),
            ..Default::default()
        }];
        let tree = TreeBuilder::new(&Config::default()).build(records).unwrap();
        let coverage = report(&tree, &NoAbstracts);
        assert_eq!(coverage.total, 1);
        assert_eq!(coverage.percent, 0);
        assert_eq!(coverage.warnings.len(), 1);
        assert_eq!(coverage.warnings[0].symbol, "Point");
    }

    #[test]
    fn extensions_of_other_modules_are_not_reported() {
        let config = Config {
            documented_modules: vec!["Geo".into()],
            ..Default::default()
        };
        let records = vec![Record {
            kind: "source.lang.swift.decl.extension".into(),
            name: "String".into(),
            module: Some("Swift".into()),
            usr: Some("s:SS".into()),
            ..Default::default()
        }];
        let tree = TreeBuilder::new(&config).build(records).unwrap();
        let coverage = report(&tree, &NoAbstracts);
        assert_eq!(coverage.total, 0);
        assert!(coverage.warnings.is_empty());
    }

    #[test]
    fn empty_tree_is_fully_covered() {
        let tree = TreeBuilder::new(&Config::default()).build(Vec::new()).unwrap();
        assert_eq!(report(&tree, &NoAbstracts).percent, 100);
    }
}

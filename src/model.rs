//! Declaration records and their node-local accessors.
//!
//! [`Record`] is the flat shape the introspection tool hands us (one JSON
//! object per declaration). [`Declaration`] is the classified, immutable
//! content of a tree node. Accessors that need the tree (paths, notes,
//! page decisions) live on [`crate::tree::Node`].

use crate::abstracts::AbstractLookup;
use crate::config::Config;
use crate::taxonomy::{classify, Type};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ASYNC_KEYWORD_MARKUP: &str = "<syntaxtype.keyword>async</syntaxtype.keyword>";
const ACCESSIBILITY_PREFIX: &str = "source.lang.swift.accessibility.";

/// Visibility, totally ordered from least to most visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AccessLevel {
    Private,
    FilePrivate,
    Internal,
    Package,
    Public,
    Open,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Private => "private",
            AccessLevel::FilePrivate => "fileprivate",
            AccessLevel::Internal => "internal",
            AccessLevel::Package => "package",
            AccessLevel::Public => "public",
            AccessLevel::Open => "open",
        }
    }
}

impl FromStr for AccessLevel {
    type Err = String;

    /// Accepts both `public` and `source.lang.swift.accessibility.public`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s.strip_prefix(ACCESSIBILITY_PREFIX).unwrap_or(s);
        match bare.to_ascii_lowercase().as_str() {
            "private" => Ok(AccessLevel::Private),
            "fileprivate" => Ok(AccessLevel::FilePrivate),
            "internal" => Ok(AccessLevel::Internal),
            "package" => Ok(AccessLevel::Package),
            "public" => Ok(AccessLevel::Public),
            "open" => Ok(AccessLevel::Open),
            _ => Err(format!("unknown access level: {s}")),
        }
    }
}

impl TryFrom<String> for AccessLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Swift,
    Objc,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub discussion: Option<String>,
}

/// One flat declaration record as emitted by the introspection tool.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Record {
    pub kind: String,
    pub name: String,
    pub url_name: Option<String>,
    pub declaration: Option<String>,
    pub other_language_declaration: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub end_line: Option<u32>,
    pub usr: Option<String>,
    pub type_usr: Option<String>,
    pub module: Option<String>,
    pub doc_module: Option<String>,
    pub access: Option<AccessLevel>,
    pub generic_requirements: Option<String>,
    pub inherited_types: Vec<String>,
    pub deprecated: bool,
    pub deprecation_message: Option<String>,
    pub unavailable: bool,
    pub unavailable_message: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub discussion: Option<String>,
    pub parameters: Vec<Parameter>,
    pub returns: Option<String>,
    pub mark: Option<String>,
    pub nav_order: Option<i64>,
    pub default_implementation: bool,
    pub from_protocol_extension: bool,
    #[serde(rename = "async")]
    pub is_async: bool,
    /// Index of the lexical container within the same record list.
    pub parent: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Location {
    pub file: Option<String>,
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub end_line: Option<u32>,
}

/// Classified content of one documentation node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    pub kind: Type,
    pub name: String,
    pub url_name: Option<String>,
    pub declaration: Option<String>,
    pub other_language_declaration: Option<String>,
    pub location: Location,
    pub usr: Option<String>,
    pub type_usr: Option<String>,
    pub module: Option<String>,
    pub doc_module: Option<String>,
    pub access: AccessLevel,
    pub generic_requirements: Option<String>,
    pub inherited_types: Vec<String>,
    pub deprecated: bool,
    pub deprecation_message: Option<String>,
    pub unavailable: bool,
    pub unavailable_message: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub discussion: Option<String>,
    pub parameters: Vec<Parameter>,
    pub returns: Option<String>,
    pub mark: Option<String>,
    pub nav_order: Option<i64>,
    pub default_implementation: bool,
    pub from_protocol_extension: bool,
    pub is_async: bool,
}

impl From<Record> for Declaration {
    fn from(record: Record) -> Self {
        let kind = classify(&record.kind, record.declaration.as_deref());
        let is_async = record.is_async
            || record
                .declaration
                .as_deref()
                .is_some_and(|d| d.contains(ASYNC_KEYWORD_MARKUP));
        Declaration {
            kind,
            name: record.name,
            url_name: record.url_name,
            declaration: record.declaration,
            other_language_declaration: record.other_language_declaration,
            location: Location {
                file: record.file,
                line: record.line,
                column: record.column,
                end_line: record.end_line,
            },
            usr: record.usr,
            type_usr: record.type_usr,
            module: record.module,
            doc_module: record.doc_module,
            access: record.access.unwrap_or(AccessLevel::Public),
            generic_requirements: record.generic_requirements,
            inherited_types: record.inherited_types,
            deprecated: record.deprecated,
            deprecation_message: record.deprecation_message,
            unavailable: record.unavailable,
            unavailable_message: record.unavailable_message,
            abstract_text: record.abstract_text,
            discussion: record.discussion,
            parameters: record.parameters,
            returns: record.returns,
            mark: record.mark,
            nav_order: record.nav_order,
            default_implementation: record.default_implementation,
            from_protocol_extension: record.from_protocol_extension,
            is_async,
        }
    }
}

impl Declaration {
    /// A grouping node that exists only in the documentation tree.
    pub fn overview(name: impl Into<String>, url_name: impl Into<String>) -> Self {
        Declaration {
            kind: Type::overview(),
            name: name.into(),
            url_name: Some(url_name.into()),
            declaration: None,
            other_language_declaration: None,
            location: Location::default(),
            usr: None,
            type_usr: None,
            module: None,
            doc_module: None,
            access: AccessLevel::Open,
            generic_requirements: None,
            inherited_types: Vec::new(),
            deprecated: false,
            deprecation_message: None,
            unavailable: false,
            unavailable_message: None,
            abstract_text: None,
            discussion: None,
            parameters: Vec::new(),
            returns: None,
            mark: None,
            nav_order: None,
            default_implementation: false,
            from_protocol_extension: false,
            is_async: false,
        }
    }

    /// Has prose of its own.
    pub fn is_documented(&self) -> bool {
        let present = |s: &Option<String>| s.as_deref().is_some_and(|t| !t.trim().is_empty());
        present(&self.abstract_text) || present(&self.discussion)
    }

    /// `"Owner(Category)"` → `["Owner", "Category"]` for category nodes.
    pub fn objc_category_name(&self) -> Option<[&str; 2]> {
        if !self.kind.is_objc_category() {
            return None;
        }
        let (owner, rest) = self.name.split_once('(')?;
        let category = rest.strip_suffix(')')?;
        Some([owner, category])
    }

    fn dialect(&self) -> Language {
        if self.kind.is_swift() {
            Language::Swift
        } else {
            Language::Objc
        }
    }

    pub fn display_language(&self, config: &Config) -> Language {
        let has_other = self.other_language_declaration.is_some();
        match self.dialect() {
            Language::Swift if config.hide_swift && has_other => Language::Objc,
            Language::Objc if config.hide_objc && has_other => Language::Swift,
            dialect => dialect,
        }
    }

    pub fn display_declaration(&self, config: &Config) -> Option<&str> {
        if self.display_language(config) == self.dialect() {
            self.declaration.as_deref()
        } else {
            self.other_language_declaration.as_deref()
        }
    }

    /// The declaration in the language not shown first; `None` when either
    /// language is hidden.
    pub fn display_other_language_declaration(&self, config: &Config) -> Option<&str> {
        if config.hide_objc || config.hide_swift {
            return None;
        }
        self.other_language_declaration.as_deref()
    }

    pub fn extension_of_external_type(&self, config: &Config) -> bool {
        self.module
            .as_deref()
            .is_some_and(|module| !config.module_name(module))
    }

    /// Should a top-level grouping attribute this node to its own module?
    pub fn type_from_doc_module(&self) -> bool {
        !self.kind.is_extension()
            || (self.kind.is_swift()
                && self.usr.is_some()
                && match self.module.as_deref() {
                    None => true,
                    Some(module) => self.doc_module.as_deref() == Some(module),
                })
    }

    /// Should a missing comment be reported?
    pub fn mark_undocumented(&self, config: &Config) -> bool {
        !self.kind.is_swift() || (self.usr.is_some() && !self.extension_of_external_type(config))
    }

    pub fn ambiguous_module_name(&self, group_name: &str, config: &Config) -> bool {
        self.extension_of_external_type(config)
            || (config.multiple_modules()
                && self.module.as_deref().is_some_and(|module| module != group_name))
    }

    pub fn constrained_extension(&self) -> bool {
        self.kind.is_extension()
            && self
                .generic_requirements
                .as_deref()
                .is_some_and(|r| !r.trim().is_empty())
    }

    /// Base name for output files. Free functions get a suffix built from
    /// their type USR so that overloads do not share a file.
    pub fn docs_filename(&self) -> String {
        let base = self.url_name.as_deref().unwrap_or(&self.name);
        match self.type_usr.as_deref() {
            Some(type_usr) if self.kind.is_free_function() => {
                let suffix: Vec<&str> = type_usr
                    .split(|c: char| !c.is_ascii_alphanumeric())
                    .filter(|part| !part.is_empty())
                    .collect();
                if suffix.is_empty() {
                    base.to_string()
                } else {
                    format!("{}_{}", base, suffix.join("_"))
                }
            }
            _ => base.to_string(),
        }
    }

    /// Overview text from an external abstract file, if one matches.
    pub fn alternative_abstract(&self, lookup: &dyn AbstractLookup) -> Option<String> {
        let mut names = vec![self.name.as_str()];
        if let Some(url_name) = self.url_name.as_deref() {
            names.push(url_name);
        }
        lookup.find(&names)
    }
}

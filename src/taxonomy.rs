//! Declaration kind taxonomy.
//!
//! Maps the opaque kind identifiers emitted by the introspection tool
//! (`source.lang.swift.decl.class`, `sourcekitten.source.lang.objc.decl.category`, ...)
//! onto a closed [`Kind`] enumeration. Each variant owns one row of [`TABLE`],
//! which carries the reader-facing name, URL segment, docset category and
//! whether the kind deserves a top-level page.
//!
//! Kinds that the table does not know about classify to [`Type::Unknown`]:
//! they have no display name and every predicate answers `false` for them.

use crate::pages::Pluralize;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

const SWIFT_PREFIX: &str = "source.lang.swift";
const SWIFT_DECL_PREFIX: &str = "source.lang.swift.decl";
const OBJC_DECL_PREFIX: &str = "sourcekitten.source.lang.objc.decl";

/// Markup the introspection tool wraps around the `actor` keyword in
/// fully-annotated declarations.
pub const ACTOR_KEYWORD_MARKUP: &str = "<syntaxtype.keyword>actor</syntaxtype.keyword>";

/// Every kind the taxonomy knows. The discriminant is the row index in [`TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    // Objective-C
    ObjcUnexposed,
    ObjcCategory,
    ObjcClass,
    ObjcConstant,
    ObjcEnum,
    ObjcEnumCase,
    ObjcInitializer,
    ObjcClassMethod,
    ObjcInstanceMethod,
    ObjcProperty,
    ObjcProtocol,
    ObjcTypedef,
    ObjcMark,
    ObjcFunction,
    ObjcStruct,
    ObjcUnion,
    ObjcField,
    ObjcIvar,
    ObjcModuleImport,
    // Swift
    SwiftAddressor,
    SwiftMutableAddressor,
    SwiftDidSet,
    SwiftGetter,
    SwiftSetter,
    SwiftWillSet,
    SwiftOperator,
    SwiftInfixOperator,
    SwiftPostfixOperator,
    SwiftPrefixOperator,
    SwiftClassMethod,
    SwiftClassVariable,
    SwiftClass,
    SwiftConstructor,
    SwiftDestructor,
    SwiftGlobalVariable,
    SwiftEnumCase,
    SwiftEnumElement,
    SwiftEnum,
    SwiftExtension,
    SwiftClassExtension,
    SwiftEnumExtension,
    SwiftProtocolExtension,
    SwiftStructExtension,
    SwiftFreeFunction,
    SwiftInstanceMethod,
    SwiftInstanceVariable,
    SwiftLocalVariable,
    SwiftParameter,
    SwiftProtocol,
    SwiftStaticMethod,
    SwiftStaticVariable,
    SwiftStruct,
    SwiftSubscript,
    SwiftTypealias,
    SwiftGenericTypeParam,
    SwiftAssociatedType,
    SwiftActor,
    SwiftPrecedenceGroup,
    SwiftMacro,
    SwiftMark,
    // Synthetic
    Overview,
    Markdown,
}

/// Static metadata for one [`Kind`].
#[derive(Debug)]
pub struct KindInfo {
    pub kind: Kind,
    pub raw: &'static str,
    /// Reader-facing name; `None` for kinds that never get a heading.
    pub name: Option<&'static str>,
    /// URL segment when it differs from `name`.
    pub url: Option<&'static str>,
    /// Docset category label.
    pub dash: &'static str,
    /// Deserves its own top-level page with separate global declarations.
    pub global: bool,
}

const fn row(
    kind: Kind,
    raw: &'static str,
    name: &'static str,
    dash: &'static str,
    global: bool,
) -> KindInfo {
    KindInfo {
        kind,
        raw,
        name: Some(name),
        url: None,
        dash,
        global,
    }
}

const fn row_url(
    kind: Kind,
    raw: &'static str,
    name: &'static str,
    url: &'static str,
    dash: &'static str,
    global: bool,
) -> KindInfo {
    KindInfo {
        kind,
        raw,
        name: Some(name),
        url: Some(url),
        dash,
        global,
    }
}

/// Row order must follow the [`Kind`] declaration order.
pub static TABLE: &[KindInfo] = &[
    row(
        Kind::ObjcUnexposed,
        "sourcekitten.source.lang.objc.decl.unexposed",
        "Unexposed",
        "Unexposed",
        false,
    ),
    row(
        Kind::ObjcCategory,
        "sourcekitten.source.lang.objc.decl.category",
        "Category",
        "Extension",
        true,
    ),
    row(
        Kind::ObjcClass,
        "sourcekitten.source.lang.objc.decl.class",
        "Class",
        "Class",
        true,
    ),
    row(
        Kind::ObjcConstant,
        "sourcekitten.source.lang.objc.decl.constant",
        "Constant",
        "Constant",
        true,
    ),
    row_url(
        Kind::ObjcEnum,
        "sourcekitten.source.lang.objc.decl.enum",
        "Enumeration",
        "Enum",
        "Enum",
        true,
    ),
    row(
        Kind::ObjcEnumCase,
        "sourcekitten.source.lang.objc.decl.enumcase",
        "Enumeration Case",
        "Case",
        false,
    ),
    row(
        Kind::ObjcInitializer,
        "sourcekitten.source.lang.objc.decl.initializer",
        "Initializer",
        "Initializer",
        false,
    ),
    row(
        Kind::ObjcClassMethod,
        "sourcekitten.source.lang.objc.decl.method.class",
        "Class Method",
        "Method",
        false,
    ),
    row(
        Kind::ObjcInstanceMethod,
        "sourcekitten.source.lang.objc.decl.method.instance",
        "Instance Method",
        "Method",
        false,
    ),
    row(
        Kind::ObjcProperty,
        "sourcekitten.source.lang.objc.decl.property",
        "Property",
        "Property",
        false,
    ),
    row(
        Kind::ObjcProtocol,
        "sourcekitten.source.lang.objc.decl.protocol",
        "Protocol",
        "Protocol",
        true,
    ),
    row_url(
        Kind::ObjcTypedef,
        "sourcekitten.source.lang.objc.decl.typedef",
        "Type Definition",
        "Typedef",
        "Type",
        true,
    ),
    row(
        Kind::ObjcMark,
        "sourcekitten.source.lang.objc.mark",
        "Mark",
        "Mark",
        false,
    ),
    row(
        Kind::ObjcFunction,
        "sourcekitten.source.lang.objc.decl.function",
        "Function",
        "Function",
        true,
    ),
    row_url(
        Kind::ObjcStruct,
        "sourcekitten.source.lang.objc.decl.struct",
        "Structure",
        "Struct",
        "Struct",
        true,
    ),
    row(
        Kind::ObjcUnion,
        "sourcekitten.source.lang.objc.decl.union",
        "Union",
        "Union",
        true,
    ),
    row(
        Kind::ObjcField,
        "sourcekitten.source.lang.objc.decl.field",
        "Field",
        "Field",
        false,
    ),
    row(
        Kind::ObjcIvar,
        "sourcekitten.source.lang.objc.decl.ivar",
        "Instance Variable",
        "Ivar",
        false,
    ),
    row(
        Kind::ObjcModuleImport,
        "sourcekitten.source.lang.objc.module.import",
        "Module",
        "Module",
        false,
    ),
    row(
        Kind::SwiftAddressor,
        "source.lang.swift.decl.function.accessor.address",
        "Addressor",
        "Function",
        false,
    ),
    row(
        Kind::SwiftMutableAddressor,
        "source.lang.swift.decl.function.accessor.mutableaddress",
        "Mutable Addressor",
        "Function",
        false,
    ),
    row(
        Kind::SwiftDidSet,
        "source.lang.swift.decl.function.accessor.didset",
        "didSet Observer",
        "Function",
        false,
    ),
    row(
        Kind::SwiftGetter,
        "source.lang.swift.decl.function.accessor.getter",
        "Getter",
        "Function",
        false,
    ),
    row(
        Kind::SwiftSetter,
        "source.lang.swift.decl.function.accessor.setter",
        "Setter",
        "Function",
        false,
    ),
    row(
        Kind::SwiftWillSet,
        "source.lang.swift.decl.function.accessor.willset",
        "willSet Observer",
        "Function",
        false,
    ),
    row(
        Kind::SwiftOperator,
        "source.lang.swift.decl.function.operator",
        "Operator",
        "Function",
        false,
    ),
    row(
        Kind::SwiftInfixOperator,
        "source.lang.swift.decl.function.operator.infix",
        "Infix Operator",
        "Function",
        false,
    ),
    row(
        Kind::SwiftPostfixOperator,
        "source.lang.swift.decl.function.operator.postfix",
        "Postfix Operator",
        "Function",
        false,
    ),
    row(
        Kind::SwiftPrefixOperator,
        "source.lang.swift.decl.function.operator.prefix",
        "Prefix Operator",
        "Function",
        false,
    ),
    row(
        Kind::SwiftClassMethod,
        "source.lang.swift.decl.function.method.class",
        "Class Method",
        "Method",
        false,
    ),
    row(
        Kind::SwiftClassVariable,
        "source.lang.swift.decl.var.class",
        "Class Variable",
        "Variable",
        false,
    ),
    row(
        Kind::SwiftClass,
        "source.lang.swift.decl.class",
        "Class",
        "Class",
        true,
    ),
    row(
        Kind::SwiftConstructor,
        "source.lang.swift.decl.function.constructor",
        "Initializer",
        "Constructor",
        false,
    ),
    row(
        Kind::SwiftDestructor,
        "source.lang.swift.decl.function.destructor",
        "Deinitializer",
        "Method",
        false,
    ),
    row(
        Kind::SwiftGlobalVariable,
        "source.lang.swift.decl.var.global",
        "Global Variable",
        "Global",
        true,
    ),
    row(
        Kind::SwiftEnumCase,
        "source.lang.swift.decl.enumcase",
        "Enumeration Case",
        "Case",
        false,
    ),
    row(
        Kind::SwiftEnumElement,
        "source.lang.swift.decl.enumelement",
        "Enumeration Element",
        "Element",
        false,
    ),
    row_url(
        Kind::SwiftEnum,
        "source.lang.swift.decl.enum",
        "Enumeration",
        "Enum",
        "Enum",
        true,
    ),
    row(
        Kind::SwiftExtension,
        "source.lang.swift.decl.extension",
        "Extension",
        "Extension",
        true,
    ),
    row(
        Kind::SwiftClassExtension,
        "source.lang.swift.decl.extension.class",
        "Class Extension",
        "Extension",
        true,
    ),
    row(
        Kind::SwiftEnumExtension,
        "source.lang.swift.decl.extension.enum",
        "Enum Extension",
        "Extension",
        true,
    ),
    row(
        Kind::SwiftProtocolExtension,
        "source.lang.swift.decl.extension.protocol",
        "Protocol Extension",
        "Extension",
        true,
    ),
    row(
        Kind::SwiftStructExtension,
        "source.lang.swift.decl.extension.struct",
        "Struct Extension",
        "Extension",
        true,
    ),
    row(
        Kind::SwiftFreeFunction,
        "source.lang.swift.decl.function.free",
        "Function",
        "Function",
        true,
    ),
    row(
        Kind::SwiftInstanceMethod,
        "source.lang.swift.decl.function.method.instance",
        "Instance Method",
        "Method",
        false,
    ),
    row(
        Kind::SwiftInstanceVariable,
        "source.lang.swift.decl.var.instance",
        "Instance Variable",
        "Property",
        false,
    ),
    row(
        Kind::SwiftLocalVariable,
        "source.lang.swift.decl.var.local",
        "Local Variable",
        "Variable",
        false,
    ),
    row(
        Kind::SwiftParameter,
        "source.lang.swift.decl.var.parameter",
        "Parameter",
        "Parameter",
        false,
    ),
    row(
        Kind::SwiftProtocol,
        "source.lang.swift.decl.protocol",
        "Protocol",
        "Protocol",
        true,
    ),
    row(
        Kind::SwiftStaticMethod,
        "source.lang.swift.decl.function.method.static",
        "Static Method",
        "Method",
        false,
    ),
    row(
        Kind::SwiftStaticVariable,
        "source.lang.swift.decl.var.static",
        "Static Variable",
        "Variable",
        false,
    ),
    row_url(
        Kind::SwiftStruct,
        "source.lang.swift.decl.struct",
        "Structure",
        "Struct",
        "Struct",
        true,
    ),
    row(
        Kind::SwiftSubscript,
        "source.lang.swift.decl.function.subscript",
        "Subscript",
        "Method",
        false,
    ),
    row_url(
        Kind::SwiftTypealias,
        "source.lang.swift.decl.typealias",
        "Type Alias",
        "Typealias",
        "Alias",
        true,
    ),
    row(
        Kind::SwiftGenericTypeParam,
        "source.lang.swift.decl.generic_type_param",
        "Generic Type Parameter",
        "Parameter",
        false,
    ),
    row(
        Kind::SwiftAssociatedType,
        "source.lang.swift.decl.associatedtype",
        "Associated Type",
        "Alias",
        false,
    ),
    row(
        Kind::SwiftActor,
        "source.lang.swift.decl.actor",
        "Actor",
        "Actor",
        true,
    ),
    row(
        Kind::SwiftPrecedenceGroup,
        "source.lang.swift.decl.precedencegroup",
        "Precedence Group",
        "Type",
        true,
    ),
    row(
        Kind::SwiftMacro,
        "source.lang.swift.decl.macro",
        "Macro",
        "Macro",
        true,
    ),
    row(
        Kind::SwiftMark,
        "source.lang.swift.syntaxtype.comment.mark",
        "Mark",
        "Mark",
        false,
    ),
    KindInfo {
        kind: Kind::Overview,
        raw: "Overview",
        name: None,
        url: None,
        dash: "Section",
        global: false,
    },
    row_url(
        Kind::Markdown,
        "document.markdown",
        "Guide",
        "Guide",
        "Guide",
        false,
    ),
];

static BY_RAW: LazyLock<HashMap<&'static str, Kind>> =
    LazyLock::new(|| TABLE.iter().map(|info| (info.raw, info.kind)).collect());

impl Kind {
    pub fn info(self) -> &'static KindInfo {
        &TABLE[self as usize]
    }

    pub fn from_raw(raw: &str) -> Option<Kind> {
        BY_RAW.get(raw).copied()
    }

    fn is_synthetic(self) -> bool {
        matches!(self, Kind::Overview | Kind::Markdown)
    }
}

/// Reclassify a class as an actor when its annotated declaration says so.
///
/// The introspection tool reports actors with the class kind. The only
/// signal is the highlighted `actor` keyword in the fully-annotated
/// declaration, so this breaks if the tool changes its markup.
pub fn correct_actor_kind(kind: Kind, declaration: Option<&str>) -> Kind {
    match (kind, declaration) {
        (Kind::SwiftClass, Some(text)) if text.contains(ACTOR_KEYWORD_MARKUP) => Kind::SwiftActor,
        _ => kind,
    }
}

/// Classify a raw kind string, applying the actor correction first.
pub fn classify(raw_kind: &str, declaration: Option<&str>) -> Type {
    match Kind::from_raw(raw_kind) {
        Some(kind) => Type::Known(correct_actor_kind(kind, declaration)),
        None => Type::Unknown(raw_kind.to_string()),
    }
}

/// Classified declaration kind. Equality and hashing follow the raw kind string.
#[derive(Debug, Clone)]
pub enum Type {
    Known(Kind),
    Unknown(String),
}

impl Type {
    pub fn new(raw_kind: &str) -> Self {
        classify(raw_kind, None)
    }

    pub fn overview() -> Self {
        Type::Known(Kind::Overview)
    }

    pub fn markdown() -> Self {
        Type::Known(Kind::Markdown)
    }

    /// One type per documentable table row, in table order.
    pub fn all() -> Vec<Type> {
        TABLE
            .iter()
            .filter(|info| info.name.is_some() && !info.kind.is_synthetic())
            .map(|info| Type::Known(info.kind))
            .collect()
    }

    pub fn kind(&self) -> Option<Kind> {
        match self {
            Type::Known(kind) => Some(*kind),
            Type::Unknown(_) => None,
        }
    }

    pub fn raw_kind(&self) -> &str {
        match self {
            Type::Known(kind) => kind.info().raw,
            Type::Unknown(raw) => raw,
        }
    }

    fn info(&self) -> Option<&'static KindInfo> {
        self.kind().map(Kind::info)
    }

    pub fn name(&self) -> Option<&'static str> {
        self.info().and_then(|info| info.name)
    }

    pub fn url_name(&self) -> Option<&'static str> {
        self.info().and_then(|info| info.url.or(info.name))
    }

    pub fn dash_type(&self) -> Option<&'static str> {
        self.info().map(|info| info.dash)
    }

    pub fn plural_name(&self, pluralizer: &dyn Pluralize) -> Option<String> {
        self.name().map(|name| pluralizer.pluralize(name))
    }

    pub fn plural_url_name(&self, pluralizer: &dyn Pluralize) -> Option<String> {
        self.url_name().map(|name| pluralizer.pluralize(name))
    }

    /// Gets its own page when global declarations are separated.
    pub fn is_global(&self) -> bool {
        self.info().is_some_and(|info| info.global)
    }

    pub fn is_overview(&self) -> bool {
        self.kind() == Some(Kind::Overview)
    }

    pub fn is_markdown(&self) -> bool {
        self.kind() == Some(Kind::Markdown)
    }

    pub fn is_objc_mark(&self) -> bool {
        self.kind() == Some(Kind::ObjcMark)
    }

    pub fn is_swift_mark(&self) -> bool {
        self.kind() == Some(Kind::SwiftMark)
    }

    pub fn is_mark(&self) -> bool {
        self.is_objc_mark() || self.is_swift_mark()
    }

    /// A mark that opens a section: any Objective-C `#pragma mark`, or a
    /// Swift `MARK:` comment. Swift `TODO:`/`FIXME:` comments are plain marks.
    pub fn is_task_mark(&self, label: &str) -> bool {
        self.is_objc_mark() || (self.is_swift_mark() && label.starts_with("MARK:"))
    }

    pub fn is_objc_enum(&self) -> bool {
        self.kind() == Some(Kind::ObjcEnum)
    }

    pub fn is_objc_typedef(&self) -> bool {
        self.kind() == Some(Kind::ObjcTypedef)
    }

    pub fn is_objc_category(&self) -> bool {
        self.kind() == Some(Kind::ObjcCategory)
    }

    pub fn is_objc_class(&self) -> bool {
        self.kind() == Some(Kind::ObjcClass)
    }

    pub fn is_swift(&self) -> bool {
        self.kind().is_some() && self.raw_kind().starts_with(SWIFT_PREFIX)
    }

    /// The introspection tool reports initializer locals with the same
    /// shape as parameters, so both count as parameters.
    pub fn is_param(&self) -> bool {
        matches!(
            self.kind(),
            Some(Kind::SwiftParameter | Kind::SwiftLocalVariable)
        )
    }

    pub fn is_generic_type_param(&self) -> bool {
        self.kind() == Some(Kind::SwiftGenericTypeParam)
    }

    pub fn is_swift_extension(&self) -> bool {
        matches!(
            self.kind(),
            Some(
                Kind::SwiftExtension
                    | Kind::SwiftClassExtension
                    | Kind::SwiftEnumExtension
                    | Kind::SwiftProtocolExtension
                    | Kind::SwiftStructExtension
            )
        )
    }

    /// Swift extensions and Objective-C categories.
    pub fn is_extension(&self) -> bool {
        self.is_swift_extension() || self.is_objc_category()
    }

    pub fn is_extensible(&self) -> bool {
        matches!(
            self.kind(),
            Some(
                Kind::SwiftClass
                    | Kind::SwiftStruct
                    | Kind::SwiftProtocol
                    | Kind::SwiftEnum
                    | Kind::SwiftActor
                    | Kind::ObjcClass
                    | Kind::ObjcStruct
                    | Kind::ObjcProtocol
                    | Kind::ObjcEnum
            )
        )
    }

    pub fn is_protocol(&self) -> bool {
        matches!(self.kind(), Some(Kind::SwiftProtocol | Kind::ObjcProtocol))
    }

    pub fn is_typealias(&self) -> bool {
        self.kind() == Some(Kind::SwiftTypealias)
    }

    pub fn is_free_function(&self) -> bool {
        matches!(self.kind(), Some(Kind::SwiftFreeFunction | Kind::ObjcFunction))
    }

    pub fn is_variable(&self) -> bool {
        self.kind().is_some() && self.raw_kind().starts_with("source.lang.swift.decl.var")
    }

    /// Should ever receive documentation.
    pub fn is_declaration(&self) -> bool {
        let raw = self.raw_kind();
        self.kind().is_some()
            && (raw.starts_with(SWIFT_DECL_PREFIX) || raw.starts_with(OBJC_DECL_PREFIX))
            && !self.is_param()
            && !self.is_generic_type_param()
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.raw_kind() == other.raw_kind()
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw_kind().hash(state);
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or(self.raw_kind()))
    }
}

impl Serialize for Type {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.raw_kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::EnglishPluralizer;
    use rstest::rstest;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(t: &Type) -> u64 {
        let mut hasher = DefaultHasher::new();
        t.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn table_rows_follow_kind_order() {
        for (index, info) in TABLE.iter().enumerate() {
            assert_eq!(info.kind as usize, index, "row for {}", info.raw);
        }
    }

    #[test]
    fn raw_kinds_are_unique() {
        assert_eq!(BY_RAW.len(), TABLE.len());
    }

    #[test]
    fn classify_is_deterministic() {
        let a = classify("source.lang.swift.decl.struct", Some("struct S"));
        let b = classify("source.lang.swift.decl.struct", Some("struct S"));
        assert_eq!(a, b);
        assert_eq!(a.name(), Some("Structure"));
    }

    #[test]
    fn unknown_kind_has_no_name() {
        let t = classify("source.lang.swift.decl.somethingnew", None);
        assert_eq!(t.name(), None);
        assert_eq!(t.url_name(), None);
        assert!(!t.is_global());
        assert!(!t.is_declaration());
        assert!(!t.is_swift());
        assert_eq!(t.raw_kind(), "source.lang.swift.decl.somethingnew");
    }

    #[test]
    fn actor_markup_reclassifies_class() {
        let decl = "<syntaxtype.keyword>actor</syntaxtype.keyword> <decl.name>Cache</decl.name>";
        let t = classify("source.lang.swift.decl.class", Some(decl));
        assert_eq!(t.kind(), Some(Kind::SwiftActor));
        assert_eq!(t.dash_type(), Some("Actor"));

        let plain = classify(
            "source.lang.swift.decl.class",
            Some("<syntaxtype.keyword>class</syntaxtype.keyword> Cache"),
        );
        assert_eq!(plain.dash_type(), Some("Class"));
    }

    #[test]
    fn actor_markup_ignored_for_structs() {
        let decl = "<syntaxtype.keyword>actor</syntaxtype.keyword>";
        let t = classify("source.lang.swift.decl.struct", Some(decl));
        assert_eq!(t.kind(), Some(Kind::SwiftStruct));
    }

    #[test]
    fn equality_and_hash_follow_raw_kind() {
        let a = Type::new("source.lang.swift.decl.enum");
        let b = classify("source.lang.swift.decl.enum", Some("enum E"));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let u1 = Type::Unknown("x.y".to_string());
        let u2 = classify("x.y", None);
        assert_eq!(u1, u2);
        assert_eq!(hash_of(&u1), hash_of(&u2));
        assert_ne!(a, u1);
    }

    #[test]
    fn url_name_defaults_to_name() {
        assert_eq!(Type::new("source.lang.swift.decl.class").url_name(), Some("Class"));
        assert_eq!(Type::new("source.lang.swift.decl.struct").url_name(), Some("Struct"));
        assert_eq!(Type::new("source.lang.swift.decl.struct").name(), Some("Structure"));
    }

    #[test]
    fn all_excludes_synthetic_and_keeps_table_order() {
        let all = Type::all();
        assert!(all.iter().all(|t| t.name().is_some()));
        assert!(!all.contains(&Type::overview()));
        assert!(!all.contains(&Type::markdown()));
        assert_eq!(all.first().and_then(|t| t.kind()), Some(Kind::ObjcUnexposed));
        assert_eq!(all.last().and_then(|t| t.kind()), Some(Kind::SwiftMark));
    }

    #[test]
    fn overview_has_no_reader_name() {
        assert_eq!(Type::overview().name(), None);
        assert_eq!(Type::markdown().name(), Some("Guide"));
    }

    #[rstest]
    #[case("source.lang.swift.decl.var.parameter", true)]
    #[case("source.lang.swift.decl.var.local", true)]
    #[case("source.lang.swift.decl.var.instance", false)]
    #[case("source.lang.swift.decl.generic_type_param", false)]
    fn parameter_like(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(Type::new(raw).is_param(), expected);
    }

    #[rstest]
    #[case("source.lang.swift.decl.class", true)]
    #[case("source.lang.swift.decl.function.free", true)]
    #[case("sourcekitten.source.lang.objc.decl.category", true)]
    #[case("source.lang.swift.decl.var.parameter", false)]
    #[case("source.lang.swift.decl.var.local", false)]
    #[case("source.lang.swift.decl.generic_type_param", false)]
    #[case("source.lang.swift.syntaxtype.comment.mark", false)]
    #[case("sourcekitten.source.lang.objc.mark", false)]
    #[case("document.markdown", false)]
    fn declarable(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(Type::new(raw).is_declaration(), expected);
    }

    #[rstest]
    #[case("source.lang.swift.decl.extension", true)]
    #[case("source.lang.swift.decl.extension.protocol", true)]
    #[case("sourcekitten.source.lang.objc.decl.category", true)]
    #[case("source.lang.swift.decl.class", false)]
    fn extensions(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(Type::new(raw).is_extension(), expected);
    }

    #[test]
    fn extensible_kinds() {
        for raw in [
            "source.lang.swift.decl.class",
            "source.lang.swift.decl.struct",
            "source.lang.swift.decl.protocol",
            "source.lang.swift.decl.enum",
            "source.lang.swift.decl.actor",
        ] {
            assert!(Type::new(raw).is_extensible(), "{raw}");
        }
        assert!(!Type::new("source.lang.swift.decl.typealias").is_extensible());
    }

    #[test]
    fn marks_and_task_marks() {
        let swift = Type::new("source.lang.swift.syntaxtype.comment.mark");
        let objc = Type::new("sourcekitten.source.lang.objc.mark");
        assert!(swift.is_mark() && objc.is_mark());
        assert!(swift.is_task_mark("MARK: - Helpers"));
        assert!(!swift.is_task_mark("TODO: finish"));
        assert!(!swift.is_task_mark("FIXME: leaks"));
        assert!(objc.is_task_mark("Helpers"));
        assert!(!Type::new("source.lang.swift.decl.class").is_task_mark("MARK: x"));
    }

    #[test]
    fn dialect_predicates() {
        assert!(Type::new("source.lang.swift.decl.class").is_swift());
        assert!(!Type::new("sourcekitten.source.lang.objc.decl.class").is_swift());
        assert!(Type::new("sourcekitten.source.lang.objc.decl.class").is_objc_class());
        assert!(Type::new("sourcekitten.source.lang.objc.decl.enum").is_objc_enum());
        assert!(Type::new("sourcekitten.source.lang.objc.decl.typedef").is_objc_typedef());
        assert!(Type::new("source.lang.swift.decl.var.static").is_variable());
        assert!(Type::new("source.lang.swift.decl.typealias").is_typealias());
        assert!(Type::new("source.lang.swift.decl.function.free").is_free_function());
    }

    #[test]
    fn plural_names() {
        let p = EnglishPluralizer;
        let class = Type::new("source.lang.swift.decl.class");
        assert_eq!(class.plural_name(&p).as_deref(), Some("Classes"));
        let alias = Type::new("source.lang.swift.decl.typealias");
        assert_eq!(alias.plural_name(&p).as_deref(), Some("Type Aliases"));
        assert_eq!(alias.plural_url_name(&p).as_deref(), Some("Typealiases"));
        assert_eq!(Type::overview().plural_name(&p), None);
    }
}

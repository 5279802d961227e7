//! Identifier extraction from interpreter introspection output
//!
//! Scans the text dump produced by `:type lookup <Module>` and collects the
//! declared names, bucketed into the categories a highlighting grammar
//! distinguishes: types, nested types, constants, properties/cases, and
//! top-level vs. member functions.
//!
//! Matching is line-oriented: top-level declarations start at column zero,
//! member declarations are indented by spaces, and either may be preceded by
//! `@attribute` annotations. Underscore-prefixed names are implementation
//! details of the standard library and are never collected; whole declaration
//! blocks of underscore-named types are scrubbed up front so their members do
//! not leak into the nested/member categories.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

/// Identifier categories, in the order report sections are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Types,
    NestedTypes,
    Constants,
    PropertiesCases,
    TopLevelFunctions,
    MemberFunctions,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 6] = [
        Category::Types,
        Category::NestedTypes,
        Category::Constants,
        Category::PropertiesCases,
        Category::TopLevelFunctions,
        Category::MemberFunctions,
    ];

    /// Header label for the category.
    pub fn label(self) -> &'static str {
        match self {
            Category::Types => "TYPES",
            Category::NestedTypes => "NESTED TYPES",
            Category::Constants => "CONSTANTS",
            Category::PropertiesCases => "PROPERTIES/CASES",
            Category::TopLevelFunctions => "TOP-LEVEL FUNCTIONS",
            Category::MemberFunctions => "MEMBER FUNCTIONS",
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Names the `:type lookup` dump omits from the type listing.
const SUPPLEMENTAL_TYPES: &[&str] = &["UnorderedRange"];

/// Standard-library diagnostic artifacts that must not surface as functions.
const EXCLUDED_FUNCTIONS: &[&str] = &[
    "KEY_TYPE_OF_DICTIONARY_VIOLATES_HASHABLE_REQUIREMENTS",
    "ELEMENT_TYPE_OF_SET_VIOLATES_HASHABLE_REQUIREMENTS",
    "unimplemented_utf8_32bit",
];

static TYPE_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^(?:@[\w_():'", ]+\s+)*(class|struct|actor|protocol|enum|typealias) ([^_]\w*)\b"#)
        .unwrap()
});

static NESTED_TYPE_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^ +(?:@[\w_():'", ]+ +)*(class|struct|actor|protocol|enum|typealias) ([^_]\w*)\b"#)
        .unwrap()
});

static CONSTANT_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^(?:@[\w_():'", ]+ +)*(?:class )?(?:var|let) (?:`([^_]\w*)`|([^_]\w*))"#)
        .unwrap()
});

static PROPERTY_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^ +(?:@[\w_():'", ]+ +)*(?:class )?(?:var|let|case) (?:`([^_]\w*)`|([^_]\w*))"#)
        .unwrap()
});

static FUNCTION_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^(?:@[\w_():'", ]+ +)*func (?:`([A-Za-z0-9]\w*)`|([A-Za-z0-9]\w*))"#).unwrap()
});

static MEMBER_FUNCTION_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^ +(?:@[\w_():'", ]+ +)*func (?:`([A-Za-z0-9]\w*)`|([A-Za-z0-9]\w*))"#)
        .unwrap()
});

/// Opening line of an underscore-named type's declaration block.
static PRIVATE_TYPE_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^([ \t]*)(?:@[\w_():'", ]+\s+)*(?:class|struct|protocol|extension) (?:\w+\.)*_\w+.+\{$"#)
        .unwrap()
});

/// Remove the declaration blocks of underscore-named types so their members
/// do not show up in the nested/member categories.
///
/// A block opens at a declaration line ending in `{` and runs to the first
/// line consisting of the opening line's indentation followed by `}`.
pub fn scrub_private_interfaces(contents: &str) -> String {
    let lines: Vec<&str> = contents.lines().collect();
    let mut out = String::with_capacity(contents.len());
    let mut i = 0;

    while i < lines.len() {
        if let Some(caps) = PRIVATE_TYPE_DECL.captures(lines[i]) {
            let indent = caps.get(1).map_or("", |m| m.as_str());
            let closing = format!("{}}}", indent);
            i += 1;
            while i < lines.len() && lines[i] != closing {
                i += 1;
            }
            // Step past the closing brace; the block collapses to one blank line.
            i += 1;
            out.push('\n');
            continue;
        }
        out.push_str(lines[i]);
        out.push('\n');
        i += 1;
    }

    out
}

/// Collect the identifiers of one category from (scrubbed) introspection text.
pub fn extract(category: Category, contents: &str) -> BTreeSet<String> {
    match category {
        Category::Types => types(contents),
        Category::NestedTypes => type_names(&NESTED_TYPE_DECL, contents),
        Category::Constants => quoted_or_bare_names(&CONSTANT_DECL, contents),
        Category::PropertiesCases => quoted_or_bare_names(&PROPERTY_DECL, contents),
        Category::TopLevelFunctions => top_level_functions(contents),
        Category::MemberFunctions => quoted_or_bare_names(&MEMBER_FUNCTION_DECL, contents),
    }
}

fn types(contents: &str) -> BTreeSet<String> {
    let mut names = type_names(&TYPE_DECL, contents);
    for name in SUPPLEMENTAL_TYPES {
        names.insert((*name).to_string());
    }
    names
}

fn type_names(pattern: &Regex, contents: &str) -> BTreeSet<String> {
    pattern
        .captures_iter(contents)
        .filter(|caps| {
            // `class var x` / `class func f` are member declarations, not a
            // type named `var` or `func`.
            !(&caps[1] == "class" && matches!(&caps[2], "var" | "func"))
        })
        .map(|caps| caps[2].to_string())
        .collect()
}

/// Name capture shared by the backticked/bare declaration patterns; the
/// backticks themselves are stripped.
fn quoted_or_bare(caps: &regex::Captures<'_>) -> Option<String> {
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}

fn quoted_or_bare_names(pattern: &Regex, contents: &str) -> BTreeSet<String> {
    pattern
        .captures_iter(contents)
        .filter_map(|caps| quoted_or_bare(&caps))
        .collect()
}

fn top_level_functions(contents: &str) -> BTreeSet<String> {
    FUNCTION_DECL
        .captures_iter(contents)
        .filter(|caps| !caps[0].contains("@_silgen_name"))
        .filter_map(|caps| quoted_or_bare(&caps))
        .filter(|name| !EXCLUDED_FUNCTIONS.contains(&name.as_str()))
        .collect()
}

//! Labeled report of optimized alternations
//!
//! Assembles one [`Section`] per identifier category and renders the report
//! either as the classic text layout (a header line per category followed by
//! the regex fragment) or, via serde, as JSON.

use std::fmt;

use serde::Serialize;

use crate::alternation::optimize_alternations;
use crate::scan::{self, Category};

/// One category's worth of output.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub category: Category,
    /// Optimized alternation matching every identifier in the category.
    pub pattern: String,
    /// Number of identifiers the pattern was built from.
    pub identifiers: usize,
}

/// Full report for one inspected module.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub module: String,
    pub sections: Vec<Section>,
}

impl Report {
    /// Build a report from a raw introspection dump.
    ///
    /// Private interfaces are scrubbed once, then every category is
    /// extracted and optimized in report order.
    pub fn from_introspection(module: &str, contents: &str) -> Report {
        let scrubbed = scan::scrub_private_interfaces(contents);
        let sections = Category::ALL
            .iter()
            .map(|&category| {
                let names = scan::extract(category, &scrubbed);
                let pattern = optimize_alternations(names.iter().map(String::as_str));
                Section {
                    category,
                    pattern,
                    identifiers: names.len(),
                }
            })
            .collect();
        Report {
            module: module.to_string(),
            sections,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "===== {} {} =====", self.module, section.category.label())?;
            writeln!(f, "{}", section.pattern)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

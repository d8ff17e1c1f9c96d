//! # Description Linter Module
//!
//! Style and consistency checks for wire-type descriptions. The generator's
//! validation pass rejects input it cannot render; the linter flags the
//! things that *will* render but are likely to bite later:
//!
//! 1. **Type name casing** - struct/enum names should be CamelCase
//! 2. **Member name casing** - fields and arguments should be lower_snake_case
//! 3. **Forward references** - a by-value member must be declared before use
//!    in the emitted C++
//! 4. **Empty structs** - legal, but serialize to nothing
//! 5. **Enum variant counts** - fewer than two variants cannot be packed
//! 6. **Runtime shadowing** - a type named like the runtime namespace
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wheelwright::linter::{lint_description, LintIssue, LintSeverity};
//!
//! let issues = lint_description(Path::new("types.yaml"))?;
//! for issue in &issues {
//!     eprintln!("[{}] {}: {}", issue.severity, issue.location, issue.message);
//! }
//! ```

use crate::description::{load_description, Declaration, Description, FieldDecl};
use crate::generator::{parse_type, to_camel_case, EmitOptions};
use std::collections::HashMap;
use std::path::Path;

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Error - Will cause generation to fail
    Error,
    /// Warning - Renders, but is likely a mistake
    Warning,
    /// Info - Best practice suggestion
    Info,
}

impl std::fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LintSeverity::Error => write!(f, "error"),
            LintSeverity::Warning => write!(f, "warning"),
            LintSeverity::Info => write!(f, "info"),
        }
    }
}

/// A lint issue found in a description
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Where the issue occurred (e.g., "declaration:Point/field:x")
    pub location: String,
    /// Severity of the issue
    pub severity: LintSeverity,
    /// Type of lint issue (e.g., "type_name_casing", "forward_reference")
    pub kind: String,
    /// Human-readable description of the problem
    pub message: String,
    /// Optional suggestion for how to fix it
    pub suggestion: Option<String>,
}

impl LintIssue {
    /// Create a new lint issue
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion for fixing the issue
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint a description file
///
/// # Arguments
///
/// * `path` - Path to the description file (YAML or JSON)
///
/// # Returns
///
/// A vector of lint issues found in the description
pub fn lint_description(path: &Path) -> anyhow::Result<Vec<LintIssue>> {
    let description = load_description(path)?;
    Ok(lint(&description))
}

/// Lint an already loaded description
pub fn lint(description: &Description) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    let runtime_ns = EmitOptions::default().runtime_namespace;

    if description.declarations.is_empty() {
        issues.push(LintIssue::new(
            "description",
            LintSeverity::Info,
            "empty_description",
            "description declares nothing; the output will be boilerplate only",
        ));
        return issues;
    }

    // Declaration index per type name, for forward-reference checks
    let declared: HashMap<&str, usize> = description
        .declarations
        .iter()
        .enumerate()
        .filter_map(|(index, decl)| match decl {
            Declaration::Struct(s) => Some((s.name.as_str(), index)),
            Declaration::Enum(e) => Some((e.name.as_str(), index)),
            Declaration::Function(_) | Declaration::Constant(_) => None,
        })
        .collect();

    for (index, decl) in description.declarations.iter().enumerate() {
        let location = if decl.name().is_empty() {
            format!("declaration:#{index}")
        } else {
            format!("declaration:{}", decl.name())
        };

        match decl {
            Declaration::Struct(s) => {
                lint_type_name(&mut issues, &location, &s.name);
                if s.fields.is_empty() {
                    issues.push(LintIssue::new(
                        location.clone(),
                        LintSeverity::Warning,
                        "empty_struct",
                        format!("struct '{}' has no fields and serializes to nothing", s.name),
                    ));
                }
                for field in &s.fields {
                    lint_member(&mut issues, &location, "field", field);
                    lint_reference(&mut issues, &location, index, &field.ty, &declared);
                }
            }
            Declaration::Enum(e) => {
                lint_type_name(&mut issues, &location, &e.name);
                if e.variants.len() < 2 {
                    issues.push(LintIssue::new(
                        location.clone(),
                        LintSeverity::Error,
                        "enum_variant_count",
                        format!(
                            "enum '{}' has {} variant(s); the runtime cannot pack fewer than two",
                            e.name,
                            e.variants.len()
                        ),
                    ));
                }
            }
            Declaration::Function(f) => {
                lint_member_name(&mut issues, &location, "function", &f.name);
                for arg in &f.args {
                    lint_member(&mut issues, &location, "argument", arg);
                    lint_reference(&mut issues, &location, index, &arg.ty, &declared);
                }
                if let Some(returns) = &f.returns {
                    lint_reference(&mut issues, &location, index, returns, &declared);
                }
            }
            Declaration::Constant(c) => {
                lint_reference(&mut issues, &location, index, &c.ty, &declared);
            }
        }

        if decl.name() == runtime_ns {
            issues.push(LintIssue::new(
                location,
                LintSeverity::Warning,
                "runtime_shadowing",
                format!(
                    "'{}' shadows the serialization runtime namespace",
                    decl.name()
                ),
            ));
        }
    }

    issues
}

fn lint_type_name(issues: &mut Vec<LintIssue>, location: &str, name: &str) {
    let not_camel =
        name.contains('_') || name.chars().next().is_some_and(|c| c.is_ascii_lowercase());
    if !name.is_empty() && not_camel {
        issues.push(
            LintIssue::new(
                location.to_string(),
                LintSeverity::Warning,
                "type_name_casing",
                format!("type name '{name}' is not CamelCase"),
            )
            .with_suggestion(format!("rename to '{}'", to_camel_case(name))),
        );
    }
}

fn lint_member_name(issues: &mut Vec<LintIssue>, location: &str, what: &str, name: &str) {
    if name.chars().any(|c| c.is_ascii_uppercase()) {
        issues.push(
            LintIssue::new(
                format!("{location}/{what}:{name}"),
                LintSeverity::Warning,
                "member_name_casing",
                format!("{what} name '{name}' is not lower_snake_case"),
            )
            .with_suggestion(format!("rename to '{}'", name.to_ascii_lowercase())),
        );
    }
}

fn lint_member(issues: &mut Vec<LintIssue>, location: &str, what: &str, member: &FieldDecl) {
    lint_member_name(issues, location, what, &member.name);
}

fn lint_reference(
    issues: &mut Vec<LintIssue>,
    location: &str,
    index: usize,
    ty: &str,
    declared: &HashMap<&str, usize>,
) {
    let parsed = match parse_type(ty) {
        Ok(parsed) => parsed,
        Err(reason) => {
            issues.push(LintIssue::new(
                location.to_string(),
                LintSeverity::Error,
                "invalid_type",
                format!("type '{ty}' does not parse: {reason}"),
            ));
            return;
        }
    };
    let mut refs = Vec::new();
    parsed.collect_named_refs(&mut refs);
    for name in refs {
        match declared.get(name) {
            None => {
                issues.push(LintIssue::new(
                    location.to_string(),
                    LintSeverity::Error,
                    "unknown_type",
                    format!("type '{name}' is not declared anywhere in the description"),
                ));
            }
            Some(&target) if target > index => {
                issues.push(
                    LintIssue::new(
                        location.to_string(),
                        LintSeverity::Warning,
                        "forward_reference",
                        format!(
                            "'{name}' is declared later in the description; C++ requires it before use"
                        ),
                    )
                    .with_suggestion(format!("move '{name}' before this declaration")),
                );
            }
            Some(_) => {}
        }
    }
}

/// Print lint issues grouped by severity
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        println!("✅ No lint issues found!");
        return;
    }

    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Error)
        .collect();
    let warnings: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Warning)
        .collect();
    let infos: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Info)
        .collect();

    println!("\n📋 Lint Results:");
    println!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        errors.len(),
        warnings.len(),
        infos.len()
    );

    if !errors.is_empty() {
        println!("❌ Errors (must fix):");
        for issue in &errors {
            print_issue(issue);
        }
        println!();
    }

    if !warnings.is_empty() {
        println!("⚠️  Warnings:");
        for issue in &warnings {
            print_issue(issue);
        }
        println!();
    }

    if !infos.is_empty() {
        println!("ℹ️  Info:");
        for issue in &infos {
            print_issue(issue);
        }
        println!();
    }
}

fn print_issue(issue: &LintIssue) {
    println!("   [{}] {}", issue.kind, issue.location);
    println!("      {}", issue.message);
    if let Some(suggestion) = &issue.suggestion {
        println!("      💡 Suggestion: {}", suggestion);
    }
}

/// Exit with a non-zero status if any error-severity issues are present
pub fn fail_if_errors(issues: &[LintIssue]) {
    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Error)
        .collect();
    if !errors.is_empty() {
        print_lint_issues(issues);
        std::process::exit(1);
    }
}

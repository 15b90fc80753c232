//! CLI output formatting.
//!
//! Output is page-centric: each generated document leads with its route and
//! locale, with the written file and document title as indented context.
//!
//! ## Build
//!
//! ```text
//! Pages
//! 001 home [ar] → index.html
//!     Title: Effect Wave | موجة تأثير
//! 002 about [ar] → ar/about/index.html
//!     Title: من نحن — Effect Wave | موجة تأثير
//! ...
//!
//! Assets
//!     Stylesheet: assets/site.3f9a1c2e.css
//!     Public: 18 files
//!
//! Generated 20 pages
//! ```
//!
//! ## Routes
//!
//! ```text
//! /            home        الرئيسية / Home
//! /about       about       من نحن / About Us
//! ...
//! ```
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::config::SiteConfig;
use crate::content::Audit;
use crate::generate::GenerateReport;
use crate::router;
use crate::types::{Locale, Route};

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Route name as used in logs and tables.
fn route_name(route: Route) -> &'static str {
    match route {
        Route::Home => "home",
        Route::NotFound => "not_found",
        other => other.slug(),
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_build_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (i, page) in report.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} [{}] → {}",
            format_index(i + 1),
            route_name(page.route),
            page.locale.as_str(),
            page.path.display()
        ));
        lines.push(format!("{}Title: {}", indent(1), page.title));
    }

    lines.push(String::new());
    lines.push("Assets".to_string());
    lines.push(format!(
        "{}Stylesheet: {}",
        indent(1),
        report.stylesheet.display()
    ));
    if report.assets_copied > 0 {
        lines.push(format!(
            "{}Public: {}",
            indent(1),
            plural(report.assets_copied, "file")
        ));
    }

    lines.push(String::new());
    lines.push(format!("Generated {}", plural(report.pages.len(), "page")));
    lines
}

pub fn print_build_output(report: &GenerateReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Routes
// ============================================================================

pub fn format_routes() -> Vec<String> {
    Route::ALL
        .into_iter()
        .chain([Route::NotFound])
        .map(|route| {
            let labels = match router::label(route) {
                Some(label) => format!(
                    "{} / {}",
                    label.get(Locale::Ar),
                    label.get(Locale::En)
                ),
                None => "(fallback)".to_string(),
            };
            let menu = if route == Route::NotFound || Route::MENU.contains(&route) {
                ""
            } else {
                " (footer only)"
            };
            format!("{:<12} {:<11} {}{}", route.path(), route_name(route), labels, menu)
        })
        .collect()
}

pub fn print_routes() {
    for line in format_routes() {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check(config: &SiteConfig, audit: &Audit) -> Vec<String> {
    let mut lines = vec![
        "Config".to_string(),
        format!("{}Base URL: {}", indent(1), config.site.base_url),
        format!("{}Contact: {}", indent(1), config.site.contact_email),
        format!("{}Title: {}", indent(1), config.meta.base_title),
        String::new(),
        "Content".to_string(),
        format!("{}Checked {}", indent(1), plural(audit.checked(), "string")),
    ];
    for issue in audit.issues() {
        lines.push(format!("{}Missing: {}", indent(1), issue));
    }
    lines.push(String::new());
    if audit.issues().is_empty() {
        lines.push("Content is complete".to_string());
    } else {
        lines.push(format!(
            "Found {}",
            plural(audit.issues().len(), "problem")
        ));
    }
    lines
}

pub fn print_check(config: &SiteConfig, audit: &Audit) {
    for line in format_check(config, audit) {
        println!("{}", line);
    }
}

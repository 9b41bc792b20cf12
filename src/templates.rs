//! Template registry and rendering
//!
//! Built-in templates are embedded at compile time so they are always
//! available and versioned with the binary. A user template directory can be
//! configured on top; every `.cs` file in it becomes a template. A leading
//! numeric prefix in a user template's file name (`"1 Class.cs"`) orders the
//! listing and is stripped from the display label.
//!
//! Rendering is literal substitution of `${name}` and `${namespace}` only.
//! When namespace emission is disabled, lines containing the `${namespace}`
//! placeholder are dropped before substitution, so templates should use
//! file-scoped namespace declarations.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Result, ScafforaError};

/// Built-in template table, in display order.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("Class", include_str!("../templates/class.cs")),
    ("Interface", include_str!("../templates/interface.cs")),
    ("Enum", include_str!("../templates/enum.cs")),
    ("Struct", include_str!("../templates/struct.cs")),
    ("Record", include_str!("../templates/record.cs")),
    ("Controller", include_str!("../templates/controller.cs")),
];

static NUMERIC_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\s+").expect("invalid numeric prefix regex"));

/// One selectable template.
#[derive(Debug, Clone)]
pub struct Template {
    /// Display label, numeric prefix stripped.
    pub label: String,
    /// Raw template body with placeholders.
    pub content: String,
    /// False for templates loaded from the user template directory.
    pub builtin: bool,
}

/// All available templates: built-ins first, then the user directory.
///
/// A user template whose label matches a built-in replaces it in place, so
/// users can restyle `Class` without forking the whole set. User templates
/// are sorted by file name with numeric awareness (`"2 Foo"` before
/// `"10 Bar"`).
pub fn available_templates(user_dir: Option<&Path>) -> Result<Vec<Template>> {
    let mut templates: Vec<Template> = BUILTIN_TEMPLATES
        .iter()
        .map(|(label, content)| Template {
            label: label.to_string(),
            content: content.to_string(),
            builtin: true,
        })
        .collect();

    if let Some(dir) = user_dir {
        for template in user_templates(dir)? {
            match templates.iter_mut().find(|t| t.label == template.label) {
                Some(existing) => *existing = template,
                None => templates.push(template),
            }
        }
    }

    Ok(templates)
}

/// Load the `.cs` files of a user template directory.
fn user_templates(dir: &Path) -> Result<Vec<Template>> {
    let entries = fs::read_dir(dir).map_err(|e| ScafforaError::IoError {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut files: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("cs")
        })
        .collect();

    files.sort_by(|a, b| {
        natural_cmp(
            &a.file_name().unwrap_or_default().to_string_lossy(),
            &b.file_name().unwrap_or_default().to_string_lossy(),
        )
    });

    let mut templates = Vec::new();
    for path in files {
        let content = fs::read_to_string(&path).map_err(|e| ScafforaError::IoError {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let label = NUMERIC_PREFIX.replace(&stem, "").to_string();

        templates.push(Template {
            label,
            content,
            builtin: false,
        });
    }

    Ok(templates)
}

/// Look a template up by label, case-insensitively.
pub fn find_template<'a>(templates: &'a [Template], name: &str) -> Option<&'a Template> {
    templates
        .iter()
        .find(|t| t.label.eq_ignore_ascii_case(name))
}

/// Render a template body for a new file.
///
/// `namespace = None` drops every line containing the `${namespace}`
/// placeholder before substitution.
pub fn render(content: &str, name: &str, namespace: Option<&str>) -> String {
    let body = match namespace {
        Some(_) => content.to_string(),
        None => {
            // Drop the declaration line and the blank line that follows it,
            // so the drop does not leave a doubled blank behind.
            let mut lines: Vec<&str> = Vec::new();
            let mut iter = content.lines().peekable();
            while let Some(line) = iter.next() {
                if line.contains("${namespace}") {
                    if iter.peek().map_or(false, |l| l.trim().is_empty()) {
                        iter.next();
                    }
                    continue;
                }
                lines.push(line);
            }
            while lines.first().map_or(false, |l| l.trim().is_empty()) {
                lines.remove(0);
            }
            let mut joined = lines.join("\n");
            if content.ends_with('\n') {
                joined.push('\n');
            }
            joined
        }
    };

    let body = body.replace("${name}", name);
    match namespace {
        Some(ns) => body.replace("${namespace}", ns),
        None => body,
    }
}

/// Compare strings treating runs of digits as numbers, so `"2 Foo"` sorts
/// before `"10 Bar"`. Also used to order the project picker.
pub(crate) fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a_chars = a.chars().peekable();
    let mut b_chars = b.chars().peekable();

    loop {
        match (a_chars.peek().copied(), b_chars.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ac), Some(bc)) => {
                if ac.is_ascii_digit() && bc.is_ascii_digit() {
                    let a_num = take_number(&mut a_chars);
                    let b_num = take_number(&mut b_chars);
                    match a_num.cmp(&b_num) {
                        Ordering::Equal => {}
                        other => return other,
                    }
                } else {
                    match ac.cmp(&bc) {
                        Ordering::Equal => {
                            a_chars.next();
                            b_chars.next();
                        }
                        other => return other,
                    }
                }
            }
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> u64 {
    let mut value: u64 = 0;
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        value = value.saturating_mul(10).saturating_add(c as u64 - '0' as u64);
        chars.next();
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_not_empty() {
        for (label, content) in BUILTIN_TEMPLATES {
            assert!(!content.is_empty(), "template {} is empty", label);
            assert!(
                content.contains("${name}"),
                "template {} lacks the name placeholder",
                label
            );
        }
    }

    #[test]
    fn test_find_template_case_insensitive() {
        let templates = available_templates(None).unwrap();
        assert!(find_template(&templates, "class").is_some());
        assert!(find_template(&templates, "Interface").is_some());
        assert!(find_template(&templates, "nope").is_none());
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let rendered = render(
            "namespace ${namespace};\n\npublic class ${name}\n{\n}\n",
            "Customer",
            Some("Shop.Models"),
        );
        assert_eq!(
            rendered,
            "namespace Shop.Models;\n\npublic class Customer\n{\n}\n"
        );
    }

    #[test]
    fn test_render_substitutes_every_occurrence() {
        let rendered = render("${name} ${name}", "X", None);
        assert_eq!(rendered, "X X");
    }

    #[test]
    fn test_render_without_namespace_drops_declaration_line() {
        let rendered = render(
            "using System;\n\nnamespace ${namespace};\n\npublic class ${name}\n{\n}\n",
            "Customer",
            None,
        );
        assert_eq!(rendered, "using System;\n\npublic class Customer\n{\n}\n");
    }

    #[test]
    fn test_natural_cmp_numeric_order() {
        assert_eq!(natural_cmp("2 Foo.cs", "10 Bar.cs"), Ordering::Less);
        assert_eq!(natural_cmp("Class.cs", "Enum.cs"), Ordering::Less);
        assert_eq!(natural_cmp("a10", "a10"), Ordering::Equal);
    }

    #[test]
    fn test_user_templates_strip_numeric_prefix() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("1 Service.cs"), "public class ${name} {}").unwrap();
        std::fs::write(temp.path().join("2 Repository.cs"), "public class ${name} {}").unwrap();

        let templates = available_templates(Some(temp.path())).unwrap();
        let labels: Vec<&str> = templates
            .iter()
            .filter(|t| !t.builtin)
            .map(|t| t.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Service", "Repository"]);
    }

    #[test]
    fn test_user_template_overrides_builtin() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("Class.cs"), "custom ${name}").unwrap();

        let templates = available_templates(Some(temp.path())).unwrap();
        let class = find_template(&templates, "Class").unwrap();
        assert!(!class.builtin);
        assert_eq!(class.content, "custom ${name}");
        // No duplicate label
        assert_eq!(templates.iter().filter(|t| t.label == "Class").count(), 1);
    }
}

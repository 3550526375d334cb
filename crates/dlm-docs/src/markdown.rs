//! Markdown reference pages.

use std::fmt::Write as _;

use dlm_schema::{Branch, EventTemplate, Leaf, SchemaNode, TemplateFile};
use serde_json::Value;

use crate::slug::slugify;

/// Nested bullet list describing every field of `branch`.
///
/// ```text
/// - **event** page_view (string)
/// - **ecommerce**:
///   - **value** (number) ✅ required
///   - **items** (array):
///     - **item_id** (string) ✅ required
/// ```
#[must_use]
pub fn render_fields(branch: &Branch) -> String {
    let mut out = String::new();
    push_fields(&mut out, branch, 0);
    out
}

fn push_fields(out: &mut String, branch: &Branch, depth: usize) {
    for (key, node) in branch.fields() {
        push_node(out, &format!("**{key}**"), node, depth);
    }
}

fn push_node(out: &mut String, label: &str, node: &SchemaNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        SchemaNode::Leaf(leaf) => {
            let _ = writeln!(out, "{indent}- {label} {}", leaf_summary(leaf));
        }
        SchemaNode::Branch(branch) => {
            let _ = writeln!(out, "{indent}- {label}:");
            push_fields(out, branch, depth + 1);
        }
        SchemaNode::List(list) => {
            let _ = writeln!(out, "{indent}- {label} (array):");
            match list.item() {
                SchemaNode::Branch(item) => push_fields(out, item, depth + 1),
                item => push_node(out, "*item*", item, depth + 1),
            }
        }
    }
}

/// `<default> (<type>) ✅ required`, omitting the parts that do not apply.
fn leaf_summary(leaf: &Leaf) -> String {
    let mut parts = Vec::with_capacity(3);
    if let Some(default) = &leaf.default {
        parts.push(display_value(default));
    }
    parts.push(format!("({})", leaf.type_name()));
    if leaf.required {
        parts.push("✅ required".to_string());
    }
    parts.join(" ")
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn summary_line(event: &EventTemplate) -> String {
    format!("- [{}](#{})", event.name(), slugify(event.name()))
}

fn push_event(out: &mut String, event: &EventTemplate, file_name: &str) {
    let _ = writeln!(out, "## {}\n", event.name());
    if let Some(description) = event.description() {
        let _ = writeln!(out, "{description}\n");
    }
    let _ = writeln!(out, "**Template file:** `{file_name}`\n");
    out.push_str("### ⚙️ Detailed Structure\n\n");
    if let Some(branch) = event.branch() {
        out.push_str(&render_fields(branch));
    }
    out.push('\n');

    if let Some(expected) = event.expected_structure() {
        let _ = writeln!(out, "### 🧩 Expected Payload\n\n```json\n{expected:#}\n```\n");
    }
}

/// Full reference page for one template file.
#[must_use]
pub fn render_file(file: &TemplateFile) -> String {
    let mut out = format!("# 📘 Documentation: {}\n\n## 📜 Summary\n\n", file.file_name());
    for event in file.events() {
        out.push_str(&summary_line(event));
        out.push('\n');
    }
    out.push('\n');
    for event in file.events() {
        push_event(&mut out, event, file.file_name());
    }
    out
}

/// One document covering every file, with a combined summary up front.
#[must_use]
pub fn render_merged(files: &[TemplateFile]) -> String {
    let mut out = String::from("# 📘 Full Documentation: All Events\n\n## 📜 Summary\n\n");
    for event in files.iter().flat_map(TemplateFile::events) {
        out.push_str(&summary_line(event));
        out.push('\n');
    }
    for file in files {
        out.push_str("\n---\n\n");
        out.push_str(&render_file(file));
    }
    out
}

use chrono::{TimeZone, Utc};
use dlm_docs::{lint_files, write_html, write_markdown, write_merged};
use dlm_schema::TemplateCatalog;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn templates(dir: &TempDir) -> TemplateCatalog {
    let templates = dir.path().join("templates");
    std::fs::create_dir_all(&templates).unwrap();
    std::fs::write(
        templates.join("cart.json"),
        r#"{
  "add_to_cart": {
    "event": {"type": "string", "default": "add_to_cart"},
    "ecommerce": {"value": {"type": "number", "required": true}},
    "docs": {"description": "Added to cart", "structureExpected": {"ecommerce": {}}}
  }
}"#,
    )
    .unwrap();
    std::fs::write(
        templates.join("general.json"),
        r#"{"page_view": {"page": {"type": "string"}}}"#,
    )
    .unwrap();
    TemplateCatalog::load_dir(&templates).unwrap()
}

#[test]
fn markdown_pages_are_written_per_file() {
    let dir = TempDir::new().unwrap();
    let catalog = templates(&dir);
    let out = dir.path().join("docs");

    let written = write_markdown(catalog.files(), &out).unwrap();

    assert_eq!(written, vec![out.join("cart.md"), out.join("general.md")]);
    let cart = std::fs::read_to_string(out.join("cart.md")).unwrap();
    assert!(cart.contains("## add_to_cart"));
    assert!(cart.contains("- **value** (number) ✅ required"));
}

#[test]
fn merged_markdown_goes_to_one_file() {
    let dir = TempDir::new().unwrap();
    let catalog = templates(&dir);
    let out = dir.path().join("docs");

    let path = write_merged(catalog.files(), &out, "all_events.md").unwrap();

    let merged = std::fs::read_to_string(path).unwrap();
    assert!(merged.contains("- [add_to_cart](#add_to_cart)"));
    assert!(merged.contains("- [page_view](#page_view)"));
}

#[test]
fn html_page_is_written_with_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let catalog = templates(&dir);
    let path = dir.path().join("site").join("events.html");
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

    write_html(catalog.files(), &path, "Events", at).unwrap();

    let page = std::fs::read_to_string(&path).unwrap();
    assert!(page.starts_with("<!doctype html>"));
    assert!(page.contains("id=\"cartjson-add_to_cart\""));
    assert!(page.contains("id=\"generaljson-page_view\""));
}

#[test]
fn lint_flags_incomplete_examples() {
    let dir = TempDir::new().unwrap();
    let catalog = templates(&dir);

    let reports = lint_files(catalog.files());

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].missing, vec!["add_to_cart.ecommerce.value"]);
    assert!(reports[1].is_clean());
}

//! Loading template directories from disk.

use std::fs;

use dlm_schema::{SchemaError, TemplateCatalog};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).expect("write template");
}

#[test]
fn loads_json_files_in_name_order() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "b_product.json",
        r#"{"view_item": {"item_id": {"type": "string", "required": true}}}"#,
    );
    write(
        &dir,
        "a_general.json",
        r#"{"page_view": {"page": {"title": {"type": "string"}}}}"#,
    );
    write(&dir, "notes.txt", "not a template");

    let catalog = TemplateCatalog::load_dir(dir.path()).unwrap();
    let files: Vec<&str> = catalog.files().iter().map(|f| f.file_name()).collect();
    assert_eq!(files, vec!["a_general.json", "b_product.json"]);
    assert_eq!(catalog.names(), vec!["page_view", "view_item"]);
}

#[test]
fn empty_directory_reports_no_templates() {
    let dir = TempDir::new().unwrap();
    let err = TemplateCatalog::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, SchemaError::NoTemplates(_)));
}

#[test]
fn missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = TemplateCatalog::load_dir(&dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, SchemaError::Io { .. }));
}

#[test]
fn malformed_file_fails_the_load() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "cart.json",
        r#"{"add_to_cart": {"ecommerce": {"value": 12}}}"#,
    );

    let err = TemplateCatalog::load_dir(dir.path()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid template file 'cart.json': malformed template at 'add_to_cart.ecommerce.value': \
         expected a leaf, object or array, found number"
    );
}

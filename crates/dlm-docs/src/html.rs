//! Single-page HTML reference with search and copy-to-clipboard.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use dlm_schema::{EventTemplate, TemplateFile};
use dlm_walk::{FillMode, fill_example};
use serde_json::Value;

use crate::slug::{escape_html, slugify};

const STYLE: &str = r#"
  :root{font-family:Inter,system-ui,-apple-system,Segoe UI,Roboto,"Helvetica Neue",Arial;color:#222}
  body{margin:0;padding:24px;background:#f7fafc}
  .container{max-width:1100px;margin:0 auto}
  header.page-header{display:flex;align-items:center;justify-content:space-between;margin-bottom:18px}
  h1{margin:0;font-size:20px}
  .layout{display:grid;grid-template-columns:320px 1fr;gap:20px}
  nav.toc{background:#fff;padding:16px;border-radius:8px}
  nav.toc ul{list-style:none;padding-left:0;margin:0;max-height:72vh;overflow:auto}
  nav.toc li{margin:8px 0}
  nav.toc a{color:#0b5fff;text-decoration:none}
  .event-card{background:#fff;padding:18px;border-radius:8px;margin-bottom:16px}
  .event-header{display:flex;justify-content:space-between;align-items:flex-start}
  .event-header h2{margin:0;font-size:16px}
  .meta{display:flex;gap:8px;align-items:center}
  .badge{background:#eef2ff;color:#1e3a8a;padding:4px 8px;border-radius:6px;font-size:12px}
  .source code{background:#f3f4f6;padding:2px 6px;border-radius:4px;font-size:12px}
  .desc{margin:12px 0 8px;color:#374151}
  .section h3{margin:0 0 8px 0;font-size:14px}
  .struct-list{margin:0 0 8px 0;padding-left:18px}
  .struct-list li{margin:6px 0}
  .json-block{background:#0f172a;color:#e6eef8;padding:12px;border-radius:6px;overflow:auto}
  .actions{margin-top:8px;display:flex;gap:8px}
  .btn{border:0;padding:8px 12px;border-radius:6px;cursor:pointer;background:#0b5fff;color:#fff;font-size:13px}
  .log-btn{background:#10b981}
  .search-input{width:100%;padding:8px;border-radius:6px;border:1px solid #e5e7eb}
  footer{margin-top:24px;color:#6b7280;font-size:13px}
  @media(max-width:900px){.layout{grid-template-columns:1fr}}
"#;

const SCRIPT: &str = r"
  const searchInput = document.getElementById('search');
  searchInput.addEventListener('input', (e) => {
    const q = e.target.value.toLowerCase().trim();
    document.querySelectorAll('.event-card').forEach((card) => {
      card.style.display = !q || card.innerText.toLowerCase().includes(q) ? '' : 'none';
    });
    document.querySelectorAll('#toc-list li').forEach((li) => {
      li.style.display = !q || li.innerText.toLowerCase().includes(q) ? '' : 'none';
    });
  });

  document.body.addEventListener('click', (ev) => {
    const copy = ev.target.closest('button.copy-btn');
    if (copy) {
      const el = document.getElementById(copy.getAttribute('data-copy-target'));
      if (!el) return;
      navigator.clipboard?.writeText(el.innerText).then(
        () => { copy.textContent = 'Copied!'; },
        () => { copy.textContent = 'Copy failed'; },
      ).finally(() => setTimeout(() => { copy.textContent = 'Copy JSON'; }, 1200));
      return;
    }
    const log = ev.target.closest('button.log-btn');
    if (log) {
      console.log('Example payload:', JSON.parse(log.getAttribute('data-payload')));
    }
  });
";

/// Nested `<ul>` rendering of a filled example tree.
#[must_use]
pub fn render_structure(value: &Value) -> String {
    let mut out = String::new();
    push_structure(&mut out, value);
    out
}

fn push_structure(out: &mut String, value: &Value) {
    out.push_str("<ul class=\"struct-list\">");
    match value {
        Value::Array(items) => {
            if let Some(first) = items.first() {
                push_structure(out, first);
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                let key = escape_html(key);
                match child {
                    Value::Array(_) => {
                        let _ = write!(out, "<li><code>{key} (Array)</code>");
                        push_structure(out, child);
                        out.push_str("</li>");
                    }
                    Value::Object(_) => {
                        let _ = write!(out, "<li><code>{key} (Object)</code>");
                        push_structure(out, child);
                        out.push_str("</li>");
                    }
                    scalar => {
                        let _ = write!(
                            out,
                            "<li><code>{key}</code>: <span class=\"val\">{}</span></li>",
                            escape_html(&scalar_text(scalar))
                        );
                    }
                }
            }
        }
        scalar => {
            let _ = write!(out, "<li>{}</li>", escape_html(&scalar_text(scalar)));
        }
    }
    out.push_str("</ul>");
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Example payload shown for an event: the documented expected structure,
/// else a simplified fill of the template.
#[must_use]
pub fn example_payload(event: &EventTemplate) -> Value {
    event.expected_structure().cloned().unwrap_or_else(|| {
        fill_example(event.schema(), None, FillMode::Simplified)
    })
}

/// Append the card for `event` and return its table-of-contents entry.
fn push_card(out: &mut String, file: &TemplateFile, event: &EventTemplate) -> String {
    let id = slugify(&format!("{}-{}", file.file_name(), event.name()));
    let name = escape_html(event.name());
    let source = escape_html(file.file_name());
    let example = example_payload(event);
    let structure = fill_example(
        event.schema(),
        event.expected_structure(),
        FillMode::Annotated,
    );

    let _ = writeln!(out, "<article id=\"{id}\" class=\"event-card\">");
    let _ = writeln!(
        out,
        "  <header class=\"event-header\">\n    <h2>{name}</h2>\n    <div class=\"meta\">\
         <span class=\"badge\">{}</span><span class=\"source\">Source: <code>{source}</code></span>\
         </div>\n  </header>",
        escape_html(event.event_name())
    );
    if let Some(description) = event.description() {
        let _ = writeln!(out, "  <p class=\"desc\">{}</p>", escape_html(description));
    }
    let _ = writeln!(
        out,
        "  <section class=\"section\">\n    <h3>Structure</h3>\n    {}\n  </section>",
        render_structure(&structure)
    );
    let _ = writeln!(
        out,
        "  <section class=\"section\">\n    <h3>Example Payload</h3>\n    \
         <pre class=\"json-block\" id=\"json-{id}\">{}</pre>\n    <div class=\"actions\">\
         <button data-copy-target=\"json-{id}\" class=\"btn copy-btn\">Copy JSON</button>\
         <button data-payload=\"{}\" class=\"btn log-btn\">Log to Console</button></div>\n  </section>",
        escape_html(&format!("{example:#}")),
        escape_html(&example.to_string())
    );
    out.push_str("</article>\n");

    format!(
        "<li><a href=\"#{id}\">{name}</a> <small class=\"source\">({source})</small></li>\n"
    )
}

/// Render the whole reference page.
#[must_use]
pub fn render_page(files: &[TemplateFile], title: &str, generated_at: DateTime<Utc>) -> String {
    let mut toc = String::new();
    let mut body = String::new();
    for file in files {
        for event in file.events() {
            toc.push_str(&push_card(&mut body, file, event));
        }
    }

    let title = escape_html(title);
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\" />\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <div class=\"container\">\n\
         <header class=\"page-header\"><h1>{title}</h1>\
         <div><input id=\"search\" class=\"search-input\" placeholder=\"Search events or fields...\" /></div>\
         </header>\n\
         <div class=\"layout\">\n\
         <nav class=\"toc\" aria-label=\"table of contents\"><h3>Index</h3>\n<ul id=\"toc-list\">\n{toc}</ul></nav>\n\
         <main class=\"content\" id=\"content\">\n{body}</main>\n\
         </div>\n\
         <footer>Generated by dlm on {}</footer>\n\
         </div>\n<script>{SCRIPT}</script>\n</body>\n</html>\n",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn files() -> Vec<TemplateFile> {
        vec![
            TemplateFile::parse(
                "product.json",
                &json!({
                    "view_item": {
                        "event": {"type": "string", "default": "view_item"},
                        "item": {"id": {"type": "string", "required": true}},
                        "docs": {"description": "Shown <b>once</b> per page"}
                    }
                }),
            )
            .unwrap(),
        ]
    }

    #[test]
    fn structure_lists_nest() {
        let html = render_structure(&json!({"a": "(string)", "b": [{"c": 1}], "d": {"e": true}}));
        assert_eq!(
            html,
            "<ul class=\"struct-list\">\
             <li><code>a</code>: <span class=\"val\">(string)</span></li>\
             <li><code>b (Array)</code><ul class=\"struct-list\"><ul class=\"struct-list\">\
             <li><code>c</code>: <span class=\"val\">1</span></li></ul></ul></li>\
             <li><code>d (Object)</code><ul class=\"struct-list\">\
             <li><code>e</code>: <span class=\"val\">true</span></li></ul></li>\
             </ul>"
        );
    }

    #[test]
    fn example_payload_falls_back_to_simplified_fill() {
        let files = files();
        assert_eq!(
            example_payload(&files[0].events()[0]),
            json!({"event": "view_item", "item": {"id": ""}})
        );
    }

    #[test]
    fn page_contains_toc_card_and_escaped_description() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let page = render_page(&files(), "Shop & Events", at);

        assert!(page.contains("<title>Shop &amp; Events</title>"));
        assert!(page.contains("<a href=\"#productjson-view_item\">view_item</a>"));
        assert!(page.contains("<article id=\"productjson-view_item\" class=\"event-card\">"));
        assert!(page.contains("Shown &lt;b&gt;once&lt;/b&gt; per page"));
        assert!(page.contains("<span class=\"val\">(string) ✅ required</span>"));
        assert!(page.contains("Generated by dlm on 2026-01-02 03:04 UTC"));
        assert!(!page.contains("docs"));
    }
}

//! Page path to section label resolution.

use std::collections::BTreeMap;

use dlm_config::DispatchConfig;

/// Resolves the classification label stamped on payloads that lack one.
///
/// `/products/red-shirt` takes the first segment `products`, maps it to a
/// page code through `pages` and the page code to a label through
/// `sections`. Unknown segments use the code of the default page; a code
/// with no label falls back to the segment itself.
#[derive(Debug, Clone)]
pub struct SectionResolver {
    default_page: String,
    pages: BTreeMap<String, String>,
    sections: BTreeMap<String, String>,
}

impl SectionResolver {
    #[must_use]
    pub fn new(config: &DispatchConfig) -> Self {
        Self {
            default_page: config.default_page.clone(),
            pages: config.pages.clone(),
            sections: config.sections.clone(),
        }
    }

    /// First path segment, ignoring query and fragment.
    #[must_use]
    pub fn segment<'a>(&'a self, page_path: &'a str) -> &'a str {
        let path = page_path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_start_matches('/');
        path.split('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or(&self.default_page)
    }

    #[must_use]
    pub fn resolve(&self, page_path: &str) -> String {
        let segment = self.segment(page_path);
        let code = self
            .pages
            .get(segment)
            .or_else(|| self.pages.get(&self.default_page));
        code.and_then(|code| self.sections.get(code))
            .map_or(segment, String::as_str)
            .to_string()
    }
}

//! Stylesheet rule index for positional avatar lookup.
//!
//! Channel listings don't put avatar URLs on the image elements. The site
//! emits a generated stylesheet whose selectors embed each entry's listing
//! position (`i.user-image--img--id-2 { background-image: url(...); }`),
//! so recovering an avatar is a two-stage pipeline: build an immutable
//! selector → declarations table from the document's first `<style>`
//! element, then look up the entry's positional selector in it. No
//! stylesheet, no matching rule, or no `background-image` declaration all
//! resolve to `None`, never an error.

use std::collections::HashMap;
use std::sync::LazyLock;

use scraper::{Html, Selector};

static STYLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("style").unwrap());

/// Immutable lookup table over the declarations of one stylesheet.
#[derive(Debug, Default)]
pub struct StyleRuleIndex {
    rules: HashMap<String, String>,
}

impl StyleRuleIndex {
    /// Index the document's first `<style>` element. A document without
    /// one yields an empty index.
    pub fn from_document(document: &Html) -> Self {
        let css = document
            .select(&STYLE)
            .next()
            .map(|style| style.text().collect::<String>())
            .unwrap_or_default();
        Self::from_css(&css)
    }

    /// Build the index from raw CSS text. Rules are split structurally on
    /// braces; selector lists (`a, b { .. }`) index each selector
    /// separately. At-rules and nested blocks are skipped.
    pub fn from_css(css: &str) -> Self {
        let mut rules = HashMap::new();
        for block in css.split('}') {
            let Some((selectors, declarations)) = block.split_once('{') else {
                continue;
            };
            // A leftover '{' means we're inside an at-rule body; skip it.
            if selectors.contains('{') || declarations.contains('{') {
                continue;
            }
            for selector in selectors.split(',') {
                let selector = selector.trim();
                if selector.is_empty() || selector.starts_with('@') {
                    continue;
                }
                rules.insert(selector.to_string(), declarations.trim().to_string());
            }
        }
        Self { rules }
    }

    /// The `background-image` URL declared for `selector`, with the CSS
    /// `url(...)` wrapper and any quotes stripped.
    pub fn background_image(&self, selector: &str) -> Option<String> {
        let declarations = self.rules.get(selector)?;
        declarations.split(';').find_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            if property.trim() != "background-image" {
                return None;
            }
            strip_css_url(value.trim())
        })
    }
}

/// Unwrap `url("http://x/y.png")` (quotes optional) to the bare URL.
fn strip_css_url(value: &str) -> Option<String> {
    let inner = value.strip_prefix("url(")?.strip_suffix(')')?;
    let inner = inner.trim().trim_matches('"').trim_matches('\'');
    crate::extract::non_empty(inner)
}

use regex::Regex;

/// Pure scan of page content for embedded same-origin page references.
///
/// Kept as a seam so the scan heuristic can be swapped without touching
/// the crawl engine.
pub trait LinkExtractor {
    /// Returns candidate identifiers in first-seen order. Duplicates are
    /// allowed; the controller dedupes.
    fn extract_links(&self, content: &str) -> Vec<String>;
}

/// Regex scan for quoted `/wiki/...` references, skipping anchors and
/// namespaced pages (anything containing `#` or `:`).
pub struct WikiLinkExtractor {
    pattern: Regex,
}

impl WikiLinkExtractor {
    pub fn new() -> Self {
        let pattern = Regex::new(r##""(/wiki/[^"#:]+)""##).expect("link pattern is valid");
        Self { pattern }
    }
}

impl Default for WikiLinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkExtractor for WikiLinkExtractor {
    fn extract_links(&self, content: &str) -> Vec<String> {
        self.pattern
            .captures_iter(content)
            .map(|cap| cap[1].to_string())
            .collect()
    }
}

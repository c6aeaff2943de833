/// Topic admission predicate over page text.
///
/// A page is relevant iff no keywords are configured, or the text contains
/// every configured keyword as a literal case-sensitive substring. The
/// check is conjunctive, so permuting the keyword list never changes a
/// decision.
#[derive(Debug, Clone, Default)]
pub struct TopicFilter {
    keywords: Vec<String>,
}

impl TopicFilter {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_relevant(&self, content: &str) -> bool {
        self.keywords.iter().all(|kw| content.contains(kw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keywords_admits_everything() {
        let filter = TopicFilter::default();
        assert!(filter.is_relevant("anything at all"));
        assert!(filter.is_relevant(""));
    }

    #[test]
    fn test_all_keywords_required() {
        let filter = TopicFilter::new(vec!["Einstein".to_string(), "physics".to_string()]);

        assert!(filter.is_relevant("Einstein contributed to modern physics"));
        assert!(!filter.is_relevant("Einstein played the violin"));
        assert!(!filter.is_relevant("physics is the study of matter"));
        assert!(!filter.is_relevant(""));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let filter = TopicFilter::new(vec!["Einstein".to_string()]);

        assert!(!filter.is_relevant("einstein wrote about relativity"));
        assert!(filter.is_relevant("Einstein wrote about relativity"));
    }

    #[test]
    fn test_keyword_order_does_not_matter() {
        let content = "tennis is a racket sport played on grass";
        let forward = TopicFilter::new(vec!["tennis".to_string(), "grass".to_string()]);
        let backward = TopicFilter::new(vec!["grass".to_string(), "tennis".to_string()]);

        assert_eq!(forward.is_relevant(content), backward.is_relevant(content));

        let partial = "tennis is played indoors";
        assert_eq!(forward.is_relevant(partial), backward.is_relevant(partial));
        assert!(!forward.is_relevant(partial));
    }

    #[test]
    fn test_substring_match_not_word_match() {
        let filter = TopicFilter::new(vec!["ten".to_string()]);
        assert!(filter.is_relevant("tennis"));
    }
}

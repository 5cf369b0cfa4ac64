use serde::{Deserialize, Serialize};

/// One external search result consulted while evaluating a probe.
///
/// Missing fields deserialize as empty strings; an empty `snippet` or
/// `title` is treated as absent by the matchers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Candidate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: String,
}

impl Candidate {
    pub fn new(
        title: impl Into<String>,
        snippet: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            link: link.into(),
        }
    }

    /// Text used for embedding comparison: the snippet, or the title when the
    /// snippet is empty. `None` when both are empty.
    pub fn comparison_text(&self) -> Option<&str> {
        if !self.snippet.is_empty() {
            Some(self.snippet.as_str())
        } else if !self.title.is_empty() {
            Some(self.title.as_str())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_text_prefers_snippet() {
        let c = Candidate::new("Title", "Snippet", "https://example.com");
        assert_eq!(c.comparison_text(), Some("Snippet"));
    }

    #[test]
    fn comparison_text_falls_back_to_title() {
        let c = Candidate::new("Title", "", "https://example.com");
        assert_eq!(c.comparison_text(), Some("Title"));
    }

    #[test]
    fn comparison_text_none_when_empty() {
        let c = Candidate::new("", "", "https://example.com");
        assert_eq!(c.comparison_text(), None);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let c: Candidate = serde_json::from_str(r#"{"link":"https://a.example"}"#).unwrap();
        assert_eq!(c.title, "");
        assert_eq!(c.snippet, "");
        assert_eq!(c.link, "https://a.example");
    }
}

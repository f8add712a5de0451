mod language;

use getset::Getters;

pub use language::Language;

/// One news item. The title is never blank.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Article {
    #[getset(get = "pub")]
    title: String,

    #[getset(get = "pub")]
    description: String,

    #[getset(get = "pub")]
    url: String,
}

impl Article {
    /// Returns `None` when the trimmed title is empty.
    pub fn new(
        title: impl AsRef<str>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Option<Article> {
        let title = title.as_ref().trim();
        if title.is_empty() {
            return None;
        }

        let article = Article {
            title: title.to_string(),
            description: description.into(),
            url: url.into(),
        };
        Some(article)
    }

    /// Same article in another language. The url is kept as is, and a blank
    /// title keeps the current one so the article never loses its headline.
    pub fn with_text(&self, title: impl Into<String>, description: impl Into<String>) -> Article {
        let title = title.into();
        let title = if title.trim().is_empty() {
            self.title.clone()
        } else {
            title
        };

        Article {
            title,
            description: description.into(),
            url: self.url.clone(),
        }
    }

    /// The description on a single line, or `None` if nothing is left.
    pub fn summary(&self) -> Option<String> {
        let summary = self
            .description
            .replace("\r\n", "\n")
            .replace('\r', "\n")
            .replace('\n', " ")
            .trim()
            .to_string();

        if summary.is_empty() {
            None
        } else {
            Some(summary)
        }
    }

    pub fn link(&self) -> Option<&str> {
        let url = self.url.trim();
        if url.is_empty() { None } else { Some(url) }
    }
}

use std::fmt::{self, Display};

use article::{Article, Language};
use bon::bon;

/// The multilingual message posted to the channel: a title line, then one
/// section per language listing the same articles in the same order.
pub struct Digest<'a> {
    korean: &'a [Article],
    english: &'a [Article],
    chinese: &'a [Article],
}

#[bon]
impl<'a> Digest<'a> {
    #[builder]
    pub fn new(
        korean: &'a [Article],
        english: &'a [Article],
        chinese: &'a [Article],
    ) -> Digest<'a> {
        Digest {
            korean,
            english,
            chinese,
        }
    }
}

impl Digest<'_> {
    fn sections(&self) -> [(Language, &[Article]); 3] {
        [
            (Language::Korean, self.korean),
            (Language::English, self.english),
            (Language::ChineseSimplified, self.chinese),
        ]
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("**오늘의 한국 주식 TOP {} 뉴스**", self.korean.len()),
            String::new(),
        ];

        for (language, articles) in self.sections() {
            lines.push(language.heading().to_string());
            for (idx, article) in articles.iter().enumerate() {
                lines.push(format!("{}. {}", idx + 1, article.title()));
                if let Some(summary) = article.summary() {
                    lines.push(format!("   - {}: {summary}", language.summary_label()));
                }
                // only the korean section links to the source
                if language == Language::Korean {
                    if let Some(link) = article.link() {
                        lines.push(format!("   링크: {link}"));
                    }
                }
                lines.push(String::new());
            }
        }

        lines
    }
}

impl Display for Digest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

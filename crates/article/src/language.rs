use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Korean,
    English,
    ChineseSimplified,
}

impl Language {
    /// Code understood by the translate endpoint.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::English => "en",
            Language::ChineseSimplified => "zh-CN",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Language::Korean => "=== 🇰🇷 한국어 ===",
            Language::English => "=== 🇺🇸 English ===",
            Language::ChineseSimplified => "=== 🇨🇳 中文(简体) ===",
        }
    }

    pub fn summary_label(&self) -> &'static str {
        match self {
            Language::Korean => "요약",
            Language::English => "Summary",
            Language::ChineseSimplified => "摘要",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Language::Korean => "Korean",
                Language::English => "English",
                Language::ChineseSimplified => "Simplified Chinese",
            }
        )
    }
}

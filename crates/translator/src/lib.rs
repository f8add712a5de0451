mod google;
mod openai;

use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use article::{Article, Language};
use async_trait::async_trait;
use config::Config;
use config::Translator as CfgTranslator;
use log::{info, warn};

pub use google::Google;
pub use openai::Openai;

/// Outcome of a single translation. `Fallback` carries the original text
/// when the provider could not translate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Translated(String),
    Fallback(String),
}

impl Translation {
    pub fn text(&self) -> &str {
        match self {
            Translation::Translated(text) | Translation::Fallback(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Translation::Translated(text) | Translation::Fallback(text) => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Translation::Fallback(_))
    }
}

pub struct Translator {
    handler: Arc<dyn Handler>,
}

impl Translator {
    pub fn new(config: &Config) -> Result<Translator> {
        let timeout = config.network.timeout.map(Duration::from_secs);
        let proxy = &config.network.proxy;
        let handler = match &config.translator {
            CfgTranslator::Google => {
                let handler = Google::builder()
                    .maybe_timeout(timeout)
                    .maybe_proxy(proxy.clone())
                    .build()?;

                Arc::new(handler) as Arc<dyn Handler>
            }
            CfgTranslator::Openai { base, model, key } => {
                let handler = Openai::builder()
                    .base(base)
                    .model(model)
                    .key(key)
                    .maybe_timeout(timeout)
                    .maybe_proxy(proxy.clone())
                    .build()?;

                Arc::new(handler) as Arc<dyn Handler>
            }
        };
        info!("translate with {handler}");

        Ok(Translator::with_handler(handler))
    }

    pub fn with_handler(handler: Arc<dyn Handler>) -> Translator {
        Translator { handler }
    }

    /// Never fails: blank text comes back untouched without asking the
    /// provider, and provider errors fall back to the original text.
    pub async fn translate(&self, text: &str, target: Language) -> Translation {
        if text.trim().is_empty() {
            return Translation::Translated(text.to_string());
        }

        match self.handler.translate(text, target).await {
            Ok(translated) => Translation::Translated(translated),
            Err(err) => {
                warn!(
                    "translate to {target} by {} failed, keep original: {err:?}",
                    self.handler
                );
                Translation::Fallback(text.to_string())
            }
        }
    }

    /// One translated article per input, same order, urls untouched.
    pub async fn translate_articles(&self, articles: &[Article], target: Language) -> Vec<Article> {
        let mut translated = Vec::with_capacity(articles.len());
        let mut fallbacks = 0;
        for article in articles {
            let title = self.translate(article.title(), target).await;
            let description = self.translate(article.description(), target).await;
            fallbacks += [&title, &description]
                .iter()
                .filter(|translation| translation.is_fallback())
                .count();

            translated.push(article.with_text(title.into_text(), description.into_text()));
        }

        if fallbacks > 0 {
            warn!("{fallbacks} fields left untranslated for {target}");
        }
        info!("translated {} articles to {target}", translated.len());

        translated
    }
}

#[async_trait]
pub trait Handler: Display + Send + Sync {
    async fn translate(&self, content: &str, target: Language) -> Result<String>;
}

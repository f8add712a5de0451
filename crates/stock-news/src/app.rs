use anyhow::{Context, Result};
use article::Language;
use bon::bon;
use colored::Colorize;
use config::Config;
use digest::Digest;
use log::info;
use news::NewsApi;
use notifier::Notifier;
use translator::Translator;

use super::outcome::Outcome;

const DEFAULT_TOP_N: u32 = 5;

/// One run of the job: fetch, translate, format, post.
pub struct App {
    news: NewsApi,
    translator: Translator,
    notifier: Notifier,
    top_n: u32,
}

#[bon]
impl App {
    #[builder]
    pub fn new(
        news: NewsApi,
        translator: Translator,
        notifier: Notifier,
        top_n: Option<u32>,
    ) -> App {
        App {
            news,
            translator,
            notifier,
            top_n: top_n.unwrap_or(DEFAULT_TOP_N),
        }
    }

    pub fn from_config(config: &Config) -> Result<App> {
        let news = NewsApi::from_config(config).with_context(|| "build news fetcher")?;
        let translator = Translator::new(config).with_context(|| "build translator")?;
        let notifier = Notifier::from_config(config).with_context(|| "build notifier")?;
        let app = App::builder()
            .news(news)
            .translator(translator)
            .notifier(notifier)
            .top_n(config.top_n)
            .build();

        Ok(app)
    }
}

impl App {
    pub async fn run(self) -> Result<Outcome> {
        print_bar("fetch");
        let korean = self
            .news
            .fetch(self.top_n)
            .await
            .with_context(|| "fetch news")?;
        let found = format!("found {} articles", korean.len());
        info!("{found}");
        println!("{found}");
        if korean.is_empty() {
            return Ok(self.summary(Outcome::NoArticles));
        }

        print_bar("translate");
        let english = self
            .translator
            .translate_articles(&korean, Language::English)
            .await;
        let chinese = self
            .translator
            .translate_articles(&korean, Language::ChineseSimplified)
            .await;

        print_bar("send");
        let message = Digest::builder()
            .korean(&korean)
            .english(&english)
            .chinese(&chinese)
            .build()
            .to_string();
        let deliveries = self.notifier.send(&message).await;

        Ok(self.summary(Outcome::Delivered(deliveries)))
    }

    fn summary(&self, outcome: Outcome) -> Outcome {
        print_bar("summary");
        let line = outcome.to_string();
        info!("{line}");
        if outcome.failed() == 0 {
            println!("{}", line.green());
        } else {
            println!("{}", line.red());
        }

        outcome
    }
}

fn print_bar(msg: &str) {
    let msg = format!(" {msg} ");
    let width = msg.chars().count();
    let padding = app::LINE_LENGTH.saturating_sub(width);
    let padding_left = padding / 2;
    let padding_right = padding - padding_left;
    println!(
        "{}{}{}",
        "=".repeat(padding_left).yellow(),
        msg.yellow(),
        "=".repeat(padding_right).yellow(),
    );
}

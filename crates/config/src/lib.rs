mod helper;
mod network;
mod translator;

use std::env;

use anyhow::{Result, bail};
use helper::{Lookup, optional, parse, required};
use log::info;
use validator::{Validate, ValidateUrl};

pub use network::Network;
pub use translator::Translator;

pub const NEWS_API_KEY: &str = "NEWS_API_KEY";
pub const DISCORD_WEBHOOK_URL: &str = "DISCORD_WEBHOOK_URL";
pub const NEWS_TOP_N: &str = "NEWS_TOP_N";
pub const HTTP_TIMEOUT: &str = "HTTP_TIMEOUT";
pub const HTTP_PROXY_URL: &str = "HTTP_PROXY_URL";
pub const TRANSLATOR: &str = "TRANSLATOR";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const OPENAI_MODEL: &str = "OPENAI_MODEL";

const DEFAULT_TOP_N: u32 = 5;
const DEFAULT_OPENAI_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Validate)]
pub struct Config {
    #[validate(length(min = 1, message = "should not be empty"))]
    pub news_api_key: String,
    #[validate(url(message = "should be a url"))]
    pub webhook_url: String,
    #[validate(range(min = 1, max = 100, message = "should be between 1 and 100"))]
    pub top_n: u32,
    #[validate(nested)]
    pub network: Network,
    pub translator: Translator,
}

impl Config {
    pub fn load() -> Result<Config> {
        Config::from_lookup(|name| env::var(name).ok())
    }

    /// Resolves every setting through `lookup`, so callers can feed values
    /// from somewhere other than the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let lookup: Lookup = &lookup;
        let news_api_key = required(lookup, NEWS_API_KEY)?;
        let webhook_url = required(lookup, DISCORD_WEBHOOK_URL)?;
        let top_n = parse(lookup, NEWS_TOP_N)?.unwrap_or(DEFAULT_TOP_N);
        let network = Network {
            timeout: parse(lookup, HTTP_TIMEOUT)?,
            proxy: optional(lookup, HTTP_PROXY_URL),
        };
        let translator = Self::load_translator(lookup)?;

        let config = Config {
            news_api_key,
            webhook_url,
            top_n,
            network,
            translator,
        };
        config
            .validate()
            .map_err(|err| anyhow::anyhow!("config -> {err}"))?;
        info!("translator: {}", config.translator.name());

        Ok(config)
    }

    fn load_translator(lookup: Lookup) -> Result<Translator> {
        let name = optional(lookup, TRANSLATOR).map(|name| name.to_lowercase());
        let translator = match name.as_deref() {
            None | Some("google") => Translator::Google,
            Some("openai") => {
                let base = optional(lookup, OPENAI_BASE_URL)
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE.to_string());
                if !base.validate_url() {
                    bail!("config -> {OPENAI_BASE_URL} should be a url > {base}");
                }

                Translator::Openai {
                    base,
                    model: optional(lookup, OPENAI_MODEL)
                        .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
                    key: required(lookup, OPENAI_API_KEY)?,
                }
            }
            Some(other) => bail!("config -> unknown {TRANSLATOR} > {other}"),
        };

        Ok(translator)
    }
}

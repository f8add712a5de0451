use std::fmt::{self, Display};
use std::time::Duration;

use anyhow::{Context, Result};
use article::{Article, Language};
use bon::bon;
use config::Config;
use error::Error;
use http_client::Client;
use log::{info, warn};
use serde::Deserialize;

const HOST: &str = "https://newsapi.org";
const QUERY: &str = "주식 OR 증시 OR 코스피 OR 코스닥 OR 코스피지수 OR 코스닥지수";

/// Client of the newsapi.org `everything` search.
pub struct NewsApi {
    base_url: String,
    key: String,
    client: Client,
}

#[bon]
impl NewsApi {
    #[builder]
    pub fn new(
        base_url: Option<String>,
        key: impl Into<String>,
        timeout: Option<Duration>,
        proxy: Option<String>,
    ) -> Result<NewsApi> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(Error::Configuration(config::NEWS_API_KEY).into());
        }
        let client = Client::builder()
            .maybe_timeout(timeout)
            .maybe_proxy(proxy)
            .build()
            .with_context(|| "build http client")?;
        let base_url = match base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => String::from(HOST),
        };

        let news = NewsApi {
            base_url,
            key,
            client,
        };
        Ok(news)
    }

    pub fn from_config(config: &Config) -> Result<NewsApi> {
        NewsApi::builder()
            .key(&config.news_api_key)
            .maybe_timeout(config.network.timeout.map(Duration::from_secs))
            .maybe_proxy(config.network.proxy.clone())
            .build()
    }
}

impl Display for NewsApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "newsapi")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Response {
    status: Option<String>,
    total_results: Option<u64>,
    message: Option<String>,
    #[serde(default)]
    articles: Vec<Item>,
}

#[derive(Deserialize)]
struct Item {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
}

impl NewsApi {
    /// Newest `top_n` market articles, in the order the endpoint returns
    /// them. Items without a title are skipped.
    pub async fn fetch(&self, top_n: u32) -> Result<Vec<Article>> {
        let url = format!("{}/v2/everything", self.base_url);
        let page_size = top_n.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("apiKey", self.key.as_str()),
                ("q", QUERY),
                ("language", Language::Korean.code()),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await
            .with_context(|| format!("send request to {url}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Response>(&body)
                .ok()
                .and_then(|res| res.message)
                .unwrap_or(body);
            return Err(Error::Upstream {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let res = response
            .json::<Response>()
            .await
            .with_context(|| format!("parse response of {self}"))?;
        info!(
            "{self} responded: status={} total={}",
            res.status.as_deref().unwrap_or("unknown"),
            res.total_results.unwrap_or_default()
        );

        let received = res.articles.len();
        let articles = res
            .articles
            .into_iter()
            .filter_map(|item| {
                Article::new(
                    item.title.unwrap_or_default(),
                    item.description.unwrap_or_default(),
                    item.url.unwrap_or_default(),
                )
            })
            .collect::<Vec<_>>();
        if articles.len() < received {
            warn!("skip {} articles without title", received - articles.len());
        }

        Ok(articles)
    }
}

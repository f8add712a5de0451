use std::fmt::{self, Display};
use std::time::Duration;

use anyhow::{Context, Result};
use article::Language;
use async_trait::async_trait;
use bon::bon;
use error::Error;
use http_client::Client;
use serde_json::Value;

use super::Handler;

const HOST: &str = "https://translate.googleapis.com";

/// Google's public web translate endpoint, no credential needed.
pub struct Google {
    base_url: String,
    client: Client,
}

#[bon]
impl Google {
    #[builder]
    pub fn new(
        base_url: Option<String>,
        timeout: Option<Duration>,
        proxy: Option<String>,
    ) -> Result<Google> {
        let client = Client::builder()
            .maybe_timeout(timeout)
            .maybe_proxy(proxy)
            .build()
            .with_context(|| "build http client")?;
        let base_url = match base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => String::from(HOST),
        };

        let google = Google { base_url, client };
        Ok(google)
    }
}

impl Display for Google {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "google")
    }
}

#[async_trait]
impl Handler for Google {
    async fn translate(&self, content: &str, target: Language) -> Result<String> {
        let url = format!("{}/translate_a/single", self.base_url);
        let res = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", Language::Korean.code()),
                ("tl", target.code()),
                ("dt", "t"),
                ("q", content),
            ])
            .send()
            .await
            .with_context(|| format!("send request to {url}"))?
            .error_for_status()?
            .json::<Value>()
            .await
            .with_context(|| "parse translate response")?;

        // [[["translated", "original", ...], ...], null, "ko", ...]
        let translated = res
            .get(0)
            .and_then(Value::as_array)
            .map(|segments| {
                segments
                    .iter()
                    .filter_map(|segment| segment.get(0).and_then(Value::as_str))
                    .collect::<String>()
            })
            .unwrap_or_default();
        if translated.trim().is_empty() {
            return Err(Error::Translation(format!("empty result for {content}")).into());
        }

        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;

    fn google(server: &Server) -> Result<Google> {
        Google::builder()
            .base_url(server.url())
            .timeout(Duration::from_secs(10))
            .build()
    }

    #[tokio::test]
    async fn test_translate() -> Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/translate_a/single")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("client".into(), "gtx".into()),
                Matcher::UrlEncoded("sl".into(), "ko".into()),
                Matcher::UrlEncoded("tl".into(), "en".into()),
                Matcher::UrlEncoded("dt".into(), "t".into()),
                Matcher::UrlEncoded("q".into(), "코스피 상승. 코스닥 하락.".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"[[["KOSPI rises. ","코스피 상승. ",null,null,10],["KOSDAQ falls.","코스닥 하락.",null,null,10]],null,"ko"]"#,
            )
            .create_async()
            .await;

        let translated = google(&server)?
            .translate("코스피 상승. 코스닥 하락.", Language::English)
            .await?;
        mock.assert_async().await;
        assert_eq!(translated, "KOSPI rises. KOSDAQ falls.");

        Ok(())
    }

    #[tokio::test]
    async fn test_translate_chinese() -> Result<()> {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/translate_a/single")
            .match_query(Matcher::UrlEncoded("tl".into(), "zh-CN".into()))
            .with_status(200)
            .with_body(r#"[[["KOSPI上涨","코스피 상승",null,null,10]],null,"ko"]"#)
            .create_async()
            .await;

        let translated = google(&server)?
            .translate("코스피 상승", Language::ChineseSimplified)
            .await?;
        assert_eq!(translated, "KOSPI上涨");

        Ok(())
    }

    #[tokio::test]
    async fn test_translate_failed() -> Result<()> {
        let mut server = Server::new_async().await;
        let _error = server
            .mock("GET", "/translate_a/single")
            .match_query(Matcher::UrlEncoded("q".into(), "오류".into()))
            .with_status(500)
            .create_async()
            .await;
        let _empty = server
            .mock("GET", "/translate_a/single")
            .match_query(Matcher::UrlEncoded("q".into(), "공백".into()))
            .with_status(200)
            .with_body(r#"[null,null,"ko"]"#)
            .create_async()
            .await;

        let google = google(&server)?;
        assert!(google.translate("오류", Language::English).await.is_err());
        let err = google.translate("공백", Language::English).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::Translation(_))
        ));

        Ok(())
    }
}

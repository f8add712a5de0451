mod chunk;

use std::fmt::{self, Display};
use std::time::Duration;

use anyhow::{Context, Result};
use bon::bon;
use config::Config;
use error::Error;
use http_client::Client;
use log::{info, warn};
use reqwest::StatusCode;
use serde::Serialize;

pub use chunk::split;

/// Discord rejects messages over 2000 characters.
pub const MAX_LEN: usize = 1900;

/// What happened to one chunk of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent { index: usize, status: u16 },
    Rejected { index: usize, status: u16, body: String },
    Unreachable { index: usize, reason: String },
}

impl Delivery {
    pub fn is_sent(&self) -> bool {
        matches!(self, Delivery::Sent { .. })
    }
}

impl Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delivery::Sent { index, status } => write!(f, "chunk {index} sent ({status})"),
            Delivery::Rejected {
                index,
                status,
                body,
            } => write!(f, "chunk {index} rejected ({status}): {body}"),
            Delivery::Unreachable { index, reason } => {
                write!(f, "chunk {index} not delivered: {reason}")
            }
        }
    }
}

/// Posts messages to a chat webhook.
pub struct Notifier {
    webhook: String,
    client: Client,
}

#[bon]
impl Notifier {
    #[builder]
    pub fn new(
        webhook: impl Into<String>,
        timeout: Option<Duration>,
        proxy: Option<String>,
    ) -> Result<Notifier> {
        let webhook = webhook.into();
        if webhook.trim().is_empty() {
            return Err(Error::Configuration(config::DISCORD_WEBHOOK_URL).into());
        }
        let client = Client::builder()
            .maybe_timeout(timeout)
            .maybe_proxy(proxy)
            .build()
            .with_context(|| "build http client")?;

        let notifier = Notifier { webhook, client };
        Ok(notifier)
    }

    pub fn from_config(config: &Config) -> Result<Notifier> {
        Notifier::builder()
            .webhook(&config.webhook_url)
            .maybe_timeout(config.network.timeout.map(Duration::from_secs))
            .maybe_proxy(config.network.proxy.clone())
            .build()
    }
}

impl Notifier {
    /// Splits `message` at line boundaries and posts every chunk once.
    /// A failed chunk does not stop the following ones.
    pub async fn send(&self, message: &str) -> Vec<Delivery> {
        let chunks = split(message, MAX_LEN);
        info!("send message in {} chunks", chunks.len());

        let mut deliveries = Vec::with_capacity(chunks.len());
        for (index, chunk) in chunks.iter().enumerate() {
            let delivery = self.post(index, chunk).await;
            if delivery.is_sent() {
                info!("{delivery}");
            } else {
                warn!("{delivery}");
            }
            deliveries.push(delivery);
        }

        deliveries
    }

    async fn post(&self, index: usize, content: &str) -> Delivery {
        #[derive(Serialize)]
        struct Payload<'a> {
            content: &'a str,
        }

        let response = match self
            .client
            .post(&self.webhook)
            .json(&Payload { content })
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                return Delivery::Unreachable {
                    index,
                    reason: format!("{err:?}"),
                };
            }
        };

        let status = response.status();
        if matches!(status, StatusCode::OK | StatusCode::NO_CONTENT) {
            return Delivery::Sent {
                index,
                status: status.as_u16(),
            };
        }

        let body = response.text().await.unwrap_or_default();
        Delivery::Rejected {
            index,
            status: status.as_u16(),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn notifier(webhook: impl Into<String>) -> Result<Notifier> {
        Notifier::builder()
            .webhook(webhook)
            .timeout(Duration::from_secs(10))
            .build()
    }

    fn long_message() -> String {
        (0..60)
            .map(|idx| format!("{idx:02}. {}", "가".repeat(50)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn test_send_single() -> Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .match_body(Matcher::Json(json!({"content": "오늘의 뉴스\n1. 코스피 상승\n"})))
            .with_status(204)
            .expect(1)
            .create_async()
            .await;

        let deliveries = notifier(format!("{}/hook", server.url()))?
            .send("오늘의 뉴스\n1. 코스피 상승")
            .await;
        mock.assert_async().await;
        assert_eq!(deliveries, vec![Delivery::Sent { index: 0, status: 204 }]);

        Ok(())
    }

    #[tokio::test]
    async fn test_send_chunks() -> Result<()> {
        let message = long_message();
        let expected = split(&message, MAX_LEN).len();
        assert!(expected > 1);

        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .with_status(200)
            .expect(expected)
            .create_async()
            .await;

        let deliveries = notifier(format!("{}/hook", server.url()))?
            .send(&message)
            .await;
        mock.assert_async().await;
        assert_eq!(deliveries.len(), expected);
        assert!(deliveries.iter().all(Delivery::is_sent));

        Ok(())
    }

    #[tokio::test]
    async fn test_send_partial_failure() -> Result<()> {
        let message = format!("{}\n{}", "A".repeat(1500), "B".repeat(1500));

        let mut server = Server::new_async().await;
        let rejected = server
            .mock("POST", "/hook")
            .match_body(Matcher::Regex("AAAA".to_string()))
            .with_status(500)
            .with_body("internal error")
            .expect(1)
            .create_async()
            .await;
        let sent = server
            .mock("POST", "/hook")
            .match_body(Matcher::Regex("BBBB".to_string()))
            .with_status(204)
            .expect(1)
            .create_async()
            .await;

        let deliveries = notifier(format!("{}/hook", server.url()))?
            .send(&message)
            .await;
        rejected.assert_async().await;
        sent.assert_async().await;
        assert_eq!(
            deliveries,
            vec![
                Delivery::Rejected {
                    index: 0,
                    status: 500,
                    body: "internal error".to_string()
                },
                Delivery::Sent { index: 1, status: 204 },
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_send_unreachable() -> Result<()> {
        let deliveries = notifier("http://127.0.0.1:1/hook")?.send("1. 코스피 상승").await;

        assert_eq!(deliveries.len(), 1);
        assert!(matches!(
            deliveries[0],
            Delivery::Unreachable { index: 0, .. }
        ));

        Ok(())
    }

    #[test]
    fn test_blank_webhook() {
        let err = Notifier::builder().webhook("").build().err();
        assert!(matches!(
            err.as_ref().and_then(|err| err.downcast_ref::<Error>()),
            Some(Error::Configuration(config::DISCORD_WEBHOOK_URL))
        ));
    }
}

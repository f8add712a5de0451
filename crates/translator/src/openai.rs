use std::fmt::{self, Display};
use std::time::Duration;

use anyhow::{Context, Result};
use article::Language;
use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use bon::bon;
use error::Error;
use indoc::formatdoc;

use super::Handler;

/// Any OpenAI compatible chat completion endpoint.
pub struct Openai {
    client: Client<OpenAIConfig>,
    model: String,
}

#[bon]
impl Openai {
    #[builder]
    pub fn new(
        base: impl Into<String>,
        model: impl Into<String>,
        key: impl Into<String>,
        timeout: Option<Duration>,
        proxy: Option<String>,
    ) -> Result<Openai> {
        let client = http_client::Client::builder()
            .maybe_timeout(timeout)
            .maybe_proxy(proxy)
            .build()
            .with_context(|| "build http client")?;
        let config = OpenAIConfig::new().with_api_base(base).with_api_key(key);
        let client = Client::with_config(config).with_http_client(client.inner().clone());
        let openai = Openai {
            client,
            model: model.into(),
        };

        Ok(openai)
    }

    pub async fn chat(
        &self,
        content: impl Into<ChatCompletionRequestUserMessageContent>,
    ) -> Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content("You are a professional financial news translator.")
                    .build()
                    .with_context(|| "build message")?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(content)
                    .build()
                    .with_context(|| "build message")?
                    .into(),
            ])
            .build()?;
        let response = self.client.chat().create(request).await?;
        let reply = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|reply| !reply.trim().is_empty())
            .ok_or_else(|| Error::Translation(format!("no response from {}", self.model)))?;

        Ok(reply)
    }
}

impl Display for Openai {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "openai({})", self.model)
    }
}

#[async_trait]
impl Handler for Openai {
    async fn translate(&self, content: &str, target: Language) -> Result<String> {
        let translated = self
            .chat(formatdoc!(
                "
                Translate the following Korean stock market news into {target}.
                Reply with the translation only.

                {content}
                "
            ))
            .await
            .with_context(|| format!("translate {content}"))?;

        Ok(translated.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_translate() -> Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "id": "chatcmpl-1",
                    "object": "chat.completion",
                    "created": 1700000000,
                    "model": "gpt-4o-mini",
                    "choices": [{
                        "index": 0,
                        "message": {"role": "assistant", "content": " KOSPI rises \n"},
                        "finish_reason": "stop"
                    }]
                }"#,
            )
            .create_async()
            .await;

        let openai = Openai::builder()
            .base(format!("{}/v1", server.url()))
            .model("gpt-4o-mini")
            .key("sk-test")
            .timeout(Duration::from_secs(10))
            .build()?;
        let translated = openai.translate("코스피 상승", Language::English).await?;
        mock.assert_async().await;
        assert_eq!(translated, "KOSPI rises");

        Ok(())
    }
}

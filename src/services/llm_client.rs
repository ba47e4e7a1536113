use std::error::Error;

use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};

use crate::domain::analysis::{Classification, TestPrompt, PROMPT_COUNT};

const MODEL: &str = "gpt-4o-mini";

type LlmError = Box<dyn Error + Send + Sync>;

pub struct LlmClient {
    client: Client<OpenAIConfig>,
    configured: bool,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        let configured = !api_key.trim().is_empty();
        let config = OpenAIConfig::new().with_api_key(api_key);
        LlmClient {
            client: Client::with_config(config),
            configured,
        }
    }

    /// False when no API key was supplied at startup.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(MODEL)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()])
            .max_tokens(max_tokens)
            .build()?;

        let response = self.client.chat().create(request).await?;

        let first_choice = response
            .choices
            .first()
            .ok_or("No choices in completion response")?
            .message
            .content
            .clone()
            .ok_or("No content in completion response")?;

        Ok(first_choice)
    }

    /// Ask the model for the seven probe questions. The business name is
    /// passed only so the model can match the tone of the market, with an
    /// explicit instruction never to repeat it: a question naming the
    /// business would answer itself.
    pub async fn generate_test_prompts(
        &self,
        classification: &Classification,
        business_name: &str,
    ) -> Result<Vec<TestPrompt>, LlmError> {
        let prompt = format!(
            r#"Generate exactly {count} natural-language questions a consumer or buyer might ask an AI assistant about this market:

Industry: {industry}
Market: {market}
Geography: {geography}
Category: {category}
Domain: {domain}

The questions will test whether "{business_name}" comes up organically, so do NOT mention "{business_name}" or any other specific company name in any question.

Return ONLY a JSON array of {count} objects, each with a short "type" label and a "prompt" question, like:
[{{"type": "Best in category", "prompt": "..."}}]"#,
            count = PROMPT_COUNT,
            industry = classification.industry,
            market = classification.market,
            geography = classification.geography,
            category = classification.category,
            domain = classification.domain,
            business_name = business_name,
        );

        let response = self.complete(&prompt, 1000).await?;
        log::info!("Prompt generation response: {}", response);

        parse_prompt_array(&response)
    }

    /// Run one probe question and return the raw answer text.
    pub async fn answer_prompt(&self, question: &str) -> Result<String, LlmError> {
        self.complete(question, 500).await
    }

    /// Best-effort classification enhancement. Callers fall back to the
    /// rule-based classifier on any error.
    pub async fn classify_business(
        &self,
        business_name: &str,
        website_url: &str,
        content: Option<&str>,
    ) -> Result<Classification, LlmError> {
        let prompt = format!(
            r#"Classify this business:

Name: {name}
Website: {url}
Website content: {content}

Return ONLY a JSON object with these string fields:
{{"industry": "...", "market": "...", "geography": "...", "category": "...", "domain": "..."}}

Use a coarse geography tag such as "Global", "US", "UK", "Canada", "Australia", "Germany", "India" or "Europe"."#,
            name = business_name,
            url = website_url,
            content = content.unwrap_or("(none)"),
        );

        let response = self.complete(&prompt, 300).await?;
        log::info!("Classification response: {}", response);

        let classification: Classification = serde_json::from_str(strip_code_fences(&response))?;

        let fields = [
            &classification.industry,
            &classification.market,
            &classification.geography,
            &classification.category,
            &classification.domain,
        ];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err("Classification response has empty fields".into());
        }

        Ok(classification)
    }
}

/// Models often wrap JSON in a markdown code fence despite instructions.
pub fn strip_code_fences(response: &str) -> &str {
    let trimmed = response.trim();

    for fence in ["```json", "```"] {
        if let Some(rest) = trimmed.strip_prefix(fence) {
            if let Some(inner) = rest.rsplit_once("```") {
                return inner.0.trim();
            }
            return rest.trim();
        }
    }

    trimmed
}

/// Validate the shape of a generated prompt array: exactly seven entries,
/// every type and prompt non-empty. Anything else sends the caller to the
/// template fallback.
pub fn parse_prompt_array(response: &str) -> Result<Vec<TestPrompt>, LlmError> {
    let cleaned = strip_code_fences(response);
    let prompts: Vec<TestPrompt> = serde_json::from_str(cleaned)?;

    if prompts.len() != PROMPT_COUNT {
        return Err(format!(
            "Expected {} prompts, got {}",
            PROMPT_COUNT,
            prompts.len()
        )
        .into());
    }

    if prompts
        .iter()
        .any(|p| p.prompt_type.trim().is_empty() || p.prompt.trim().is_empty())
    {
        return Err("Prompt array has empty type or prompt fields".into());
    }

    Ok(prompts)
}

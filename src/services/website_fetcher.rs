use std::time::Duration;

use anyhow::Context;
use scraper::{Html, Selector};

use crate::domain::analysis::WebsiteContent;

const FETCH_TIMEOUT_SECS: u64 = 5;
const CONTENT_CLIP_CHARS: usize = 1000;
const USER_AGENT: &str = "Mozilla/5.0 (compatible; BeaconAnalyzer/1.0)";

/// Fetch and extract the signals the pipeline reads from a website. Total:
/// every failure collapses to all-empty content, which downstream stages
/// treat as a legitimate value.
pub async fn fetch_website_content(website_url: &str) -> WebsiteContent {
    match fetch_html(website_url).await {
        Ok(html) => parse_website_content(&html),
        Err(e) => {
            log::error!("Website fetch failed: {:?}", e);
            WebsiteContent::default()
        }
    }
}

async fn fetch_html(website_url: &str) -> anyhow::Result<String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build fetch client")?;

    let response = client
        .get(website_url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", website_url))?;

    response
        .text()
        .await
        .with_context(|| format!("Failed to read body from {}", website_url))
}

pub fn parse_website_content(html: &str) -> WebsiteContent {
    let document = Html::parse_document(html);

    let title_selector = Selector::parse("title").unwrap();
    let meta_selector = Selector::parse(r#"meta[name="description"]"#).unwrap();
    let json_ld_selector = Selector::parse(r#"script[type="application/ld+json"]"#).unwrap();
    let microdata_selector = Selector::parse("[itemscope]").unwrap();
    let text_selector = Selector::parse("h1, h2, h3, p, li").unwrap();

    let title = document
        .select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let description = document
        .select(&meta_selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default();

    let has_structured_data = document.select(&json_ld_selector).next().is_some()
        || document.select(&microdata_selector).next().is_some();

    let text: Vec<String> = document
        .select(&text_selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|chunk| !chunk.is_empty())
        .collect();
    let content: String = text.join(" ").chars().take(CONTENT_CLIP_CHARS).collect();

    WebsiteContent {
        title,
        description,
        content,
        has_structured_data,
    }
}

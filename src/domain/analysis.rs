use serde::{Deserialize, Serialize};

pub const PROMPT_COUNT: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub industry: String,
    pub market: String,
    pub geography: String,
    pub category: String,
    pub domain: String,
}

impl Classification {
    pub fn default_bucket(geography: String) -> Self {
        Classification {
            industry: "Business Services".to_string(),
            market: "B2B Services".to_string(),
            geography,
            category: "Professional Services".to_string(),
            domain: "General Business".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestPrompt {
    #[serde(rename = "type")]
    pub prompt_type: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl TestPrompt {
    pub fn new(prompt_type: &str, prompt: String) -> Self {
        TestPrompt {
            prompt_type: prompt_type.to_string(),
            prompt,
            response: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteContent {
    pub title: String,
    pub description: String,
    pub content: String,
    pub has_structured_data: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub classification: Classification,
    pub test_prompts: Vec<TestPrompt>,
    pub geo_score: f64,
    pub benchmark_score: f64,
    pub has_structured_data: bool,
    pub llm_mentions: usize,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendations: Vec<String>,
}

/// A response tag counts as a real mention only when it says "mentioned"
/// without also saying "not mentioned". A plain `contains("mentioned")`
/// check silently matches both tags.
pub fn is_true_mention(tag: &str) -> bool {
    let tag = tag.to_lowercase();
    tag.contains("mentioned") && !tag.contains("not mentioned")
}

pub fn count_true_mentions(prompts: &[TestPrompt]) -> usize {
    prompts
        .iter()
        .filter(|p| {
            p.response
                .as_deref()
                .map(is_true_mention)
                .unwrap_or(false)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::{count_true_mentions, is_true_mention, TestPrompt};

    #[test]
    fn true_mention_matches_mentioned() {
        assert!(is_true_mention("mentioned"));
        assert!(is_true_mention("Mentioned"));
        assert!(is_true_mention("MENTIONED"));
    }

    #[test]
    fn true_mention_rejects_not_mentioned() {
        assert!(!is_true_mention("not mentioned"));
        assert!(!is_true_mention("Not Mentioned"));
    }

    #[test]
    fn true_mention_rejects_error_and_empty() {
        assert!(!is_true_mention("error"));
        assert!(!is_true_mention(""));
    }

    #[test]
    fn count_true_mentions_mixed_tags() {
        let tags = [
            Some("mentioned"),
            Some("not mentioned"),
            Some("Mentioned"),
            Some("error"),
            None,
        ];
        let prompts: Vec<TestPrompt> = tags
            .iter()
            .map(|tag| TestPrompt {
                prompt_type: "Comparison".to_string(),
                prompt: "How do the top brands compare?".to_string(),
                response: tag.map(|t| t.to_string()),
            })
            .collect();

        assert_eq!(count_true_mentions(&prompts), 2);
    }

    #[test]
    fn count_true_mentions_empty_list() {
        assert_eq!(count_true_mentions(&[]), 0);
    }
}

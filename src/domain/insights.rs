use itertools::Itertools;

use crate::domain::analysis::{Classification, TestPrompt};
use crate::domain::scoring::mention_rate;

const MAX_RECOMMENDATIONS: usize = 8;

const STRONG_MENTION_RATE: f64 = 0.6;
const MODERATE_MENTION_RATE: f64 = 0.3;
const EXCELLENT_SCORE: f64 = 8.0;
const GOOD_SCORE: f64 = 6.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendations: Vec<String>,
}

pub fn generate_insights(
    classification: &Classification,
    prompts: &[TestPrompt],
    geo_score: f64,
    has_structured_data: bool,
) -> Insights {
    let rate = mention_rate(prompts);
    let mut strengths: Vec<String> = vec![];
    let mut gaps: Vec<String> = vec![];

    if rate > STRONG_MENTION_RATE {
        strengths.push(format!(
            "AI assistants mention your business in {:.0}% of test questions about the {} market.",
            rate * 100.0,
            classification.market.to_lowercase()
        ));
    } else if rate > MODERATE_MENTION_RATE {
        strengths.push(format!(
            "Your business shows up in some AI answers about {}.",
            classification.category.to_lowercase()
        ));
        gaps.push(
            "AI assistants mention your business inconsistently across question types.".to_string(),
        );
    } else {
        gaps.push(format!(
            "AI assistants rarely mention your business when asked about {}.",
            classification.category.to_lowercase()
        ));
    }

    if geo_score >= EXCELLENT_SCORE {
        strengths.push("Excellent overall GEO score, well above typical visibility.".to_string());
    } else if geo_score >= GOOD_SCORE {
        strengths.push("Solid overall GEO score with room to grow.".to_string());
    } else {
        gaps.push("Overall GEO score is below where an established brand should sit.".to_string());
    }

    if has_structured_data {
        strengths.push(
            "Your website uses structured data markup, which helps AI systems read it.".to_string(),
        );
    } else {
        gaps.push("No structured data markup was found on your website.".to_string());
    }

    if classification.geography == "Global" && rate > 0.0 {
        strengths.push("Your brand surfaces in answers across global markets.".to_string());
    }

    // Neither list may come back empty.
    if strengths.is_empty() {
        strengths.push(format!(
            "Your business has a clear {} focus, a base to build AI visibility on.",
            classification.industry.to_lowercase()
        ));
    }
    if gaps.is_empty() {
        gaps.push(
            "Visibility is strong today; keeping it requires fresh, citable content.".to_string(),
        );
    }

    let recommendations = build_recommendations(classification, rate, geo_score, has_structured_data);

    Insights {
        strengths,
        gaps,
        recommendations,
    }
}

fn build_recommendations(
    classification: &Classification,
    rate: f64,
    geo_score: f64,
    has_structured_data: bool,
) -> Vec<String> {
    let mut recommendations: Vec<String> = vec![];

    if rate <= MODERATE_MENTION_RATE {
        recommendations.push(
            "Get your business covered in the sources AI models cite: industry roundups, comparison articles, and review sites.".to_string(),
        );
    }
    if rate <= STRONG_MENTION_RATE {
        recommendations.push(format!(
            "Publish content that answers the questions buyers ask about {}.",
            classification.category.to_lowercase()
        ));
    }
    if geo_score < GOOD_SCORE {
        recommendations.push(
            "Add FAQ-style pages that directly answer the questions customers put to AI assistants.".to_string(),
        );
    }
    if !has_structured_data {
        recommendations.push(
            "Add schema.org structured data (Organization, Product, FAQ) to your website.".to_string(),
        );
    }

    match classification.industry.as_str() {
        "Technology" => recommendations.push(
            "Publish technical thought-leadership content; AI assistants lean on authoritative explainers when recommending technology vendors.".to_string(),
        ),
        "Food & Beverage" => recommendations.push(
            "Keep menus, product pages, and local listings current; food and drink answers pull heavily from them.".to_string(),
        ),
        _ => {}
    }

    if classification.geography == "Global" {
        recommendations.push(
            "Keep brand naming consistent across markets so mentions consolidate under one name.".to_string(),
        );
    } else {
        recommendations.push(format!(
            "Strengthen local citations and directory presence in {}.",
            classification.geography
        ));
    }

    recommendations.push(
        "Re-check your AI visibility after major model updates; rankings shift.".to_string(),
    );

    recommendations
        .into_iter()
        .unique()
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{generate_insights, MAX_RECOMMENDATIONS};
    use crate::domain::analysis::{Classification, TestPrompt};

    fn prompts_with_tags(tags: &[&str]) -> Vec<TestPrompt> {
        tags.iter()
            .map(|tag| TestPrompt {
                prompt_type: "Comparison".to_string(),
                prompt: "How do the top brands compare?".to_string(),
                response: Some(tag.to_string()),
            })
            .collect()
    }

    #[test]
    fn degenerate_case_still_yields_both_lists() {
        let classification = Classification::default_bucket("US".to_string());
        let prompts = prompts_with_tags(&["not mentioned"; 7]);
        let insights = generate_insights(&classification, &prompts, 0.0, false);

        assert!(!insights.strengths.is_empty());
        assert!(!insights.gaps.is_empty());
        assert!(!insights.recommendations.is_empty());
    }

    #[test]
    fn high_visibility_case_still_yields_gaps() {
        let classification = Classification {
            industry: "Technology".to_string(),
            market: "Global Technology".to_string(),
            geography: "Global".to_string(),
            category: "Consumer & Enterprise Software".to_string(),
            domain: "Software & Cloud".to_string(),
        };
        let prompts = prompts_with_tags(&["mentioned"; 7]);
        let insights = generate_insights(&classification, &prompts, 9.5, true);

        assert!(!insights.strengths.is_empty());
        assert!(!insights.gaps.is_empty());
    }

    #[test]
    fn structured_data_lands_in_exactly_one_list() {
        let classification = Classification::default_bucket("US".to_string());
        let prompts = prompts_with_tags(&["mentioned"; 7]);

        let with = generate_insights(&classification, &prompts, 7.0, true);
        assert_eq!(
            with.strengths
                .iter()
                .filter(|s| s.contains("structured data"))
                .count(),
            1
        );
        assert!(!with.gaps.iter().any(|g| g.contains("structured data")));

        let without = generate_insights(&classification, &prompts, 7.0, false);
        assert_eq!(
            without
                .gaps
                .iter()
                .filter(|g| g.contains("structured data"))
                .count(),
            1
        );
        assert!(!without.strengths.iter().any(|s| s.contains("structured data")));
    }

    #[test]
    fn recommendations_are_capped_and_unique() {
        let classification = Classification {
            industry: "Technology".to_string(),
            market: "Enterprise Software".to_string(),
            geography: "UK".to_string(),
            category: "B2B SaaS".to_string(),
            domain: "Software & Cloud".to_string(),
        };
        let prompts = prompts_with_tags(&["not mentioned"; 7]);
        let insights = generate_insights(&classification, &prompts, 2.0, false);

        assert!(insights.recommendations.len() <= MAX_RECOMMENDATIONS);
        let mut deduped = insights.recommendations.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), insights.recommendations.len());
    }

    #[test]
    fn technology_industry_gets_thought_leadership_recommendation() {
        let classification = Classification {
            industry: "Technology".to_string(),
            market: "Consumer Technology".to_string(),
            geography: "US".to_string(),
            category: "Apps & Devices".to_string(),
            domain: "Software & Cloud".to_string(),
        };
        let prompts = prompts_with_tags(&["mentioned", "not mentioned", "mentioned", "mentioned",
            "not mentioned", "mentioned", "mentioned"]);
        let insights = generate_insights(&classification, &prompts, 7.2, true);

        assert!(insights
            .recommendations
            .iter()
            .any(|r| r.contains("thought-leadership")));
    }

    #[test]
    fn empty_prompts_do_not_panic() {
        let classification = Classification::default_bucket("US".to_string());
        let insights = generate_insights(&classification, &[], 0.0, false);
        assert!(!insights.strengths.is_empty());
        assert!(!insights.gaps.is_empty());
    }
}

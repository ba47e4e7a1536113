use rand::Rng;

use crate::domain::analysis::{count_true_mentions, Classification, TestPrompt};

/// Small symmetric noise added to final scores. Injectable so tests can run
/// with a fixed value.
pub trait Jitter {
    fn sample(&mut self) -> f64;
}

pub const JITTER_SPREAD: f64 = 0.2;

pub struct RandomJitter;

impl Jitter for RandomJitter {
    fn sample(&mut self) -> f64 {
        rand::thread_rng().gen_range(-JITTER_SPREAD..=JITTER_SPREAD)
    }
}

pub struct FixedJitter(pub f64);

impl Jitter for FixedJitter {
    fn sample(&mut self) -> f64 {
        self.0
    }
}

/// Industries that LLMs talk about disproportionately often.
const HIGH_VISIBILITY_INDUSTRIES: &[&str] = &["Technology", "Food & Beverage"];

const BENCHMARK_BASELINE: f64 = 6.0;
const BENCHMARK_FLOOR: f64 = 4.0;
const BENCHMARK_CEILING: f64 = 8.5;

const INDUSTRY_MULTIPLIERS: &[(&str, f64)] = &[
    ("Technology", 1.15),
    ("Food & Beverage", 1.1),
    ("Conglomerate", 1.1),
    ("Finance", 1.05),
    ("Healthcare", 1.0),
    ("Retail", 0.95),
    ("Business Services", 0.95),
    ("Education", 0.9),
    ("Real Estate", 0.9),
];

const MARKET_MULTIPLIERS: &[(&str, f64)] = &[
    ("Global Technology", 1.15),
    ("Enterprise Software", 1.1),
    ("Enterprise Security", 1.1),
    ("Enterprise Infrastructure", 1.1),
    ("Consumer Beverages", 1.05),
    ("Diversified", 1.05),
    ("Consumer Technology", 1.0),
    ("B2B Services", 0.95),
];

const GEOGRAPHY_MULTIPLIERS: &[(&str, f64)] = &[
    ("Global", 1.15),
    ("US", 1.05),
    ("UK", 1.0),
    ("Germany", 1.0),
    ("Europe", 1.0),
    ("Canada", 0.95),
    ("Australia", 0.95),
    ("India", 0.9),
];

const DOMAIN_MULTIPLIERS: &[(&str, f64)] = &[
    ("Software & Cloud", 1.1),
    ("CDN & Security", 1.1),
    ("Cybersecurity", 1.1),
    ("Beverage Manufacturing", 1.05),
    ("Diversified Operations", 1.0),
    ("General Business", 0.95),
];

fn multiplier_for(table: &[(&str, f64)], key: &str) -> f64 {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(1.0)
}

pub fn mention_rate(prompts: &[TestPrompt]) -> f64 {
    if prompts.is_empty() {
        return 0.0;
    }
    count_true_mentions(prompts) as f64 / prompts.len() as f64
}

/// Observed visibility score. Mention rate drives 60% of the range; the
/// remaining bonuses only apply once at least one mention was earned.
pub fn compute_geo_score(
    classification: &Classification,
    prompts: &[TestPrompt],
    has_structured_data: bool,
    jitter: &mut dyn Jitter,
) -> f64 {
    let rate = mention_rate(prompts);
    let mut score = rate * 6.0 + 1.0;

    if rate > 0.0 {
        if has_structured_data {
            score += 0.5;
        }
        match classification.geography.as_str() {
            "Global" => score += 0.8,
            "US" => score += 0.4,
            _ => {}
        }
        if HIGH_VISIBILITY_INDUSTRIES.contains(&classification.industry.as_str()) {
            score += 0.3;
        }
    } else if classification.geography == "Global" {
        score += 0.2;
    }

    round_one_decimal((score + jitter.sample()).clamp(0.0, 10.0))
}

/// What a typical peer in the same classification bucket scores. A pure
/// function of the classification: this business's own mentions must not
/// leak in.
pub fn compute_benchmark_score(classification: &Classification, jitter: &mut dyn Jitter) -> f64 {
    let score = BENCHMARK_BASELINE
        * multiplier_for(INDUSTRY_MULTIPLIERS, &classification.industry)
        * multiplier_for(MARKET_MULTIPLIERS, &classification.market)
        * multiplier_for(GEOGRAPHY_MULTIPLIERS, &classification.geography)
        * multiplier_for(DOMAIN_MULTIPLIERS, &classification.domain);

    let score = score.clamp(BENCHMARK_FLOOR, BENCHMARK_CEILING);
    round_one_decimal((score + jitter.sample()).clamp(0.0, 10.0))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::{
        compute_benchmark_score, compute_geo_score, mention_rate, FixedJitter, Jitter,
        JITTER_SPREAD, RandomJitter,
    };
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

    fn tech_global() -> Classification {
        Classification {
            industry: "Technology".to_string(),
            market: "Global Technology".to_string(),
            geography: "Global".to_string(),
            category: "Consumer & Enterprise Software".to_string(),
            domain: "Software & Cloud".to_string(),
        }
    }

    #[test]
    fn geo_score_full_mentions_with_all_bonuses() {
        let prompts = prompts_with_tags(&["mentioned"; 7]);
        let score = compute_geo_score(&tech_global(), &prompts, true, &mut FixedJitter(0.0));
        // 6.0 base + 1.0 credit + 0.5 structured + 0.8 global + 0.3 industry
        assert_eq!(score, 8.6);
    }

    #[test]
    fn geo_score_zero_mentions_no_bonuses() {
        let prompts = prompts_with_tags(&["not mentioned"; 7]);
        let classification = Classification::default_bucket("US".to_string());
        let score = compute_geo_score(&classification, &prompts, true, &mut FixedJitter(0.0));
        assert_eq!(score, 1.0);
    }

    #[test]
    fn geo_score_zero_mentions_global_gets_small_credit() {
        let prompts = prompts_with_tags(&["not mentioned"; 7]);
        let score = compute_geo_score(&tech_global(), &prompts, false, &mut FixedJitter(0.0));
        assert_eq!(score, 1.2);
    }

    #[test]
    fn geo_score_empty_prompts_is_finite() {
        let classification = Classification::default_bucket("US".to_string());
        let score = compute_geo_score(&classification, &[], false, &mut FixedJitter(0.0));
        assert!(score.is_finite());
        assert_eq!(score, 1.0);
    }

    #[test]
    fn geo_score_not_mentioned_tag_does_not_count() {
        // "not mentioned" contains "mentioned" as a substring; the naive
        // check would score these as 7/7.
        let prompts = prompts_with_tags(&["not mentioned"; 7]);
        let score = compute_geo_score(&tech_global(), &prompts, false, &mut FixedJitter(0.0));
        assert!(score < 2.0);
    }

    #[test]
    fn scores_stay_in_bounds_at_jitter_extremes() {
        let full = prompts_with_tags(&["mentioned"; 7]);
        let none = prompts_with_tags(&["error"; 7]);
        let classification = tech_global();

        for jitter in [-JITTER_SPREAD, 0.0, JITTER_SPREAD] {
            for prompts in [&full, &none] {
                let geo =
                    compute_geo_score(&classification, prompts, true, &mut FixedJitter(jitter));
                let benchmark = compute_benchmark_score(&classification, &mut FixedJitter(jitter));
                assert!((0.0..=10.0).contains(&geo));
                assert!((0.0..=10.0).contains(&benchmark));
            }
        }
    }

    #[test]
    fn benchmark_independent_of_mentions() {
        let classification = tech_global();
        let first = compute_benchmark_score(&classification, &mut FixedJitter(0.0));
        let second = compute_benchmark_score(&classification, &mut FixedJitter(0.0));
        assert_eq!(first, second);
    }

    #[test]
    fn benchmark_unknown_keys_use_default_multiplier() {
        let classification = Classification {
            industry: "Underwater Basketweaving".to_string(),
            market: "Niche".to_string(),
            geography: "Atlantis".to_string(),
            category: "Crafts".to_string(),
            domain: "Weaving".to_string(),
        };
        let score = compute_benchmark_score(&classification, &mut FixedJitter(0.0));
        assert_eq!(score, 6.0);
    }

    #[test]
    fn benchmark_ceiling_applies_before_jitter() {
        // Tech/global/software multipliers push the raw product past 8.5.
        let score = compute_benchmark_score(&tech_global(), &mut FixedJitter(0.0));
        assert_eq!(score, 8.5);
    }

    #[test]
    fn mention_rate_empty_is_zero() {
        assert_eq!(mention_rate(&[]), 0.0);
    }

    #[test]
    fn random_jitter_stays_in_spread() {
        let mut jitter = RandomJitter;
        for _ in 0..100 {
            let sample = jitter.sample();
            assert!(sample.abs() <= JITTER_SPREAD);
        }
    }
}

/// Curated aliases for brands whose common name differs from the registered
/// one. Trigger is a substring of the lowercased business name.
const BRAND_ALIASES: &[(&str, &[&str])] = &[
    ("coca-cola", &["coke", "coca cola"]),
    ("coca cola", &["coke", "coca-cola"]),
    ("mcdonald", &["mcdonalds", "maccas"]),
    ("mercedes-benz", &["mercedes", "benz"]),
    ("meta platforms", &["meta", "facebook"]),
    ("alphabet", &["google"]),
    ("procter & gamble", &["p&g", "procter and gamble"]),
    ("johnson & johnson", &["j&j", "johnson and johnson"]),
];

/// Variations below this length match too much unrelated text.
const MIN_VARIATION_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct MentionCheck {
    pub mentioned: bool,
    pub variations: Vec<String>,
}

pub fn name_variations(business_name: &str) -> Vec<String> {
    let lower = business_name.trim().to_lowercase();

    let mut candidates = vec![
        lower.clone(),
        lower.replace('-', " "),
        lower.replace(' ', "-"),
        lower.chars().filter(|c| c.is_alphanumeric()).collect(),
    ];

    for (trigger, aliases) in BRAND_ALIASES {
        if lower.contains(trigger) {
            candidates.extend(aliases.iter().map(|alias| alias.to_string()));
        }
    }

    let mut variations: Vec<String> = vec![];
    for candidate in candidates {
        if candidate.len() >= MIN_VARIATION_LEN && !variations.contains(&candidate) {
            variations.push(candidate);
        }
    }
    variations
}

/// Substring containment over the variation set. Deliberately not semantic
/// matching: "Coke Zero" counts as a Coca-Cola mention, "Cokeville" would
/// too. Accepted trade-off for a conservative, explainable check.
pub fn detect_mention(business_name: &str, answer_text: &str) -> MentionCheck {
    let variations = name_variations(business_name);
    let answer = answer_text.to_lowercase();
    let mentioned = variations.iter().any(|variation| answer.contains(variation));

    MentionCheck {
        mentioned,
        variations,
    }
}

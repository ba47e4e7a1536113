use crate::domain::analysis::{Classification, TestPrompt};

/// "worldwide" vs "in {region}" phrasing for question bodies.
fn geography_phrase(geography: &str) -> String {
    match geography {
        "Global" => "worldwide".to_string(),
        region => format!("in {}", region),
    }
}

/// Second phrasing form so the seven questions don't all read the same.
fn geography_adverb(geography: &str) -> String {
    match geography {
        "Global" => "globally".to_string(),
        region => format!("in {}", region),
    }
}

type TemplateFn = fn(&Classification) -> Vec<TestPrompt>;

/// Pick a template by domain first, industry second, generic otherwise.
pub fn fallback_prompts(classification: &Classification) -> Vec<TestPrompt> {
    let template: TemplateFn = match classification.domain.as_str() {
        "Beverage Manufacturing" => beverage_prompts,
        "Diversified Operations" => conglomerate_prompts,
        "Cybersecurity" => cybersecurity_prompts,
        "CDN & Security" => cdn_prompts,
        _ => match classification.industry.as_str() {
            "Food & Beverage" => beverage_prompts,
            "Conglomerate" => conglomerate_prompts,
            _ => generic_prompts,
        },
    };
    template(classification)
}

fn beverage_prompts(c: &Classification) -> Vec<TestPrompt> {
    let place = geography_phrase(&c.geography);
    let adverb = geography_adverb(&c.geography);
    vec![
        TestPrompt::new(
            "Best in category",
            format!("What are the most popular soft drink brands {}?", place),
        ),
        TestPrompt::new(
            "Recommendation",
            "Can you recommend a refreshing beverage for a hot day?".to_string(),
        ),
        TestPrompt::new(
            "Comparison",
            format!("How do the leading beverage companies compare {}?", adverb),
        ),
        TestPrompt::new(
            "Market leaders",
            format!("Which companies dominate the {} market {}?", c.category.to_lowercase(), place),
        ),
        TestPrompt::new(
            "Occasions",
            "What drinks do people usually serve at parties and gatherings?".to_string(),
        ),
        TestPrompt::new(
            "Alternatives",
            "What are some well-known alternatives to the biggest soda brands?".to_string(),
        ),
        TestPrompt::new(
            "Brand recognition",
            format!("Which beverage brands are most recognized {}?", adverb),
        ),
    ]
}

fn conglomerate_prompts(c: &Classification) -> Vec<TestPrompt> {
    let place = geography_phrase(&c.geography);
    let adverb = geography_adverb(&c.geography);
    vec![
        TestPrompt::new(
            "Best in category",
            format!("What are the largest diversified holding companies {}?", place),
        ),
        TestPrompt::new(
            "Investment",
            "Which conglomerates are considered good long-term investments?".to_string(),
        ),
        TestPrompt::new(
            "Comparison",
            format!("How do the major multi-industry groups compare {}?", adverb),
        ),
        TestPrompt::new(
            "Market leaders",
            format!("Which holding companies lead the {} market?", c.market.to_lowercase()),
        ),
        TestPrompt::new(
            "History",
            "Which companies grew from a single business into a large group of businesses?".to_string(),
        ),
        TestPrompt::new(
            "Leadership",
            "Which conglomerates are known for strong, long-tenured leadership?".to_string(),
        ),
        TestPrompt::new(
            "Brand recognition",
            format!("Which diversified companies are most recognized {}?", adverb),
        ),
    ]
}

fn cybersecurity_prompts(c: &Classification) -> Vec<TestPrompt> {
    let place = geography_phrase(&c.geography);
    let adverb = geography_adverb(&c.geography);
    vec![
        TestPrompt::new(
            "Best in category",
            format!("What are the best cybersecurity companies {}?", place),
        ),
        TestPrompt::new(
            "Recommendation",
            "Can you recommend an endpoint protection platform for a mid-size company?".to_string(),
        ),
        TestPrompt::new(
            "Comparison",
            format!("How do the top {} vendors compare {}?", c.category.to_lowercase(), adverb),
        ),
        TestPrompt::new(
            "Problem solving",
            "We suffered a phishing incident. Which security providers should we evaluate?".to_string(),
        ),
        TestPrompt::new(
            "Market leaders",
            format!("Which companies lead the enterprise security market {}?", place),
        ),
        TestPrompt::new(
            "Alternatives",
            "What are strong alternatives to the best-known threat detection vendors?".to_string(),
        ),
        TestPrompt::new(
            "Trust",
            "Which cybersecurity brands do enterprises trust the most?".to_string(),
        ),
    ]
}

fn cdn_prompts(c: &Classification) -> Vec<TestPrompt> {
    let place = geography_phrase(&c.geography);
    let adverb = geography_adverb(&c.geography);
    vec![
        TestPrompt::new(
            "Best in category",
            format!("What are the best content delivery networks {}?", place),
        ),
        TestPrompt::new(
            "Recommendation",
            "Can you recommend a CDN for a high-traffic e-commerce site?".to_string(),
        ),
        TestPrompt::new(
            "Comparison",
            format!("How do the major {} providers compare {}?", c.category.to_lowercase(), adverb),
        ),
        TestPrompt::new(
            "Problem solving",
            "Our site goes down under load spikes. Which infrastructure providers can help?".to_string(),
        ),
        TestPrompt::new(
            "Market leaders",
            format!("Which companies lead the web infrastructure market {}?", place),
        ),
        TestPrompt::new(
            "Security",
            "Which providers offer the best DDoS protection alongside content delivery?".to_string(),
        ),
        TestPrompt::new(
            "Pricing",
            "Which CDN providers offer the best value for a growing startup?".to_string(),
        ),
    ]
}

fn generic_prompts(c: &Classification) -> Vec<TestPrompt> {
    let place = geography_phrase(&c.geography);
    let adverb = geography_adverb(&c.geography);
    let category = c.category.to_lowercase();
    let domain = c.domain.to_lowercase();
    vec![
        TestPrompt::new(
            "Best in category",
            format!("What are the best {} companies {}?", category, place),
        ),
        TestPrompt::new(
            "Recommendation",
            format!("Can you recommend a reliable {} provider {}?", category, place),
        ),
        TestPrompt::new(
            "Comparison",
            format!("How do the top {} brands compare {}?", domain, adverb),
        ),
        TestPrompt::new(
            "Problem solving",
            format!("I need help choosing a {} partner. What should I look for?", category),
        ),
        TestPrompt::new(
            "Market leaders",
            format!("Which companies lead the {} market {}?", c.market.to_lowercase(), adverb),
        ),
        TestPrompt::new(
            "Alternatives",
            format!("What are good alternatives to the big names in {}?", domain),
        ),
        TestPrompt::new(
            "Trust",
            format!("Which {} providers are most trusted {}?", category, place),
        ),
    ]
}

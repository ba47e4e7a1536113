use crate::domain::analysis::Classification;
use crate::domain::geography::extract_geography;

/// One entry in the ordered matcher cascade. The first rule with a trigger
/// contained in the text wins, so more specific rules sit above broader ones.
struct ClassifierRule {
    triggers: &'static [&'static str],
    industry: &'static str,
    market: &'static str,
    category: &'static str,
    domain: &'static str,
}

impl ClassifierRule {
    fn matches(&self, text: &str) -> bool {
        self.triggers.iter().any(|trigger| text.contains(trigger))
    }

    fn classification(&self, geography: String) -> Classification {
        Classification {
            industry: self.industry.to_string(),
            market: self.market.to_string(),
            geography,
            category: self.category.to_string(),
            domain: self.domain.to_string(),
        }
    }
}

const CLASSIFIER_RULES: &[ClassifierRule] = &[
    ClassifierRule {
        triggers: &["coca-cola", "coca cola", "pepsi", "dr pepper", "red bull"],
        industry: "Food & Beverage",
        market: "Consumer Beverages",
        category: "Soft Drinks",
        domain: "Beverage Manufacturing",
    },
    ClassifierRule {
        triggers: &["cloudflare", "akamai", "fastly", "content delivery network", " cdn "],
        industry: "Technology",
        market: "Enterprise Infrastructure",
        category: "Web Infrastructure",
        domain: "CDN & Security",
    },
    ClassifierRule {
        triggers: &[
            "crowdstrike",
            "palo alto networks",
            "sentinelone",
            "fortinet",
            "cybersecurity",
            "threat detection",
        ],
        industry: "Technology",
        market: "Enterprise Security",
        category: "Security Software",
        domain: "Cybersecurity",
    },
    ClassifierRule {
        triggers: &["microsoft", "google", "apple", "amazon", "meta platforms"],
        industry: "Technology",
        market: "Global Technology",
        category: "Consumer & Enterprise Software",
        domain: "Software & Cloud",
    },
    ClassifierRule {
        triggers: &["berkshire", "conglomerate", "holdings", "diversified group"],
        industry: "Conglomerate",
        market: "Diversified",
        category: "Holding Company",
        domain: "Diversified Operations",
    },
    ClassifierRule {
        triggers: &["starbucks", "mcdonald", "nestle", "brewery", "roastery"],
        industry: "Food & Beverage",
        market: "Food & Dining",
        category: "Restaurants & Food",
        domain: "Food Services",
    },
];

/// Per-industry keyword tables for the scored fallback. Declaration order is
/// the tie-break when two industries reach the same count.
const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Technology",
        &[
            "software", "saas", "tech", " app", "cloud", "platform", " api", "digital", " ai ",
            "data", "startup", "developer",
        ],
    ),
    (
        "Food & Beverage",
        &[
            "food", "beverage", "drink", "restaurant", "coffee", " tea", "juice", "soda", "snack",
            "brewing", "kitchen", "menu",
        ],
    ),
    (
        "Healthcare",
        &[
            "health", "medical", "clinic", "pharma", "dental", "wellness", "hospital", "therapy",
        ],
    ),
    (
        "Finance",
        &[
            "bank", "finance", "financial", "invest", "insurance", "capital", "lending", "payments",
        ],
    ),
    (
        "Retail",
        &[
            "shop", "store", "retail", "fashion", "apparel", "ecommerce", "marketplace", "boutique",
        ],
    ),
    (
        "Education",
        &[
            "school", "education", "learning", "course", "training", "university", "tutoring",
        ],
    ),
    (
        "Real Estate",
        &["real estate", "property", "realty", "homes", "apartments", "brokerage"],
    ),
    (
        "Business Services",
        &[
            "consulting", "agency", "services", "solutions", "marketing", "legal", "accounting",
        ],
    ),
];

pub fn classify(business_name: &str, website_url: &str, content: Option<&str>) -> Classification {
    let text = format!(
        "{} {} {}",
        business_name,
        website_url,
        content.unwrap_or_default()
    )
    .to_lowercase();
    let geography = extract_geography(business_name, website_url, content);

    for rule in CLASSIFIER_RULES {
        if rule.matches(&text) {
            return rule.classification(geography);
        }
    }

    scored_classification(&text, geography)
}

fn scored_classification(text: &str, geography: String) -> Classification {
    let mut best_industry = "";
    let mut best_score = 0;
    for (industry, keywords) in INDUSTRY_KEYWORDS {
        let score = keywords.iter().filter(|kw| text.contains(*kw)).count();
        if score > best_score {
            best_score = score;
            best_industry = *industry;
        }
    }

    if best_score == 0 {
        return Classification::default_bucket(geography);
    }

    let (market, category, domain) = derive_profile(best_industry, text);
    Classification {
        industry: best_industry.to_string(),
        market,
        geography,
        category,
        domain,
    }
}

/// Secondary signals refine the winning industry into market/category/domain.
fn derive_profile(industry: &str, text: &str) -> (String, String, String) {
    let enterprise = ["enterprise", "b2b", "for teams", "for business"]
        .iter()
        .any(|kw| text.contains(kw));

    match industry {
        "Technology" => {
            if text.contains("security") || text.contains("cyber") {
                (
                    "Enterprise Security".to_string(),
                    "Security Software".to_string(),
                    "Cybersecurity".to_string(),
                )
            } else if enterprise {
                (
                    "Enterprise Software".to_string(),
                    "B2B SaaS".to_string(),
                    "Software & Cloud".to_string(),
                )
            } else {
                (
                    "Consumer Technology".to_string(),
                    "Apps & Devices".to_string(),
                    "Software & Cloud".to_string(),
                )
            }
        }
        "Food & Beverage" => {
            let drinks = ["beverage", "drink", "coffee", " tea", "juice", "soda", "brewing"]
                .iter()
                .any(|kw| text.contains(kw));
            if drinks {
                (
                    "Consumer Beverages".to_string(),
                    "Beverages".to_string(),
                    "Beverage Manufacturing".to_string(),
                )
            } else {
                (
                    "Food & Dining".to_string(),
                    "Restaurants & Food".to_string(),
                    "Food Services".to_string(),
                )
            }
        }
        "Healthcare" => (
            "Healthcare Services".to_string(),
            "Medical Care".to_string(),
            "Health & Wellness".to_string(),
        ),
        "Finance" => (
            if enterprise {
                "Institutional Finance".to_string()
            } else {
                "Consumer Finance".to_string()
            },
            "Financial Services".to_string(),
            "Banking & Investments".to_string(),
        ),
        "Retail" => (
            "Consumer Retail".to_string(),
            "Shopping".to_string(),
            "Retail & E-commerce".to_string(),
        ),
        "Education" => (
            "Education Services".to_string(),
            "Learning & Training".to_string(),
            "Education".to_string(),
        ),
        "Real Estate" => (
            "Property Services".to_string(),
            "Real Estate".to_string(),
            "Property & Housing".to_string(),
        ),
        _ => (
            "B2B Services".to_string(),
            "Professional Services".to_string(),
            "General Business".to_string(),
        ),
    }
}

/// Brands with worldwide recognition regardless of where the text places them.
const GLOBAL_BRANDS: &[&str] = &[
    "microsoft",
    "google",
    "apple",
    "amazon",
    "meta platforms",
    "facebook",
    "netflix",
    "coca-cola",
    "coca cola",
    "pepsi",
    "nike",
    "adidas",
    "samsung",
    "sony",
    "toyota",
    "mcdonald",
    "starbucks",
    "ibm",
    "intel",
    "oracle",
    "salesforce",
    "cloudflare",
    "akamai",
    "visa",
    "mastercard",
];

const STRONG_GLOBAL_KEYWORDS: &[&str] = &[
    "international",
    "worldwide",
    "global",
    "multinational",
    "fortune 500",
    "nasdaq",
    "nyse",
    "publicly traded",
];

/// Declaration order is the tie-break: the first region to reach the highest
/// keyword count wins.
const REGION_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "US",
        &[
            "usa",
            "united states",
            "america",
            " inc",
            " llc",
            ".us",
            "austin",
            "texas",
            " tx",
            "new york",
            "california",
            "san francisco",
            "seattle",
            "chicago",
            "boston",
            "denver",
        ],
    ),
    (
        "UK",
        &[
            ".co.uk",
            "united kingdom",
            "britain",
            "british",
            "london",
            "manchester",
            " ltd",
            " plc",
        ],
    ),
    (
        "Canada",
        &[".ca", "canada", "canadian", "toronto", "vancouver", "montreal"],
    ),
    (
        "Australia",
        &[".com.au", "australia", "australian", "sydney", "melbourne", " pty"],
    ),
    (
        "Germany",
        &[".de", "germany", "german", "berlin", "munich", "hamburg", " gmbh"],
    ),
    (
        "India",
        &[".in", "india", "mumbai", "delhi", "bangalore", " pvt"],
    ),
    (
        "Europe",
        &[".eu", "europe", "european", "paris", "amsterdam", "madrid"],
    ),
];

const DEFAULT_REGION: &str = "US";

pub fn extract_geography(business_name: &str, website_url: &str, content: Option<&str>) -> String {
    let text = format!(
        "{} {} {}",
        business_name,
        website_url,
        content.unwrap_or_default()
    )
    .to_lowercase();

    if GLOBAL_BRANDS.iter().any(|brand| text.contains(brand)) {
        return "Global".to_string();
    }

    if STRONG_GLOBAL_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        return "Global".to_string();
    }

    let mut best_region = DEFAULT_REGION;
    let mut best_score = 0;
    for (region, keywords) in REGION_KEYWORDS {
        let score = keywords.iter().filter(|kw| text.contains(*kw)).count();
        if score > best_score {
            best_score = score;
            best_region = *region;
        }
    }

    best_region.to_string()
}

#[cfg(test)]
mod tests {
    use super::extract_geography;

    #[test]
    fn global_brand_wins_over_region_signals() {
        let result = extract_geography("Microsoft", "https://www.microsoft.com", None);
        assert_eq!(result, "Global");
    }

    #[test]
    fn strong_global_keyword_in_content() {
        let result = extract_geography(
            "Acme Logistics",
            "https://acmelogistics.net",
            Some("We ship worldwide from 40 distribution hubs."),
        );
        assert_eq!(result, "Global");
    }

    #[test]
    fn us_signals_from_name() {
        let result = extract_geography("Acme Inc, Austin TX", "https://acme.net", None);
        assert_eq!(result, "US");
    }

    #[test]
    fn german_legal_suffix_and_city() {
        let result = extract_geography(
            "Schmidt Maschinenbau GmbH",
            "https://schmidt-maschinenbau.de",
            Some("Unser Werk in Munich"),
        );
        assert_eq!(result, "Germany");
    }

    #[test]
    fn uk_signals() {
        let result = extract_geography("Brighton Tea Rooms Ltd", "https://brightontea.co.uk", None);
        assert_eq!(result, "UK");
    }

    #[test]
    fn no_signal_defaults_to_us() {
        assert_eq!(extract_geography("Zxqwy", "https://zxqwy.net", None), "US");
        assert_eq!(extract_geography("", "", None), "US");
    }

    #[test]
    fn deterministic_for_same_input() {
        let first = extract_geography("Maple Outfitters", "https://mapleoutfitters.ca", None);
        let second = extract_geography("Maple Outfitters", "https://mapleoutfitters.ca", None);
        assert_eq!(first, second);
    }
}

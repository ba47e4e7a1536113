use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use url::Url;

use crate::services::{analyzer, LlmClient, UsageTracker};

const MAX_BUSINESS_NAME_LEN: usize = 200;
const INVALID_INPUT_MESSAGE: &str = "Please provide a valid business name and website URL.";
const ANALYSIS_FAILED_MESSAGE: &str = "Analysis failed. Please try again.";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    business_name: String,
    website_url: String,
}

#[post("")]
async fn analyze(
    body: web::Json<AnalyzeRequest>,
    llm: web::Data<LlmClient>,
    usage_tracker: web::Data<UsageTracker>,
) -> HttpResponse {
    /*
    1. Validate the business name and website url
    2. Check the usage gates, serve a mocked result when denied
    3. Run the pipeline: classify -> prompts -> probes -> scores -> insights
    4. Record usage and return the result
    */

    let business_name = body.business_name.trim();
    if !is_valid_business_name(business_name) || !is_valid_website_url(&body.website_url) {
        log::info!("Rejected analyze request for {:?}", business_name);
        return HttpResponse::BadRequest().body(INVALID_INPUT_MESSAGE);
    }

    if !llm.is_configured() {
        log::error!("Analyze request received without an API key configured");
        return HttpResponse::InternalServerError().body(ANALYSIS_FAILED_MESSAGE);
    }

    if !usage_tracker.allowed() || !usage_tracker.within_budget() {
        log::info!("Usage limits reached, serving mocked analysis for {}", business_name);
        let result = analyzer::mock_analysis(business_name, &body.website_url);
        return HttpResponse::Ok().json(result);
    }

    let result = analyzer::run_analysis(business_name, &body.website_url, llm.clone()).await;
    usage_tracker.record_analysis();

    HttpResponse::Ok().json(result)
}

fn is_valid_business_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= MAX_BUSINESS_NAME_LEN
}

fn is_valid_website_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().map(|host| !host.is_empty()).unwrap_or(false)
        }
        Err(_) => false,
    }
}

use std::time::Duration;

use actix_web::web::Data;
use rand::Rng;
use tokio::time::timeout;
use uuid::Uuid;

use crate::domain::analysis::{
    count_true_mentions, AnalysisResult, Classification, TestPrompt, PROMPT_COUNT,
};
use crate::domain::scoring::{compute_benchmark_score, compute_geo_score, Jitter, RandomJitter};
use crate::domain::{classifier, insights, mention, prompt_templates};
use crate::services::llm_client::LlmClient;
use crate::services::website_fetcher;

const CLASSIFICATION_TIMEOUT_SECS: u64 = 5;
const PROMPT_GENERATION_TIMEOUT_SECS: u64 = 15;
const PROBE_TIMEOUT_SECS: u64 = 10;

const MENTIONED_TAG: &str = "mentioned";
const NOT_MENTIONED_TAG: &str = "not mentioned";
const ERROR_TAG: &str = "error";

/// Run the full pipeline: fetch -> classify -> generate prompts -> probe all
/// seven concurrently -> score -> insights. Total for any validated input;
/// every collaborator failure degrades to a deterministic fallback.
pub async fn run_analysis(
    business_name: &str,
    website_url: &str,
    llm: Data<LlmClient>,
) -> AnalysisResult {
    let analysis_id = Uuid::new_v4();
    log::info!("[{}] Analyzing {} ({})", analysis_id, business_name, website_url);

    let website = website_fetcher::fetch_website_content(website_url).await;
    let content = (!website.content.is_empty()).then_some(website.content.as_str());

    let classification = match timeout(
        Duration::from_secs(CLASSIFICATION_TIMEOUT_SECS),
        llm.classify_business(business_name, website_url, content),
    )
    .await
    {
        Ok(Ok(classification)) => classification,
        Ok(Err(e)) => {
            log::error!("[{}] LLM classification failed: {:?}", analysis_id, e);
            classifier::classify(business_name, website_url, content)
        }
        Err(_) => {
            log::error!("[{}] LLM classification timed out", analysis_id);
            classifier::classify(business_name, website_url, content)
        }
    };
    log::info!("[{}] Classified as {:?}", analysis_id, classification);

    let mut prompts = match timeout(
        Duration::from_secs(PROMPT_GENERATION_TIMEOUT_SECS),
        llm.generate_test_prompts(&classification, business_name),
    )
    .await
    {
        Ok(Ok(prompts)) => prompts,
        Ok(Err(e)) => {
            log::error!("[{}] Prompt generation failed: {:?}", analysis_id, e);
            prompt_templates::fallback_prompts(&classification)
        }
        Err(_) => {
            log::error!("[{}] Prompt generation timed out", analysis_id);
            prompt_templates::fallback_prompts(&classification)
        }
    };
    enforce_prompt_count(&mut prompts, &classification);

    run_probes(&mut prompts, business_name, &llm, analysis_id).await;

    let result = assemble_result(
        classification,
        prompts,
        website.has_structured_data,
        &mut RandomJitter,
    );
    log::info!(
        "[{}] GEO score {} (benchmark {}), {} mentions",
        analysis_id,
        result.geo_score,
        result.benchmark_score,
        result.llm_mentions
    );
    result
}

/// Fire all probes concurrently; each has its own timeout and degrades to an
/// "error" tag on its own, so one slow question never sinks the batch.
async fn run_probes(
    prompts: &mut [TestPrompt],
    business_name: &str,
    llm: &Data<LlmClient>,
    analysis_id: Uuid,
) {
    let mut handles = Vec::with_capacity(prompts.len());
    for prompt in prompts.iter() {
        let llm = llm.clone();
        let question = prompt.prompt.clone();
        let name = business_name.to_string();
        handles.push(tokio::spawn(async move {
            match timeout(
                Duration::from_secs(PROBE_TIMEOUT_SECS),
                llm.answer_prompt(&question),
            )
            .await
            {
                Ok(Ok(answer)) => {
                    let check = mention::detect_mention(&name, &answer);
                    if check.mentioned {
                        MENTIONED_TAG.to_string()
                    } else {
                        NOT_MENTIONED_TAG.to_string()
                    }
                }
                Ok(Err(e)) => {
                    log::error!("Probe failed: {:?}", e);
                    ERROR_TAG.to_string()
                }
                Err(_) => {
                    log::error!("Probe timed out");
                    ERROR_TAG.to_string()
                }
            }
        }));
    }

    for (prompt, handle) in prompts.iter_mut().zip(handles) {
        let tag = match handle.await {
            Ok(tag) => tag,
            Err(e) => {
                log::error!("[{}] Probe task panicked: {:?}", analysis_id, e);
                ERROR_TAG.to_string()
            }
        };
        prompt.response = Some(tag);
    }
}

/// The prompt list must hold exactly seven entries whichever path produced
/// it; pad from the template set or truncate.
fn enforce_prompt_count(prompts: &mut Vec<TestPrompt>, classification: &Classification) {
    if prompts.len() > PROMPT_COUNT {
        prompts.truncate(PROMPT_COUNT);
    }
    if prompts.len() < PROMPT_COUNT {
        let fillers = prompt_templates::fallback_prompts(classification);
        while prompts.len() < PROMPT_COUNT {
            prompts.push(fillers[prompts.len()].clone());
        }
    }
}

fn assemble_result(
    classification: Classification,
    prompts: Vec<TestPrompt>,
    has_structured_data: bool,
    jitter: &mut dyn Jitter,
) -> AnalysisResult {
    let geo_score = compute_geo_score(&classification, &prompts, has_structured_data, jitter);
    let benchmark_score = compute_benchmark_score(&classification, jitter);
    let llm_mentions = count_true_mentions(&prompts);
    let insight =
        insights::generate_insights(&classification, &prompts, geo_score, has_structured_data);

    AnalysisResult {
        classification,
        test_prompts: prompts,
        geo_score,
        benchmark_score,
        has_structured_data,
        llm_mentions,
        strengths: insight.strengths,
        gaps: insight.gaps,
        recommendations: insight.recommendations,
    }
}

/// Served when the usage limiter denies a request: same shape, same scoring
/// formulas, randomized probe outcomes instead of live ones.
pub fn mock_analysis(business_name: &str, website_url: &str) -> AnalysisResult {
    mock_analysis_with(
        business_name,
        website_url,
        &mut rand::thread_rng(),
        &mut RandomJitter,
    )
}

pub fn mock_analysis_with(
    business_name: &str,
    website_url: &str,
    rng: &mut impl Rng,
    jitter: &mut dyn Jitter,
) -> AnalysisResult {
    let classification = classifier::classify(business_name, website_url, None);
    let mut prompts = prompt_templates::fallback_prompts(&classification);

    for prompt in &mut prompts {
        let tag = if rng.gen_bool(0.4) {
            MENTIONED_TAG
        } else {
            NOT_MENTIONED_TAG
        };
        prompt.response = Some(tag.to_string());
    }

    let has_structured_data = rng.gen_bool(0.5);
    assemble_result(classification, prompts, has_structured_data, jitter)
}

use std::net::TcpListener;

use actix_web::web;
use beacon::{
    configuration::get_configuration,
    services::{LlmClient, UsageLimits, UsageTracker},
    startup::run,
};
use env_logger::Env;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    let llm_client = LlmClient::new(configuration.api_keys.openai);
    let usage_tracker = UsageTracker::new(UsageLimits {
        daily_request_limit: configuration.usage.daily_request_limit,
        monthly_budget_cents: configuration.usage.monthly_budget_cents,
        analysis_cost_cents: configuration.usage.analysis_cost_cents,
    });
    let usage_tracker = web::Data::new(usage_tracker);

    run(listener, llm_client, usage_tracker)?.await
}

use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub api_keys: ApiKeySettings,
    pub usage: UsageSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApiKeySettings {
    pub openai: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct UsageSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub daily_request_limit: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub monthly_budget_cents: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub analysis_cost_cents: u32,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub history_path: String,
    pub static_dir: String,
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub system_message: String,
    // None means permissive CORS
    pub cors_allowed_origin: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let history_path = env::var("CONVERSE_HISTORY_PATH")
            .unwrap_or_else(|_| "./conversation_history.json".to_string());
        let static_dir = env::var("CONVERSE_STATIC_DIR").unwrap_or_else(|_| "./static".to_string());
        let openai_api_hostname = env::var("CONVERSE_LLM_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let openai_api_key = env::var("OPENAI_API_KEY").expect("Missing env var OPENAI_API_KEY");
        let openai_model = env::var("CONVERSE_LLM_MODEL").unwrap_or_else(|_| "gpt-4".to_string());
        let system_message = env::var("CONVERSE_SYSTEM_MESSAGE")
            .unwrap_or_else(|_| "You are a helpful assistant.".to_string());
        let cors_allowed_origin = env::var("CONVERSE_CORS_ORIGIN").ok();

        Self {
            history_path,
            static_dir,
            openai_api_hostname,
            openai_api_key,
            openai_model,
            system_message,
            cors_allowed_origin,
        }
    }
}

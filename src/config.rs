use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AirtableConfig {
    pub api_key: String,
    pub base_id: String,
    pub table: String,
}

impl Default for AirtableConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_id: String::new(),
            table: "Models".to_string(),
        }
    }
}

impl AirtableConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.base_id.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 150,
            temperature: 0.7,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub lead_email: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            lead_email: "sourcing@bookatestdrive.com.au".to_string(),
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app_name: String,
    pub version: String,
    pub bind_addr: String,
    pub http_timeout_seconds: u64,
    /// Browser origins allowed to call the API; `*` mirrors any origin.
    pub cors_origins: Vec<String>,
    pub airtable: AirtableConfig,
    pub openai: OpenAiConfig,
    pub email: EmailConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Car Quiz API".to_string(),
            version: "1.0.0".to_string(),
            bind_addr: "0.0.0.0:8000".to_string(),
            http_timeout_seconds: 10,
            cors_origins: [
                "http://localhost:3000",
                "http://localhost:5173",
                "http://127.0.0.1:3000",
                "http://127.0.0.1:5173",
                "*",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            airtable: AirtableConfig::default(),
            openai: OpenAiConfig::default(),
            email: EmailConfig::default(),
        }
    }
}

/// Loads the JSON config at `path` (defaults when the file is absent) and
/// applies environment overrides on top.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let mut config = if Path::new(path).exists() {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)?
    } else {
        AppConfig::default()
    };
    apply_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

/// Overrides deployment values and secrets from a key lookup (normally the process environment).
pub fn apply_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let set = |target: &mut String, key: &str| {
        if let Some(value) = lookup(key) {
            *target = value;
        }
    };

    set(&mut config.bind_addr, "BIND_ADDR");
    set(&mut config.airtable.api_key, "AIRTABLE_API_KEY");
    set(&mut config.airtable.base_id, "AIRTABLE_BASE_ID");
    set(&mut config.airtable.table, "AIRTABLE_TABLE");
    set(&mut config.openai.api_key, "OPENAI_API_KEY");
    set(&mut config.openai.model, "OPENAI_MODEL");
    set(&mut config.email.lead_email, "LEAD_EMAIL");
    set(&mut config.email.smtp_host, "SMTP_HOST");
    set(&mut config.email.smtp_username, "SMTP_USERNAME");
    set(&mut config.email.smtp_password, "SMTP_PASSWORD");

    if let Some(origins) = lookup("CORS_ORIGINS") {
        config.cors_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();
    }

    if let Some(port) = lookup("SMTP_PORT") {
        config.email.smtp_port = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("SMTP_PORT must be a port number, got '{}'", port)))?;
    }

    Ok(())
}

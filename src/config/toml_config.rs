use crate::app::render::OutputFormat;
use crate::app::theme::ThemePreference;
use crate::utils::error::{FilmError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub endpoint: EndpointConfig,
    pub display: DisplayConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub base_url: Option<String>,
    pub graphql_path: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub theme: Option<ThemePreference>,
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub text: Option<String>,
    pub variables: Option<toml::Table>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FilmError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FilmError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FILM_LIST_BASE_URL})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FilmError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 將 `[query.variables]` 轉成 GraphQL 變數
    pub fn variables(&self) -> Result<serde_json::Map<String, serde_json::Value>> {
        let Some(table) = &self.query.variables else {
            return Ok(serde_json::Map::new());
        };

        match serde_json::to_value(table)? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(FilmError::InvalidConfigValueError {
                field: "query.variables".to_string(),
                value: other.to_string(),
                reason: "Variables must be a table".to_string(),
            }),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.endpoint.base_url {
            validation::validate_url("endpoint.base_url", base_url)?;
        }

        if let Some(path) = &self.endpoint.graphql_path {
            validation::validate_endpoint_path("endpoint.graphql_path", path)?;
        }

        if let Some(timeout) = self.endpoint.timeout_seconds {
            validation::validate_range("endpoint.timeout_seconds", timeout, 1, 300)?;
        }

        if self.query.variables.is_some() {
            validation::validate_required_field("query.text", &self.query.text)?;
        }

        if let Some(text) = &self.query.text {
            validation::validate_non_empty_string("query.text", text)?;
        }

        Ok(())
    }
}

use crate::app::render::OutputFormat;
use crate::app::theme::ThemePreference;
use crate::config::toml_config::TomlConfig;
use crate::core::{ConfigProvider, GraphQLRequest};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde_json::{Map, Value};

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";
pub const DEFAULT_GRAPHQL_PATH: &str = "/graphql";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// 合併預設值、TOML 檔案與命令列後的最終設定
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub base_url: String,
    pub graphql_path: String,
    pub timeout_seconds: u64,
    pub theme: ThemePreference,
    pub toggle_theme: bool,
    pub format: OutputFormat,
    pub color: bool,
    pub query: Option<String>,
    pub variables: Map<String, Value>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            graphql_path: DEFAULT_GRAPHQL_PATH.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            theme: ThemePreference::Auto,
            toggle_theme: false,
            format: OutputFormat::Table,
            color: true,
            query: None,
            variables: Map::new(),
        }
    }
}

impl ClientSettings {
    /// 以 TOML 檔案中有設定的欄位覆蓋預設值
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        config.validate()?;

        let defaults = Self::default();
        Ok(Self {
            base_url: config.endpoint.base_url.clone().unwrap_or(defaults.base_url),
            graphql_path: config
                .endpoint
                .graphql_path
                .clone()
                .unwrap_or(defaults.graphql_path),
            timeout_seconds: config
                .endpoint
                .timeout_seconds
                .unwrap_or(defaults.timeout_seconds),
            theme: config.display.theme.unwrap_or(defaults.theme),
            toggle_theme: defaults.toggle_theme,
            format: config.display.format.unwrap_or(defaults.format),
            color: config.display.color.unwrap_or(defaults.color),
            query: config.query.text.clone(),
            variables: config.variables()?,
        })
    }

    pub fn graphql_request(&self) -> Result<GraphQLRequest> {
        match &self.query {
            Some(text) => GraphQLRequest::new(text.clone(), self.variables.clone()),
            None => {
                // FilmListQuery 不宣告任何變數
                if !self.variables.is_empty() {
                    validation::validate_required_field("query", &self.query)?;
                }
                Ok(GraphQLRequest::film_list())
            }
        }
    }
}

impl ConfigProvider for ClientSettings {
    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.graphql_path)
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_endpoint_path("graphql_path", &self.graphql_path)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        validation::validate_url("endpoint", &self.endpoint())?;

        if !self.variables.is_empty() {
            validation::validate_required_field("query", &self.query)?;
        }

        if let Some(query) = &self.query {
            validation::validate_non_empty_string("query", query)?;
        }

        Ok(())
    }
}

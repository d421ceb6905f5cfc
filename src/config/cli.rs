use crate::app::render::OutputFormat;
use crate::app::theme::ThemePreference;
use crate::config::settings::ClientSettings;
use crate::config::toml_config::TomlConfig;
use crate::utils::error::{FilmError, Result};
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "film-list")]
#[command(about = "List Star Wars films from a GraphQL endpoint")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Base URL of the GraphQL backend
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path of the GraphQL endpoint on the backend
    #[arg(long)]
    pub graphql_path: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, value_enum)]
    pub theme: Option<ThemePreference>,

    /// Flip the resolved light/dark theme once before rendering
    #[arg(long)]
    pub toggle_theme: bool,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Disable ANSI colors")]
    pub no_color: bool,

    /// Override the GraphQL query text
    #[arg(long)]
    pub query: Option<String>,

    /// GraphQL variables as a JSON object
    #[arg(long)]
    pub variables: Option<String>,

    /// Print the request that would be sent and exit
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 預設值 <- TOML 檔案 <- 命令列
    pub fn resolve(&self) -> Result<ClientSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                ClientSettings::from_toml(&TomlConfig::from_file(path)?)?
            }
            None => ClientSettings::default(),
        };

        self.apply_to(&mut settings)?;
        settings.validate()?;
        Ok(settings)
    }

    fn apply_to(&self, settings: &mut ClientSettings) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(path) = &self.graphql_path {
            settings.graphql_path = path.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(query) = &self.query {
            settings.query = Some(query.clone());
        }
        if let Some(raw) = &self.variables {
            settings.variables = serde_json::from_str(raw).map_err(|e| {
                FilmError::InvalidConfigValueError {
                    field: "variables".to_string(),
                    value: raw.clone(),
                    reason: format!("Variables must be a JSON object: {}", e),
                }
            })?;
        }
        settings.toggle_theme |= self.toggle_theme;
        settings.color &= !self.no_color;
        Ok(())
    }
}

use clap::Parser;
use film_list::app::theme::ColorScheme;
use film_list::core::ConfigProvider;
use film_list::utils::error::ErrorSeverity;
use film_list::utils::logger;
use film_list::{CliConfig, ClientSettings, DisplayShell, FilmListView, HttpQueryChannel};
use std::io::IsTerminal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting film-list");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 合併並驗證配置
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let request = match settings.graphql_request() {
        Ok(request) => request,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if cli.dry_run {
        print_dry_run(&settings, &serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let scheme = ColorScheme::resolve(settings.theme);
    let color = settings.color && std::io::stdout().is_terminal();

    let channel = HttpQueryChannel::new(&settings)?;
    let mut view = FilmListView::new(request);
    let mut shell = DisplayShell::new(std::io::stdout().lock(), scheme, settings.format, color);
    if settings.toggle_theme {
        shell.toggle_theme();
    }
    tracing::debug!("Color scheme: {:?} (color output: {})", shell.scheme(), color);

    match shell.show(&mut view, &channel).await {
        Ok(count) => {
            tracing::info!("✅ Listed {} films from {}", count, channel.endpoint());
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Listing films failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn print_dry_run(settings: &ClientSettings, body: &str) {
    println!("🔍 Dry Run:");
    println!("  Endpoint: POST {}", settings.endpoint());
    println!("  Content-Type: application/json");
    println!("  Timeout: {}s", settings.timeout_seconds());
    println!("  Format: {:?}", settings.format);
    println!("  Body:");
    for line in body.lines() {
        println!("    {}", line);
    }
}

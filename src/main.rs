use clap::Parser;
use dog_discoverer::core::discovery::{DiscoveryController, DiscoveryOutcome};
use dog_discoverer::core::ConfigProvider;
use dog_discoverer::utils::error::{DiscoveryError, ErrorSeverity};
use dog_discoverer::utils::{logger, validation::Validate};
use dog_discoverer::{BanList, CliConfig, DogApiProvider, Session, TerminalView, TomlConfig};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse().resolve_api_key();

    // 載入 TOML 配置（可選）
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(mut config) => {
                config.apply_overrides(&cli);
                Some(config)
            }
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    // 初始化日誌
    let verbose = cli.verbose || file_config.as_ref().is_some_and(TomlConfig::verbose);
    let json_logs = cli.log_json || file_config.as_ref().is_some_and(TomlConfig::json_logs);
    if json_logs {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("🚀 Starting dog-discoverer");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match file_config {
        Some(config) => run(&config, cli.once).await,
        None => run(&cli, cli.once).await,
    };

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ dog-discoverer failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

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

/// Runs one discovery (`once`) or the interactive session. Returns the exit code.
async fn run<C: ConfigProvider + Validate>(config: &C, once: bool) -> Result<i32, DiscoveryError> {
    // 驗證配置
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");
    tracing::info!("🌐 Endpoint: {}", config.api_endpoint());

    let provider = DogApiProvider::from_config(config);
    let ban_list: BanList = config.initial_ban_list().iter().cloned().collect();
    let controller = DiscoveryController::new(provider, ban_list).with_max_attempts(config.max_attempts());
    tracing::debug!("Up to {} attempts per discovery", controller.max_attempts());
    let mut session = Session::new(controller, TerminalView::new(std::io::stdout()));

    if once {
        return Ok(match session.discover().await? {
            DiscoveryOutcome::Accepted { .. } => 0,
            DiscoveryOutcome::Exhausted { .. } | DiscoveryOutcome::Superseded { .. } => 2,
        });
    }

    session.run(BufReader::new(tokio::io::stdin())).await?;
    Ok(0)
}

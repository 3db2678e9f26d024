use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::io::AsyncReadExt;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::SCAN_WAIT_TIMEOUT_SECS;
use crate::enums::commands::Commands;
use crate::enums::repository_provider::RepositoryProvider;
use crate::errors::{CodeGuardError, CodeGuardResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::logger::report_logger::ReportLogger;
use crate::logger::spinner::Spinner;
use crate::services::analysis_dispatcher::{AnalysisDispatcher, DISPATCH_FAILURE_MESSAGE};
use crate::services::app_context::AppContext;
use crate::services::repository_scanner::RepositoryScanner;
use crate::structs::config::config::Config;
use crate::structs::repository_submission::RepositorySubmission;
use crate::ui::dashboard_server::DashboardServer;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> CodeGuardResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Analyze { file, code } => self.analyze_command(file, code).await,
            Commands::Connect { provider, url, token } => self.connect_command(provider, url, token).await,
            Commands::Serve { port } => self.serve_command(port).await,
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> CodeGuardResult<()> {
        log::info!("🚀 Initializing codeguard configuration...");

        let path = self.config_file()?;
        ConfigManager::create_sample_config(&path)?;

        log::info!("📝 Set your provider and API key variable in {}", path.display());
        log::info!("🔧 Run 'codeguard validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> CodeGuardResult<()> {
        let config = self.load_config()?;

        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("❌ {}", error);
            }
            return Err(CodeGuardError::config_error(
                &format!("{} configuration problem(s) found", errors.len()),
                None,
                Some("Fix the entries above and run 'codeguard validate' again"),
            ));
        }

        let key_env = config
            .ai
            .api_key_env
            .clone()
            .unwrap_or_else(|| ConfigHelper::default_api_key_env(&config.ai.provider).to_string());
        if std::env::var(&key_env).is_err() {
            log::warn!("⚠️ {} is not set; analysis will fail until it is exported", key_env);
        }

        log::info!("✅ Configuration is valid (provider: {})", config.ai.provider);
        Ok(())
    }

    async fn analyze_command(&self, file: Option<PathBuf>, code: Option<String>) -> CodeGuardResult<()> {
        let code = Self::read_code(file.as_deref(), code).await?;
        // Blank input must fail before the provider is even configured.
        AnalysisDispatcher::validate(&code)?;

        let config = self.load_config()?;
        let context = AppContext::from_config(&config)?;

        let spinner = Spinner::start("🔍 Analyzing code");
        match context.dispatcher.dispatch(&code).await {
            Ok(round) => {
                if round.has_failures() {
                    spinner.fail("Analysis finished with errors").await;
                } else {
                    spinner.succeed("Analysis complete").await;
                }
                ReportLogger::print_round(&round);
                Ok(())
            }
            Err(error) => {
                spinner.fail(DISPATCH_FAILURE_MESSAGE).await;
                Err(error)
            }
        }
    }

    async fn connect_command(&self, provider: RepositoryProvider, url: String, token: Option<String>) -> CodeGuardResult<()> {
        let scanner = RepositoryScanner::new();
        let repository = scanner.submit(RepositorySubmission::new(provider, url, token)).await?;

        let spinner = Spinner::start(format!("📡 Scanning {}", repository.name));
        match scanner
            .wait_for_scan(&repository.id, Duration::from_secs(SCAN_WAIT_TIMEOUT_SECS))
            .await
        {
            Ok(scanned) => {
                spinner.succeed(&format!("Scan of {} {}", scanned.name, scanned.status.label())).await;
                ReportLogger::print_repository(&scanned);
                Ok(())
            }
            Err(error) => {
                spinner.fail(&error.to_string()).await;
                Err(error)
            }
        }
    }

    async fn serve_command(&self, port: Option<u16>) -> CodeGuardResult<()> {
        let mut config = self.load_config()?;
        if port.is_some() {
            config.server.port = port;
        }

        let context = AppContext::from_config(&config)?;
        log::info!("💡 Press Ctrl-C to stop the server");
        DashboardServer::new(context, &config.server).run_until_ctrl_c().await
    }

    async fn read_code(file: Option<&Path>, code: Option<String>) -> CodeGuardResult<String> {
        if let Some(path) = file {
            log::info!("📄 Reading code from {}", path.display());
            return Ok(tokio::fs::read_to_string(path).await?);
        }

        if let Some(code) = code {
            return Ok(code);
        }

        log::info!("⌨️  Reading code from stdin (end with Ctrl-D)");
        let mut code = String::new();
        tokio::io::stdin().read_to_string(&mut code).await?;
        Ok(code)
    }

    fn load_config(&self) -> CodeGuardResult<Config> {
        ConfigManager::load(self.config_path.as_deref()).map_err(|error| {
            log::error!("💡 Run 'codeguard init' to create a configuration file.");
            error
        })
    }

    fn config_file(&self) -> CodeGuardResult<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => ConfigManager::default_config_path(),
        }
    }
}

use std::time::Duration;

pub const CONFIG_DIR_NAME: &str = "codeguard";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_SERVER_PORT_RANGE_START: u16 = 8080;
pub const DEFAULT_SERVER_PORT_RANGE_END: u16 = 8200;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;

pub const SCAN_SIMULATION_DELAY_MS: u64 = 4000;
pub const SCAN_POLL_INTERVAL_MS: u64 = 250;
pub const SCAN_WAIT_TIMEOUT_SECS: u64 = 30;

pub const ANTHROPIC_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

pub const SAMPLE_CONFIG: &str = r#"# CodeGuard configuration

[ai]
# anthropic | openai | gemini
provider = "anthropic"
# model = "claude-3-5-sonnet-20241022"
max_tokens = 4096
temperature = 0.2
# Name of the environment variable holding the API key
api_key_env = "ANTHROPIC_API_KEY"

[server]
host = "127.0.0.1"
# Leave unset to pick the first free port in 8080-8200
# port = 8080
"#;

pub fn scan_simulation_delay() -> Duration {
    Duration::from_millis(SCAN_SIMULATION_DELAY_MS)
}

pub fn scan_poll_interval() -> Duration {
    Duration::from_millis(SCAN_POLL_INTERVAL_MS)
}

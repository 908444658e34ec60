use anyhow::Result;
use once_cell::sync::Lazy;
use tokio::sync::Mutex;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

// Config is process wide, loads must not interleave.
static LOAD_LOCK: Lazy<Mutex<()>> = Lazy::new(|| return Mutex::new(()));

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());

    assert!(res.contains("agent-url = \"http://localhost:8000\""));
    assert!(res.contains("health-check-timeout = 1000"));
    assert!(res.contains("request-timeout = 60000"));
    assert!(res.contains("notice-duration = 5000"));
    assert!(res.contains("# username = \"\""));
    assert!(!res.contains("config-file"));
}

#[test]
fn it_describes_each_key() {
    let res = Config::serialize_default(cli::build());

    insta::assert_snapshot!(res.lines().next().unwrap_or_default(), @"# Secret Word Challenge API URL. Can be pointed at any compatible deployment.");
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let _lock = LOAD_LOCK.lock().await;
    let matches = cli::build().try_get_matches_from(vec![
        "secretword",
        "-c",
        "./config.example.toml",
    ])?;
    Config::load(vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::AgentURL), "http://localhost:8000");
    assert_eq!(Config::get(ConfigKey::RequestTimeout), "60000");

    return Ok(());
}

#[tokio::test]
async fn it_prefers_arguments_over_file() -> Result<()> {
    let _lock = LOAD_LOCK.lock().await;
    let matches = cli::build().try_get_matches_from(vec![
        "secretword",
        "-c",
        "./config.example.toml",
        "--agent-url",
        "http://agent.internal:9000",
    ])?;
    Config::load(vec![&matches]).await?;

    assert_eq!(
        Config::get(ConfigKey::AgentURL),
        "http://agent.internal:9000"
    );

    return Ok(());
}

#[tokio::test]
async fn it_fails_to_loads_config_from_file() -> Result<()> {
    let _lock = LOAD_LOCK.lock().await;
    let matches =
        cli::build().try_get_matches_from(vec!["secretword", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(vec![&matches]).await;
    assert!(res.is_err());

    return Ok(());
}

#[test]
fn it_defaults_the_history_file_into_the_cache_dir() {
    let history_file = Config::default(ConfigKey::HistoryFile);
    assert!(history_file.ends_with("history.json"));
    assert!(history_file.contains("secretword"));
}

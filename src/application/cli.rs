use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::TypedValueParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::cache_dir;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AgentClient;
use crate::domain::models::Role;
use crate::domain::models::Turn;
use crate::domain::services::FileHistory;
use crate::domain::services::HistoryStore;
use crate::infrastructure::agents::HttpAgent;

pub fn hotkeys_text() -> String {
    let text = r#"
HOTKEYS:
- Enter - Send your message to the agent.
- Up arrow / Down arrow - Scroll
- CTRL+U / CTRL+D - Page up / Page down
- CTRL+L - Clear the conversation, asks for confirmation first.
- CTRL+C - Exit. A message still waiting for an answer is dropped, your own message stays in the history.
        "#;

    return text.trim().to_string();
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

fn history() -> FileHistory {
    return FileHistory::new(path::PathBuf::from(Config::get(ConfigKey::HistoryFile)));
}

pub fn format_turn(turn: &Turn) -> String {
    let author = match turn.role() {
        Role::User => Paint::blue(format!("{}:", Config::get(ConfigKey::Username))).bold(),
        Role::Agent => Paint::cyan("Agent:".to_string()).bold(),
    };

    return format!("{author} {}", turn.content());
}

async fn print_history() -> Result<()> {
    let turns = history().load().await;
    if turns.is_empty() {
        println!("There is no conversation stored yet. Start chatting!");
        return Ok(());
    }

    let res = turns
        .iter()
        .map(|turn| {
            return format_turn(turn);
        })
        .collect::<Vec<String>>()
        .join("\n\n");

    println!("{res}");
    return Ok(());
}

async fn clear_history(clear_matches: &ArgMatches) -> Result<()> {
    let history = history();
    if !history.has_history().await {
        println!("There is no conversation to clear.");
        return Ok(());
    }

    if !clear_matches.get_flag("yes") {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Clear the stored conversation? This can't be undone.")
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    history.clear().await;
    println!("Cleared the stored conversation");
    return Ok(());
}

async fn print_health() -> Result<()> {
    let health = HttpAgent::default().health_check().await?;
    println!(
        "{} {} ({})",
        Paint::green("✓"),
        health.app_name,
        health.status
    );

    return Ok(());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for Secret Word")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running with environment variable RUST_LOG=secretword")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn subcommand_history() -> Command {
    return Command::new("history")
        .about("Manage the stored conversation.")
        .arg_required_else_help(true)
        .subcommand(Command::new("path").about("Print the path of the conversation history file."))
        .subcommand(Command::new("show").about("Print the stored conversation."))
        .subcommand(
            Command::new("clear")
                .about("Erase the stored conversation.")
                .arg(
                    clap::Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Skip the confirmation prompt.")
                        .action(ArgAction::SetTrue),
                ),
        );
}

fn arg_agent_url() -> Arg {
    return Arg::new(ConfigKey::AgentURL.to_string())
        .short('u')
        .long(ConfigKey::AgentURL.to_string())
        .env("SECRETWORD_AGENT_URL")
        .num_args(1)
        .help(format!(
            "Secret Word Challenge API URL. Can be pointed at any compatible deployment. [default: {}]",
            Config::default(ConfigKey::AgentURL)
        ))
        .global(true);
}

fn arg_health_check_timeout() -> Arg {
    return Arg::new(ConfigKey::HealthCheckTimeout.to_string())
        .long(ConfigKey::HealthCheckTimeout.to_string())
        .env("SECRETWORD_HEALTH_CHECK_TIMEOUT")
        .num_args(1)
        .value_parser(value_parser!(u64).map(|val| return val.to_string()))
        .help(format!(
            "Time to wait in milliseconds before timing out when health checking the agent. [default: {}]",
            Config::default(ConfigKey::HealthCheckTimeout)
        ))
        .global(true);
}

fn arg_request_timeout() -> Arg {
    return Arg::new(ConfigKey::RequestTimeout.to_string())
        .long(ConfigKey::RequestTimeout.to_string())
        .env("SECRETWORD_REQUEST_TIMEOUT")
        .num_args(1)
        .value_parser(value_parser!(u64).map(|val| return val.to_string()))
        .help(format!(
            "Time to wait in milliseconds for the agent to answer a message. [default: {}]",
            Config::default(ConfigKey::RequestTimeout)
        ))
        .global(true);
}

fn arg_notice_duration() -> Arg {
    return Arg::new(ConfigKey::NoticeDuration.to_string())
        .long(ConfigKey::NoticeDuration.to_string())
        .env("SECRETWORD_NOTICE_DURATION")
        .num_args(1)
        .value_parser(value_parser!(u64).map(|val| return val.to_string()))
        .help(format!(
            "Time in milliseconds an error notice stays on screen. [default: {}]",
            Config::default(ConfigKey::NoticeDuration)
        ))
        .global(true);
}

fn arg_history_file() -> Arg {
    return Arg::new(ConfigKey::HistoryFile.to_string())
        .long(ConfigKey::HistoryFile.to_string())
        .env("SECRETWORD_HISTORY_FILE")
        .num_args(1)
        .help(format!(
            "Path to the file the conversation is stored in. [default: {}]",
            Config::default(ConfigKey::HistoryFile)
        ))
        .global(true);
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("secretword")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(hotkeys_text())
        .arg_required_else_help(false)
        .subcommand(Command::new("chat").about("Start chatting, this is the default."))
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(Command::new("health").about("Check the agent is reachable."))
        .subcommand(subcommand_history())
        .arg(arg_agent_url())
        .arg(arg_health_check_timeout())
        .arg(arg_request_timeout())
        .arg(arg_notice_duration())
        .arg(arg_history_file())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("SECRETWORD_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = cache_dir().join("debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("chat", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("health", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
            print_health().await?;
            return Ok(false);
        }
        Some(("history", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
            match subcmd_matches.subcommand() {
                Some(("path", _)) => {
                    println!("{}", Config::get(ConfigKey::HistoryFile));
                }
                Some(("show", _)) => {
                    print_history().await?;
                }
                Some(("clear", clear_matches)) => {
                    clear_history(clear_matches).await?;
                }
                _ => {
                    subcommand_history().print_long_help()?;
                }
            }

            return Ok(false);
        }
        _ => {
            Config::load(vec![&matches]).await?;
        }
    }

    return Ok(true);
}

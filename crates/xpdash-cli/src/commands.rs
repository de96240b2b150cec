use anyhow::{Context, Result};
use xpdash_client::{Client, ClientConfig, DEFAULT_BASE_URL};

use crate::args::{Cli, Commands, ConfigCommand};
use crate::config::{self, Config};
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    init_tracing();

    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref())?;
    let config_path = data_dir.join("config.toml");
    let config = Config::load_from(&config_path)?;

    let Some(command) = cli.command else {
        show_guidance(&config);
        return Ok(());
    };

    // Config management needs no login and no network.
    if let Commands::Config { command } = command {
        return match command {
            ConfigCommand::Show => handlers::config::show(&config, &config_path),
            ConfigCommand::Set { base_url, username } => {
                handlers::config::set(config, &config_path, base_url, username)
            }
        };
    }

    let base_url = cli
        .base_url
        .or_else(|| config.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let username = cli
        .username
        .or_else(|| config.username.clone())
        .context("no username; pass --username or store one with `xpdash config set`")?;
    let password = cli
        .password
        .context("no password; pass --password or set XPDASH_PASSWORD")?;

    let client = Client::new(ClientConfig {
        base_url,
        ..ClientConfig::default()
    })?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        client.login(&username, &password).await?;

        let result = match command {
            Commands::Overview => handlers::overview::handle(&client, cli.format).await,
            Commands::User => handlers::user::handle(&client, cli.format).await,
            Commands::Audit => handlers::audit::handle(&client, cli.format).await,
            Commands::Xp => handlers::xp::handle(&client, cli.format).await,
            Commands::Timeline => handlers::timeline::handle(&client, cli.format).await,
            Commands::Skills => handlers::skills::handle(&client, cli.format).await,
            Commands::Progress { step } => {
                handlers::progress::handle(&client, step, cli.format).await
            }
            Commands::Config { .. } => unreachable!("handled before login"),
        };

        client.logout().await;
        result
    })
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn show_guidance(config: &Config) {
    println!("xpdash - learning platform analytics\n");

    if config.username.is_none() {
        println!("Get started:");
        println!("  xpdash config set --username <login>");
        println!("  XPDASH_PASSWORD=... xpdash overview\n");
    } else {
        println!("Quick commands:");
        println!("  xpdash overview               # Every dashboard card");
        println!("  xpdash audit                  # Audit ratio");
        println!("  xpdash xp                     # XP per project");
        println!("  xpdash progress --step 1      # Walk graded history\n");
    }

    println!("For more commands:");
    println!("  xpdash --help");
}

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use smartjus::commands::{email::EmailCommand, serve::serve, submit::SubmitCommand};
use smartjus_utils::smartjus_version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    // Submitting a lead only talks to a remote endpoint and does not need
    // the server configuration.
    if let Command::Submit(command) = cli.command {
        return command.invoke().await;
    }

    let config = smartjus_config::load().context("Failed to load config")?;

    match cli.command {
        Command::Serve => serve(config).await?,
        Command::Email { command } => command.invoke(config).await?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Submit(_) | Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = smartjus_version())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the REST API server accepting leads from the SmartJus website
    #[command(aliases(["run", "start", "r", "s"]))]
    Serve,
    /// Test email deliverability
    #[command(aliases(["e"]))]
    Email {
        #[command(subcommand)]
        command: EmailCommand,
    },
    /// Fill out and submit the contact form against a running server
    Submit(SubmitCommand),
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_submit() {
        let cli = Cli::try_parse_from([
            "smartjus",
            "submit",
            "--endpoint",
            "http://127.0.0.1:8000/api/lead",
            "--category",
            "cliente",
            "--name",
            "Ana",
            "--email",
            "ana@x.com",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::Submit(_)));
    }

    #[test]
    fn submit_help_lists_categories() {
        let help = Cli::command()
            .find_subcommand_mut("submit")
            .unwrap()
            .render_long_help()
            .to_string();

        assert!(help.contains("parceiro"), "{help}");
        assert!(help.contains("Sou advogado parceiro"), "{help}");
        assert!(help.contains("cliente"), "{help}");
        assert!(help.contains("Tenho um caso para indicar"), "{help}");
    }

    #[test]
    fn parse_submit_unknown_category() {
        let result = Cli::try_parse_from([
            "smartjus",
            "submit",
            "--endpoint",
            "http://127.0.0.1:8000/api/lead",
            "--category",
            "outro",
        ]);

        assert!(result.is_err());
    }
}

use clap::{Parser, Subcommand};
use portfolio_behavior::contact::{self, Outcome, Submission};
use portfolio_behavior::{config, demo, logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio-behavior")]
#[command(about = "Companion tools for the portfolio page behavior")]
#[command(long_about = "\
Companion tools for the portfolio page behavior

The behavior itself ships as a WebAssembly module loaded by the page. These
commands help configure and check it without a browser.

Page config is an inline TOML block:

  <script type=\"application/toml\" id=\"portfolio-config\">
  [contact]
  recipient = \"me@example.org\"
  </script>

Run 'portfolio-behavior gen-config' to print a documented config.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Optional config file shared by several commands.
#[derive(clap::Args, Clone)]
struct ConfigArgs {
    /// Behavior config (TOML). Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a stock config with all options documented
    GenConfig,
    /// Validate a config file and print the resolved settings as JSON
    CheckConfig {
        /// Config file to check
        path: PathBuf,
    },
    /// Print the mailto link the contact form would open
    Mailto {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Write a demo page carrying the full DOM contract
    Demo {
        /// Output directory for index.html
        #[arg(long, default_value = "demo")]
        output: PathBuf,
        #[command(flatten)]
        config: ConfigArgs,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_cli();
    let cli = Cli::parse();

    match cli.command {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::CheckConfig { path } => {
            let resolved = config::load_config(&path)?;
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
        Command::Mailto {
            name,
            email,
            message,
            config: config_args,
        } => {
            let resolved = config::load_optional_config(config_args.config.as_deref())?;
            let submission = Submission::from_fields(Some(&name), Some(&email), Some(&message));
            match contact::submit(&submission, &resolved.contact) {
                Outcome::Navigate(uri) => println!("{uri}"),
                Outcome::Rejected { message, missing } => {
                    let fields: Vec<String> = missing.iter().map(ToString::to_string).collect();
                    eprintln!("{message} ({})", fields.join(", "));
                    std::process::exit(2);
                }
            }
        }
        Command::Demo {
            output,
            config: config_args,
        } => {
            let resolved = config::load_optional_config(config_args.config.as_deref())?;
            let path = demo::write_demo(&output, &resolved)?;
            println!("==> Demo page written to {}", path.display());
            println!(
                "    Build the module with: \
                 wasm-pack build --target web --no-default-features --out-dir {}/pkg",
                output.display()
            );
        }
    }

    Ok(())
}

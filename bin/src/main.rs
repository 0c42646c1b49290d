//! exr CLI - Bank of Italy exchange rates from the command line.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use exr_lib::DEFAULT_REQUEST_TIMEOUT_MS;
use std::path::PathBuf;

mod commands;
mod display;
mod logging;

use display::Format;

#[derive(Parser)]
#[command(name = "exr")]
#[command(about = "Exchange rates published by the Bank of Italy", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Request timeout in milliseconds
    #[arg(long, global = true, default_value_t = DEFAULT_REQUEST_TIMEOUT_MS)]
    timeout: u64,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rates of every currency on the latest quoted day
    Latest {
        /// Language of the response (en, it)
        #[arg(short, long)]
        lang: Option<String>,

        /// Response format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,

        /// Output file. JSON is printed when omitted; other formats default to latestRates.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rates of selected currencies on a given day
    Daily {
        /// Reference date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Base currency ISO code, repeatable. Prompts for a selection when omitted.
        #[arg(short, long = "base")]
        base: Vec<String>,

        /// Currency the rates are expressed against (EUR, USD, ITL)
        #[arg(long, default_value = "EUR")]
        quote: String,

        /// Language of the response (en, it)
        #[arg(short, long)]
        lang: Option<String>,

        /// Response format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,

        /// Output file. JSON is printed when omitted; other formats default to dailyRates.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Currencies known to the service
    Currencies {
        /// Language of the response (en, it)
        #[arg(short, long)]
        lang: Option<String>,

        /// Only currencies still in use, as ISO code and name
        #[arg(short, long)]
        simplified: bool,

        /// Save the result as a JSON file instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the JSON file without indentation
        #[arg(long, requires = "output")]
        compact: bool,
    },

    /// List ISO codes of the reference table starting with a prefix
    Filter {
        /// Prefix to match (case-insensitive)
        prefix: String,
    },

    /// Show a currency of the reference table
    Info {
        /// ISO code
        code: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Latest {
            lang,
            format,
            output,
        } => {
            commands::rates::latest(lang.as_deref(), format, output, cli.timeout, cli.quiet).await
        }
        Commands::Daily {
            date,
            base,
            quote,
            lang,
            format,
            output,
        } => {
            commands::rates::daily(
                &date,
                base,
                &quote,
                lang.as_deref(),
                format,
                output,
                cli.timeout,
                cli.quiet,
            )
            .await
        }
        Commands::Currencies {
            lang,
            simplified,
            output,
            compact,
        } => {
            commands::currencies::currencies(
                lang.as_deref(),
                simplified,
                output,
                !compact,
                cli.timeout,
                cli.quiet,
            )
            .await
        }
        Commands::Filter { prefix } => commands::currencies::filter(&prefix),
        Commands::Info { code } => commands::currencies::info(&code),
    }
}

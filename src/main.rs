use clap::{Parser, Subcommand};
use std::io;
use tracing::{info, Level};
use unitconv::convert::Converter;
use unitconv::session::{self, SessionConfig, DEFAULT_PROMPT};
use unitconv::units;

#[derive(Parser)]
#[command(name = "unitconv")]
#[command(about = "Length, weight and temperature converter", long_about = None)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read requests from stdin until "exit" (default)
    Repl {
        /// Prompt shown before each request
        #[arg(long, default_value = DEFAULT_PROMPT)]
        prompt: String,
    },

    /// Convert a single request (e.g., "1 mile to km")
    Convert {
        /// Request words
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        request: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every known unit and its aliases
    Units {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        None => run_repl(SessionConfig::default()),
        Some(Commands::Repl { prompt }) => run_repl(SessionConfig::with_prompt(prompt)),
        Some(Commands::Convert { request, json }) => convert_once(&request.join(" "), json),
        Some(Commands::Units { json }) => list_units(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_repl(config: SessionConfig) -> Result<(), Box<dyn std::error::Error>> {
    let converter = Converter::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let summary = session::run_session(&converter, &config, stdin.lock(), &mut stdout)?;
    info!(exited = summary.exited, "session closed");

    Ok(())
}

fn convert_once(request: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let conversion = Converter::new().convert(request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&conversion)?);
    } else {
        println!("{}", conversion);
    }

    Ok(())
}

fn list_units(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&units::UNITS[..])?);
        return Ok(());
    }

    print!("{}", units::render_listing());

    Ok(())
}

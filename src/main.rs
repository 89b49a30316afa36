use clap::{Parser as ClapParser, Subcommand};
use log::{debug, warn};
use query_filter::cli::{self, CheckOptions, CheckResult, CliError};
use query_filter::output::{to_json, to_json_pretty};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "qf")]
#[command(about = "qf - Translate compact query strings into document-database filters")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a query and print its filter document
    Check {
        /// The query to parse (reads from stdin if not provided)
        query: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Infer numbers, booleans and null from raw values
        #[arg(short, long)]
        infer: bool,

        /// Only validate syntax, don't print the document
        #[arg(long)]
        syntax_only: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'qf docs' to list categories)
        category: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            query,
            pretty,
            infer,
            syntax_only,
        } => run_check(query, pretty, infer, syntax_only),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        warn!("qf failed: {:?}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(
    query: Option<String>,
    pretty: bool,
    infer: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let query = match query {
        Some(q) => q,
        None if !atty::is(atty::Stream::Stdin) => {
            debug!("reading query from stdin");
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        None => return Err(CliError::NoInput),
    };

    let options = CheckOptions {
        query,
        infer,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Success(document) => {
            let json = if pretty {
                to_json_pretty(&document)
            } else {
                to_json(&document)
            };
            println!("{}", json);
        }
    }
    Ok(())
}

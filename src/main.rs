use clap::Parser;
use json_schema_to_types::{DuplicatePolicy, GenerateOptions, Target, generate_with_options};
use json_schema_to_types::options::DEFAULT_MAX_DEPTH;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "json-schema-to-types")]
#[command(about = "Generate type declarations from a JSON Schema", long_about = None)]
struct Cli {
    /// Input JSON Schema file (use '-' for stdin)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Target language (rust, java, luau)
    #[arg(short, long, value_name = "LANG")]
    lang: Target,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Mark generated types and fields public
    #[arg(short, long)]
    public: bool,

    /// Custom type name for the root schema
    #[arg(short, long, value_name = "NAME")]
    type_name: Option<String>,

    /// Declare each type name only once
    #[arg(long)]
    skip_duplicates: bool,

    /// Maximum nesting depth below the root
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let public = cli.public && cli.lang.formatter().supports_public();
    info!(target_lang = %cli.lang, "public is {}", if public { "on" } else { "off" });

    let mut options = GenerateOptions::new()
        .public(public)
        .max_depth(cli.max_depth);
    if let Some(type_name) = cli.type_name {
        options = options.root_name(type_name);
    }
    if cli.skip_duplicates {
        options = options.duplicates(DuplicatePolicy::Skip);
    }

    // Read input
    let input_content = if cli.input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(&cli.input)?
    };

    let code = generate_with_options(&input_content, cli.lang, &options)?;

    // Write output
    if let Some(output_path) = cli.output {
        fs::write(&output_path, code)?;
        info!(path = %output_path.display(), "done");
    } else {
        print!("{}", code);
    }

    Ok(())
}

// passperm: Generate a password list from permutations of probable words.
//
// Each word is expanded into case variants and leetspeak forms, then
// combined into one-, two- and three-word candidates with numeric and
// symbol suffixes. The list is written one candidate per line.
//
// Usage:
//   passperm -w WORD... [OPTIONS]
//
// Examples:
//   passperm -w alice rover 1987 -l 3 -o list.txt
//   passperm -w "Alice:Bob" smith --count
//   PASSPERM_LOG=debug passperm -w cat dog --lazy

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use passperm_cli::{CliError, OutputFormat, Overrides};
use passperm_core::Tier;
use passperm_gen::{Generator, GeneratorOptions};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "passperm",
    version,
    about = "Generate a password list from permutations of probable words"
)]
struct Args {
    /// Possible words used in the password. "a:b" pools both parts under one word.
    #[arg(short = 'w', long = "words", value_name = "WORD", num_args = 1.., required = true)]
    words: Vec<String>,

    /// Treat the words as an ordered list (reserved; does not change output).
    #[arg(short = 's', long = "strict")]
    strict: bool,

    /// Leetspeak intensity: 0 disables substitution, 5 applies every rule.
    #[arg(
        short = 'l',
        long,
        value_name = "LEVEL",
        env = "PASSPERM_LEVEL",
        allow_negative_numbers = true
    )]
    level: Option<i64>,

    /// Output file (default: stdout).
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Numeric suffix; repeat to replace the built-in list.
    #[arg(long = "suffix", value_name = "SUFFIX")]
    suffixes: Vec<String>,

    /// Symbol suffix; repeat to replace the built-in list.
    #[arg(long = "symbol", value_name = "SYMBOL")]
    symbols: Vec<String>,

    /// Connector placed between joined words; repeat for several.
    #[arg(long = "connector", value_name = "CONNECTOR")]
    connectors: Vec<String>,

    /// JSON options file; command-line flags take precedence.
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Stream candidates instead of building every tier in memory first.
    #[arg(long)]
    lazy: bool,

    /// Print the number of candidates per tier instead of the list.
    #[arg(long)]
    count: bool,

    /// Output line format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Log progress to stderr (-v info, -vv debug).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    passperm_cli::init_logging(args.verbose);

    if let Err(e) = run(args) {
        passperm_cli::fatal(&e.to_string());
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let base = match &args.options {
        Some(path) => passperm_cli::load_options(path)?,
        None => GeneratorOptions::default(),
    };
    let options = Overrides {
        level: args.level,
        strict_order: args.strict,
        suffixes: args.suffixes,
        symbols: args.symbols,
        connectors: args.connectors,
    }
    .apply(base);

    let generator = Generator::new(args.words, options);
    let estimate = generator.estimate();
    info!(
        one_word = %estimate.one_word,
        two_word = %estimate.two_word,
        three_word = %estimate.three_word,
        "candidates to generate"
    );

    if args.count {
        for tier in Tier::ALL {
            println!("{}-word\t{}", tier.word_count(), estimate.get(tier));
        }
        println!("total\t{}", estimate.total());
        return Ok(());
    }

    let out = passperm_cli::open_output(args.output.as_deref())?;
    let written = passperm_cli::write_candidates(&generator, out, args.format, args.lazy)?;
    info!(lines = written, "list written");
    Ok(())
}

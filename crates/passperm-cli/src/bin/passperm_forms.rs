// passperm-forms: Print the word forms each seed word expands to.
//
// Output is one line per form, tab-separated:
//   SEED<TAB>FORM
//
// Usage:
//   passperm-forms -w WORD... [-l LEVEL]

use std::io::{self, Write};

use clap::Parser;
use passperm_core::IntensityLevel;
use passperm_gen::{Generator, GeneratorOptions};

#[derive(Parser, Debug)]
#[command(
    name = "passperm-forms",
    version,
    about = "Print the case and leetspeak forms of each seed word"
)]
struct Args {
    /// Seed words. "a:b" pools both parts under one word.
    #[arg(short = 'w', long = "words", value_name = "WORD", num_args = 1.., required = true)]
    words: Vec<String>,

    /// Leetspeak intensity: 0 disables substitution, 5 applies every rule.
    #[arg(
        short = 'l',
        long,
        value_name = "LEVEL",
        env = "PASSPERM_LEVEL",
        default_value_t = 5,
        allow_negative_numbers = true
    )]
    level: i64,
}

fn main() {
    let args = Args::parse();
    passperm_cli::init_logging(0);

    let options = GeneratorOptions::default().with_level(IntensityLevel::from_raw(args.level));
    let generator = Generator::new(args.words, options);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut printed = Vec::new();
    for seed in generator.seeds() {
        // Repeated seeds share one pool.
        if printed.contains(&seed.id) {
            continue;
        }
        printed.push(seed.id);
        for form in generator.forms(seed.id) {
            if let Err(e) = writeln!(out, "{}\t{form}", seed.text) {
                passperm_cli::fatal(&format!("failed to write output: {e}"));
            }
        }
    }
    if let Err(e) = out.flush() {
        passperm_cli::fatal(&format!("failed to write output: {e}"));
    }
}

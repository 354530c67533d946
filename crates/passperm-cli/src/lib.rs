// passperm-cli: shared utilities for CLI tools.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use passperm_core::{Candidate, IntensityLevel, SinkError};
use passperm_gen::{CandidateSink, Generator, GeneratorOptions, LineWriter};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "PASSPERM_LOG";

/// Errors surfaced by the command-line tools.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read options file {}: {source}", path.display())]
    ReadOptions { path: PathBuf, source: io::Error },

    #[error("invalid options file {}: {source}", path.display())]
    ParseOptions {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to create {}: {source}", path.display())]
    CreateOutput { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("failed to flush output: {0}")]
    Flush(io::Error),
}

/// Install the stderr log subscriber.
///
/// `PASSPERM_LOG` wins when set; otherwise `verbosity` picks the level
/// (0 = warn, 1 = info, 2+ = debug). Stdout stays reserved for the list.
pub fn init_logging(verbosity: u8) {
    let fallback = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Load generator options from a JSON file. Missing fields keep defaults.
pub fn load_options(path: &Path) -> Result<GeneratorOptions, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::ReadOptions {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::ParseOptions {
        path: path.to_path_buf(),
        source,
    })
}

/// Command-line values layered over file or default options.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub level: Option<i64>,
    pub strict_order: bool,
    pub suffixes: Vec<String>,
    pub symbols: Vec<String>,
    pub connectors: Vec<String>,
}

impl Overrides {
    /// Apply every value that was given. Empty lists leave the table alone.
    pub fn apply(self, mut options: GeneratorOptions) -> GeneratorOptions {
        if let Some(level) = self.level {
            options.level = IntensityLevel::from_raw(level);
        }
        if self.strict_order {
            options.strict_order = true;
        }
        if !self.suffixes.is_empty() {
            options.suffixes = self.suffixes;
        }
        if !self.symbols.is_empty() {
            options.symbols = self.symbols;
        }
        if !self.connectors.is_empty() {
            options.connectors = self.connectors;
        }
        options
    }
}

/// Open the output destination: a file when given, stdout otherwise.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, CliError> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::CreateOutput {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Line format of the generated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One candidate per line.
    Plain,
    /// One JSON object per line with the candidate and its seed words.
    Jsonl,
}

#[derive(Serialize)]
struct CandidateRecord<'a> {
    text: &'a str,
    words: Vec<&'a str>,
}

/// Writes candidates as JSON lines, naming the seed words behind each.
pub struct JsonLinesWriter<'g, W: Write> {
    inner: W,
    generator: &'g Generator,
}

impl<'g, W: Write> JsonLinesWriter<'g, W> {
    pub fn new(inner: W, generator: &'g Generator) -> Self {
        Self { inner, generator }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn write_record(&mut self, record: &CandidateRecord<'_>) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.inner, record).map_err(io::Error::from)?;
        self.inner.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> CandidateSink for JsonLinesWriter<'_, W> {
    fn accept(&mut self, line: &str) -> Result<(), SinkError> {
        self.write_record(&CandidateRecord {
            text: line,
            words: Vec::new(),
        })
    }

    fn accept_candidate(&mut self, candidate: &Candidate) -> Result<(), SinkError> {
        let generator = self.generator;
        let words = candidate
            .provenance
            .as_slice()
            .iter()
            .filter_map(|id| generator.seed(*id))
            .map(|seed| seed.text.as_str())
            .collect();
        self.write_record(&CandidateRecord {
            text: &candidate.text,
            words,
        })
    }
}

/// Generate into `out` in the requested format and flush it.
///
/// `lazy` streams candidates instead of materializing the tiers first;
/// the output is identical either way.
pub fn write_candidates<W: Write>(
    generator: &Generator,
    out: W,
    format: OutputFormat,
    lazy: bool,
) -> Result<usize, CliError> {
    let (written, mut out) = match format {
        OutputFormat::Plain => {
            let mut sink = LineWriter::new(out);
            let written = drain(generator, &mut sink, lazy)?;
            (written, sink.into_inner())
        }
        OutputFormat::Jsonl => {
            let mut sink = JsonLinesWriter::new(out, generator);
            let written = drain(generator, &mut sink, lazy)?;
            (written, sink.into_inner())
        }
    };
    out.flush().map_err(CliError::Flush)?;
    Ok(written)
}

fn drain<S: CandidateSink>(
    generator: &Generator,
    sink: &mut S,
    lazy: bool,
) -> Result<usize, SinkError> {
    if lazy {
        generator.write_streaming(sink)
    } else {
        generator.write_to(sink)
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> Generator {
        Generator::new(
            ["cat", "dog"],
            GeneratorOptions::default().with_level(IntensityLevel::new(1)),
        )
    }

    #[test]
    fn overrides_apply_given_values() {
        let options = Overrides {
            level: Some(-2),
            strict_order: true,
            suffixes: vec!["00".into()],
            symbols: Vec::new(),
            connectors: vec!["_".into()],
        }
        .apply(GeneratorOptions::default());
        assert_eq!(options.level, IntensityLevel::NONE);
        assert!(options.strict_order);
        assert_eq!(options.suffixes, ["00"]);
        assert_eq!(options.symbols, ["*"]);
        assert_eq!(options.connectors, ["_"]);
    }

    #[test]
    fn empty_overrides_keep_options() {
        let base = GeneratorOptions::default().with_level(IntensityLevel::new(2));
        assert_eq!(Overrides::default().apply(base.clone()), base);
    }

    #[test]
    fn plain_output_matches_generate() {
        let g = generator();
        let mut out = Vec::new();
        let n = write_candidates(&g, &mut out, OutputFormat::Plain, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(n, g.generate().len());
        assert_eq!(text, g.generate().join("\n") + "\n");
    }

    #[test]
    fn lazy_output_is_identical() {
        let g = generator();
        let mut eager = Vec::new();
        let mut lazy = Vec::new();
        write_candidates(&g, &mut eager, OutputFormat::Plain, false).unwrap();
        write_candidates(&g, &mut lazy, OutputFormat::Plain, true).unwrap();
        assert_eq!(eager, lazy);
    }

    #[test]
    fn jsonl_names_seed_words() {
        let g = generator();
        let mut out = Vec::new();
        write_candidates(&g, &mut out, OutputFormat::Jsonl, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        let records: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), g.generate().len());
        assert_eq!(records[0]["text"], "CAT");
        assert_eq!(records[0]["words"], serde_json::json!(["cat"]));
        let catdog = records
            .iter()
            .find(|r| r["text"] == "Catdog")
            .expect("Catdog missing");
        assert_eq!(catdog["words"], serde_json::json!(["cat", "dog"]));
    }

    #[test]
    fn missing_options_file() {
        let err = load_options(Path::new("/nonexistent/passperm-options.json")).unwrap_err();
        assert!(matches!(err, CliError::ReadOptions { .. }));
    }

    #[test]
    fn options_file_round_trip() {
        let path = std::env::temp_dir().join(format!("passperm-options-{}.json", process::id()));
        std::fs::write(&path, r#"{ "level": 3, "symbols": ["!"] }"#).unwrap();
        let options = load_options(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(options.level, IntensityLevel::new(3));
        assert_eq!(options.symbols, ["!"]);
        assert_eq!(options.suffixes, ["1", "12", "123", "1234"]);
    }

    #[test]
    fn bad_options_file() {
        let path = std::env::temp_dir().join(format!("passperm-bad-{}.json", process::id()));
        std::fs::write(&path, "{ level: ").unwrap();
        let err = load_options(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, CliError::ParseOptions { .. }));
    }
}

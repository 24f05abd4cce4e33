// ============================================================================
// binconv
// Command line front end: one number, one report line per requested format
// ============================================================================
//
// Usage:
//   binconv 10 dec -B 8 -n -t
//   binconv "1000 0000" bin -s -o -t
//   binconv 2.5 dec -f -k 4 -j 4
//   binconv -- -inf dec -i
//
// Codec failures are printed per format and never abort the run.

use anyhow::{bail, Context, Result};
use binary_converter::prelude::*;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert numbers between decimal and fixed-width binary representations",
    allow_negative_numbers = true
)]
struct Cli {
    /// Number to convert (decimal text, or binary digits for `bin`)
    #[arg(value_name = "NUMBER")]
    number: String,

    /// Type of the number: `dec` or `bin`
    #[arg(value_name = "TYPE", value_parser = parse_input_kind)]
    kind: InputKind,

    /// Target width for integer formats and IEEE-754
    #[arg(short = 'B', long, default_value_t = ConverterConfig::DEFAULT_BITS)]
    bits: usize,

    /// Normal (unsigned) binary
    #[arg(short, long)]
    normal: bool,

    /// Sign-magnitude
    #[arg(short, long)]
    sign: bool,

    /// Ones' complement
    #[arg(short, long)]
    ones: bool,

    /// Two's complement
    #[arg(short, long)]
    twos: bool,

    /// Fixed point; prompts for k and j unless given
    #[arg(short, long)]
    fixed: bool,

    /// IEEE-754 (32 or 64 bits)
    #[arg(short, long)]
    ieee: bool,

    /// Group bits in fours and decimals in thousands
    #[arg(short, long)]
    beautify: bool,

    /// Fixed-point integer bits (k)
    #[arg(short = 'k', long, value_name = "K")]
    int_bits: Option<i64>,

    /// Fixed-point fraction bits (j)
    #[arg(short = 'j', long, value_name = "J")]
    frac_bits: Option<i64>,

    /// Log conversions to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn requested_formats(&self) -> Vec<Format> {
        let flags = [self.normal, self.sign, self.ones, self.twos, self.fixed, self.ieee];
        let requested: Vec<Format> = Format::ALL
            .into_iter()
            .zip(flags)
            .filter_map(|(format, on)| on.then_some(format))
            .collect();

        if requested.is_empty() {
            ConverterConfig::standard(self.kind).formats.to_vec()
        } else {
            requested
        }
    }
}

fn parse_input_kind(s: &str) -> Result<InputKind, String> {
    s.parse()
        .map_err(|_| format!("expected `dec` or `bin`, got `{}`", s))
}

/// Read one integer from stdin after printing `label`.
fn prompt(label: &str) -> Result<i64> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}: ", label)?;
    stdout.flush()?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        bail!("no value given for {}", label);
    }

    let line = line.trim();
    line.parse()
        .with_context(|| format!("{} must be an integer, got `{}`", label, line))
}

fn fixed_point_spec(cli: &Cli) -> Result<CodecResult<FixedPointSpec>> {
    let k = match cli.int_bits {
        Some(k) => k,
        None => prompt("Integer bits (k)")?,
    };
    let j = match cli.frac_bits {
        Some(j) => j,
        None => prompt("Fraction bits (j)")?,
    };
    Ok(FixedPointSpec::new(k, j))
}

/// Run every requested format over the input.
///
/// Parameter problems (a bad `-B`, an invalid `k`/`j`) fail only the formats
/// that use them; each gets its own error report.
fn run(cli: &Cli) -> Result<Vec<ConversionReport>> {
    let mut formats = cli.requested_formats();
    let mut failed = Vec::new();

    let mut config = ConverterConfig::new(cli.kind).with_beautify(cli.beautify);

    // Fixed point has its own layout and ignores -B
    match BitString::check_width(cli.bits) {
        Ok(()) => config = config.with_bits(cli.bits),
        Err(error) => formats.retain(|&format| {
            if format == Format::FixedPoint {
                return true;
            }
            failed.push(ConversionReport {
                format,
                outcome: Err(error),
            });
            false
        }),
    }

    if formats.contains(&Format::FixedPoint) {
        match fixed_point_spec(cli)? {
            Ok(spec) => config = config.with_fixed_point(spec),
            Err(error) => {
                formats.retain(|&format| format != Format::FixedPoint);
                failed.push(ConversionReport {
                    format: Format::FixedPoint,
                    outcome: Err(error),
                });
            }
        }
    }
    config = config.with_formats(formats);

    let handler: Arc<dyn EventHandler> = if cli.verbose {
        Arc::new(LoggingEventHandler)
    } else {
        Arc::new(NoOpEventHandler)
    };

    let mut reports = if config.formats.is_empty() {
        Vec::new()
    } else {
        Converter::new(config, handler)?.convert(&cli.number)
    };
    reports.extend(failed);
    reports.sort_by_key(|report| report.format);
    Ok(reports)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_max_level(Level::DEBUG)
            .init();
    }

    for report in run(&cli)? {
        println!("{}", report.render(cli.beautify));
    }

    Ok(())
}

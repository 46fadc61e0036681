//! Command that prints one or '-n count' slugs, or decodes slugs given with '--decode'

use std::{io, io::Write, process::ExitCode};

use clap::Parser;
use rand::rngs::OsRng;
use unique_slug::{Error, Precision, Sampling, Slug, SlugGenerator};

#[derive(Parser, Debug)]
#[command(name = "unique-slug", version, about = "Prints time-derived random slugs")]
struct Cli {
    /// Number of slugs to print
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Slug length: 10 (seconds), 13 (milliseconds), 16 (microseconds), or 19 (nanoseconds)
    #[arg(
        short,
        long,
        env = "UNIQUE_SLUG_LENGTH",
        default_value_t = 16,
        allow_negative_numbers = true
    )]
    length: i32,

    /// Pick letters uniformly by rejection sampling instead of by modulo
    #[arg(long)]
    uniform: bool,

    /// Decode the given slugs to their timestamps instead of generating new ones
    ///
    /// Slugs carry their own length, so neither '--length' nor UNIQUE_SLUG_LENGTH may be given.
    #[arg(
        long,
        value_name = "SLUG",
        num_args = 1..,
        conflicts_with_all = ["count", "length", "uniform"]
    )]
    decode: Vec<String>,
}

fn main() -> io::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    let mut buf = io::BufWriter::new(io::stdout());
    let result = if cli.decode.is_empty() {
        generate(&cli, &mut buf)
    } else {
        decode(&cli.decode, &mut buf)
    };
    buf.flush()?;

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(message) => {
            eprintln!("Error: {}", message);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Writes `cli.count` new slugs, one per line.
fn generate(cli: &Cli, buf: &mut impl Write) -> Result<(), String> {
    let precision = Precision::from_length(cli.length).map_err(|e| e.to_string())?;
    log::debug!("generating {} slugs at {} precision", cli.count, precision);

    if cli.uniform {
        let mut g = SlugGenerator::with_rand08(OsRng).with_sampling(Sampling::Uniform);
        write_slugs(cli.count, buf, || g.generate_at(precision))
    } else {
        write_slugs(cli.count, buf, || unique_slug::unique_slug_at(precision))
    }
}

fn write_slugs(
    count: usize,
    buf: &mut impl Write,
    mut next: impl FnMut() -> Result<Slug, Error>,
) -> Result<(), String> {
    for _ in 0..count {
        let slug = next().map_err(|e| e.to_string())?;
        writeln!(buf, "{}", slug).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Writes the timestamp digits and the Unix time of each slug, tab-separated.
fn decode(slugs: &[String], buf: &mut impl Write) -> Result<(), String> {
    for text in slugs {
        let slug = text
            .parse::<Slug>()
            .map_err(|e| format!("{}: '{}'", e, text))?;
        let digits = slug.timestamp_digits();
        log::debug!("decoded '{}' at {} precision", slug, slug.precision());
        let unix_time = digits.unix_time();
        writeln!(
            buf,
            "{}\t{}\t{}.{:09}",
            slug,
            digits,
            unix_time.as_secs(),
            unix_time.subsec_nanos()
        )
        .map_err(|e| e.to_string())?;
    }
    Ok(())
}

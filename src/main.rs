// Tue Jan 13 2026 - Alex

use anyhow::{bail, Context};
use byte_pattern::{utils::LoggingUtils, BytePattern, Config};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "byte-pattern")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Inspect and test hex byte patterns with nibble wildcards", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(long, global = true)]
    no_color: bool,

    #[arg(long, global = true)]
    lowercase: bool,

    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a pattern and print its properties
    Inspect {
        pattern: String,
    },
    /// Test a pattern against a buffer at one offset
    Test(TestArgs),
}

#[derive(Args, Debug)]
struct TestArgs {
    pattern: String,

    /// Buffer as hex bytes, e.g. "A5 CB 99 DD"
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    hex: Option<String>,

    /// Buffer read from a file
    #[arg(long)]
    file: Option<PathBuf>,

    #[arg(short, long, default_value = "0", value_parser = parse_offset)]
    offset: usize,
}

fn parse_offset(s: &str) -> Result<usize, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid offset {:?}: {}", s, e))
}

fn main() {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {:#}", "[!]".red(), e);
            std::process::exit(2);
        }
    };

    if !config.use_color {
        colored::control::set_override(false);
    }
    LoggingUtils::init_from_env_or(
        LoggingUtils::level_from_verbosity(config.verbosity),
        config.use_color,
    );

    let result = match &cli.command {
        Command::Inspect { pattern } => inspect(pattern, &config).map(|_| true),
        Command::Test(args) => test(args, &config),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "[!]".red(), e);
            std::process::exit(2);
        }
    }
}

fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if cli.verbose > 0 {
        config = config.with_verbosity(cli.verbose.min(3));
    }
    if cli.no_color {
        config = config.with_color(false);
    }
    if cli.lowercase {
        config = config.with_lowercase_hex(true);
    }
    Ok(config)
}

fn hex_bytes(bytes: &[u8], lowercase: bool) -> String {
    bytes
        .iter()
        .map(|b| if lowercase { format!("{:02x}", b) } else { format!("{:02X}", b) })
        .collect::<Vec<_>>()
        .join(" ")
}

fn inspect(text: &str, config: &Config) -> anyhow::Result<()> {
    let pattern = BytePattern::parse(text).with_context(|| format!("parsing pattern {:?}", text))?;
    let lowercase = config.lowercase_hex;

    if pattern.is_empty() {
        log::warn!("pattern is empty and matches at every offset");
    }

    println!("{} {}", "Pattern:".cyan().bold(), pattern.to_hex_string(lowercase));
    println!("{} {}", "Length:".cyan().bold(), pattern.len());
    println!(
        "{} {} ({} of {} bytes)",
        "Wildcards:".cyan().bold(),
        if pattern.has_wildcards() { "yes".yellow() } else { "no".green() },
        pattern.wildcard_count(),
        pattern.len()
    );
    println!("{} {}", "Mask:".cyan().bold(), hex_bytes(&pattern.mask(), lowercase));
    println!("{} {}", "Values:".cyan().bold(), hex_bytes(&pattern.values(), lowercase));

    if !pattern.has_wildcards() {
        let bytes = pattern.to_bytes()?;
        println!("{} {}", "Bytes:".cyan().bold(), hex_bytes(&bytes, lowercase));
    }

    Ok(())
}

fn test(args: &TestArgs, config: &Config) -> anyhow::Result<bool> {
    let pattern = BytePattern::parse(&args.pattern)
        .with_context(|| format!("parsing pattern {:?}", args.pattern))?;

    let buffer = match (&args.hex, &args.file) {
        (Some(hex), _) => {
            let parsed = BytePattern::parse(hex)
                .with_context(|| format!("parsing buffer {:?}", hex))?;
            parsed.to_bytes().context("buffer must not contain wildcards")?
        }
        (None, Some(path)) => {
            fs::read(path).with_context(|| format!("reading {}", path.display()))?
        }
        (None, None) => bail!("either --hex or --file is required"),
    };

    let end = args.offset.checked_add(pattern.len());
    if end.map_or(true, |end| end > buffer.len()) {
        bail!(
            "pattern of {} bytes at offset 0x{:x} runs past the end of a {} byte buffer",
            pattern.len(),
            args.offset,
            buffer.len()
        );
    }

    log::debug!("testing {} at offset 0x{:x}", pattern, args.offset);
    let matched = pattern.matches_at(&buffer, args.offset);
    let window = &buffer[args.offset..args.offset + pattern.len()];

    println!("{} {}", "Pattern:".cyan().bold(), pattern.to_hex_string(config.lowercase_hex));
    println!("{} {}", "Data:   ".cyan().bold(), hex_bytes(window, config.lowercase_hex));
    if matched {
        println!("{} match at offset 0x{:x}", "[+]".green(), args.offset);
    } else {
        println!("{} no match at offset 0x{:x}", "[-]".red(), args.offset);
    }

    Ok(matched)
}

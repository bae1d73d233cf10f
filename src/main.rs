use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::{error, info, warn};
use wortform::config::Config;
use wortform::io::{ChunkReader, Encoding, Resolved, Source, TokenFile, connect, resolve, resolve_list};
use wortform::{Normalizer, Options, Palette, normalize_verbose, render_metrics, render_trace};

/// Tokenize and normalize German text.
#[derive(Debug, Parser)]
#[command(name = "wortform", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence logging and success messages
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Tokenize a file, a directory, a URL or `-` for stdin
    Tokenize(TokenizeArgs),
    /// Concatenate the text files of a directory into one file
    Connect(ConnectArgs),
}

#[derive(Debug, Args)]
struct TokenizeArgs {
    /// File, directory, http(s) URL, or `-`
    #[arg(value_name = "ADDRESS")]
    address: String,

    /// Treat ADDRESS as a file listing one address per line
    #[arg(long)]
    list: bool,

    /// Spell out numerals, dates, clock times and years
    #[arg(short = 'x', long)]
    extended: bool,

    /// Read local files as UTF-8
    #[arg(long, conflicts_with = "encoding")]
    utf8: bool,

    /// Read local files with this encoding label (e.g. latin1, iso-8859-15)
    #[arg(long, value_name = "LABEL")]
    encoding: Option<String>,

    /// Directory for tokensN.txt files
    #[arg(short, long = "output-root", value_name = "DIR")]
    output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE", env = "WORTFORM_CONFIG")]
    config: Option<PathBuf>,

    /// Lines per chunk
    #[arg(long, value_name = "N")]
    batch_lines: Option<usize>,

    /// Print tokens to stdout instead of writing token files
    #[arg(long)]
    stdout: bool,

    /// Print a per-stage report to stderr
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Args)]
struct ConnectArgs {
    /// Directory holding the files (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Output file (default: unitedFiles_NNNN.txt inside DIR)
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match &cli.command {
        Command::Tokenize(args) => run_tokenize(args, cli.quiet),
        Command::Connect(args) => run_connect(args, cli.quiet),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(args: &TokenizeArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_toml_file(path).with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    if args.extended {
        config.extended = true;
    }
    if let Some(root) = &args.output {
        config.output_root.clone_from(root);
    }
    if let Some(lines) = args.batch_lines {
        config.batch_lines = lines.max(1);
    }
    Ok(config)
}

fn run_tokenize(args: &TokenizeArgs, quiet: bool) -> Result<()> {
    let config = load_config(args)?;
    let encoding = if args.utf8 {
        Encoding::Utf8
    } else if let Some(label) = &args.encoding {
        Encoding::from_label(label)
    } else {
        config.encoding()
    };

    let resolved = (if args.list { resolve_list(Path::new(&args.address)) } else { resolve(&args.address) })
        .with_context(|| format!("cannot use {:?} as input", args.address))?;
    info!("{} source(s), decoding local files as {}", resolved.sources.len(), encoding.name());

    let mut failed = 0;
    for source in &resolved.sources {
        match tokenize_source(source, &resolved, &config, encoding, args) {
            Ok(Some(path)) if !quiet => {
                println!("Tokenization of \"{}\" successful! (Output file: \"{}\")", source.label(), path.display())
            }
            Ok(_) => {}
            Err(err) if resolved.is_batch() => {
                error!("skipping {}: {err:#}", source.label());
                failed += 1;
            }
            Err(err) => return Err(err),
        }
    }

    if failed > 0 && failed == resolved.sources.len() {
        bail!("none of the {failed} sources could be tokenized");
    }
    Ok(())
}

/// Tokenize one source; returns the output file unless printing to stdout.
fn tokenize_source(
    source: &Source,
    resolved: &Resolved,
    config: &Config,
    encoding: Encoding,
    args: &TokenizeArgs,
) -> Result<Option<PathBuf>> {
    info!("tokenizing {}", source.label());
    let text = source.load(encoding).with_context(|| format!("reading {}", source.label()))?;
    let options = config.options();
    let palette = Palette::new(io::stderr().is_terminal());

    if args.stdout {
        write_stdout(&text, config, &options, args.trace, &palette)?;
        return Ok(None);
    }

    let mut normalizer = Normalizer::new(&options).collect_metrics(args.trace);
    let mut sink = TokenFile::create(&config.output_root, resolved.target.as_deref(), config.flush_every)?;
    for chunk in ChunkReader::new(&text, config.batch_lines) {
        sink.write_chunk(&normalizer.normalize_chunk(&chunk.lines))?;
    }
    let path = sink.finish()?;

    if args.trace {
        eprint!("{}", render_metrics(normalizer.metrics(), &palette));
    }
    Ok(Some(path))
}

fn write_stdout(text: &str, config: &Config, options: &Options, trace: bool, palette: &Palette) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut normalizer = Normalizer::new(options);
    let mut written = false;

    for chunk in ChunkReader::new(text, config.batch_lines) {
        let tokens = if trace {
            let res = normalize_verbose(&chunk.lines, options);
            eprintln!("{}", render_trace(&chunk.lines.join(" "), &res, palette));
            res.text
        } else {
            normalizer.normalize_chunk(&chunk.lines)
        };
        if tokens.is_empty() {
            continue;
        }
        if written {
            out.write_all(b" ")?;
        }
        out.write_all(tokens.as_bytes())?;
        written = true;
    }
    if written {
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn run_connect(args: &ConnectArgs, quiet: bool) -> Result<()> {
    let report = connect(args.dir.as_deref(), args.out.as_deref()).context("connecting files")?;
    for path in &report.skipped {
        warn!("could not read {}", path.display());
    }
    if !quiet {
        println!(
            "Connected {} file(s) into \"{}\"{}",
            report.appended.len(),
            report.output.display(),
            if report.skipped.is_empty() { String::new() } else { format!(" ({} skipped)", report.skipped.len()) }
        );
    }
    Ok(())
}

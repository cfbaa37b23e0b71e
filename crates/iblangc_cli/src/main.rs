use crate::args::{Args, Command};
use clap::Parser;
use eyre::eyre;
use iblangc::command;
use iblangc::IbLangC;
use owo_colors::{OwoColorize, Stream};
use std::ffi::OsString;
use std::io;
use std::io::Write as _;
use std::path::PathBuf;
use tracing::metadata::LevelFilter;
use tracing::{debug, trace};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::format;
use tracing_subscriber::prelude::*;
use tracing_subscriber::Registry;

mod args;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.logging().log_level_filter())?;
    trace!("starting iblangc with args: {args:?}");
    debug!("iblangc version: {}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Compile {
            files,
            trace_lexer,
            trace_parser,
        } => compile(files, trace_lexer, trace_parser),
        Command::Test { files } => test(files),
        Command::Exec { exe, args } => exec(exe, args),
    }
}

fn compile(files: Vec<PathBuf>, trace_lexer: bool, trace_parser: bool) -> eyre::Result<()> {
    let iblangc = IbLangC::builder()
        .trace_lexer(trace_lexer)
        .trace_parser(trace_parser)
        .build()?;
    debug!("paths to compile: {files:#?}");

    let compilations = iblangc.compile_all(&files)?;
    let mut stdout = io::stdout().lock();
    let mut failed = 0;
    for compilation in &compilations {
        if compilations.len() > 1 {
            writeln!(
                stdout,
                "{}",
                compilation
                    .path()
                    .display()
                    .if_supports_color(Stream::Stdout, |path| path.bold())
            )?;
        }
        write!(stdout, "{compilation}")?;
        if !compilation.succeeded() {
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(eyre!("{failed} of {} files failed to compile", files.len()));
    }
    Ok(())
}

fn test(files: Vec<PathBuf>) -> eyre::Result<()> {
    let iblangc = IbLangC::builder().build()?;
    let mut stdout = io::stdout().lock();
    let mut failed = 0;
    for file in &files {
        let outcome = iblangc.test(file)?;
        if outcome.passed() {
            writeln!(
                stdout,
                "{} {}",
                "PASS".if_supports_color(Stream::Stdout, |s| s.green()),
                file.display()
            )?;
        } else {
            failed += 1;
            writeln!(
                stdout,
                "{} {}",
                "FAIL".if_supports_color(Stream::Stdout, |s| s.red()),
                file.display()
            )?;
            for mismatch in &outcome.mismatches {
                writeln!(stdout, "  {mismatch}")?;
            }
        }
    }

    if failed > 0 {
        return Err(eyre!("{failed} of {} files failed", files.len()));
    }
    Ok(())
}

fn exec(exe: OsString, args: Vec<OsString>) -> eyre::Result<()> {
    let mut stderr = Vec::new();
    let status = command::run(&exe, &args, io::stdout().lock(), &mut stderr)?;
    if !stderr.is_empty() {
        let stderr = String::from_utf8_lossy(&stderr);
        eprint!("{}", stderr.if_supports_color(Stream::Stderr, |s| s.red()));
    }
    if !status.success() {
        return Err(eyre!("{} exited with {status}", exe.to_string_lossy()));
    }
    Ok(())
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format().with_thread_ids(true))
                .with_writer(io::stderr)
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}

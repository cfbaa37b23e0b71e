//! the args for running iblangc

use iblang_cli_common::LoggingArgs;
use std::ffi::OsString;
use std::path::PathBuf;

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Lexes and parses iblang source files")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Compiles source files and prints the syntax tree and diagnostics of each
    Compile {
        /// Specify which source files to compile
        #[clap(required = true, value_name = "source file", value_hint = clap::ValueHint::FilePath)]
        files: Vec<PathBuf>,
        /// Log every token produced by the lexer
        #[clap(long, env = "IBLANG_TRACE_LEXER")]
        trace_lexer: bool,
        /// Log every rule entered by the parser
        #[clap(long, env = "IBLANG_TRACE_PARSER")]
        trace_parser: bool,
    },
    /// Checks the output of each source file against the `//` lines written in it
    Test {
        #[clap(required = true, value_name = "source file", value_hint = clap::ValueHint::FilePath)]
        files: Vec<PathBuf>,
    },
    /// Runs an external program, forwarding its output
    Exec {
        #[clap(value_hint = clap::ValueHint::CommandName)]
        exe: OsString,
        #[clap(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<OsString>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;
    use clap::Parser;
    use std::path::Path;

    fn parse(test: &str) -> Args {
        Args::try_parse_from(test.split(" ")).expect("could not parse test string")
    }

    #[test]
    fn test_compile_parsing() {
        let args = parse("iblangc -v compile main.ib other.ib --trace-parser");
        assert_eq!(args.logging().offset(), 1);
        match args.command {
            Command::Compile {
                files,
                trace_lexer,
                trace_parser,
            } => {
                assert_eq!(files, [Path::new("main.ib"), Path::new("other.ib")]);
                assert!(!trace_lexer);
                assert!(trace_parser);
            }
            other => panic!("expected compile, got {other:?}"),
        }
    }

    #[test]
    fn test_compile_requires_files() {
        assert!(Args::try_parse_from(["iblangc", "compile"]).is_err());
        assert!(Args::try_parse_from(["iblangc", "test"]).is_err());
    }

    #[test]
    fn test_test_parsing() {
        let args = parse("iblangc test main.ib");
        assert!(matches!(args.command, Command::Test { files } if files == [Path::new("main.ib")]));
    }

    #[test]
    fn test_exec_keeps_hyphenated_args() {
        match parse("iblangc exec ls -la /tmp").command {
            Command::Exec { exe, args } => {
                assert_eq!(exe, "ls");
                assert_eq!(args, ["-la", "/tmp"]);
            }
            other => panic!("expected exec, got {other:?}"),
        }
    }
}

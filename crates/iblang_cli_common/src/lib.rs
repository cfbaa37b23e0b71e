#![doc = include_str!("../README.md")]

use clap::{value_parser, ArgAction, Args};

/// Common way to set logging levels
#[derive(Debug, Default, Clone, Copy, Args)]
pub struct LoggingArgs {
    /// Log more, can be repeated
    #[clap(short = 'v', long = "verbose", value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Log less, can be repeated
    #[clap(short = 'q', long = "quiet", value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl LoggingArgs {
    /// How many levels above or below the default was asked for
    pub fn offset(&self) -> i8 {
        (self.verbose.min(2) as i8) - (self.quiet.min(2) as i8)
    }

    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used
    #[cfg(feature = "tracing")]
    pub fn log_level_filter(&self) -> tracing::level_filters::LevelFilter {
        use tracing::level_filters::LevelFilter;
        match self.offset() {
            ..=-2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            2.. => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use test_log::test;

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[command(flatten)]
        logging: LoggingArgs,
    }

    fn offset_of(args: &str) -> i8 {
        TestArgs::try_parse_from(args.split_whitespace())
            .expect("could not parse test string")
            .logging
            .offset()
    }

    #[test]
    fn test_counts() {
        assert_eq!(offset_of("test"), 0);
        assert_eq!(offset_of("test -v"), 1);
        assert_eq!(offset_of("test -vv"), 2);
        assert_eq!(offset_of("test -q"), -1);
        assert_eq!(offset_of("test --quiet --quiet"), -2);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(TestArgs::try_parse_from(["test", "-v", "-q"]).is_err());
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_level_filter() {
        use tracing::level_filters::LevelFilter;
        let level = |args: &str| {
            TestArgs::try_parse_from(args.split_whitespace())
                .expect("could not parse test string")
                .logging
                .log_level_filter()
        };
        assert_eq!(level("test"), LevelFilter::INFO);
        assert_eq!(level("test -vv"), LevelFilter::TRACE);
        assert_eq!(level("test -qq"), LevelFilter::OFF);
        assert_eq!(LoggingArgs::default().log_level_filter(), LevelFilter::INFO);
    }
}

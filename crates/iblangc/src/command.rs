//! Runs external programs

use itertools::Itertools as _;
use std::ffi::{OsStr, OsString};
use std::io;
use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// Runs `exe` with `args` to completion.
///
/// The command line is echoed to `stdout` as `> exe args...` first. Once the program exits,
/// everything it printed is forwarded to `stdout` and `stderr` respectively.
pub fn run<I, S, O, E>(
    exe: impl AsRef<OsStr>,
    args: I,
    mut stdout: O,
    mut stderr: E,
) -> io::Result<ExitStatus>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
    O: Write,
    E: Write,
{
    let exe = exe.as_ref();
    let args = args
        .into_iter()
        .map(|arg| arg.as_ref().to_os_string())
        .collect::<Vec<OsString>>();
    let command_line = std::iter::once(exe)
        .chain(args.iter().map(OsString::as_os_str))
        .map(OsStr::to_string_lossy)
        .join(" ");
    writeln!(stdout, "> {command_line}")?;

    let output = Command::new(exe)
        .args(&args)
        .stdin(Stdio::null())
        .output()?;
    debug!("{command_line} exited with {}", output.status);

    stdout.write_all(&output.stdout)?;
    stderr.write_all(&output.stderr)?;
    Ok(output.status)
}

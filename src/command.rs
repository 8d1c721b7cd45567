use std::borrow::Cow;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use crate::error::{Error, Result};
use crate::report::{self, Tone};

/// Builds the platform shell invocation for a command string.
fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}

/// Runs a shell command inside `working_dir` and waits for it to finish.
///
/// # Arguments
/// * `command` - Command line handed to the platform shell
/// * `working_dir` - Directory the command runs in
///
/// # Returns
/// * `Result<Output>` - The captured output of a successful run
///
/// # Notes
/// - Captured stdout is forwarded to stdout, stderr to stderr in red
/// - Output is forwarded before the exit status is checked, so a failing
///   command still shows what it printed
/// - There is no timeout; a command that never exits blocks the caller
pub fn run_command<P: AsRef<Path>>(command: &str, working_dir: P) -> Result<Output> {
    let working_dir = working_dir.as_ref();
    log::debug!("Running '{}' in {}", command, working_dir.display());

    let output = shell_command(command)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| Error::CommandSpawn { command: command.to_string(), source })?;

    forward(command, &output);

    if !output.status.success() {
        return Err(Error::CommandFailed {
            command: command.to_string(),
            status: output.status,
        });
    }

    Ok(output)
}

fn forward(command: &str, output: &Output) {
    let stdout = decode(command, &output.stdout);
    if !stdout.trim().is_empty() {
        report::message(stdout.trim_end(), Tone::Plain);
    }

    let stderr = decode(command, &output.stderr);
    if !stderr.trim().is_empty() {
        report::error(stderr.trim_end(), Tone::Error);
    }
}

fn decode<'a>(command: &str, bytes: &'a [u8]) -> Cow<'a, str> {
    let decoded = String::from_utf8_lossy(bytes);
    if matches!(decoded, Cow::Owned(_)) {
        log::warn!("'{command}' emitted non-UTF8 output; performing lossy conversion");
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    #[test]
    fn runs_command_in_working_directory() {
        let temp_dir = TempDir::new().unwrap();

        let output = run_command("pwd && touch created.txt", temp_dir.path()).unwrap();

        assert!(output.status.success());
        assert!(temp_dir.path().join("created.txt").exists());
        let printed = String::from_utf8(output.stdout).unwrap();
        let expected = fs::canonicalize(temp_dir.path()).unwrap();
        assert_eq!(fs::canonicalize(printed.trim()).unwrap(), expected);
    }

    #[cfg(unix)]
    #[test]
    fn captures_stderr_of_successful_command() {
        let temp_dir = TempDir::new().unwrap();

        let output = run_command("echo warning >&2", temp_dir.path()).unwrap();

        assert_eq!(String::from_utf8_lossy(&output.stderr).trim(), "warning");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_an_error() {
        let temp_dir = TempDir::new().unwrap();

        let err = run_command("exit 3", temp_dir.path()).unwrap_err();

        match err {
            Error::CommandFailed { command, status } => {
                assert_eq!(command, "exit 3");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn unknown_program_fails_through_the_shell() {
        let temp_dir = TempDir::new().unwrap();

        let result = run_command("definitely-not-a-real-program-neta", temp_dir.path());

        assert!(matches!(result, Err(Error::CommandFailed { .. })));
    }

    #[test]
    fn missing_working_directory_is_a_spawn_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let result = run_command("echo hi", &missing);

        assert!(matches!(result, Err(Error::CommandSpawn { .. })));
    }
}

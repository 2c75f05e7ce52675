//! AWS CLI command execution.
//!
//! All provider access goes through the ambient `aws` CLI: commands are run
//! with `--output json` and their stdout is handed back for parsing. The CLI
//! auto-paginates, so fetchers always receive the merged result set.

use crate::BoxError;
use colored::Colorize;
use regex::Regex;
use std::process::Command;
use std::sync::OnceLock;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Upper bound on accepted stdout size. A describe call blowing past this is
/// almost certainly a mis-built command.
const MAX_OUTPUT_BYTES: usize = 16_000_000;

/// Run a shell command and return its stdout.
///
/// The command string is split on spaces, with quoted substrings preserved.
///
/// # Arguments
/// * `cmd` - The command string to execute
///
/// # Returns
/// * `Ok(String)` - The stdout output on success
/// * `Err` - If the command fails or produces too much output
pub fn run(cmd: &str) -> Result<String, BoxError> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let args: Vec<&str> = split_and_strip(cmd);
    log::trace!("split args={:?}", args);

    let Some((program, rest)) = args.split_first() else {
        return Err(format!("Empty command: {cmd}").into());
    };

    let output = Command::new(program)
        .args(rest)
        .output()
        .map_err(|e| format!("Error spawning {program}: {e}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(format!("ERROR running: {stderr}").into());
    }

    log::debug!("Success cmd: {cmd}");
    log::debug!("Success output.stdout.len(): {}", output.stdout.len());
    if output.stdout.len() > MAX_OUTPUT_BYTES {
        return Err(format!(
            "Response too large? len={} cmd=[[{cmd}]]",
            output.stdout.len()
        )
        .into());
    }

    let stdout = String::from_utf8(output.stdout).map_err(|e| format!("Invalid utf8: {e}"))?;
    Ok(stdout)
}

/// Run a CLI command on the blocking thread pool so fetchers can fan out
/// without stalling the runtime.
pub async fn run_async(cmd: &str) -> Result<String, BoxError> {
    let cmd = cmd.to_string();
    tokio::task::spawn_blocking(move || run(&cmd)).await?
}

fn split_and_strip(input: &str) -> Vec<&str> {
    command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_strip_plain() {
        let input = "aws ec2 describe-vpcs --output json";
        let expected = vec!["aws", "ec2", "describe-vpcs", "--output", "json"];
        assert_eq!(split_and_strip(input), expected);
    }

    #[test]
    fn test_split_and_strip_quoted() {
        let input = "aws kafka list-nodes --cluster-arn 'arn:aws:kafka:eu-west-1:1:cluster/a b'";
        assert_eq!(
            split_and_strip(input),
            vec![
                "aws",
                "kafka",
                "list-nodes",
                "--cluster-arn",
                "arn:aws:kafka:eu-west-1:1:cluster/a b"
            ]
        );
    }

    #[test]
    fn test_split_and_strip_nospaces() {
        assert_eq!(split_and_strip("NoSpacesHere"), vec!["NoSpacesHere"]);
    }
}

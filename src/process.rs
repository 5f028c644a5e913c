#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Bounded subprocess execution.

use std::{
    ffi::{OsStr, OsString},
    path::Path,
    process::Stdio,
    time::Duration,
};

use thiserror::Error;
use tokio::{process::Command, time::timeout};

/// Captured result of a finished subprocess.
#[derive(Debug)]
pub struct Collected {
    /// Exit status returned by the process.
    pub status: std::process::ExitStatus,
    /// Contents written to stdout.
    pub stdout: Vec<u8>,
    /// Contents written to stderr.
    pub stderr: Vec<u8>,
}

impl Collected {
    /// Stdout decoded lossily as UTF-8.
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}

/// Ways a bounded subprocess can fail to produce output.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The program could not be started.
    #[error("failed to start {program}: {source}")]
    Spawn {
        /// Program that was being started.
        program: String,
        /// Underlying OS error.
        #[source]
        source:  std::io::Error,
    },
    /// The program ran past its deadline and was killed.
    #[error("{program} did not finish within {}s", limit.as_secs())]
    TimedOut {
        /// Program that was killed.
        program: String,
        /// The deadline it exceeded.
        limit:   Duration,
    },
    /// Waiting on the program or reading its pipes failed.
    #[error("failed to collect output of {program}: {source}")]
    Wait {
        /// Program whose output was lost.
        program: String,
        /// Underlying OS error.
        #[source]
        source:  std::io::Error,
    },
}

/// Spawns `program` with stdin closed, waits at most `deadline` and collects
/// stdout/stderr. A process that outlives its deadline is killed.
pub async fn run_collect(
    program: impl AsRef<OsStr>,
    args: &[OsString],
    cwd: Option<&Path>,
    deadline: Duration,
) -> Result<Collected, ProcessError> {
    let program = program.as_ref();
    let name = Path::new(program)
        .file_name()
        .unwrap_or(program)
        .to_string_lossy()
        .into_owned();

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let child = cmd.spawn().map_err(|source| ProcessError::Spawn {
        program: name.clone(),
        source,
    })?;

    match timeout(deadline, child.wait_with_output()).await {
        Ok(Ok(output)) => Ok(Collected {
            status: output.status,
            stdout: output.stdout,
            stderr: output.stderr,
        }),
        Ok(Err(source)) => Err(ProcessError::Wait {
            program: name,
            source,
        }),
        Err(_) => Err(ProcessError::TimedOut {
            program: name,
            limit:   deadline,
        }),
    }
}

//! Running one external process under a wall-clock limit

use super::Invocation;
use crate::error::{Error, Result};
use crate::types::{ExecutionResult, Outcome};
use std::io::{self, Read};
use std::process::{Child, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(20);
/// How long output collection may outlast the deadline once the process
/// group is gone
const DRAIN_GRACE: Duration = Duration::from_secs(1);

/// Run `invocation` to completion or until `timeout` elapses, capturing its output.
///
/// Both pipes are drained on reader threads so a chatty child cannot block on
/// a full pipe. Once the child exits or times out, its whole process group is
/// killed (on Unix), so background descendants neither outlive the case nor
/// hold the pipes open. Collecting output is bounded by the same deadline.
/// A timeout too large to form a deadline means no deadline.
pub fn run_with_timeout(invocation: &Invocation, timeout: Duration) -> Result<ExecutionResult> {
    let mut command = invocation.to_command();
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }

    let start = Instant::now();
    let mut child = command.spawn().map_err(|source| Error::SpawnError {
        program: invocation.program.clone(),
        source,
    })?;
    debug!("Spawned {} (pid {})", invocation.program, child.id());

    let stdout_reader = spawn_reader(child.stdout.take());
    let stderr_reader = spawn_reader(child.stderr.take());
    let deadline = start.checked_add(timeout);

    let status = wait_until(&mut child, deadline);
    kill_group(&child);
    if status.is_err() {
        terminate(&mut child);
    }

    let drain_deadline = deadline.map(|d| d.max(Instant::now() + DRAIN_GRACE));
    let stdout = collect(&stdout_reader, drain_deadline);
    let stderr = collect(&stderr_reader, drain_deadline);
    let elapsed = start.elapsed();

    let outcome = match status? {
        None => Outcome::Timeout,
        Some(status) if status.success() => Outcome::Success,
        Some(status) => Outcome::Failure {
            code: status.code(),
        },
    };
    debug!("{} finished with {:?} after {:?}", invocation.program, outcome, elapsed);

    Ok(ExecutionResult::new(outcome, elapsed).with_output(stdout, stderr))
}

/// Poll the child until it exits or the deadline passes. `None` means the
/// deadline passed and the child has been terminated and reaped.
fn wait_until(child: &mut Child, deadline: Option<Instant>) -> io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }

        let pause = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    terminate(child);
                    return Ok(None);
                }
                POLL_INTERVAL.min(deadline - now)
            }
            None => POLL_INTERVAL,
        };
        thread::sleep(pause);
    }
}

/// SIGKILL the process group led by `child`. Harmless when the group is
/// already empty.
fn kill_group(child: &Child) {
    #[cfg(unix)]
    {
        if let Ok(pid) = i32::try_from(child.id()) {
            // SAFETY: plain syscall; the negative pid addresses the process group
            // the child leads since it was spawned with `process_group(0)`.
            unsafe {
                libc::kill(-pid, libc::SIGKILL);
            }
        }
    }
    #[cfg(not(unix))]
    let _ = child;
}

fn terminate(child: &mut Child) {
    kill_group(child);

    if let Err(e) = child.kill() {
        debug!("kill({}) failed: {}", child.id(), e);
    }
    if let Err(e) = child.wait() {
        warn!("Failed to reap process {}: {}", child.id(), e);
    }
}

fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<Vec<u8>> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        // The receiver is gone only if collection already gave up.
        let _ = sender.send(drain(pipe));
    });
    receiver
}

/// Wait for a reader's output until `deadline`. A pipe still held open by a
/// process outside the group is abandoned with whatever was not yet read.
fn collect(reader: &Receiver<Vec<u8>>, deadline: Option<Instant>) -> Vec<u8> {
    let received = match deadline {
        Some(deadline) => reader
            .recv_timeout(deadline.saturating_duration_since(Instant::now()))
            .map_err(|e| e.to_string()),
        None => reader.recv().map_err(|e| e.to_string()),
    };
    received.unwrap_or_else(|e| {
        warn!("Gave up collecting process output: {}", e);
        Vec::new()
    })
}

fn drain<R: Read>(pipe: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        if let Err(e) = pipe.read_to_end(&mut buf) {
            warn!("Failed to read process output: {}", e);
        }
    }
    buf
}

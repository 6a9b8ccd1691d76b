//! Tmux plumbing for the interactive regression suite.
//!
//! Everything here exists so the ignored tests read as scenario scripts:
//! open a pane, run the binary, press keys, and check what the pane shows.

use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

pub type StepResult<T> = Result<T, String>;

// ---------------------------------------------------------------------------
// Scenario workspace
// ---------------------------------------------------------------------------

/// Per-run directory tree under `artifacts/ui-regression/`.
///
/// Each scenario gets an isolated HOME and working directory so no real
/// askline config can leak into the run, plus space for pane snapshots,
/// the pipe-pane stream, and the final JSON report.
#[derive(Debug, Clone)]
pub struct ScenarioDirs {
    pub root: PathBuf,
    pub pipe_log: PathBuf,
    pub snapshots: PathBuf,
    pub report: PathBuf,
    pub config: PathBuf,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl ScenarioDirs {
    pub fn prepare(scenario: &str) -> StepResult<Self> {
        let root = Path::new("artifacts")
            .join("ui-regression")
            .join(format!("{scenario}-{}", run_stamp()));
        let dirs = Self {
            pipe_log: root.join("pipe.log"),
            snapshots: root.join("snapshots"),
            report: root.join("report.json"),
            config: root.join("askline.toml"),
            home: root.join("home"),
            work: root.join("work"),
            root,
        };
        for dir in [&dirs.snapshots, &dirs.home, &dirs.work] {
            fs::create_dir_all(dir).map_err(|e| format!("creating {}: {e}", dir.display()))?;
        }
        Ok(dirs)
    }

    pub fn snapshot(&self, name: &str, content: &str) -> StepResult<()> {
        let path = self.snapshots.join(format!("{name}.txt"));
        fs::write(&path, content).map_err(|e| format!("writing snapshot {name}: {e}"))
    }

    /// Pin the theme and padding the scenario text assertions depend on.
    pub fn write_config(&self) -> StepResult<()> {
        let body = "[display]\ncolor = true\ntheme = \"dark\"\n\n[prompt]\neditor_padding = 1\n";
        fs::write(&self.config, body).map_err(|e| format!("writing scenario config: {e}"))
    }
}

// ---------------------------------------------------------------------------
// Checks and the report
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Check {
    label: String,
    needle: String,
    passed: bool,
}

/// Accumulates substring checks and renders the scenario report.
#[derive(Debug, Default)]
pub struct CheckList {
    checks: Vec<Check>,
}

impl CheckList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record whether `haystack` contains `needle`; a miss is an error so
    /// the scenario stops at the first broken expectation.
    pub fn require(&mut self, label: &str, haystack: &str, needle: &str) -> StepResult<()> {
        let passed = haystack.contains(needle);
        self.checks.push(Check {
            label: label.to_string(),
            needle: needle.to_string(),
            passed,
        });
        if passed {
            Ok(())
        } else {
            Err(format!("check `{label}` failed: `{needle}` not found"))
        }
    }

    pub fn write_report(
        &self,
        scenario: &str,
        passed: bool,
        dirs: &ScenarioDirs,
    ) -> StepResult<()> {
        let payload = json!({
            "scenario": scenario,
            "passed": passed,
            "artifacts": {
                "root": dirs.root.display().to_string(),
                "pipe_log": dirs.pipe_log.display().to_string(),
                "snapshots": dirs.snapshots.display().to_string(),
            },
            "checks": self
                .checks
                .iter()
                .map(|c| json!({ "label": c.label, "needle": c.needle, "passed": c.passed }))
                .collect::<Vec<_>>(),
        });
        let text =
            serde_json::to_string_pretty(&payload).map_err(|e| format!("serializing report: {e}"))?;
        fs::write(&dirs.report, text).map_err(|e| format!("writing report: {e}"))
    }
}

// ---------------------------------------------------------------------------
// Pane control
// ---------------------------------------------------------------------------

/// A detached tmux session with one pane running the scenario shell.
pub struct PromptPane {
    session: String,
    pane: String,
    logging: bool,
}

impl PromptPane {
    pub fn open(session: &str) -> StepResult<Self> {
        tmux(&["new-session", "-d", "-s", session, "-n", "sut"])?;
        let target = format!("{session}:sut.0");
        let pane = tmux(&["display-message", "-p", "-t", &target, "#{pane_id}"])?
            .trim()
            .to_string();
        if pane.is_empty() {
            return Err(format!("no pane id for session {session}"));
        }
        Ok(Self {
            session: session.to_string(),
            pane,
            logging: false,
        })
    }

    /// Mirror everything the pane prints into `path` via `pipe-pane`.
    pub fn log_to(&mut self, path: &Path) -> StepResult<()> {
        let sink = format!("cat > {}", sq(&absolute(path).display().to_string()));
        tmux(&["pipe-pane", "-o", "-t", &self.pane, &sink])?;
        self.logging = true;
        Ok(())
    }

    pub fn stop_logging(&mut self) {
        if self.logging {
            let _ = tmux(&["pipe-pane", "-t", &self.pane]);
            self.logging = false;
        }
    }

    /// Type a whole shell command and run it.
    pub fn run_command(&self, line: &str) -> StepResult<()> {
        tmux(&["send-keys", "-t", &self.pane, "-l", line])?;
        self.tap("Enter")
    }

    /// Type literal text without pressing Enter.
    pub fn type_text(&self, text: &str) -> StepResult<()> {
        tmux(&["send-keys", "-t", &self.pane, "-l", text]).map(drop)
    }

    /// Press one named key: `Down`, `Enter`, `Escape`, ...
    pub fn tap(&self, key: &str) -> StepResult<()> {
        tmux(&["send-keys", "-t", &self.pane, key]).map(drop)
    }

    /// Full pane text including scrollback; `ansi` keeps escape sequences.
    pub fn grab(&self, ansi: bool) -> StepResult<String> {
        let mut args = vec!["capture-pane", "-p"];
        if ansi {
            args.push("-e");
        }
        args.extend(["-J", "-S", "-", "-E", "-", "-t", &self.pane]);
        tmux(&args)
    }

    /// Poll [`Self::grab`] until `needle` shows up or the timeout passes.
    pub fn await_text(&self, needle: &str, timeout: Duration, ansi: bool) -> StepResult<String> {
        let deadline = Instant::now() + timeout;
        loop {
            let shown = self.grab(ansi)?;
            if shown.contains(needle) {
                return Ok(shown);
            }
            if Instant::now() >= deadline {
                return Err(format!(
                    "`{needle}` did not appear within {timeout:?} ({} pane bytes)",
                    shown.len()
                ));
            }
            thread::sleep(Duration::from_millis(200));
        }
    }

    pub fn close(&mut self) {
        self.stop_logging();
        let _ = tmux(&["kill-session", "-t", &self.session]);
    }
}

impl Drop for PromptPane {
    fn drop(&mut self) {
        self.close();
    }
}

// ---------------------------------------------------------------------------
// Scenario helpers
// ---------------------------------------------------------------------------

pub fn require_tmux() -> StepResult<()> {
    let probe = Command::new("sh")
        .args(["-c", "command -v tmux >/dev/null 2>&1"])
        .status()
        .map_err(|e| format!("probing for tmux: {e}"))?;
    if probe.success() {
        Ok(())
    } else {
        Err("tmux is not installed; the ui regression suite needs it".to_string())
    }
}

/// Shell line launching askline inside the scenario sandbox.
///
/// The command substitution captures stdout while the prompt chrome paints
/// on the terminal, and the trailing printf exposes both the captured
/// answer and the exit code as one greppable line.
pub fn launch_command(
    binary: &Path,
    dirs: &ScenarioDirs,
    question: &str,
    options: &[&str],
) -> String {
    let home_dir = canon(&dirs.home);
    let opts = options
        .iter()
        .map(|o| format!(" {}", sq(o)))
        .collect::<String>();
    format!(
        "cd {work} && answer=$(HOME={home} XDG_CONFIG_HOME={xdg} {bin} --config {cfg} {q}{opts}); \
         printf 'answer:[%s] exit:[%s]\\n' \"$answer\" \"$?\"",
        work = sq(&canon(&dirs.work).display().to_string()),
        home = sq(&home_dir.display().to_string()),
        xdg = sq(&home_dir.join(".config").display().to_string()),
        bin = sq(&canon(binary).display().to_string()),
        cfg = sq(&canon(&dirs.config).display().to_string()),
        q = sq(question),
    )
}

/// Path to the compiled askline binary.
///
/// Cargo exports `CARGO_BIN_EXE_askline` to integration tests; the manifest
/// and cargo-build fallbacks cover running the suite through other runners.
pub fn askline_binary() -> StepResult<PathBuf> {
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_askline") {
        let exe = PathBuf::from(path);
        if exe.exists() {
            return Ok(exe);
        }
    }

    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let exe = manifest.join("target").join("debug").join("askline");
    if exe.exists() {
        return Ok(exe);
    }

    let built = Command::new("cargo")
        .args(["build", "--bin", "askline"])
        .current_dir(&manifest)
        .status()
        .map_err(|e| format!("running cargo build: {e}"))?;
    if built.success() && exe.exists() {
        Ok(exe)
    } else {
        Err(format!("no askline binary at {}", exe.display()))
    }
}

fn tmux(args: &[&str]) -> StepResult<String> {
    let output = Command::new("tmux")
        .args(args)
        .output()
        .map_err(|e| format!("spawning tmux {args:?}: {e}"))?;
    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        Err(format!(
            "tmux {args:?} exited {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        ))
    }
}

fn run_stamp() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    format!("{}-{millis}", std::process::id())
}

/// Single-quote `value` for POSIX shells.
fn sq(value: &str) -> String {
    if value.is_empty() {
        "''".to_string()
    } else {
        format!("'{}'", value.replace('\'', "'\"'\"'"))
    }
}

fn canon(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    }
}

//! Shared fixtures for tests that launch a runner.

use crate::runner::Launcher;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Behaviour of the fake runner script.
pub(crate) struct FakeRunner {
    pub exit_code: i32,
    pub write_report: bool,
}

/// A fake runner installed in a temporary directory.
///
/// The script records every argument it receives (one per line) in
/// `invocation_log`, optionally creates `html-report/index.html` under the
/// `--output-directory` it was given, then exits with the chosen code.
pub(crate) struct FakeRunnerFixture {
    pub dir: TempDir,
    pub launcher: Launcher,
    pub invocation_log: PathBuf,
}

impl FakeRunnerFixture {
    pub(crate) fn output_dir(&self) -> PathBuf {
        self.dir.path().join("composer-output")
    }

    pub(crate) fn was_launched(&self) -> bool {
        self.invocation_log.exists()
    }

    pub(crate) fn recorded_args(&self) -> Vec<String> {
        std::fs::read_to_string(&self.invocation_log)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Install a fake runner run through `sh`, so no executable bit is needed.
pub(crate) fn fake_runner(behaviour: FakeRunner) -> FakeRunnerFixture {
    let dir = TempDir::new().unwrap();
    let invocation_log = dir.path().join("invocation.log");
    let script = dir.path().join("fake-composer.sh");

    std::fs::write(&script, script_body(&invocation_log, &behaviour)).unwrap();

    let launcher = Launcher {
        java: "sh".to_string(),
        jvm_args: vec![path_str(&script)],
        main_class: "com.gojuno.composer.MainKt".to_string(),
        classpath: vec![PathBuf::from("composer.jar")],
    };

    FakeRunnerFixture {
        dir,
        launcher,
        invocation_log,
    }
}

fn script_body(log: &Path, behaviour: &FakeRunner) -> String {
    let report = if behaviour.write_report {
        r#"mkdir -p "$out/html-report" && echo '<html/>' > "$out/html-report/index.html""#
    } else {
        ":"
    };

    format!(
        r#"printf '%s\n' "$@" > '{log}'
out=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "--output-directory" ]; then out="$arg"; fi
  prev="$arg"
done
if [ -n "$out" ] && [ -e "$out/stale.txt" ]; then echo stale-output-seen >> '{log}'; fi
{report}
exit {code}
"#,
        log = path_str(log),
        report = report,
        code = behaviour.exit_code,
    )
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

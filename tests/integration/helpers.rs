//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

use chapterbar::config::CONFIG_ENV;
use chapterbar::Config;

/// Directory holding the chapter file fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path of a named fixture.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Isolated config and log location for one test.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    /// Environment with a default config whose log goes into the temp dir.
    pub fn new() -> Self {
        let env = Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        };
        let mut config = Config::default();
        config.log.file = Some(env.log_path());
        config
            .save_to(&env.config_path())
            .expect("Failed to write test config");
        env
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("chapterbar.log")
    }

    /// Write `content` to `name` inside the temp dir.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// The binary, pointed at this environment's config.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("chapterbar").expect("binary should build");
        cmd.env(CONFIG_ENV, self.config_path())
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

/// Run the binary with `args` and return stdout, requiring success.
pub fn run_ok(env: &TestEnv, args: &[&str]) -> String {
    let output = env.cmd().args(args).output().expect("Failed to run chapterbar");
    assert!(
        output.status.success(),
        "chapterbar {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Display form of a path argument.
pub fn arg(path: &Path) -> String {
    path.display().to_string()
}

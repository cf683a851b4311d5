use sporelog_core::timeline::LogPaths;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Placeholder in `fixtures/monitor.log` for the directory the frames live in.
const IMAGE_DIR_PLACEHOLDER: &str = "{IMAGE_DIR}";

/// A private copy of the fixture logs in a temporary directory.
///
/// Logged capture paths point into `image_dir()`, which starts out empty so
/// each test decides which frames exist on disk.
pub struct TestLogs {
    root: TempDir,
}

impl TestLogs {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("failed to create temp dir");
        fs::create_dir(root.path().join("images")).expect("failed to create image dir");

        let logs = Self { root };

        let air = fs::read_to_string(fixture("air_data.log")).expect("missing air fixture");
        fs::write(logs.air_log(), air).expect("failed to write air log");

        let monitor = fs::read_to_string(fixture("monitor.log"))
            .expect("missing monitor fixture")
            .replace(IMAGE_DIR_PLACEHOLDER, &logs.image_dir().display().to_string());
        fs::write(logs.monitor_log(), monitor).expect("failed to write monitor log");

        logs
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn air_log(&self) -> PathBuf {
        self.root().join("air_data.log")
    }

    pub fn monitor_log(&self) -> PathBuf {
        self.root().join("monitor.log")
    }

    pub fn image_dir(&self) -> PathBuf {
        self.root().join("images")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join("annotated")
    }

    pub fn paths(&self) -> LogPaths {
        LogPaths {
            air: self.air_log(),
            monitor: self.monitor_log(),
        }
    }

    /// Places a (not necessarily decodable) frame on disk under its
    /// reconciled name.
    pub fn put_frame(&self, name: &str) -> PathBuf {
        let path = self.image_dir().join(name);
        fs::write(&path, b"frame").expect("failed to write frame");
        path
    }
}

impl Default for TestLogs {
    fn default() -> Self {
        Self::new()
    }
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

//! Test helpers for writing flavour tables and stubbing dataset sources.

use camino::{Utf8Path, Utf8PathBuf};
use dramwise_core::Dataset;
use dramwise_core::test_support::sample_whiskies;
use tempfile::TempDir;

use crate::CliError;
use crate::recommend::{DatasetProvider, RecommendCommandConfig};

/// Write `contents` to `path`, failing the test on error.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// Render `dataset` as a comma-separated table keyed by `Distillery`, with a
/// leading `RowID` column the loader should ignore.
pub(super) fn render_table(dataset: &Dataset) -> String {
    let mut header = vec!["RowID".to_owned(), "Distillery".to_owned()];
    header.extend(dataset.attributes().iter().map(str::to_owned));
    let mut lines = vec![header.join(",")];
    for (index, (name, record)) in dataset.iter().enumerate() {
        let mut cells = vec![format!("{:02}", index + 1), name.to_owned()];
        cells.extend(record.intensities().iter().map(ToString::to_string));
        lines.push(cells.join(","));
    }
    lines.join("\n") + "\n"
}

/// A temporary directory holding the sample whisky table.
pub(super) struct SampleTable {
    _dir: TempDir,
    root: Utf8PathBuf,
    path: Utf8PathBuf,
}

impl SampleTable {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let path = root.join("whiskies.txt");
        write_utf8(&path, render_table(&sample_whiskies()).as_bytes());
        Self {
            _dir: dir,
            root,
            path,
        }
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// Serves a fixed in-memory dataset regardless of configuration.
pub(super) struct FixedDatasetProvider {
    pub(super) dataset: Dataset,
}

impl DatasetProvider for FixedDatasetProvider {
    fn dataset(&self, _config: &RecommendCommandConfig) -> Result<Dataset, CliError> {
        Ok(self.dataset.clone())
    }
}

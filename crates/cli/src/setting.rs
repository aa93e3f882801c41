// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File and stdin settings

use scn_core::{InlineSetting, Setting, TracedSetting};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Command-line argument meaning "read from stdin"
pub const STDIN: &str = "-";

/// A scenario file on disk
///
/// The filename is the canonical path when the file exists, so the same file
/// reached through different relative paths is recognized as the same file.
#[derive(Debug, Clone)]
pub struct FileSetting {
    path: PathBuf,
    filename: String,
}

impl FileSetting {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        Self {
            filename: path.display().to_string(),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Setting for FileSetting {
    fn filename(&self) -> Option<&str> {
        Some(&self.filename)
    }

    fn read(&self) -> std::io::Result<String> {
        std::fs::read_to_string(self.path())
    }
}

/// Open the setting for a command-line argument
pub fn open(arg: &str) -> std::io::Result<Arc<dyn Setting>> {
    if arg == STDIN {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(Arc::new(TracedSetting::new(InlineSetting::new(content))));
    }
    Ok(Arc::new(TracedSetting::new(FileSetting::new(arg))))
}

/// Directory that relative includes of `setting` are resolved against
pub fn base_dir(setting: &dyn Setting) -> PathBuf {
    setting
        .filename()
        .and_then(|f| Path::new(f).parent())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use itex_core::ExportFile;
use tracing::info;

use crate::errors::ExpenseError;

/// Writes `file` into `dir` by staging to a temporary file, returning the
/// final path. Creates `dir` when missing.
pub fn save_export(file: &ExportFile, dir: &Path) -> Result<PathBuf, ExpenseError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(&file.file_name);
    let tmp = path.with_extension("csv.tmp");
    if let Err(err) = fs::write(&tmp, &file.contents).and_then(|()| fs::rename(&tmp, &path)) {
        fs::remove_file(&tmp).ok();
        return Err(err.into());
    }
    info!(path = %path.display(), bytes = file.contents.len(), "export written");
    Ok(path)
}

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Write one preset's packed strip to `<out_dir>/<prefix>-<tag>.txt`,
/// creating the directory if needed and replacing any previous run's
/// file. No header, no checksum.
pub fn write_strip(out_dir: &Path, prefix: &str, tag: &str, data: &[u8]) -> io::Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(format!("{prefix}-{tag}.txt"));
    fs::write(&path, data)?;
    Ok(path)
}

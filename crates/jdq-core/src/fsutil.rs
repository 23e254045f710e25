use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

pub fn exists(p: &Path) -> bool {
    p.exists()
}

pub fn create_dir(p: &Path) -> io::Result<()> {
    fs::create_dir_all(p)
}

// Delete a file or a directory tree; an absent target is not an error.
pub fn remove(p: &Path) -> io::Result<()> {
    if p.is_dir() {
        fs::remove_dir_all(p)
    } else if p.exists() {
        fs::remove_file(p)
    } else {
        Ok(())
    }
}

pub fn copy_file(src: &Path, dst: &Path) -> io::Result<u64> {
    if let Some(parent) = dst.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dst)
}

pub fn copy_dir(src: &Path, dst: &Path) -> io::Result<()> {
    if !src.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a directory",
        ));
    }
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| io::Error::other(e.to_string()))?;
        let path = entry.path();
        let rel = path.strip_prefix(src).unwrap();
        if rel.as_os_str().is_empty() {
            fs::create_dir_all(dst)?;
            continue;
        }
        let target = dst.join(rel);
        if path.is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &target)?;
        }
    }
    Ok(())
}

// Timestamped copy of a file or directory next to the original
// (non-destructive)
pub fn backup_copy(p: &Path) -> io::Result<PathBuf> {
    if !p.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "nothing to back up",
        ));
    }
    let parent = p.parent().unwrap_or(Path::new("."));
    let name = p.file_name().and_then(|s| s.to_str()).unwrap_or("backup");
    let ts = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let dest = parent.join(format!("{}_{}.bak", name, ts));
    if p.is_dir() {
        copy_dir(p, &dest)?;
    } else {
        fs::copy(p, &dest)?;
    }
    Ok(dest)
}

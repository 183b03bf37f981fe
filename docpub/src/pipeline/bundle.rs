//! Deterministic archive packaging.

use std::fs;
use std::io;
use std::path::Path;

use tar::{Builder, EntryType, Header};
use walkdir::WalkDir;

use crate::error::Result;

/// Package the contents of `source` into a tar archive at `archive`.
///
/// The same tree always produces the same bytes: entries are walked in
/// sorted order, timestamps are the epoch, ownership is root, and modes
/// are `0o755` for directories and `0o644` for files.
pub fn pack_directory(source: &Path, archive: &Path) -> Result<()> {
    let file = fs::File::create(archive)?;
    let mut builder = Builder::new(file);

    for entry in WalkDir::new(source)
        .min_depth(1)
        .follow_links(false)
        .sort_by(|a, b| a.file_name().cmp(b.file_name()))
    {
        let entry = entry.map_err(io::Error::from)?;
        let rel_path = entry
            .path()
            .strip_prefix(source)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

        let file_type = entry.file_type();
        if file_type.is_dir() {
            let mut header = Header::new_gnu();
            header.set_path(format!("{}/", rel_path.display()))?;
            header.set_size(0);
            header.set_mtime(0);
            header.set_uid(0);
            header.set_gid(0);
            header.set_mode(0o755);
            header.set_entry_type(EntryType::Directory);
            header.set_cksum();
            builder.append(&header, &[] as &[u8])?;
        } else if file_type.is_file() {
            let contents = fs::read(entry.path())?;
            let mut header = Header::new_gnu();
            header.set_path(rel_path)?;
            header.set_size(contents.len() as u64);
            header.set_mtime(0);
            header.set_uid(0);
            header.set_gid(0);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append(&header, contents.as_slice())?;
        }
        // Symlinks and special files don't occur in generated HTML output.
    }

    builder.finish()?;
    Ok(())
}

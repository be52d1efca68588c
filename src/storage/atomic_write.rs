//! Whole-file writes that never leave a half-written destination behind.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Streams `write`'s output into a temporary file next to `dest`, then
/// renames it over `dest`. Missing parent directories are created.
///
/// If `write` fails the temporary file is removed and `dest` is untouched.
pub fn atomic_write<E, F>(dest: impl AsRef<Path>, write: F) -> Result<(), E>
where
    E: From<io::Error>,
    F: FnOnce(&mut dyn Write) -> Result<(), E>,
{
    let dest = dest.as_ref();
    let parent = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(&mut tmp);
        write(&mut writer)?;
        writer.flush()?;
    }
    tmp.persist(dest).map_err(|err| err.error)?;

    Ok(())
}

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::dump::buffer::RegisterDump;
use crate::error::{RegError, Result};
use crate::layout::DUMP_LEN;

/// Read the first `DUMP_LEN` bytes of `path`.
///
/// Fewer bytes is a `ShortRead`; trailing bytes past `DUMP_LEN` are ignored.
pub fn read_dump(path: &Path) -> Result<RegisterDump> {
    let file = File::open(path).map_err(|e| RegError::io("open", path, e))?;

    let mut bytes = Vec::with_capacity(DUMP_LEN);
    file.take(DUMP_LEN as u64)
        .read_to_end(&mut bytes)
        .map_err(|e| RegError::io("read", path, e))?;

    if bytes.len() < DUMP_LEN {
        return Err(RegError::ShortRead {
            path: path.to_path_buf(),
            expected: DUMP_LEN,
            actual: bytes.len(),
        });
    }

    RegisterDump::from_vec(bytes)
}

/// Write the whole dump to `path`, creating or replacing it.
///
/// Bytes go to a temp file next to `path` that is renamed into place only
/// after a complete write, so a failed run never leaves a truncated output.
/// A fresh output gets the usual created-file mode; a replaced one keeps
/// its previous permissions.
pub fn write_dump(path: &Path, dump: &RegisterDump) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".regscale");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // 0666 before umask, same as File::create
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| RegError::io("create temp in", dir, e))?;

    if let Ok(meta) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| RegError::io("set permissions", tmp.path(), e))?;
    }

    tmp.write_all(dump.as_bytes())
        .map_err(|e| RegError::io("write", tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| RegError::io("sync", tmp.path(), e))?;

    tmp.persist(path)
        .map_err(|e| RegError::io("persist", path, e.error))?;
    Ok(())
}

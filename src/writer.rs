// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;
use std::path::Path;

use crate::Error;

/// Replaces `path` content with `data`.
///
/// The data goes into a temporary file inside the same directory first,
/// which is then renamed over `path`. On any error the temporary file is removed
/// and a previous `path` content stays intact.
pub(crate) fn write_file(path: &Path, data: &[u8]) -> Result<(), Error> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".pwa-icons-").suffix(".tmp");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }

    let mut file = builder
        .tempfile_in(dir)
        .map_err(|e| Error::CreationFailed(path.to_path_buf(), e))?;

    file.write_all(data)
        .and_then(|_| file.as_file().sync_all())
        .map_err(|e| Error::WritingFailed(path.to_path_buf(), e))?;

    if path.exists() {
        log::trace!("Replacing {:?}.", path);
    }

    file.persist(path)
        .map_err(|e| Error::WritingFailed(path.to_path_buf(), e.error))?;

    Ok(())
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// Failed to create a file next to the destination path.
    ///
    /// Usually means that the output directory doesn't exist or is not writable.
    CreationFailed(PathBuf, std::io::Error),

    /// Failed to write or to replace the destination file.
    WritingFailed(PathBuf, std::io::Error),
}

impl Error {
    /// Returns the destination path the error relates to.
    pub fn path(&self) -> &std::path::Path {
        match *self {
            Error::CreationFailed(ref path, _) => path,
            Error::WritingFailed(ref path, _) => path,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::CreationFailed(ref path, ref e) => {
                write!(f, "failed to create a file {:?} cause {}", path, e)
            }
            Error::WritingFailed(ref path, ref e) => {
                write!(f, "failed to write a file {:?} cause {}", path, e)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::CreationFailed(_, ref e) => Some(e),
            Error::WritingFailed(_, ref e) => Some(e),
        }
    }
}

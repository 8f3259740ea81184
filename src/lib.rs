// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`pwa-icons` writes placeholder SVG application icons for a web app.

Two icons are produced, 192x192 and 512x512, both a gradient rounded square with a pin glyph.
The markup is fixed, so every run produces byte-identical files.

```no_run
let icons = pwa_icons::generate(&pwa_icons::Options::default()).unwrap();
println!("{}", pwa_icons::conversion_hint(&icons));
```
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::uninlined_format_args)]

use std::path::PathBuf;

mod error;
mod icon;
mod writer;

pub use crate::error::Error;
pub use crate::icon::{Circle, Geometry, Icon, Line, GLYPH_OPACITY, GRADIENT_STOPS};

/// Generation options.
#[derive(Clone, Debug)]
pub struct Options {
    /// A directory the icons will be written to.
    ///
    /// Must already exist. Relative paths are resolved against the current directory.
    ///
    /// Default: `public`
    pub out_dir: PathBuf,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            out_dir: PathBuf::from("public"),
        }
    }
}

/// A successfully written icon.
#[derive(Clone, PartialEq, Debug)]
pub struct GeneratedIcon {
    /// The icon kind.
    pub icon: Icon,
    /// The file it was written to.
    pub path: PathBuf,
}

/// Writes all icons into `Options::out_dir`.
///
/// Existing files are replaced. Icons are written one by one
/// and the first failure stops the process. Icons written before it stay on disk.
pub fn generate(opt: &Options) -> Result<Vec<GeneratedIcon>, Error> {
    let mut generated = Vec::with_capacity(Icon::ALL.len());
    for icon in Icon::ALL {
        let path = opt.out_dir.join(icon.file_name());
        writer::write_file(&path, icon.svg().as_bytes())?;
        log::debug!("Wrote {} bytes to {:?}.", icon.svg().len(), path);
        generated.push(GeneratedIcon { icon, path });
    }

    Ok(generated)
}

/// Returns a human-readable note on how to get PNG versions of the `icons`.
///
/// The commands are only suggestions and are never executed.
pub fn conversion_hint(icons: &[GeneratedIcon]) -> String {
    let mut s = String::from(
        "\
To convert to PNG, install an SVG renderer first: cargo install resvg
You can also use online tools like https://cloudconvert.com/svg-to-png

Or run the following after installing resvg:
",
    );

    for generated in icons {
        let png_path = generated.path.with_file_name(generated.icon.png_file_name());
        s.push_str(&format!(
            "  resvg {} {}\n",
            generated.path.display(),
            png_path.display()
        ));
    }

    s
}

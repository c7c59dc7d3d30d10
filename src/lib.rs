//! ## iconstrip - remove the outer shape from SVG icons
//!
//! Many icon sets draw every glyph on top of a common background shape (a
//! circle, a rounded square, ...) as part of a single compound path.
//! `iconstrip` finds that outer shape, removes it, and rescales the remaining
//! artwork to fill the canvas. Optionally a ring is added around the result,
//! turning a filled mask into an outlined one.
//!
//! `iconstrip` is normally run as a command line tool, taking base names of
//! icons in a directory and writing `<name>.new.svg` next to each input.
//!
//! ## Library use
//!
//! A `StripConfig` value selects how the outer shape is identified and how the
//! result is fitted; the appropriate `strip_*` function is then called with
//! input / output parameters as required. Work can also be done directly on
//! path data via `strip_path`.
//!
//! Errors are reported via `iconstrip::Result`.
//!
//! ## Example
//!
//! ```
//! let cfg = iconstrip::StripConfig::radial();
//!
//! let input = r#"<svg viewBox="0 0 48 48">
//!   <path d="M44 24 L24 44 L4 24 L24 4 Z M29 24 L24 29 L19 24 L24 19 Z"/>
//! </svg>"#;
//! let output = iconstrip::strip_str(input, &cfg).unwrap();
//!
//! println!("{output}");
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

#[cfg(feature = "cli")]
pub mod cli;
pub mod document;
pub mod editor;
pub mod errors;
pub mod geometry;
pub mod path;
pub mod strip;
mod types;

pub use document::{SvgDocument, ViewBox};
pub use editor::{align_and_save, EditorConfig};
pub use errors::{Error, Result};
pub use path::CompoundPath;
pub use strip::{strip_path, ScaleAnchor, ScoreKind, StripConfig, Stripped};

// Allow users of this as a library to easily retrieve the version of iconstrip being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Strip the outer shape from the single path of `doc`, returning a new
/// document with only the path data changed.
pub fn strip_document(doc: &SvgDocument, config: &StripConfig) -> Result<SvgDocument> {
    let path = CompoundPath::parse(&doc.path_data()?)?;
    let center = match config.score {
        ScoreKind::RadialMean => Some(doc.view_box()?.center()),
        ScoreKind::Area => None,
    };

    let stripped = strip_path(&path, center, config)?;
    info!(
        contours = stripped.contours,
        removed = stripped.removed,
        "stripped outer shape"
    );
    doc.with_path_data(&stripped.path.to_path_data())
}

/// Reads from the `reader` stream, processes the document, and writes to `writer`.
///
/// The entire stream is read before any data is written to `writer`.
pub fn strip_stream(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    config: &StripConfig,
) -> Result<()> {
    let doc = SvgDocument::from_reader(reader)?;
    strip_document(&doc, config)?.write_to(writer)
}

/// Process `input` provided as a string, returning the result as a string.
pub fn strip_str<T: Into<String>>(input: T, config: &StripConfig) -> Result<String> {
    let mut input = Cursor::new(input.into());
    let mut output: Vec<u8> = vec![];

    strip_stream(&mut input, &mut output, config)?;

    Ok(String::from_utf8(output)?)
}

/// Read the file `input`, process it, and write the result to `output`.
///
/// The result is written to a temporary file alongside `output` and only
/// moved into place once processing has succeeded.
pub fn strip_file(input: &Path, output: &Path, config: &StripConfig) -> Result<()> {
    let mut reader = BufReader::new(File::open(input)?);

    let out_dir = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut out_temp = NamedTempFile::new_in(out_dir)?;
    strip_stream(&mut reader, &mut out_temp, config)?;
    out_temp.persist(output).map_err(|e| Error::Io(e.error))?;

    info!(input = %input.display(), output = %output.display(), "wrote stripped icon");
    Ok(())
}

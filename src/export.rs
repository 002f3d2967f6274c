//! Project-source extraction utility.
//!
//! Concatenates a fixed list of project files into one annotated text file,
//! each section framed by a `--- path ---` header.  Missing files are noted
//! inline rather than aborting, so one moved file never loses the rest of
//! the export.  Runs on the host via the `export_sources` binary; nothing
//! here touches the firmware side.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Concatenate `paths` into `output`, in order.
///
/// Each section is `--- {path} ---` followed by the file's content and a
/// blank line.  A path that does not exist yields `File not found.` in its
/// section; any other I/O failure aborts the export.
pub fn export_files<P: AsRef<Path>>(paths: &[&str], output: P) -> io::Result<()> {
    let mut out = fs::File::create(output)?;
    for path in paths {
        writeln!(out, "--- {path} ---")?;
        match fs::read_to_string(path) {
            Ok(content) => write!(out, "{content}\n\n")?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                write!(out, "File not found.\n\n")?;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

//! The optional pretty-printing pass run over a file after it has been written.

use std::path::{Path, PathBuf};
use std::process::Command;

/// How a written file is reformatted.
///
/// The default runs `xmllint --format --encode utf-8 <file> -o <file>`. The pass is
/// cosmetic: if the program is missing or fails, a warning is logged and the file
/// written by this crate is left as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reformat {
    /// leave the file exactly as it was written
    Disabled,
    /// run an xmllint compatible program over the file
    Xmllint { program: PathBuf },
}

impl Default for Reformat {
    fn default() -> Self {
        Self::xmllint()
    }
}

impl Reformat {
    /// use the `xmllint` found on `PATH`
    pub fn xmllint() -> Self {
        Self::Xmllint {
            program: PathBuf::from("xmllint"),
        }
    }

    /// Reformat the file at `path` in place. Returns `true` if the file was reformatted.
    pub(crate) fn apply(&self, path: &Path) -> bool {
        let program = match self {
            Self::Disabled => return false,
            Self::Xmllint { program } => program,
        };

        let output = Command::new(program)
            .args(["--format", "--encode", "utf-8"])
            .arg(path)
            .arg("-o")
            .arg(path)
            .output();

        match output {
            Ok(output) if output.status.success() => {
                log::debug!("formatted {} with `{}`", path.display(), program.display());
                true
            }
            Ok(output) => {
                log::warn!(
                    "`{}` exited with {} while formatting {}: {}",
                    program.display(),
                    output.status,
                    path.display(),
                    String::from_utf8_lossy(&output.stderr).trim()
                );
                false
            }
            Err(e) => {
                log::warn!(
                    "could not run `{}`, {} is left unformatted: {}",
                    program.display(),
                    path.display(),
                    e
                );
                false
            }
        }
    }
}

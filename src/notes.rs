use std::{fmt::Display, path::PathBuf, process::Command};

use spdlog::debug;

use crate::report::REF;

/// Reads raw analysis notes from a git repository's notes ref.
#[derive(Debug, Clone)]
pub struct GitNotes {
    repo: PathBuf,
    notes_ref: String,
}

impl GitNotes {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        GitNotes {
            repo: repo.into(),
            notes_ref: REF.to_string(),
        }
    }

    /// Raw notes attached to `commit`, one per line. A commit without notes has none.
    pub fn read(&self, commit: &str) -> Result<Vec<Vec<u8>>, std::io::Error> {
        debug!("GitNotes.read(): {} {}", self, commit);
        let output = Command::new("git")
            .env("LC_ALL", "C")
            .arg("-C")
            .arg(&self.repo)
            .arg("notes")
            .arg(format!("--ref={}", self.notes_ref))
            .arg("show")
            .arg(commit)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if is_missing_note(&stderr) {
                debug!("no notes for {}", commit);
                return Ok(Vec::new());
            }
            return Err(std::io::Error::other(format!(
                "git notes show {} failed: {}",
                commit,
                stderr.trim()
            )));
        }

        Ok(split_notes(&output.stdout))
    }
}

impl Display for GitNotes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.repo.display(), self.notes_ref)
    }
}

// git's answer for an existing commit that simply has no note under the ref
fn is_missing_note(stderr: &str) -> bool {
    stderr.contains("no note found for object")
}

/// Splits a note object into its individual notes: every non-blank line is one note.
pub fn split_notes(blob: &[u8]) -> Vec<Vec<u8>> {
    blob.split(|b| *b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.iter().all(u8::is_ascii_whitespace))
        .map(<[u8]>::to_vec)
        .collect()
}

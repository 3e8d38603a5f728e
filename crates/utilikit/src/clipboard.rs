//! Clipboard access as an injected capability
//!
//! The core contract is a single fire-and-forget `copy`. The system
//! implementation pipes through whichever platform clipboard utility is on
//! the PATH; callers treat a missing utility as a warning, not a failure.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::prelude::{eprintln, *};

/// A capability that can place text on the system clipboard
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
}

/// Pipes text through the first clipboard utility found on the PATH
pub struct SystemClipboard;

/// Candidate utilities in preference order, with their required arguments
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard", "-in"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip", &[]),
];

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let (program, args) = CLIPBOARD_COMMANDS
            .iter()
            .find(|(program, _)| which::which(program).is_ok())
            .ok_or_else(|| {
                eyre!("No clipboard utility found (tried pbcopy, wl-copy, xclip, xsel, clip)")
            })?;

        let mut child = Command::new(program)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| eyre!("Failed to launch {program}: {e}"))?;

        child
            .stdin
            .take()
            .ok_or_else(|| eyre!("Failed to open stdin for {program}"))?
            .write_all(text.as_bytes())
            .map_err(|e| eyre!("Failed to write to {program}: {e}"))?;

        let status = child
            .wait()
            .map_err(|e| eyre!("Failed to wait for {program}: {e}"))?;

        if !status.success() {
            return Err(eyre!("{program} exited with {status}"));
        }

        Ok(())
    }
}

/// Copy text to the system clipboard, reporting failure as a stderr warning.
/// The copy capability has no observable failure mode worth surfacing to the
/// command's exit status.
pub fn copy_or_warn(text: &str) {
    if let Err(err) = SystemClipboard.copy(text) {
        eprintln!("Warning: could not copy to clipboard: {err}");
    } else {
        eprintln!("Copied to clipboard.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records copied text instead of touching the system clipboard
    struct RecordingClipboard {
        copied: RefCell<Vec<String>>,
    }

    impl RecordingClipboard {
        fn new() -> Self {
            RecordingClipboard {
                copied: RefCell::new(Vec::new()),
            }
        }
    }

    impl Clipboard for RecordingClipboard {
        fn copy(&self, text: &str) -> Result<()> {
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_fake_records_copies() {
        let clipboard = RecordingClipboard::new();
        clipboard.copy("first").unwrap();
        clipboard.copy("second").unwrap();

        assert_eq!(
            *clipboard.copied.borrow(),
            vec!["first".to_string(), "second".to_string()]
        );
    }
}

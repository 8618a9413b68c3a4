//! External editor launching

use crate::error::{DayfoldError, Result};
use std::path::Path;
use std::process::Command;

/// Launches note files in the user's editor
pub struct Editor {
    command: String,
}

impl Editor {
    /// Create an editor with an explicit command string
    pub fn new(command: String) -> Self {
        Editor { command }
    }

    /// Pick the editor from EDITOR/VISUAL, with a platform fallback
    pub fn from_env() -> Self {
        let command = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        Editor::new(command)
    }

    /// Open a file in the editor and return immediately
    pub fn open(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command();

        let mut all_args = args;
        all_args.push(file_path.to_string_lossy().to_string());

        // On Windows, use cmd /C so .bat and .cmd editors are found
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&program).args(&all_args);
            cmd.spawn().map_err(|e| {
                DayfoldError::Editor(format!("Failed to launch editor '{}': {}", program, e))
            })?;
        }

        #[cfg(not(windows))]
        {
            Command::new(&program)
                .args(&all_args)
                .spawn()
                .map_err(|e| {
                    DayfoldError::Editor(format!("Failed to launch editor '{}': {}", program, e))
                })?;
        }

        Ok(())
    }

    /// Parse the command string into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            return (
                if cfg!(windows) { "notepad" } else { "nano" }.to_string(),
                vec![],
            );
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}

//! Script descriptor
//!
//! The structured record expected from the completion text. All three
//! fields must be present and non-empty before anything touches the
//! filesystem; the rejection message names exactly the fields at fault.

use scriptforge_foundation::{Error, Result};
use serde::Deserialize;

/// Interpreter family for a generated script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptLanguage {
    Python,
    Bash,
}

impl ScriptLanguage {
    /// Map the declared language string. Only `"bash"` selects the shell
    /// path; every other value, recognized or not, is treated as python.
    pub fn from_declared(language: &str) -> Self {
        if language == "bash" {
            ScriptLanguage::Bash
        } else {
            ScriptLanguage::Python
        }
    }

    /// File extension for materialized artifacts
    pub fn extension(self) -> &'static str {
        match self {
            ScriptLanguage::Bash => "sh",
            ScriptLanguage::Python => "py",
        }
    }

    /// Interpreter the executor invokes
    pub fn interpreter(self) -> &'static str {
        match self {
            ScriptLanguage::Bash => "bash",
            ScriptLanguage::Python => "python3",
        }
    }
}

/// The three-field record expected from the completion text
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptDescriptor {
    /// Source text, written to the artifact verbatim
    #[serde(default)]
    pub code: String,

    /// Declared language (`python` or `bash`)
    #[serde(default)]
    pub language: String,

    /// Suggested run command. Advisory only: the executor always
    /// synthesizes the real command from `language` and the artifact path.
    #[serde(default)]
    pub exec: String,
}

impl ScriptDescriptor {
    /// Decode the completion text as a script descriptor.
    ///
    /// No semantic validation of `code` is performed here; robustness comes
    /// from the confined store and the synthesized run command downstream.
    pub fn parse(raw: &str) -> Result<Self> {
        let descriptor: ScriptDescriptor = serde_json::from_str(raw)
            .map_err(|e| Error::InvalidDescriptor(format!("not a JSON object: {}", e)))?;

        let mut missing = Vec::new();
        if descriptor.code.is_empty() {
            missing.push("code");
        }
        if descriptor.language.is_empty() {
            missing.push("language");
        }
        if descriptor.exec.is_empty() {
            missing.push("exec");
        }

        if !missing.is_empty() {
            return Err(Error::InvalidDescriptor(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(descriptor)
    }

    /// The interpreter family selected by the declared language
    pub fn language(&self) -> ScriptLanguage {
        ScriptLanguage::from_declared(&self.language)
    }
}

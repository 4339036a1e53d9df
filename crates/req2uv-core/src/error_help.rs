//! User-facing rendering of [`MigrateError`] with actionable hints.

use crate::core::error::MigrateError;

/// Errors that can suggest a next step to the user.
pub trait ErrorHelp {
    /// A short hint shown below the error message, if any.
    fn help(&self) -> Option<String>;
}

impl ErrorHelp for MigrateError {
    fn help(&self) -> Option<String> {
        match self {
            MigrateError::RequirementsNotFound(_) => Some(
                "Run from the directory containing requirements.txt, or pass --requirements <FILE>"
                    .to_string(),
            ),
            MigrateError::NoDirectDependencies { marker, .. } => Some(format!(
                "Looking for packages with '# via <project-name> ({})' comments",
                marker
            )),
            MigrateError::ToolNotFound(program) => Some(format!(
                "Install '{}' (https://docs.astral.sh/uv/) or pass --tool <PROGRAM>",
                program
            )),
            MigrateError::Config(_) | MigrateError::Yaml(_) => {
                Some("Check the syntax of your req2uv config.yaml".to_string())
            }
            _ => None,
        }
    }
}

/// Format an error followed by its help hint, ready for stderr.
pub fn format_error_with_help(error: &MigrateError) -> String {
    let mut out = format!("❌ {}", error);
    if let MigrateError::ToolFailed { stderr, .. } = error {
        let stderr = stderr.trim_end();
        if !stderr.is_empty() {
            out.push('\n');
            out.push_str(stderr);
        }
    }
    if let Some(help) = error.help() {
        out.push_str(&format!("\n💡 {}", help));
    }
    out
}

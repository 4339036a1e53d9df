//! External manifest tool integration.

pub mod uv;

/// Captured output of a successful tool run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Render `<program> add <packages...>` the way a user would type it
pub fn display_command(program: &str, packages: &[String]) -> String {
    let mut parts = vec![program.to_string(), "add".to_string()];
    parts.extend(packages.iter().cloned());
    parts.join(" ")
}

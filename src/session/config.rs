/// Prompt written before every read
pub const DEFAULT_PROMPT: &str = "Enter what you want to convert (or exit): ";

/// Whole-line command that ends the session, matched case-insensitively
pub const EXIT_COMMAND: &str = "exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub prompt: String,
}

impl SessionConfig {
    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::with_prompt(DEFAULT_PROMPT)
    }
}

pub fn is_exit_command(line: &str) -> bool {
    line.eq_ignore_ascii_case(EXIT_COMMAND)
}

use std::env;

const CI_VARS: &[&str] = &["CI", "CONTINUOUS_INTEGRATION", "GITHUB_ACTIONS", "GITLAB_CI", "JENKINS_URL"];

/// Whether stdout is an interactive terminal that can take rich output
pub struct TerminalDetector {
    interactive: bool,
}

impl TerminalDetector {
    /// A TTY under CI still counts as non-interactive
    pub fn new() -> Self {
        Self::forced(atty::is(atty::Stream::Stdout) && !running_in_ci())
    }

    pub fn forced(interactive: bool) -> Self {
        Self { interactive }
    }

    pub fn is_tty(&self) -> bool {
        self.interactive
    }

    pub fn supports_unicode(&self) -> bool {
        self.interactive && locale_allows_unicode()
    }
}

impl Default for TerminalDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn running_in_ci() -> bool {
    CI_VARS.iter().any(|var| env::var_os(var).is_some())
}

fn locale_allows_unicode() -> bool {
    if env::var("TERM").map_or(false, |term| term == "dumb") {
        return false;
    }
    let utf8_locale = ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .map(|value| value.to_lowercase())
        .any(|value| value.contains("utf-8") || value.contains("utf8"));

    // Windows consoles only draw box characters under Windows Terminal
    utf8_locale || cfg!(not(windows)) || env::var_os("WT_SESSION").is_some()
}

//! Visual theme and styling.

use console::Style;

/// Colors and glyphs for bootstrap output.
#[derive(Debug, Clone)]
pub struct GasTheme {
    /// Style for success marks (green).
    pub success: Style,
    /// Style for warning marks (yellow).
    pub warning: Style,
    /// Style for error marks (red).
    pub error: Style,
    /// Style for arrows and section rules (blue).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for labels and the banner (bold).
    pub highlight: Style,
}

impl Default for GasTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GasTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow().bold(),
            error: Style::new().red(),
            info: Style::new().blue(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or NO_COLOR).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
        }
    }

    /// `✓ msg`
    pub fn format_success(&self, msg: &str) -> String {
        format!("{} {}", self.success.apply_to("✓"), msg)
    }

    /// `! msg`
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{} {}", self.warning.apply_to("!"), msg)
    }

    /// `✗ msg`
    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("✗"), msg)
    }

    /// `→ msg`
    pub fn format_step(&self, msg: &str) -> String {
        format!("{} {}", self.info.apply_to("→"), msg)
    }

    /// `━━━ title ━━━`
    pub fn format_section(&self, title: &str) -> String {
        format!(
            "{}",
            self.info.clone().bold().apply_to(format!("━━━ {} ━━━", title))
        )
    }

    /// Boxed banner around `title`.
    pub fn format_header(&self, title: &str) -> String {
        const WIDTH: usize = 60;
        let inner = format!("{:^width$}", title, width = WIDTH);
        [
            format!("╔{}╗", "═".repeat(WIDTH)),
            format!("║{}║", inner),
            format!("╚{}╝", "═".repeat(WIDTH)),
        ]
        .iter()
        .map(|line| self.highlight.apply_to(line).to_string())
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

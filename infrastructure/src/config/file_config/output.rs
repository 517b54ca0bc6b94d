//! `[output]` section: how drafts are printed

use minwon_domain::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Format used when `--output` is not given
    pub format: Option<OutputFormat>,
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// The command-line format wins over the configured one.
    pub fn resolve_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.format).unwrap_or_default()
    }

    /// Whether console output is colored for `format`.
    ///
    /// JSON is meant for other programs and is never colored.
    pub fn use_color(&self, no_color_flag: bool, format: OutputFormat) -> bool {
        self.color && !no_color_flag && format != OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileConfig;

    #[test]
    fn test_format_flag_overrides_config() {
        let config: FileConfig = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.resolve_format(None), OutputFormat::Json);
        assert_eq!(
            config.output.resolve_format(Some(OutputFormat::Text)),
            OutputFormat::Text
        );
        assert_eq!(
            FileOutputConfig::default().resolve_format(None),
            OutputFormat::Full
        );
    }

    #[test]
    fn test_use_color() {
        let output = FileOutputConfig::default();
        assert!(output.use_color(false, OutputFormat::Full));
        assert!(!output.use_color(true, OutputFormat::Full));
        assert!(!output.use_color(false, OutputFormat::Json));

        let config: FileConfig = toml::from_str("[output]\ncolor = false\n").unwrap();
        assert!(!config.output.use_color(false, OutputFormat::Text));
    }
}

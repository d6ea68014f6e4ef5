use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use fs_err::File;
use strum::EnumString;

use crate::errors::ConfigError;

pub const DEFAULT_PROMPT: &str = "> ";
pub const DEFAULT_LINE_BUFFER_SIZE: usize = 1024;
pub const DEFAULT_TOKEN_BUFFER_SIZE: usize = 64;

// Represents any settings for the shell, all of which can be set from a configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    // The marker printed before each line is read
    pub prompt: String,
    // Starting capacity and growth increment of the line buffer, in bytes
    pub line_buffer_size: usize,
    // Starting capacity and growth increment of the argument vector, in slots
    pub token_buffer_size: usize,
    // Whether error reports are styled red
    pub color_errors: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_owned(),
            line_buffer_size: DEFAULT_LINE_BUFFER_SIZE,
            token_buffer_size: DEFAULT_TOKEN_BUFFER_SIZE,
            color_errors: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "kebab-case")]
enum ConfigKey {
    Prompt,
    LineBufferSize,
    TokenBufferSize,
    ColorErrors,
}

impl Configuration {
    /// Scans a configuration file for settings, starting from the defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(ConfigError::FailedToOpenConfigFile)?;
        let reader = BufReader::new(file);

        let mut config = Self::default();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(ConfigError::FailedToOpenConfigFile)?;
            config.apply_line(path, index + 1, &line)?;
        }

        Ok(config)
    }

    fn apply_line(&mut self, path: &Path, line_number: usize, line: &str) -> Result<(), ConfigError> {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            return Ok(());
        }

        // * Only the first separator counts, so a prompt may itself contain ": "
        let (key, value) = line.split_once(": ").ok_or_else(|| ConfigError::MalformedLine {
            path: path.to_path_buf(),
            line: line_number,
        })?;

        let key = key.trim();
        match ConfigKey::from_str(key) {
            Ok(ConfigKey::Prompt) => self.prompt = value.to_owned(),
            Ok(ConfigKey::LineBufferSize) => self.line_buffer_size = parse_size(key, value)?,
            Ok(ConfigKey::TokenBufferSize) => self.token_buffer_size = parse_size(key, value)?,
            Ok(ConfigKey::ColorErrors) => {
                self.color_errors = value
                    .trim()
                    .parse::<bool>()
                    .map_err(|_| invalid_value(key, value))?;
            }
            Err(_) => {
                return Err(ConfigError::UnknownKey {
                    path: path.to_path_buf(),
                    key: key.to_owned(),
                })
            }
        }

        Ok(())
    }
}

// Buffer sizes double as growth increments, so zero is rejected
fn parse_size(key: &str, value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(invalid_value(key, value)),
    }
}

fn invalid_value(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_owned(),
        value: value.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("jjsh-{}-{}.conf", name, std::process::id()));
        fs_err::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn returns_defaults_for_empty_file() {
        //given
        let path = write_config("empty", "");

        //when
        let config = Configuration::from_file(&path).unwrap();

        //then
        assert_eq!(config, Configuration::default());
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.line_buffer_size, 1024);
        assert_eq!(config.token_buffer_size, 64);
    }

    #[test]
    fn reads_every_key_and_skips_comments() {
        //given
        let contents = "# settings\n\nprompt: jjsh$ \nline-buffer-size: 16\ntoken-buffer-size: 2\ncolor-errors: true\n";
        let path = write_config("full", contents);

        //when
        let config = Configuration::from_file(&path).unwrap();

        //then
        assert_eq!(config.prompt, "jjsh$ ");
        assert_eq!(config.line_buffer_size, 16);
        assert_eq!(config.token_buffer_size, 2);
        assert!(config.color_errors);
    }

    #[test]
    fn rejects_zero_buffer_size() {
        let path = write_config("zero", "line-buffer-size: 0\n");
        let result = Configuration::from_file(&path);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn rejects_unknown_key() {
        let path = write_config("unknown", "history-limit: 10\n");
        let result = Configuration::from_file(&path);
        assert!(matches!(result, Err(ConfigError::UnknownKey { key, .. }) if key == "history-limit"));
    }

    #[test]
    fn rejects_line_without_separator() {
        let path = write_config("malformed", "prompt\n");
        let result = Configuration::from_file(&path);
        assert!(matches!(result, Err(ConfigError::MalformedLine { line: 1, .. })));
    }

    #[test]
    fn reports_missing_file_with_its_path() {
        let path = std::env::temp_dir().join("jjsh-does-not-exist.conf");
        let error = Configuration::from_file(&path).unwrap_err();
        assert!(error.to_string().contains("jjsh-does-not-exist.conf"));
    }
}

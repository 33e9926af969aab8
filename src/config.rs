//////////////////////////
// config.rs
//////////////////////////

use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::render::{GlyphSet, RenderOptions};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// ANSI colours in the board printout (`CHESS_COLOR`)
    pub color: bool,

    /// Letter or figurine pieces (`CHESS_GLYPHS`)
    pub glyphs: GlyphSet,

    /// Optional JSON position to start from (`CHESS_POSITION`)
    pub start_position: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            color: true,
            glyphs: GlyphSet::Ascii,
            start_position: None,
        }
    }
}

impl SessionConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `load` with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SessionConfig::default();

        let color = match lookup("CHESS_COLOR") {
            Some(value) => parse_flag("CHESS_COLOR", &value)?,
            None => defaults.color,
        };

        let glyphs = match lookup("CHESS_GLYPHS") {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "ascii" => GlyphSet::Ascii,
                "unicode" => GlyphSet::Unicode,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "CHESS_GLYPHS",
                        value,
                    })
                }
            },
            None => defaults.glyphs,
        };

        let start_position = lookup("CHESS_POSITION")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(SessionConfig {
            color,
            glyphs,
            start_position,
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            glyphs: self.glyphs,
            color: self.color,
        }
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

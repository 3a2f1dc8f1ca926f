//! Download mode value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidModeError;

/// All available modes
pub const ALL_MODES: &[Mode] = &[Mode::Audio, Mode::Video];

/// Selects which of the two request shapes is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Audio,
    Video,
}

impl Mode {
    /// Get the string identifier for this mode
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

impl FromStr for Mode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "audio" => Ok(Self::Audio),
            "video" => Ok(Self::Video),
            _ => Err(InvalidModeError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("audio".parse::<Mode>().unwrap(), Mode::Audio);
        assert_eq!(" Video ".parse::<Mode>().unwrap(), Mode::Video);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "gif".parse::<Mode>().unwrap_err();
        assert!(err.to_string().contains("gif"));
    }

    #[test]
    fn default_is_audio() {
        assert_eq!(Mode::default(), Mode::Audio);
    }

    #[test]
    fn display_round_trips() {
        for mode in ALL_MODES {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), *mode);
        }
    }
}

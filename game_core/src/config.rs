use serde::Deserialize;
use thiserror::Error;

use crate::params::Params;

/// Reasons a [`Config`] cannot be used to build a match
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("screen height {height} leaves no room for the ball spawn margin {margin}")]
    SpawnMarginTooLarge { height: f32, margin: f32 },
    #[error("racket height {racket} does not fit in screen height {screen}")]
    RacketTooTall { racket: f32, screen: f32 },
    #[error("player inset {inset} must lie between the racket width {racket} and the screen width {screen}")]
    PlayerInsetOutOfRange { inset: f32, racket: f32, screen: f32 },
    #[error("win score must be at least 1")]
    ZeroWinScore,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub racket_width: f32,
    pub racket_height: f32,
    pub player_inset: f32,
    pub player_speed: f32,
    pub cpu_step: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub ball_speedup: f32,
    pub spawn_margin: f32,
    pub win_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            racket_width: Params::RACKET_WIDTH,
            racket_height: Params::RACKET_HEIGHT,
            player_inset: Params::PLAYER_INSET,
            player_speed: Params::PLAYER_SPEED,
            cpu_step: Params::CPU_STEP,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            ball_speedup: Params::BALL_SPEEDUP,
            spawn_margin: Params::SPAWN_MARGIN,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on a court of the given size
    pub fn with_screen(width: f32, height: f32) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            ..Self::default()
        }
    }

    /// Reject configurations the simulation cannot run on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("racket_width", self.racket_width),
            ("racket_height", self.racket_height),
            ("player_speed", self.player_speed),
            ("cpu_step", self.cpu_step),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
            ("ball_speedup", self.ball_speedup),
        ];
        for (name, value) in positives {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if !self.spawn_margin.is_finite()
            || self.spawn_margin < 0.0
            || self.screen_height < 2.0 * self.spawn_margin
        {
            return Err(ConfigError::SpawnMarginTooLarge {
                height: self.screen_height,
                margin: self.spawn_margin,
            });
        }

        if self.racket_height > self.screen_height {
            return Err(ConfigError::RacketTooTall {
                racket: self.racket_height,
                screen: self.screen_height,
            });
        }

        if !self.player_inset.is_finite()
            || self.player_inset < self.racket_width
            || self.player_inset > self.screen_width
        {
            return Err(ConfigError::PlayerInsetOutOfRange {
                inset: self.player_inset,
                racket: self.racket_width,
                screen: self.screen_width,
            });
        }

        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_with_screen_keeps_tuning() {
        let config = Config::with_screen(800.0, 600.0);
        assert_eq!(config.screen_width, 800.0);
        assert_eq!(config.screen_height, 600.0);
        assert_eq!(config.cpu_step, Params::CPU_STEP);
        assert_eq!(config.win_score, 5);
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let config = Config::with_screen(-800.0, 600.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                name: "screen_width",
                value: -800.0
            })
        );
    }

    #[test]
    fn test_nan_speed_rejected() {
        let config = Config {
            ball_speed: f32::NAN,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                name: "ball_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_short_court_rejected() {
        let config = Config {
            racket_height: 10.0,
            ..Config::with_screen(800.0, 15.0)
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnMarginTooLarge { .. })
        ));
    }

    #[test]
    fn test_tall_racket_rejected() {
        let config = Config {
            racket_height: 700.0,
            ..Config::with_screen(800.0, 600.0)
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RacketTooTall { .. })
        ));
    }

    #[test]
    fn test_player_inset_must_fit_racket() {
        let config = Config {
            player_inset: 5.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PlayerInsetOutOfRange { .. })
        ));
    }

    #[test]
    fn test_zero_win_score_rejected() {
        let config = Config {
            win_score: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWinScore));
    }

    #[test]
    fn test_error_message_names_field() {
        let err = Config::with_screen(800.0, 0.0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "screen_height must be a positive finite number, got 0"
        );
    }
}

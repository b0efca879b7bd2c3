//! Scroll position classification for the site header.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Offset above which the header counts as scrolled.
    pub scrolled_threshold: f64,
    /// Offset below which the header is never hidden by direction.
    pub hide_threshold: f64,
    /// Whether scrolling down may hide the header at all.
    pub direction_enabled: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 100.0,
            hide_threshold: 200.0,
            direction_enabled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Classification {
    #[default]
    Top,
    Scrolled,
    HiddenByDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub position: f64,
    pub direction: Direction,
    pub classification: Classification,
}

/// Reduces raw scroll offsets into a [`Classification`].
///
/// Revealing is immediate on any upward movement, hiding needs downward
/// movement past `hide_threshold`, so the header does not flicker when the
/// offset jitters around a threshold.
#[derive(Debug, Clone)]
pub struct ScrollThresholdClassifier {
    config: ScrollConfig,
    previous: Option<f64>,
    last: ScrollState,
}

impl ScrollThresholdClassifier {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            previous: None,
            last: ScrollState::default(),
        }
    }

    /// Feeds the next scroll offset. Negative or NaN offsets count as 0.
    pub fn observe(&mut self, position: f64) -> ScrollState {
        let position = position.max(0.0);

        let direction = match self.previous {
            Some(previous) if position > previous => Direction::Down,
            Some(previous) if position < previous => Direction::Up,
            _ => Direction::None,
        };

        let config = &self.config;
        let classification = if position <= config.scrolled_threshold {
            Classification::Top
        } else if config.direction_enabled
            && direction == Direction::Down
            && position > config.hide_threshold
        {
            Classification::HiddenByDirection
        } else {
            Classification::Scrolled
        };

        self.previous = Some(position);
        self.last = ScrollState {
            position,
            direction,
            classification,
        };
        self.last
    }

    /// State produced by the most recent `observe`, or the initial top state.
    pub fn last_state(&self) -> ScrollState {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hiding() -> ScrollThresholdClassifier {
        ScrollThresholdClassifier::new(ScrollConfig {
            scrolled_threshold: 100.0,
            hide_threshold: 200.0,
            direction_enabled: true,
        })
    }

    #[test]
    fn test_scroll_back_up_reveals_immediately() {
        let mut classifier = hiding();
        let classes: Vec<Classification> = [50.0, 150.0, 250.0, 300.0, 150.0]
            .into_iter()
            .map(|position| classifier.observe(position).classification)
            .collect();

        assert_eq!(
            classes,
            vec![
                Classification::Top,
                Classification::Scrolled,
                Classification::HiddenByDirection,
                Classification::HiddenByDirection,
                Classification::Scrolled,
            ]
        );
    }

    #[test]
    fn test_direction_from_previous_sample() {
        let mut classifier = hiding();
        assert_eq!(classifier.observe(10.0).direction, Direction::None);
        assert_eq!(classifier.observe(20.0).direction, Direction::Down);
        assert_eq!(classifier.observe(20.0).direction, Direction::None);
        assert_eq!(classifier.observe(5.0).direction, Direction::Up);
    }

    #[test]
    fn test_first_sample_deep_in_page_is_not_hidden() {
        let mut classifier = hiding();
        let state = classifier.observe(900.0);
        assert_eq!(state.direction, Direction::None);
        assert_eq!(state.classification, Classification::Scrolled);
    }

    #[test]
    fn test_direction_disabled_never_hides() {
        let mut classifier = ScrollThresholdClassifier::new(ScrollConfig::default());
        for position in [0.0, 300.0, 600.0, 900.0] {
            assert_ne!(
                classifier.observe(position).classification,
                Classification::HiddenByDirection
            );
        }
        assert_eq!(classifier.last_state().classification, Classification::Scrolled);
    }

    #[test]
    fn test_threshold_is_inclusive_for_top() {
        let mut classifier = hiding();
        assert_eq!(classifier.observe(100.0).classification, Classification::Top);
        assert_eq!(classifier.observe(100.5).classification, Classification::Scrolled);
    }

    #[test]
    fn test_negative_and_nan_clamp_to_zero() {
        let mut classifier = hiding();
        assert_eq!(classifier.observe(-40.0).position, 0.0);
        let state = classifier.observe(f64::NAN);
        assert_eq!(state.position, 0.0);
        assert_eq!(state.direction, Direction::None);
        assert_eq!(state.classification, Classification::Top);
    }
}

use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// An `#rrggbb` colour used to tint a stage's glow and typography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Accent {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Accent {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn css_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, alpha.clamp(0.0, 1.0))
    }
}

impl FromStr for Accent {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.is_ascii())
            .ok_or_else(|| ConfigError::InvalidColor(s.to_string()))?;
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ConfigError::InvalidColor(s.to_string()))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Accent {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Accent> for String {
    fn from(accent: Accent) -> Self {
        accent.to_string()
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One discrete state of a scroll narrative and what to show while it is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub stat: String,
    pub detail: String,
    pub accent: Accent,
}

/// Validated, immutable stage list. Cloning shares the same allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct StageSet(Rc<[Stage]>);

impl StageSet {
    pub fn new(stages: Vec<Stage>) -> Result<Self, ConfigError> {
        if stages.is_empty() {
            return Err(ConfigError::NoStages);
        }
        {
            let mut seen = HashSet::with_capacity(stages.len());
            if let Some(dup) = stages.iter().find(|stage| !seen.insert(stage.id.as_str())) {
                return Err(ConfigError::DuplicateStage(dup.id.clone()));
            }
        }
        Ok(Self(stages.into()))
    }
}

impl Deref for StageSet {
    type Target = [Stage];

    fn deref(&self) -> &[Stage] {
        &self.0
    }
}

/// Equal-width partition of `[0, 1]` into `count` stages.
///
/// Stage `i` covers `[i/count, (i+1)/count)`; the last one also owns `1.0`.
/// Progress is clamped first and NaN maps to the first stage.
pub fn stage_index_for(progress: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    ((progress * count as f64).floor() as usize).min(count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(id: &str) -> Stage {
        Stage {
            id: id.to_lowercase(),
            title: id.to_string(),
            subtitle: String::new(),
            stat: String::new(),
            detail: String::new(),
            accent: Accent::rgb(59, 130, 246),
        }
    }

    #[test]
    fn three_way_boundaries() {
        assert_eq!(stage_index_for(0.0, 3), 0);
        assert_eq!(stage_index_for(0.3, 3), 0);
        assert_eq!(stage_index_for(0.33, 3), 0);
        assert_eq!(stage_index_for(0.34, 3), 1);
        assert_eq!(stage_index_for(0.5, 3), 1);
        assert_eq!(stage_index_for(0.66, 3), 1);
        assert_eq!(stage_index_for(0.67, 3), 2);
        assert_eq!(stage_index_for(0.9, 3), 2);
        assert_eq!(stage_index_for(1.0, 3), 2);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(stage_index_for(-0.2, 4), 0);
        assert_eq!(stage_index_for(1.7, 4), 3);
        assert_eq!(stage_index_for(f64::NAN, 4), 0);
        assert_eq!(stage_index_for(0.99, 1), 0);
        assert_eq!(stage_index_for(1.0, 1), 0);
    }

    #[test]
    fn set_rejects_empty_and_duplicates() {
        assert!(matches!(StageSet::new(Vec::new()), Err(ConfigError::NoStages)));
        assert!(matches!(
            StageSet::new(vec![stage("Velocity"), stage("Velocity")]),
            Err(ConfigError::DuplicateStage(id)) if id == "velocity"
        ));
    }

    #[test]
    fn set_clones_share_stages() {
        let set = StageSet::new(vec![stage("Velocity"), stage("Precision")]).unwrap();
        let shared = set.clone();
        assert!(std::ptr::eq(set.as_ptr(), shared.as_ptr()));
        assert_eq!(shared[stage_index_for(0.75, shared.len())].title, "Precision");
    }

    #[test]
    fn accent_parses_and_formats() {
        let accent: Accent = "#10B981".parse().unwrap();
        assert_eq!(accent, Accent::rgb(16, 185, 129));
        assert_eq!(accent.to_string(), "#10b981");
        assert_eq!(accent.css(), "rgb(16, 185, 129)");
        assert_eq!(accent.css_alpha(1.5), "rgba(16, 185, 129, 1.000)");
    }

    #[test]
    fn accent_rejects_garbage() {
        for bad in ["10b981", "#10b98", "#zzzzzz", "#10b9811", "#ééé"] {
            assert!(matches!(bad.parse::<Accent>(), Err(ConfigError::InvalidColor(_))), "{bad}");
        }
    }

    #[test]
    fn stage_deserializes_with_hex_accent() {
        let stage: Stage = serde_json::from_str(
            r##"{
                "id": "velocity",
                "title": "Velocity",
                "subtitle": "Gaming & Simulation",
                "stat": "144+ FPS",
                "detail": "Frames without compromise.",
                "accent": "#3b82f6"
            }"##,
        )
        .unwrap();
        assert_eq!(stage.accent, Accent::rgb(59, 130, 246));
        assert!(serde_json::from_str::<Stage>(
            r##"{"id":"x","title":"","subtitle":"","stat":"","detail":"","accent":"blue"}"##
        )
        .is_err());
    }
}

//! Scroll-driven animation state, independent of the DOM.
//!
//! The browser side (see `crate::hooks`) measures the page and feeds raw
//! progress in; everything in here is plain data plus arithmetic and runs
//! under `cargo test` on the host.

pub mod controller;
pub mod progress;
pub mod spring;
pub mod stage;
pub mod transform;

use thiserror::Error;

pub use controller::{ScrollStageController, StageChange, StageSnapshot};
pub use progress::{clamped_section_progress, ScrollRange};
pub use spring::{SpringConfig, SpringValue};
pub use stage::{Stage, StageSet};
pub use transform::{interpolate, pointer_offset};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("a scroll narrative needs at least one stage")]
    NoStages,
    #[error("stage id `{0}` is used more than once")]
    DuplicateStage(String),
    #[error("spring {field} must be finite and positive, got {value}")]
    InvalidSpring { field: &'static str, value: f64 },
    #[error("`{0}` is not a #rrggbb colour")]
    InvalidColor(String),
    #[error("malformed stage content: {0}")]
    MalformedContent(String),
}

use super::spring::{SpringConfig, SpringValue};
use super::stage::{stage_index_for, Stage, StageSet};
use super::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Delivered to subscribers whenever the active stage changes.
#[derive(Debug, Clone, Copy)]
pub struct StageChange<'a> {
    pub index: usize,
    pub previous: usize,
    pub stage: &'a Stage,
    pub raw_progress: f64,
    pub smoothed_progress: f64,
}

/// Read-only view of the controller for a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageSnapshot {
    pub index: usize,
    pub raw_progress: f64,
    pub smoothed_progress: f64,
}

type Listener = Box<dyn FnMut(&StageChange<'_>)>;

/// Turns a noisy scroll-progress signal into a settled "active stage".
///
/// Raw progress only moves the target of a spring. The spring is advanced by
/// [`tick`](Self::tick) once per rendered frame and the active stage is read
/// off the smoothed value, so a single jittery scroll event cannot flip the
/// stage back and forth.
///
/// Slow scrolling notifies every stage it passes through in order. A jump
/// (anchor link, or one very long frame) may skip the stages in between;
/// only the stage it comes to rest on is guaranteed to be announced.
pub struct ScrollStageController {
    stages: StageSet,
    spring: SpringValue,
    active: usize,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
    stopped: bool,
}

impl ScrollStageController {
    // The site goes through `with_stages` with a shared set; these plain
    // accessors are the host-side surface exercised by the tests.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn new(stages: Vec<Stage>, spring: SpringConfig) -> Result<Self, ConfigError> {
        Self::with_stages(StageSet::new(stages)?, spring)
    }

    pub fn with_stages(stages: StageSet, spring: SpringConfig) -> Result<Self, ConfigError> {
        spring.validate()?;
        Ok(Self {
            stages,
            spring: SpringValue::new(spring, 0.0),
            active: 0,
            listeners: Vec::new(),
            next_id: 0,
            stopped: false,
        })
    }

    pub fn stages(&self) -> &StageSet {
        &self.stages
    }

    /// Record the latest measured progress. Takes effect over the next ticks.
    pub fn on_scroll_progress_update(&mut self, raw_progress: f64) {
        if let Some(raw) = self.accept(raw_progress) {
            self.spring.set_target(raw);
        }
    }

    /// Move raw and smoothed progress to `raw_progress` at once.
    pub fn jump_to(&mut self, raw_progress: f64) {
        if let Some(raw) = self.accept(raw_progress) {
            self.spring.jump(raw);
            self.refresh();
        }
    }

    /// Advance the smoothing by `dt` seconds. Returns whether another frame is
    /// needed; at rest this is a no-op until the progress changes again.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.stopped || self.spring.is_at_rest() {
            return false;
        }
        let settled = self.spring.step(dt);
        self.refresh();
        !settled
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_stage(&self) -> &Stage {
        &self.stages[self.active]
    }

    pub fn raw_progress(&self) -> f64 {
        self.spring.target()
    }

    pub fn smoothed_progress(&self) -> f64 {
        self.spring.position()
    }

    pub fn is_animating(&self) -> bool {
        !self.stopped && !self.spring.is_at_rest()
    }

    pub fn snapshot(&self) -> StageSnapshot {
        StageSnapshot {
            index: self.active,
            raw_progress: self.raw_progress(),
            smoothed_progress: self.smoothed_progress(),
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StageChange<'_>) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        if !self.stopped {
            self.listeners.push((id, Box::new(listener)));
        }
        id
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Tear down: drop every subscriber and ignore all further input.
    pub fn stop(&mut self) {
        if !self.stopped {
            log::debug!("scroll stages stopped at stage {}", self.active);
        }
        self.stopped = true;
        self.listeners.clear();
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    fn accept(&self, raw_progress: f64) -> Option<f64> {
        if self.stopped {
            return None;
        }
        if !raw_progress.is_finite() {
            log::trace!("ignoring scroll progress {}", raw_progress);
            return None;
        }
        Some(raw_progress.clamp(0.0, 1.0))
    }

    fn refresh(&mut self) {
        let index = stage_index_for(self.spring.position(), self.stages.len());
        if index == self.active {
            return;
        }
        let previous = self.active;
        self.active = index;

        let stage = &self.stages[index];
        log::debug!("scroll stage {} -> {} ({})", previous, index, stage.id);
        let change = StageChange {
            index,
            previous,
            stage,
            raw_progress: self.spring.target(),
            smoothed_progress: self.spring.position(),
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::scroll::stage::Accent;

    const FRAME: f64 = 1.0 / 60.0;

    fn stage(title: &str) -> Stage {
        Stage {
            id: title.to_lowercase(),
            title: title.to_string(),
            subtitle: format!("{title} subtitle"),
            stat: "100%".to_string(),
            detail: format!("{title} detail"),
            accent: Accent::rgb(59, 130, 246),
        }
    }

    fn stages(count: usize) -> Vec<Stage> {
        (0..count).map(|i| stage(&format!("Stage{i}"))).collect()
    }

    fn narrative() -> ScrollStageController {
        let stages = ["Velocity", "Precision", "Intelligence"].map(stage).to_vec();
        ScrollStageController::new(stages, SpringConfig::new(100.0, 30.0)).unwrap()
    }

    fn record(controller: &mut ScrollStageController) -> Rc<RefCell<Vec<usize>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        controller.subscribe(move |change| sink.borrow_mut().push(change.index));
        seen
    }

    fn settle(controller: &mut ScrollStageController) {
        for _ in 0..10_000 {
            if !controller.tick(FRAME) {
                return;
            }
        }
        panic!("controller never came to rest");
    }

    #[test]
    fn empty_stage_list_fails_at_construction() {
        assert_eq!(
            ScrollStageController::new(Vec::new(), SpringConfig::default()).err(),
            Some(ConfigError::NoStages)
        );
    }

    #[test]
    fn bad_spring_fails_at_construction() {
        let err = ScrollStageController::new(stages(2), SpringConfig::new(-1.0, 30.0)).err();
        assert!(matches!(err, Some(ConfigError::InvalidSpring { field: "stiffness", .. })));
    }

    #[test]
    fn first_stage_is_active_before_any_update() {
        let controller = narrative();
        assert_eq!(controller.active_index(), 0);
        assert_eq!(controller.active_stage().title, "Velocity");
        assert!(!controller.is_animating());
    }

    #[test]
    fn update_does_not_jump_synchronously() {
        let mut controller = narrative();
        let seen = record(&mut controller);
        controller.on_scroll_progress_update(1.0);
        assert_eq!(controller.raw_progress(), 1.0);
        assert_eq!(controller.smoothed_progress(), 0.0);
        assert_eq!(controller.active_index(), 0);
        assert!(seen.borrow().is_empty());

        assert!(controller.tick(FRAME));
        assert!(controller.smoothed_progress() > 0.0);
        assert!(controller.smoothed_progress() < 1.0);
    }

    #[test]
    fn three_stage_boundaries_after_convergence() {
        for (raw, expected) in [(0.3, 0), (0.5, 1), (0.9, 2), (1.0, 2)] {
            let mut controller = narrative();
            controller.on_scroll_progress_update(raw);
            settle(&mut controller);
            assert_eq!(controller.smoothed_progress(), raw);
            assert_eq!(controller.active_index(), expected, "raw progress {raw}");
        }
    }

    #[test]
    fn converged_stage_matches_partition() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let count = rng.gen_range(1..=8usize);
            let raw: f64 = rng.gen_range(0.0..=1.0);
            let mut controller = ScrollStageController::new(stages(count), SpringConfig::default()).unwrap();
            controller.on_scroll_progress_update(raw);
            settle(&mut controller);

            let expected = ((raw * count as f64).floor() as usize).min(count - 1);
            assert_eq!(controller.active_index(), expected, "n={count} raw={raw}");
            assert_eq!(controller.active_stage(), &controller.stages()[expected]);
        }
    }

    #[test]
    fn slow_scroll_down_announces_every_stage_in_order() {
        let mut controller = ScrollStageController::new(stages(5), SpringConfig::default()).unwrap();
        let seen = record(&mut controller);
        for step in 0..=100 {
            controller.on_scroll_progress_update(step as f64 / 100.0);
            controller.tick(FRAME);
            controller.tick(FRAME);
        }
        settle(&mut controller);

        let seen = seen.borrow();
        assert!(seen.windows(2).all(|w| w[0] <= w[1]), "{seen:?}");
        assert_eq!(*seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn slow_scroll_up_is_non_increasing() {
        let mut controller = ScrollStageController::new(stages(4), SpringConfig::default()).unwrap();
        controller.jump_to(1.0);
        let seen = record(&mut controller);
        for step in (0..=100).rev() {
            controller.on_scroll_progress_update(step as f64 / 100.0);
            controller.tick(FRAME);
            controller.tick(FRAME);
        }
        settle(&mut controller);

        let seen = seen.borrow();
        assert!(seen.windows(2).all(|w| w[0] >= w[1]), "{seen:?}");
        assert_eq!(seen.last(), Some(&0));
        assert_eq!(controller.active_index(), 0);
    }

    #[test]
    fn repeated_progress_after_convergence_is_silent() {
        let mut controller = narrative();
        controller.on_scroll_progress_update(0.5);
        settle(&mut controller);
        let seen = record(&mut controller);

        for _ in 0..20 {
            controller.on_scroll_progress_update(0.5);
            assert!(!controller.tick(FRAME));
        }
        assert!(seen.borrow().is_empty());
        assert_eq!(controller.active_index(), 1);
    }

    #[test]
    fn non_finite_progress_is_ignored() {
        let mut controller = narrative();
        controller.on_scroll_progress_update(0.5);
        settle(&mut controller);
        let seen = record(&mut controller);

        controller.on_scroll_progress_update(f64::NAN);
        controller.on_scroll_progress_update(f64::INFINITY);
        controller.jump_to(f64::NEG_INFINITY);
        settle(&mut controller);

        assert!(seen.borrow().is_empty());
        assert_eq!(controller.active_index(), 1);
        assert_eq!(controller.raw_progress(), 0.5);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let mut controller = narrative();
        controller.on_scroll_progress_update(1.7);
        assert_eq!(controller.raw_progress(), 1.0);
        settle(&mut controller);
        assert_eq!(controller.active_index(), 2);

        controller.on_scroll_progress_update(-0.4);
        assert_eq!(controller.raw_progress(), 0.0);
        settle(&mut controller);
        assert_eq!(controller.active_index(), 0);
    }

    #[test]
    fn velocity_precision_intelligence_walkthrough() {
        let mut controller = narrative();
        let titles = Rc::new(RefCell::new(Vec::new()));
        let sink = titles.clone();
        controller.subscribe(move |change| sink.borrow_mut().push(change.stage.title.clone()));

        for raw in [0.0, 0.4, 0.7, 1.0] {
            controller.on_scroll_progress_update(raw);
            settle(&mut controller);
        }

        assert_eq!(*titles.borrow(), vec!["Precision", "Intelligence"]);
        assert_eq!(controller.active_stage().title, "Intelligence");
    }

    #[test]
    fn jump_to_end_eventually_announces_last_stage() {
        let mut controller = narrative();
        let seen = record(&mut controller);
        controller.on_scroll_progress_update(0.0);
        settle(&mut controller);
        controller.on_scroll_progress_update(1.0);
        settle(&mut controller);

        // intermediate stages may or may not show up
        assert_eq!(seen.borrow().last(), Some(&2));
        assert_eq!(controller.active_stage().title, "Intelligence");
    }

    #[test]
    fn one_long_frame_skips_intermediate_stages() {
        let mut controller = narrative();
        let seen = record(&mut controller);
        controller.on_scroll_progress_update(1.0);
        assert!(!controller.tick(10.0));
        assert_eq!(*seen.borrow(), vec![2]);
    }

    #[test]
    fn jump_to_moves_both_values_and_notifies() {
        let mut controller = narrative();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = changes.clone();
        controller.subscribe(move |change| {
            sink.borrow_mut()
                .push((change.previous, change.index, change.raw_progress, change.smoothed_progress))
        });

        controller.jump_to(0.5);
        assert_eq!(*changes.borrow(), vec![(0, 1, 0.5, 0.5)]);
        assert!(!controller.is_animating());
        assert_eq!(
            controller.snapshot(),
            StageSnapshot { index: 1, raw_progress: 0.5, smoothed_progress: 0.5 }
        );
    }

    #[test]
    fn nothing_fires_after_stop() {
        let mut controller = narrative();
        let seen = record(&mut controller);
        controller.on_scroll_progress_update(0.2);
        controller.stop();

        controller.on_scroll_progress_update(1.0);
        controller.jump_to(1.0);
        assert!(!controller.tick(FRAME));
        controller.subscribe(|_| panic!("subscribed after stop"));
        settle(&mut controller);

        assert!(controller.is_stopped());
        assert!(!controller.is_animating());
        assert!(seen.borrow().is_empty());
        assert_eq!(controller.active_index(), 0);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let mut controller = narrative();
        let kept = record(&mut controller);
        let dropped = Rc::new(RefCell::new(0));
        let sink = dropped.clone();
        let id = controller.subscribe(move |_| *sink.borrow_mut() += 1);

        assert!(controller.unsubscribe(id));
        assert!(!controller.unsubscribe(id));
        controller.jump_to(1.0);

        assert_eq!(*dropped.borrow(), 0);
        assert_eq!(*kept.borrow(), vec![2]);
    }

    #[test]
    fn single_stage_never_notifies() {
        let mut controller = ScrollStageController::new(stages(1), SpringConfig::default()).unwrap();
        let seen = record(&mut controller);
        for raw in [0.0, 0.5, 1.0, 0.0] {
            controller.on_scroll_progress_update(raw);
            settle(&mut controller);
        }
        assert!(seen.borrow().is_empty());
        assert_eq!(controller.active_index(), 0);
    }
}

use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::browser::{measure_progress, AnimationFrameLoop, WindowListener};
use crate::config::TILT_SPRING;
use crate::scroll::{
    interpolate, pointer_offset, ConfigError, ScrollRange, ScrollStageController, SpringConfig, SpringValue, Stage,
    StageChange, StageSet, StageSnapshot,
};

const SCROLL_EVENTS: &[&str] = &["scroll", "resize"];

/// Smoothed progress of the element behind `node` through `range`.
#[hook]
pub fn use_scroll_progress(node: NodeRef, range: ScrollRange, spring: SpringConfig) -> f64 {
    let value = use_mut_ref(move || SpringValue::new(spring, 0.0));
    let progress = use_state_eq(|| 0.0);

    {
        let value = value.clone();
        let progress = progress.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let measure = {
                    let node = node.clone();
                    move || node.cast::<Element>().and_then(|element| measure_progress(&element, range))
                };

                if let Some(initial) = measure() {
                    value.borrow_mut().jump(initial);
                    progress.set(initial);
                }

                let listener = {
                    let value = value.clone();
                    WindowListener::new(SCROLL_EVENTS, move || {
                        if let Some(raw) = measure() {
                            value.borrow_mut().set_target(raw);
                        }
                    })
                };

                let frames = AnimationFrameLoop::start(move |dt| {
                    let mut value = value.borrow_mut();
                    if !value.is_at_rest() {
                        value.step(dt);
                        progress.set(value.position());
                    }
                });

                move || {
                    drop(frames);
                    drop(listener);
                }
            },
            node,
        );
    }

    *progress
}

/// Which way the last stage change went.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StageDirection {
    Forward,
    Backward,
}

impl StageDirection {
    pub fn of(previous: usize, index: usize) -> Self {
        if index < previous {
            StageDirection::Backward
        } else {
            StageDirection::Forward
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            StageDirection::Forward => "from-below",
            StageDirection::Backward => "from-above",
        }
    }
}

/// What the controller reports for one render: its stage list, the active
/// stage and the progress values.
#[derive(Clone, PartialEq, Debug)]
pub struct StageFrame {
    pub stages: StageSet,
    pub stage: Stage,
    pub snapshot: StageSnapshot,
}

impl StageFrame {
    pub fn of(controller: &ScrollStageController) -> Self {
        Self {
            stages: controller.stages().clone(),
            stage: controller.active_stage().clone(),
            snapshot: controller.snapshot(),
        }
    }

    fn from_change(stages: &StageSet, change: &StageChange<'_>) -> Self {
        Self {
            stages: stages.clone(),
            stage: change.stage.clone(),
            snapshot: StageSnapshot {
                index: change.index,
                raw_progress: change.raw_progress,
                smoothed_progress: change.smoothed_progress,
            },
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct StageView {
    pub frame: StageFrame,
    pub direction: StageDirection,
}

impl StageView {
    pub fn active(&self) -> &Stage {
        &self.frame.stage
    }
}

/// Drives a [`ScrollStageController`] from the page scroll while mounted.
///
/// The controller is built once from the first `stages`; everything rendered
/// comes back out of the controller, so the stage list and the active index
/// always agree.
#[hook]
pub fn use_scroll_stages(
    node: NodeRef,
    range: ScrollRange,
    stages: StageSet,
    spring: SpringConfig,
) -> Result<StageView, ConfigError> {
    let controller = use_mut_ref(move || ScrollStageController::with_stages(stages, spring));
    let frame = use_state_eq({
        let controller = controller.clone();
        move || {
            let built = controller.borrow();
            match &*built {
                Ok(built) => Ok(StageFrame::of(built)),
                Err(err) => Err(err.clone()),
            }
        }
    });
    let direction = use_state_eq(|| StageDirection::Forward);

    {
        let controller = controller.clone();
        let frame = frame.clone();
        let direction = direction.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let measure = {
                    let node = node.clone();
                    move || node.cast::<Element>().and_then(|element| measure_progress(&element, range))
                };

                if let Ok(built) = controller.borrow_mut().as_mut() {
                    let changed = frame.clone();
                    let stages = built.stages().clone();
                    built.subscribe(move |change| {
                        direction.set(StageDirection::of(change.previous, change.index));
                        changed.set(Ok(StageFrame::from_change(&stages, change)));
                    });
                    if let Some(initial) = measure() {
                        built.jump_to(initial);
                    }
                    frame.set(Ok(StageFrame::of(built)));
                }

                let listener = {
                    let controller = controller.clone();
                    WindowListener::new(SCROLL_EVENTS, move || {
                        if let (Some(raw), Ok(built)) = (measure(), controller.borrow_mut().as_mut()) {
                            built.on_scroll_progress_update(raw);
                        }
                    })
                };

                let frames = {
                    let controller = controller.clone();
                    AnimationFrameLoop::start(move |dt| {
                        if let Ok(built) = controller.borrow_mut().as_mut() {
                            if built.is_animating() {
                                built.tick(dt);
                                frame.set(Ok(StageFrame::of(built)));
                            }
                        }
                    })
                };

                move || {
                    drop(frames);
                    drop(listener);
                    if let Ok(built) = controller.borrow_mut().as_mut() {
                        built.stop();
                    }
                }
            },
            node,
        );
    }

    (*frame).clone().map(|frame| StageView { frame, direction: *direction })
}

#[derive(Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn css(&self) -> String {
        format!(
            "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg);",
            self.rotate_x, self.rotate_y
        )
    }
}

pub struct MouseTilt {
    pub tilt: Tilt,
    pub on_move: Callback<MouseEvent>,
    pub on_leave: Callback<MouseEvent>,
}

/// Springy rotation that leans toward the pointer, up to `max_degrees`.
#[hook]
pub fn use_mouse_tilt(max_degrees: f64) -> MouseTilt {
    let springs = use_mut_ref(|| (SpringValue::new(TILT_SPRING, 0.0), SpringValue::new(TILT_SPRING, 0.0)));
    let tilt = use_state_eq(Tilt::default);

    {
        let springs = springs.clone();
        let tilt = tilt.clone();
        use_effect_with_deps(
            move |_| {
                let frames = AnimationFrameLoop::start(move |dt| {
                    let mut springs = springs.borrow_mut();
                    let (x, y) = &mut *springs;
                    if !(x.is_at_rest() && y.is_at_rest()) {
                        x.step(dt);
                        y.step(dt);
                        tilt.set(Tilt { rotate_x: x.position(), rotate_y: y.position() });
                    }
                });
                move || drop(frames)
            },
            (),
        );
    }

    let on_move = {
        let springs = springs.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(rect) = e
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .map(|element| element.get_bounding_client_rect())
            else {
                return;
            };
            let dx = pointer_offset(e.client_x() as f64, rect.left(), rect.width());
            let dy = pointer_offset(e.client_y() as f64, rect.top(), rect.height());
            let mut springs = springs.borrow_mut();
            let (x, y) = &mut *springs;
            x.set_target(interpolate(dy, &[-0.5, 0.5], &[max_degrees, -max_degrees]));
            y.set_target(interpolate(dx, &[-0.5, 0.5], &[-max_degrees, max_degrees]));
        })
    };

    let on_leave = Callback::from(move |_: MouseEvent| {
        let mut springs = springs.borrow_mut();
        let (x, y) = &mut *springs;
        x.set_target(0.0);
        y.set_target(0.0);
    });

    MouseTilt { tilt: *tilt, on_move, on_leave }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::config::PERFORMANCE_SPRING;
    use crate::content::performance_stages;

    fn controller() -> ScrollStageController {
        let stages = StageSet::new(performance_stages().unwrap()).unwrap();
        ScrollStageController::with_stages(stages, PERFORMANCE_SPRING).unwrap()
    }

    #[test]
    fn frame_reads_the_controllers_active_stage() {
        let mut controller = controller();
        controller.jump_to(0.9);
        let frame = StageFrame::of(&controller);
        assert_eq!(&frame.stage, controller.active_stage());
        assert_eq!(frame.stage.title, "Intelligence");
        assert_eq!(frame.snapshot.index, 2);
        assert_eq!(frame.stages, *controller.stages());
    }

    #[test]
    fn frame_index_always_fits_its_own_stage_list() {
        let mut controller = controller();
        for raw in [0.0, 0.2, 0.34, 0.66, 0.67, 1.0] {
            controller.jump_to(raw);
            let frame = StageFrame::of(&controller);
            assert!(frame.snapshot.index < frame.stages.len(), "raw {raw}");
            assert_eq!(frame.stage, frame.stages[frame.snapshot.index], "raw {raw}");
        }
    }

    #[test]
    fn change_notifications_become_frames() {
        let mut controller = controller();
        let stages = controller.stages().clone();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            controller.subscribe(move |change| {
                let direction = StageDirection::of(change.previous, change.index);
                seen.borrow_mut().push((StageFrame::from_change(&stages, change), direction));
            });
        }

        controller.jump_to(0.5);
        controller.jump_to(0.1);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        let (up, up_direction) = &seen[0];
        assert_eq!(up.stage.title, "Precision");
        assert_eq!(up.snapshot.index, 1);
        assert_eq!(up.snapshot.raw_progress, 0.5);
        assert_eq!(up.snapshot.smoothed_progress, 0.5);
        assert_eq!(*up_direction, StageDirection::Forward);
        let (down, down_direction) = &seen[1];
        assert_eq!(down.stage.title, "Velocity");
        assert_eq!(*down_direction, StageDirection::Backward);
        assert_eq!(down_direction.class(), "from-above");
    }
}

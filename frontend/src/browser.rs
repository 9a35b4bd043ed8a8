use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

use crate::scroll::{clamped_section_progress, ScrollRange};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame` loop that calls back with the frame delta in
/// seconds. The loop is cancelled when this is dropped.
pub struct AnimationFrameLoop {
    window: Window,
    handle: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl AnimationFrameLoop {
    pub fn start<F>(mut on_frame: F) -> Option<Self>
    where
        F: FnMut(f64) + 'static,
    {
        let window = web_sys::window()?;
        let handle = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let frame_window = window.clone();
        let frame_handle = handle.clone();
        let frame_callback = callback.clone();
        let last_timestamp = Cell::new(None::<f64>);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            let dt = last_timestamp
                .replace(Some(timestamp))
                .map_or(0.0, |last| (timestamp - last) / 1000.0);
            on_frame(dt);
            // cleared on drop, which ends the loop
            if let Some(next) = frame_callback.borrow().as_ref() {
                frame_handle.set(frame_window.request_animation_frame(next.as_ref().unchecked_ref()).ok());
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(first) = callback.borrow().as_ref() {
            match window.request_animation_frame(first.as_ref().unchecked_ref()) {
                Ok(id) => handle.set(Some(id)),
                Err(err) => {
                    log::warn!("requestAnimationFrame unavailable: {:?}", err);
                    return None;
                }
            }
        }

        Some(Self { window, handle, callback })
    }
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.handle.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // breaks the closure -> Rc -> closure cycle
        self.callback.borrow_mut().take();
    }
}

/// Window event listener that unregisters itself on drop.
pub struct WindowListener {
    window: Window,
    events: &'static [&'static str],
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new<F>(events: &'static [&'static str], callback: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        for event in events {
            if let Err(err) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
                log::warn!("could not listen for {}: {:?}", event, err);
            }
        }
        Some(Self { window, events, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        for event in self.events {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}

pub fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

/// Progress of `element` through `range` at the current scroll position,
/// held to `[0, 1]`.
pub fn measure_progress(element: &Element, range: ScrollRange) -> Option<f64> {
    let rect = element.get_bounding_client_rect();
    clamped_section_progress(rect.top(), rect.height(), viewport_height()?, range)
}

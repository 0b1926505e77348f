use std::cell::{Cell, RefCell};
use std::rc::Rc;

use linktree_core::page::{NEW_CONTEXT_REL, NEW_CONTEXT_TARGET};
use linktree_core::Navigator;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;

/// Opens links through `window.open` with no opener and no referrer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open_in_new_context(&self, url: &str) {
        let Some(window) = window() else {
            log::error!("Cannot open {url}: no global `window`");
            return;
        };
        let features = NEW_CONTEXT_REL.replace(' ', ",");
        if let Err(e) =
            window.open_with_url_and_target_and_features(url, NEW_CONTEXT_TARGET, &features)
        {
            log::error!("Failed to open {url}: {:?}", e);
        }
    }
}

/// Run `on_frame` on every animation frame with the seconds elapsed since
/// the loop started, until `alive` goes false. The frame callback is
/// released on the first frame after that.
///
/// Fails when the page has no `window` or `performance`, in which case
/// nothing is scheduled.
pub fn start_animation_loop<F>(alive: Rc<Cell<bool>>, mut on_frame: F) -> Result<(), String>
where
    F: FnMut(f64) + 'static,
{
    let window = window().ok_or_else(|| "no global `window` exists".to_string())?;
    let started_at = window
        .performance()
        .ok_or_else(|| "performance API unavailable".to_string())?
        .now();

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let reschedule = frame.clone();
    let frame_window = window.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if !alive.get() {
            // Break the self-reference; the drop waits until this frame returns.
            if let Some(finished) = reschedule.borrow_mut().take() {
                spawn_local(async move {
                    drop(finished);
                });
            }
            return;
        }
        on_frame((timestamp - started_at) / 1000.0);

        if let Some(callback) = reschedule.borrow().as_ref() {
            if let Err(e) =
                frame_window.request_animation_frame(callback.as_ref().unchecked_ref())
            {
                log::error!("Failed to schedule animation frame: {:?}", e);
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let first = frame.borrow();
    let callback = first
        .as_ref()
        .ok_or_else(|| "animation callback missing".to_string())?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|e| format!("requestAnimationFrame failed: {e:?}"))?;

    Ok(())
}

//! Browser-only checks for the decorative animation loop.
//!
//! Run with: wasm-pack test --headless --firefox linktree-ui

#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use linktree_core::{rotation_at, Rotation};
use linktree_ui::start_animation_loop;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn animation_loop_applies_rotation_each_frame() {
    let alive = Rc::new(Cell::new(true));
    let frames: Rc<RefCell<Vec<(f64, Rotation)>>> = Rc::new(RefCell::new(Vec::new()));

    let recorded = frames.clone();
    let result = start_animation_loop(alive.clone(), move |elapsed| {
        recorded.borrow_mut().push((elapsed, rotation_at(elapsed)));
    });
    assert_eq!(result, Ok(()));

    TimeoutFuture::new(200).await;

    let frames = frames.borrow().clone();
    assert!(!frames.is_empty(), "no animation frames ran");
    let mut previous = 0.0;
    for (elapsed, rotation) in &frames {
        assert!(*elapsed >= previous, "clock went backwards: {elapsed} < {previous}");
        assert_eq!(*rotation, rotation_at(*elapsed));
        previous = *elapsed;
    }
    let (last_elapsed, last_rotation) = frames[frames.len() - 1];
    assert!(last_elapsed > 0.0);
    assert!(last_rotation.y > last_rotation.x);

    alive.set(false);
}

#[wasm_bindgen_test]
async fn stopped_loop_stops_calling_back() {
    let alive = Rc::new(Cell::new(true));
    let calls = Rc::new(Cell::new(0u32));

    let counter = calls.clone();
    start_animation_loop(alive.clone(), move |_| {
        counter.set(counter.get() + 1);
    })
    .unwrap();

    TimeoutFuture::new(100).await;
    alive.set(false);
    TimeoutFuture::new(50).await;
    let after_stop = calls.get();

    TimeoutFuture::new(150).await;
    assert_eq!(calls.get(), after_stop);
}

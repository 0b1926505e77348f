//! Rotating decorative background
//!
//! Purely cosmetic. If the browser cannot drive the animation the component
//! renders nothing and the rest of the page is unaffected.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use linktree_core::{rotation_at, AmbientScene, Rotation};

use crate::interop::start_animation_loop;

#[component]
pub fn AmbientCanvas(scene: AmbientScene) -> Element {
    let mut rotation = use_signal(Rotation::default);
    let mut animation_started = use_signal(|| false);
    let mut animation_failed = use_signal(|| false);
    let alive = use_hook(|| Rc::new(Cell::new(true)));

    {
        let alive = alive.clone();
        use_drop(move || {
            alive.set(false);
        });
    }

    use_effect(move || {
        if animation_started() {
            return;
        }
        animation_started.set(true);

        let result = start_animation_loop(alive.clone(), move |elapsed| {
            rotation.set(rotation_at(elapsed));
        });
        if let Err(e) = result {
            dioxus_logger::tracing::warn!("Ambient background disabled: {}", e);
            animation_failed.set(true);
        }
    });

    if animation_failed() {
        return rsx! {};
    }

    let transform = rotation.read().css_transform();
    let size = scene.scale * 3.0;
    let ring = size / 10.0;
    let color = &scene.color;
    let emissive = &scene.emissive;

    rsx! {
        div {
            class: "ambient-canvas",
            aria_hidden: "true",

            div {
                class: "ambient-object",
                style: "width: {size}vmin; height: {size}vmin; border-width: {ring}vmin; border-color: {color}; box-shadow: 0 0 120px {emissive}, inset 0 0 80px {emissive}; opacity: 0.6; transform: {transform};",
            }
        }
    }
}

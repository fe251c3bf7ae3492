//! Pointer and touch wiring for dragging images around the grid canvas.

use gridcollage_core::{Point, Session};
use leptos::*;
use leptos_use::use_event_listener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlCanvasElement, PointerEvent, TouchEvent};

use crate::rendering::{canvas_point, BitmapImage};

/// Handle returned by the drag interaction hook.
pub struct DragHandle {
    /// True while an image follows the pointer
    pub is_dragging: Signal<bool>,
}

/// Attach drag handlers to `canvas_ref`.
///
/// Every gesture is forwarded to `session`; `redraw` is notified whenever the
/// picture changed. Mouse and pen use pointer events with pointer capture,
/// touch uses non-passive touch events so the page does not scroll mid-drag.
pub fn use_drag_interaction(
    canvas_ref: NodeRef<leptos::html::Canvas>,
    session: StoredValue<Session<BitmapImage>>,
    redraw: Trigger,
) -> DragHandle {
    // Drag state lives only in the session; resizes and new images cancel it there
    let session_dragging =
        move || session.try_with_value(Session::is_dragging).unwrap_or(false);
    let is_dragging = create_memo(move |_| {
        redraw.track();
        session_dragging()
    });

    let to_canvas = move |client_x: f64, client_y: f64| -> Option<Point> {
        let canvas = canvas_ref.get_untracked()?;
        Some(canvas_point(&canvas, client_x, client_y))
    };

    let begin = move |point: Point| -> bool {
        let started = session
            .try_update_value(|s| s.pointer_down(point))
            .unwrap_or(false);
        if started {
            redraw.notify();
        }
        started
    };

    let follow = move |point: Point| {
        if !session_dragging() {
            return;
        }
        let moved = session
            .try_update_value(|s| s.pointer_move(point))
            .unwrap_or(false);
        if moved {
            redraw.notify();
        }
    };

    let release = move || {
        if !session_dragging() {
            return;
        }
        let outcome = session.try_update_value(|s| s.pointer_up()).flatten();
        log::debug!("Drag released: {:?}", outcome);
        redraw.notify();
    };

    let abort = move || {
        let cancelled = session
            .try_update_value(|s| s.cancel_drag())
            .unwrap_or(false);
        if cancelled {
            redraw.notify();
        }
    };

    // Mouse and pen
    let _ = use_event_listener(canvas_ref, ev::pointerdown, move |e: PointerEvent| {
        if e.pointer_type() == "touch" || e.button() != 0 {
            return;
        }
        let Some(point) = to_canvas(e.client_x() as f64, e.client_y() as f64) else {
            return;
        };
        if begin(point) {
            e.prevent_default();
            if let Some(canvas) = canvas_ref.get_untracked() {
                let _ = canvas.set_pointer_capture(e.pointer_id());
            }
        }
    });

    let _ = use_event_listener(canvas_ref, ev::pointermove, move |e: PointerEvent| {
        if e.pointer_type() == "touch" {
            return;
        }
        if let Some(point) = to_canvas(e.client_x() as f64, e.client_y() as f64) {
            follow(point);
        }
    });

    let _ = use_event_listener(canvas_ref, ev::pointerup, move |e: PointerEvent| {
        if e.pointer_type() == "touch" {
            return;
        }
        if let Some(canvas) = canvas_ref.get_untracked() {
            let _ = canvas.release_pointer_capture(e.pointer_id());
        }
        release();
    });

    let _ = use_event_listener(canvas_ref, ev::pointercancel, move |e: PointerEvent| {
        if e.pointer_type() != "touch" {
            abort();
        }
    });

    // Touch
    let on_touch_start = move |e: TouchEvent| {
        let Some(touch) = e.touches().get(0) else {
            return;
        };
        let Some(point) = to_canvas(touch.client_x() as f64, touch.client_y() as f64) else {
            return;
        };
        if begin(point) {
            e.prevent_default();
        }
    };

    let on_touch_move = move |e: TouchEvent| {
        if !session_dragging() {
            return;
        }
        e.prevent_default();
        let Some(touch) = e.touches().get(0) else {
            return;
        };
        if let Some(point) = to_canvas(touch.client_x() as f64, touch.client_y() as f64) {
            follow(point);
        }
    };

    let on_touch_end = move |e: TouchEvent| {
        if session_dragging() {
            e.prevent_default();
        }
        release();
    };

    let on_touch_cancel = move |_: TouchEvent| abort();

    create_effect(move |_| {
        let Some(canvas_el) = canvas_ref.get() else {
            return;
        };
        let canvas: &HtmlCanvasElement = &canvas_el;

        add_touch_listener(canvas, "touchstart", on_touch_start);
        add_touch_listener(canvas, "touchmove", on_touch_move);
        add_touch_listener(canvas, "touchend", on_touch_end);
        add_touch_listener(canvas, "touchcancel", on_touch_cancel);
    });

    DragHandle {
        is_dragging: is_dragging.into(),
    }
}

/// Register a non-passive touch listener that lives as long as the page.
fn add_touch_listener<F>(canvas: &HtmlCanvasElement, event_name: &str, handler: F)
where
    F: Fn(TouchEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn(TouchEvent)>);

    let options = AddEventListenerOptions::new();
    options.set_passive(false);

    if let Err(e) = canvas.add_event_listener_with_callback_and_add_event_listener_options(
        event_name,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::error!("Failed to add {} listener: {:?}", event_name, e);
    }
    closure.forget();
}

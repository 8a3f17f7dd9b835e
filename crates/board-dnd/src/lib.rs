//! Board DragDrop Utilities
//!
//! Mouse-event drag-and-drop for task cards in Leptos.
//! Uses movement threshold to distinguish click from drag.
//!
//! A gesture carries the dragged card's id, its index within its category
//! column, and the column it started in. Hovering another card in the same
//! column reorders immediately (and the carried index follows, so hovers
//! compose); hovering a foreign column only arms it as the drop target.
//! Releasing with no target armed just ends the gesture - reorders already
//! applied during hover stay in place.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// The card being dragged, as picked up on mousedown
#[derive(Clone, Debug, PartialEq)]
pub struct DragItem {
    /// Task id
    pub id: String,
    /// Index within the source category's column
    pub index: usize,
    /// Category column the drag started in
    pub category: String,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<DragItem>>,
    pub dragging_write: WriteSignal<Option<DragItem>>,
    /// Foreign column armed as drop target, if any
    pub drop_category_read: ReadSignal<Option<String>>,
    pub drop_category_write: WriteSignal<Option<String>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending card (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragItem>>,
    pub pending_write: WriteSignal<Option<DragItem>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<DragItem>);
    let (drop_category_read, drop_category_write) = signal(None::<String>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<DragItem>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_category_read,
        drop_category_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Decide whether hovering `hover_index` in `hover_category` reorders the
/// carried card. Returns `(from, to)` within that category's column, or
/// `None` when the hover is over a foreign column or the card itself.
pub fn hover_reorder(drag: &DragItem, hover_index: usize, hover_category: &str) -> Option<(usize, usize)> {
    if drag.category != hover_category || drag.index == hover_index {
        return None;
    }
    Some((drag.index, hover_index))
}

/// What a document mouseup should do, given the gesture state
#[derive(Clone, Debug, PartialEq)]
pub enum MouseupAction {
    /// No gesture was in progress; only the pending pickup is cleared
    ClearPending,
    /// A drag ended with no foreign column armed
    EndDrag,
    /// A drag ended over a foreign column
    Drop { id: String, category: String },
}

/// Classify a document mouseup. Only a mouseup that ends an actual drag
/// may raise `drag_just_ended`; a plain click's mouseup must leave the
/// flag alone or the click dispatched right after it would be swallowed.
pub fn mouseup_action(dragging: Option<DragItem>, drop_category: Option<String>) -> MouseupAction {
    match (dragging, drop_category) {
        (Some(drag), Some(category)) => MouseupAction::Drop { id: drag.id, category },
        (Some(_), None) => MouseupAction::EndDrag,
        (None, _) => MouseupAction::ClearPending,
    }
}

/// End drag operation, raising `drag_just_ended` for 100 ms so clicks
/// retargeted from the gesture can be told apart from real ones
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_category_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable cards
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, item: DragItem) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Record pending drag with position
            dnd.pending_write.set(Some(item.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let start_x = dnd.start_x_read.get_untracked();
            let start_y = dnd.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for cards. A hover over a card in the same
/// column commits the reorder immediately and updates the carried index so
/// the next hover composes against the new position.
pub fn make_on_card_mouseenter(
    dnd: DndSignals,
    hover_index: usize,
    category: String,
    on_reorder: Callback<(usize, usize, String)>,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        let Some(drag) = dnd.dragging_read.get_untracked() else { return };
        if let Some((from, to)) = hover_reorder(&drag, hover_index, &category) {
            on_reorder.run((from, to, category.clone()));
            dnd.dragging_write.update(|d| {
                if let Some(d) = d {
                    d.index = to;
                }
            });
        }
    }
}

/// Create mouseenter handler for columns (cross-category drop target)
pub fn make_on_column_mouseenter(dnd: DndSignals, category: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(drag) = dnd.dragging_read.get_untracked() {
            if drag.category != category {
                dnd.drop_category_write.set(Some(category.clone()));
            }
        }
    }
}

/// Create mouseleave handler for columns
pub fn make_on_column_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_category_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
/// `on_drop` fires only for a cross-column drop; releasing anywhere else
/// ends the gesture with whatever hover reorders already applied.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(String, String) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_category = dnd.drop_category_read.get_untracked();

        match mouseup_action(dragging, drop_category) {
            MouseupAction::Drop { id, category } => {
                end_drag(&dnd);
                on_drop(id, category);
            }
            MouseupAction::EndDrag => {
                // No foreign column armed - hover reorders already
                // applied stay in place
                end_drag(&dnd);
            }
            MouseupAction::ClearPending => {
                // Plain click, no drag ever started: don't raise
                // drag_just_ended, the click that follows this mouseup
                // must fire naturally on the element
                dnd.pending_write.set(None);
                dnd.drop_category_write.set(None);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(index: usize, category: &str) -> DragItem {
        DragItem {
            id: "t1".to_string(),
            index,
            category: category.to_string(),
        }
    }

    #[test]
    fn hover_in_same_column_reorders() {
        assert_eq!(hover_reorder(&drag(0, "Work"), 2, "Work"), Some((0, 2)));
        assert_eq!(hover_reorder(&drag(2, "Work"), 0, "Work"), Some((2, 0)));
    }

    #[test]
    fn hover_over_self_is_ignored() {
        assert_eq!(hover_reorder(&drag(1, "Work"), 1, "Work"), None);
    }

    #[test]
    fn hover_in_foreign_column_does_not_reorder() {
        assert_eq!(hover_reorder(&drag(0, "Work"), 2, "Personal"), None);
    }

    #[test]
    fn mouseup_without_gesture_only_clears_pending() {
        // A header click goes mousedown -> mouseup -> click with no drag
        // in between; the mouseup must not count as an ended drag, or the
        // drag_just_ended flag would swallow the click that follows.
        assert_eq!(mouseup_action(None, None), MouseupAction::ClearPending);
        assert_eq!(
            mouseup_action(None, Some("Personal".to_string())),
            MouseupAction::ClearPending
        );
    }

    #[test]
    fn mouseup_mid_gesture_without_target_ends_the_drag() {
        assert_eq!(mouseup_action(Some(drag(1, "Work")), None), MouseupAction::EndDrag);
    }

    #[test]
    fn mouseup_over_foreign_column_drops() {
        assert_eq!(
            mouseup_action(Some(drag(0, "Work")), Some("Urgent".to_string())),
            MouseupAction::Drop {
                id: "t1".to_string(),
                category: "Urgent".to_string(),
            }
        );
    }

    #[test]
    fn consecutive_hovers_compose_through_carried_index() {
        // Card picked up at 0, hovered over 2: it now sits at 2, so the
        // caller updates the carried index before the next hover.
        let mut d = drag(0, "Work");
        let (_, to) = hover_reorder(&d, 2, "Work").unwrap();
        d.index = to;
        assert_eq!(hover_reorder(&d, 1, "Work"), Some((2, 1)));
    }
}

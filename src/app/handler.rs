//! Input handling — maps key/mouse events to state mutations.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::state::AppState;
use crate::content;
use crate::ui::page::trigger_hit_boxes;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        // Keyboard paging goes through the same wheel path (and the same
        // cooldown) as the mouse wheel.
        KeyCode::Down | KeyCode::PageDown | KeyCode::Char('j') => page(state, 1, now),
        KeyCode::Up | KeyCode::PageUp | KeyCode::Char('k') => page(state, -1, now),
        KeyCode::Home => state.set_offset(0, now),
        KeyCode::Char('p') => state.activate_panel(content::PROJECTS_TEXT, now),
        KeyCode::Char('a') => state.activate_panel(content::ABOUT_TEXT, now),
        _ => {}
    }
}

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        // The wheel is the page's only scroll path — one section per
        // qualifying event, throttled inside the navigator.
        MouseEventKind::ScrollDown => page(state, 1, now),
        MouseEventKind::ScrollUp => page(state, -1, now),

        MouseEventKind::Down(MouseButton::Left) => {
            let boxes = trigger_hit_boxes(state.page_area, state.offset, &state.stage, now);
            for (id, rect) in boxes {
                if contains(rect, mouse.column, mouse.row) {
                    state.activate_panel(id, now);
                    return;
                }
            }
        }

        // Dragging over the page is the touch-move analog: it only checks
        // the end-of-page band, with no debounce.
        MouseEventKind::Drag(MouseButton::Left) => {
            state.navigator.on_drag(state.geometry());
        }

        _ => {}
    }
}

fn page(state: &mut AppState, delta: i32, now: Instant) {
    let geo = state.geometry();
    if let Some(offset) = state.navigator.on_wheel(geo, delta, now) {
        state.set_offset(offset, now);
    }
}

fn contains(rect: ratatui::layout::Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::layout::Rect;

    use super::*;
    use crate::content::SECTIONS;
    use crate::core::panel::Direction;

    fn sized_state() -> AppState {
        let mut state = AppState::new();
        state.page_area = Rect::new(0, 3, 80, 40);
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn scroll_down(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn wheel_pages_and_respects_the_cooldown() {
        let mut state = sized_state();
        let t0 = Instant::now();

        handle_mouse(&mut state, scroll_down(10, 10), t0);
        assert_eq!(state.offset, 40);
        // Within the 600ms window nothing moves.
        handle_mouse(&mut state, scroll_down(10, 10), t0 + Duration::from_millis(200));
        assert_eq!(state.offset, 40);
        handle_mouse(&mut state, scroll_down(10, 10), t0 + Duration::from_millis(600));
        assert_eq!(state.offset, 80);
    }

    #[test]
    fn paging_clamps_at_the_last_section() {
        let mut state = sized_state();
        let mut now = Instant::now();
        let last = (SECTIONS.len() as u16 - 1) * 40;

        for _ in 0..SECTIONS.len() + 3 {
            handle_key(&mut state, key(KeyCode::Char('j')), now);
            now += Duration::from_millis(600);
        }
        assert_eq!(state.offset, last);
    }

    #[test]
    fn clicking_the_projects_trigger_toggles_the_panel() {
        let mut state = sized_state();
        let t0 = Instant::now();

        let boxes = trigger_hit_boxes(state.page_area, state.offset, &state.stage, t0);
        let (_, rect) = boxes
            .iter()
            .find(|(id, _)| *id == content::PROJECTS_TEXT)
            .copied()
            .unwrap();

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x,
            row: rect.y,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut state, click, t0);
        assert!(state.panels[0].busy());
        assert!(!state.stage.get(content::ABOUT_TEXT).unwrap().visible);
    }

    #[test]
    fn clicking_empty_space_does_nothing() {
        let mut state = sized_state();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 79,
            row: 42,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut state, click, Instant::now());
        assert!(!state.panels[0].busy());
        assert!(!state.panels[1].busy());
    }

    #[test]
    fn hotkeys_drive_the_panels_through_the_same_state_machine() {
        let mut state = sized_state();
        let t0 = Instant::now();

        handle_key(&mut state, key(KeyCode::Char('p')), t0);
        assert!(state.panels[0].busy());
        assert_eq!(state.panels[0].direction(), Direction::ForwardShown);
        // Rapid re-activation is dropped while the toggle is in flight.
        handle_key(&mut state, key(KeyCode::Char('p')), t0 + Duration::from_millis(100));
        assert!(state.panels[0].busy());
    }
}

//! Translation of raw terminal input into [`AppEvent`]s.
//!
//! - `r`, `Enter`, `Space` → refresh
//! - `q`, `Esc`, `Ctrl-C` → quit
//! - left click on the button → refresh
//! - pointer entering / leaving the gift → hover on / off

use crate::app::AppEvent;
use crate::ui::view::HitAreas;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub fn key_to_app_event(key: KeyEvent) -> AppEvent {
    if key.kind != KeyEventKind::Press {
        return AppEvent::None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,
        KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
        KeyCode::Char('r') | KeyCode::Char(' ') | KeyCode::Enter => AppEvent::Refresh,
        _ => AppEvent::None,
    }
}

/// `gift_open` is the current hover flag, so only edges produce events.
pub fn mouse_to_app_event(mouse: MouseEvent, hits: &HitAreas, gift_open: bool) -> AppEvent {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if hits.on_button(mouse.column, mouse.row) => {
            AppEvent::Refresh
        }
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let over_gift = hits.on_gift(mouse.column, mouse.row);
            if over_gift != gift_open {
                AppEvent::GiftHover(over_gift)
            } else {
                AppEvent::None
            }
        }
        _ => AppEvent::None,
    }
}

pub mod input;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;
pub mod view;

pub use input::{key_to_app_event, mouse_to_app_event};
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
pub use view::{render_view, HitAreas};

pub mod app;
pub mod event;
pub mod render_state;
pub mod state;

pub use app::App;
pub use event::AppEvent;
pub use render_state::RenderState;
pub use state::{AttemptId, WordState, FETCH_FAILED_MESSAGE};

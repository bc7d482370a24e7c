use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use super::event::AppEvent;
use super::render_state::RenderState;
use super::state::{AttemptId, WordState};
use crate::words::{FallbackWords, WordSource};

/// Default length of the word transition animation.
pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(500);

/// The word generator view: owns the state and drives fetches.
///
/// Fetches run on the tokio runtime behind `runtime`; their results come
/// back as [`AppEvent`]s which the UI thread applies via [`App::drain_events`].
pub struct App {
    state: WordState,
    should_quit: bool,
    source: Arc<dyn WordSource>,
    fallback: FallbackWords,
    animation: Duration,
    runtime: Handle,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    rng: StdRng,
}

impl App {
    pub fn new(
        source: Arc<dyn WordSource>,
        fallback: FallbackWords,
        animation: Duration,
        runtime: Handle,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: WordState::new(),
            should_quit: false,
            source,
            fallback,
            animation,
            runtime,
            events_tx,
            events_rx,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the random source used for fallback picks.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn state(&self) -> &WordState {
        &self.state
    }

    pub fn fallback(&self) -> &FallbackWords {
        &self.fallback
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Fetch issued when the view is first displayed.
    pub fn mount(&mut self) -> AttemptId {
        let attempt = self.state.begin_attempt();
        debug!(attempt, "initial fetch");
        self.spawn_fetch(attempt);
        attempt
    }

    /// User-initiated refresh. Returns `None` while a fetch is in flight.
    pub fn refresh(&mut self) -> Option<AttemptId> {
        let attempt = self.state.request_refresh()?;
        debug!(attempt, "refresh requested");
        self.spawn_fetch(attempt);
        Some(attempt)
    }

    fn spawn_fetch(&self, attempt: AttemptId) {
        let source = Arc::clone(&self.source);
        let tx = self.events_tx.clone();

        self.runtime.spawn(async move {
            let outcome = source.fetch_word().await;
            // The receiver only goes away when the view is torn down.
            let _ = tx.send(AppEvent::FetchFinished { attempt, outcome });
        });
    }

    /// The delay counts from the moment loading was cleared on this thread.
    fn spawn_animation_timer(&self, attempt: AttemptId) {
        let tx = self.events_tx.clone();
        let animation = self.animation;

        self.runtime.spawn(async move {
            tokio::time::sleep(animation).await;
            let _ = tx.send(AppEvent::AnimationElapsed(attempt));
        });
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Refresh => {
                if self.refresh().is_none() {
                    debug!("refresh ignored while loading");
                }
            }
            AppEvent::FetchFinished { attempt, outcome } => {
                let failure = outcome.as_ref().err().cloned();
                let word = self
                    .state
                    .complete_attempt(outcome, &self.fallback, &mut self.rng);
                match failure {
                    None => info!(attempt, word, "word fetched"),
                    Some(err) => warn!(
                        attempt,
                        error = %err,
                        fallback = word,
                        "word source unavailable, using fallback"
                    ),
                }
                self.spawn_animation_timer(attempt);
            }
            AppEvent::AnimationElapsed(attempt) => {
                self.state.finish_animation(attempt);
            }
            AppEvent::GiftHover(open) => {
                self.state.set_gift_open(open);
            }
            AppEvent::Quit => {
                self.should_quit = true;
            }
            AppEvent::None => {}
        }
    }

    /// Apply every completion that has arrived so far without blocking.
    pub fn drain_events(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.events_rx.try_recv() {
                Ok(event) => {
                    self.handle_event(event);
                    applied += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        applied
    }

    /// Wait for the next background event and apply it. Returns the event.
    pub async fn process_next_event(&mut self) -> Option<AppEvent> {
        let event = self.events_rx.recv().await?;
        self.handle_event(event.clone());
        Some(event)
    }

    pub fn get_render_state(&self) -> RenderState {
        RenderState::from_word_state(&self.state)
    }
}

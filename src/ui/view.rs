use crate::app::RenderState;
use crate::ui::theme::colors;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const GIFT_CLOSED: [&str; 4] = [" __\\/__ ", "|______|", "|  ||  |", "|__||__|"];
const GIFT_OPEN: [&str; 4] = [" \\_\\/_/ ", "  ~~~~  ", "|  ||  |", "|__||__|"];

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const PINEAPPLE: &str = "🍍";

/// (x %, y %, bounce period in ticks, phase in ticks)
const PINEAPPLES: [(u16, u16, u64, u64); 8] = [
    (5, 8, 30, 0),
    (85, 18, 40, 5),
    (10, 80, 35, 10),
    (78, 70, 45, 15),
    (3, 50, 38, 20),
    (92, 33, 42, 25),
    (25, 75, 33, 8),
    (66, 25, 48, 18),
];

const CONTENT_WIDTH: u16 = 70;
const CARD_HEIGHT: u16 = 11;

/// Screen regions the mouse can interact with, as of the last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub gift: Rect,
    pub button: Rect,
}

impl HitAreas {
    pub fn on_gift(&self, column: u16, row: u16) -> bool {
        self.gift.contains(Position::new(column, row))
    }

    pub fn on_button(&self, column: u16, row: u16) -> bool {
        self.button.contains(Position::new(column, row))
    }
}

/// Draw the whole word generator view. `tick` drives the spinner and the
/// floating background.
pub fn render_view(frame: &mut Frame, state: &RenderState, tick: u64) -> HitAreas {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        area,
    );

    let [body, help] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let [column] = Layout::horizontal([Constraint::Max(CONTENT_WIDTH)])
        .flex(Flex::Center)
        .areas(body);

    render_background(frame, body, column, tick);

    let [org, brand, _, gift, _, title, subtitle, _, card, _, tagline, powered] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(GIFT_CLOSED.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(column);

    frame.render_widget(
        centered_text("IT - Digital Applications", Style::default().fg(colors::dimmed())),
        org,
    );
    frame.render_widget(
        centered_text(
            "Dole Sunshine Philippines",
            Style::default()
                .fg(colors::highlight())
                .add_modifier(Modifier::BOLD),
        ),
        brand,
    );

    let gift_area = render_gift(frame, gift, state.gift_open);

    frame.render_widget(
        centered_text(
            "Something Something Generator",
            Style::default()
                .fg(colors::text())
                .add_modifier(Modifier::BOLD),
        ),
        title,
    );
    frame.render_widget(
        centered_text(
            "Get something something gift ideas",
            Style::default().fg(colors::dimmed()),
        ),
        subtitle,
    );

    let button_area = render_card(frame, card, state, tick);

    frame.render_widget(
        centered_text(
            "Perfect for weekly gift exchanges, Secret Santa, or just for fun!",
            Style::default().fg(colors::dimmed()),
        ),
        tagline,
    );
    frame.render_widget(
        centered_text(
            "Powered by Random Word API (https://random-word-api.herokuapp.com/)",
            Style::default().fg(colors::accent()),
        ),
        powered,
    );

    frame.render_widget(render_help_line(), help);

    HitAreas {
        gift: gift_area,
        button: button_area,
    }
}

fn centered_text(text: &'static str, style: Style) -> Paragraph<'static> {
    Paragraph::new(text).alignment(Alignment::Center).style(style)
}

/// Returns the area actually covered by the gift art.
fn render_gift(frame: &mut Frame, area: Rect, open: bool) -> Rect {
    let art = if open { GIFT_OPEN } else { GIFT_CLOSED };
    let width = art.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
    let target = centered_rect(width, art.len() as u16, area);

    let color = if open {
        colors::highlight()
    } else {
        colors::accent()
    };
    let lines: Vec<Line> = art
        .iter()
        .map(|l| Line::styled(*l, Style::default().fg(color)))
        .collect();
    frame.render_widget(Paragraph::new(lines), target);
    target
}

/// Returns the button area.
fn render_card(frame: &mut Frame, area: Rect, state: &RenderState, tick: u64) -> Rect {
    let card = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::accent()));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let [word, _, error, button, powered] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(render_word_line(state, tick), word);
    if let Some(message) = &state.error {
        frame.render_widget(render_error_banner(message), error);
    }
    frame.render_widget(render_button(state), button);
    frame.render_widget(
        centered_text(
            "Powered by Random Words API",
            Style::default().fg(colors::dimmed()),
        ),
        powered,
    );

    button
}

pub fn render_word_line(state: &RenderState, tick: u64) -> Paragraph<'static> {
    let lead = Span::styled("Something ", Style::default().fg(colors::dimmed()));

    let word = if state.loading {
        let frame = SPINNER[(tick as usize) % SPINNER.len()];
        Span::styled(frame, Style::default().fg(colors::accent()))
    } else if state.animating {
        // Hidden during the transition; keeps its width so the line doesn't shift.
        Span::raw(" ".repeat(state.word.width()))
    } else {
        Span::styled(
            state.word.clone(),
            Style::default()
                .fg(colors::accent())
                .add_modifier(Modifier::BOLD),
        )
    };

    Paragraph::new(Line::from(vec![lead, word])).alignment(Alignment::Center)
}

pub fn render_error_banner(message: &str) -> Paragraph<'static> {
    Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::error()))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::highlight())),
        )
}

pub fn render_button(state: &RenderState) -> Paragraph<'static> {
    let style = if state.button_enabled() {
        Style::default()
            .fg(colors::background())
            .bg(colors::highlight())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::dimmed())
    };

    Paragraph::new(state.button_label())
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::bordered().border_type(BorderType::Rounded))
}

fn render_help_line() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("r", Style::default().fg(colors::accent())),
        Span::styled(" new word  ", Style::default().fg(colors::dimmed())),
        Span::styled("q", Style::default().fg(colors::accent())),
        Span::styled(" quit", Style::default().fg(colors::dimmed())),
    ]))
    .alignment(Alignment::Center)
}

/// Scatter bouncing pineapples over `area`, keeping clear of `content`.
fn render_background(frame: &mut Frame, area: Rect, content: Rect, tick: u64) {
    let glyph_width = PINEAPPLE.width() as u16;
    let style = Style::default().fg(colors::dimmed());

    for (x_pct, y_pct, period, phase) in PINEAPPLES {
        let x = area.x + (u32::from(area.width) * u32::from(x_pct) / 100) as u16;
        let base_y = area.y + (u32::from(area.height) * u32::from(y_pct) / 100) as u16;
        let lifted = ((tick + phase) / (period / 2).max(1)) % 2 == 1;
        let y = if lifted {
            base_y.saturating_sub(1).max(area.y)
        } else {
            base_y
        };

        if x + glyph_width > area.right() || y >= area.bottom() {
            continue;
        }
        let overlaps = (x..x + glyph_width).any(|cx| content.contains(Position::new(cx, y)));
        if overlaps {
            continue;
        }
        frame.buffer_mut().set_string(x, y, PINEAPPLE, style);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_state::{BUTTON_IDLE, BUTTON_LOADING, PLACEHOLDER_WORD};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn state() -> RenderState {
        RenderState {
            word: PLACEHOLDER_WORD.to_string(),
            loading: false,
            animating: false,
            error: None,
            gift_open: false,
        }
    }

    fn draw(state: &RenderState, width: u16, height: u16) -> (Buffer, HitAreas) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut hits = HitAreas::default();
        terminal
            .draw(|frame| {
                hits = render_view(frame, state, 0);
            })
            .unwrap();
        (terminal.backend().buffer().clone(), hits)
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (area.y..area.bottom())
            .map(|y| {
                (area.x..area.right())
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    fn screen_contains(buffer: &Buffer, needle: &str) -> bool {
        rows(buffer).iter().any(|row| row.contains(needle))
    }

    #[test]
    fn test_idle_view_shows_placeholder_and_button() {
        let (buffer, _) = draw(&state(), 80, 40);
        assert!(screen_contains(&buffer, "Something Something Generator"));
        assert!(screen_contains(&buffer, "Something ___"));
        assert!(screen_contains(&buffer, BUTTON_IDLE));
    }

    #[test]
    fn test_loading_view_changes_button_label() {
        let mut s = state();
        s.loading = true;
        let (buffer, _) = draw(&s, 80, 40);
        assert!(screen_contains(&buffer, BUTTON_LOADING));
        assert!(!screen_contains(&buffer, "Something ___"));
    }

    #[test]
    fn test_error_banner_only_when_set() {
        let (buffer, _) = draw(&state(), 80, 40);
        assert!(!screen_contains(&buffer, "Failed to fetch word"));

        let mut s = state();
        s.error = Some("Failed to fetch word. Please try again.".to_string());
        s.word = "cozy".to_string();
        let (buffer, _) = draw(&s, 80, 40);
        assert!(screen_contains(&buffer, "Failed to fetch word. Please try again."));
        assert!(screen_contains(&buffer, "Something cozy"));
    }

    #[test]
    fn test_word_hidden_while_animating() {
        let mut s = state();
        s.word = "mysterious".to_string();
        s.animating = true;
        let (buffer, _) = draw(&s, 80, 40);
        assert!(!screen_contains(&buffer, "mysterious"));

        s.animating = false;
        let (buffer, _) = draw(&s, 80, 40);
        assert!(screen_contains(&buffer, "Something mysterious"));
    }

    #[test]
    fn test_footer_links_word_api() {
        let (buffer, _) = draw(&state(), 80, 40);
        assert!(screen_contains(
            &buffer,
            "Random Word API (https://random-word-api.herokuapp.com/)"
        ));
    }

    #[test]
    fn test_gift_art_follows_hover_flag() {
        let (closed, _) = draw(&state(), 80, 40);
        assert!(screen_contains(&closed, GIFT_CLOSED[1]));

        let mut s = state();
        s.gift_open = true;
        let (open, _) = draw(&s, 80, 40);
        assert!(screen_contains(&open, GIFT_OPEN[1]));
        assert!(!screen_contains(&open, GIFT_CLOSED[1]));
    }

    #[test]
    fn test_hit_areas_cover_button_and_gift() {
        let (buffer, hits) = draw(&state(), 80, 40);
        assert_eq!(hits.gift.width, 8);
        assert_eq!(hits.gift.height, 4);
        assert_eq!(hits.button.height, 3);

        let row = hits.button.y + 1;
        let text: String = (hits.button.x..hits.button.right())
            .map(|x| buffer[(x, row)].symbol().to_string())
            .collect();
        assert!(text.contains(BUTTON_IDLE));

        assert!(hits.on_button(hits.button.x + 1, row));
        assert!(hits.on_gift(hits.gift.x, hits.gift.y));
        assert!(!hits.on_gift(0, 0));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let (_, hits) = draw(&state(), 10, 5);
        assert!(hits.gift.width <= 10);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(2, 2, 6, 3);
        let rect = centered_rect(10, 10, area);
        assert_eq!(rect, area);
        assert_eq!(centered_rect(2, 1, area), Rect::new(4, 3, 2, 1));
    }
}

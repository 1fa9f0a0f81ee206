//! Terminal rendering of the browse and now-playing screens.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::player::Player;
use crate::session::{Direction as SkipDirection, Mode, Session};

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;
/// Top and bottom border of the list block.
const LIST_BORDERS: u16 = 2;

const LABEL: Color = Color::Green;
const VALUE: Color = Color::Rgb(255, 165, 0);
const DIRECTORY: Color = Color::Cyan;

const BROWSE_CONTROLS: &str =
    "[↑/↓] move | [L1/R1] ±10 | [←/→] prev/next track | [A] open/play | [B] up | [Select] quit";
const PLAYING_CONTROLS: &str =
    "[B] stop | [←/→ L2/R2] prev/next | [Start] pause | [Y] loop | [Guide] screen | [Select] quit";

/// Number of list rows that fit in a terminal `height` rows tall.
pub fn list_rows(height: u16) -> usize {
    height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT + LIST_BORDERS) as usize
}

/// Format whole seconds as `MM:SS`; minutes keep growing past 99.
pub fn format_mmss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Render the screen for the session's current mode.
pub fn draw<P: Player>(frame: &mut Frame, session: &Session<P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.area());

    let controls = match session.mode() {
        Mode::Browsing => {
            draw_browse(frame, session, chunks[0], chunks[1]);
            BROWSE_CONTROLS
        }
        Mode::NowPlaying => {
            draw_now_playing(frame, session, chunks[0], chunks[1]);
            PLAYING_CONTROLS
        }
    };

    let footer = Paragraph::new(controls)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[2]);
}

fn draw_browse<P: Player>(frame: &mut Frame, session: &Session<P>, header: Rect, body: Rect) {
    let catalog = session.catalog();

    let title = Paragraph::new(format!("Directory: {}", catalog.current_dir().display()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" gsf-selector ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(title, header);

    let block = Block::default().borders(Borders::ALL).title(" library ");
    if catalog.is_empty() {
        let empty = Paragraph::new("No items found")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, body);
        return;
    }

    // Only the visible window is built; the offset was refreshed for this size.
    let rows = body.height.saturating_sub(LIST_BORDERS) as usize;
    let start = catalog.scroll_offset();
    let items: Vec<ListItem> = catalog
        .entries()
        .iter()
        .enumerate()
        .skip(start)
        .take(rows)
        .map(|(idx, entry)| {
            let mut style = if entry.is_dir {
                Style::default().fg(DIRECTORY)
            } else {
                Style::default()
            };
            if idx == catalog.selected() {
                style = style.fg(Color::Yellow).add_modifier(Modifier::REVERSED);
            }
            let text = if entry.is_dir {
                format!("[DIR] {}", entry.name)
            } else {
                entry.name.clone()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), body);
}

fn draw_now_playing<P: Player>(frame: &mut Frame, session: &Session<P>, header: Rect, body: Rect) {
    let title = Paragraph::new("Now Playing...").block(
        Block::default()
            .borders(Borders::ALL)
            .title(" gsf-selector ")
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(title, header);

    let track = session.track();
    let mut lines = Vec::new();
    let mut field = |label: &str, value: Option<&str>| {
        if let Some(value) = value {
            lines.push(Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(LABEL)),
                Span::styled(value.to_string(), Style::default().fg(VALUE)),
            ]));
        }
    };

    let display_title = track.display_title();
    let elapsed = format_mmss(session.elapsed_seconds());
    field("Game", track.game.as_deref());
    field("Title", Some(display_title.as_str()));
    field("Artist", track.artist.as_deref());
    field("Length", track.length_display());
    field("Elapsed", Some(elapsed.as_str()));
    field("Year", track.year.as_deref());
    field("GSF By", track.producer.as_deref());
    field("Copyright", track.copyright.as_deref());
    field("Loop", Some(session.loop_mode().label()));

    lines.push(Line::default());
    if let Some(dir) = session.manual_advance_pending() {
        let label = match dir {
            SkipDirection::Forward => "Skipping to next track...",
            SkipDirection::Backward => "Skipping to previous track...",
        };
        lines.push(Line::styled(label, Style::default().fg(Color::Yellow)));
    } else if session.is_paused() {
        lines.push(Line::styled(
            "PAUSED",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    } else if !session.player().is_live() {
        lines.push(Line::styled("Stopped", Style::default().fg(Color::Red)));
    }

    let info = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" now playing ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(info, body);
}

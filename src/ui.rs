//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the player's `Screen` using `ratatui` and reports
//! where the clickable parts ended up so pointer input can be routed.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::display::{PlayIcon, Screen, VolumeTier};
use crate::input::{Control, HitMap, Region, Target};
use crate::notify::{NotificationPhase, Toast};
use crate::player::{FavoriteTarget, RepeatMode};

const ACCENT: Color = Color::Rgb(29, 185, 84);

const CONTROLS: &str = "[space] play/pause | [←/→] prev/next | [↑/↓] volume | [m] mute | \
     [s] shuffle | [r] repeat | [f] favorite | [/] search | [q] quit | mouse: click & drag";

/// What a frame is drawn from.
pub struct View<'a> {
    pub screen: &'a Screen,
    pub toast: Option<Toast<'a>>,
    pub query: &'a str,
    pub search_focused: bool,
    pub app_name: &'a str,
}

fn region(r: Rect) -> Region {
    Region {
        left: f64::from(r.x),
        top: f64::from(r.y),
        width: f64::from(r.width),
        height: f64::from(r.height),
    }
}

fn heart(favorite: bool) -> &'static str {
    if favorite { "♥" } else { "♡" }
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
}

/// A one-line bar with a filled part and a handle at `percent`.
fn bar_line(percent: f64, width: u16) -> Line<'static> {
    let width = usize::from(width);
    if width == 0 {
        return Line::default();
    }
    let handle = ((percent.clamp(0.0, 100.0) / 100.0) * (width - 1) as f64).round() as usize;
    Line::from(vec![
        Span::styled("━".repeat(handle), Style::default().fg(ACCENT)),
        Span::styled("●", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            "─".repeat(width - handle - 1),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// Render the entire UI into `frame` and return the clickable regions.
pub fn draw(frame: &mut Frame, view: &View) -> HitMap {
    let mut hits = HitMap::default();
    let screen = view.screen;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(screen.document_title.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", view.app_name))
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    draw_now_playing(frame, chunks[1], screen, &mut hits);
    draw_progress(frame, chunks[2], screen, &mut hits);
    draw_transport(frame, chunks[3], screen, &mut hits);
    draw_search(frame, chunks[4], view, &mut hits);
    draw_song_list(frame, chunks[5], screen, &mut hits);

    let footer = Paragraph::new(CONTROLS)
        .block(bordered(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[6]);

    if let Some(toast) = view.toast {
        let area = frame.area();
        draw_toast(frame, area, toast);
    }

    hits
}

fn draw_now_playing(frame: &mut Frame, area: Rect, screen: &Screen, hits: &mut HitMap) {
    let block = bordered(" now playing ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let state = if screen.playing { "playing" } else { "paused" };
    let lines = vec![
        Line::from(vec![
            Span::styled(
                screen.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  ({state})")),
        ]),
        Line::from(screen.artist.clone()),
        Line::from(Span::styled(
            format!("cover: {}", screen.cover),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    if inner.width >= 2 && inner.height > 0 {
        let cell = Rect {
            x: inner.x + inner.width - 2,
            y: inner.y,
            width: 2,
            height: 1,
        };
        let style = if screen.favorite_current {
            Style::default().fg(ACCENT)
        } else {
            Style::default()
        };
        frame.render_widget(
            Paragraph::new(Span::styled(heart(screen.favorite_current), style)),
            cell,
        );
        hits.push(region(cell), Target::Favorite(FavoriteTarget::Current));
    }
}

fn draw_progress(frame: &mut Frame, area: Rect, screen: &Screen, hits: &mut HitMap) {
    let block = Block::default().borders(Borders::ALL).title(" progress ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(4),
            Constraint::Length(7),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(screen.elapsed_time.as_str()).alignment(Alignment::Center),
        cols[0],
    );
    frame.render_widget(
        Paragraph::new(bar_line(screen.progress_percent, cols[1].width)),
        cols[1],
    );
    frame.render_widget(
        Paragraph::new(screen.total_time.as_str()).alignment(Alignment::Center),
        cols[2],
    );
    hits.push(region(cols[1]), Target::ProgressBar);
}

fn draw_transport(frame: &mut Frame, area: Rect, screen: &Screen, hits: &mut HitMap) {
    let block = Block::default().borders(Borders::ALL).title(" controls ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let play = match screen.play_icon {
        PlayIcon::Play => "[ ▶ ]",
        PlayIcon::Pause => "[ ❚❚ ]",
    };
    let repeat = match screen.repeat {
        RepeatMode::Off | RepeatMode::All => "[ repeat ]",
        RepeatMode::One => "[ repeat¹ ]",
    };
    let volume = match screen.volume_tier {
        VolumeTier::Muted => "[ mute ]",
        VolumeTier::Low => "[ vol- ]",
        VolumeTier::High => "[ vol+ ]",
    };
    let active = |on: bool| {
        if on {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };

    let buttons: [(&str, Control, Style); 6] = [
        ("[ |◀ ]", Control::Previous, Style::default()),
        (play, Control::PlayPause, active(screen.playing)),
        ("[ ▶| ]", Control::Next, Style::default()),
        ("[ shuffle ]", Control::Shuffle, active(screen.shuffle_active)),
        (repeat, Control::Repeat, active(screen.repeat != RepeatMode::Off)),
        (volume, Control::Mute, Style::default()),
    ];

    let mut constraints: Vec<Constraint> = buttons
        .iter()
        .map(|(label, _, _)| Constraint::Length(label.chars().count() as u16 + 1))
        .collect();
    constraints.push(Constraint::Min(4));
    constraints.push(Constraint::Length(5));
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (i, (label, control, style)) in buttons.iter().enumerate() {
        frame.render_widget(Paragraph::new(Span::styled(*label, *style)), cols[i]);
        hits.push(region(cols[i]), Target::Control(*control));
    }

    let vol_bar = cols[buttons.len()];
    frame.render_widget(
        Paragraph::new(bar_line(f64::from(screen.volume_percent), vol_bar.width)),
        vol_bar,
    );
    hits.push(region(vol_bar), Target::VolumeBar);
    frame.render_widget(
        Paragraph::new(format!("{:>3}%", screen.volume_percent)),
        cols[buttons.len() + 1],
    );
}

fn draw_search(frame: &mut Frame, area: Rect, view: &View, hits: &mut HitMap) {
    let title = if view.search_focused {
        " search (enter/esc) "
    } else {
        " search (/) "
    };
    let mut text = view.query.to_string();
    if view.search_focused {
        text.push('▏');
    }
    let style = if view.search_focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    };
    let search = Paragraph::new(Span::styled(text, style)).block(bordered(title));
    frame.render_widget(search, area);
    hits.push(region(area), Target::SearchField);
}

fn draw_song_list(frame: &mut Frame, area: Rect, screen: &Screen, hits: &mut HitMap) {
    let block = bordered(" songs ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = screen.visible_indices();
    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "no matching songs",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
        return;
    }

    for (row, &index) in visible.iter().take(usize::from(inner.height)).enumerate() {
        let entry = &screen.entries[index];
        let row_rect = Rect {
            x: inner.x,
            y: inner.y + row as u16,
            width: inner.width,
            height: 1,
        };

        let marker = if entry.current { "▶ " } else { "  " };
        let style = if entry.current {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(4),
                Constraint::Length(7),
                Constraint::Length(2),
            ])
            .split(row_rect);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(entry.title.clone(), style),
                Span::styled(
                    format!("  {}", entry.artist),
                    Style::default().fg(Color::Gray),
                ),
            ])),
            cols[0],
        );
        frame.render_widget(
            Paragraph::new(entry.duration.as_str()).alignment(Alignment::Right),
            cols[1],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                heart(entry.favorite),
                if entry.favorite {
                    Style::default().fg(ACCENT)
                } else {
                    Style::default()
                },
            ))
            .alignment(Alignment::Right),
            cols[2],
        );

        hits.push(region(row_rect), Target::Entry(index));
        hits.push(
            region(cols[2]),
            Target::Favorite(FavoriteTarget::Track(index)),
        );
    }
}

/// Toast in the top-right corner, slid right by `toast.offset` of its width.
/// Dimmed while sliding.
fn draw_toast(frame: &mut Frame, area: Rect, toast: Toast) {
    let width = (toast.message.chars().count() as u16 + 4).min(area.width.saturating_sub(2));
    if width < 3 || area.height < 4 {
        return;
    }
    let shift = ((toast.offset * f32::from(width + 1)).round() as u16).min(width + 1);
    let x = area.x + area.width - width - 1 + shift;
    let visible = (area.x + area.width).saturating_sub(x).min(width);
    if visible < 2 {
        return;
    }

    let rect = Rect {
        x,
        y: area.y + 1,
        width: visible,
        height: 3,
    };
    let mut style = Style::default().fg(Color::White).bg(ACCENT);
    if toast.phase != NotificationPhase::Visible {
        style = style.add_modifier(Modifier::DIM);
    }
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(toast.message)
            .style(style)
            .block(Block::default().borders(Borders::ALL)),
        rect,
    );
}

use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::SetTitle;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::MediaBackend;
use crate::config;
use crate::input::{Flow, Focus, HitMap, InputEvent, InputRouter, Key, PointerEvent, PointerPhase};
use crate::player::Player;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    pub router: InputRouter,
    /// Clickable regions of the last drawn frame.
    pub hits: HitMap,
    /// When the welcome notification is due, until it has been shown.
    pub welcome_at: Option<Instant>,
    last_title: String,
}

impl EventLoopState {
    pub fn new(settings: &config::Settings, started: Instant) -> Self {
        let ui = &settings.ui;
        let welcome_at = (!ui.welcome_message.is_empty() && ui.welcome_delay_ms > 0)
            .then(|| started + Duration::from_millis(ui.welcome_delay_ms));
        Self {
            router: InputRouter::new(settings.player.volume_step),
            hits: HitMap::default(),
            welcome_at,
            last_title: String::new(),
        }
    }
}

/// Main terminal event loop: drives the player's timers, draws the UI and
/// routes input. Returns `Ok(())` when shutdown is requested.
pub fn run<B: MediaBackend>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    player: &mut Player<B>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let now = Instant::now();
        if state.welcome_at.is_some_and(|at| now >= at) {
            state.welcome_at = None;
            player.notify(settings.ui.welcome_message.clone());
        }

        player.pump_media_events();
        player.tick(now);

        let title = &player.screen().document_title;
        if *title != state.last_title {
            execute!(terminal.backend_mut(), SetTitle(title.as_str()))?;
            state.last_title = title.clone();
        }

        let view = ui::View {
            screen: player.screen(),
            toast: player.notifier().toast(now),
            query: state.router.query(),
            search_focused: state.router.focus() == Focus::Search,
            app_name: &settings.ui.app_name,
        };
        let mut hits = HitMap::default();
        terminal.draw(|f| hits = ui::draw(f, &view))?;
        state.hits = hits;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let ev = event::read()?;
        if is_interrupt(&ev) {
            break;
        }
        let input = match ev {
            Event::Paste(text) => Some(pasted_query(state.router.query(), &text)),
            ev => translate(ev),
        };
        let Some(input) = input else {
            continue;
        };
        if state.router.handle(player, &state.hits, input) == Flow::Quit {
            break;
        }
    }

    Ok(())
}

fn is_interrupt(ev: &Event) -> bool {
    matches!(
        ev,
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) if modifiers.contains(KeyModifiers::CONTROL)
    )
}

/// Pasted text is appended to the search query, line breaks dropped.
pub(crate) fn pasted_query(query: &str, pasted: &str) -> InputEvent {
    let pasted: String = pasted.chars().filter(|c| !c.is_control()).collect();
    InputEvent::SearchChanged(format!("{query}{pasted}"))
}

/// Map a terminal event onto the player's input vocabulary.
///
/// Pointer positions address the middle of the cell under the mouse.
pub(crate) fn translate(ev: Event) -> Option<InputEvent> {
    match ev {
        Event::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            let key = match key.code {
                KeyCode::Char(' ') => Key::Space,
                KeyCode::Char(c) => Key::Char(c),
                KeyCode::Left => Key::ArrowLeft,
                KeyCode::Right => Key::ArrowRight,
                KeyCode::Up => Key::ArrowUp,
                KeyCode::Down => Key::ArrowDown,
                KeyCode::Backspace => Key::Backspace,
                KeyCode::Enter => Key::Enter,
                KeyCode::Esc => Key::Esc,
                _ => return None,
            };
            Some(InputEvent::Key(key))
        }
        Event::Mouse(MouseEvent {
            kind, column, row, ..
        }) => {
            let phase = match kind {
                MouseEventKind::Down(MouseButton::Left) => PointerPhase::Press,
                MouseEventKind::Drag(MouseButton::Left) => PointerPhase::Move,
                MouseEventKind::Up(MouseButton::Left) => PointerPhase::Release,
                _ => return None,
            };
            Some(InputEvent::Pointer(PointerEvent::new(
                phase,
                f64::from(column) + 0.5,
                f64::from(row) + 0.5,
            )))
        }
        _ => None,
    }
}

use anyhow::Result;
use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::controller::{Action, Controller};
use crate::db::Database;
use crate::models::Window;
use crate::ui::app::{App, InputMode};

pub(crate) fn as_tui(db: Database) -> Result<()> {
    let controller = Controller::new(db, Local::now().date_naive())?;
    let mut app = App::new(controller);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        // Windows are relative to the current local day, which can roll over mid-session.
        app.controller.set_today(Local::now().date_naive());

        terminal.draw(|f| {
            // tabs + form + status + table borders/header
            let content_height = f.area().height.saturating_sub(9) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app),
                InputMode::Editing => handle_form_input(key, app),
                InputMode::Confirm => {
                    app.confirm_delete(matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')));
                }
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('1') => app.set_window(Window::All),
        KeyCode::Char('2') => app.set_window(Window::Week),
        KeyCode::Char('3') => app.set_window(Window::Month),
        KeyCode::Tab => {
            let next = app.controller.state().window.next();
            app.set_window(next);
        }
        KeyCode::Char('a') => app.start_add(),
        KeyCode::Char('e') | KeyCode::Enter => app.start_edit(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('r') => {
            app.apply(Action::Refresh);
        }
        KeyCode::Esc if app.is_editing() => {
            app.apply(Action::CancelEdit);
        }
        _ => {}
    }
}

fn handle_form_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => app.leave_form(),
        KeyCode::Tab | KeyCode::Down => app.focused = app.focused.next(),
        KeyCode::BackTab | KeyCode::Up => app.focused = app.focused.prev(),
        KeyCode::Backspace => {
            app.focused_value_mut().pop();
        }
        KeyCode::Char(c) => app.focused_value_mut().push(c),
        _ => {}
    }
}

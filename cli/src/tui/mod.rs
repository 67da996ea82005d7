pub mod app;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::tui::app::{App, Mode};

pub fn run() -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.mode {
                    Mode::Normal => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Down | KeyCode::Char('j') => app.next(),
                        KeyCode::Up | KeyCode::Char('k') => app.previous(),
                        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
                        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_selected(),
                        KeyCode::Char('a') => app.enter_add_mode(),
                        KeyCode::Char('f') => app.enter_filter_mode(),
                        KeyCode::Char('c') => app.clear_filter(),
                        KeyCode::Char('x') => app.request_clear_all(),
                        _ => {}
                    },
                    Mode::Adding | Mode::Filtering => match key.code {
                        KeyCode::Enter => app.submit(),
                        KeyCode::Esc => app.cancel_input(),
                        KeyCode::Tab | KeyCode::BackTab => app.next_field(),
                        KeyCode::Left => app.left(),
                        KeyCode::Right => app.right(),
                        KeyCode::Backspace => app.delete_char(),
                        KeyCode::Char(c) => app.input_char(c),
                        _ => {}
                    },
                    Mode::Confirming(_) => match key.code {
                        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm(true),
                        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.confirm(false),
                        _ => {}
                    },
                }
            }
        }
    }
}

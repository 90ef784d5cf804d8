use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Exclusive claim on the terminal for one run of the game.
///
/// `enter` takes over the screen and arranges for it to be handed back on
/// every exit path: normal drop, early error, or panic.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        let terminal = claim_screen()?;
        release_screen_on_panic();
        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = release_screen();
    }
}

/// Raw mode, alternate screen, hidden cursor. Unwinds whatever succeeded
/// when a later step fails, so a half-claimed screen is never left behind.
fn claim_screen() -> io::Result<AppTerminal> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
        let _ = disable_raw_mode();
        return Err(error);
    }

    Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| {
        let _ = release_screen();
    })
}

fn release_screen() -> io::Result<()> {
    let _ = disable_raw_mode();
    execute!(io::stdout(), Show, LeaveAlternateScreen)
}

/// Chains a panic hook that releases the screen before the default hook
/// prints, so the message lands on a usable terminal.
fn release_screen_on_panic() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = release_screen();
        default_hook(panic_info);
    }));
}

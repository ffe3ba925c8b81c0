mod config;
mod models;
mod ui;

use std::error::Error;
use std::io;
use std::sync::Arc;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::models::AnecdoteVoter;
use crate::ui::{App, render};

/// 初始化日志：默认关闭，设置 ANECDOTA_LOG=<路径> 时写入文件
///
/// TUI 模式下日志不能落到终端，否则会破坏画面
fn init_tracing() {
    let Ok(log_path) = std::env::var("ANECDOTA_LOG") else {
        return;
    };

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("警告: 无法创建日志文件 {}", log_path);
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    // 加载轶事池 (~/.config/anecdota/config.toml，缺省时用内置数据)
    let config_path = config::config_path();
    let anecdotes = config::load_pool(&config_path)?;
    tracing::info!(count = anecdotes.len(), "轶事池已加载");

    // 空池在进入终端界面之前直接拒绝
    let voter = AnecdoteVoter::new(anecdotes)?;
    let mut app = App::new(voter);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        match crossterm::event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if ui::handle_key_event(app, key.code)? {
                    break;
                }
            }
            Event::Mouse(mouse) => {
                if ui::handle_mouse_event(app, &mouse)? {
                    break;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

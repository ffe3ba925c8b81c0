//! 视图层模块
//!
//! 包含主渲染入口和各个区块

pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::actions::Action;
use super::state::App;
use components::render_button;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    app.clear_buttons();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(6),    // 当前轶事
            Constraint::Length(3), // 按钮行
            Constraint::Length(6), // 领先轶事
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_current(frame, app, chunks[1]);
    render_controls(frame, app, chunks[2]);
    render_leader(frame, app, chunks[3]);
    render_help(frame, app, chunks[4]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("📜 每日轶事")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_current(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(app.voter.selected_anecdote()),
        Line::from(""),
        Line::from(Span::styled(
            format!("当前 {} 票", app.voter.selected_points()),
            Style::default().fg(Color::Yellow),
        )),
    ];

    let block_title = format!("今日轶事 ({}/{})", app.voter.selected() + 1, app.voter.len());
    let current = Paragraph::new(lines)
        .block(Block::default().title(block_title).borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    frame.render_widget(current, area);
}

fn render_controls(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18),
            Constraint::Length(18),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(frame, chunks[0], "下一条 (n)");
    app.register_button(chunks[0], Action::NextAnecdote);

    render_button(frame, chunks[1], "投票 (v)");
    app.register_button(chunks[1], Action::Vote);
}

fn render_leader(frame: &mut Frame, app: &App, area: Rect) {
    // 领先项只显示文本，不显示票数
    let leader = Paragraph::new(app.voter.most_voted_anecdote())
        .style(Style::default().fg(Color::Green))
        .block(Block::default().title("得票最高的轶事").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    frame.render_widget(leader, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = "[n/空格] 下一条  [v/Enter] 投票  [鼠标] 点击按钮  [q] 退出";

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

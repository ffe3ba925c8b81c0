//! 通用 UI 组件
//!
//! 按钮等无状态组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// [组件] 无状态按钮：带边框的居中标签
///
/// 组件只负责呈现；点击触发什么由调用方在 App 上登记
pub fn render_button(frame: &mut Frame, area: Rect, label: &str) {
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

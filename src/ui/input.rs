//! 输入事件映射 (Input -> Action)
//!
//! 将按键与鼠标事件转换为 Action

use std::io;

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::actions::Action;
use super::state::App;

/// 根据按键获取对应的 Action
pub fn get_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('n') | KeyCode::Char(' ') => Some(Action::NextAnecdote),
        KeyCode::Char('v') | KeyCode::Enter => Some(Action::Vote),
        _ => None,
    }
}

/// 左键点击命中某个按钮区域时返回它登记的 Action
pub fn get_mouse_action(buttons: &[(Rect, Action)], mouse: &MouseEvent) -> Option<Action> {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return None;
    }

    let position = Position::new(mouse.column, mouse.row);
    buttons
        .iter()
        .find(|(area, _)| area.contains(position))
        .map(|(_, action)| *action)
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

/// 处理鼠标事件
pub fn handle_mouse_event(app: &mut App, mouse: &MouseEvent) -> io::Result<bool> {
    if let Some(action) = get_mouse_action(&app.buttons, mouse) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(get_action(KeyCode::Char('n')), Some(Action::NextAnecdote));
        assert_eq!(get_action(KeyCode::Char(' ')), Some(Action::NextAnecdote));
        assert_eq!(get_action(KeyCode::Char('v')), Some(Action::Vote));
        assert_eq!(get_action(KeyCode::Enter), Some(Action::Vote));
        assert_eq!(get_action(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(get_action(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(get_action(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_click_inside_button() {
        let buttons = vec![(Rect::new(0, 0, 10, 3), Action::Vote)];
        assert_eq!(
            get_mouse_action(&buttons, &left_click(5, 1)),
            Some(Action::Vote)
        );
    }

    #[test]
    fn test_click_outside_buttons() {
        let buttons = vec![(Rect::new(0, 0, 10, 3), Action::Vote)];
        assert_eq!(get_mouse_action(&buttons, &left_click(20, 10)), None);
    }

    #[test]
    fn test_non_click_events_ignored() {
        let buttons = vec![(Rect::new(0, 0, 10, 3), Action::Vote)];
        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 5,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(get_mouse_action(&buttons, &moved), None);
    }
}

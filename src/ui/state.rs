//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及按钮命中区域

use ratatui::layout::Rect;

use super::actions::Action;
use crate::models::AnecdoteVoter;

/// 应用状态
pub struct App {
    pub voter: AnecdoteVoter,
    /// 视图每帧登记的按钮区域，供鼠标命中检测使用
    pub buttons: Vec<(Rect, Action)>,
    pub message: Option<String>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(voter: AnecdoteVoter) -> Self {
        Self {
            voter,
            buttons: Vec::new(),
            message: None,
        }
    }

    /// 清空上一帧的按钮区域，渲染时重新登记
    pub fn clear_buttons(&mut self) {
        self.buttons.clear();
    }

    /// 登记一个按钮区域及其触发的 Action
    pub fn register_button(&mut self, area: Rect, action: Action) {
        self.buttons.push((area, action));
    }
}

//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和两个状态转移

use super::actions::Action;
use super::state::App;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::NextAnecdote => self.next_anecdote(),
            Action::Vote => self.vote(),
        }
        false
    }

    /// 随机切换到下一条轶事，票数不受影响
    pub fn next_anecdote(&mut self) {
        self.voter.pick_random();
        self.message = None;
        tracing::debug!(selected = self.voter.selected(), "切换轶事");
    }

    /// 给当前轶事投一票
    pub fn vote(&mut self) {
        let points = self.voter.vote();
        self.message = Some(format!("已投票，当前 {} 票", points));
        tracing::debug!(
            selected = self.voter.selected(),
            points,
            most_voted = self.voter.most_voted(),
            "投票"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnecdoteVoter;

    fn app_abc() -> App {
        let voter =
            AnecdoteVoter::new(vec!["A".to_string(), "B".to_string(), "C".to_string()]).unwrap();
        App::new(voter)
    }

    #[test]
    fn test_dispatch_vote() {
        let mut app = app_abc();
        assert!(!app.dispatch(Action::Vote));
        assert_eq!(app.voter.points(), &[1, 0, 0]);
        assert_eq!(app.message.as_deref(), Some("已投票，当前 1 票"));
    }

    #[test]
    fn test_dispatch_next_keeps_points() {
        let mut app = app_abc();
        app.dispatch(Action::Vote);
        assert!(!app.dispatch(Action::NextAnecdote));
        assert_eq!(app.voter.points(), &[1, 0, 0]);
        assert_eq!(app.voter.most_voted(), 0);
        assert!(app.voter.selected() < app.voter.len());
        assert_eq!(app.message, None);
    }

    #[test]
    fn test_dispatch_quit() {
        let mut app = app_abc();
        assert!(app.dispatch(Action::Quit));
    }
}

//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    /// 随机切换到下一条轶事
    NextAnecdote,
    /// 给当前轶事投一票
    Vote,
}

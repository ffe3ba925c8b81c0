use rand::Rng;
use thiserror::Error;

/// 构造阶段的错误
#[derive(Debug, Error, PartialEq)]
pub enum VoterError {
    #[error("轶事列表不能为空")]
    EmptyPool,
}

/// 轶事投票器：持有轶事池、当前选中项、票数与领先项
///
/// 所有状态在构造时创建，随程序退出一起回收
#[derive(Debug, Clone)]
pub struct AnecdoteVoter {
    anecdotes: Vec<String>,
    points: Vec<u32>,
    selected: usize,
    most_voted: usize,
}

impl AnecdoteVoter {
    /// 创建投票器，空列表在此处直接拒绝
    pub fn new(anecdotes: Vec<String>) -> Result<Self, VoterError> {
        if anecdotes.is_empty() {
            return Err(VoterError::EmptyPool);
        }
        let points = vec![0; anecdotes.len()];
        Ok(Self {
            anecdotes,
            points,
            selected: 0,
            most_voted: 0,
        })
    }

    /// 轶事总数
    pub fn len(&self) -> usize {
        self.anecdotes.len()
    }

    /// 设置当前选中项，越界索引直接忽略
    pub fn select(&mut self, index: usize) {
        if index < self.anecdotes.len() {
            self.selected = index;
        }
    }

    /// 均匀随机选择下一条（允许与当前项重复）
    pub fn pick_random(&mut self) {
        let index = rand::rng().random_range(0..self.anecdotes.len());
        self.select(index);
    }

    /// 给当前选中项投一票，返回它的新票数
    ///
    /// 仅当票数严格超过当前领先项时更换领先项，平票保留先到者
    pub fn vote(&mut self) -> u32 {
        self.points[self.selected] += 1;
        if self.points[self.selected] > self.points[self.most_voted] {
            self.most_voted = self.selected;
        }
        self.points[self.selected]
    }

    // ============ 只读访问 ============

    /// 当前选中项的索引
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// 当前选中的轶事文本
    pub fn selected_anecdote(&self) -> &str {
        &self.anecdotes[self.selected]
    }

    /// 当前选中项的票数
    pub fn selected_points(&self) -> u32 {
        self.points[self.selected]
    }

    /// 领先项的索引
    pub fn most_voted(&self) -> usize {
        self.most_voted
    }

    /// 领先的轶事文本
    pub fn most_voted_anecdote(&self) -> &str {
        &self.anecdotes[self.most_voted]
    }

    /// 全部票数
    #[allow(dead_code)]
    pub fn points(&self) -> &[u32] {
        &self.points
    }
}

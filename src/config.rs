use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 内置轶事池
const DEFAULT_ANECDOTES: [&str; 6] = [
    "If it hurts, do it more often",
    "Adding manpower to a late software project makes it later!",
    "The first 90 percent of the code accounts for the first 90 percent of the development time...The remaining 10 percent of the code accounts for the other 90 percent of the development time.",
    "Any fool can write code that a computer can understand. Good programmers write code that humans can understand.",
    "Premature optimization is the root of all evil.",
    "Debugging is twice as hard as writing the code in the first place. Therefore, if you write the code as cleverly as possible, you are, by definition, not smart enough to debug it.",
];

/// TOML 配置结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    pub anecdotes: Vec<String>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            anecdotes: DEFAULT_ANECDOTES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("读取配置文件 {path} 失败: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("解析配置文件 {path} 失败: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置文件路径 (~/.config/anecdota/config.toml)
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("anecdota")
        .join("config.toml")
}

/// 加载轶事池，文件不存在时回落到内置数据
pub fn load_pool(path: &Path) -> Result<Vec<String>, ConfigError> {
    if !path.exists() {
        return Ok(PoolConfig::default().anecdotes);
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: PoolConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(config.anecdotes)
}

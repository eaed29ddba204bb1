//! 任务列表存储
//!
//! 内存中的有序任务列表 + 纯文本文件（每行一个任务）。每次修改后立即
//! 整体重写文件，内存与磁盘在每个操作结束时保持一致。
//!
//! 写入不是原子的：写到一半崩溃可能截断文件。任务文本中包含换行符时
//! 无法完整往返。

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::error::{Result, TaskError};

/// 任务文件名（位于当前工作目录）
pub const TASKS_FILE: &str = "tasks.txt";

/// `clear` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// 已清空，附带被删除的任务数
    Cleared(usize),
    /// 列表本来就是空的
    NothingToClear,
    /// 调用方没有确认
    Declined,
}

/// 任务列表 + 对应的文件
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<String>,
}

impl TaskStore {
    /// 创建绑定到 `path` 的空列表（不读取文件）
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tasks: Vec::new(),
        }
    }

    /// 创建并从文件加载
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// 从文件加载任务；文件不存在时列表保持为空
    ///
    /// 读取失败时内存中的列表保持不变。
    pub fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no task file yet, starting empty");
            return Ok(());
        }

        let bytes = std::fs::read(&self.path).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "failed to load tasks");
            TaskError::from(e)
        })?;

        // 非法 UTF-8 按字节替换，其余任务照常加载
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e.utf8_error(),
                    "task file is not valid UTF-8, invalid bytes replaced"
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        // lines() 去掉每行结尾的 \n / \r\n
        self.tasks = content.lines().map(str::to_string).collect();
        info!(count = self.tasks.len(), "tasks loaded from file");
        Ok(())
    }

    /// 将整个列表写回文件（覆盖）
    pub fn persist(&self) -> Result<()> {
        let mut content = String::with_capacity(self.tasks.iter().map(|t| t.len() + 1).sum());
        for task in &self.tasks {
            content.push_str(task);
            content.push('\n');
        }

        std::fs::write(&self.path, content).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "failed to save tasks");
            TaskError::from(e)
        })?;
        debug!(count = self.tasks.len(), "tasks saved to file");
        Ok(())
    }

    /// 追加任务
    pub fn add(&mut self, text: &str) -> Result<&[String]> {
        let task = normalize(text)?;
        info!(task = %task, "task added");
        self.tasks.push(task);
        self.persist()?;
        Ok(&self.tasks)
    }

    /// 原地替换 `index` 处的任务
    pub fn update(&mut self, index: usize, text: &str) -> Result<&[String]> {
        self.check_index(index)?;
        let task = normalize(text)?;
        let old = std::mem::replace(&mut self.tasks[index], task);
        info!(index, from = %old, to = %self.tasks[index], "task updated");
        self.persist()?;
        Ok(&self.tasks)
    }

    /// 删除 `index` 处的任务，返回被删除的文本
    pub fn delete(&mut self, index: usize) -> Result<String> {
        self.check_index(index)?;
        let removed = self.tasks.remove(index);
        info!(index, task = %removed, "task deleted");
        self.persist()?;
        Ok(removed)
    }

    /// 清空列表；是否确认由调用方决定
    pub fn clear(&mut self, confirmed: bool) -> Result<ClearOutcome> {
        if self.tasks.is_empty() {
            return Ok(ClearOutcome::NothingToClear);
        }
        if !confirmed {
            return Ok(ClearOutcome::Declined);
        }

        let count = self.tasks.len();
        self.tasks.clear();
        warn!(count, "all tasks cleared by user");
        self.persist()?;
        Ok(ClearOutcome::Cleared(count))
    }

    /// 当前任务列表（只读）
    pub fn list(&self) -> &[String] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tasks.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(TaskError::selection(format!(
                "no task at position {} (list has {})",
                index + 1,
                self.tasks.len()
            )))
        }
    }
}

/// 去掉首尾空白；空字符串视为无效输入
fn normalize(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskError::validation("empty input"));
    }
    Ok(trimmed.to_string())
}

//! In-memory chat transcript for one session, exportable as plain text.
//!
//! Nothing is written unless [`ChatTranscript::export_to`] is called.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;

const HEADER: &str = "心理咨询对话记录";
const RULE_WIDTH: usize = 40;

/// Who said a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "用户",
            Role::Assistant => "助手",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single exchange entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

/// Ordered record of one chat session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTranscript {
    pub session_id: Uuid,
    pub started_at: DateTime<Local>,
    pub turns: Vec<ChatTurn>,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: Local::now(),
            turns: Vec::new(),
        }
    }

    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.turns.push(ChatTurn {
            role,
            content: content.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// `chat_<session id>.txt`
    pub fn file_name(&self) -> String {
        format!("chat_{}.txt", self.session_id)
    }

    /// Plain-text export: header, session line, export time, rule, then `角色：内容` lines.
    pub fn render(&self) -> String {
        self.render_at(Local::now())
    }

    fn render_at(&self, exported_at: DateTime<Local>) -> String {
        let mut lines = vec![
            HEADER.to_string(),
            format!("会话：{}", self.session_id),
            format!("导出时间：{}", exported_at.format("%Y-%m-%d %H:%M:%S")),
            "-".repeat(RULE_WIDTH),
        ];
        lines.extend(
            self.turns
                .iter()
                .map(|turn| format!("{}：{}", turn.role, turn.content)),
        );
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Write the transcript into `dir` (created if missing) and return the file path.
    pub fn export_to(&self, dir: &Path) -> Result<PathBuf, AppError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        fs::write(&path, self.render())?;
        info!(turns = self.turns.len(), "Transcript exported to {:?}", path);
        Ok(path)
    }
}

// src/domain/sales_status.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// 売上の状態を表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesStatus {
    Pending,
    Billed,
    Canceled,
}

impl SalesStatus {
    /// 文字列からSalesStatusに変換
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "billed" => Some(Self::Billed),
            "canceled" => Some(Self::Canceled),
            _ => None,
        }
    }

    /// SalesStatusを文字列として取得（DB保存値）
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Billed => "billed",
            Self::Canceled => "canceled",
        }
    }

    /// すべての有効なステータスを取得
    pub fn all() -> Vec<Self> {
        vec![Self::Pending, Self::Billed, Self::Canceled]
    }
}

impl Default for SalesStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl fmt::Display for SalesStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

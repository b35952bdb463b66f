//! # Todori 共有ユーティリティ
//!
//! このクレートは、Todori プロジェクト全体で使用される
//! 共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, api）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える

pub mod error_response;
pub mod health;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;

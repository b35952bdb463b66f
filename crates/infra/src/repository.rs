//! # リポジトリ実装
//!
//! Todo レコードの永続化を担当するリポジトリトレイトと実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: トレイト経由でモック可能な設計
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化

pub mod todo_repository;

pub use todo_repository::{PostgresTodoRepository, TodoRepository};

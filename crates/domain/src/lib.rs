//! # Todori ドメイン層
//!
//! Todo エンティティとその不変条件を定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`todo::Todo`]）
//! - **値オブジェクト**: バリデーション済みの不変オブジェクト
//!   （[`todo::TodoId`], [`todo::TodoTitle`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//! これにより、ビジネスロジックの純粋性が保たれる。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todori_domain::todo::{NewTodo, TodoTitle};
//!
//! let title = TodoTitle::new("牛乳を買う")?;
//! let new_todo = NewTodo::new(title, None, false);
//! assert_eq!(new_todo.title().as_str(), "牛乳を買う");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod todo;

pub use error::DomainError;

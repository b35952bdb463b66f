//! # ユースケース層
//!
//! API サーバーのビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **薄いハンドラ**: ハンドラは薄く保ち、検証・マージ・ストア委譲を
//!   ユースケースに集約
//! - **依存性注入**: リポジトリをジェネリクスで外部から注入し、
//!   テストではインメモリモックに差し替える

pub mod todo;

pub use todo::{CreateTodoInput, TodoUseCaseImpl, UpdateTodoInput};

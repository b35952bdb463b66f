//! # Todori API サーバー
//!
//! Todo リソースを JSON over REST で公開する API サーバー。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Frontend   │────▶│  Todori API │────▶│  PostgreSQL │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! リクエストの流れは一方向:
//! ハンドラが入力を検証・正規化し、ユースケースがストア操作を委譲し、
//! 結果（または不在）をレスポンスに変換する。コンポーネント間の
//! コールバックや非同期ファンアウトは存在しない。
//!
//! ## モジュール構成
//!
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - ビジネスロジック（検証・マージ・ストア委譲）
//! - [`app_builder`] - State の初期化とルーター構築

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;

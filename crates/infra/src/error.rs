//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **エラーの変換**: `sqlx::Error` をラップし `#[from]` で自動変換
//! - **ドメインエラーとの分離**: インフラ固有のエラーを明示
//! - **「見つからない」はエラーではない**: リポジトリは不在を
//!   `Option::None` / `false` で表現し、このエラー型には含めない

use thiserror::Error;

/// インフラ層で発生するエラー
///
/// SQL クエリの実行失敗、接続エラー、制約違反など。
/// API 層でこのエラーを受け取り、500 Internal Server Error に変換する
/// （入力起因のエラーはここに到達する前に検証済み）。
#[derive(Debug, Error)]
pub enum InfraError {
    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] sqlx::Error),
}

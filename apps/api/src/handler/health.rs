//! # ヘルスチェックハンドラ
//!
//! API の稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /        … 稼働メッセージ（liveness）
//! GET /health  … 稼働状態とバージョン
//! ```

use axum::Json;
use serde::Serialize;
use todori_shared::HealthResponse;

/// ルートエンドポイントのレスポンス
#[derive(Debug, Serialize)]
pub struct RootResponse {
   pub message: String,
}

/// ルート liveness エンドポイント
///
/// サーバーが起動していることだけを示す。依存サービスの状態は含まない。
pub async fn read_root() -> Json<RootResponse> {
   Json(RootResponse {
      message: "Todo API is running".to_string(),
   })
}

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse {
      status:  "healthy".to_string(),
      version: env!("CARGO_PKG_VERSION").to_string(),
   })
}

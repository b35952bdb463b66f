//! # API エラー定義
//!
//! API で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラー種別と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `NotFound` | 404 Not Found | 整形式の ID に対応するレコードがない |
//! | `Validation` | 422 Unprocessable Entity | ペイロードの検証失敗 |
//! | `MalformedId` | 400 Bad Request | ID が整数としてパースできない |
//! | `Database` | 500 Internal Server Error | ストア障害（詳細は漏らさない） |
//!
//! `NotFound` と `Validation` はデータ依存の想定内の結果であり、
//! サーバー障害としては扱わない。`Database` のみ `tracing::error!` で
//! 原因をログに残し、クライアントには固定メッセージを返す。

use axum::{
   Json,
   extract::rejection::{JsonRejection, QueryRejection},
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use todori_domain::DomainError;
use todori_infra::InfraError;
use todori_shared::ErrorResponse;

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// ペイロードの検証失敗
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// 構文的に不正な識別子
   ///
   /// 「存在しない」（[`NotFound`](ApiError::NotFound)）とは区別し、
   /// 呼び出し側が「問い方が誤っている」と「存在しない」を
   /// 見分けられるようにする。
   #[error("不正な識別子: {0}")]
   MalformedId(String),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

impl From<DomainError> for ApiError {
   fn from(error: DomainError) -> Self {
      match error {
         DomainError::Validation(msg) => Self::Validation(msg),
      }
   }
}

// リクエストボディ・クエリパラメータのデシリアライズ失敗も
// バリデーションエラーとして統一した形式で返す（WithRejection 経由）。

impl From<JsonRejection> for ApiError {
   fn from(rejection: JsonRejection) -> Self {
      Self::Validation(rejection.body_text())
   }
}

impl From<QueryRejection> for ApiError {
   fn from(rejection: QueryRejection) -> Self {
      Self::Validation(rejection.body_text())
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, body) = match self {
         ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
         ApiError::Validation(msg) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorResponse::validation_error(msg),
         ),
         ApiError::MalformedId(msg) => {
            (StatusCode::BAD_REQUEST, ErrorResponse::malformed_id(msg))
         }
         ApiError::Database(e) => {
            tracing::error!("データベースエラー: {}", e);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::internal_error(),
            )
         }
      };

      (status, Json(body)).into_response()
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   #[rstest]
   #[case(ApiError::NotFound("x".to_string()), StatusCode::NOT_FOUND)]
   #[case(ApiError::Validation("x".to_string()), StatusCode::UNPROCESSABLE_ENTITY)]
   #[case(ApiError::MalformedId("x".to_string()), StatusCode::BAD_REQUEST)]
   fn test_エラー種別がステータスコードに対応する(
      #[case] error: ApiError,
      #[case] expected: StatusCode,
   ) {
      let response = error.into_response();
      assert_eq!(response.status(), expected);
   }

   #[test]
   fn test_database系エラーは500になる() {
      let error = ApiError::Database(InfraError::Database(sqlx::Error::PoolTimedOut));
      let response = error.into_response();
      assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
   }

   #[test]
   fn test_domain_errorはvalidationに変換される() {
      let error: ApiError = DomainError::Validation("タイトルは必須です".to_string()).into();
      assert!(matches!(error, ApiError::Validation(_)));
   }
}

//! # Todo API ハンドラ
//!
//! Todo リソースの CRUD エンドポイントを実装する。
//!
//! ## 識別子の扱い
//!
//! パスパラメータは文字列として受け取り、明示的に整数へパースする。
//! パースできない識別子は 400 Bad Request（`malformed-id`）であり、
//! 「存在しない」（404）とは区別される。暗黙の型強制は行わない。
//!
//! ## リクエストボディの扱い
//!
//! デシリアライズ失敗は `WithRejection` で [`ApiError::Validation`]
//! （422）に変換し、すべてのエラーレスポンスを RFC 9457 形式に統一する。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, Query, State},
   http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Deserializer, Serialize};
use todori_domain::todo::{Todo, TodoId};
use todori_infra::repository::TodoRepository;

use crate::{
   error::ApiError,
   usecase::todo::{CreateTodoInput, TodoUseCaseImpl, UpdateTodoInput},
};

/// Todo ハンドラーの State
pub struct TodoState<R> {
   pub usecase: TodoUseCaseImpl<R>,
}

/// Todo の表現
///
/// ワイヤ上の形式: `{"id", "title", "description", "completed"}`。
/// `description` が未設定の場合は `null` になる。
#[derive(Debug, Serialize)]
pub struct TodoDto {
   pub id:          i64,
   pub title:       String,
   pub description: Option<String>,
   pub completed:   bool,
}

impl TodoDto {
   fn from_todo(todo: &Todo) -> Self {
      Self {
         id:          todo.id().as_i64(),
         title:       todo.title().as_str().to_string(),
         description: todo.description().map(ToOwned::to_owned),
         completed:   todo.completed(),
      }
   }
}

/// Todo 作成リクエスト
///
/// `title` は必須。`description` と `completed` は省略可能で、
/// 省略時はそれぞれ `null` / `false` になる。
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
   pub title:       String,
   #[serde(default)]
   pub description: Option<String>,
   #[serde(default)]
   pub completed:   bool,
}

/// Todo 部分更新リクエスト
///
/// すべてのフィールドが省略可能。ペイロードに含まれるフィールドのみが
/// マージされる（presence-vs-absence）。
///
/// `description` のみ二重 Option でデシリアライズする:
/// フィールド欠落（変更しない）と明示的な `null`（クリア）を区別するため。
/// `title` の `null` は欠落と同義（タイトルにクリアは存在しない）。
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
   #[serde(default)]
   pub title:       Option<String>,
   #[serde(default, deserialize_with = "double_option")]
   pub description: Option<Option<String>>,
   #[serde(default)]
   pub completed:   Option<bool>,
}

/// フィールドが存在した場合のみ `Some(...)` に包む
///
/// serde はフィールド欠落時に `default`（`None`）を使い、存在時のみ
/// この関数を呼ぶため、`Some(None)` が「明示的な null」になる。
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
   D: Deserializer<'de>,
{
   Option::<String>::deserialize(deserializer).map(Some)
}

/// Todo 一覧のクエリパラメータ
///
/// 負の値は型レベルで拒否される（422）。`limit` に上限は設けない。
#[derive(Debug, Deserialize)]
pub struct ListTodosQuery {
   #[serde(default)]
   pub skip:  u32,
   #[serde(default = "default_limit")]
   pub limit: u32,
}

fn default_limit() -> u32 {
   100
}

/// パスパラメータの識別子を明示的にパースする
///
/// 失敗時は 400（`malformed-id`）。fail-closed であり、暗黙の強制や
/// 404 への読み替えは行わない。
fn parse_todo_id(raw: &str) -> Result<TodoId, ApiError> {
   raw.parse::<i64>()
      .map(TodoId::from_i64)
      .map_err(|_| ApiError::MalformedId(format!("ID は整数である必要があります: {raw}")))
}

/// Todo 一覧を取得する
///
/// ## エンドポイント
/// GET /todos?skip={skip}&limit={limit}
pub async fn list_todos<R: TodoRepository>(
   State(state): State<Arc<TodoState<R>>>,
   WithRejection(Query(query), _): WithRejection<Query<ListTodosQuery>, ApiError>,
) -> Result<Json<Vec<TodoDto>>, ApiError> {
   let todos = state
      .usecase
      .list_todos(i64::from(query.skip), i64::from(query.limit))
      .await?;

   Ok(Json(todos.iter().map(TodoDto::from_todo).collect()))
}

/// ID で Todo を取得する
///
/// ## エンドポイント
/// GET /todos/{id}
pub async fn get_todo<R: TodoRepository>(
   State(state): State<Arc<TodoState<R>>>,
   Path(id): Path<String>,
) -> Result<Json<TodoDto>, ApiError> {
   let id = parse_todo_id(&id)?;
   let todo = state.usecase.get_todo(id).await?;

   Ok(Json(TodoDto::from_todo(&todo)))
}

/// Todo を作成する
///
/// ## エンドポイント
/// POST /todos
pub async fn create_todo<R: TodoRepository>(
   State(state): State<Arc<TodoState<R>>>,
   WithRejection(Json(payload), _): WithRejection<Json<CreateTodoRequest>, ApiError>,
) -> Result<(StatusCode, Json<TodoDto>), ApiError> {
   let todo = state
      .usecase
      .create_todo(CreateTodoInput {
         title:       payload.title,
         description: payload.description,
         completed:   payload.completed,
      })
      .await?;

   Ok((StatusCode::CREATED, Json(TodoDto::from_todo(&todo))))
}

/// Todo を部分更新する
///
/// ## エンドポイント
/// PUT /todos/{id}
pub async fn update_todo<R: TodoRepository>(
   State(state): State<Arc<TodoState<R>>>,
   Path(id): Path<String>,
   WithRejection(Json(payload), _): WithRejection<Json<UpdateTodoRequest>, ApiError>,
) -> Result<Json<TodoDto>, ApiError> {
   let id = parse_todo_id(&id)?;
   let todo = state
      .usecase
      .update_todo(
         id,
         UpdateTodoInput {
            title:       payload.title,
            description: payload.description,
            completed:   payload.completed,
         },
      )
      .await?;

   Ok(Json(TodoDto::from_todo(&todo)))
}

/// Todo を削除する
///
/// ## エンドポイント
/// DELETE /todos/{id}
pub async fn delete_todo<R: TodoRepository>(
   State(state): State<Arc<TodoState<R>>>,
   Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
   let id = parse_todo_id(&id)?;
   state.usecase.delete_todo(id).await?;

   Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_parse_todo_idは整数を受け入れる() {
      let id = parse_todo_id("42").unwrap();
      assert_eq!(id.as_i64(), 42);
   }

   #[test]
   fn test_parse_todo_idは非数値をmalformed_idで拒否する() {
      let result = parse_todo_id("abc");
      assert!(matches!(result, Err(ApiError::MalformedId(_))));
   }

   #[test]
   fn test_updateリクエストは欠落と明示的nullを区別する() {
      // フィールド欠落 → 変更しない
      let absent: UpdateTodoRequest = serde_json::from_str("{}").unwrap();
      assert_eq!(absent.description, None);

      // 明示的な null → クリア
      let cleared: UpdateTodoRequest = serde_json::from_str(r#"{"description": null}"#).unwrap();
      assert_eq!(cleared.description, Some(None));

      // 値あり → 置換
      let replaced: UpdateTodoRequest =
         serde_json::from_str(r#"{"description": "新しい説明"}"#).unwrap();
      assert_eq!(replaced.description, Some(Some("新しい説明".to_string())));
   }

   #[test]
   fn test_一覧クエリはデフォルト値を持つ() {
      let query: ListTodosQuery = serde_json::from_str("{}").unwrap();
      assert_eq!(query.skip, 0);
      assert_eq!(query.limit, 100);
   }
}

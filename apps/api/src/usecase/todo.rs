//! # Todo ユースケース
//!
//! Todo の CRUD 操作を実装する。検証とマージはここで行い、
//! ストアへの読み書きはリポジトリに委譲する。

use todori_domain::todo::{NewTodo, Todo, TodoId, TodoPatch, TodoTitle};
use todori_infra::repository::TodoRepository;

use crate::error::ApiError;

/// Todo 作成の入力
pub struct CreateTodoInput {
   pub title:       String,
   pub description: Option<String>,
   pub completed:   bool,
}

/// Todo 部分更新の入力
///
/// すべてのフィールドが省略可能。`None` は「変更しない」を意味する。
/// `description` の `Some(None)` は「NULL で置換」（明示的なクリア）。
pub struct UpdateTodoInput {
   pub title:       Option<String>,
   pub description: Option<Option<String>>,
   pub completed:   Option<bool>,
}

/// Todo ユースケース
///
/// リポジトリはジェネリクスで注入する。本番は
/// `PostgresTodoRepository`、テストは `MockTodoRepository`。
pub struct TodoUseCaseImpl<R> {
   repository: R,
}

impl<R: TodoRepository> TodoUseCaseImpl<R> {
   pub fn new(repository: R) -> Self {
      Self { repository }
   }

   /// Todo 一覧を取得する
   ///
   /// `skip` 件をスキップし、最大 `limit` 件を挿入順で返す。
   /// 範囲外の `skip` は空のシーケンスになる（エラーではない）。
   pub async fn list_todos(&self, skip: i64, limit: i64) -> Result<Vec<Todo>, ApiError> {
      Ok(self.repository.find_all(skip, limit).await?)
   }

   /// ID で Todo を取得する
   pub async fn get_todo(&self, id: TodoId) -> Result<Todo, ApiError> {
      self
         .repository
         .find_by_id(id)
         .await?
         .ok_or_else(|| ApiError::NotFound(format!("Todo が見つかりません: {id}")))
   }

   /// Todo を作成する
   ///
   /// 1. タイトルを検証（空・255 文字超は拒否）
   /// 2. ストアが ID を採番して永続化
   /// 3. 採番済みの完全なレコードを返す
   pub async fn create_todo(&self, input: CreateTodoInput) -> Result<Todo, ApiError> {
      let title = TodoTitle::new(input.title)?;
      let new_todo = NewTodo::new(title, input.description, input.completed);

      Ok(self.repository.insert(&new_todo).await?)
   }

   /// Todo を部分更新する
   ///
   /// 入力に含まれるフィールドのみをマージする。空の入力は合法であり、
   /// ストアへの書き込みを行わず現在のレコードをそのまま返す。
   /// ID が存在しない場合は NotFound（更新が新規作成になることはない）。
   pub async fn update_todo(&self, id: TodoId, input: UpdateTodoInput) -> Result<Todo, ApiError> {
      // ペイロードの検証はレコードの存在確認より先（422 が 404 に優先）
      let patch = TodoPatch {
         title:       input.title.map(TodoTitle::new).transpose()?,
         description: input.description,
         completed:   input.completed,
      };

      let mut todo = self
         .repository
         .find_by_id(id)
         .await?
         .ok_or_else(|| ApiError::NotFound(format!("Todo が見つかりません: {id}")))?;

      if patch.is_empty() {
         return Ok(todo);
      }

      todo.apply_patch(patch);
      self.repository.update(&todo).await?;

      Ok(todo)
   }

   /// Todo を削除する
   ///
   /// 削除は恒久的。存在しない ID は NotFound を返す
   /// （ストア自体は冪等だが、API は作業が行われたかを区別する）。
   pub async fn delete_todo(&self, id: TodoId) -> Result<(), ApiError> {
      let deleted = self.repository.delete(id).await?;

      if !deleted {
         return Err(ApiError::NotFound(format!("Todo が見つかりません: {id}")));
      }

      Ok(())
   }
}

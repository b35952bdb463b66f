//! # TodoRepository
//!
//! Todo レコードの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID はストアが採番**: `INSERT ... RETURNING` で PostgreSQL の
//!   シーケンスが割り当てた ID を取得する（シーケンスは単調増加し、
//!   削除後も再利用されない）
//! - **全行置換の更新**: 部分更新のマージはドメイン層
//!   （`Todo::apply_patch`）の責務。リポジトリは読み込み済みレコードの
//!   全フィールドを書き戻すだけ
//! - **不在はエラーではない**: 見つからない場合は `None` / `false` を返す

use async_trait::async_trait;
use sqlx::PgPool;
use todori_domain::todo::{NewTodo, Todo, TodoId, TodoTitle};

use crate::error::InfraError;

/// Todo リポジトリトレイト
///
/// Todo レコードの CRUD 操作を定義する。
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// レコードを挿入順（ID 昇順）で取得する
    ///
    /// `offset` 件をスキップし、最大 `limit` 件を返す。
    /// `offset` が総件数を超える場合は空のシーケンスを返す。
    async fn find_all(&self, offset: i64, limit: i64) -> Result<Vec<Todo>, InfraError>;

    /// ID で Todo を検索する
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;

    /// Todo を挿入し、採番された ID を含む完全なレコードを返す
    async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError>;

    /// 読み込み済みの Todo を全フィールド書き戻しで更新する
    async fn update(&self, todo: &Todo) -> Result<(), InfraError>;

    /// Todo を削除する
    ///
    /// 実際に行が削除されたかどうかを返す（存在しない ID は `false`）。
    async fn delete(&self, id: TodoId) -> Result<bool, InfraError>;
}

/// todos テーブルの行
///
/// sqlx の `FromRow` でクエリ結果からマッピングされる。
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id:          i64,
    title:       String,
    description: Option<String>,
    completed:   bool,
}

impl TodoRow {
    fn into_todo(self) -> Todo {
        // DB の NOT NULL 制約と CHECK 制約により title は常に有効
        let title = TodoTitle::new(self.title).expect("DB に格納されたタイトルは常に有効");
        Todo::from_db(
            TodoId::from_i64(self.id),
            title,
            self.description,
            self.completed,
        )
    }
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(offset, limit))]
    async fn find_all(&self, offset: i64, limit: i64) -> Result<Vec<Todo>, InfraError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description, completed
            FROM todos
            ORDER BY id ASC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TodoRow::into_todo).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description, completed
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TodoRow::into_todo))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (title, description, completed)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, completed
            "#,
        )
        .bind(new_todo.title().as_str())
        .bind(new_todo.description())
        .bind(new_todo.completed())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_todo())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %todo.id()))]
    async fn update(&self, todo: &Todo) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            UPDATE todos
            SET title = $2, description = $3, completed = $4
            WHERE id = $1
            "#,
        )
        .bind(todo.id().as_i64())
        .bind(todo.title().as_str())
        .bind(todo.description())
        .bind(todo.completed())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: TodoId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PostgresTodoRepository>();
        assert_send_sync::<Box<dyn TodoRepository>>();
    }
}

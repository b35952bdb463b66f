//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todori-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! ID の採番は PostgreSQL のシーケンスと同じ性質を持つ:
//! 単調増加し、削除後も再利用されない。

use std::sync::{
   Arc,
   Mutex,
   atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use todori_domain::todo::{NewTodo, Todo, TodoId};

use crate::{error::InfraError, repository::TodoRepository};

/// インメモリ実装の TodoRepository
///
/// `Vec` への挿入順がそのまま一覧の順序になる（ID 昇順と一致）。
#[derive(Clone, Default)]
pub struct MockTodoRepository {
   todos:   Arc<Mutex<Vec<Todo>>>,
   next_id: Arc<AtomicI64>,
}

impl MockTodoRepository {
   pub fn new() -> Self {
      Self {
         todos:   Arc::new(Mutex::new(Vec::new())),
         next_id: Arc::new(AtomicI64::new(0)),
      }
   }

   /// 格納されているレコード数を返す
   pub fn len(&self) -> usize {
      self.todos.lock().unwrap().len()
   }

   /// レコードが存在しないかどうか
   pub fn is_empty(&self) -> bool {
      self.todos.lock().unwrap().is_empty()
   }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
   async fn find_all(&self, offset: i64, limit: i64) -> Result<Vec<Todo>, InfraError> {
      Ok(self
         .todos
         .lock()
         .unwrap()
         .iter()
         .skip(offset as usize)
         .take(limit as usize)
         .cloned()
         .collect())
   }

   async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
      Ok(self
         .todos
         .lock()
         .unwrap()
         .iter()
         .find(|t| t.id() == id)
         .cloned())
   }

   async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError> {
      let id = TodoId::from_i64(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
      let todo = Todo::from_db(
         id,
         new_todo.title().clone(),
         new_todo.description().map(ToOwned::to_owned),
         new_todo.completed(),
      );
      self.todos.lock().unwrap().push(todo.clone());
      Ok(todo)
   }

   async fn update(&self, todo: &Todo) -> Result<(), InfraError> {
      let mut todos = self.todos.lock().unwrap();
      if let Some(pos) = todos.iter().position(|t| t.id() == todo.id()) {
         todos[pos] = todo.clone();
      }
      Ok(())
   }

   async fn delete(&self, id: TodoId) -> Result<bool, InfraError> {
      let mut todos = self.todos.lock().unwrap();
      let before = todos.len();
      todos.retain(|t| t.id() != id);
      Ok(todos.len() < before)
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use todori_domain::todo::TodoTitle;

   use super::*;

   fn new_todo(title: &str) -> NewTodo {
      NewTodo::new(TodoTitle::new(title).unwrap(), None, false)
   }

   #[tokio::test]
   async fn test_insertは単調増加するidを採番する() {
      let repo = MockTodoRepository::new();

      let first = repo.insert(&new_todo("一件目")).await.unwrap();
      let second = repo.insert(&new_todo("二件目")).await.unwrap();

      assert_eq!(first.id().as_i64(), 1);
      assert_eq!(second.id().as_i64(), 2);
      assert_eq!(repo.len(), 2);
   }

   #[tokio::test]
   async fn test_削除後もidは再利用されない() {
      let repo = MockTodoRepository::new();

      let first = repo.insert(&new_todo("一件目")).await.unwrap();
      repo.delete(first.id()).await.unwrap();
      let second = repo.insert(&new_todo("二件目")).await.unwrap();

      assert_eq!(second.id().as_i64(), 2);
   }

   #[tokio::test]
   async fn test_insert後のfind_by_idは同一レコードを返す() {
      let repo = MockTodoRepository::new();

      let created = repo.insert(&new_todo("牛乳を買う")).await.unwrap();
      let found = repo.find_by_id(created.id()).await.unwrap();

      assert_eq!(found, Some(created));
   }

   #[tokio::test]
   async fn test_delete後のfind_by_idはnoneを返す() {
      let repo = MockTodoRepository::new();

      let created = repo.insert(&new_todo("牛乳を買う")).await.unwrap();

      assert!(repo.delete(created.id()).await.unwrap());
      assert!(repo.is_empty());
      assert_eq!(repo.find_by_id(created.id()).await.unwrap(), None);
      // 二回目の削除はエラーではなく false
      assert!(!repo.delete(created.id()).await.unwrap());
   }

   #[tokio::test]
   async fn test_find_allはoffsetとlimitを適用する() {
      let repo = MockTodoRepository::new();
      for i in 1..=5 {
         repo.insert(&new_todo(&format!("{i} 件目"))).await.unwrap();
      }

      let page = repo.find_all(1, 2).await.unwrap();
      assert_eq!(page.len(), 2);
      assert_eq!(page[0].id().as_i64(), 2);
      assert_eq!(page[1].id().as_i64(), 3);

      // offset が総件数を超える場合は空
      assert!(repo.find_all(10, 100).await.unwrap().is_empty());

      // limit が総件数以上なら全件を一度ずつ返す
      let all = repo.find_all(0, 100).await.unwrap();
      assert_eq!(all.len(), 5);
   }
}

//! # アプリケーション構築
//!
//! State の初期化済み依存を受け取り、ルーターを組み立てる。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。
//! テストはこの関数にモックリポジトリの State を渡して、
//! 本番と同一のルーティング・レイヤー構成を検証する。

use std::sync::Arc;

use axum::{Router, routing::get};
use todori_infra::repository::TodoRepository;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handler::{
   TodoState,
   create_todo,
   delete_todo,
   get_todo,
   health_check,
   list_todos,
   read_root,
   update_todo,
};

/// ルーターを構築する
///
/// nginx をエントリポイントとする構成のため、CORS はすべての
/// オリジン・メソッド・ヘッダーを許可する。
pub fn build_app<R>(state: Arc<TodoState<R>>) -> Router
where
   R: TodoRepository + 'static,
{
   Router::new()
      .route("/", get(read_root))
      .route("/health", get(health_check))
      .route("/todos", get(list_todos::<R>).post(create_todo::<R>))
      .route(
         "/todos/{id}",
         get(get_todo::<R>)
            .put(update_todo::<R>)
            .delete(delete_todo::<R>),
      )
      .with_state(state)
      .layer(CorsLayer::permissive())
      .layer(TraceLayer::new_for_http())
}

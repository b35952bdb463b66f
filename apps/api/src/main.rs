//! # Todo API サーバー
//!
//! Todo リソースの CRUD を提供する API サーバーのエントリポイント。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p todori-api
//!
//! # 本番環境
//! API_PORT=8000 DATABASE_URL=postgres://... cargo run -p todori-api --release
//! ```
//!
//! ## 起動時の挙動
//!
//! データベースへの疎通確認とスキーマ適用は起動時に行うが、
//! 失敗してもサーバーは起動する（ログに記録するのみ）。
//! DB が一時的に落ちていても、復旧後はリクエストを処理できる。

use std::{net::SocketAddr, sync::Arc};

use todori_api::{
   app_builder::build_app,
   config::AppConfig,
   handler::TodoState,
   usecase::TodoUseCaseImpl,
};
use todori_infra::{db, repository::PostgresTodoRepository};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   tracing_subscriber::registry()
      .with(
         tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,todori=debug".into()),
      )
      .with(tracing_subscriber::fmt::layer())
      .init();

   // 設定読み込み
   let config = AppConfig::from_env()
      .expect("設定の読み込みに失敗しました（DATABASE_URL を確認してください）");

   tracing::info!(
      "Todo API サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // データベース接続プールを作成（接続は遅延確立）
   let pool =
      db::create_pool(&config.database_url).expect("データベース接続 URL が不正です");

   // 起動時の疎通確認（失敗しても起動は継続する）
   match db::ping(&pool).await {
      Ok(()) => tracing::info!("データベースに接続しました"),
      Err(e) => tracing::error!("データベースへの接続に失敗しました: {}", e),
   }

   // スキーマ適用（疎通確認と同じく、失敗しても起動を妨げない）
   if let Err(e) = db::run_migrations(&pool).await {
      tracing::warn!("マイグレーションの適用に失敗しました: {}", e);
   }

   // 依存コンポーネントを初期化
   let repository = PostgresTodoRepository::new(pool);
   let usecase = TodoUseCaseImpl::new(repository);
   let state = Arc::new(TodoState { usecase });

   // ルーター構築
   let app = build_app(state);

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Todo API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}

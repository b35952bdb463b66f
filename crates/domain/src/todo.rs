//! # Todo
//!
//! Todo エンティティとその値オブジェクトを定義する。
//!
//! ## ライフサイクル
//!
//! 1. [`NewTodo`] として作成される（ID 未割り当て）
//! 2. ストアが ID を採番し、[`Todo`] として永続化される
//! 3. 変更は [`TodoPatch`] を [`Todo::apply_patch`] で適用する
//!    （含まれるフィールドのみ置換、ID は不変）
//! 4. 削除は恒久的（復元なし）
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todori_domain::todo::{Todo, TodoId, TodoPatch, TodoTitle};
//!
//! let mut todo = Todo::from_db(
//!     TodoId::from_i64(1),
//!     TodoTitle::new("牛乳を買う")?,
//!     None,
//!     false,
//! );
//!
//! // 完了フラグのみを変更するパッチ
//! let patch = TodoPatch {
//!     completed: Some(true),
//!     ..TodoPatch::default()
//! };
//! todo.apply_patch(patch);
//!
//! assert!(todo.completed());
//! assert_eq!(todo.title().as_str(), "牛乳を買う");
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Todo の一意識別子
///
/// ストア（PostgreSQL のシーケンス）が採番するサロゲートキー。
/// 単調増加し、削除後も再利用されない。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{_0}")]
pub struct TodoId(i64);

impl TodoId {
    /// 既存の整数値から ID を作成する
    ///
    /// ID はストアが採番するため、`new()` は存在しない。
    /// ストアから読み込んだ値の復元にのみ使用する。
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

// =========================================================================
// TodoTitle（タイトル）
// =========================================================================

/// タイトルの最大文字数（DB: `VARCHAR(255)`）
const MAX_TODO_TITLE_LENGTH: usize = 255;

/// Todo のタイトル（値オブジェクト）
///
/// 1〜255 文字。前後の空白はトリミングされる。
///
/// # 不変条件
///
/// - 空文字列ではない
/// - 最大 255 文字
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("{_0}")]
pub struct TodoTitle(String);

impl TodoTitle {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "タイトルを入力してください".to_string(),
            ));
        }

        if value.chars().count() > MAX_TODO_TITLE_LENGTH {
            return Err(DomainError::Validation(
                "タイトルは 255 文字以内で入力してください".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

// =========================================================================
// Todo（エンティティ）
// =========================================================================

/// Todo エンティティ
///
/// ストアに永続化されたレコードを表す。ID はストアが採番済み。
///
/// # 不変条件
///
/// - `id` は不変（[`apply_patch`](Todo::apply_patch) でも変更されない）
/// - `title` は常に有効な [`TodoTitle`]（空で永続化されることはない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:          TodoId,
    title:       TodoTitle,
    description: Option<String>,
    completed:   bool,
}

impl Todo {
    /// ストアから読み込んだ値でエンティティを復元する
    pub fn from_db(
        id: TodoId,
        title: TodoTitle,
        description: Option<String>,
        completed: bool,
    ) -> Self {
        Self {
            id,
            title,
            description,
            completed,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// パッチを適用する
    ///
    /// パッチに含まれるフィールドのみを置換し、含まれないフィールドは
    /// 変更しない。空のパッチは何も変更しない（no-op）。
    ///
    /// `description` は二重 Option になっており、`Some(None)` は
    /// 「明示的に NULL で置換する」を意味する（フィールド欠落とは異なる）。
    pub fn apply_patch(&mut self, patch: TodoPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

// =========================================================================
// NewTodo（未永続化の Todo）
// =========================================================================

/// 未永続化の Todo
///
/// ID 割り当て前の作成リクエストを表す。ストアが ID を採番して
/// [`Todo`] に変換する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title:       TodoTitle,
    description: Option<String>,
    completed:   bool,
}

impl NewTodo {
    /// 新しい未永続化 Todo を作成する
    ///
    /// `title` は構築済みの [`TodoTitle`] を要求するため、
    /// 無効なタイトルを持つ `NewTodo` は型レベルで存在しない。
    pub fn new(title: TodoTitle, description: Option<String>, completed: bool) -> Self {
        Self {
            title,
            description,
            completed,
        }
    }

    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn completed(&self) -> bool {
        self.completed
    }
}

// =========================================================================
// TodoPatch（部分更新）
// =========================================================================

/// Todo の部分更新パッチ
///
/// 各フィールドは個別に省略可能（presence-vs-absence）。
/// `None` のフィールドは「変更しない」を意味する。
///
/// `description` のみ二重 Option:
/// - `None` — 変更しない
/// - `Some(None)` — NULL で置換（クリア）
/// - `Some(Some(text))` — 新しい値で置換
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title:       Option<TodoTitle>,
    pub description: Option<Option<String>>,
    pub completed:   Option<bool>,
}

impl TodoPatch {
    /// パッチが空（すべてのフィールドが欠落）かどうか
    ///
    /// 空のパッチは合法であり、適用しても何も変更しない。
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

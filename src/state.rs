//! プロセス全体で共有する読み取り主体の状態
//!
//! 値は部分更新せず丸ごと差し替える。読み手は `Arc` のスナップショットを受け取る。

use crate::page::{PageConfig, PageTemplate};
use serde_json::{Map, Value};
use std::sync::{Arc, RwLock};

/// 差し替え専用セル
#[derive(Debug)]
pub struct Shared<T> {
    value: RwLock<Arc<T>>,
}

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(Arc::new(value)),
        }
    }

    /// 現在値の不変スナップショット
    pub fn snapshot(&self) -> Arc<T> {
        // 書き込み側は Arc の差し替えしかしないので、ポイズンしても値は壊れていない
        self.value
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// 値を丸ごと差し替える
    pub fn replace(&self, value: T) {
        let mut guard = self.value.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(value);
    }
}

/// `/api/settings` が返すフロントエンド設定
pub type FrontendSettings = Map<String, Value>;

/// フロントエンド配信の共有状態
#[derive(Debug)]
pub struct FrontendState {
    /// ベースのページ設定（セッション固有フィールドなし）
    pub base_config: Shared<PageConfig>,
    /// templates/settings.json の内容（未読込なら空）
    pub settings: Shared<FrontendSettings>,
    /// ブートストラップページのテンプレート
    pub template: Shared<PageTemplate>,
}

impl FrontendState {
    pub fn new(base_config: PageConfig, template: PageTemplate) -> Self {
        Self {
            base_config: Shared::new(base_config),
            settings: Shared::new(FrontendSettings::new()),
            template: Shared::new(template),
        }
    }
}

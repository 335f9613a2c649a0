//! 認証まわりの外部コラボレータとの境界
//!
//! セッションからのプロフィール取得とログインプロバイダ登録の有無だけを
//! トレイトで受け取る。認証プロトコル自体は扱わない。

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// プロフィールに紐づくユーザー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUser {
    pub id: String,
    pub username: String,
}

/// ログイン中ユーザーのプロフィール
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub avatar_url: String,
    pub user: ProfileUser,
}

impl Profile {
    /// ページ設定に埋め込むコンパクトな JSON 文字列
    pub fn to_compact_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// リクエストに付随するセッション情報
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub session_id: Option<String>,
}

impl SessionContext {
    /// 未ログイン
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_session(session_id: impl Into<String>) -> Self {
        Self {
            session_id: Some(session_id.into()),
        }
    }
}

/// セッションからプロフィールを引くコラボレータ
pub trait ProfileSource: Send + Sync {
    fn session_profile(&self, ctx: &SessionContext) -> Option<Profile>;
}

/// ログインプロバイダの登録状況を返すコラボレータ
pub trait LoginProviderRegistry: Send + Sync {
    fn is_registered(&self, provider: &str) -> bool;
}

/// セッション ID → プロフィールの固定表
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfiles {
    profiles: HashMap<String, Profile>,
}

impl InMemoryProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, session_id: impl Into<String>, profile: Profile) -> Self {
        self.profiles.insert(session_id.into(), profile);
        self
    }
}

impl ProfileSource for InMemoryProfiles {
    fn session_profile(&self, ctx: &SessionContext) -> Option<Profile> {
        ctx.session_id
            .as_ref()
            .and_then(|id| self.profiles.get(id))
            .cloned()
    }
}

/// 設定ファイルで列挙されたプロバイダだけを登録済みとみなす
#[derive(Debug, Clone, Default)]
pub struct StaticLoginProviders {
    providers: HashSet<String>,
}

impl StaticLoginProviders {
    pub fn new<I, S>(providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            providers: providers.into_iter().map(Into::into).collect(),
        }
    }
}

impl LoginProviderRegistry for StaticLoginProviders {
    fn is_registered(&self, provider: &str) -> bool {
        self.providers.contains(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Profile {
        Profile {
            name: "Alice".to_string(),
            avatar_url: "https://example.com/alice.png".to_string(),
            user: ProfileUser {
                id: "u-1".to_string(),
                username: "alice".to_string(),
            },
        }
    }

    #[test]
    fn test_in_memory_profiles_lookup() {
        let profiles = InMemoryProfiles::new().with_profile("s-1", alice());

        assert_eq!(
            profiles.session_profile(&SessionContext::with_session("s-1")),
            Some(alice())
        );
        assert_eq!(
            profiles.session_profile(&SessionContext::with_session("s-2")),
            None
        );
        assert_eq!(profiles.session_profile(&SessionContext::anonymous()), None);
    }

    #[test]
    fn test_static_login_providers() {
        let registry = StaticLoginProviders::new(["github", "google"]);

        assert!(registry.is_registered("github"));
        assert!(registry.is_registered("google"));
        assert!(!registry.is_registered("gitlab"));
    }

    #[test]
    fn test_profile_compact_json_has_no_whitespace() {
        let json = alice().to_compact_json().unwrap();

        assert!(!json.contains('\n'));
        assert!(!json.contains(": "));
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, alice());
    }
}

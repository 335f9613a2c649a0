use super::*;
use proptest::prelude::*;

/// ルート名と衝突しないパスセグメント
fn segment_strategy() -> impl Strategy<Value = String> {
    "x[a-z0-9_-]{0,11}".prop_map(|s| s)
}

fn segments_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 0..6)
}

proptest! {
    /// ルート配下に通常セグメントだけを足したパスは常に含まれる
    #[test]
    fn prop_plain_descendants_are_contained(parts in segments_strategy()) {
        let roots = RootSet::new(["/srv/root"]);
        let mut candidate = PathBuf::from("/srv/root");
        for part in &parts {
            candidate.push(part);
        }

        prop_assert!(roots.contains(&candidate));
    }

    /// ルートの外に出る `..` を一つでも含めば、後続セグメントに関係なく含まれない
    #[test]
    fn prop_escaping_parent_is_rejected(
        depth in 0usize..4,
        inner in segments_strategy(),
        tail in segments_strategy(),
    ) {
        let roots = RootSet::new(["/srv/root"]);
        let mut candidate = PathBuf::from("/srv/root");
        let inner: Vec<_> = inner.into_iter().take(depth).collect();
        for part in &inner {
            candidate.push(part);
        }
        // 入った分 + 1 だけ上がるとルートの外
        for _ in 0..=inner.len() {
            candidate.push("..");
        }
        for part in &tail {
            candidate.push(part);
        }

        prop_assert!(!roots.contains(&candidate));
    }

    /// 判定は正規化後のパスに対して行われる
    #[test]
    fn prop_contains_matches_normalized_prefix(parts in segments_strategy()) {
        let roots = RootSet::new(["/srv/root", "/opt/frontend"]);
        let mut candidate = PathBuf::from("/opt/frontend/./static");
        for part in &parts {
            candidate.push(part);
            candidate.push(".");
        }

        let normalized = candidate.absolutize();
        prop_assert_eq!(
            roots.contains(&candidate),
            roots.roots().iter().any(|r| normalized.starts_with(r))
        );
        prop_assert!(roots.contains(&candidate));
    }
}

/*
 * Responsibility
 * - MetaSource から AgentHeaders を 1 回だけ読む (read_headers)
 * - ログを出さない読み取り (capture_headers)。mount 前のリクエスト取り込み用
 * - 4 フィールドが全て non-empty なら authorized (is_authorized, 純粋関数)
 * - ページ 1 回の描画 (mount) ごとの状態保持 (AgentSession)
 *
 * Notes
 * - 読み取りに失敗するケースは無い。欠けていれば None になるだけ
 * - 署名/証明書/timestamp の妥当性は見ない (存在チェックのみ)
 */
use std::sync::OnceLock;

use uuid::Uuid;

use super::source::MetaSource;
use super::types::{AgentField, AgentHeaders};

/// 4 つの値を読むだけ。フィールドごとのログは出さない
///
/// per-field の present/missing ログは mount (read_headers) 側だけが出す
pub fn capture_headers<S: MetaSource + ?Sized>(source: &S) -> AgentHeaders {
    let mut headers = AgentHeaders::default();
    for field in AgentField::ALL {
        headers.set(field, source.meta_content(field.meta_name()));
    }
    headers
}

/// 4 つの meta 値を読み取って AgentHeaders にまとめる
pub fn read_headers<S: MetaSource + ?Sized>(source: &S) -> AgentHeaders {
    let mut headers = AgentHeaders::default();

    for field in AgentField::ALL {
        let value = source.meta_content(field.meta_name());
        let status = if value.as_deref().is_some_and(|v| !v.is_empty()) {
            "present"
        } else {
            "missing"
        };
        tracing::debug!(header = field.meta_name(), status, "agent header");
        headers.set(field, value);
    }

    headers
}

/// 全フィールドが present (Some かつ non-empty) のときだけ true
pub fn is_authorized(headers: &AgentHeaders) -> bool {
    AgentField::ALL.into_iter().all(|f| headers.is_present(f))
}

/// mount 時に確定した値。以後変更されない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSnapshot {
    pub headers: AgentHeaders,
    pub is_authorized: bool,
}

/// ページ 1 回分の agent 状態
///
/// - 生成直後は unread (headers = None, is_authorized = false)
/// - `mount()` の初回呼び出しで 1 度だけ読み取り、以後は固定
/// - 2 回目以降の `mount()` は source を読まずに初回の結果を返す
#[derive(Debug)]
pub struct AgentSession {
    mount_id: Uuid,
    snapshot: OnceLock<AgentSnapshot>,
}

impl AgentSession {
    pub fn new() -> Self {
        Self {
            mount_id: Uuid::new_v4(),
            snapshot: OnceLock::new(),
        }
    }

    pub fn mount<S: MetaSource + ?Sized>(&self, source: &S) -> &AgentSnapshot {
        if let Some(snapshot) = self.snapshot.get() {
            tracing::debug!(mount_id = %self.mount_id, "agent session already mounted");
            return snapshot;
        }

        self.snapshot.get_or_init(|| {
            let headers = read_headers(source);
            let authorized = is_authorized(&headers);

            tracing::info!(
                mount_id = %self.mount_id,
                authorized,
                agent_id = headers.agent_id.as_deref().unwrap_or("-"),
                "agent authorization evaluated"
            );

            AgentSnapshot {
                headers,
                is_authorized: authorized,
            }
        })
    }

    pub fn mount_id(&self) -> Uuid {
        self.mount_id
    }

    /// unread の間は None
    pub fn headers(&self) -> Option<&AgentHeaders> {
        self.snapshot.get().map(|s| &s.headers)
    }

    pub fn is_authorized(&self) -> bool {
        self.snapshot.get().is_some_and(|s| s.is_authorized)
    }
}

impl Default for AgentSession {
    fn default() -> Self {
        Self::new()
    }
}

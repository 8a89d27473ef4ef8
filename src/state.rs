/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - site: タイトル / テーマ, catalog: 記事一覧
 * - Clone 前提で持つ (内部は Arc/Clone cheap)。起動後は読み取りのみ
 */
use std::sync::Arc;

use crate::blog::{content::Catalog, page::Site};

#[derive(Clone, Debug)]
pub struct AppState {
    pub site: Arc<Site>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(site: Site, catalog: Catalog) -> Self {
        Self {
            site: Arc::new(site),
            catalog: Arc::new(catalog),
        }
    }
}

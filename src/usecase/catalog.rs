//! UseCase: カタログセッションの制御
//!
//! ページセッションごとに 1 つ生成されるカタログコントローラ。
//! マスターセット（ロード時に確定）とワーキングセット（フィルタ条件が
//! 変わるたびに全再計算）を所有し、詳細表示・予約導線のための
//! ビューモデルを生成します。

use std::sync::Arc;

use crate::domain::{FilterCriteria, Room, RoomProvider, DEFAULT_LANGUAGE};
use crate::view::detail::{self, BookingTarget, RoomDetailView};

use super::error::CatalogError;

/// Engine lifecycle state.
///
/// There are exactly two states: `Loading` between request start and
/// completion, `Ready` afterwards. A failed load still ends in `Ready`
/// with an empty master set; the load error itself is the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogState {
    Loading,
    Ready,
}

/// カタログコントローラ
///
/// マスターセットはロードサイクルごとに一度だけ書き込まれ、以降は
/// 読み取り専用。ワーキングセットは常に全置換されます。
pub struct Catalog {
    /// Provider（データ取得層の抽象化）
    provider: Arc<dyn RoomProvider>,
    /// セッション言語（名前解決とテキスト検索に使用）
    language: String,
    state: CatalogState,
    master: Vec<Room>,
    working: Vec<Room>,
    criteria: FilterCriteria,
}

impl Catalog {
    /// Recommended debounce interval before text-input-driven UIs call
    /// [`Catalog::apply_filters`] again, in milliseconds. Filtering is
    /// synchronous on the UI thread, so rapid keystrokes should be
    /// coalesced.
    pub const SEARCH_DEBOUNCE_MS: u64 = 300;

    /// 新しい Catalog を作成（言語はデフォルトの "RU"）
    pub fn new(provider: Arc<dyn RoomProvider>) -> Self {
        Self::with_language(provider, DEFAULT_LANGUAGE)
    }

    /// セッション言語を指定して Catalog を作成
    pub fn with_language(provider: Arc<dyn RoomProvider>, language: &str) -> Self {
        Self {
            provider,
            language: language.to_string(),
            state: CatalogState::Ready,
            master: Vec::new(),
            working: Vec::new(),
            criteria: FilterCriteria::default(),
        }
    }

    /// ルームコレクションをロードする
    ///
    /// プロバイダから全件を取得し、`is_active == false` の部屋を除外して
    /// マスターセットを確定します。ワーキングセットはマスターセットの
    /// コピー、フィルタ条件はデフォルトに戻ります。
    ///
    /// # Returns
    ///
    /// * `Ok(())` - ロード成功（0 件でも成功）
    /// * `Err(CatalogError::Load)` - プロバイダ失敗。マスター・ワーキング
    ///   両セットは空になり、エンジンは空の `Ready` 状態のまま使用可能。
    pub async fn load(&mut self) -> Result<(), CatalogError> {
        self.state = CatalogState::Loading;
        self.criteria = FilterCriteria::default();

        match self.provider.fetch_rooms().await {
            Ok(rooms) => {
                let fetched = rooms.len();
                self.master = rooms.into_iter().filter(|room| room.is_active).collect();
                self.working = self.master.clone();
                self.state = CatalogState::Ready;
                tracing::info!(
                    fetched,
                    active = self.master.len(),
                    "room catalog loaded"
                );
                Ok(())
            }
            Err(source) => {
                self.master.clear();
                self.working.clear();
                self.state = CatalogState::Ready;
                tracing::warn!(error = %source, "room catalog load failed, staying empty");
                Err(CatalogError::Load { source })
            }
        }
    }

    /// フィルタ条件を適用してワーキングセットを全再計算する
    ///
    /// 常に成功します（結果が 0 件でも正常）。
    pub fn apply_filters(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.working = self.criteria.apply(&self.master, &self.language);
        tracing::debug!(
            total = self.master.len(),
            matched = self.working.len(),
            "filters applied"
        );
    }

    /// フィルタ条件をデフォルトに戻して再適用する
    ///
    /// 結果のワーキングセットはマスターセットと同一（元の順序）になります。
    pub fn reset_filters(&mut self) {
        self.apply_filters(FilterCriteria::default());
    }

    /// 部屋の詳細ビューを開く
    ///
    /// マスターセット内を id で検索します（追加のネットワーク取得なし）。
    ///
    /// # Returns
    ///
    /// * `Ok(RoomDetailView)` - 詳細ビューモデル
    /// * `Err(CatalogError::RoomNotFound)` - id がマスターセットに無い
    pub fn open_details(&self, room_id: &str) -> Result<RoomDetailView, CatalogError> {
        let room = self.find_room(room_id)?;
        Ok(detail::render(room, &self.language))
    }

    /// 部屋の予約導線を開く
    ///
    /// `open_details` と同じ検索規則で、予約画面向けの最小ビューモデルを
    /// 返します。
    pub fn open_booking(&self, room_id: &str) -> Result<BookingTarget, CatalogError> {
        let room = self.find_room(room_id)?;
        Ok(detail::booking_target(room, &self.language))
    }

    /// 現在のワーキングセット（描画の入力）
    pub fn rooms(&self) -> &[Room] {
        &self.working
    }

    /// 現在のフィルタ条件
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// セッション言語
    pub fn language(&self) -> &str {
        &self.language
    }

    /// エンジンの状態
    pub fn state(&self) -> CatalogState {
        self.state
    }

    /// マスターセットの件数（フィルタ前の総数）
    pub fn total_rooms(&self) -> usize {
        self.master.len()
    }

    fn find_room(&self, room_id: &str) -> Result<&Room, CatalogError> {
        self.master
            .iter()
            .find(|room| room.id == room_id)
            .ok_or_else(|| CatalogError::RoomNotFound {
                id: room_id.to_string(),
            })
    }
}

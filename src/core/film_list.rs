use crate::core::payload::decode_film_list;
use crate::core::{Film, FilmList, GraphQLRequest, QueryChannel};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Pending,
    Ready(FilmList),
    Failed(String),
}

/// 電影清單視圖：每次 mount 發出一次查詢，不重用先前的結果
#[derive(Debug, Clone)]
pub struct FilmListView {
    request: GraphQLRequest,
    state: ViewState,
}

impl FilmListView {
    pub fn new(request: GraphQLRequest) -> Self {
        Self {
            request,
            state: ViewState::Pending,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == ViewState::Pending
    }

    /// 目前可顯示的列；尚未完成或失敗時為空
    pub fn rows(&self) -> &[Film] {
        match &self.state {
            ViewState::Ready(films) => films.as_slice(),
            ViewState::Pending | ViewState::Failed(_) => &[],
        }
    }

    /// Pending -> Ready / Failed，錯誤往外拋給顯示外殼
    pub async fn mount(&mut self, channel: &dyn QueryChannel) -> Result<&[Film]> {
        self.state = ViewState::Pending;

        let outcome = match channel.fetch(&self.request).await {
            Ok(payload) => decode_film_list(payload),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(result) => {
                let films = result.unwrap_or_default();
                tracing::debug!("Loaded {} films", films.len());
                self.state = ViewState::Ready(films);
                Ok(self.rows())
            }
            Err(e) => {
                self.state = ViewState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn unmount(&mut self) {
        self.state = ViewState::Pending;
    }
}

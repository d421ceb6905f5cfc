use serde::{Deserialize, Deserializer, Serialize};

/// 單一電影紀錄，取得後不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    #[serde(deserialize_with = "deserialize_opaque_id")]
    pub id: String,
    pub title: String,
    pub director: String,
}

/// 依伺服器回應順序排列
pub type FilmList = Vec<Film>;

/// `None` 代表尚無資料或查詢結果為空
pub type QueryResult = Option<FilmList>;

/// `FilmListQuery` 回應中 `data` 的形狀
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilmListData {
    #[serde(rename = "allFilms", default)]
    pub all_films: Option<FilmConnection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilmConnection {
    #[serde(default)]
    pub films: Option<Vec<Film>>,
}

impl FilmListData {
    pub fn into_query_result(self) -> QueryResult {
        self.all_films.and_then(|connection| connection.films)
    }
}

/// GraphQL ID 可能以字串或數字傳回，一律保存為字串
fn deserialize_opaque_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OpaqueId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match OpaqueId::deserialize(deserializer)? {
        OpaqueId::Text(s) => s,
        OpaqueId::Number(n) => n.to_string(),
    })
}

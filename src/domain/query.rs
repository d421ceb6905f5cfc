use crate::utils::error::{FilmError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

pub const FILM_LIST_QUERY: &str = r#"query FilmListQuery {
  allFilms {
    films {
      id
      title
      director
    }
  }
}"#;

/// 送往 `/graphql` 的請求主體：`{"query": ..., "variables": ...}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQLRequest {
    query: String,
    variables: Map<String, Value>,
}

impl GraphQLRequest {
    pub fn new(query: impl Into<String>, variables: Map<String, Value>) -> Result<Self> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(FilmError::ValidationError {
                message: "GraphQL query cannot be empty".to_string(),
            });
        }
        Ok(Self { query, variables })
    }

    pub fn film_list() -> Self {
        Self {
            query: FILM_LIST_QUERY.to_string(),
            variables: Map::new(),
        }
    }

    pub fn variables(&self) -> &Map<String, Value> {
        &self.variables
    }

    /// 擷取 `query Name` 中的操作名稱，僅供日誌使用
    pub fn operation_name(&self) -> Option<&str> {
        let rest = self.query.trim_start().strip_prefix("query")?;
        let name = rest
            .trim_start()
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .next()?;
        (!name.is_empty()).then_some(name)
    }
}

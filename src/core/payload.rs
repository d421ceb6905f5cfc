use crate::core::{FilmListData, QueryResult};
use crate::utils::error::{FilmError, Result};
use serde_json::Value;

/// 將回應主體解碼為電影清單。
///
/// 接受 `{"data": {...}}` 標準信封以及直接的 `{"allFilms": ...}` 兩種形式。
/// 形狀不符視為整體失敗，不會回傳部分資料。
pub fn decode_film_list(payload: Value) -> Result<QueryResult> {
    let Value::Object(mut envelope) = payload else {
        return Err(FilmError::MalformedResponse {
            message: "response body is not a JSON object".to_string(),
        });
    };

    let errors = envelope
        .remove("errors")
        .and_then(|errors| graphql_error_message(&errors));
    if let Some(message) = &errors {
        tracing::warn!("⚠️ GraphQL response carried errors: {}", message);
    }

    let data = match envelope.remove("data") {
        Some(Value::Null) => None,
        Some(data) => Some(data),
        None if envelope.contains_key("allFilms") || errors.is_none() => {
            Some(Value::Object(envelope))
        }
        None => None,
    };

    // 沒有資料但帶有 errors 時整體失敗；單純 data: null 仍視為空結果
    let Some(data) = data else {
        return match errors {
            Some(message) => Err(FilmError::GraphQLError { message }),
            None => Ok(None),
        };
    };

    let data: FilmListData =
        serde_json::from_value(data).map_err(|e| FilmError::MalformedResponse {
            message: e.to_string(),
        })?;

    Ok(data.into_query_result())
}

/// 串接 `errors` 陣列中的 `message`；空陣列或 null 視為沒有錯誤
fn graphql_error_message(errors: &Value) -> Option<String> {
    match errors {
        Value::Null => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| match item.get("message").and_then(Value::as_str) {
                    Some(message) => message.to_string(),
                    None => item.to_string(),
                })
                .collect::<Vec<_>>()
                .join("; "),
        ),
        other => Some(other.to_string()),
    }
}

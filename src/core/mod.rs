pub mod channel;
pub mod film_list;
pub mod payload;

pub use crate::domain::model::{Film, FilmList, FilmListData, QueryResult};
pub use crate::domain::ports::{ConfigProvider, QueryChannel};
pub use crate::domain::query::GraphQLRequest;
pub use crate::utils::error::Result;

// Domain layer: film models, the GraphQL request and ports (interfaces).

pub mod model;
pub mod ports;
pub mod query;

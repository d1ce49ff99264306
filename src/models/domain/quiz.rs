use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: i64, // assigned by the store on insert, immutable afterwards
    pub title: String,
    pub description: String,
}

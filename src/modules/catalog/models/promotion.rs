use serde::{Deserialize, Serialize};

/// A marketing promotion products can be placed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: i64,
    pub description: Option<String>,
}

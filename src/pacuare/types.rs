use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tabular result of a query: named columns and positional row values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub columns: Vec<String>,
    #[serde(rename = "values", default)]
    pub rows: Vec<Vec<Value>>,
}

impl QueryResult {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Body of `POST /query`
#[derive(Debug, Clone, Serialize)]
pub(crate) struct QueryRequest<'a> {
    pub(crate) query: &'a str,
    pub(crate) params: &'a [String],
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_wire_format() {
        let result: QueryResult = serde_json::from_value(json!({
            "columns": ["id", "species"],
            "values": [[1, "Chelonia mydas"], [2, null]]
        }))
        .unwrap();

        assert_eq!(result.columns, vec!["id", "species"]);
        assert_eq!(result.row_count(), 2);
        assert_eq!(result.rows[1][1], Value::Null);
    }

    #[test]
    fn test_decode_without_values() {
        let result: QueryResult = serde_json::from_value(json!({ "columns": ["n"] })).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_encode_request() {
        let params = vec!["2023".to_string()];
        let body = serde_json::to_value(QueryRequest {
            query: "SELECT * FROM pacuare_raw WHERE season = $1",
            params: &params,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "query": "SELECT * FROM pacuare_raw WHERE season = $1",
                "params": ["2023"]
            })
        );
    }
}

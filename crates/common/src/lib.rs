pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn db_health_serializes_state_and_skips_missing_error() {
        let up = serde_json::to_value(types::DbHealth::up()).unwrap();
        assert_eq!(up, serde_json::json!({"db": "up"}));

        let down = serde_json::to_value(types::DbHealth::down("connection refused")).unwrap();
        assert_eq!(down["db"], "down");
        assert_eq!(down["error"], "connection refused");
    }
}

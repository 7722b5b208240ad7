pub mod types;
pub mod utils;
pub mod pagination;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "healthy" };
        assert_eq!(h.status, "healthy");
    }

    #[test]
    fn message_serializes_as_single_field() {
        let m = types::Message::new("Order deleted successfully");
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v, serde_json::json!({"message": "Order deleted successfully"}));
    }
}

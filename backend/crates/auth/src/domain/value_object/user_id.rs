pub use kernel::id::UserId;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_store_value() {
        let user_id = UserId::new(2);
        assert_eq!(user_id.get(), 2);
        assert_eq!(serde_json::to_value(user_id).unwrap(), serde_json::json!(2));
    }
}

use crate::domain::entities::{Account, BusinessMeta, Role};

#[test]
fn test_account_constructors_set_role() {
    let admin = Account::new_admin("root", "hash");
    assert_eq!(admin.role, Role::Admin);
    assert_eq!(admin.login.as_deref(), Some("root"));
    assert!(admin.phone_number.is_none());

    let worker = Account::new_worker("cook", "hash", "Ivan");
    assert_eq!(worker.role, Role::Worker);
    assert_eq!(worker.name.as_deref(), Some("Ivan"));

    let customer = Account::new_customer("+79991234567", None);
    assert_eq!(customer.role, Role::Customer);
    assert!(customer.login.is_none());
    assert!(customer.password_hash.is_none());
}

#[test]
fn test_account_ids_are_unique() {
    let a = Account::new_customer("1", None);
    let b = Account::new_customer("1", None);
    assert_ne!(a.id, b.id);
    assert_eq!(a.identity().user_id, a.id);
}

#[test]
fn test_password_hash_is_not_serialized() {
    let json = serde_json::to_value(Account::new_admin("root", "secret-hash")).unwrap();
    assert!(json.get("password_hash").is_none());
}

#[test]
fn test_business_meta_camel_case() {
    let meta = BusinessMeta::new(400, 100);
    let json = serde_json::to_value(meta).unwrap();
    assert_eq!(json["deliveryPunishmentThreshold"], 400);
    assert_eq!(json["deliveryPunishmentValue"], 100);
}

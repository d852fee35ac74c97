//! Password hashing tests.

use musicdb::auth::password;
use musicdb::errors::AppError;

#[test]
fn test_hash_and_verify_roundtrip() {
    let hash = password::hash_password("correct horse battery").expect("hash failed");
    assert!(hash.starts_with("$argon2"));
    assert!(password::verify_password("correct horse battery", &hash).unwrap());
}

#[test]
fn test_wrong_password_rejected() {
    let hash = password::hash_password("correct horse battery").expect("hash failed");
    assert!(!password::verify_password("wrong horse", &hash).unwrap());
}

#[test]
fn test_hashes_are_salted() {
    let a = password::hash_password("same input").unwrap();
    let b = password::hash_password("same input").unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_garbage_hash_is_a_hash_error() {
    let err = password::verify_password("anything", "not-a-phc-string").unwrap_err();
    assert!(matches!(err, AppError::Hash(_)));
}

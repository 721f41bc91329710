use rms_auth::{hash_password, verify_password_and_maybe_upgrade};

#[test]
fn argon2_hash_verifies() {
    let hash = hash_password("admin123").expect("hash");
    assert!(hash.starts_with("$argon2"));

    let check = verify_password_and_maybe_upgrade(&hash, "admin123").expect("verify");
    assert!(check.verified);
    assert!(check.upgrade_hash.is_none());

    let check = verify_password_and_maybe_upgrade(&hash, "wrong").expect("verify");
    assert!(!check.verified);
}

#[test]
fn plaintext_seed_upgrades_on_match() {
    let check = verify_password_and_maybe_upgrade("admin123", "admin123").expect("verify");
    assert!(check.verified);
    let upgraded = check.upgrade_hash.expect("upgrade");
    assert!(upgraded.starts_with("$argon2"));
}

#[test]
fn plaintext_seed_mismatch_does_not_upgrade() {
    let check = verify_password_and_maybe_upgrade("admin123", "nope").expect("verify");
    assert!(!check.verified);
    assert!(check.upgrade_hash.is_none());
}

use uuid::Uuid;

/// Mints an opaque credential token for a tourist. Issuance is a
/// notification step: the roster's issuance flags are owned by the seed
/// and stay untouched.
pub fn issue_credential(tourist_id: &str) -> String {
    let raw = Uuid::new_v4().simple().to_string();
    let token = format!("bc_0x{}", raw[..10].to_uppercase());
    tracing::info!(tourist_id, token = %token, "issued identity credential");
    token
}

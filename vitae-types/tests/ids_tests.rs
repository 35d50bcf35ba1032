use vitae_types::{ResumeId, SectionId};

// ── SectionId ────────────────────────────────────────────────────

#[test]
fn section_id_wraps_remote_string() {
    let id = SectionId::new("sec_01HX");
    assert_eq!(id.as_str(), "sec_01HX");
    assert_eq!(id.to_string(), "sec_01HX");
}

#[test]
fn section_id_generate_is_unique() {
    let a = SectionId::generate();
    let b = SectionId::generate();
    assert_ne!(a, b);
}

#[test]
fn section_id_from_str_is_infallible() {
    let id: SectionId = "anything at all".parse().unwrap();
    assert_eq!(id.as_str(), "anything at all");
}

#[test]
fn section_id_from_conversions() {
    assert_eq!(SectionId::from("x"), SectionId::new("x"));
    assert_eq!(SectionId::from("x".to_string()), SectionId::new("x"));
}

#[test]
fn section_id_serde_is_transparent() {
    let id = SectionId::new("e1");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"e1\"");
    let back: SectionId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn section_id_hash_eq() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(SectionId::new("e1"));
    set.insert(SectionId::new("e1"));
    assert_eq!(set.len(), 1);
}

// ── ResumeId ─────────────────────────────────────────────────────

#[test]
fn resume_id_wraps_remote_string() {
    let id = ResumeId::new("res_42");
    assert_eq!(id.as_str(), "res_42");
    assert_eq!(id.to_string(), "res_42");
}

#[test]
fn resume_id_generate_is_unique() {
    assert_ne!(ResumeId::generate(), ResumeId::generate());
}

#[test]
fn resume_id_serde_is_transparent() {
    let id = ResumeId::new("res_42");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"res_42\"");
    let back: ResumeId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

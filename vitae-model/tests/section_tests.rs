use serde_json::json;
use vitae_model::Section;
use vitae_types::{SectionId, SectionKind};

fn make_section(data: serde_json::Value) -> Section {
    Section::new(SectionId::new("sec-1"), SectionKind::Education, data)
}

// ── Construction & fields ────────────────────────────────────────

#[test]
fn section_fields_accessible() {
    let s = make_section(json!({"school": "MIT"}));
    assert_eq!(s.id, SectionId::new("sec-1"));
    assert_eq!(s.kind, SectionKind::Education);
    assert_eq!(s.index, 0);
}

#[test]
fn section_data_is_json_value() {
    let s = make_section(json!({"years": 4, "nested": {"honors": true}}));
    assert_eq!(s.data["years"], 4);
    assert_eq!(s.data["nested"]["honors"], true);
}

// ── JSON pointer helpers ─────────────────────────────────────────

#[test]
fn get_str_returns_string_field() {
    let s = make_section(json!({"school": "MIT", "years": 4}));
    assert_eq!(s.get_str("/school"), Some("MIT"));
}

#[test]
fn get_str_returns_none_for_non_string() {
    let s = make_section(json!({"years": 4}));
    assert_eq!(s.get_str("/years"), None);
}

#[test]
fn get_str_with_nested_path() {
    let s = make_section(json!({"degree": {"field": "CS"}}));
    assert_eq!(s.get_str("/degree/field"), Some("CS"));
}

#[test]
fn get_bool_returns_boolean_field() {
    let s = make_section(json!({"current": true}));
    assert_eq!(s.get_bool("/current"), Some(true));
}

#[test]
fn get_number_returns_numeric_field() {
    let s = make_section(json!({"gpa": 3.9, "years": 4}));
    assert_eq!(s.get_number("/gpa"), Some(3.9));
    assert_eq!(s.get_number("/years"), Some(4.0));
}

#[test]
fn accessors_return_none_for_missing_path() {
    let s = make_section(json!({}));
    assert_eq!(s.get_str("/missing"), None);
    assert_eq!(s.get_bool("/missing"), None);
    assert_eq!(s.get_number("/missing"), None);
}

// ── Serialization ────────────────────────────────────────────────

#[test]
fn serde_roundtrip() {
    let mut original = make_section(json!({"school": "MIT", "tags": ["a", "b"]}));
    original.index = 7;

    let json_str = serde_json::to_string(&original).unwrap();
    let parsed: Section = serde_json::from_str(&json_str).unwrap();

    assert_eq!(parsed.id, original.id);
    assert_eq!(parsed.kind, original.kind);
    assert_eq!(parsed.index, 7);
    assert_eq!(parsed.data, original.data);
}

#[test]
fn deserialize_from_known_json() {
    let json_str = r#"{
        "id": "abc",
        "kind": "experience",
        "index": 2,
        "data": {"employer": "Acme"}
    }"#;
    let s: Section = serde_json::from_str(json_str).unwrap();
    assert_eq!(s.id, SectionId::new("abc"));
    assert_eq!(s.kind, SectionKind::Experience);
    assert_eq!(s.index, 2);
    assert_eq!(s.get_str("/employer"), Some("Acme"));
}

// ── Clone ────────────────────────────────────────────────────────

#[test]
fn section_clone_is_independent() {
    let s = make_section(json!({"school": "original"}));
    let mut cloned = s.clone();
    cloned.data["school"] = json!("modified");

    assert_eq!(s.get_str("/school"), Some("original"));
    assert_eq!(cloned.get_str("/school"), Some("modified"));
}

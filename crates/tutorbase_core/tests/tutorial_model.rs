use tutorbase_core::Tutorial;

#[test]
fn new_records_start_without_identity() {
    let tutorial = Tutorial::new("title", "body", true);

    assert_eq!(tutorial.id, None);
    assert!(!tutorial.is_persisted());
    assert_eq!(tutorial.title, "title");
    assert_eq!(tutorial.description, "body");
    assert!(tutorial.published);
}

#[test]
fn with_id_records_report_persisted() {
    let tutorial = Tutorial::with_id(12, "title", "body", false);

    assert_eq!(tutorial.id, Some(12));
    assert!(tutorial.is_persisted());
}

#[test]
fn serialization_uses_stable_field_names() {
    let tutorial = Tutorial::with_id(3, "Spring Boot Guide", "java crud", true);

    let json = serde_json::to_value(&tutorial).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["title"], "Spring Boot Guide");
    assert_eq!(json["description"], "java crud");
    assert_eq!(json["published"], true);

    let unsaved = Tutorial::new("draft", "body", false);
    let json = serde_json::to_value(&unsaved).unwrap();
    assert!(json["id"].is_null());
}

use jotter_core::{Note, NoteId};

#[test]
fn note_serializes_id_as_file_name() {
    let note = Note::new(NoteId::from_epoch_ms(1_700_000_000_000), "hello");
    let json = serde_json::to_value(&note).unwrap();

    assert_eq!(json["id"], "note_1700000000000.txt");
    assert_eq!(json["content"], "hello");
}

#[test]
fn note_deserialization_rejects_malformed_id() {
    let err = serde_json::from_str::<Note>(r#"{"id":"../etc/passwd","content":"x"}"#)
        .expect_err("malformed id must not deserialize");
    assert!(err.to_string().contains("invalid note id"));

    let ok: Note = serde_json::from_str(r#"{"id":"note_5.txt","content":"x"}"#).unwrap();
    assert_eq!(ok.id.created_at_ms(), 5);
}

/// Edge case integration tests
///
/// These tests cover filesystem quirks, encoding corner cases and unusual
/// export contents
mod common;

use std::fs;

use common::{ChunkBuilder, ExportBuilder, MessageBuilder, corrupt};
use messenger_history_parser::schema::{RecordKind, SchemaError};
use messenger_history_parser::{LoadOptions, Validate, load_chunk, load_thread_dir, recode};

#[test]
fn test_edge_case_recode_round_trips_arbitrary_text() {
    let samples = [
        "",
        "ascii only",
        "Ελληνικά",
        "עברית",
        "中文字符",
        "mixed: naïve café 😀 — “quotes”",
        "\u{10ffff}",
        "tab\tand\nnewline",
    ];
    for original in samples {
        assert_eq!(recode(&corrupt(original)), original);
    }
}

#[test]
fn test_edge_case_recode_never_panics_on_any_byte_string() {
    // Every length up to three over a spread of byte values
    let values: Vec<char> = (0u8..=255).step_by(5).map(char::from).collect();
    assert_eq!(recode(""), "");
    for a in &values {
        let _ = recode(&a.to_string());
        for b in &values {
            let _ = recode(&[*a, *b].iter().collect::<String>());
            for c in values.iter().step_by(9) {
                let _ = recode(&[*a, *b, *c].iter().collect::<String>());
            }
        }
    }
}

#[test]
fn test_edge_case_uppercase_chunk_names() {
    let export = ExportBuilder::new().build();
    let dir = export.path();
    ChunkBuilder::new().with_timestamps(&[2]).create_in(dir, "MESSAGE_1.JSON");
    ChunkBuilder::new().with_timestamps(&[1]).create_in(dir, "Message_2.Json");
    ChunkBuilder::new().with_timestamps(&[0]).create_in(dir, "message_3.json.tmp");

    let thread = load_thread_dir(dir, &LoadOptions::default()).unwrap();
    let stamps: Vec<i64> = thread.messages.iter().map(|m| m.timestamp_ms).collect();
    assert_eq!(stamps, vec![1, 2]);
}

#[test]
fn test_edge_case_empty_message_list() {
    let export = ExportBuilder::new()
        .with_thread("inbox/quiet_1", &[ChunkBuilder::new(), ChunkBuilder::new()])
        .build();

    let thread =
        load_thread_dir(&export.path().join("inbox/quiet_1"), &LoadOptions::default()).unwrap();
    assert!(thread.messages.is_empty());
    assert!(thread.first_message_at().is_none());
    assert_eq!(thread.path_identifier(), "quiet_1");
}

#[test]
fn test_edge_case_first_chunk_supplies_conversation_fields() {
    let export = ExportBuilder::new()
        .with_thread(
            "inbox/renamed_1",
            &[
                ChunkBuilder::new().title("New name").with_timestamps(&[5]),
                ChunkBuilder::new().title("Old name").with_timestamps(&[1]),
            ],
        )
        .build();

    let thread =
        load_thread_dir(&export.path().join("inbox/renamed_1"), &LoadOptions::default()).unwrap();
    assert_eq!(thread.title.as_deref(), Some("New name"));
}

#[test]
fn test_edge_case_invalid_utf8_after_recovery_fails_load() {
    // A lone 0xE9 is Latin-1 "é" written by something other than the exporter
    let export = ExportBuilder::new()
        .with_file(
            "inbox/latin1_1/message_1.json",
            r#"{"participants":[{"name":"René"}],"messages":[]}"#,
        )
        .build();

    let err = load_thread_dir(&export.path().join("inbox/latin1_1"), &LoadOptions::default())
        .unwrap_err();
    assert!(format!("{:#}", err).contains("not valid UTF-8"));
}

#[test]
fn test_edge_case_null_optional_fields() {
    let export = ExportBuilder::new()
        .with_file(
            "inbox/nulls_1/message_1.json",
            r#"{"participants":[],"messages":[{"sender_name":"A","timestamp_ms":1,"content":null,"share":null}],"title":null,"image":null}"#,
        )
        .build();

    let thread =
        load_thread_dir(&export.path().join("inbox/nulls_1"), &LoadOptions::default()).unwrap();
    assert!(thread.title.is_none());
    assert!(thread.messages[0].content.is_none());
    assert!(thread.messages[0].share.is_none());
}

#[test]
fn test_edge_case_ai_sticker_payload_is_unsupported() {
    let message = MessageBuilder::new()
        .extra_field("sticker", r#"{"uri":"s.png","ai_stickers":[{"prompt":"cat"}]}"#);
    let export = ExportBuilder::new()
        .with_thread("inbox/sticky_1", &[ChunkBuilder::new().with_message(message)])
        .build();
    let dir = export.path().join("inbox/sticky_1");

    let chunk = load_chunk(&dir.join("message_1.json")).unwrap();
    assert_eq!(
        chunk.validate(),
        Err(SchemaError::Unsupported { record: RecordKind::Sticker, field: "ai_stickers" })
    );
    assert!(load_thread_dir(&dir, &LoadOptions::default().validate(false)).is_ok());
}

#[test]
fn test_edge_case_chunk_size_limit() {
    let export = ExportBuilder::new()
        .with_thread("inbox/big_1", &[ChunkBuilder::new().with_timestamps(&[1, 2, 3])])
        .build();
    let dir = export.path().join("inbox/big_1");

    let err = load_thread_dir(&dir, &LoadOptions::default().max_chunk_bytes(16)).unwrap_err();
    assert!(err.to_string().contains("File too large"));
}

#[test]
fn test_edge_case_unreadable_chunk_does_not_leak_into_other_threads() {
    let export = ExportBuilder::new()
        .with_thread("inbox/ok_1", &[ChunkBuilder::new().with_timestamps(&[1])])
        .build();
    fs::create_dir_all(export.path().join("inbox/broken_2")).unwrap();
    fs::write(export.path().join("inbox/broken_2/message_1.json"), "{").unwrap();

    assert!(load_thread_dir(&export.path().join("inbox/broken_2"), &LoadOptions::default()).is_err());
    assert!(load_thread_dir(&export.path().join("inbox/ok_1"), &LoadOptions::default()).is_ok());
}

use crate::fs_manager::{PortablePathManager, HOME_ENV};
use crate::transcript::{ChatTranscript, Role};
use std::fs;

#[test]
fn test_export_writes_rendered_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut transcript = ChatTranscript::new();
    transcript.push(Role::User, "最近总是焦虑");
    transcript.push(Role::Assistant, "先试试 4-4-6 深呼吸。");

    let path = transcript.export_to(dir.path()).expect("export should succeed");

    assert_eq!(path, dir.path().join(transcript.file_name()));
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("心理咨询对话记录\n"));
    assert!(content.contains("用户：最近总是焦虑\n"));
    assert!(content.contains("助手：先试试 4-4-6 深呼吸。\n"));
}

#[test]
fn test_export_creates_missing_directories() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let nested = dir.path().join("a").join("b");
    let transcript = ChatTranscript::new();

    let path = transcript.export_to(&nested).expect("export should succeed");
    assert!(path.is_file());
}

#[test]
fn test_export_into_transcripts_dir() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    temp_env::with_var(HOME_ENV, Some(dir.path()), || {
        let mut transcript = ChatTranscript::new();
        transcript.push(Role::User, "hello");

        let path = transcript
            .export_to(&PortablePathManager::transcripts_dir())
            .expect("export should succeed");
        assert!(path.starts_with(dir.path().join("data").join("transcripts")));
    });
}

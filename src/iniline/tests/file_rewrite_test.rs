// iniline/tests/file_rewrite_test.rs

use iniline::error::Result;
use iniline::{convert, IniError, IniManager, Placement};
use std::path::PathBuf;
use tempfile::TempDir;

fn setup(content: Option<&str>) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.ini");
    if let Some(content) = content {
        fs_err::write(&path, content).unwrap();
    }
    (dir, path)
}

fn contents(path: &PathBuf) -> String {
    fs_err::read_to_string(path).unwrap()
}

#[test]
fn set_on_empty_file_creates_section() -> Result<()> {
    let (_dir, path) = setup(Some(""));
    let mut ini = IniManager::open(&path)?;

    ini.set("rtsp", "port", "554", "")?;

    assert_eq!(contents(&path), "[rtsp]\nport=554\n");
    assert_eq!(ini.get_int("rtsp", "port"), 554);
    Ok(())
}

#[test]
fn set_on_missing_file_creates_it() -> Result<()> {
    let (_dir, path) = setup(None);
    let mut ini = IniManager::open(&path)?;
    assert!(!path.exists());

    ini.set("rtsp", "port", "554", "")?;

    assert_eq!(contents(&path), "[rtsp]\nport=554\n");
    Ok(())
}

#[test]
fn replacing_a_key_keeps_one_line() -> Result<()> {
    let (_dir, path) = setup(Some(""));
    let mut ini = IniManager::open(&path)?;

    ini.set("rtsp", "port", "554", "")?;
    let placement = ini.set("rtsp", "port", "555", "")?;

    assert_eq!(placement, Placement::Replaced { line: 2 });
    assert_eq!(contents(&path), "[rtsp]\nport=555\n");
    assert_eq!(ini.sections_list(), vec!["rtsp".to_string()]);
    assert_eq!(contents(&path).matches("port=").count(), 1);
    Ok(())
}

#[test]
fn unnamed_key_goes_ahead_of_sections() -> Result<()> {
    let (_dir, path) = setup(Some("[rtsp]\nport=554\n"));
    let mut ini = IniManager::open(&path)?;
    assert_eq!(ini.sections_list(), vec!["rtsp".to_string()]);

    ini.set("", "title", "config.ini", "")?;

    assert_eq!(contents(&path), "title=config.ini\n[rtsp]\nport=554\n");
    let sections = ini.sections_list();
    assert!(sections.contains(&String::new()));
    assert!(sections.contains(&"rtsp".to_string()));
    assert_eq!(ini.get_string("", "title"), "config.ini");
    Ok(())
}

#[test]
fn round_trip_returns_trimmed_value() -> Result<()> {
    let (_dir, path) = setup(Some("; settings\n"));
    let mut ini = IniManager::open(&path)?;

    ini.set("server", "greeting", "  hello world  ", "")?;

    let reread = IniManager::open(&path)?;
    assert_eq!(reread.get_string("server", "greeting"), "hello world");
    Ok(())
}

#[test]
fn set_is_idempotent() -> Result<()> {
    let (_dir, path) = setup(Some("[a]\nx=1\n\n[b]\ny=2\n"));
    let mut ini = IniManager::open(&path)?;

    ini.set("b", "z", "3", "")?;
    let first = ini.document().clone();
    let first_text = contents(&path);

    ini.set("b", "z", "3", "")?;
    assert_eq!(ini.document(), &first);
    assert_eq!(contents(&path), first_text);
    Ok(())
}

#[test]
fn duplicate_sections_merge() -> Result<()> {
    let (_dir, path) = setup(Some("[x]\na=1\n\n[y]\nq=0\n\n[x]\nb=2\n"));
    let ini = IniManager::open(&path)?;

    let x = ini.section_map("x");
    assert_eq!(x.get("a").map(String::as_str), Some("1"));
    assert_eq!(x.get("b").map(String::as_str), Some("2"));
    assert_eq!(ini.sections_list(), vec!["x".to_string(), "y".to_string()]);
    Ok(())
}

#[test]
fn comment_replaces_adjacent_comment() -> Result<()> {
    let (_dir, path) = setup(Some(""));
    let mut ini = IniManager::open(&path)?;

    ini.set("rtsp", "port", "554", "this is the listen port for http server.")?;
    ini.set_comment("rtsp", "port", "this is the listen port for rtsp server.")?;

    assert_eq!(
        contents(&path),
        "[rtsp]\n;this is the listen port for rtsp server.\nport=554\n"
    );
    assert_eq!(ini.get_string("rtsp", "port"), "554");
    Ok(())
}

#[test]
fn existence_checks_follow_writes() -> Result<()> {
    let (_dir, path) = setup(Some("[rtsp]\nport=554\n"));
    let mut ini = IniManager::open(&path)?;

    assert!(!ini.is_key_exist("rtsp", "ip"));
    assert!(!ini.is_section_exists("math"));

    ini.set("rtsp", "ip", "127.0.0.1", "")?;
    ini.set_value("math", "PI", &3.1415926f64, "This is pi in mathematics.")?;

    assert!(ini.is_key_exist("rtsp", "ip"));
    assert!(ini.is_section_exists("math"));
    assert_eq!(
        contents(&path),
        "[rtsp]\nport=554\nip=127.0.0.1\n\n[math]\n;This is pi in mathematics.\nPI=3.1415926\n"
    );
    Ok(())
}

#[test]
fn boolean_coercion() -> Result<()> {
    let (_dir, path) = setup(Some(
        "[flags]\na=0\nb=false\nc=no\nd=1\ne=true\nf=yes\n",
    ));
    let ini = IniManager::open(&path)?;

    for key in ["a", "b", "c"] {
        assert!(!ini.value("flags", key)?.as_bool()?, "{key}");
    }
    for key in ["d", "e", "f"] {
        assert!(ini.value("flags", key)?.as_bool()?, "{key}");
    }
    assert!(matches!(
        ini.value("flags", "missing"),
        Err(IniError::KeyNotFound { .. })
    ));
    Ok(())
}

#[test]
fn typed_getters() -> Result<()> {
    let (_dir, path) = setup(Some(""));
    let mut ini = IniManager::open(&path)?;

    ini.set_value("math", "PI", "3.1415926", "")?;
    ini.set_value("math", "answer", &42u8, "")?;
    ini.set_value("math", "negative", &-7i64, "")?;
    ini.set_value("math", "enabled", &true, "")?;
    ini.set_value("math", "letter", &'x', "")?;

    assert_eq!(ini.get_string("math", "PI"), "3.1415926");
    assert_eq!(ini.get_double("math", "PI"), 3.1415926);
    assert_eq!(ini.get_int("math", "PI"), 3);
    assert_eq!(ini.get::<u8>("math", "answer")?, 42);
    assert_eq!(ini.get::<i64>("math", "negative")?, -7);
    assert!(ini.value("math", "enabled")?.as_bool()?);
    assert_eq!(ini.get::<char>("math", "letter")?, 'x');

    assert_eq!(ini.get_int("math", "letter"), 0);
    assert!(matches!(
        ini.get::<i32>("math", "PI"),
        Err(IniError::Conversion { .. })
    ));
    Ok(())
}

#[test]
fn wide_text_round_trip() -> Result<()> {
    let (_dir, path) = setup(Some(""));
    let mut ini = IniManager::open(&path)?;
    let hello = convert::to_wide("你好，世界");

    ini.set_wide("other", "desc", &hello, "this test for wide text.")?;

    assert_eq!(ini.value("other", "desc")?.as_wide(), hello);
    assert!(contents(&path).contains("desc=你好，世界"));

    let err = ini.set_wide("other", "bad", &[0xDC00], "").unwrap_err();
    assert!(matches!(err, IniError::Utf16 { .. }));
    Ok(())
}

#[test]
fn unrelated_lines_are_preserved() -> Result<()> {
    let original = "\
# global settings
title = demo

[rtsp]   ; streaming
  port = 554
\tip = 0.0.0.0

; database
[db]
url = postgres://localhost/db?sslmode=disable
";
    let (_dir, path) = setup(Some(original));
    let mut ini = IniManager::open(&path)?;

    ini.set("rtsp", "ip", "127.0.0.1", "")?;

    let expected = "\
# global settings
title = demo

[rtsp]   ; streaming
  port = 554
ip=127.0.0.1

; database
[db]
url = postgres://localhost/db?sslmode=disable
";
    assert_eq!(contents(&path), expected);
    assert_eq!(ini.get_string("db", "url"), "postgres://localhost/db?sslmode=disable");
    Ok(())
}

#[test]
fn unnamed_section_walkthrough() -> Result<()> {
    let (_dir, path) = setup(Some(""));
    let mut ini = IniManager::open(&path)?;

    ini.set("head", "title", "iniline", "thanks for using iniline.")?;
    ini.set("rtsp", "port", "554", "")?;
    ini.set("", "noSection", "no", "no section test.")?;
    ini.set("", "noSection", "yes", "no section test: add comment later.")?;
    ini.set("", "key0", "noSectionAndComment", "")?;
    ini.set("", "key1", "noSectionAndComment", "")?;
    ini.set_unnamed_comment("key0", "first plain key")?;

    let expected = "\
;no section test: add comment later.
noSection=yes
;first plain key
key0=noSectionAndComment
key1=noSectionAndComment
[head]
;thanks for using iniline.
title=iniline

[rtsp]
port=554
";
    assert_eq!(contents(&path), expected);
    assert_eq!(
        ini.sections_list(),
        vec!["".to_string(), "head".to_string(), "rtsp".to_string()]
    );
    Ok(())
}

#[test]
fn external_edits_are_picked_up_before_writing() -> Result<()> {
    let (_dir, path) = setup(Some("[a]\nk=1\n"));
    let mut ini = IniManager::open(&path)?;

    fs_err::write(&path, "; inserted by someone else\n\n[a]\nk=1\n")?;
    ini.set("a", "k", "2", "")?;

    assert_eq!(contents(&path), "; inserted by someone else\n\n[a]\nk=2\n");
    Ok(())
}

#[test]
fn crlf_input_is_rewritten_with_lf() -> Result<()> {
    let (_dir, path) = setup(Some("; note\r\n[rtsp]\r\nport=554\r\nip=0.0.0.0\r\n"));
    let mut ini = IniManager::open(&path)?;
    assert_eq!(ini.get_string("rtsp", "ip"), "0.0.0.0");

    ini.set("rtsp", "port", "555", "")?;

    assert_eq!(contents(&path), "; note\n[rtsp]\nport=555\nip=0.0.0.0\n");
    assert_eq!(ini.document().line_of("rtsp", "ip"), Some(4));
    Ok(())
}

#[test]
fn set_file_name_then_parse() -> Result<()> {
    let (_dir, path) = setup(Some("[a]\nk=v\n"));
    let mut ini = IniManager::new();
    assert!(ini.sections_list().is_empty());

    ini.set_file_name(&path);
    assert!(ini.sections_list().is_empty());

    ini.parse()?;
    assert_eq!(ini.sections_list(), vec!["a".to_string()]);
    Ok(())
}

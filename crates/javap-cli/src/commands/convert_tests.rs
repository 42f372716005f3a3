use std::fs;
use std::path::{Path, PathBuf};

use super::convert::{
    ConvertError, Converted, convert_transcript, find_classes, output_path, run_javap,
};

const GREETER: &str = concat!(
    "Compiled from \"Greeter.java\"\n",
    "public class demo.Greeter extends java.lang.Object{\n",
    "public demo.Greeter();\n",
    "  LineNumberTable: \n",
    "   line 3: 0\n",
    "\n",
    "  LocalVariableTable: \n",
    "   Start  Length  Slot  Name   Signature\n",
    "   0      5      0    this       Ldemo/Greeter;\n",
    "\n",
    "\n",
    "}\n",
);

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"\xca\xfe\xba\xbe").unwrap();
}

#[test]
fn finds_nested_class_files_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("demo/b/Zed.class"));
    touch(&root.join("demo/Greeter.class"));
    touch(&root.join("demo/Greeter$1.class"));
    touch(&root.join("demo/Greeter.java"));
    fs::create_dir_all(root.join("empty.class")).unwrap();

    let found: Vec<PathBuf> = find_classes(root)
        .unwrap()
        .into_iter()
        .map(|p| p.strip_prefix(root).unwrap().to_owned())
        .collect();

    assert_eq!(
        found,
        vec![
            PathBuf::from("demo/Greeter$1.class"),
            PathBuf::from("demo/Greeter.class"),
            PathBuf::from("demo/b/Zed.class"),
        ]
    );
}

#[test]
fn missing_class_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = find_classes(&dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, ConvertError::Walk(_)));
}

#[test]
fn output_mirrors_class_layout() {
    let path = output_path(
        Path::new("target/classes"),
        Path::new("target/classes/demo/Greeter$1.class"),
        Path::new("out"),
    );
    assert_eq!(path, PathBuf::from("out/demo/Greeter$1.json"));
}

#[test]
fn writes_record_and_creates_directories() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("demo/Greeter.json");

    let result = convert_transcript(GREETER, &target).unwrap();
    assert_eq!(result, Converted::Written(target.clone()));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(json["internal_name"], "demo/Greeter");
    assert_eq!(json["members"][0]["kind"], "constructor");
    assert_eq!(json["members"][0]["line_numbers"][0]["line"], 3);
}

#[test]
fn replaces_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("Greeter.json");
    fs::write(&target, "stale").unwrap();

    convert_transcript(GREETER, &target).unwrap();

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.starts_with('{'));
    assert!(written.ends_with("}\n"));
}

#[test]
fn unparsable_transcript_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("Broken.json");

    let result = convert_transcript("Error: class not found: Broken\n", &target).unwrap();

    let Converted::Skipped(reason) = result else {
        panic!("expected the transcript to be skipped");
    };
    insta::assert_snapshot!(reason, @r#"no match at 1:1, expected "Compiled from ""#);
    assert!(!target.exists());
}

#[test]
fn missing_disassembler_is_reported() {
    let err = run_javap(
        "javap-json-test-no-such-program",
        Path::new("demo/Greeter.class"),
    )
    .unwrap_err();

    assert!(matches!(err, ConvertError::Spawn { .. }));
    assert!(err.to_string().contains("javap-json-test-no-such-program"));
}

use super::*;
use tempfile::tempdir;

fn temp_output() -> (OutputFile, tempfile::TempDir) {
    let dir = tempdir().expect("create temp dir");
    let out = OutputFile::new(dir.path().join("drone.env"));
    (out, dir)
}

fn read(out: &OutputFile) -> String {
    fs::read_to_string(out.path()).expect("read output file")
}

#[derive(Serialize)]
struct Entry<'a> {
    name: &'a str,
    #[serde(rename = "isDirectory")]
    is_directory: bool,
}

#[test]
fn append_var_creates_file_with_single_line() {
    let (out, _dir) = temp_output();

    out.append_var("KEY", "value").expect("append");

    assert_eq!(read(&out), "KEY=value\n");
}

#[test]
fn append_var_never_truncates() {
    let (out, _dir) = temp_output();
    fs::write(out.path(), "EXISTING=1\n").expect("seed output file");

    out.append_var("A", "1").expect("append A");
    out.append_var("B", "2").expect("append B");

    assert_eq!(read(&out), "EXISTING=1\nA=1\nB=2\n");
}

#[test]
fn append_json_writes_compact_json() {
    let (out, _dir) = temp_output();
    let entries = [
        Entry {
            name: "one.txt",
            is_directory: false,
        },
        Entry {
            name: "def",
            is_directory: true,
        },
    ];

    out.append_json("FILES_INFO", &entries[..]).expect("append json");

    assert_eq!(
        read(&out),
        "FILES_INFO=[{\"name\":\"one.txt\",\"isDirectory\":false},{\"name\":\"def\",\"isDirectory\":true}]\n"
    );
}

#[test]
fn append_json_empty_list() {
    let (out, _dir) = temp_output();
    let empty: Vec<u8> = Vec::new();

    out.append_json("FILES_INFO", &empty).expect("append json");

    assert_eq!(read(&out), "FILES_INFO=[]\n");
}

#[test]
fn append_var_creates_missing_parent_directories() {
    let dir = tempdir().expect("create temp dir");
    let out = OutputFile::new(dir.path().join("nested/steps/drone.env"));

    out.append_var("KEY", "v").expect("append");

    assert_eq!(read(&out), "KEY=v\n");
}

#[test]
fn invalid_keys_and_values_are_rejected() {
    let (out, _dir) = temp_output();

    let cases: &[(&str, &str)] = &[("", "v"), ("A=B", "v"), ("A\nB", "v"), ("KEY", "line1\nline2")];

    for (key, value) in cases {
        let err = out
            .append_var(key, value)
            .expect_err("invalid input should be rejected");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "key {key:?}");
    }

    assert!(!out.path().exists(), "nothing should have been written");
}

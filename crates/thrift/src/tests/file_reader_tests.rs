use crate::file_reader::read_content;
use crate::file_reader::ReadContentError;
use crate::tests::utils::ScratchDir;

#[test]
fn reads_utf8_file() {
    let dir = ScratchDir::new("read-utf8");
    let path = dir.write("a.thrift", "typedef i32 Id\n");
    assert_eq!(read_content(&path).unwrap(), "typedef i32 Id\n");
}

#[test]
fn directory_is_not_a_file() {
    let dir = ScratchDir::new("read-dir");
    assert_eq!(
        read_content(dir.path()),
        Err(ReadContentError::PathIsNotAFile(dir.path().to_path_buf())),
    );
}

#[test]
fn missing_file_is_not_a_file() {
    let dir = ScratchDir::new("read-missing");
    let path = dir.path().join("missing.thrift");
    assert!(matches!(
        read_content(&path),
        Err(ReadContentError::PathIsNotAFile(_)),
    ));
}

#[test]
fn invalid_utf8_is_decode_error() {
    let dir = ScratchDir::new("read-latin1");
    let path = dir.write("latin1.thrift", [0x63, 0x61, 0x66, 0xE9]);
    let err = read_content(&path).unwrap_err();
    assert!(matches!(err, ReadContentError::FileDecodeError { .. }));
    assert!(err.to_string().contains("not valid UTF-8"));
}

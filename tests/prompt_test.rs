use small_demos::core::prompt::read_name;
use std::io::{self, BufReader, Cursor, Read};

#[test]
fn test_line_terminator_is_stripped() {
    let name = read_name(Cursor::new("Ada\n")).unwrap();
    assert_eq!(name, "Ada");
}

#[test]
fn test_windows_line_terminator_is_stripped() {
    let name = read_name(Cursor::new("Ada\r\n")).unwrap();
    assert_eq!(name, "Ada");
}

#[test]
fn test_end_of_input_yields_an_empty_name() {
    let name = read_name(Cursor::new("")).unwrap();
    assert_eq!(name, "");
}

#[test]
fn test_line_without_terminator_is_kept_as_is() {
    let name = read_name(Cursor::new("Ada")).unwrap();
    assert_eq!(name, "Ada");
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "terminal went away"))
    }
}

#[test]
fn test_read_failure_surfaces_the_io_error() {
    let result = read_name(BufReader::new(FailingReader));
    assert!(result.is_err());
}

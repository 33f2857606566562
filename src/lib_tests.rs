use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_USAGE, 1);
    assert_eq!(EXIT_FILE_ERROR, 2);
}

#[test]
fn error_converts_from_io() {
    let err: SweepError = std::io::Error::other("boom").into();
    assert!(matches!(err, SweepError::Io(_)));
}

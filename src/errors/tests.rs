//! Unit tests for error handling.

use pretty_assertions::assert_eq;

use crate::errors::errors::{CliError, ErrorImpl, ErrorTip};

#[test]
fn test_error_messages() {
    assert_eq!(
        ErrorImpl::IntegerConstantTooLong.to_string(),
        "Integer constant too long"
    );
    assert_eq!(ErrorImpl::IdentifierTooLong.to_string(), "Identifier too long");
    assert_eq!(
        ErrorImpl::MisplacedEndOfLine.to_string(),
        "'.' should be at end of line or inside a string/comment"
    );
    assert_eq!(
        ErrorImpl::LeftBracketAlreadyExists.to_string(),
        "Left bracket already exists"
    );
    assert_eq!(
        ErrorImpl::RightBracketWithoutLeft.to_string(),
        "Right bracket without left bracket"
    );
    assert_eq!(
        ErrorImpl::LeftBracketWithoutRight.to_string(),
        "Left bracket without right bracket"
    );
    assert_eq!(
        ErrorImpl::DelimiterNotPreceded.to_string(),
        "Delimiter should be preceded by identifier"
    );
    assert_eq!(
        ErrorImpl::DelimiterNotFollowed.to_string(),
        "Delimiter should be followed by identifier"
    );
}

#[test]
fn test_invalid_token_message() {
    let error = ErrorImpl::InvalidToken {
        token: "a$b".to_string(),
    };

    assert_eq!(error.to_string(), "InvalidToken(a$b)");
    assert_eq!(error.get_error_name(), "InvalidToken");
}

#[test]
fn test_error_names() {
    assert_eq!(
        ErrorImpl::IntegerConstantTooLong.get_error_name(),
        "IntegerConstantTooLong"
    );
    assert_eq!(
        ErrorImpl::DelimiterNotFollowed.get_error_name(),
        "DelimiterNotFollowed"
    );
}

#[test]
fn test_error_tip_none() {
    assert!(matches!(
        ErrorImpl::RightBracketWithoutLeft.get_tip(),
        ErrorTip::None
    ));
}

#[test]
fn test_error_tip_suggestion() {
    match ErrorImpl::MisplacedEndOfLine.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_cli_error_display() {
    let error = CliError::Read {
        path: "missing.sta".into(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };

    assert_eq!(error.to_string(), "failed to read \"missing.sta\": not found");
}

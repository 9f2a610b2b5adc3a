//! # Expression names
//!
//! Recovers the text of the value argument from the line of a call like
//! `session.debug("v", &names)?;`. The extraction is purely textual: the
//! first `, ` separates the format hint from the argument and the call's
//! closing `)` ends it. Calls spread over several lines, or written without
//! the space after the comma, can't be read this way and produce
//! [`MissingDelimiter`](IntrospectError::MissingDelimiter).

use crate::error::IntrospectError;

const DELIMITER: &str = ", ";

/// # Get the literal text of the argument after the format hint
pub fn extract_expression_name(line: &str) -> Result<String, IntrospectError> {
    let Some((_, argument)) = line.split_once(DELIMITER) else {
        return Err(IntrospectError::MissingDelimiter(line.to_owned()));
    };
    let argument = argument.trim_end();
    let argument = argument.strip_suffix(';').unwrap_or(argument);
    let argument = argument.trim_end_matches('?');
    let argument = argument.strip_suffix(')').unwrap_or(argument);
    Ok(argument.trim().to_owned())
}

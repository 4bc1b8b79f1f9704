//! Wire-line encoding for the external command channel.
//!
//! One command becomes exactly one line:
//!
//! ```text
//! [<unix_timestamp>] <COMMAND_NAME>[;<field1>;...;<fieldN>]\n
//! ```
//!
//! The format has no escaping rule, so any field whose rendered form contains
//! the separator or a newline is rejected rather than mangled.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::command::Arg;
use crate::error::EncodeError;

/// Encodes a command into its wire line.
///
/// A `timestamp` of 0 is the "unset" sentinel and is replaced with the current
/// wall-clock epoch second; any other value is used verbatim so callers can
/// pin or backdate commands. Aside from that one clock read, the function is
/// pure.
pub fn encode(name: &str, timestamp: u64, args: &[Arg]) -> Result<String, EncodeError> {
    if !is_wire_token(name) {
        return Err(EncodeError::InvalidToken(name.to_string()));
    }
    let epoch = if timestamp == 0 { epoch_now() } else { timestamp };
    let mut line = format!("[{epoch}] {name}");
    for (index, arg) in args.iter().enumerate() {
        let field = arg.render();
        if field.contains(';') {
            return Err(EncodeError::SeparatorInField { index });
        }
        if field.contains('\n') {
            return Err(EncodeError::NewlineInField { index });
        }
        line.push(';');
        line.push_str(&field);
    }
    line.push('\n');
    Ok(line)
}

/// Wire tokens are non-empty upper-snake identifiers.
fn is_wire_token(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
}

fn epoch_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX epoch")
        .as_secs()
}

use crate::{log_arg::LogArg, log_msg::LogMsg};

/// Builds a structured message from an ordered argument list.
///
/// Every argument is converted to its canonical textual form and the
/// forms are concatenated in call order with no separator. `extras` is
/// always left empty: composite arguments are flattened into the text and
/// their structure is intentionally not carried forward. Never fails;
/// zero arguments yield an empty text.
#[must_use]
pub fn compose(args: &[LogArg]) -> LogMsg {
    let mut text = String::new();
    for arg in args {
        text.push_str(&arg.canonical_text());
    }
    LogMsg {
        text,
        extras: Vec::new(),
    }
}

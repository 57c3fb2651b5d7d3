//! Rewrites single-dash long options into the form `clap` expects.
//!
//! `-tags netgo` becomes `--tags netgo` when `tags` is registered. The scan
//! mirrors how the arguments will be consumed: the token after a
//! value-taking option is its value and is never rewritten, and everything
//! from the first positional argument or a bare `--` onward is copied as-is.

use std::ffi::OsString;

use super::{OptionKind, OptionSpec};

/// Option names `clap` provides without registration.
const BUILTIN_SWITCHES: &[&str] = &["help", "h"];

pub(super) fn normalise<I, T>(args: I, options: &[OptionSpec]) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut iter = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = iter.next().into_iter().collect();
    let mut expecting_value = false;

    while let Some(arg) = iter.next() {
        if expecting_value {
            expecting_value = false;
            out.push(arg);
            continue;
        }
        let Some(token) = arg.to_str() else {
            out.push(arg);
            out.extend(iter.by_ref());
            break;
        };
        match classify(token, options) {
            Token::Flag { rewritten, kind } => {
                expecting_value = kind.is_some_and(OptionKind::takes_value);
                out.push(rewritten.map_or(arg, OsString::from));
            }
            Token::FlagWithValue { rewritten } => {
                out.push(rewritten.map_or(arg, OsString::from));
            }
            Token::Terminator | Token::Positional => {
                out.push(arg);
                out.extend(iter.by_ref());
                break;
            }
        }
    }
    out
}

#[derive(Debug, PartialEq, Eq)]
enum Token {
    /// `-name` or `--name`; `kind` is `None` for unknown names.
    Flag {
        rewritten: Option<String>,
        kind: Option<OptionKind>,
    },
    /// `-name=value` or `--name=value`.
    FlagWithValue { rewritten: Option<String> },
    /// A bare `--`.
    Terminator,
    /// Anything that does not start with `-`, including a lone `-`.
    Positional,
}

fn classify(token: &str, options: &[OptionSpec]) -> Token {
    if token == "--" {
        return Token::Terminator;
    }
    let (body, single_dash) = match token.strip_prefix("--") {
        Some(body) => (body, false),
        None => match token.strip_prefix('-') {
            Some(body) if !body.is_empty() => (body, true),
            _ => return Token::Positional,
        },
    };
    let (name, has_value) = body
        .split_once('=')
        .map_or((body, false), |(name, _)| (name, true));
    let kind = options
        .iter()
        .find(|spec| spec.name == name)
        .map(|spec| spec.kind);
    let known = kind.is_some() || BUILTIN_SWITCHES.contains(&name);
    let rewritten = (single_dash && known && name.len() > 1).then(|| format!("--{body}"));
    if has_value {
        Token::FlagWithValue { rewritten }
    } else {
        Token::Flag { rewritten, kind }
    }
}

//! Parsed command line input
//!
//! An [`Invocation`] is built once from the clap [`Cli`] and only read afterwards.
//! When the installed Reazy CLI takes over, it receives the invocation as an options
//! object in the shape Node argument parsers produce: positionals under `"_"`, every
//! other option under its own name.
//!
//! clap accepts options it does not know as positional tokens. They are lifted back out
//! here and folded the way `minimist` folds them (`--k=v`, `--k v`, `--no-k`, `--k`,
//! `-abc`), with numeric values turned into numbers.

use std::iter::Peekable;

use serde_json::{Map, Number, Value};

use crate::cli::Cli;

/// Command tokens and named options of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Positional command tokens, in order
    pub commands: Vec<String>,
    /// `-v/--version`: `Some("")` for the bare flag, `Some(spec)` with a value
    pub version: Option<String>,
    pub help: bool,
    pub verbose: bool,
    pub npm: bool,
    /// Options the bootstrap does not know, already folded
    pub options: Map<String, Value>,
    /// Spelling of every unknown option as given
    pub unknown: Vec<String>,
    /// Tokens given after `--`
    pub extra: Vec<String>,
}

impl From<Cli> for Invocation {
    fn from(cli: Cli) -> Self {
        let mut invocation = Self {
            version: cli.version,
            help: cli.help,
            verbose: cli.verbose,
            npm: cli.npm,
            ..Self::default()
        };
        invocation.absorb(cli.args);
        invocation.extra.extend(cli.extra);
        invocation
    }
}

impl Invocation {
    /// Sort raw tokens into commands, bootstrap flags and unknown options
    fn absorb(&mut self, tokens: Vec<String>) {
        let mut tokens = tokens.into_iter().peekable();
        while let Some(token) = tokens.next() {
            match token.as_str() {
                "--" => {
                    self.extra.extend(tokens.by_ref());
                }
                "--verbose" => self.verbose = true,
                "--npm" => self.npm = true,
                "-h" | "--help" => self.help = true,
                "-v" | "--version" => {
                    let value = tokens.next_if(|next| !next.starts_with('-'));
                    self.version = Some(value.unwrap_or_default());
                }
                _ => {
                    if let Some(value) = token.strip_prefix("--version=") {
                        self.version = Some(value.to_string());
                    } else if token.len() > 1 && token.starts_with('-') {
                        fold_option(&mut self.options, &token, &mut tokens);
                        self.unknown.push(token.clone());
                    } else {
                        self.commands.push(token.clone());
                    }
                }
            }
        }
    }

    /// First positional token
    pub fn command(&self) -> Option<&str> {
        self.positional(0)
    }

    /// Positional token at `index`
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.commands.get(index).map(String::as_str)
    }

    /// Whether `-v/--version` was given at all
    pub fn version_flag(&self) -> bool {
        self.version.is_some()
    }

    /// Version to install, when `--version` carried a value
    pub fn version_override(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }

    /// Options object handed to the installed CLI's `run` entry point
    pub fn to_options(&self) -> Value {
        let mut options = self.options.clone();

        if let Some(version) = &self.version {
            let value = if version.is_empty() {
                Value::Bool(true)
            } else {
                coerce(version)
            };
            options.insert("version".to_string(), value.clone());
            options.insert("v".to_string(), value);
        }
        if self.help {
            options.insert("help".to_string(), Value::Bool(true));
            options.insert("h".to_string(), Value::Bool(true));
        }
        if self.verbose {
            options.insert("verbose".to_string(), Value::Bool(true));
        }
        if self.npm {
            options.insert("npm".to_string(), Value::Bool(true));
        }

        let positionals = self
            .commands
            .iter()
            .map(|c| coerce(c))
            .chain(self.extra.iter().map(|e| Value::String(e.clone())))
            .collect();
        options.insert("_".to_string(), Value::Array(positionals));
        Value::Object(options)
    }
}

/// Fold one unknown option, taking the following token as its value when it is one
fn fold_option<I>(options: &mut Map<String, Value>, token: &str, rest: &mut Peekable<I>)
where
    I: Iterator<Item = String>,
{
    if let Some(long) = token.strip_prefix("--") {
        if let Some((key, value)) = long.split_once('=') {
            options.insert(key.to_string(), coerce(value));
        } else if let Some(key) = long.strip_prefix("no-") {
            options.insert(key.to_string(), Value::Bool(false));
        } else {
            options.insert(long.to_string(), take_value(rest));
        }
        return;
    }

    let letters: Vec<char> = token.chars().skip(1).collect();
    if let Some((last, leading)) = letters.split_last() {
        for letter in leading {
            options.insert(letter.to_string(), Value::Bool(true));
        }
        options.insert(last.to_string(), take_value(rest));
    }
}

fn take_value<I>(rest: &mut Peekable<I>) -> Value
where
    I: Iterator<Item = String>,
{
    match rest.next_if(|next| !next.starts_with('-')) {
        Some(value) if value == "true" => Value::Bool(true),
        Some(value) if value == "false" => Value::Bool(false),
        Some(value) => coerce(&value),
        None => Value::Bool(true),
    }
}

/// Numbers stay numbers, everything else is a string
fn coerce(value: &str) -> Value {
    if let Ok(n) = value.parse::<i64>() {
        return Value::from(n);
    }
    let numeric = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if numeric {
        if let Some(n) = value.parse::<f64>().ok().and_then(Number::from_f64) {
            return Value::Number(n);
        }
    }
    Value::String(value.to_string())
}

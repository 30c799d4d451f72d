//! Parser for the line-oriented config file language.
//!
//! Each non-blank line that does not start with `#` holds one assignment:
//!
//! ```text
//! option := key ['[' index ']'] '=' (string | bool)
//! string := '"' (char | '\' escape)* '"'
//! bool   := true | false
//! ```
//!
//! The parser only checks syntax and produces a flat, ordered list of
//! [`ConfigOption`] records. Mapping names to settings happens in
//! [`Config::apply_options`](crate::core::config::Config::apply_options).

use crate::core::{
    cursor::{is_key_char, Cursor},
    error::{RainbowPathError, Result},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    String(String),
}

/// One `key[index] = value` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOption {
    pub name: String,
    pub value: OptionValue,
    pub index: Option<i64>,
    /// 1-based line number
    pub line: usize,
}

/// Parse a whole config file
pub fn parse_config(input: &str) -> Result<Vec<ConfigOption>> {
    let mut options = Vec::new();
    for (number, text) in input.split('\n').enumerate() {
        let line = number + 1;
        let mut cursor = Cursor::new(text);
        cursor.skip_whitespace();
        if cursor.at_end() || cursor.eat(b'#') {
            continue;
        }
        options.push(parse_assignment(&mut cursor, line)?);
    }
    log::debug!("Parsed {} config options", options.len());
    Ok(options)
}

fn parse_assignment(cursor: &mut Cursor<'_>, line: usize) -> Result<ConfigOption> {
    let name = cursor
        .token(is_key_char)
        .ok_or_else(|| RainbowPathError::config_syntax(line, "Expected option"))?;

    let index = if cursor.peek() == Some(b'[') {
        Some(parse_index(cursor, line)?)
    } else {
        None
    };

    if !cursor.eat(b'=') {
        return Err(RainbowPathError::config_syntax(line, "Expected '='"));
    }

    let value = match cursor.peek() {
        Some(b'"') => OptionValue::String(parse_string(cursor, line)?),
        Some(_) => OptionValue::Bool(parse_bool(cursor, line)?),
        None => return Err(RainbowPathError::config_syntax(line, "Expected value")),
    };

    if !cursor.only_whitespace_left() {
        return Err(RainbowPathError::config_syntax(line, "Expected end of line"));
    }

    Ok(ConfigOption {
        name: name.to_string(),
        value,
        index,
        line,
    })
}

fn parse_index(cursor: &mut Cursor<'_>, line: usize) -> Result<i64> {
    if !cursor.eat(b'[') {
        return Err(RainbowPathError::config_syntax(line, "Expected '['"));
    }
    let token = cursor
        .token(is_key_char)
        .ok_or_else(|| RainbowPathError::config_syntax(line, "Expected index"))?;
    let index = token.parse::<i64>().map_err(|_| {
        RainbowPathError::config_syntax(line, format!("Invalid index '{token}'"))
    })?;
    if !cursor.eat(b']') {
        return Err(RainbowPathError::config_syntax(line, "Expected ']'"));
    }
    Ok(index)
}

fn parse_bool(cursor: &mut Cursor<'_>, line: usize) -> Result<bool> {
    match cursor.token(is_key_char) {
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(_) => Err(RainbowPathError::config_syntax(
            line,
            "Expected boolean value",
        )),
        None => Err(RainbowPathError::config_syntax(line, "Invalid value")),
    }
}

fn parse_string(cursor: &mut Cursor<'_>, line: usize) -> Result<String> {
    if !cursor.eat(b'"') {
        return Err(RainbowPathError::config_syntax(line, "Expected string value"));
    }
    let mut value = String::new();
    loop {
        match cursor.bump_char() {
            None => return Err(RainbowPathError::config_syntax(line, "Unterminated string")),
            Some('"') => return Ok(value),
            Some('\0') => {
                return Err(RainbowPathError::config_syntax(line, "Unexpected null byte"))
            }
            Some('\\') => {
                let escaped = cursor.bump_char().ok_or_else(|| {
                    RainbowPathError::config_syntax(line, "Unterminated escape sequence")
                })?;
                value.push(unescape(escaped).ok_or_else(|| {
                    RainbowPathError::config_syntax(
                        line,
                        format!("Invalid escape sequence '\\{escaped}'"),
                    )
                })?);
            }
            Some(c) => value.push(c),
        }
    }
}

fn unescape(c: char) -> Option<char> {
    match c {
        '\\' | '"' => Some(c),
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        'f' => Some('\x0c'),
        'v' => Some('\x0b'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_option(name: &str, value: &str, index: Option<i64>, line: usize) -> ConfigOption {
        ConfigOption {
            name: name.to_string(),
            value: OptionValue::String(value.to_string()),
            index,
            line,
        }
    }

    #[test]
    fn test_parse_scalar_options() -> Result<()> {
        let options = parse_config("palette = \"fg=1;fg=2\"\ncompact = true\nbash=false\n")?;
        assert_eq!(
            options,
            vec![
                string_option("palette", "fg=1;fg=2", None, 1),
                ConfigOption {
                    name: "compact".to_string(),
                    value: OptionValue::Bool(true),
                    index: None,
                    line: 2,
                },
                ConfigOption {
                    name: "bash".to_string(),
                    value: OptionValue::Bool(false),
                    index: None,
                    line: 3,
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_parse_indexed_options() -> Result<()> {
        let options = parse_config("override[3] = \"fg=2\"\nseparator-override[ -1 ]=\"bold\"")?;
        assert_eq!(options[0], string_option("override", "fg=2", Some(3), 1));
        assert_eq!(
            options[1],
            string_option("separator-override", "bold", Some(-1), 2)
        );
        Ok(())
    }

    #[test]
    fn test_skips_comments_and_blank_lines() -> Result<()> {
        let input = "# leading comment\n\n   \t\n   # indented comment\nnewline = false\r\n";
        let options = parse_config(input)?;
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].name, "newline");
        assert_eq!(options[0].line, 5);
        Ok(())
    }

    #[test]
    fn test_string_escapes() -> Result<()> {
        let options = parse_config(r#"separator = "\\ \" \n \t \r \f \v""#)?;
        assert_eq!(
            options[0].value,
            OptionValue::String("\\ \" \n \t \r \x0c \x0b".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_unterminated_string() {
        let err = parse_config("separator = \"abc\ncompact = true").unwrap_err();
        assert_eq!(err.to_string(), "Line 1: Unterminated string");
    }

    #[test]
    fn test_unterminated_and_invalid_escape() {
        let err = parse_config("separator = \"abc\\").unwrap_err();
        assert!(err.to_string().contains("Unterminated escape sequence"));
        let err = parse_config("separator = \"\\q\"").unwrap_err();
        assert!(err.to_string().contains("Invalid escape sequence"));
    }

    #[test]
    fn test_null_byte_in_string() {
        let err = parse_config("separator = \"a\0b\"").unwrap_err();
        assert!(err.to_string().contains("Unexpected null byte"));
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let err = parse_config("compact = true false").unwrap_err();
        assert_eq!(err.to_string(), "Line 1: Expected end of line");
        let err = parse_config("\nseparator = \"/\" # comment").unwrap_err();
        assert_eq!(err.to_string(), "Line 2: Expected end of line");
    }

    #[test]
    fn test_invalid_values() {
        assert!(parse_config("compact = yes")
            .unwrap_err()
            .to_string()
            .contains("Expected boolean value"));
        assert!(parse_config("compact = 'x'")
            .unwrap_err()
            .to_string()
            .contains("Invalid value"));
        assert!(parse_config("compact =")
            .unwrap_err()
            .to_string()
            .contains("Expected value"));
        assert!(parse_config("compact true")
            .unwrap_err()
            .to_string()
            .contains("Expected '='"));
        assert!(parse_config("= true")
            .unwrap_err()
            .to_string()
            .contains("Expected option"));
    }

    #[test]
    fn test_invalid_index() {
        assert!(parse_config("override[x] = \"bold\"")
            .unwrap_err()
            .to_string()
            .contains("Invalid index 'x'"));
        assert!(parse_config("override[] = \"bold\"")
            .unwrap_err()
            .to_string()
            .contains("Expected index"));
        assert!(parse_config("override[1 = \"bold\"")
            .unwrap_err()
            .to_string()
            .contains("Expected ']'"));
    }

    #[test]
    fn test_value_is_not_style_checked() -> Result<()> {
        let options = parse_config("palette = \"not a style\"")?;
        assert_eq!(options[0].value, OptionValue::String("not a style".into()));
        Ok(())
    }
}

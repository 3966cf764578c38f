//! Input validation applied before any request leaves the client.
//!
//! Every function either returns the normalized value or a [`ValidationError`]
//! describing why the input was rejected. Nothing is truncated or coerced
//! silently: input that does not fit is an error.

use thiserror::Error;

use crate::model::{Stat, StatBlock};

pub const MAX_NAME_LENGTH: usize = 50;
pub const STAT_COUNT: usize = 6;
pub const MIN_STAT_VALUE: i64 = 0;
pub const MAX_STAT_VALUE: i64 = 999;
pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 1000;
pub const MIN_LEVEL: i64 = 1;
pub const MAX_LEVEL: i64 = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} too long (max {max} characters)")]
    TooLong { field: &'static str, max: usize },

    #[error(
        "{field} contains invalid characters. Only letters, numbers, spaces, periods, hyphens, and apostrophes are allowed"
    )]
    InvalidCharacters { field: &'static str },

    #[error(
        "Stats must contain exactly {expected} values (HP,Attack,Defense,Special Attack,Special Defense,Speed), got {found}"
    )]
    WrongStatCount { expected: usize, found: usize },

    #[error("Stat value '{0}' is not a valid integer")]
    NotAnInteger(String),

    #[error("Stat value {0} is out of valid range (0-999)")]
    StatOutOfRange(String),

    #[error("Limit must be a valid integer")]
    LimitNotInteger,

    #[error("Limit must be at least {min}")]
    LimitTooSmall { min: i64 },

    #[error("Limit too large (max {max})")]
    LimitTooLarge { max: i64 },

    #[error("Level {0} is out of range (1-100)")]
    LevelOutOfRange(i64),
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | '\'' | '-')
}

fn validate_text(input: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_NAME_LENGTH,
        });
    }

    if !trimmed.chars().all(is_name_char) {
        return Err(ValidationError::InvalidCharacters { field });
    }

    Ok(trimmed.to_string())
}

/// Validate a Pokemon (or move) name, returning it trimmed
pub fn validate_name(input: &str) -> Result<String, ValidationError> {
    validate_text(input, "Pokemon name")
}

/// Validate a free-text search query. Same rules as [`validate_name`].
pub fn validate_search_query(input: &str) -> Result<String, ValidationError> {
    validate_text(input, "Search query")
}

/// Optional leading `-` followed by one or more ASCII digits
fn is_integer_token(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_stat_token(token: &str) -> Result<u16, ValidationError> {
    if !is_integer_token(token) {
        return Err(ValidationError::NotAnInteger(token.to_string()));
    }

    // Digit strings too long for i64 are out of range by definition
    let value: i64 = token
        .parse()
        .map_err(|_| ValidationError::StatOutOfRange(token.to_string()))?;

    if !(MIN_STAT_VALUE..=MAX_STAT_VALUE).contains(&value) {
        return Err(ValidationError::StatOutOfRange(value.to_string()));
    }

    Ok(value as u16)
}

/// Parse a comma-separated stats string into a [`StatBlock`]
pub fn parse_stats_string(input: &str) -> Result<StatBlock, ValidationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty {
            field: "Stats string",
        });
    }

    let tokens: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    if tokens.len() != STAT_COUNT {
        return Err(ValidationError::WrongStatCount {
            expected: STAT_COUNT,
            found: tokens.len(),
        });
    }

    let mut block = StatBlock::default();
    for (stat, token) in Stat::ALL.into_iter().zip(tokens) {
        block.set(stat, parse_stat_token(token)?);
    }
    Ok(block)
}

/// Validate a stats string and re-serialize it canonically.
///
/// `" 35 ,55,40, 50,50,90"` becomes `"35,55,40,50,50,90"`; `"07"` becomes `"7"`.
pub fn validate_stats_string(input: &str) -> Result<String, ValidationError> {
    parse_stats_string(input).map(|block| block.to_stats_string())
}

/// A limit as it may arrive from a form field or a numeric control
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LimitInput<'a> {
    Integer(i64),
    Float(f64),
    Text(&'a str),
}

impl From<i64> for LimitInput<'_> {
    fn from(value: i64) -> Self {
        LimitInput::Integer(value)
    }
}

impl From<i32> for LimitInput<'_> {
    fn from(value: i32) -> Self {
        LimitInput::Integer(value.into())
    }
}

impl From<u32> for LimitInput<'_> {
    fn from(value: u32) -> Self {
        LimitInput::Integer(value.into())
    }
}

impl From<usize> for LimitInput<'_> {
    fn from(value: usize) -> Self {
        LimitInput::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for LimitInput<'_> {
    fn from(value: f64) -> Self {
        LimitInput::Float(value)
    }
}

impl<'a> From<&'a str> for LimitInput<'a> {
    fn from(value: &'a str) -> Self {
        LimitInput::Text(value)
    }
}

/// Validate a result limit (1..=1000)
pub fn validate_limit<'a>(input: impl Into<LimitInput<'a>>) -> Result<u32, ValidationError> {
    let value = match input.into() {
        LimitInput::Integer(n) => n,
        LimitInput::Float(f) => {
            if !f.is_finite() || f.fract() != 0.0 {
                return Err(ValidationError::LimitNotInteger);
            }
            if f < MIN_LIMIT as f64 {
                return Err(ValidationError::LimitTooSmall { min: MIN_LIMIT });
            }
            if f > MAX_LIMIT as f64 {
                return Err(ValidationError::LimitTooLarge { max: MAX_LIMIT });
            }
            f as i64
        }
        LimitInput::Text(text) => {
            let text = text.trim();
            if !is_integer_token(text) {
                return Err(ValidationError::LimitNotInteger);
            }
            match text.parse::<i64>() {
                Ok(n) => n,
                Err(_) if text.starts_with('-') => {
                    return Err(ValidationError::LimitTooSmall { min: MIN_LIMIT });
                }
                Err(_) => return Err(ValidationError::LimitTooLarge { max: MAX_LIMIT }),
            }
        }
    };

    if value < MIN_LIMIT {
        return Err(ValidationError::LimitTooSmall { min: MIN_LIMIT });
    }
    if value > MAX_LIMIT {
        return Err(ValidationError::LimitTooLarge { max: MAX_LIMIT });
    }
    Ok(value as u32)
}

/// Validate a level for stat scaling (1..=100)
pub fn validate_level(level: i64) -> Result<u8, ValidationError> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(ValidationError::LevelOutOfRange(level));
    }
    Ok(level as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(validate_name("  Mr. Mime ").unwrap(), "Mr. Mime");
        assert_eq!(validate_name("Farfetch'd").unwrap(), "Farfetch'd");
        assert_eq!(validate_name("ho-oh").unwrap(), "ho-oh");
    }

    #[test]
    fn test_name_rejects_empty() {
        assert_eq!(
            validate_name("   "),
            Err(ValidationError::Empty {
                field: "Pokemon name"
            })
        );
        assert!(validate_name("").is_err());
    }

    #[test]
    fn test_name_length_boundary() {
        let fifty = "a".repeat(50);
        assert_eq!(validate_name(&fifty).unwrap(), fifty);

        let fifty_one = "a".repeat(51);
        assert!(matches!(
            validate_name(&fifty_one),
            Err(ValidationError::TooLong { max: 50, .. })
        ));

        // Surrounding whitespace does not count toward the limit
        assert!(validate_name(&format!("  {fifty}  ")).is_ok());
    }

    #[test]
    fn test_name_rejects_markup_and_symbols() {
        for bad in ["<script>", "pika;chu", "mew\ttwo", "nidoran♀", "a/b"] {
            assert!(
                matches!(
                    validate_name(bad),
                    Err(ValidationError::InvalidCharacters { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_search_query_uses_same_rules() {
        assert_eq!(validate_search_query(" thunder ").unwrap(), "thunder");
        assert!(matches!(
            validate_search_query("drop table;"),
            Err(ValidationError::InvalidCharacters {
                field: "Search query"
            })
        ));
    }

    #[test]
    fn test_stats_string_normalizes() {
        assert_eq!(
            validate_stats_string(" 35 ,55,40, 50,50,90 ").unwrap(),
            "35,55,40,50,50,90"
        );
        assert_eq!(
            validate_stats_string("07,0,999,1,2,3").unwrap(),
            "7,0,999,1,2,3"
        );
    }

    #[test]
    fn test_plus_sign_is_rejected() {
        assert_eq!(
            validate_stats_string("+07,0,999,1,2,3"),
            Err(ValidationError::NotAnInteger("+07".to_string()))
        );
        assert_eq!(validate_limit("+10"), Err(ValidationError::LimitNotInteger));
    }

    #[test]
    fn test_stats_string_is_idempotent() {
        for input in ["35,55,40,50,50,90", " 1, 2 ,3,4,5,6", "000,0,0,0,0,999"] {
            let once = validate_stats_string(input).unwrap();
            let twice = validate_stats_string(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_stats_string_wrong_count() {
        assert_eq!(
            validate_stats_string("35,55"),
            Err(ValidationError::WrongStatCount {
                expected: 6,
                found: 2
            })
        );
        assert!(matches!(
            validate_stats_string("1,2,3,4,5,6,7"),
            Err(ValidationError::WrongStatCount { found: 7, .. })
        ));
        assert!(matches!(
            validate_stats_string("1,2,3,4,5,"),
            Err(ValidationError::NotAnInteger(_))
        ));
    }

    #[test]
    fn test_stats_string_rejects_non_integers() {
        assert_eq!(
            validate_stats_string("1,2,3,4.5,5,6"),
            Err(ValidationError::NotAnInteger("4.5".to_string()))
        );
        assert!(validate_stats_string("1,2,3,x,5,6").is_err());
        assert!(validate_stats_string("1,2,3,-,5,6").is_err());
    }

    #[test]
    fn test_stats_string_range() {
        assert_eq!(
            validate_stats_string("1,2,3,1000,5,6"),
            Err(ValidationError::StatOutOfRange("1000".to_string()))
        );
        assert_eq!(
            validate_stats_string("-1,2,3,4,5,6"),
            Err(ValidationError::StatOutOfRange("-1".to_string()))
        );
        assert!(matches!(
            validate_stats_string("99999999999999999999999,2,3,4,5,6"),
            Err(ValidationError::StatOutOfRange(_))
        ));
    }

    #[test]
    fn test_stats_string_empty() {
        assert!(matches!(
            validate_stats_string("  "),
            Err(ValidationError::Empty { .. })
        ));
    }

    #[test]
    fn test_limit_bounds() {
        assert_eq!(validate_limit(1), Ok(1));
        assert_eq!(validate_limit(1000), Ok(1000));
        assert_eq!(
            validate_limit(0),
            Err(ValidationError::LimitTooSmall { min: 1 })
        );
        assert_eq!(
            validate_limit(1001),
            Err(ValidationError::LimitTooLarge { max: 1000 })
        );
    }

    #[test]
    fn test_limit_floats() {
        assert_eq!(validate_limit(1.5), Err(ValidationError::LimitNotInteger));
        assert_eq!(validate_limit(f64::NAN), Err(ValidationError::LimitNotInteger));
        assert_eq!(validate_limit(20.0), Ok(20));
        assert!(validate_limit(1e12).is_err());
    }

    #[test]
    fn test_limit_strings() {
        assert_eq!(validate_limit("10"), Ok(10));
        assert_eq!(validate_limit(" 25 "), Ok(25));
        assert_eq!(validate_limit("abc"), Err(ValidationError::LimitNotInteger));
        assert_eq!(validate_limit("12abc"), Err(ValidationError::LimitNotInteger));
        assert_eq!(validate_limit("1.5"), Err(ValidationError::LimitNotInteger));
        assert!(matches!(
            validate_limit("-3"),
            Err(ValidationError::LimitTooSmall { .. })
        ));
        assert!(matches!(
            validate_limit("99999999999999999999"),
            Err(ValidationError::LimitTooLarge { .. })
        ));
    }

    #[test]
    fn test_level() {
        assert_eq!(validate_level(1), Ok(1));
        assert_eq!(validate_level(100), Ok(100));
        assert_eq!(validate_level(0), Err(ValidationError::LevelOutOfRange(0)));
        assert_eq!(validate_level(101), Err(ValidationError::LevelOutOfRange(101)));
    }

    #[test]
    fn test_error_messages_are_readable() {
        let err = validate_name("").unwrap_err();
        assert_eq!(err.to_string(), "Pokemon name cannot be empty");

        let err = validate_limit(5000).unwrap_err();
        assert_eq!(err.to_string(), "Limit too large (max 1000)");
    }
}

//! Parsing coordinates typed at the prompt.

use chess_core::Coordinate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("expected a row and a column, got {0} value(s)")]
    WrongCount(usize),

    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("{0} is not on the board; rows and columns run from 0 to 7")]
    OffBoard(Coordinate),
}

/// Parses `"row col"` (spaces or a comma between) into an on-board coordinate.
pub fn parse_coordinate(line: &str) -> Result<Coordinate, InputError> {
    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();
    let &[row, col] = parts.as_slice() else {
        return Err(InputError::WrongCount(parts.len()));
    };

    let number = |part: &str| {
        part.parse::<i32>()
            .map_err(|_| InputError::NotANumber(part.to_string()))
    };
    let coordinate = Coordinate::new(number(row)?, number(col)?);
    if !coordinate.in_bounds() {
        return Err(InputError::OffBoard(coordinate));
    }
    Ok(coordinate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_separators() {
        assert_eq!(parse_coordinate("6 4"), Ok(Coordinate::new(6, 4)));
        assert_eq!(parse_coordinate("  0,7 "), Ok(Coordinate::new(0, 7)));
        assert_eq!(parse_coordinate("3, 2\n"), Ok(Coordinate::new(3, 2)));
    }

    #[test]
    fn rejects_wrong_count() {
        assert_eq!(parse_coordinate(""), Err(InputError::WrongCount(0)));
        assert_eq!(parse_coordinate("1 2 3"), Err(InputError::WrongCount(3)));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(
            parse_coordinate("e 4"),
            Err(InputError::NotANumber("e".to_string()))
        );
    }

    #[test]
    fn rejects_off_board() {
        assert_eq!(
            parse_coordinate("8 0"),
            Err(InputError::OffBoard(Coordinate::new(8, 0)))
        );
        assert!(parse_coordinate("-1 3").is_err());
    }
}

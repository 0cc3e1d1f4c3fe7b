use crate::pokemon;

use std::fmt;

/// Addresses one catalog record, either by number or by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Number(pokemon::Id),
    Name(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Zero,
}

impl Identifier {
    /// Parses free-text input. Surrounding whitespace is ignored and names
    /// are matched case-insensitively.
    pub fn parse(query: &str) -> Result<Self, ParseError> {
        let query = query.trim();

        if query.is_empty() {
            return Err(ParseError::Empty);
        }

        if query.bytes().all(|byte| byte.is_ascii_digit()) {
            return match query.parse::<u32>() {
                Ok(0) => Err(ParseError::Zero),
                Ok(number) => Ok(Self::Number(pokemon::Id::new(number))),
                // Too many digits to be a catalog number; let the remote decide
                Err(_) => Ok(Self::Name(query.to_owned())),
            };
        }

        Ok(Self::Name(query.to_lowercase()))
    }

    pub fn number(&self) -> Option<pokemon::Id> {
        match self {
            Self::Number(id) => Some(*id),
            Self::Name(_) => None,
        }
    }
}

impl From<pokemon::Id> for Identifier {
    fn from(id: pokemon::Id) -> Self {
        Self::Number(id)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => id.fmt(f),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "identifier is empty",
            Self::Zero => "identifier must be a positive number",
        })
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers() {
        assert_eq!(
            Identifier::parse("25"),
            Ok(Identifier::Number(pokemon::Id::new(25)))
        );
        assert_eq!(
            Identifier::parse(" 006 "),
            Ok(Identifier::Number(pokemon::Id::new(6)))
        );
    }

    #[test]
    fn names_are_lowercased() {
        assert_eq!(
            Identifier::parse("  Pikachu "),
            Ok(Identifier::Name("pikachu".to_owned()))
        );
        assert_eq!(Identifier::parse("Mr-Mime").unwrap().to_string(), "mr-mime");
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(Identifier::parse(""), Err(ParseError::Empty));
        assert_eq!(Identifier::parse(" \t\n"), Err(ParseError::Empty));
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(Identifier::parse("0"), Err(ParseError::Zero));
        assert_eq!(Identifier::parse("000"), Err(ParseError::Zero));
    }

    #[test]
    fn display_matches_path_segment() {
        let identifier = Identifier::from(pokemon::Id::new(150));

        assert_eq!(identifier.to_string(), "150");
        assert_eq!(identifier.number(), Some(pokemon::Id::new(150)));
    }
}

use crate::ParseError;

/// A lexical token with the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) offset: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Name(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Power,
    LParen,
    RParen,
    Comma,
}

impl TokenKind {
    /// Describes the token for error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            TokenKind::Number(value) => format!("number {value}"),
            TokenKind::Name(name) => format!("name {name:?}"),
            TokenKind::Plus => "'+'".to_owned(),
            TokenKind::Minus => "'-'".to_owned(),
            TokenKind::Star => "'*'".to_owned(),
            TokenKind::Slash => "'/'".to_owned(),
            TokenKind::Percent => "'%'".to_owned(),
            TokenKind::Power => "power operator".to_owned(),
            TokenKind::LParen => "'('".to_owned(),
            TokenKind::RParen => "')'".to_owned(),
            TokenKind::Comma => "','".to_owned(),
        }
    }
}

/// Splits source text into tokens.
///
/// `**` and `^` both become [`TokenKind::Power`]. Names may contain dots so
/// that `math.cos` arrives as a single token.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let offset = pos;
        let byte = bytes[pos];

        let kind = match byte {
            b' ' | b'\t' | b'\r' | b'\n' => {
                pos += 1;
                continue;
            }
            b'0'..=b'9' | b'.' => {
                pos = scan_number(bytes, pos);
                let text = &source[offset..pos];
                let value = text.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    text: text.to_owned(),
                    offset,
                })?;
                if !value.is_finite() {
                    return Err(ParseError::NumberOutOfRange {
                        text: text.to_owned(),
                        offset,
                    });
                }
                TokenKind::Number(value)
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                while pos < bytes.len()
                    && (bytes[pos].is_ascii_alphanumeric() || matches!(bytes[pos], b'_' | b'.'))
                {
                    pos += 1;
                }
                TokenKind::Name(source[offset..pos].to_owned())
            }
            b'*' if bytes.get(pos + 1) == Some(&b'*') => {
                pos += 2;
                TokenKind::Power
            }
            _ => {
                let kind = match byte {
                    b'+' => TokenKind::Plus,
                    b'-' => TokenKind::Minus,
                    b'*' => TokenKind::Star,
                    b'/' => TokenKind::Slash,
                    b'%' => TokenKind::Percent,
                    b'^' => TokenKind::Power,
                    b'(' => TokenKind::LParen,
                    b')' => TokenKind::RParen,
                    b',' => TokenKind::Comma,
                    _ => {
                        let ch = source[offset..].chars().next().unwrap_or('\u{fffd}');
                        return Err(ParseError::UnexpectedChar { ch, offset });
                    }
                };
                pos += 1;
                kind
            }
        };

        tokens.push(Token { kind, offset });
    }

    Ok(tokens)
}

/// Returns the end of a decimal literal starting at `start`.
///
/// Accepts digits, at most one decimal point, and an optional exponent.
/// Validation of the resulting text is left to `f64::from_str`.
fn scan_number(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    let digits = |pos: &mut usize| {
        while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
            *pos += 1;
        }
    };

    digits(&mut pos);
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        digits(&mut pos);
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        if bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            pos = exp;
            digits(&mut pos);
        }
    }

    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .expect("should tokenize")
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn splits_operators_and_names() {
        assert_eq!(
            kinds("3*x**2 - math.cos(x)"),
            [
                TokenKind::Number(3.0),
                TokenKind::Star,
                TokenKind::Name("x".into()),
                TokenKind::Power,
                TokenKind::Number(2.0),
                TokenKind::Minus,
                TokenKind::Name("math.cos".into()),
                TokenKind::LParen,
                TokenKind::Name("x".into()),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn reads_scientific_notation() {
        assert_eq!(kinds("1.5e-3"), [TokenKind::Number(1.5e-3)]);
        assert_eq!(kinds(".25"), [TokenKind::Number(0.25)]);
        assert_eq!(kinds("2E+2"), [TokenKind::Number(200.0)]);
    }

    #[test]
    fn exponent_without_digits_is_a_name() {
        // `2e` is the number 2 followed by the constant e.
        assert_eq!(
            kinds("2e"),
            [TokenKind::Number(2.0), TokenKind::Name("e".into())]
        );
    }

    #[test]
    fn records_offsets() {
        let tokens = tokenize("  x +\t1").expect("should tokenize");
        let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, [2, 4, 6]);
    }

    #[test]
    fn rejects_unknown_characters() {
        assert_eq!(
            tokenize("x & 1"),
            Err(ParseError::UnexpectedChar { ch: '&', offset: 2 })
        );
    }

    #[test]
    fn rejects_literals_beyond_f64() {
        assert_eq!(
            tokenize("x - 1e999"),
            Err(ParseError::NumberOutOfRange {
                text: "1e999".into(),
                offset: 4
            })
        );
        assert_eq!(kinds("1e308"), [TokenKind::Number(1e308)]);
    }

    #[test]
    fn rejects_lone_dot() {
        assert!(matches!(
            tokenize("."),
            Err(ParseError::InvalidNumber { offset: 0, .. })
        ));
    }
}

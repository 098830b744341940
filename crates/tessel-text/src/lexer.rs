//! Lexer for the circuit text format.

use logos::Logos;

/// Tokens of the circuit text format.
///
/// Newlines are significant: they terminate instructions.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip r"#[^\n]*")]
pub enum Token {
    #[token("\n")]
    Newline,

    // Literals
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    FloatLiteral(f64),

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u64>().ok())]
    IntLiteral(u64),

    // Names, Pauli targets (`X5`) and the `rec` keyword all lex as identifiers.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Punctuation
    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("!")]
    Bang,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token(",")]
    Comma,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Newline => write!(f, "newline"),
            Token::FloatLiteral(v) => write!(f, "{v}"),
            Token::IntLiteral(v) => write!(f, "{v}"),
            Token::Identifier(s) => write!(f, "{s}"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Bang => write!(f, "!"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::Comma => write!(f, ","),
        }
    }
}

/// A token with its span information.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: std::ops::Range<usize>,
}

/// Tokenize a circuit source string.
pub fn tokenize(source: &str) -> Vec<Result<SpannedToken, (std::ops::Range<usize>, String)>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        if let Ok(token) = result {
            tokens.push(Ok(SpannedToken { token, span }));
        } else {
            let slice = &source[span.clone()];
            tokens.push(Err((span, format!("Invalid token: '{slice}'"))));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        tokenize(source)
            .into_iter()
            .filter_map(Result::ok)
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_gate_line() {
        let t = tokens("CX 0 1 # trailing comment\n");
        assert!(matches!(t[0], Token::Identifier(ref s) if s == "CX"));
        assert_eq!(t[1], Token::IntLiteral(0));
        assert_eq!(t[2], Token::IntLiteral(1));
        assert_eq!(t[3], Token::Newline);
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn test_arguments() {
        let t = tokens("X_ERROR(1e-3) 5");
        assert!(matches!(t[0], Token::Identifier(ref s) if s == "X_ERROR"));
        assert_eq!(t[1], Token::LParen);
        assert!(matches!(t[2], Token::FloatLiteral(v) if (v - 0.001).abs() < 1e-12));
        assert_eq!(t[3], Token::RParen);
    }

    #[test]
    fn test_record_and_product_targets() {
        let t = tokens("DETECTOR rec[-1]\nMPP !X1*Y2");
        assert!(matches!(t[1], Token::Identifier(ref s) if s == "rec"));
        assert_eq!(t[2], Token::LBracket);
        assert_eq!(t[3], Token::Minus);
        assert_eq!(t[4], Token::IntLiteral(1));
        assert_eq!(t[5], Token::RBracket);
        assert_eq!(t[6], Token::Newline);
        assert_eq!(t[8], Token::Bang);
        assert!(matches!(t[9], Token::Identifier(ref s) if s == "X1"));
        assert_eq!(t[10], Token::Star);
        assert!(matches!(t[11], Token::Identifier(ref s) if s == "Y2"));
    }

    #[test]
    fn test_invalid_token() {
        let results = tokenize("H 0 $");
        assert!(results.iter().any(Result::is_err));
    }
}

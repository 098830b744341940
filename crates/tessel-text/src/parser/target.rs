//! Target parsing: qubits, Pauli terms, record lookbacks and combiners.

use tessel_ir::{GateTarget, Pauli, QubitId};

use super::Parser;
use crate::error::{ParseError, ParseResult};
use crate::lexer::Token;

impl Parser {
    /// Parse a single operation target.
    pub(super) fn parse_target(&mut self) -> ParseResult<GateTarget> {
        if self.consume(&Token::Bang) {
            let target = self.parse_target()?;
            return match target {
                GateTarget::Qubit { .. } | GateTarget::Pauli { .. } => Ok(target.inverted()),
                other => Err(ParseError::InvalidTarget {
                    line: self.line,
                    target: format!("!{other}"),
                }),
            };
        }

        match self.advance() {
            Some(Token::IntLiteral(v)) => Ok(GateTarget::Qubit {
                qubit: self.qubit_id(v)?,
                inverted: false,
            }),
            Some(Token::Star) => Ok(GateTarget::Combiner),
            Some(Token::Identifier(word)) if word == "rec" => self.parse_record(),
            Some(Token::Identifier(word)) => self.pauli_target(&word),
            Some(other) => Err(self.unexpected("target", &other)),
            None => Err(ParseError::UnexpectedEof("target".into())),
        }
    }

    /// Parse `[-k]` after `rec`.
    fn parse_record(&mut self) -> ParseResult<GateTarget> {
        self.expect(Token::LBracket)?;
        let negative = self.consume(&Token::Minus);
        let magnitude = self.parse_int_literal()?;
        self.expect(Token::RBracket)?;

        let magnitude = i64::try_from(magnitude).map_err(|_| ParseError::InvalidTarget {
            line: self.line,
            target: format!("rec[{magnitude}]"),
        })?;
        let offset = if negative { -magnitude } else { magnitude };
        Ok(GateTarget::record(offset)?)
    }

    /// Interpret an identifier such as `X5` as a Pauli target.
    fn pauli_target(&self, word: &str) -> ParseResult<GateTarget> {
        let invalid = || ParseError::InvalidTarget {
            line: self.line,
            target: word.to_string(),
        };
        let mut chars = word.chars();
        let pauli = chars.next().and_then(Pauli::from_letter).ok_or_else(invalid)?;
        let index: u64 = chars.as_str().parse().map_err(|_| invalid())?;
        Ok(GateTarget::Pauli {
            pauli,
            qubit: self.qubit_id(index)?,
            inverted: false,
        })
    }

    fn qubit_id(&self, value: u64) -> ParseResult<QubitId> {
        u32::try_from(value)
            .map(QubitId)
            .map_err(|_| ParseError::InvalidTarget {
                line: self.line,
                target: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use crate::ParseError;
    use tessel_ir::{CircuitItem, GateTarget, Pauli};

    fn targets(source: &str) -> Vec<GateTarget> {
        let circuit = parse(source).unwrap();
        match &circuit.items()[0] {
            CircuitItem::Operation(op) => op.targets.clone(),
            CircuitItem::Repeat { .. } => panic!("expected an operation"),
        }
    }

    #[test]
    fn test_inverted_targets() {
        assert_eq!(targets("M !3")[0], GateTarget::qubit(3).inverted());
        assert_eq!(
            targets("MPP !y4")[0],
            GateTarget::pauli(Pauli::Y, 4).inverted()
        );
    }

    #[test]
    fn test_record_targets() {
        assert_eq!(
            targets("CX rec[-3] 2"),
            vec![GateTarget::Record(-3), GateTarget::qubit(2)]
        );
    }

    #[test]
    fn test_invalid_targets() {
        assert!(matches!(
            parse("H Q5"),
            Err(ParseError::InvalidTarget { .. })
        ));
        assert!(matches!(
            parse("H X"),
            Err(ParseError::InvalidTarget { .. })
        ));
        assert!(matches!(
            parse("H 99999999999"),
            Err(ParseError::InvalidTarget { .. })
        ));
        assert!(matches!(
            parse("DETECTOR !rec[-1]"),
            Err(ParseError::InvalidTarget { .. })
        ));
    }
}

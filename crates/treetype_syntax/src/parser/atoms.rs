/// Atom and alternatives parsing.
///
/// This chunk reads the two innermost grammar levels:
/// - atoms: one literal, group, tree or fixed list, plus any number of `[]` suffixes
/// - alternatives: atoms separated by `|`, accumulated into one flat choice
///
/// ## Notes
/// - The two levels normalize single-member choices differently; see [`unwrap_atom`] and
///   [`unwrap_alternatives`]. Keep them separate.
impl<'a> Parser<'a> {
    // ========================================================================
    // Atoms
    // ========================================================================

    /// Read a single atom (`nil`, `int[]`, `(int|any)[][]`, `<nil.nil>`, `[nil,any]`, ...).
    fn read_atom(&mut self) -> Result<Alternative, ParseError> {
        let first = self.cursor.take_any()?;

        let mut node = match first {
            // Separators and closers only ever follow something the caller has already read
            token if token.is_atom_terminator() => return Err(ParseError::unexpected(token.clone(), None)),
            Token::Punctuation(PunctuationId::LAngle) => self.read_tree()?,
            Token::Punctuation(PunctuationId::LParen) => self.read_group()?,
            Token::Punctuation(PunctuationId::LBracket) => self.read_fixed_list()?,
            Token::Punctuation(_) => return Err(ParseError::unexpected(first.clone(), None)),
            Token::Literal(literal) => TypeExpr::leaf(literal.clone()),
        };

        // `T[][]` is List(List(T)): each suffix wraps the previous result
        while self.is_list_suffix()? {
            node = TypeExpr::list(node);
        }

        Ok(unwrap_atom(node))
    }

    /// Consume a `[]` list suffix if one follows.
    ///
    /// Returns `Ok(false)` and consumes nothing when the next token is not `[`. A `[` that is not
    /// immediately closed is an error.
    fn is_list_suffix(&mut self) -> Result<bool, ParseError> {
        if !self.cursor.match_punct(PunctuationId::LBracket) {
            return Ok(false);
        }
        self.cursor.take_expected(PunctuationId::RBracket)?;
        Ok(true)
    }

    // ========================================================================
    // Alternatives
    // ========================================================================

    /// Read as many atoms as possible (`atom[|atom[|atom[...]]]`).
    fn read_alternatives(&mut self) -> Result<TypeExpr, ParseError> {
        let mut choice = TypeExpr::Choice(Vec::new());

        choice.push_alternative(self.read_atom()?);
        while self.cursor.match_punct(PunctuationId::Bar) {
            choice.push_alternative(self.read_atom()?);
        }

        Ok(unwrap_alternatives(choice))
    }
}

/// Atom-level normalization: a choice of exactly one member becomes that member.
///
/// This lets a lone literal travel bare until the enclosing alternatives decide whether it needs
/// a choice around it.
fn unwrap_atom(node: TypeExpr) -> Alternative {
    match node {
        TypeExpr::Choice(mut members) if members.len() == 1 => members.remove(0),
        other => Alternative::Node(other),
    }
}

/// Alternatives-level normalization: a choice of exactly one *structured* member becomes that
/// member, while a choice of one bare literal stays a choice.
///
/// `int[]` is therefore `List(Choice[int])`, and `int` on its own is `Choice[int]`.
fn unwrap_alternatives(node: TypeExpr) -> TypeExpr {
    match node {
        TypeExpr::Choice(mut members) if members.len() == 1 => match members.pop() {
            Some(Alternative::Node(inner)) => inner,
            Some(leaf) => TypeExpr::Choice(vec![leaf]),
            None => TypeExpr::Choice(members),
        },
        other => other,
    }
}

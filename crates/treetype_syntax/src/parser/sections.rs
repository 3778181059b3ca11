/// Bracketed sections: groups, trees and fixed-length lists.
///
/// Each reader is entered with its opening bracket already consumed and consumes through the
/// matching closing bracket.
impl<'a> Parser<'a> {
    // ========================================================================
    // Sections
    // ========================================================================

    /// `( alternatives )`. Parentheses only group; they produce no node of their own.
    fn read_group(&mut self) -> Result<TypeExpr, ParseError> {
        let inner = self.read_alternatives()?;
        self.cursor.take_expected(PunctuationId::RParen)?;
        Ok(inner)
    }

    /// `< alternatives . alternatives >`
    fn read_tree(&mut self) -> Result<TypeExpr, ParseError> {
        let left = self.read_alternatives()?;
        self.cursor.take_expected(PunctuationId::Dot)?;
        let right = self.read_alternatives()?;
        self.cursor.take_expected(PunctuationId::RAngle)?;
        Ok(TypeExpr::tree(left, right))
    }

    /// Fixed-length list sugar, desugared to right-nested trees.
    ///
    /// - `[]` is the terminator literal on its own
    /// - `[T1,T2]` is `<T1.<T2.nil>>`
    /// - `[T1,...]` is `<T1.any>`: the open tail replaces the terminator
    fn read_fixed_list(&mut self) -> Result<TypeExpr, ParseError> {
        let mut elements = Vec::new();
        let mut tail = TypeExpr::leaf(self.config.list_terminator.clone());

        if !self.cursor.match_punct(PunctuationId::RBracket) {
            loop {
                if self.cursor.match_punct(PunctuationId::Ellipsis) {
                    tail = TypeExpr::leaf(self.config.open_tail.clone());
                    self.cursor.take_expected(PunctuationId::RBracket)?;
                    break;
                }
                elements.push(self.read_alternatives()?);
                let separator = self
                    .cursor
                    .take_expected_one_of(&[PunctuationId::Comma, PunctuationId::RBracket])?;
                if separator.is_punctuation(PunctuationId::RBracket) {
                    break;
                }
            }
        }

        Ok(elements
            .into_iter()
            .rev()
            .fold(tail, |rest, element| TypeExpr::tree(element, rest)))
    }
}

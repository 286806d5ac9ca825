//! Operator vocabularies. Operators are spelled by their symbol.

symbols! {
    /// Prefix operators.
    pub enum UnaryOperator {
        Plus = 0 => "+",
        Minus = 1 => "-",
        /// Logical negation.
        Not = 2 => "!",
    }
}

symbols! {
    /// Infix operators, declared from the tightest binding to the loosest.
    pub enum BinaryOperator {
        /// Exponentiation.
        Exp = 0 => "^",
        Mul = 1 => "*",
        Div = 2 => "/",
        /// Remainder.
        Mod = 3 => "%",
        Add = 4 => "+",
        Sub = 5 => "-",
        Lt = 6 => "<",
        Gt = 7 => ">",
        Le = 8 => "<=",
        Ge = 9 => ">=",
        Eq = 10 => "==",
        Neq = 11 => "!=",
        And = 12 => "&&",
        Or = 13 => "||",
    }
}

impl BinaryOperator {
    /// Returns `true` for `&&` and `||`.
    pub fn is_logical(self) -> bool {
        matches!(self, BinaryOperator::And | BinaryOperator::Or)
    }

    /// Returns `true` for the comparison and equality operators.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOperator::Lt
                | BinaryOperator::Gt
                | BinaryOperator::Le
                | BinaryOperator::Ge
                | BinaryOperator::Eq
                | BinaryOperator::Neq
        )
    }
}

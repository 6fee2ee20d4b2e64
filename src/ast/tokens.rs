/// Lexical tokens produced by the scanner.
///
/// Tokens are produced left-to-right in source order and are never
/// reordered. Each one is a contiguous slice of the source text,
/// classified at creation time.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal text: a digit run with at most one decimal point
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// .5
    /// ```
    Number(String),

    /// Double-quoted identifier with the quotes stripped
    ///
    /// Quoting forces a name to bind as an array even when it collides
    /// with a keyword or looks like a number.
    ///
    /// # Examples
    /// ```text
    /// "Confidence Index"
    /// "sin"
    /// ```
    Quoted(String),

    /// Bracketed component index
    ///
    /// # Examples
    /// ```text
    /// [0]
    /// [2]
    /// ```
    Index(usize),

    /// Bare word: letters, digits, underscores, and interior spaces,
    /// never starting with a digit
    ///
    /// # Examples
    /// ```text
    /// sin
    /// Confidence Index
    /// Phases_2
    /// ```
    Word(String),

    /// Any other single character
    Symbol(char),
}

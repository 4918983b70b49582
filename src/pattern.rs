use std::fmt;

use regex::Regex;

/// Delimiter style for placeholder tokens.
///
/// `Brace` is the primary contract; the other styles exist so templates
/// authored with a different delimiter convention can be scanned by the same
/// traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenGrammar {
    /// `{name}`
    #[default]
    Brace,
    /// `{{name}}`
    DoubleBrace,
    /// `[name]`
    Bracket,
    /// `<name>`
    Angle,
}

impl TokenGrammar {
    pub fn from_name(name: &str) -> Option<TokenGrammar> {
        match name {
            "brace" => Some(TokenGrammar::Brace),
            "double-brace" => Some(TokenGrammar::DoubleBrace),
            "bracket" => Some(TokenGrammar::Bracket),
            "angle" => Some(TokenGrammar::Angle),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenGrammar::Brace => "brace",
            TokenGrammar::DoubleBrace => "double-brace",
            TokenGrammar::Bracket => "bracket",
            TokenGrammar::Angle => "angle",
        }
    }

    pub fn open(&self) -> &'static str {
        match self {
            TokenGrammar::Brace => "{",
            TokenGrammar::DoubleBrace => "{{",
            TokenGrammar::Bracket => "[",
            TokenGrammar::Angle => "<",
        }
    }

    pub fn close(&self) -> &'static str {
        match self {
            TokenGrammar::Brace => "}",
            TokenGrammar::DoubleBrace => "}}",
            TokenGrammar::Bracket => "]",
            TokenGrammar::Angle => ">",
        }
    }
}

impl fmt::Display for TokenGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Recognizes placeholder tokens embedded in free text.
///
/// A token is an identifier between the grammar's delimiters. The identifier
/// class is letters, digits, underscore, plus the path-like separators `/`,
/// `-` and `.` (names such as `nomor/bulan` or `v1.0`). Delimiter characters
/// are excluded from the class, so the first closing delimiter always ends
/// the capture.
pub struct PatternMatcher {
    grammar: TokenGrammar,
    pattern: Regex,
}

impl PatternMatcher {
    pub fn new(grammar: TokenGrammar) -> Self {
        let pattern = Regex::new(&format!(
            "{}([A-Za-z0-9_/.-]+){}",
            regex::escape(grammar.open()),
            regex::escape(grammar.close()),
        ))
        .expect("token pattern is statically valid");
        Self { grammar, pattern }
    }

    pub fn grammar(&self) -> TokenGrammar {
        self.grammar
    }

    /// Return the set of placeholder names in `text`, deduplicated, in
    /// first-match order. Text without both delimiters short-circuits to an
    /// empty set before the regex runs; malformed delimiter text is not an
    /// error, it simply yields no matches.
    pub fn capture_names<'t>(&self, text: &'t str) -> Vec<&'t str> {
        if !(text.contains(self.grammar.open()) && text.contains(self.grammar.close())) {
            return Vec::new();
        }
        let mut names: Vec<&str> = Vec::new();
        for (_, [name]) in self.pattern.captures_iter(text).map(|c| c.extract()) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

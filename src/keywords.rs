use crate::token::TokenType;

/// Every reserved word of the language, paired with its token type.
pub const KEYWORDS: [(&str, TokenType); 16] = [
    ("and", TokenType::And),
    ("class", TokenType::Class),
    ("else", TokenType::Else),
    ("false", TokenType::False),
    ("for", TokenType::For),
    ("fun", TokenType::Fun),
    ("if", TokenType::If),
    ("nil", TokenType::Nil),
    ("or", TokenType::Or),
    ("print", TokenType::Print),
    ("return", TokenType::Return),
    ("super", TokenType::Super),
    ("this", TokenType::This),
    ("true", TokenType::True),
    ("var", TokenType::Var),
    ("while", TokenType::While),
];

/// Returns the keyword type for `lexeme`, or `None` for a plain identifier.
pub fn keyword(lexeme: &str) -> Option<TokenType> {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == lexeme)
        .map(|&(_, type_)| type_)
}

use std::{
    ops::{Deref, DerefMut},
    slice::{Iter, IterMut},
};

/// A single word of already tokenized text.
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct Token(String);

impl Token {
    pub fn inner(self) -> String {
        self.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Token {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Token {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Token> for String {
    fn from(value: Token) -> Self {
        value.0
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token(String::from(value))
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tokens(Vec<Token>);

impl Tokens {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.0.push(token)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, Token> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, Token> {
        self.0.iter_mut()
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(value: Vec<Token>) -> Self {
        Tokens(value)
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Tokens(iter.into_iter().collect())
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[macro_export]
macro_rules! tokens {
    ( $( $token:expr ),* $(,)? ) => {{
        $crate::token::Tokens::from(vec![
            $( $crate::token::Token::from($token) ),*
        ])
    }};
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, Tokens};

    #[test]
    fn test_tokens_macro() {
        let tokens = tokens!["walked", "mice"];

        assert_eq!(tokens.count(), 2);
        assert_eq!(
            tokens,
            Tokens::from(vec![Token::from("walked"), Token::from("mice")])
        );
        assert!(tokens![].is_empty());
    }

    #[test]
    fn test_token_deref() {
        let mut token = Token::from("Walked");
        token.make_ascii_lowercase();

        assert_eq!(token.as_str(), "walked");
        assert_eq!(String::from(token), "walked");
    }
}

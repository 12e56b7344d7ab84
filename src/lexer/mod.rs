//! # Analizador Léxico
//! src/lexer/mod.rs
//!
//! Scanner lineal para un subconjunto de C con una tabla de clasificación
//! fija. Recorre cada línea por separado:
//!
//! 1. Salta espacios.
//! 2. Intenta un operador de dos caracteres (`==`, `<=`, `&&`, ...).
//! 3. Intenta un operador o delimitador de un carácter.
//! 4. Si no, lee una palabra hasta el próximo espacio, operador o
//!    delimitador y la clasifica (keyword, número, string o identificador).
//!
//! Línea y columna empiezan en 1 y se cuentan en caracteres.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Palabras reservadas
pub const KEYWORDS: &[&str] = &[
    "int", "float", "char", "void", "if", "else", "while", "for", "return", "include", "stdio",
    "main",
];

/// Operadores (de uno y dos caracteres)
pub const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "=", "==", "!=", "<", ">", "<=", ">=", "&&", "||", "!",
];

/// Delimitadores
pub const DELIMITERS: &[char] = &[';', ',', '(', ')', '{', '}', '[', ']'];

/// Tipo de token
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenType {
    Keyword,
    Operator,
    Delimiter,
    Identifier,
    Number,
    String,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Keyword => "KEYWORD",
            TokenType::Operator => "OPERATOR",
            TokenType::Delimiter => "DELIMITER",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::Number => "NUMBER",
            TokenType::String => "STRING",
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token reconocido
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub value: String,
    pub line: usize,
    pub column: usize,
}

/// Lexer con sus patrones ya compilados
pub struct Lexer {
    number: Regex,
    string: Regex,
}

impl Lexer {
    pub fn new() -> Self {
        // Patrones constantes: si no compilan es un bug del programa
        Self {
            number: Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("valid number pattern"),
            string: Regex::new(r#"^".*"$"#).expect("valid string pattern"),
        }
    }

    /// Tokeniza un texto completo
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        for (line_index, line) in source.lines().enumerate() {
            self.tokenize_line(line, line_index + 1, &mut tokens);
        }

        log::debug!("lexer produced {} tokens", tokens.len());
        tokens
    }

    fn tokenize_line(&self, line: &str, line_number: usize, tokens: &mut Vec<Token>) {
        let chars: Vec<char> = line.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c.is_whitespace() {
                i += 1;
                continue;
            }

            let mut push = |token_type: TokenType, value: String, column: usize| {
                tokens.push(Token {
                    token_type,
                    value,
                    line: line_number,
                    column: column + 1,
                });
            };

            if i + 1 < chars.len() {
                let two: String = chars[i..i + 2].iter().collect();
                if is_operator(&two) {
                    push(TokenType::Operator, two, i);
                    i += 2;
                    continue;
                }
            }

            if is_operator_char(c) {
                push(TokenType::Operator, c.to_string(), i);
                i += 1;
            } else if DELIMITERS.contains(&c) {
                push(TokenType::Delimiter, c.to_string(), i);
                i += 1;
            } else {
                let start = i;
                while i < chars.len() && !is_boundary(chars[i]) {
                    i += 1;
                }

                let word: String = chars[start..i].iter().collect();
                let token_type = self.classify(&word);
                push(token_type, word, start);
            }
        }
    }

    /// Clasifica una palabra que no es operador ni delimitador
    pub fn classify(&self, word: &str) -> TokenType {
        if KEYWORDS.contains(&word) {
            TokenType::Keyword
        } else if self.number.is_match(word) {
            TokenType::Number
        } else if self.string.is_match(word) {
            TokenType::String
        } else {
            TokenType::Identifier
        }
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_operator(s: &str) -> bool {
    OPERATORS.contains(&s)
}

fn is_operator_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    is_operator(c.encode_utf8(&mut buf))
}

fn is_boundary(c: char) -> bool {
    c.is_whitespace() || is_operator_char(c) || DELIMITERS.contains(&c)
}

/// Atajo: tokeniza con un lexer nuevo
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new().tokenize(source)
}

/// Cuenta tokens por tipo (ordenado por tipo)
pub fn token_counts(tokens: &[Token]) -> BTreeMap<TokenType, usize> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.token_type).or_insert(0) += 1;
    }
    counts
}

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[regex(r"-?[0-9]+")]
    Number,

    // A symbol never starts with a numeral, so `12abc` splits into a number
    // and a symbol the same way the grammar does.
    #[regex(r"[a-zA-Z_+*/\\=<>!&][a-zA-Z0-9_+\-*/\\=<>!&]*")]
    #[regex(r"-([a-zA-Z_+\-*/\\=<>!&][a-zA-Z0-9_+\-*/\\=<>!&]*)?")]
    Symbol,
}

/// Count the parentheses still open at the end of `buffer`.
///
/// Returns `None` when the buffer contains a character the grammar cannot
/// lex; the parser will report it, so there is no point waiting for more
/// input.
pub fn calculate_depth(buffer: &str) -> Option<usize> {
    let mut depth: isize = 0;

    for token_res in Token::lexer(buffer) {
        match token_res {
            Ok(Token::LParen) => depth += 1,
            Ok(Token::RParen) => depth -= 1,
            Ok(_) => {}
            Err(_) => return None,
        }
    }

    if depth < 0 {
        Some(0)
    } else {
        Some(depth as usize)
    }
}

use logos::Logos;
use nu_ansi_term::{Color, Style};
use reedline::{StyledText, ValidationResult, Validator};

use crate::lexer::{Token, calculate_depth};

const DEFAULT_FG: Color = Color::White;

fn token_color(token: Token, text: &str) -> Color {
    match token {
        Token::LParen | Token::RParen => Color::White,
        Token::Number => Color::Cyan,
        Token::Symbol if lispy::Builtin::from_symbol(text).is_some() => Color::Magenta,
        Token::Symbol => Color::Red,
    }
}

pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let mut curr_end = 0;

        for (token_res, span) in Token::lexer(line).spanned() {
            if span.start > curr_end {
                output.push((Style::new().fg(DEFAULT_FG), line[curr_end..span.start].to_string()));
            }
            let text = &line[span.clone()];
            let fg = match token_res {
                Ok(token) => token_color(token, text),
                Err(_) => Color::DarkGray,
            };
            output.push((Style::new().fg(fg), text.to_string()));
            curr_end = span.end;
        }

        if curr_end < line.len() {
            output.push((Style::new().fg(DEFAULT_FG), line[curr_end..].to_string()));
        }

        output
    }
}

/// Keeps the editor open while parentheses are unbalanced.
pub struct ParenValidator;

impl Validator for ParenValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match calculate_depth(line) {
            Some(depth) if depth > 0 => ValidationResult::Incomplete,
            _ => ValidationResult::Complete,
        }
    }
}

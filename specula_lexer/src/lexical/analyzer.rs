//! Character-driven tokenizer
//!
//! Each character is dispatched against the current [`LexerState`]. A handler
//! either consumes the character or changes state and asks for the same
//! character to be dispatched again ([`Step::Reprocess`]). Reprocess chains
//! are bounded by `MAX_REPROCESS_DEPTH`.

use super::diagnostics::{Diagnostic, DiagnosticKind, LexerError};
use super::state::{LexerState, Step};
use crate::config::compile_time::lexical::{
    MAX_DIAGNOSTICS, MAX_REPROCESS_DEPTH, MAX_TOKEN_TEXT_LENGTH,
};
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tables;
use crate::tokens::{Token, TokenClass, TokenKind};
use crate::utils::{Position, Span};
use crate::{log_debug, log_error, log_warning};

/// Counters kept across `feed` calls until `reset`
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub literal_tokens: usize,
    pub keyword_tokens: usize,
    pub operator_tokens: usize,
    pub delimiter_tokens: usize,
    pub identifier_tokens: usize,
    pub unknown_tokens: usize,
    pub diagnostics: usize,
    pub comments_skipped: usize,
    pub lines_fed: usize,
    pub chars_processed: usize,
}

impl LexicalMetrics {
    fn record_token(&mut self, kind: TokenKind) {
        self.total_tokens += 1;
        match kind.token_class() {
            TokenClass::Literal => self.literal_tokens += 1,
            TokenClass::Keyword => self.keyword_tokens += 1,
            TokenClass::Operator => self.operator_tokens += 1,
            TokenClass::Delimiter => self.delimiter_tokens += 1,
            TokenClass::Identifier => self.identifier_tokens += 1,
            TokenClass::Unknown => self.unknown_tokens += 1,
            TokenClass::Whitespace => {}
        }
    }
}

pub struct Lexer {
    state: LexerState,
    /// Decoded text of the pending token
    lexeme: String,
    lexeme_len: usize,
    /// Where the pending token (or open block comment) began
    token_start: Option<Position>,
    line: u32,
    char_pos: usize,
    /// Characters of the text currently being fed
    line_chars: Vec<char>,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    pub fn new() -> Self {
        Self::with_preferences(LexicalPreferences::default())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            state: LexerState::Start,
            lexeme: String::new(),
            lexeme_len: 0,
            token_start: None,
            line: 0,
            char_pos: 0,
            line_chars: Vec::new(),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    // ------------------------------------------------------------------
    // Public API
    // ------------------------------------------------------------------

    /// Tokenize `text` as line `line`, appending to the accumulated tokens.
    ///
    /// Recoverable problems are recorded in [`diagnostics`](Self::diagnostics)
    /// and lexing continues. A literal or comment left open when `text` ends
    /// returns [`LexerError::Terminal`] positioned at its opening character;
    /// tokens emitted before it are kept.
    pub fn feed(&mut self, text: &str, line: u32) -> Result<(), LexerError> {
        self.line = line;
        self.char_pos = 0;
        self.line_chars.clear();
        self.line_chars.extend(text.chars());
        self.metrics.lines_fed += 1;

        log_debug!("Feeding line", "line" => line, "chars" => self.line_chars.len());

        for index in 0..self.line_chars.len() {
            self.char_pos = index;
            self.step(self.line_chars[index])?;
            self.metrics.chars_processed += 1;
        }

        self.char_pos = self.line_chars.len();
        self.flush()
    }

    /// Signal the end of the whole input. Only matters when block comments
    /// are carried between `feed` calls: one still open here is terminal.
    pub fn finish(&mut self) -> Result<(), LexerError> {
        if self.state.is_block_comment() {
            return self.terminal(
                DiagnosticKind::UnterminatedBlockComment,
                "Block comment is not ended",
            );
        }
        Ok(())
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Move the accumulated tokens out, leaving the rest of the state alone
    pub fn take_tokens(&mut self) -> Vec<Token> {
        std::mem::take(&mut self.tokens)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn state(&self) -> LexerState {
        self.state
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    /// Clear tokens, diagnostics and metrics and return to START
    pub fn reset(&mut self) {
        self.reset_state();
        self.tokens.clear();
        self.diagnostics.clear();
        self.line_chars.clear();
        self.metrics = LexicalMetrics::default();
        self.line = 0;
        self.char_pos = 0;
    }

    // ------------------------------------------------------------------
    // Driver
    // ------------------------------------------------------------------

    fn step(&mut self, c: char) -> Result<(), LexerError> {
        if self.lexeme_len >= MAX_TOKEN_TEXT_LENGTH
            && self.state != LexerState::Invalid
            && !self.state.is_comment()
        {
            self.record(
                DiagnosticKind::LexemeTooLong,
                format!("Lexeme exceeds {} characters", MAX_TOKEN_TEXT_LENGTH),
            );
            self.state = LexerState::Invalid;
        }

        for _ in 0..=MAX_REPROCESS_DEPTH {
            if self.dispatch(c) == Step::Consume {
                return Ok(());
            }
        }

        let state = self.state;
        log_error!(
            codes::system::INTERNAL_ERROR,
            "Reprocess limit exceeded",
            span = Span::single(self.position()),
            "state" => state,
            "character" => c.escape_debug()
        );
        self.reset_state();
        Err(LexerError::ReprocessLimit {
            state,
            character: c,
            line: self.line,
            char_pos: self.char_pos,
        })
    }

    fn dispatch(&mut self, c: char) -> Step {
        match self.state {
            LexerState::Start => self.on_start(c),
            LexerState::Delimiter => self.on_delimiter(c),
            LexerState::ExpectDelimiter => self.on_expect_delimiter(c),
            LexerState::Identifier => self.on_identifier(c),
            LexerState::IdentifierDash => self.on_identifier_dash(c),
            LexerState::NumStart => self.on_num_start(c),
            LexerState::DecimalReached => self.on_decimal(c),
            LexerState::Float => self.on_float(c),
            LexerState::CharStart => self.on_char_start(c),
            LexerState::CharEscape => self.on_char_escape(c),
            LexerState::CharEnd => self.on_char_end(c),
            LexerState::StringStart | LexerState::String => self.on_string(c),
            LexerState::StringEscape => self.on_string_escape(c),
            LexerState::Op => self.on_op(c),
            LexerState::OpEqualsNext => self.on_equals_next(c),
            LexerState::OpIncrementable => self.on_incrementable(c),
            LexerState::OpLogical => self.on_logical(c),
            LexerState::OpMinus => self.on_minus(c),
            LexerState::OpLessThan => self.on_less_than(c),
            LexerState::OpGreaterThan => self.on_greater_than(c),
            LexerState::OpLeftArrow => self.on_left_arrow(c),
            LexerState::CharSlash => self.on_slash(c),
            LexerState::Comment => self.on_comment(c),
            LexerState::MultilineComment => self.on_block_comment(c),
            LexerState::MultilineCommentEnd => self.on_block_comment_end(c),
            LexerState::Invalid => self.on_invalid(c),
        }
    }

    /// Finalize whatever is pending at the end of a `feed` call
    fn flush(&mut self) -> Result<(), LexerError> {
        let end = self.char_pos;

        match self.state {
            LexerState::Start | LexerState::Delimiter | LexerState::ExpectDelimiter => {}
            LexerState::Identifier => self.finalize_identifier(end),
            LexerState::IdentifierDash => self.finalize_dashed(end),
            LexerState::NumStart => self.emit(TokenKind::LiteralInt, end),
            LexerState::DecimalReached => {
                if self.lexeme.ends_with('.') {
                    self.record(DiagnosticKind::UnterminatedDoubleLiteral, "Double is not ended");
                    self.emit_unknown(end);
                } else {
                    self.emit(TokenKind::LiteralDouble, end);
                }
            }
            LexerState::Float => self.emit(TokenKind::LiteralFloat, end),
            LexerState::Op
            | LexerState::OpEqualsNext
            | LexerState::OpIncrementable
            | LexerState::OpLogical
            | LexerState::OpMinus
            | LexerState::OpLessThan
            | LexerState::OpGreaterThan
            | LexerState::CharSlash => self.emit_pending_operator(end),
            LexerState::OpLeftArrow => self.emit(TokenKind::LeftArrow, end),
            LexerState::Comment => self.metrics.comments_skipped += 1,
            LexerState::MultilineComment | LexerState::MultilineCommentEnd => {
                if self.preferences.carry_block_comments {
                    log_debug!("Carrying block comment", "line" => self.line);
                    return Ok(());
                }
                return self.terminal(
                    DiagnosticKind::UnterminatedBlockComment,
                    "Block comment is not ended",
                );
            }
            LexerState::CharStart | LexerState::CharEnd => {
                return self.terminal(DiagnosticKind::UnterminatedCharLiteral, "Char is not ended");
            }
            LexerState::CharEscape => {
                return self.terminal(
                    DiagnosticKind::UnterminatedCharLiteral,
                    "Character escape not ended",
                );
            }
            LexerState::StringStart | LexerState::String => {
                return self.terminal(
                    DiagnosticKind::UnterminatedStringLiteral,
                    "String not ended",
                );
            }
            LexerState::StringEscape => {
                return self.terminal(
                    DiagnosticKind::UnterminatedStringLiteral,
                    "String escape not ended",
                );
            }
            LexerState::Invalid => self.emit_unknown(end),
        }

        self.reset_state();
        log_debug!("Flushed line", "line" => self.line, "tokens" => self.tokens.len());
        Ok(())
    }

    // ------------------------------------------------------------------
    // Buffer and emission helpers
    // ------------------------------------------------------------------

    fn position(&self) -> Position {
        Position::new(self.line, self.char_pos)
    }

    fn push(&mut self, c: char) {
        self.lexeme.push(c);
        self.lexeme_len += 1;
    }

    fn first_char(&self) -> Option<char> {
        self.lexeme.chars().next()
    }

    fn reset_state(&mut self) {
        self.state = LexerState::Start;
        self.lexeme.clear();
        self.lexeme_len = 0;
        self.token_start = None;
    }

    fn go(&mut self, state: LexerState, step: Step) -> Step {
        self.state = state;
        step
    }

    /// Emit the pending lexeme as `kind`, ending (exclusive) at `end`
    fn emit(&mut self, kind: TokenKind, end: usize) {
        let start = match self.token_start.take() {
            Some(position) if position.line == self.line => position.char_pos,
            _ => end.saturating_sub(self.lexeme_len),
        };
        let text = std::mem::take(&mut self.lexeme);
        self.lexeme_len = 0;

        if self.preferences.collect_metrics {
            self.metrics.record_token(kind);
        }
        self.tokens.push(Token::new(kind, text, self.line, start, end));
    }

    /// Emit including the current character
    fn emit_through(&mut self, kind: TokenKind) {
        self.emit(kind, self.char_pos + 1);
    }

    /// Emit ending just before the current character
    fn emit_before(&mut self, kind: TokenKind) {
        self.emit(kind, self.char_pos);
    }

    /// UNKNOWN token carrying the raw source of the skipped span
    fn emit_unknown(&mut self, end: usize) {
        let start = self
            .token_start
            .filter(|position| position.line == self.line)
            .map_or(end, |position| position.char_pos);

        self.lexeme = match self.line_chars.get(start..end) {
            Some(raw) => raw.iter().collect(),
            None => std::mem::take(&mut self.lexeme),
        };
        self.lexeme_len = end.saturating_sub(start);
        self.token_start = Some(Position::new(self.line, start));
        self.emit(TokenKind::Unknown, end);
    }

    fn emit_pending_operator(&mut self, end: usize) {
        if let Some(kind) = self.first_char().and_then(tables::single_operator) {
            self.emit(kind, end);
        }
    }

    fn record(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(kind, message, self.position());

        if self.preferences.log_diagnostics {
            log_warning!(
                kind.code(),
                &diagnostic.message,
                span = Span::single(diagnostic.position()),
                "state" => self.state
            );
        }

        self.metrics.diagnostics += 1;
        if self.diagnostics.len() < MAX_DIAGNOSTICS {
            self.diagnostics.push(diagnostic);
        }
    }

    /// Record a recoverable diagnostic and resynchronize through INVALID
    fn invalid(&mut self, kind: DiagnosticKind, message: impl Into<String>) -> Step {
        self.record(kind, message);
        if self.token_start.is_none() {
            self.token_start = Some(self.position());
        }
        self.go(LexerState::Invalid, Step::Reprocess)
    }

    /// Record an unrecoverable diagnostic at the token's opening character
    fn terminal(&mut self, kind: DiagnosticKind, message: &str) -> Result<(), LexerError> {
        let at = self.token_start.unwrap_or_else(|| self.position());
        let diagnostic = Diagnostic::new(kind, message, at);

        log_error!(
            kind.code(),
            message,
            span = Span::single(at),
            "state" => self.state
        );

        self.metrics.diagnostics += 1;
        if self.diagnostics.len() < MAX_DIAGNOSTICS {
            self.diagnostics.push(diagnostic.clone());
        }
        self.reset_state();
        Err(LexerError::Terminal(diagnostic))
    }

    // ------------------------------------------------------------------
    // START / DELIMETER / INVALID
    // ------------------------------------------------------------------

    fn on_start(&mut self, c: char) -> Step {
        if !tables::is_delimiter(c) {
            self.token_start = Some(self.position());
        }

        if tables::is_identifier_start(c) {
            self.go(LexerState::Identifier, Step::Reprocess)
        } else if c.is_ascii_digit() {
            self.go(LexerState::NumStart, Step::Reprocess)
        } else if tables::is_operator_char(c) {
            self.go(LexerState::Op, Step::Reprocess)
        } else if c == '\'' {
            self.go(LexerState::CharStart, Step::Consume)
        } else if c == '"' {
            self.go(LexerState::StringStart, Step::Consume)
        } else if tables::is_delimiter(c) {
            self.go(LexerState::Delimiter, Step::Reprocess)
        } else {
            self.invalid(
                DiagnosticKind::UnrecognizedCharacter,
                "Unrecognized initial character",
            )
        }
    }

    fn on_delimiter(&mut self, c: char) -> Step {
        if let Some(kind) = tables::delimiter(c).filter(|kind| kind.is_emitted()) {
            self.push(c);
            self.emit_through(kind);
        }
        self.reset_state();
        Step::Consume
    }

    fn on_expect_delimiter(&mut self, c: char) -> Step {
        if tables::is_delimiter(c) {
            self.go(LexerState::Delimiter, Step::Reprocess)
        } else {
            self.invalid(
                DiagnosticKind::BadFloatSuffix,
                "Float literal must be followed by a delimiter",
            )
        }
    }

    fn on_invalid(&mut self, c: char) -> Step {
        if tables::is_delimiter(c) {
            self.emit_unknown(self.char_pos);
            self.reset_state();
            self.go(LexerState::Delimiter, Step::Reprocess)
        } else {
            Step::Consume
        }
    }

    // ------------------------------------------------------------------
    // Identifiers and keywords
    // ------------------------------------------------------------------

    fn on_identifier(&mut self, c: char) -> Step {
        if tables::is_identifier_char(c) {
            self.push(c);
            return Step::Consume;
        }

        if c == '-' && tables::is_dash_prefix(&self.lexeme) {
            self.push(c);
            return self.go(LexerState::IdentifierDash, Step::Consume);
        }

        self.finalize_identifier(self.char_pos);
        self.reset_state();
        Step::Reprocess
    }

    fn on_identifier_dash(&mut self, c: char) -> Step {
        // Right after the dash only an identifier start continues the compound
        let continues = if self.lexeme.ends_with('-') {
            tables::is_identifier_start(c)
        } else {
            tables::is_identifier_char(c)
        };

        if continues {
            self.push(c);
            return Step::Consume;
        }

        self.finalize_dashed(self.char_pos);
        self.reset_state();
        Step::Reprocess
    }

    fn finalize_identifier(&mut self, end: usize) {
        let kind = tables::keyword(&self.lexeme).unwrap_or_else(|| {
            if tables::is_boolean_literal(&self.lexeme) {
                TokenKind::LiteralBool
            } else {
                TokenKind::Identifier
            }
        });
        self.emit(kind, end);
    }

    /// `init-state` style compound, or left IDENT, `-`, right IDENT
    fn finalize_dashed(&mut self, end: usize) {
        if let Some(kind) = tables::keyword(&self.lexeme) {
            self.emit(kind, end);
            return;
        }

        let start = end.saturating_sub(self.lexeme_len);
        let text = std::mem::take(&mut self.lexeme);
        self.lexeme_len = 0;
        self.token_start = None;

        let Some((left, right)) = text.split_once('-') else {
            self.lexeme_len = text.chars().count();
            self.lexeme = text;
            self.emit(TokenKind::Identifier, end);
            return;
        };

        let dash = start + left.chars().count();
        let parts = [
            (TokenKind::Identifier, left, start, dash),
            (TokenKind::Minus, "-", dash, dash + 1),
            (TokenKind::Identifier, right, dash + 1, end),
        ];

        for (kind, part, part_start, part_end) in parts {
            if part.is_empty() {
                continue;
            }
            if self.preferences.collect_metrics {
                self.metrics.record_token(kind);
            }
            self.tokens
                .push(Token::new(kind, part, self.line, part_start, part_end));
        }
    }

    // ------------------------------------------------------------------
    // Numbers
    // ------------------------------------------------------------------

    fn ends_number(c: char) -> bool {
        tables::is_operator_char(c) || tables::is_delimiter(c)
    }

    fn on_num_start(&mut self, c: char) -> Step {
        if c.is_ascii_digit() {
            self.push(c);
            Step::Consume
        } else if c == '.' {
            self.push(c);
            self.go(LexerState::DecimalReached, Step::Consume)
        } else if Self::ends_number(c) {
            self.emit_before(TokenKind::LiteralInt);
            self.reset_state();
            Step::Reprocess
        } else {
            self.invalid(
                DiagnosticKind::UnrecognizedNumericContinuation,
                format!("Integer state does not recognize character: {}", c),
            )
        }
    }

    fn on_decimal(&mut self, c: char) -> Step {
        if c.is_ascii_digit() {
            self.push(c);
            Step::Consume
        } else if c == 'f' {
            self.go(LexerState::Float, Step::Reprocess)
        } else if Self::ends_number(c) {
            if self.lexeme.ends_with('.') {
                return self.invalid(
                    DiagnosticKind::UnterminatedDoubleLiteral,
                    "Double is not ended",
                );
            }
            self.emit_before(TokenKind::LiteralDouble);
            self.reset_state();
            Step::Reprocess
        } else {
            self.invalid(
                DiagnosticKind::UnrecognizedNumericContinuation,
                format!("Decimal state does not recognize character: {}", c),
            )
        }
    }

    fn on_float(&mut self, c: char) -> Step {
        self.push(c);
        self.emit_through(TokenKind::LiteralFloat);
        self.go(LexerState::ExpectDelimiter, Step::Consume)
    }

    // ------------------------------------------------------------------
    // Char and string literals
    // ------------------------------------------------------------------

    fn on_char_start(&mut self, c: char) -> Step {
        match c {
            '\\' => self.go(LexerState::CharEscape, Step::Consume),
            '\'' => self.invalid(DiagnosticKind::EmptyCharLiteral, "Character is empty"),
            _ => {
                if tables::LINE_BREAK_CHARS.contains(&c) {
                    self.record(
                        DiagnosticKind::NewlineInStringLiteral,
                        "New line before string close",
                    );
                }
                self.push(c);
                self.go(LexerState::CharEnd, Step::Consume)
            }
        }
    }

    fn on_char_escape(&mut self, c: char) -> Step {
        match tables::escape(c) {
            Ok(decoded) => {
                self.push(decoded);
                self.go(LexerState::CharEnd, Step::Consume)
            }
            Err(e) => self.invalid(DiagnosticKind::InvalidEscapeSequence, e.to_string()),
        }
    }

    fn on_char_end(&mut self, c: char) -> Step {
        if c == '\'' {
            self.emit_through(TokenKind::LiteralChar);
            self.reset_state();
            Step::Consume
        } else {
            self.invalid(
                DiagnosticKind::CharLiteralTooLong,
                "Character length is more than 1",
            )
        }
    }

    fn on_string(&mut self, c: char) -> Step {
        match c {
            '"' => {
                self.emit_through(TokenKind::LiteralString);
                self.reset_state();
                Step::Consume
            }
            '\\' => self.go(LexerState::StringEscape, Step::Consume),
            _ => {
                if tables::LINE_BREAK_CHARS.contains(&c) {
                    self.record(
                        DiagnosticKind::NewlineInStringLiteral,
                        "New line before string close",
                    );
                }
                self.push(c);
                self.go(LexerState::String, Step::Consume)
            }
        }
    }

    fn on_string_escape(&mut self, c: char) -> Step {
        match tables::escape(c) {
            Ok(decoded) => {
                self.push(decoded);
                self.go(LexerState::String, Step::Consume)
            }
            Err(e) => self.invalid(DiagnosticKind::InvalidEscapeSequence, e.to_string()),
        }
    }

    // ------------------------------------------------------------------
    // Operators
    // ------------------------------------------------------------------

    fn on_op(&mut self, c: char) -> Step {
        self.push(c);
        let next = match c {
            '/' => LexerState::CharSlash,
            '-' => LexerState::OpMinus,
            '<' => LexerState::OpLessThan,
            '>' => LexerState::OpGreaterThan,
            '&' | '|' => LexerState::OpLogical,
            '+' => LexerState::OpIncrementable,
            '^' | '!' => {
                if let Some(kind) = tables::single_operator(c) {
                    self.emit_through(kind);
                }
                self.reset_state();
                return Step::Consume;
            }
            _ => LexerState::OpEqualsNext,
        };
        self.go(next, Step::Consume)
    }

    /// Emit the one-character operator pending and re-dispatch `c` from START
    fn emit_single_and_reprocess(&mut self) -> Step {
        self.emit_pending_operator(self.char_pos);
        self.reset_state();
        Step::Reprocess
    }

    fn on_equals_next(&mut self, c: char) -> Step {
        if self.lexeme_len != 1 {
            return self.invalid(
                DiagnosticKind::MalformedOperatorSequence,
                format!("Unexpected operator sequence: {}{}", self.lexeme, c),
            );
        }

        let compound = if c == '=' {
            self.first_char().and_then(tables::assignment_operator)
        } else {
            None
        };

        match compound {
            Some(kind) => {
                self.push(c);
                self.emit_through(kind);
                self.reset_state();
                Step::Consume
            }
            None => self.emit_single_and_reprocess(),
        }
    }

    fn on_incrementable(&mut self, c: char) -> Step {
        if self.lexeme_len != 1 {
            return self.invalid(
                DiagnosticKind::MalformedOperatorSequence,
                format!("Unexpected operator sequence: {}{}", self.lexeme, c),
            );
        }

        if c == '=' {
            return self.go(LexerState::OpEqualsNext, Step::Reprocess);
        }

        let doubled = match (self.first_char(), c) {
            (Some('+'), '+') => Some(TokenKind::Increment),
            (Some('-'), '-') => Some(TokenKind::Decrement),
            _ => None,
        };

        match doubled {
            Some(kind) => {
                self.push(c);
                self.emit_through(kind);
                self.reset_state();
                Step::Consume
            }
            None => self.emit_single_and_reprocess(),
        }
    }

    fn on_logical(&mut self, c: char) -> Step {
        let doubled = match (self.first_char(), c) {
            (Some('&'), '&') => Some(TokenKind::And),
            (Some('|'), '|') => Some(TokenKind::Or),
            _ => None,
        };

        match doubled {
            Some(kind) => {
                self.push(c);
                self.emit_through(kind);
                self.reset_state();
                Step::Consume
            }
            None => self.emit_single_and_reprocess(),
        }
    }

    fn on_minus(&mut self, c: char) -> Step {
        match c {
            '-' => self.go(LexerState::OpIncrementable, Step::Reprocess),
            '=' => self.go(LexerState::OpEqualsNext, Step::Reprocess),
            '>' => {
                self.push(c);
                self.emit_through(TokenKind::RightArrow);
                self.reset_state();
                Step::Consume
            }
            _ => self.emit_single_and_reprocess(),
        }
    }

    fn on_less_than(&mut self, c: char) -> Step {
        let kind = match c {
            '=' => TokenKind::RelLessEq,
            '<' => TokenKind::ShiftL,
            '-' => {
                self.push(c);
                return self.go(LexerState::OpLeftArrow, Step::Consume);
            }
            _ => return self.emit_single_and_reprocess(),
        };
        self.push(c);
        self.emit_through(kind);
        self.reset_state();
        Step::Consume
    }

    fn on_greater_than(&mut self, c: char) -> Step {
        let kind = match c {
            '=' => TokenKind::RelGreaterEq,
            '>' => TokenKind::ShiftR,
            _ => return self.emit_single_and_reprocess(),
        };
        self.push(c);
        self.emit_through(kind);
        self.reset_state();
        Step::Consume
    }

    fn on_left_arrow(&mut self, c: char) -> Step {
        if c == '>' {
            self.push(c);
            self.emit_through(TokenKind::Bidirectional);
            self.reset_state();
            Step::Consume
        } else {
            self.emit_before(TokenKind::LeftArrow);
            self.reset_state();
            Step::Reprocess
        }
    }

    // ------------------------------------------------------------------
    // Comments
    // ------------------------------------------------------------------

    fn on_slash(&mut self, c: char) -> Step {
        match c {
            '/' => {
                self.lexeme.clear();
                self.lexeme_len = 0;
                self.go(LexerState::Comment, Step::Consume)
            }
            '*' => {
                self.lexeme.clear();
                self.lexeme_len = 0;
                self.go(LexerState::MultilineComment, Step::Consume)
            }
            _ => self.go(LexerState::OpEqualsNext, Step::Reprocess),
        }
    }

    fn on_comment(&mut self, c: char) -> Step {
        if c == '\n' {
            self.metrics.comments_skipped += 1;
            self.reset_state();
        }
        Step::Consume
    }

    fn on_block_comment(&mut self, c: char) -> Step {
        if c == '*' {
            self.state = LexerState::MultilineCommentEnd;
        }
        Step::Consume
    }

    fn on_block_comment_end(&mut self, c: char) -> Step {
        match c {
            '/' => {
                self.metrics.comments_skipped += 1;
                self.reset_state();
            }
            '*' => {}
            _ => self.state = LexerState::MultilineComment,
        }
        Step::Consume
    }
}

//! Fundamental types used by this crate.

use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    ops::{Add, AddAssign, Range},
};

pub(crate) type DefaultHashMap<K, V> = HashMap<K, V>;
pub(crate) type DefaultHashSet<T> = HashSet<T>;

/// A position in a text. Tracks bytes and chars in parallel because offsets into
/// a string slice are bytes while users mostly care about chars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub byte: usize,
    pub char: usize,
}

impl Position {
    /// The position right after `text`.
    pub fn after(text: &str) -> Self {
        Position {
            byte: text.len(),
            char: text.chars().count(),
        }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, other: Position) -> Position {
        Position {
            byte: self.byte + other.byte,
            char: self.char + other.char,
        }
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, other: Position) {
        *self = *self + other;
    }
}

/// A half-open range in a text, both in bytes and in chars.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    byte: Range<usize>,
    char: Range<usize>,
}

impl Span {
    pub fn new(byte: Range<usize>, char: Range<usize>) -> Self {
        Span { byte, char }
    }

    /// The span of `sub` where `sub` starts `start` into some text.
    pub(crate) fn from_start(start: Position, sub: &str) -> Self {
        let end = start + Position::after(sub);
        Span::new(start.byte..end.byte, start.char..end.char)
    }

    pub fn byte(&self) -> &Range<usize> {
        &self.byte
    }

    pub fn char(&self) -> &Range<usize> {
        &self.char
    }

    pub fn start(&self) -> Position {
        Position {
            byte: self.byte.start,
            char: self.char.start,
        }
    }

    pub fn end(&self) -> Position {
        Position {
            byte: self.byte.end,
            char: self.char.end,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.byte.is_empty()
    }

    /// Shifts the span right by `position`. Used to turn token-relative offsets into text-relative ones.
    pub fn rshift(mut self, position: Position) -> Self {
        self.byte = self.byte.start + position.byte..self.byte.end + position.byte;
        self.char = self.char.start + position.char..self.char.end + position.char;
        self
    }
}

/// A token in a text. Only carries the text and where it is, all analysis lives in the components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'t> {
    text: &'t str,
    span: Span,
}

impl<'t> Token<'t> {
    pub fn new(text: &'t str, span: Span) -> Self {
        Token { text, span }
    }

    pub fn as_str(&self) -> &'t str {
        self.text
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl<'t> AsRef<str> for Token<'t> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

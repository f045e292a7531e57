// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use std::{collections::HashMap, iter::Peekable, str::Chars};

pub type ExtendedXyzProperties = HashMap<String, String>;

/// Splits an extended-XYZ comment line into `key=value` pairs.
///
/// Values may be bare, or quoted with `"` or `'` to contain spaces. A key
/// without a value is a flag and reads as `"T"`, the way ASE writes them.
pub struct ExtendedXyzParser<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> ExtendedXyzParser<'a> {
    pub fn new(line: &'a str) -> Self {
        ExtendedXyzParser {
            chars: line.trim().chars().peekable(),
        }
    }

    pub fn parse(mut self) -> ExtendedXyzProperties {
        let mut props = HashMap::new();

        loop {
            self.skip_whitespace();
            let key = self.next_substring();
            if key.is_empty() {
                break;
            }

            self.skip_whitespace();
            let value = if self.chars.peek() == Some(&'=') {
                self.chars.next();
                self.skip_whitespace();
                self.next_substring()
            } else {
                "T".to_string()
            };
            props.insert(key, value);
        }
        props
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
    }

    /// Grabs either a quoted substring (allowing spaces) or an unquoted
    /// one (stopping at `=` or whitespace). Doesn't include the quotes.
    fn next_substring(&mut self) -> String {
        match self.chars.peek().copied() {
            Some(quote @ ('"' | '\'')) => {
                self.chars.next();
                let mut value = String::new();
                for c in self.chars.by_ref() {
                    if c == quote {
                        break;
                    }
                    value.push(c);
                }
                value
            }
            _ => {
                let mut value = String::new();
                while let Some(c) = self.chars.next_if(|c| !c.is_whitespace() && *c != '=') {
                    value.push(c);
                }
                value
            }
        }
    }
}

//! Rule compilation: direction handling, rule records and the ordered table.
//!
//! A `RuleTable` is built once from an ordered token→token mapping and then
//! used read-only across many lines. Reversal produces a new table rather
//! than mutating the old one, so a table shared with in-flight translations
//! is never pulled out from under them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Which side of a token↔token mapping is treated as match input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Read the mapping key → value.
    Forward,
    /// Read the mapping value → key.
    Reverse,
}

impl Direction {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Reverse => write!(f, "reverse"),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    /// Parse a direction from user input.
    ///
    /// Accepts `forward`/`reverse` (case-insensitive) and the numerals
    /// `1`/`2` found in older rule tooling.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" | "1" => Ok(Direction::Forward),
            "reverse" | "2" => Ok(Direction::Reverse),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

/// A single substitution rule: one input pattern and its replacement.
///
/// Patterns are stored as `Vec<char>` because the engine matches and splices
/// by character position, not byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    input: Vec<char>,
    output: Vec<char>,
}

impl Rule {
    fn new(input: &str, output: &str) -> Self {
        Self {
            input: input.chars().collect(),
            output: output.chars().collect(),
        }
    }

    /// The pattern matched against the buffer.
    pub fn input(&self) -> &[char] {
        &self.input
    }

    /// The pattern written in place of a match.
    pub fn output(&self) -> &[char] {
        &self.output
    }

    /// Length of the input pattern in characters.
    pub fn input_len(&self) -> usize {
        self.input.len()
    }

    fn swapped(&self) -> Rule {
        Rule {
            input: self.output.clone(),
            output: self.input.clone(),
        }
    }

    fn input_string(&self) -> String {
        self.input.iter().collect()
    }

    fn output_string(&self) -> String {
        self.output.iter().collect()
    }
}

/// Ordered rule collection with a longest-first application index.
#[derive(Debug, Clone)]
pub struct RuleTable {
    /// Rules in the source mapping's insertion order.
    rules: Vec<Rule>,
    /// Permutation of rule indices sorted by descending input length.
    /// Equal lengths keep insertion order, which decides the winner when two
    /// same-length patterns overlap at one position.
    order: Vec<usize>,
    direction: Direction,
}

impl RuleTable {
    /// Compile an ordered token→token mapping for the given direction.
    ///
    /// `Forward` reads each pair as key → value, `Reverse` as value → key.
    pub fn build(pairs: &[(String, String)], direction: Direction) -> Self {
        let rules = pairs
            .iter()
            .map(|(key, value)| match direction {
                Direction::Forward => Rule::new(key, value),
                Direction::Reverse => Rule::new(value, key),
            })
            .collect();
        Self::with_rules(rules, direction)
    }

    fn with_rules(rules: Vec<Rule>, direction: Direction) -> Self {
        let mut order: Vec<usize> = (0..rules.len()).collect();
        // Vec::sort_by is stable, so ties preserve insertion order.
        order.sort_by(|&a, &b| rules[b].input_len().cmp(&rules[a].input_len()));
        Self {
            rules,
            order,
            direction,
        }
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the table holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The direction this table translates in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Rules in insertion order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules in application order: longest input pattern first, insertion
    /// order on ties.
    pub fn ordered(&self) -> impl Iterator<Item = &Rule> + '_ {
        self.order.iter().map(move |&idx| &self.rules[idx])
    }

    /// A new table translating in the opposite direction.
    ///
    /// Every rule's input and output swap, and the application order is
    /// recomputed from the new input lengths.
    pub fn reversed(&self) -> RuleTable {
        let rules = self.rules.iter().map(Rule::swapped).collect();
        RuleTable::with_rules(rules, self.direction.flipped())
    }

    /// Serialize the table as `#=BIT` text: the header line followed by one
    /// `input output` line per rule in insertion order.
    ///
    /// This is a round-trippable subset of the load format; comments and
    /// rule separators are not re-emitted.
    pub fn to_table_format(&self) -> String {
        let mut out = String::from("#=BIT\n");
        for rule in &self.rules {
            out.push_str(&rule.input_string());
            out.push(' ');
            out.push_str(&rule.output_string());
            out.push('\n');
        }
        out
    }
}

//! End-to-end translation: line splitting, the per-line pipeline, direction
//! reversal and a translated-line cache.

use std::cell::RefCell;
use std::fmt;
use std::num::NonZeroUsize;
use std::path::Path;

use lru::LruCache;
use tracing::debug;

use crate::emit::emit_line;
use crate::engine;
use crate::error::Error;
use crate::line::NOT_SEPARATOR;
use crate::prepare::prepare_line;
use crate::rules::{Direction, RuleTable};
use crate::table_file;
use crate::Config;

/// Bidirectional translator over a compiled rule table.
///
/// Holds the table, the separator placeholder and a small cache of
/// translated lines. Lines are independent, so the cache is keyed on the
/// raw line alone; it is dropped whenever the direction flips.
#[derive(Debug)]
pub struct Translator {
    table: RuleTable,
    placeholder: char,
    strict: bool,
    cache: RefCell<LruCache<String, String>>,
}

impl Translator {
    /// Build a translator from an in-memory ordered mapping.
    pub fn new(pairs: &[(String, String)], direction: Direction) -> Self {
        Self::with_config(
            pairs,
            &Config {
                direction,
                ..Config::default()
            },
        )
    }

    /// Build a translator from an ordered mapping and a full configuration.
    pub fn with_config(pairs: &[(String, String)], config: &Config) -> Self {
        let capacity = NonZeroUsize::new(config.max_cache_size)
            .unwrap_or_else(|| NonZeroUsize::new(1000).expect("nonzero"));
        Self {
            table: RuleTable::build(pairs, config.direction),
            placeholder: config.separator_placeholder,
            strict: config.strict,
            cache: RefCell::new(LruCache::new(capacity)),
        }
    }

    /// Build a translator from a `#=BIT` rules file.
    pub fn from_file(path: &Path, direction: Direction) -> Result<Self, Error> {
        let pairs = table_file::load_rules(path)?;
        Ok(Self::new(&pairs, direction))
    }

    /// The direction currently translated in.
    pub fn direction(&self) -> Direction {
        self.table.direction()
    }

    /// The compiled rule table.
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Translate `text` line by line.
    ///
    /// Empty and all-whitespace lines pass through as empty output lines
    /// without entering the pipeline; everything else runs prepare →
    /// substitute → emit. Output lines are rejoined with `\n`.
    pub fn translate(&self, text: &str) -> String {
        let translated: Vec<String> = text
            .lines()
            .map(|line| {
                if line.trim().is_empty() {
                    String::new()
                } else {
                    self.translate_line(line)
                }
            })
            .collect();
        translated.join("\n")
    }

    fn translate_line(&self, line: &str) -> String {
        if let Some(hit) = self.cache.borrow_mut().get(line) {
            return hit.clone();
        }

        let mut buf = prepare_line(line, self.placeholder);
        engine::apply(&mut buf, &self.table);
        let out = emit_line(&buf);

        if self.strict {
            // Free, non-separator positions are input characters no rule
            // consumed. Reported only; output is never affected.
            let untranslated = (1..buf.len().saturating_sub(1))
                .filter(|&pos| buf.is_free(pos) && buf.original(pos) == NOT_SEPARATOR)
                .count();
            if untranslated > 0 {
                debug!(untranslated, line, "characters passed through unmatched");
            }
        }

        self.cache.borrow_mut().put(line.to_string(), out.clone());
        out
    }

    /// Flip the translation direction.
    ///
    /// The table is replaced by its reversed counterpart rather than mutated
    /// in place, and the line cache is dropped because every cached result
    /// was produced under the old direction.
    pub fn reverse_direction(&mut self) {
        self.table = self.table.reversed();
        self.cache.borrow_mut().clear();
    }

    /// Export the compiled table to `path` in `#=BIT` format.
    pub fn save_table(&self, path: &Path) -> Result<(), Error> {
        table_file::write_table(&self.table, path)
    }
}

impl fmt::Display for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Translator(rules={}, direction={})",
            self.table.len(),
            self.direction()
        )
    }
}

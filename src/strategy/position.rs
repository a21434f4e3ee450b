//! Letter-position frequency scoring.

use crate::word::Word;
use crate::WORD_LENGTH;

/// Share of candidates having each letter at each position.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionFrequencies {
    table: [[f64; 26]; WORD_LENGTH],
}

impl PositionFrequencies {
    pub fn from_candidates(candidates: &[Word]) -> Self {
        let mut table = [[0.0; 26]; WORD_LENGTH];
        if candidates.is_empty() {
            return Self { table };
        }
        for word in candidates {
            for (position, row) in table.iter_mut().enumerate() {
                row[word.letter_index(position)] += 1.0;
            }
        }
        let n = candidates.len() as f64;
        for cell in table.iter_mut().flatten() {
            *cell /= n;
        }
        Self { table }
    }

    /// Frequency of `letter` (lowercase ASCII) at `position`.
    pub fn get(&self, letter: u8, position: usize) -> f64 {
        self.table[position][(letter - b'a') as usize]
    }

    /// Rows of the table, one per position, indexed by letter.
    pub fn rows(&self) -> &[[f64; 26]; WORD_LENGTH] {
        &self.table
    }

    /// Sum of per-position frequencies. Repeat occurrences of a letter are
    /// multiplied by `duplicate_penalty`.
    pub fn score(&self, word: &Word, duplicate_penalty: f64) -> f64 {
        let mut seen = [false; 26];
        let mut total = 0.0;
        for position in 0..WORD_LENGTH {
            let letter = word.letter_index(position);
            let frequency = self.table[position][letter];
            total += if seen[letter] { frequency * duplicate_penalty } else { frequency };
            seen[letter] = true;
        }
        total
    }
}

// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::time::Duration;

/// Statistics collected while running a berthing batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStatistics {
    /// Pairings produced by the enumeration.
    pub pairings_evaluated: u64,
    /// Scenario results emitted.
    pub results_emitted: u64,
    /// Pairings excluded by the applicability rule.
    pub pairings_skipped: u64,
    /// Total time spent in the batch.
    pub time_total: Duration,
}

impl BatchStatistics {
    #[inline]
    pub fn on_pairing(&mut self) {
        self.pairings_evaluated = self.pairings_evaluated.saturating_add(1);
    }

    #[inline]
    pub fn on_result(&mut self) {
        self.results_emitted = self.results_emitted.saturating_add(1);
    }

    #[inline]
    pub fn on_skipped(&mut self) {
        self.pairings_skipped = self.pairings_skipped.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for BatchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Berthing Batch Statistics:")?;
        writeln!(f, "  Pairings evaluated:   {}", self.pairings_evaluated)?;
        writeln!(f, "  Results emitted:      {}", self.results_emitted)?;
        writeln!(f, "  Pairings skipped:     {}", self.pairings_skipped)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = BatchStatistics::default();
        stats.on_pairing();
        stats.on_pairing();
        stats.on_result();
        stats.on_skipped();
        stats.set_total_time(Duration::from_millis(3));

        assert_eq!(stats.pairings_evaluated, 2);
        assert_eq!(stats.results_emitted, 1);
        assert_eq!(stats.pairings_skipped, 1);
        assert_eq!(stats.time_total, Duration::from_millis(3));
    }

    #[test]
    fn test_display_lists_counters() {
        let stats = BatchStatistics {
            pairings_evaluated: 4,
            results_emitted: 3,
            pairings_skipped: 1,
            time_total: Duration::ZERO,
        };
        let text = stats.to_string();
        assert!(text.contains("Pairings evaluated:   4"));
        assert!(text.contains("Results emitted:      3"));
        assert!(text.contains("Pairings skipped:     1"));
    }
}

use std::thread;
use std::time::Duration;

use rand::{thread_rng, Rng};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::urbandict::{self, Entry, Transport};

/// Minimum thumbs up a random word needs before it is worth showing.
pub const THUMBS_UP_THRESHOLD: u64 = 30_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 25,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    pub fn immediate(max_attempts: u32) -> Self {
        RetryPolicy {
            max_attempts,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    /// Delay before the given attempt (0-based). The first attempt goes out at once.
    pub fn delay_before(&self, attempt: u32) -> Duration {
        if attempt == 0 || self.base_delay.is_zero() {
            return Duration::ZERO;
        }
        let factor = 1u32.checked_shl(attempt - 1).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

// last match wins
pub fn select_above_threshold(entries: &[Entry], threshold: u64) -> Option<&Entry> {
    entries.iter().rev().find(|e| e.thumbs_up > threshold)
}

/// Most voted entry that actually carries a definition; ties keep the first one seen.
pub fn select_most_voted<'a>(entries: &'a [Entry], term: &str) -> Result<&'a Entry> {
    let mut best: Option<&Entry> = None;
    for entry in entries.iter().filter(|e| !e.definition_text.is_empty()) {
        match best {
            Some(b) if entry.thumbs_up <= b.thumbs_up => {}
            _ => best = Some(entry),
        }
    }
    best.ok_or_else(|| Error::NotFound {
        term: term.to_string(),
    })
}

/// Keep pulling random words until one clears `threshold`, giving up after
/// `policy.max_attempts`. Fetch and decode failures end the loop right away.
pub fn random_word(transport: &dyn Transport, threshold: u64, policy: RetryPolicy) -> Result<Entry> {
    for attempt in 0..policy.max_attempts {
        let delay = policy.delay_before(attempt);
        if !delay.is_zero() {
            let jitter = thread_rng().gen_range(Duration::ZERO..=delay / 2);
            thread::sleep(delay + jitter);
        }
        let entries = urbandict::fetch_random(transport)?;
        if let Some(entry) = select_above_threshold(&entries.list, threshold) {
            debug!(attempt, word = %entry.word, thumbs_up = entry.thumbs_up, "picked random word");
            return Ok(entry.clone());
        }
        debug!(attempt, candidates = entries.list.len(), "no random word above threshold");
    }
    warn!(attempts = policy.max_attempts, threshold, "gave up looking for a random word");
    Err(Error::NoQualifyingEntry {
        threshold,
        attempts: policy.max_attempts,
    })
}

//! Quote selection.
//!
//! # Responsibility
//! - Supply one quote per capsule, drawn uniformly from the fixed pool.
//! - Model the selection as taking observable time, like the external AI
//!   call it stands in for.
//!
//! # Invariants
//! - Every selected quote is one of the seven pool strings.
//! - The delay elapses before the draw; there is no cancellation path.

use log::info;
use rand::Rng;
use std::time::Duration;

/// Fixed pool the selector draws from.
pub const QUOTE_POOL: [&str; 7] = [
    "The future belongs to those who believe in the beauty of their dreams. Remember that your present thoughts are shaping tomorrow's reality.",
    "You are braver than you believe, stronger than you seem, and more loved than you know. Trust in your journey.",
    "Every moment is a fresh beginning. The seeds you plant today will bloom in ways you cannot yet imagine.",
    "Your story is still being written. Each chapter brings new wisdom, new strength, and new possibilities.",
    "Time has a way of revealing the hidden gifts in our struggles. What challenges you today will strengthen you tomorrow.",
    "The path you're walking now is preparing you for destinations you haven't even dreamed of yet.",
    "Your future self is cheering you on. Keep going, keep growing, keep believing in the magic of your potential.",
];

/// Delay simulating the external call the selector stands in for.
pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_secs(2);

/// Draws quotes from the fixed pool after a configurable delay.
pub struct QuoteSelector {
    delay: Duration,
}

impl Default for QuoteSelector {
    fn default() -> Self {
        Self {
            delay: DEFAULT_GENERATION_DELAY,
        }
    }
}

impl QuoteSelector {
    /// Creates a selector with a custom delay. Tests use `Duration::ZERO`.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Sleeps the configured delay, then draws one quote uniformly at random.
    pub async fn select(&self) -> &'static str {
        tokio::time::sleep(self.delay).await;
        let index = rand::thread_rng().gen_range(0..QUOTE_POOL.len());
        info!(
            "event=quote_select module=quote status=ok index={index} delay_ms={}",
            self.delay.as_millis()
        );
        QUOTE_POOL[index]
    }
}

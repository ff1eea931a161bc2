//! Animated stat counters ("150+", "98%").
//!
//! The counter climbs from zero to the number in the stat's final text, one
//! increment per animation frame, then restores the original text.

use crate::config::CounterConfig;

/// One animation frame's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterFrame {
    /// Intermediate value; request another frame
    Running(String),
    /// Final text; stop animating
    Finished(String),
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    final_text: String,
    target: f64,
    suffix: char,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(final_text: &str, config: &CounterConfig) -> Self {
        let digits: String = final_text.chars().filter(|c| c.is_ascii_digit()).collect();
        // Non-numeric text finishes on the first frame
        let target = digits.parse::<u64>().map(|n| n as f64).unwrap_or(0.0);
        let frames = (config.duration_ms / config.frame_ms).max(1.0);

        Self {
            final_text: final_text.to_string(),
            target,
            suffix: if final_text.contains('%') { '%' } else { '+' },
            increment: target / frames,
            current: 0.0,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Advance one frame.
    pub fn tick(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current < self.target {
            CounterFrame::Running(format!("{}{}", self.current.floor() as u64, self.suffix))
        } else {
            CounterFrame::Finished(self.final_text.clone())
        }
    }
}

//! Multiplexed seven-segment display driver.
//!
//! One digit is lit at a time; [`SevenSegment::refresh`] advances the scan by
//! one slot and must be called on every pass of the main loop. Each digit
//! owns `SLOTS_PER_DIGIT` consecutive slots and stays lit for the first
//! `brightness / 10` of them (rounded up), which gives a coarse duty-cycle
//! brightness control.
//!
//! ## Rendering
//!
//! | Value              | Shown                                    |
//! |--------------------|------------------------------------------|
//! | integer            | right-aligned, leading zeros blanked     |
//! | real               | truncated toward zero, then as integer   |
//! | doesn't fit        | all dashes                               |
//! | sensor fault       | `Er`                                     |
//!
//! Segment bit order is `a b c d e f g` = bit 0..6; the decimal point is
//! not driven.

use core::fmt::Write;

use embedded_hal::digital::{OutputPin, PinState};
use heapless::String;

use crate::app::ports::DisplayValue;

const SLOTS_PER_DIGIT: usize = 10;

const GLYPH_DIGITS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];
const GLYPH_BLANK: u8 = 0x00;
const GLYPH_DASH: u8 = 0x40;
const GLYPH_E: u8 = 0x79;
const GLYPH_R: u8 = 0x50;

/// How the digit and segment lines are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Segments active HIGH, digit commons sink current (active LOW).
    CommonCathode,
    /// Segments active LOW, digit commons source current (active HIGH).
    CommonAnode,
}

impl Polarity {
    fn segment_level(self, lit: bool) -> PinState {
        match self {
            Self::CommonCathode => PinState::from(lit),
            Self::CommonAnode => PinState::from(!lit),
        }
    }

    fn digit_level(self, selected: bool) -> PinState {
        match self {
            Self::CommonCathode => PinState::from(!selected),
            Self::CommonAnode => PinState::from(selected),
        }
    }
}

/// Render `value` as `N` right-aligned characters.
pub fn render_text<const N: usize>(value: DisplayValue) -> String<N> {
    let mut text = String::new();
    let written = match value {
        DisplayValue::Target(c) => write!(text, "{:>width$}", c, width = N),
        DisplayValue::Temperature(c) => write!(text, "{:>width$}", c.trunc() as i32, width = N),
        DisplayValue::Fault => write!(text, "{:>width$}", "Er", width = N),
    };
    if written.is_err() {
        text.clear();
        for _ in 0..N {
            let _ = text.push('-');
        }
    }
    text
}

fn glyph(ch: char) -> u8 {
    match ch {
        '0'..='9' => GLYPH_DIGITS[(ch as u8 - b'0') as usize],
        '-' => GLYPH_DASH,
        'E' => GLYPH_E,
        'r' => GLYPH_R,
        _ => GLYPH_BLANK,
    }
}

pub struct SevenSegment<P, const DIGITS: usize> {
    digits: [P; DIGITS],
    segments: [P; 7],
    polarity: Polarity,
    lit_slots: usize,
    glyphs: [u8; DIGITS],
    slot: usize,
}

impl<P: OutputPin, const DIGITS: usize> SevenSegment<P, DIGITS> {
    /// Take the digit lines (most significant first) and the `a..g`
    /// segment lines, and blank the display.
    pub fn new(
        digits: [P; DIGITS],
        segments: [P; 7],
        polarity: Polarity,
        brightness: u8,
    ) -> Result<Self, P::Error> {
        let mut display = Self {
            digits,
            segments,
            polarity,
            lit_slots: 0,
            glyphs: [GLYPH_BLANK; DIGITS],
            slot: 0,
        };
        display.set_brightness(brightness);
        display.blank()?;
        Ok(display)
    }

    /// 0–100 %. Values above 100 are treated as 100.
    pub fn set_brightness(&mut self, brightness: u8) {
        let percent = usize::from(brightness.min(100));
        self.lit_slots = (percent * SLOTS_PER_DIGIT).div_ceil(100);
    }

    /// Latch a new value; the scan picks it up on the next digit change.
    pub fn set_number(&mut self, value: DisplayValue) {
        let text = render_text::<DIGITS>(value);
        for (slot, ch) in self.glyphs.iter_mut().zip(text.chars()) {
            *slot = glyph(ch);
        }
    }

    /// Segment patterns currently latched, most significant digit first.
    pub fn glyphs(&self) -> [u8; DIGITS] {
        self.glyphs
    }

    /// Advance the scan by one slot.
    pub fn refresh(&mut self) -> Result<(), P::Error> {
        if DIGITS == 0 {
            return Ok(());
        }
        let digit = self.slot / SLOTS_PER_DIGIT;
        let step = self.slot % SLOTS_PER_DIGIT;

        if step == 0 {
            self.blank()?;
            self.drive_segments(self.glyphs[digit])?;
            if self.lit_slots > 0 {
                self.select_digit(digit, true)?;
            }
        } else if step == self.lit_slots {
            self.select_digit(digit, false)?;
        }

        self.slot = (self.slot + 1) % (DIGITS * SLOTS_PER_DIGIT);
        Ok(())
    }

    /// Deselect every digit.
    pub fn blank(&mut self) -> Result<(), P::Error> {
        for index in 0..DIGITS {
            self.select_digit(index, false)?;
        }
        Ok(())
    }

    fn drive_segments(&mut self, pattern: u8) -> Result<(), P::Error> {
        let polarity = self.polarity;
        for (bit, pin) in self.segments.iter_mut().enumerate() {
            pin.set_state(polarity.segment_level(pattern & (1 << bit) != 0))?;
        }
        Ok(())
    }

    fn select_digit(&mut self, index: usize, selected: bool) -> Result<(), P::Error> {
        let level = self.polarity.digit_level(selected);
        self.digits[index].set_state(level)
    }
}

//! Input-driven selection of the current benchmark case.

/// Discrete input events consumed by the harness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Move to the next catalog slot.
    Advance,
    /// Move to the previous catalog slot.
    Retreat,
    /// End the run.
    Quit,
}

/// Current-index plus needs-redraw state machine.
///
/// The index ranges over `[0, catalog_size]` inclusive; the slot at
/// `catalog_size` is the "unknown test" fallback (placeholder display, no
/// draws, no throughput line). Every transition marks a redraw pending; the
/// render loop clears the mark only after a full case execution (or
/// placeholder render) completes. There is no terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestCycler {
    catalog_size: usize,
    index: usize,
    needs_redraw: bool,
}

impl TestCycler {
    /// Start at slot 0 with a redraw pending.
    pub fn new(catalog_size: usize) -> Self {
        Self {
            catalog_size,
            index: 0,
            needs_redraw: true,
        }
    }

    /// The selected catalog slot.
    pub fn current(&self) -> usize {
        self.index
    }

    /// Whether the selected slot is the fallback slot.
    pub fn is_fallback(&self) -> bool {
        self.index == self.catalog_size
    }

    /// Whether a redraw is pending.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Clear the pending redraw after a completed case execution.
    pub fn redraw_done(&mut self) {
        self.needs_redraw = false;
    }

    /// Select the next slot, wrapping through the fallback slot to 0.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % (self.catalog_size + 1);
        self.needs_redraw = true;
    }

    /// Select the previous slot; retreat from 0 lands on the fallback slot.
    pub fn retreat(&mut self) {
        self.index = match self.index {
            0 => self.catalog_size,
            i => i - 1,
        };
        self.needs_redraw = true;
    }

    /// Apply a navigation event. `Quit` is not a cycler concern and is
    /// ignored here.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Advance => self.advance(),
            InputEvent::Retreat => self.retreat(),
            InputEvent::Quit => {}
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/cycler.rs"]
mod tests;

//! Selection of the first cell of a swap

use crate::error::CommandError;
use crate::event::Event;
use crate::grid::Grid;

/// Selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected(usize),
}

/// What a pick asks of the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Selection changed (or not), nothing else to do
    Handled,
    /// Two neighbours were picked in turn: swap them
    Swap(usize, usize),
}

/// Tracks at most one selected cell
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Selection {
        self.state
    }

    pub fn selected(&self) -> Option<usize> {
        match self.state {
            Selection::Selected(index) => Some(index),
            Selection::Idle => None,
        }
    }

    /// Handle a pick. `None` is a pick outside the board.
    pub fn pick(
        &mut self,
        grid: &Grid,
        pick: Option<usize>,
        events: &mut Vec<Event>,
    ) -> Result<PickOutcome, CommandError> {
        if let Some(index) = pick {
            if !grid.contains(index) {
                return Err(CommandError::OutOfRange {
                    index,
                    len: grid.len(),
                });
            }
        }

        match (self.state, pick) {
            (Selection::Idle, None) => {}
            (Selection::Idle, Some(index)) => {
                self.state = Selection::Selected(index);
                events.push(Event::Selected(index));
            }
            (Selection::Selected(current), None) => {
                self.state = Selection::Idle;
                events.push(Event::Deselected(current));
            }
            (Selection::Selected(current), Some(index)) if index == current => {
                self.state = Selection::Idle;
                events.push(Event::Deselected(current));
            }
            (Selection::Selected(current), Some(index)) if !grid.are_adjacent(current, index) => {
                self.state = Selection::Selected(index);
                events.push(Event::Deselected(current));
                events.push(Event::Selected(index));
            }
            (Selection::Selected(current), Some(index)) => {
                self.state = Selection::Idle;
                events.push(Event::Deselected(current));
                return Ok(PickOutcome::Swap(current, index));
            }
        }
        Ok(PickOutcome::Handled)
    }

    /// Forget the selection without raising an event
    pub fn clear(&mut self) {
        self.state = Selection::Idle;
    }
}

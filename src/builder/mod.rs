// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Route builder: an in-memory route → days → blocks tree with one active
//! day that receives block edits.
//!
//! Day numbers are not stored. A day's number is its position + 1, so
//! removing a day renumbers the ones after it and numbers can never drift
//! from order. Every operation is synchronous; a missing index or id is a
//! no-op reported through the `bool` return.

pub mod dnd;
pub mod preview;

use uuid::Uuid;

use crate::forms::validation::FieldError;
use crate::models::route::{BlockType, RouteBlock, RouteDay};

pub use dnd::{DragEnd, KeyAction, KeyboardSensor, PointerOutcome, PointerSensor};
pub use preview::{ActivityPreview, DayPreview};

/// Minutes given to a freshly inserted block.
pub const DEFAULT_BLOCK_MINUTES: u32 = 5;
/// Title of the day a new route starts with.
pub const FIRST_DAY_TITLE: &str = "Introducción";

fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// A day while it is being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDraft {
    /// Client-side key for the day tabs
    pub id: String,
    pub title: String,
    pub learning_objective: String,
    pub blocks: Vec<RouteBlock>,
}

impl DayDraft {
    fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_id("day"),
            title: title.into(),
            learning_objective: String::new(),
            blocks: Vec::new(),
        }
    }

    pub fn total_minutes(&self) -> u64 {
        calculate_total_minutes(self)
    }

    pub fn block(&self, id: &str) -> Option<&RouteBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn block_ids(&self) -> Vec<String> {
        self.blocks.iter().map(|b| b.id.clone()).collect()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }
}

/// Sum of the block durations of a day. Summed as `u64` so any set of
/// `u32` durations fits.
pub fn calculate_total_minutes(day: &DayDraft) -> u64 {
    day.blocks.iter().map(|b| u64::from(b.duration)).sum()
}

/// One field of a block, for [`RouteBuilder::update_block`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockUpdate {
    Title(String),
    Duration(u32),
    Body(Option<String>),
    ActivityRef(Option<String>),
}

/// Route tree under edit.
#[derive(Debug, Clone)]
pub struct RouteBuilder {
    days: Vec<DayDraft>,
    active: usize,
    saved: Vec<DayDraft>,
}

impl Default for RouteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteBuilder {
    /// A new route: one empty day, active.
    pub fn new() -> Self {
        let days = vec![DayDraft::new(FIRST_DAY_TITLE)];
        Self {
            saved: days.clone(),
            days,
            active: 0,
        }
    }

    /// Load days read from the API, ordered by their stored `day_number`.
    ///
    /// Block ids repeated within a day are re-keyed so drag-and-drop stays
    /// unambiguous.
    pub fn from_days(mut days: Vec<RouteDay>) -> Self {
        if days.is_empty() {
            return Self::new();
        }
        days.sort_by_key(|d| d.day_number);

        let drafts: Vec<DayDraft> = days
            .into_iter()
            .map(|day| {
                let mut seen = std::collections::HashSet::new();
                let blocks = day
                    .blocks
                    .into_iter()
                    .map(|mut block| {
                        if block.id.is_empty() || !seen.insert(block.id.clone()) {
                            block.id = new_id("blk");
                            seen.insert(block.id.clone());
                        }
                        block
                    })
                    .collect();
                DayDraft {
                    id: new_id("day"),
                    title: day.title,
                    learning_objective: day.learning_objective,
                    blocks,
                }
            })
            .collect();

        Self {
            saved: drafts.clone(),
            days: drafts,
            active: 0,
        }
    }

    pub fn days(&self) -> &[DayDraft] {
        &self.days
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_day(&self) -> &DayDraft {
        &self.days[self.active]
    }

    fn active_day_mut(&mut self) -> &mut DayDraft {
        &mut self.days[self.active]
    }

    /// 1-based number of the day at `index`.
    pub fn day_number(&self, index: usize) -> Option<u32> {
        (index < self.days.len()).then(|| index as u32 + 1)
    }

    pub fn active_day_number(&self) -> u32 {
        self.active as u32 + 1
    }

    pub fn select_day(&mut self, index: usize) -> bool {
        if index >= self.days.len() {
            return false;
        }
        self.active = index;
        true
    }

    /// Append `"Día N"` and make it active. Returns its index.
    pub fn add_day(&mut self) -> usize {
        let number = self.days.len() + 1;
        self.days.push(DayDraft::new(format!("Día {number}")));
        self.active = self.days.len() - 1;
        tracing::debug!(day = number, "Added day");
        self.active
    }

    /// The delete control is only offered while this holds.
    pub fn can_remove_day(&self) -> bool {
        self.days.len() > 1
    }

    /// Remove the day at `index`. Refused for the last remaining day.
    pub fn remove_day(&mut self, index: usize) -> bool {
        if !self.can_remove_day() || index >= self.days.len() {
            return false;
        }
        self.days.remove(index);
        if index <= self.active {
            self.active = self.active.saturating_sub(1);
        }
        self.active = self.active.min(self.days.len() - 1);
        tracing::debug!(removed = index + 1, remaining = self.days.len(), "Removed day");
        true
    }

    pub fn rename_active_day(&mut self, title: impl Into<String>) {
        self.active_day_mut().title = title.into();
    }

    pub fn set_active_learning_objective(&mut self, objective: impl Into<String>) {
        self.active_day_mut().learning_objective = objective.into();
    }

    /// Append a block of `block_type` to the active day. Returns its id.
    pub fn add_block(&mut self, block_type: BlockType) -> String {
        let block = RouteBlock {
            id: new_id("blk"),
            block_type,
            title: block_type.default_title().to_string(),
            duration: DEFAULT_BLOCK_MINUTES,
            body: None,
            activity_ref_id: None,
            disclaimer_id: None,
        };
        let id = block.id.clone();
        self.active_day_mut().blocks.push(block);
        id
    }

    /// Replace one field of a block in the active day.
    pub fn update_block(&mut self, block_id: &str, update: BlockUpdate) -> bool {
        let Some(block) = self
            .active_day_mut()
            .blocks
            .iter_mut()
            .find(|b| b.id == block_id)
        else {
            return false;
        };
        match update {
            BlockUpdate::Title(title) => block.title = title,
            BlockUpdate::Duration(minutes) => block.duration = minutes,
            BlockUpdate::Body(body) => block.body = body,
            BlockUpdate::ActivityRef(id) => block.activity_ref_id = id,
        }
        true
    }

    pub fn remove_block(&mut self, block_id: &str) -> bool {
        let blocks = &mut self.active_day_mut().blocks;
        let before = blocks.len();
        blocks.retain(|b| b.id != block_id);
        blocks.len() != before
    }

    /// Move the dragged block to the drop target's position in the active
    /// day, shifting the blocks in between by one.
    pub fn reorder_blocks(&mut self, active_id: &str, over_id: &str) -> bool {
        if active_id == over_id {
            return false;
        }
        let day = self.active_day_mut();
        let (Some(from), Some(to)) = (day.position(active_id), day.position(over_id)) else {
            return false;
        };
        let block = day.blocks.remove(from);
        day.blocks.insert(to, block);
        true
    }

    /// Apply the end of a pointer or keyboard drag.
    pub fn apply_drag(&mut self, end: &DragEnd) -> bool {
        match &end.over_id {
            Some(over) => self.reorder_blocks(&end.active_id, over),
            None => false,
        }
    }

    /// Days as sent to the API, numbered by position.
    pub fn to_days(&self) -> Vec<RouteDay> {
        self.days
            .iter()
            .enumerate()
            .map(|(i, day)| RouteDay {
                day_number: i as u32 + 1,
                title: day.title.clone(),
                learning_objective: day.learning_objective.clone(),
                blocks: day.blocks.clone(),
            })
            .collect()
    }

    /// Make the day named by a `days[i]...` validation error active.
    pub fn focus_error(&mut self, error: &FieldError) -> bool {
        match error.index_of("days") {
            Some(index) => self.select_day(index),
            None => false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.days != self.saved
    }

    pub fn mark_saved(&mut self) {
        self.saved = self.days.clone();
    }
}

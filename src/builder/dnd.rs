// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Drag sensors for block reordering.
//!
//! Both sensors end in the same [`DragEnd`], which the builder applies with
//! [`RouteBuilder::apply_drag`](super::RouteBuilder::apply_drag).

/// Pointer travel, in pixels, before a press turns into a drag.
pub const ACTIVATION_DISTANCE: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A finished drag: the dragged block and the block it was dropped on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub active_id: String,
    pub over_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Released before the activation distance; the press stays a click.
    Click(String),
    Drop(DragEnd),
    /// Release with no press in progress.
    Idle,
}

#[derive(Debug, Clone)]
struct Press {
    block_id: String,
    origin: Point,
    dragging: bool,
    over_id: Option<String>,
}

/// Pointer sensor with a distance activation constraint.
#[derive(Debug, Clone)]
pub struct PointerSensor {
    distance: f64,
    press: Option<Press>,
}

impl Default for PointerSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerSensor {
    pub fn new() -> Self {
        Self::with_distance(ACTIVATION_DISTANCE)
    }

    pub fn with_distance(distance: f64) -> Self {
        Self {
            distance,
            press: None,
        }
    }

    pub fn press(&mut self, block_id: impl Into<String>, at: Point) {
        self.press = Some(Press {
            block_id: block_id.into(),
            origin: at,
            dragging: false,
            over_id: None,
        });
    }

    /// Track the pointer. `over` is the block under it, if any. Returns
    /// whether a drag is active.
    pub fn move_to(&mut self, at: Point, over: Option<&str>) -> bool {
        let Some(press) = self.press.as_mut() else {
            return false;
        };
        if !press.dragging && press.origin.distance(&at) >= self.distance {
            press.dragging = true;
            tracing::trace!(block = %press.block_id, "Drag activated");
        }
        if press.dragging {
            press.over_id = over.map(str::to_string);
        }
        press.dragging
    }

    pub fn is_dragging(&self) -> bool {
        self.press.as_ref().is_some_and(|p| p.dragging)
    }

    pub fn release(&mut self) -> PointerOutcome {
        match self.press.take() {
            None => PointerOutcome::Idle,
            Some(press) if !press.dragging => PointerOutcome::Click(press.block_id),
            Some(press) => PointerOutcome::Drop(DragEnd {
                active_id: press.block_id,
                over_id: press.over_id,
            }),
        }
    }
}

/// Keys the keyboard sensor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Space or Enter: pick up the focused block, or drop the held one.
    Activate,
    Up,
    Down,
    Cancel,
}

impl KeyAction {
    /// Map a DOM-style key name.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Space" | "Enter" => Some(KeyAction::Activate),
            "ArrowUp" => Some(KeyAction::Up),
            "ArrowDown" => Some(KeyAction::Down),
            "Escape" => Some(KeyAction::Cancel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
struct Held {
    block_id: String,
    target: usize,
}

/// Keyboard reordering: pick up, move the drop target, drop or cancel.
#[derive(Debug, Clone, Default)]
pub struct KeyboardSensor {
    held: Option<Held>,
}

impl KeyboardSensor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.held.is_some()
    }

    /// Current drop target while a block is held.
    pub fn target<'a>(&self, order: &'a [String]) -> Option<&'a str> {
        self.held
            .as_ref()
            .and_then(|h| order.get(h.target))
            .map(String::as_str)
    }

    /// Handle a key against the active day's block order. `focused` is the
    /// block holding keyboard focus. Returns a drag end on drop.
    pub fn handle(&mut self, key: KeyAction, focused: &str, order: &[String]) -> Option<DragEnd> {
        match (key, self.held.as_mut()) {
            (KeyAction::Activate, None) => {
                let target = order.iter().position(|id| id == focused)?;
                self.held = Some(Held {
                    block_id: focused.to_string(),
                    target,
                });
                None
            }
            (KeyAction::Activate, Some(_)) => {
                let held = self.held.take()?;
                Some(DragEnd {
                    over_id: order.get(held.target).cloned(),
                    active_id: held.block_id,
                })
            }
            (KeyAction::Up, Some(held)) => {
                held.target = held.target.saturating_sub(1);
                None
            }
            (KeyAction::Down, Some(held)) => {
                if held.target + 1 < order.len() {
                    held.target += 1;
                }
                None
            }
            (KeyAction::Cancel, Some(_)) => {
                self.held = None;
                None
            }
            _ => None,
        }
    }
}

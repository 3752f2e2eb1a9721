// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Read-only phone previews of the builder and the activity editor.
//!
//! Projections borrow their source and never mutate it.

use std::fmt;

use crate::builder::{DayDraft, RouteBuilder};
use crate::forms::activity::ActivityForm;
use crate::models::route::BlockType;

pub const EMPTY_DAY_MESSAGE: &str =
    "La vista previa aparecerá aquí cuando agregues contenido.";
pub const UNTITLED_BLOCK: &str = "(Sin título)";
pub const ACTIVITY_TITLE_PLACEHOLDER: &str = "Título del Ejercicio";
pub const ACTIVITY_INTRO_PLACEHOLDER: &str =
    "Aquí aparecerá la introducción del ejercicio. Sé breve y empático.";
pub const APP_HEADER: &str = "DIGNEMI APP";
pub const START_LABEL: &str = "Comenzar";

/// Inner width of the text phone frame.
const SCREEN_WIDTH: usize = 34;

/// Timeline accent color for a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
    Orange,
}

impl Accent {
    fn for_block(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Activity => Accent::Purple,
            BlockType::Reflection => Accent::Orange,
            BlockType::Lesson | BlockType::Checklist => Accent::Blue,
        }
    }

    fn marker(&self) -> char {
        match self {
            Accent::Blue => '●',
            Accent::Purple => '◆',
            Accent::Orange => '▲',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineItem {
    pub kind_label: String,
    pub title: String,
    pub minutes_label: String,
    pub accent: Accent,
}

/// The active day as the mobile app would show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPreview {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<TimelineItem>,
}

impl DayPreview {
    pub fn from_builder(builder: &RouteBuilder) -> Self {
        Self::project(builder.active_day(), builder.active_day_number())
    }

    pub fn project(day: &DayDraft, day_number: u32) -> Self {
        let items = day
            .blocks
            .iter()
            .map(|block| TimelineItem {
                kind_label: match block.block_type {
                    BlockType::Activity => "Práctica".to_string(),
                    other => other.as_str().to_uppercase(),
                },
                title: if block.title.trim().is_empty() {
                    UNTITLED_BLOCK.to_string()
                } else {
                    block.title.clone()
                },
                minutes_label: format!("{} min", block.duration),
                accent: Accent::for_block(block.block_type),
            })
            .collect();

        Self {
            title: day.title.clone(),
            subtitle: format!("Día {} • {} min", day_number, day.total_minutes()),
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Interactive part of an activity preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    Timer { action: String, timing: String },
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityPreview {
    pub has_cover: bool,
    pub title: String,
    pub badges: Vec<String>,
    pub intro: String,
    pub widget: Widget,
}

impl ActivityPreview {
    pub fn project(form: &ActivityForm) -> Self {
        let widget = match form.kind.timer() {
            Some(timer) => Widget::Timer {
                action: "Inhala".to_string(),
                timing: timer.timing_label(),
            },
            None => Widget::Placeholder(format!(
                "[Componente interactivo: {}]",
                form.kind.type_name()
            )),
        };

        Self {
            has_cover: form.cover_image.as_deref().is_some_and(|c| !c.is_empty()),
            title: non_empty_or(&form.title, ACTIVITY_TITLE_PLACEHOLDER),
            badges: vec![
                form.difficulty.as_str().to_uppercase(),
                format!("{} min", form.duration_minutes),
            ],
            intro: non_empty_or(&form.intro_text, ACTIVITY_INTRO_PLACEHOLDER),
            widget,
        }
    }
}

fn non_empty_or(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Greedy word wrap to the screen width.
fn wrap(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = line.chars().count() + word.chars().count() + usize::from(!line.is_empty());
        if needed > SCREEN_WIDTH && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

struct Frame<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
}

impl<'a, 'b> Frame<'a, 'b> {
    fn top(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        writeln!(f, "╭{}╮", "─".repeat(SCREEN_WIDTH + 2))?;
        Ok(Self { f })
    }

    fn line(&mut self, text: &str) -> fmt::Result {
        for part in wrap(text) {
            let pad = SCREEN_WIDTH.saturating_sub(part.chars().count());
            writeln!(self.f, "│ {part}{} │", " ".repeat(pad))?;
        }
        Ok(())
    }

    fn centered(&mut self, text: &str) -> fmt::Result {
        let len = text.chars().count().min(SCREEN_WIDTH);
        let left = (SCREEN_WIDTH - len) / 2;
        self.line(&format!("{}{text}", " ".repeat(left)))
    }

    fn rule(&mut self) -> fmt::Result {
        writeln!(self.f, "├{}┤", "─".repeat(SCREEN_WIDTH + 2))
    }

    fn bottom(self) -> fmt::Result {
        writeln!(self.f, "╰{}╯", "─".repeat(SCREEN_WIDTH + 2))
    }
}

impl fmt::Display for DayPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut frame = Frame::top(f)?;
        frame.line(&self.title)?;
        frame.line(&self.subtitle)?;
        frame.rule()?;
        if self.items.is_empty() {
            frame.line(EMPTY_DAY_MESSAGE)?;
        }
        for item in &self.items {
            frame.line(&format!("{} {}", item.accent.marker(), item.kind_label))?;
            frame.line(&format!("  {}", item.title))?;
            frame.line(&format!("  {}", item.minutes_label))?;
        }
        frame.bottom()
    }
}

impl fmt::Display for ActivityPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut frame = Frame::top(f)?;
        frame.centered(APP_HEADER)?;
        frame.rule()?;
        if self.has_cover {
            frame.centered("[ portada ]")?;
        }
        frame.line(&self.title)?;
        frame.line(&self.badges.iter().map(|b| format!("[{b}]")).collect::<Vec<_>>().join(" "))?;
        frame.line("")?;
        frame.line(&self.intro)?;
        frame.line("")?;
        match &self.widget {
            Widget::Timer { action, timing } => {
                frame.centered(action)?;
                frame.centered(timing)?;
            }
            Widget::Placeholder(text) => frame.line(text)?,
        }
        frame.rule()?;
        frame.centered(&format!("[ {START_LABEL} ]"))?;
        frame.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BlockUpdate;
    use crate::models::activity::ActivityKind;

    #[test]
    fn empty_day_shows_empty_state() {
        let builder = RouteBuilder::new();
        let preview = DayPreview::from_builder(&builder);
        assert!(preview.is_empty());
        assert_eq!(preview.subtitle, "Día 1 • 0 min");
        assert!(preview.to_string().contains("La vista previa aparecerá aquí"));
    }

    #[test]
    fn blocks_project_into_timeline() {
        let mut builder = RouteBuilder::new();
        builder.add_block(BlockType::Lesson);
        let id = builder.add_block(BlockType::Activity);
        builder.update_block(&id, BlockUpdate::Title(String::new()));
        builder.update_block(&id, BlockUpdate::Duration(12));

        let preview = DayPreview::from_builder(&builder);
        assert_eq!(preview.subtitle, "Día 1 • 17 min");
        assert_eq!(preview.items[0].kind_label, "LESSON");
        assert_eq!(preview.items[1].kind_label, "Práctica");
        assert_eq!(preview.items[1].title, UNTITLED_BLOCK);
        assert_eq!(preview.items[1].minutes_label, "12 min");
        assert_eq!(preview.items[1].accent, Accent::Purple);
    }

    #[test]
    fn default_breathing_timer_label() {
        let preview = ActivityPreview::project(&ActivityForm::default());
        assert_eq!(
            preview.widget,
            Widget::Timer {
                action: "Inhala".into(),
                timing: "4s - 4s - 4s".into(),
            }
        );
        assert_eq!(preview.title, ACTIVITY_TITLE_PLACEHOLDER);
        assert_eq!(preview.badges, vec!["BASIC".to_string(), "5 min".to_string()]);
        let text = preview.to_string();
        assert!(text.contains(APP_HEADER));
        assert!(text.contains(START_LABEL));
    }

    #[test]
    fn non_timer_types_show_placeholder_widget() {
        let form = ActivityForm {
            kind: ActivityKind::Grounding,
            ..ActivityForm::default()
        };
        let preview = ActivityPreview::project(&form);
        assert_eq!(
            preview.widget,
            Widget::Placeholder("[Componente interactivo: grounding]".into())
        );
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap(EMPTY_DAY_MESSAGE);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= SCREEN_WIDTH));
    }
}

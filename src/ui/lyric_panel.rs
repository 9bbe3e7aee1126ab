//! Scrolling lyric list.
//!
//! The panel is the engine's scroll collaborator: it remembers the last
//! requested line and keeps it vertically centered, except near the top and
//! bottom of the transcript where the list stops scrolling.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::sync::{ScrollCollaborator, ScrollRequest, SyncView};
use crate::ui::create_titled_block;

/// Lyric list view state.
#[derive(Debug, Default)]
pub struct LyricPanel {
    active_index: Option<usize>,
    segment_count: usize,
    offset: usize,
    viewport_height: usize,
}

impl LyricPanel {
    /// Create an empty panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the first visible line.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Update the number of visible rows, re-centering if it changed.
    pub fn set_viewport_height(&mut self, height: usize) {
        if height != self.viewport_height {
            self.viewport_height = height;
            self.recenter();
        }
    }

    fn recenter(&mut self) {
        match self.active_index {
            Some(active) => {
                self.offset = centered_offset(active, self.segment_count, self.viewport_height);
            }
            // Nothing to center on: stay put, but never past the end
            None => {
                self.offset = self
                    .offset
                    .min(self.segment_count.saturating_sub(self.viewport_height));
            }
        }
    }

    /// Render the lyric list.
    pub fn draw(&mut self, f: &mut Frame, area: Rect, view: &SyncView<'_>, title: &str) {
        self.set_viewport_height(area.height.saturating_sub(2) as usize);

        let items: Vec<ListItem> = if view.lines.is_empty() {
            vec![ListItem::new(
                Line::from(Span::styled(
                    "No timed lines in this transcript",
                    Style::default().fg(Color::Gray),
                ))
                .alignment(Alignment::Center),
            )]
        } else {
            view.lines
                .iter()
                .map(|line| {
                    let style = if line.is_active {
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    ListItem::new(Line::from(Span::styled(line.text, style)).alignment(Alignment::Center))
                })
                .collect()
        };

        let list = List::new(items).block(create_titled_block(title, view.is_playing));
        let mut state = ListState::default().with_offset(self.offset);
        f.render_stateful_widget(list, area, &mut state);
    }
}

impl ScrollCollaborator for LyricPanel {
    fn scroll_into_view(&mut self, request: ScrollRequest) {
        self.active_index = request.active_index;
        self.segment_count = request.segment_count;
        self.recenter();
    }
}

/// First visible line that puts `active` in the middle of `height` rows.
///
/// Clamped so the list neither scrolls above its first line nor leaves
/// blank rows below its last.
pub const fn centered_offset(active: usize, count: usize, height: usize) -> usize {
    if height == 0 || count <= height {
        return 0;
    }
    let max_offset = count - height;
    let offset = active.saturating_sub(height / 2);
    if offset > max_offset {
        max_offset
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_offset_near_top() {
        assert_eq!(centered_offset(0, 100, 10), 0);
        assert_eq!(centered_offset(4, 100, 10), 0);
        assert_eq!(centered_offset(5, 100, 10), 0);
        assert_eq!(centered_offset(6, 100, 10), 1);
    }

    #[test]
    fn test_centered_offset_middle_and_bottom() {
        assert_eq!(centered_offset(50, 100, 10), 45);
        assert_eq!(centered_offset(99, 100, 10), 90);
    }

    #[test]
    fn test_short_transcript_never_scrolls() {
        assert_eq!(centered_offset(3, 5, 10), 0);
        assert_eq!(centered_offset(3, 5, 0), 0);
    }

    #[test]
    fn test_panel_follows_scroll_requests() {
        let mut panel = LyricPanel::new();
        panel.set_viewport_height(10);
        panel.scroll_into_view(ScrollRequest { active_index: Some(50), segment_count: 100 });
        assert_eq!(panel.offset(), 45);

        // A gap keeps the position
        panel.scroll_into_view(ScrollRequest { active_index: None, segment_count: 100 });
        assert_eq!(panel.offset(), 45);

        // A shorter transcript pulls the offset back in range
        panel.scroll_into_view(ScrollRequest { active_index: None, segment_count: 20 });
        assert_eq!(panel.offset(), 10);
    }

    #[test]
    fn test_resize_recenters() {
        let mut panel = LyricPanel::new();
        panel.set_viewport_height(10);
        panel.scroll_into_view(ScrollRequest { active_index: Some(50), segment_count: 100 });
        panel.set_viewport_height(20);
        assert_eq!(panel.offset(), 40);
    }
}

//! Pointer hit-testing
//!
//! Panes register the rectangle of every clickable element while rendering;
//! a press is resolved against the rectangles of the last drawn frame.

use ratatui::layout::Rect;

use crate::controller::Command;

#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Command)>,
}

impl HitMap {
    pub fn new() -> Self {
        HitMap::default()
    }

    /// Forget the previous frame's regions
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, area: Rect, command: Command) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, command));
        }
    }

    /// Command under the cell at `column`, `row`, if any
    pub fn resolve(&self, column: u16, row: u16) -> Option<Command> {
        self.regions
            .iter()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x.saturating_add(area.width)
                    && row >= area.y
                    && row < area.y.saturating_add(area.height)
            })
            .map(|(_, command)| *command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;

    #[test]
    fn test_resolve_inside_and_outside() {
        let mut hits = HitMap::new();
        hits.register(Rect::new(2, 1, 10, 1), Command::Select(Algorithm::Heap));
        hits.register(Rect::new(2, 5, 10, 3), Command::Start);

        assert_eq!(hits.resolve(2, 1), Some(Command::Select(Algorithm::Heap)));
        assert_eq!(hits.resolve(11, 1), Some(Command::Select(Algorithm::Heap)));
        assert_eq!(hits.resolve(12, 1), None);
        assert_eq!(hits.resolve(5, 7), Some(Command::Start));
        assert_eq!(hits.resolve(5, 8), None);
        assert_eq!(hits.resolve(0, 0), None);
    }

    #[test]
    fn test_clear_and_empty_regions() {
        let mut hits = HitMap::new();
        hits.register(Rect::new(0, 0, 0, 3), Command::Reset);
        assert_eq!(hits.resolve(0, 0), None);

        hits.register(Rect::new(0, 0, 3, 3), Command::Reset);
        hits.clear();
        assert_eq!(hits.resolve(1, 1), None);
    }
}

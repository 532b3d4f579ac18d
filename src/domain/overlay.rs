//! Review-annotation overlay: positionable note cards with anchor points.
//!
//! The board owns an ordered collection of annotations and the single active
//! drag slot. Positions are screen cell coordinates; they may go negative
//! during a drag and are clamped at render time, never here.

use serde::{Deserialize, Serialize};

use super::errors::{DomainError, DomainResult};

/// A point on the annotation canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// Where a freshly created note card lands.
pub const DEFAULT_BOX_POS: Position = Position { x: 30, y: 8 };
/// Default anchor point for a fresh note, below and left of the card.
pub const DEFAULT_ANCHOR_POS: Position = Position { x: 22, y: 14 };
/// Both positions of a duplicated note shift by this much on each axis.
pub const DUPLICATE_OFFSET: i32 = 20;
/// The connector meets the card this far along its top edge.
pub const CONNECTOR_ATTACH_X: i32 = 4;
/// Rendered card dimensions, also used for pointer hit testing.
pub const BOX_WIDTH: i32 = 36;
pub const BOX_HEIGHT: i32 = 8;

/// A single note card: a draggable box plus a draggable anchor point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: u64,
    pub box_pos: Position,
    pub anchor_pos: Position,
    pub content: String,
}

/// Which half of an annotation a drag moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Anchor,
    Box,
}

/// Reference positions captured when a drag begins. The dragged target's
/// position is always `origin + (pointer - pointer_start)`.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    id: u64,
    target: DragTarget,
    pointer_start: Position,
    origin: Position,
}

/// A canned note body selectable from the template menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteTemplate {
    pub label: &'static str,
    pub text: &'static str,
}

pub const NOTE_TEMPLATES: [NoteTemplate; 4] = [
    NoteTemplate {
        label: "Core interaction",
        text: "Interaction:\n1. Trigger: [click / hover / input]\n2. Precondition: [signed in / form valid]\n3. Feedback: [show loading / disable button]\n4. Result: [navigate / show toast]",
    },
    NoteTemplate {
        label: "Data logic",
        text: "Data rules:\n1. Endpoint: GET /api/resource\n2. Loading: [eager / lazy / paged]\n3. Cache: [none / local, 5 min]\n4. Mapping: view field <- api field",
    },
    NoteTemplate {
        label: "State handling",
        text: "State flow:\nIF [var] == [A]: show state A (highlighted)\nELSE IF [var] == [B]: show state B (dimmed)\nELSE: hide the entry point",
    },
    NoteTemplate {
        label: "Failure handling",
        text: "Failure handling:\n1. Timeout: [retry x3 / show fallback]\n2. Empty data: [placeholder / empty state]\n3. Error: [toast with exact message]",
    },
];

/// The in-memory annotation collection and its interaction state.
///
/// Only one drag can be active at a time and a card whose content is being
/// edited refuses box drags, mirroring how the overlay behaves on screen.
#[derive(Debug, Default)]
pub struct AnnotationBoard {
    annotations: Vec<Annotation>,
    next_id: u64,
    drag: Option<DragSession>,
    editing: Option<u64>,
}

impl AnnotationBoard {
    fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Appends a new empty annotation at the default position and returns
    /// its id. Ids come from a monotonic counter and never collide within
    /// the board.
    pub fn add(&mut self) -> u64 {
        let id = self.alloc_id();
        self.annotations.push(Annotation {
            id,
            box_pos: DEFAULT_BOX_POS,
            anchor_pos: DEFAULT_ANCHOR_POS,
            content: String::new(),
        });
        id
    }

    /// Appends a copy of an existing annotation, both positions offset by
    /// [`DUPLICATE_OFFSET`], content copied verbatim.
    pub fn duplicate(&mut self, id: u64) -> DomainResult<u64> {
        let source = self
            .get(id)
            .ok_or(DomainError::AnnotationNotFound(id))?
            .clone();
        let new_id = self.alloc_id();
        self.annotations.push(Annotation {
            id: new_id,
            box_pos: source.box_pos.offset(DUPLICATE_OFFSET, DUPLICATE_OFFSET),
            anchor_pos: source.anchor_pos.offset(DUPLICATE_OFFSET, DUPLICATE_OFFSET),
            content: source.content,
        });
        Ok(new_id)
    }

    /// Removes an annotation. Silently does nothing for an unknown id.
    pub fn remove(&mut self, id: u64) {
        self.annotations.retain(|a| a.id != id);
        if self.editing == Some(id) {
            self.editing = None;
        }
        if self.drag.map(|d| d.id) == Some(id) {
            self.drag = None;
        }
    }

    /// Replaces content on edit blur. Returns whether anything was written;
    /// identical text is left untouched.
    pub fn update_content(&mut self, id: u64, text: &str) -> bool {
        match self.annotations.iter_mut().find(|a| a.id == id) {
            Some(a) if a.content != text => {
                a.content = text.to_string();
                true
            }
            _ => false,
        }
    }

    /// Replaces content immediately from a template, no blur required.
    pub fn apply_template(&mut self, id: u64, template: &NoteTemplate) -> DomainResult<()> {
        let a = self
            .annotations
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(DomainError::AnnotationNotFound(id))?;
        a.content = template.text.to_string();
        Ok(())
    }

    pub fn get(&self, id: u64) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }

    pub fn ids(&self) -> Vec<u64> {
        self.annotations.iter().map(|a| a.id).collect()
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Marks an annotation's content as being edited, which suppresses box
    /// drags on it until [`AnnotationBoard::end_edit`].
    pub fn begin_edit(&mut self, id: u64) -> DomainResult<()> {
        if self.get(id).is_none() {
            return Err(DomainError::AnnotationNotFound(id));
        }
        self.editing = Some(id);
        Ok(())
    }

    pub fn end_edit(&mut self) {
        self.editing = None;
    }

    pub fn editing(&self) -> Option<u64> {
        self.editing
    }

    /// Starts a drag of one target, recording the pointer and the target's
    /// current position as the delta reference. Fails while another drag is
    /// active, or for a box whose content is being edited.
    pub fn begin_drag(
        &mut self,
        target: DragTarget,
        id: u64,
        pointer: Position,
    ) -> DomainResult<()> {
        if self.drag.is_some() {
            return Err(DomainError::DragInProgress);
        }
        if target == DragTarget::Box && self.editing == Some(id) {
            return Err(DomainError::EditInProgress);
        }
        let annotation = self.get(id).ok_or(DomainError::AnnotationNotFound(id))?;
        let origin = match target {
            DragTarget::Anchor => annotation.anchor_pos,
            DragTarget::Box => annotation.box_pos,
        };
        self.drag = Some(DragSession { id, target, pointer_start: pointer, origin });
        Ok(())
    }

    /// Moves the active drag target to `origin + (pointer - pointer_start)`.
    /// No-op without an active drag.
    pub fn drag_to(&mut self, pointer: Position) {
        let Some(session) = self.drag else { return };
        let new_pos = session.origin.offset(
            pointer.x - session.pointer_start.x,
            pointer.y - session.pointer_start.y,
        );
        if let Some(a) = self.annotations.iter_mut().find(|a| a.id == session.id) {
            match session.target {
                DragTarget::Anchor => a.anchor_pos = new_pos,
                DragTarget::Box => a.box_pos = new_pos,
            }
        }
    }

    /// Releases the active drag, leaving the last dragged position committed
    /// in the annotation. Returns what was being dragged, if anything.
    pub fn end_drag(&mut self) -> Option<(u64, DragTarget)> {
        self.drag.take().map(|s| (s.id, s.target))
    }

    pub fn drag_active(&self) -> bool {
        self.drag.is_some()
    }

    /// Finds what a press at `pointer` lands on, preferring the topmost
    /// (most recently added) annotation and the anchor over the box. The box
    /// drag handle is its top edge, like the card's header bar.
    pub fn hit_test(&self, pointer: Position) -> Option<(u64, DragTarget)> {
        for a in self.annotations.iter().rev() {
            let near_anchor = (pointer.x - a.anchor_pos.x).abs() <= 1
                && (pointer.y - a.anchor_pos.y).abs() <= 1;
            if near_anchor {
                return Some((a.id, DragTarget::Anchor));
            }
            let on_header = pointer.y == a.box_pos.y
                && pointer.x >= a.box_pos.x
                && pointer.x < a.box_pos.x + BOX_WIDTH;
            if on_header {
                return Some((a.id, DragTarget::Box));
            }
        }
        None
    }
}

/// Samples the connector curve between an annotation's anchor and its card.
///
/// The curve is quadratic: it starts at the anchor, ends at a fixed offset
/// on the card's top edge, and bends through the control point
/// `(anchor.x, box.y)` so it leaves the anchor vertically and arrives at the
/// card horizontally.
pub fn connector_points(anchor: Position, box_pos: Position, samples: usize) -> Vec<Position> {
    let samples = samples.max(1);
    let start = (anchor.x as f64, anchor.y as f64);
    let end = ((box_pos.x + CONNECTOR_ATTACH_X) as f64, box_pos.y as f64);
    let ctrl = (anchor.x as f64, box_pos.y as f64);

    (0..=samples)
        .map(|i| {
            let t = i as f64 / samples as f64;
            let u = 1.0 - t;
            let x = u * u * start.0 + 2.0 * u * t * ctrl.0 + t * t * end.0;
            let y = u * u * start.1 + 2.0 * u * t * ctrl.1 + t * t * end.1;
            Position::new(x.round() as i32, y.round() as i32)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_one() -> (AnnotationBoard, u64) {
        let mut board = AnnotationBoard::default();
        let id = board.add();
        (board, id)
    }

    #[test]
    fn test_add_assigns_unique_ids_and_defaults() {
        let mut board = AnnotationBoard::default();
        let a = board.add();
        let b = board.add();
        assert_ne!(a, b);
        let note = board.get(a).unwrap();
        assert_eq!(note.box_pos, DEFAULT_BOX_POS);
        assert_eq!(note.anchor_pos, DEFAULT_ANCHOR_POS);
        assert!(note.content.is_empty());
    }

    #[test]
    fn test_duplicate_offsets_both_positions_and_copies_content() {
        let (mut board, id) = board_with_one();
        {
            let a = board.annotations.iter_mut().find(|a| a.id == id).unwrap();
            a.box_pos = Position::new(100, 100);
            a.anchor_pos = Position::new(50, 50);
            a.content = "X".to_string();
        }
        let copy_id = board.duplicate(id).unwrap();
        assert_ne!(copy_id, id);
        let copy = board.get(copy_id).unwrap();
        assert_eq!(copy.box_pos, Position::new(120, 120));
        assert_eq!(copy.anchor_pos, Position::new(70, 70));
        assert_eq!(copy.content, "X");
        // Source is untouched.
        assert_eq!(board.get(id).unwrap().box_pos, Position::new(100, 100));
    }

    #[test]
    fn test_duplicate_unknown_id_fails() {
        let mut board = AnnotationBoard::default();
        assert_eq!(
            board.duplicate(42),
            Err(crate::domain::errors::DomainError::AnnotationNotFound(42))
        );
    }

    #[test]
    fn test_remove_is_noop_for_unknown_id() {
        let (mut board, id) = board_with_one();
        board.remove(999);
        assert_eq!(board.len(), 1);
        board.remove(id);
        assert!(board.is_empty());
    }

    #[test]
    fn test_update_content_skips_identical_text() {
        let (mut board, id) = board_with_one();
        assert!(board.update_content(id, "hello"));
        assert!(!board.update_content(id, "hello"));
        assert!(board.update_content(id, "hello!"));
        assert!(!board.update_content(999, "missing"));
    }

    #[test]
    fn test_apply_template_replaces_content_immediately() {
        let (mut board, id) = board_with_one();
        board.apply_template(id, &NOTE_TEMPLATES[0]).unwrap();
        assert_eq!(board.get(id).unwrap().content, NOTE_TEMPLATES[0].text);
    }

    #[test]
    fn test_box_drag_applies_pointer_delta() {
        let (mut board, id) = board_with_one();
        {
            let a = board.annotations.iter_mut().find(|a| a.id == id).unwrap();
            a.box_pos = Position::new(100, 100);
            a.anchor_pos = Position::new(50, 50);
        }
        board
            .begin_drag(DragTarget::Box, id, Position::new(10, 10))
            .unwrap();
        board.drag_to(Position::new(40, 0));
        assert_eq!(board.get(id).unwrap().box_pos, Position::new(130, 90));
        // Anchor untouched by a box drag.
        assert_eq!(board.get(id).unwrap().anchor_pos, Position::new(50, 50));

        let released = board.end_drag();
        assert_eq!(released, Some((id, DragTarget::Box)));
        assert_eq!(board.get(id).unwrap().box_pos, Position::new(130, 90));
    }

    #[test]
    fn test_drag_delta_is_relative_to_press_not_incremental() {
        let (mut board, id) = board_with_one();
        board
            .begin_drag(DragTarget::Anchor, id, Position::new(0, 0))
            .unwrap();
        board.drag_to(Position::new(5, 5));
        board.drag_to(Position::new(3, 2));
        let expected = DEFAULT_ANCHOR_POS.offset(3, 2);
        assert_eq!(board.get(id).unwrap().anchor_pos, expected);
    }

    #[test]
    fn test_only_one_drag_at_a_time() {
        let mut board = AnnotationBoard::default();
        let a = board.add();
        let b = board.add();
        board.begin_drag(DragTarget::Box, a, Position::new(0, 0)).unwrap();
        assert_eq!(
            board.begin_drag(DragTarget::Box, b, Position::new(0, 0)),
            Err(crate::domain::errors::DomainError::DragInProgress)
        );
        board.end_drag();
        assert!(board.begin_drag(DragTarget::Box, b, Position::new(0, 0)).is_ok());
    }

    #[test]
    fn test_editing_suppresses_box_drag_but_not_anchor_drag() {
        let (mut board, id) = board_with_one();
        board.begin_edit(id).unwrap();
        assert_eq!(
            board.begin_drag(DragTarget::Box, id, Position::new(0, 0)),
            Err(crate::domain::errors::DomainError::EditInProgress)
        );
        assert!(board.begin_drag(DragTarget::Anchor, id, Position::new(0, 0)).is_ok());
        board.end_drag();
        board.end_edit();
        assert!(board.begin_drag(DragTarget::Box, id, Position::new(0, 0)).is_ok());
    }

    #[test]
    fn test_remove_clears_edit_and_drag_state() {
        let (mut board, id) = board_with_one();
        board.begin_edit(id).unwrap();
        board.remove(id);
        assert_eq!(board.editing(), None);
        assert!(!board.drag_active());
    }

    #[test]
    fn test_hit_test_prefers_anchor_and_topmost() {
        let mut board = AnnotationBoard::default();
        let a = board.add();
        let b = board.add();
        // Both annotations share default positions; the later one wins.
        assert_eq!(board.hit_test(DEFAULT_ANCHOR_POS), Some((b, DragTarget::Anchor)));
        assert_eq!(board.hit_test(DEFAULT_BOX_POS), Some((b, DragTarget::Box)));
        board.remove(b);
        assert_eq!(board.hit_test(DEFAULT_BOX_POS), Some((a, DragTarget::Box)));
        assert_eq!(board.hit_test(Position::new(-50, -50)), None);
    }

    #[test]
    fn test_connector_endpoints_and_shape() {
        let anchor = Position::new(10, 20);
        let box_pos = Position::new(40, 5);
        let points = connector_points(anchor, box_pos, 16);
        assert_eq!(points.first().copied(), Some(anchor));
        assert_eq!(
            points.last().copied(),
            Some(Position::new(box_pos.x + CONNECTOR_ATTACH_X, box_pos.y))
        );
        // The quadratic departs vertically: early samples stay near anchor.x.
        assert!((points[1].x - anchor.x).abs() <= 1);
    }

    #[test]
    fn test_connector_tolerates_zero_sample_count() {
        let anchor = Position::new(10, 20);
        let box_pos = Position::new(40, 5);
        let points = connector_points(anchor, box_pos, 0);
        assert_eq!(points.first().copied(), Some(anchor));
        assert_eq!(
            points.last().copied(),
            Some(Position::new(box_pos.x + CONNECTOR_ATTACH_X, box_pos.y))
        );
    }
}

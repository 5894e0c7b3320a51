//! Drawing seam: the engine emits textured rectangles, the host draws them.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::Rect;

/// What to draw into a rectangle. Asset lookup stays with the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureId {
    /// Face of the card with this identity.
    Card(CardId),
    /// Empty frame marking a fusion-table position.
    SlotFrame,
}

/// Draw primitive supplied by the host.
pub trait Renderer {
    /// Draw `texture` stretched over `dst`, rotated by `rotation` radians
    /// around the rectangle's center.
    fn draw(&mut self, texture: TextureId, dst: Rect, rotation: f32);
}

/// A single recorded draw call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub texture: TextureId,
    pub dst: Rect,
    pub rotation: f32,
}

/// Renderer that records commands in submission order.
///
/// Useful for headless hosts and for asserting on what a frame drew.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands drawing the face of `id`, in draw order.
    pub fn cards(&self, id: CardId) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(move |cmd| cmd.texture == TextureId::Card(id))
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Renderer for DrawList {
    fn draw(&mut self, texture: TextureId, dst: Rect, rotation: f32) {
        self.commands.push(DrawCommand {
            texture,
            dst,
            rotation,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_draw_list_records_in_order() {
        let mut list = DrawList::new();
        let rect = Rect::new(Vec2::ZERO, Vec2::ONE);
        list.draw(TextureId::SlotFrame, rect, 0.0);
        list.draw(TextureId::Card(CardId::new(4)), rect, 0.5);

        assert_eq!(list.len(), 2);
        assert_eq!(list.commands()[0].texture, TextureId::SlotFrame);
        assert_eq!(list.cards(CardId::new(4)).count(), 1);

        list.clear();
        assert!(list.is_empty());
    }
}

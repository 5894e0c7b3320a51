//! Per-card continuous animation state.
//!
//! A card's resting place is its *anchor*: the top-left corner of its
//! unscaled rectangle. Everything the renderer sees (the draw rectangle,
//! scale, rotation) is recomputed from the anchor plus the current
//! progress values whenever either changes, so the two never drift apart.
//!
//! ## Locations
//!
//! - `Hand`: laid out in the hand row; hover raises it, drawing slides it in
//! - `Slot`: sits on a fusion-table slot, flat and unscaled
//! - `Drag`: follows the pointer and tilts with horizontal motion

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::smoothing::{approach, damp, exp_lerp};
use crate::core::{MotionConfig, Rect};

/// Where a card is, as far as motion is concerned. Exactly one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardLocation {
    Hand,
    Slot,
    Drag,
}

/// Animation state of one card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardMotion {
    location: CardLocation,
    anchor: Vec2,
    size: Vec2,
    rect: Rect,
    tuning: MotionConfig,

    scale: f32,
    rotation: f32,
    y_offset: f32,

    hover_target: f32,
    hover_progress: f32,
    entry_target: f32,
    entry_progress: f32,

    /// Pointer position minus anchor at the moment the drag started.
    drag_offset: Vec2,
    drag_rotation: f32,
    /// +1 when grabbed by the upper half, -1 by the lower half.
    tilt_direction: f32,
    last_pointer_x: Option<f32>,
}

impl CardMotion {
    /// A card resting in the hand at the origin.
    #[must_use]
    pub fn new(size: Vec2, tuning: MotionConfig) -> Self {
        Self {
            location: CardLocation::Hand,
            anchor: Vec2::ZERO,
            size,
            rect: Rect::new(Vec2::ZERO, size),
            tuning,
            scale: 1.0,
            rotation: 0.0,
            y_offset: 0.0,
            hover_target: 0.0,
            hover_progress: 0.0,
            entry_target: 0.0,
            entry_progress: 0.0,
            drag_offset: Vec2::ZERO,
            drag_rotation: 0.0,
            tilt_direction: 1.0,
            last_pointer_x: None,
        }
    }

    #[must_use]
    pub fn location(&self) -> CardLocation {
        self.location
    }

    #[must_use]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Unscaled rectangle at the anchor, ignoring hover and entry offsets.
    #[must_use]
    pub fn anchor_rect(&self) -> Rect {
        Rect::new(self.anchor, self.size)
    }

    /// Current draw rectangle, including scale and vertical offset.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[must_use]
    pub fn y_offset(&self) -> f32 {
        self.y_offset
    }

    #[must_use]
    pub fn hover_progress(&self) -> f32 {
        self.hover_progress
    }

    #[must_use]
    pub fn entry_progress(&self) -> f32 {
        self.entry_progress
    }

    #[must_use]
    pub fn drag_rotation(&self) -> f32 {
        self.drag_rotation
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.location == CardLocation::Drag
    }

    /// Whether hover has lifted this card off the hand row at all.
    #[must_use]
    pub fn is_elevated(&self) -> bool {
        self.hover_progress > 0.0
    }

    /// Move the anchor and rebuild the draw rectangle around it.
    pub fn move_to(&mut self, anchor: Vec2) {
        self.anchor = anchor;
        self.sync_rect();
    }

    /// Set the hover target. Only takes effect while the card is in the hand.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hover_target = if hovered { 1.0 } else { 0.0 };
    }

    /// Start the slide-in of a freshly drawn card.
    pub fn begin_hand_entry(&mut self) {
        self.entry_progress = 1.0;
        self.entry_target = 0.0;
        self.apply_pose();
    }

    /// Advance hover and entry progress toward their targets.
    ///
    /// Cards outside the hand keep their progress values untouched.
    pub fn update_hand_motion(&mut self, dt: f32) {
        if self.location != CardLocation::Hand {
            return;
        }

        let t = self.tuning;
        self.hover_progress =
            approach(self.hover_progress, self.hover_target, t.hover_speed, dt, t.snap_epsilon);
        self.entry_progress =
            approach(self.entry_progress, self.entry_target, t.entry_speed, dt, t.snap_epsilon);
        self.apply_pose();
    }

    /// Pick the card up at `pointer`.
    ///
    /// The card keeps its on-screen center: hover raise and entry slide are
    /// folded into the anchor before they are cleared.
    pub fn start_drag(&mut self, pointer: Vec2) {
        let center = self.rect.center();
        self.tilt_direction = if pointer.y < center.y { 1.0 } else { -1.0 };

        let visual = center - self.size * 0.5;
        self.anchor = visual;
        self.clear_hand_state();
        self.location = CardLocation::Drag;
        self.drag_offset = pointer - visual;
        self.last_pointer_x = Some(pointer.x);
        self.apply_pose();
    }

    /// Follow the pointer while dragging; otherwise let tilt decay.
    ///
    /// A zero `dt` repositions without touching tilt.
    pub fn update_drag_position(&mut self, pointer: Vec2, dt: f32) {
        let t = self.tuning;

        if self.location != CardLocation::Drag {
            if self.drag_rotation != 0.0 {
                self.drag_rotation = damp(self.drag_rotation, t.tilt_damping, dt);
                if self.drag_rotation.abs() < t.snap_epsilon {
                    self.drag_rotation = 0.0;
                }
                self.apply_pose();
            }
            return;
        }

        if dt > 0.0 {
            let dx = self.last_pointer_x.map_or(0.0, |last| pointer.x - last);
            let target =
                (dx / dt * t.tilt_factor * self.tilt_direction).clamp(-t.max_tilt, t.max_tilt);
            self.drag_rotation = exp_lerp(self.drag_rotation, target, t.tilt_follow_speed, dt)
                .clamp(-t.max_tilt, t.max_tilt);
        }
        self.last_pointer_x = Some(pointer.x);
        self.anchor = pointer - self.drag_offset;
        self.apply_pose();
    }

    /// Drop onto a fusion slot.
    pub fn place_in_slot(&mut self, slot: Rect) {
        self.clear_hand_state();
        self.location = CardLocation::Slot;
        self.drag_rotation = 0.0;
        self.last_pointer_x = None;
        self.anchor = slot.pos;
        self.apply_pose();
    }

    /// Hand the card back to the hand. The next layout pass repositions it.
    pub fn return_to_hand(&mut self) {
        self.location = CardLocation::Hand;
        self.last_pointer_x = None;
        self.apply_pose();
    }

    /// Hit test against the current (possibly hover-inflated) rectangle.
    #[must_use]
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }

    fn clear_hand_state(&mut self) {
        self.hover_target = 0.0;
        self.hover_progress = 0.0;
        self.entry_target = 0.0;
        self.entry_progress = 0.0;
    }

    /// Derive offset, scale and rotation from location and progress.
    fn apply_pose(&mut self) {
        let t = self.tuning;
        match self.location {
            CardLocation::Hand => {
                let hover_offset = -t.raise_amount * self.hover_progress;
                let entry_offset = t.entry_offset * self.entry_progress;
                self.y_offset = entry_offset + hover_offset;
                self.scale = 1.0 + (t.hover_scale - 1.0) * self.hover_progress;
                self.rotation = t.hover_rotation * self.hover_progress + self.drag_rotation;
            }
            CardLocation::Slot => {
                self.y_offset = 0.0;
                self.scale = 1.0;
                self.rotation = 0.0;
            }
            CardLocation::Drag => {
                self.y_offset = 0.0;
                self.scale = 1.0;
                self.rotation = self.drag_rotation;
            }
        }
        self.sync_rect();
    }

    fn sync_rect(&mut self) {
        let center = self.anchor + self.size * 0.5 + Vec2::new(0.0, self.y_offset);
        self.rect = Rect::from_center(center, self.size * self.scale);
    }
}

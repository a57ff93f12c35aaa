use glam::Vec2;

/// Pointer drag that orbits the camera. Only the pointer that started the
/// drag moves it.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, at: Vec2) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last = at;
    }

    /// Movement since the previous sample of the dragging pointer.
    pub fn step(&mut self, pointer_id: i32, at: Vec2) -> Option<Vec2> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = at - self.last;
        self.last = at;
        Some(delta)
    }

    /// Returns true if this pointer was the one dragging.
    pub fn end(&mut self, pointer_id: i32) -> bool {
        let was = self.active && pointer_id == self.pointer_id;
        if was {
            self.active = false;
        }
        was
    }
}

#[inline]
pub fn is_panel_toggle_key(key: &str, toggle: &str) -> bool {
    key.eq_ignore_ascii_case(toggle)
}

/// CSS transform placing the stalker's origin at `p` (page pixels).
#[inline]
pub fn stalker_transform(p: Vec2) -> String {
    format!("translate3d({}px, {}px, 0)", p.x, p.y)
}

/// Parse a range input's string value; empty or garbage yields None.
#[inline]
pub fn parse_range_value(raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

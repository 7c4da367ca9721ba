use log::debug;

/// Pointer or touch activity over the canvas, in canvas-local pixels
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    Leave,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum StrokeState {
    #[default]
    Idle,
    Stroking,
}

impl StrokeState {
    /// Advance the stroke; returns the position to paint at, if any
    pub fn handle(&mut self, event: PointerEvent) -> Option<(f32, f32)> {
        match (*self, event) {
            (_, PointerEvent::Down { x, y }) => {
                if *self == StrokeState::Idle {
                    debug!("stroke started");
                }
                *self = StrokeState::Stroking;
                Some((x, y))
            }
            (StrokeState::Stroking, PointerEvent::Move { x, y }) => Some((x, y)),
            (StrokeState::Idle, PointerEvent::Move { .. }) => None,
            (StrokeState::Stroking, PointerEvent::Up | PointerEvent::Leave) => {
                debug!("stroke ended");
                *self = StrokeState::Idle;
                None
            }
            (StrokeState::Idle, PointerEvent::Up | PointerEvent::Leave) => None,
        }
    }
}

use crate::domain::{ControlInput, RotationDirection};

/// Maps a raw key event to a craft control.
///
/// `a`/`d` rotate while held, `j` thrusts while held, space fires on press.
/// Anything else is ignored.
pub fn control_for_key(key: &str, pressed: bool) -> Option<ControlInput> {
    match key {
        "a" => Some(ControlInput::Rotate {
            direction: RotationDirection::Left,
            on: pressed,
        }),
        "d" => Some(ControlInput::Rotate {
            direction: RotationDirection::Right,
            on: pressed,
        }),
        "j" => Some(ControlInput::Thrust { on: pressed }),
        " " | "Space" if pressed => Some(ControlInput::Fire),
        _ => None,
    }
}

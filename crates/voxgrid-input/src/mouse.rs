//! Mouse button identifiers.

use winit::event::MouseButton as WinitMouseButton;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl TryFrom<WinitMouseButton> for MouseButton {
    type Error = ();

    fn try_from(button: WinitMouseButton) -> Result<Self, Self::Error> {
        match button {
            WinitMouseButton::Left => Ok(Self::Left),
            WinitMouseButton::Right => Ok(Self::Right),
            WinitMouseButton::Middle => Ok(Self::Middle),
            WinitMouseButton::Back | WinitMouseButton::Forward | WinitMouseButton::Other(_) => {
                Err(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_primary_buttons() {
        assert_eq!(MouseButton::try_from(WinitMouseButton::Left), Ok(MouseButton::Left));
        assert_eq!(MouseButton::try_from(WinitMouseButton::Right), Ok(MouseButton::Right));
        assert!(MouseButton::try_from(WinitMouseButton::Other(7)).is_err());
    }
}

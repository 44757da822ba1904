//! Session toggles and the mouse-to-edit binding table.

use hashbrown::HashMap;

use crate::mouse::MouseButton;

/// Toggles owned by the interaction session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    /// Cursor captured for mouse-look. Edits only fire while locked.
    pub cursor_locked: bool,
    /// Draw voxels as wireframe.
    pub wireframe: bool,
    /// Back-face culling. Off while in wireframe mode.
    pub cull_face: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            cursor_locked: false,
            wireframe: false,
            cull_face: true,
        }
    }
}

impl ControlState {
    /// Flip wireframe mode. Culling follows the opposite state.
    pub fn toggle_wireframe(&mut self) {
        self.wireframe = !self.wireframe;
        self.cull_face = !self.wireframe;
    }
}

/// Edit triggered by a mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditAction {
    Place,
    Remove,
}

/// Mapping from mouse buttons to edit actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBindings {
    bindings: HashMap<MouseButton, EditAction>,
}

impl Default for EditBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(MouseButton::Right, EditAction::Place);
        bindings.bind(MouseButton::Left, EditAction::Remove);
        bindings
    }
}

impl EditBindings {
    /// A table with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `button` to `action`, returning the previous binding.
    pub fn bind(&mut self, button: MouseButton, action: EditAction) -> Option<EditAction> {
        self.bindings.insert(button, action)
    }

    /// Remove the binding for `button`.
    pub fn unbind(&mut self, button: MouseButton) -> Option<EditAction> {
        self.bindings.remove(&button)
    }

    #[must_use]
    pub fn get(&self, button: MouseButton) -> Option<EditAction> {
        self.bindings.get(&button).copied()
    }
}

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key, NamedKey};

use crate::traits::HostEvent;

/// Translate a winit window event into the host events the game consumes
///
/// Returns `None` for events the game does not react to.
pub fn translate(event: &WindowEvent) -> Option<HostEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            let key = key_name(&event.logical_key)?;
            Some(match event.state {
                ElementState::Pressed => HostEvent::KeyDown(key),
                ElementState::Released => HostEvent::KeyUp(key),
            })
        }
        WindowEvent::Resized(size) => Some(HostEvent::Resized {
            width: size.width,
            height: size.height,
        }),
        WindowEvent::Focused(focused) => Some(HostEvent::Focused(*focused)),
        _ => None,
    }
}

/// Map a logical key to its DOM `KeyboardEvent.key` name
///
/// winit's named keys follow the same W3C naming, except space which
/// is reported as a character there.
pub fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Named(NamedKey::Space) => Some(" ".to_owned()),
        Key::Named(named) => Some(format!("{named:?}")),
        Key::Character(text) => Some(text.to_string()),
        Key::Unidentified(_) | Key::Dead(_) => None,
    }
}

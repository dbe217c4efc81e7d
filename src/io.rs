use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

use crate::events::Event;

/// Converts a crossterm event into a driver event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) => None,
        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Event::Exit),
            KeyEvent {
                code: KeyCode::Char(' '),
                ..
            } => Some(Event::TogglePause),
            KeyEvent {
                code: KeyCode::Char('n'),
                ..
            } => Some(Event::Step),
            _ => None,
        },
        CrossTermEvent::Resize(cols, rows) => Some(Event::Resize { cols, rows }),
        _ => None,
    }
}

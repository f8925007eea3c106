/// Keys the quiz reacts to. Everything else collapses into `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCode {
    ArrowLeft,
    ArrowRight,
    Enter,
    Digit(u8),
    Other,
}

impl KeyCode {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => KeyCode::ArrowLeft,
            "ArrowRight" => KeyCode::ArrowRight,
            "Enter" => KeyCode::Enter,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c @ '0'..='9'), None) => KeyCode::Digit(c as u8 - b'0'),
                    _ => KeyCode::Other,
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyInput {
    #[must_use]
    pub fn plain(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::default(),
        }
    }

    #[must_use]
    pub fn with_ctrl(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: KeyModifiers {
                ctrl: true,
                ..KeyModifiers::default()
            },
        }
    }

    #[must_use]
    pub fn with_alt(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: KeyModifiers {
                alt: true,
                ..KeyModifiers::default()
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Previous,
    Next,
    OpenSubmitPrompt,
    Jump(u32),
}

/// Resolve a key press to a quiz shortcut.
///
/// Ctrl/Cmd+Enter opens the submit prompt; Alt+1..9 jumps to that question
/// when it exists.
#[must_use]
pub fn shortcut_for(input: &KeyInput, total: u32) -> Option<Shortcut> {
    match input.key {
        KeyCode::ArrowLeft => Some(Shortcut::Previous),
        KeyCode::ArrowRight => Some(Shortcut::Next),
        KeyCode::Enter if input.modifiers.ctrl || input.modifiers.meta => {
            Some(Shortcut::OpenSubmitPrompt)
        }
        KeyCode::Digit(digit) if input.modifiers.alt && (1..=9).contains(&digit) => {
            let number = u32::from(digit);
            (number <= total).then_some(Shortcut::Jump(number))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_dom_key_names() {
        assert_eq!(KeyCode::from_key_name("ArrowLeft"), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from_key_name("7"), KeyCode::Digit(7));
        assert_eq!(KeyCode::from_key_name("a"), KeyCode::Other);
        assert_eq!(KeyCode::from_key_name("12"), KeyCode::Other);
    }

    #[test]
    fn arrows_navigate_without_modifiers() {
        assert_eq!(
            shortcut_for(&KeyInput::plain(KeyCode::ArrowLeft), 5),
            Some(Shortcut::Previous)
        );
        assert_eq!(
            shortcut_for(&KeyInput::plain(KeyCode::ArrowRight), 5),
            Some(Shortcut::Next)
        );
    }

    #[test]
    fn enter_needs_ctrl_or_meta() {
        assert_eq!(shortcut_for(&KeyInput::plain(KeyCode::Enter), 5), None);
        assert_eq!(
            shortcut_for(&KeyInput::with_ctrl(KeyCode::Enter), 5),
            Some(Shortcut::OpenSubmitPrompt)
        );
        let meta = KeyInput {
            key: KeyCode::Enter,
            modifiers: KeyModifiers {
                meta: true,
                ..KeyModifiers::default()
            },
        };
        assert_eq!(shortcut_for(&meta, 5), Some(Shortcut::OpenSubmitPrompt));
    }

    #[test]
    fn alt_digit_jumps_within_range() {
        assert_eq!(
            shortcut_for(&KeyInput::with_alt(KeyCode::Digit(3)), 5),
            Some(Shortcut::Jump(3))
        );
        assert_eq!(shortcut_for(&KeyInput::with_alt(KeyCode::Digit(6)), 5), None);
        assert_eq!(shortcut_for(&KeyInput::with_alt(KeyCode::Digit(0)), 5), None);
        assert_eq!(shortcut_for(&KeyInput::plain(KeyCode::Digit(3)), 5), None);
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

// Matches both '$ name = Character(' and 'define name = Character(' statements
pub static DEFINE_RE: Lazy<Regex> = Lazy::new(|| unsafe {
    Regex::new(r"(?m)^\s*(?:\$|define)\s+(\w+)\s*=\s*Character\(").unwrap_unchecked()
});
pub static MENU_CHOICE_RE: Lazy<Regex> =
    Lazy::new(|| unsafe { Regex::new(r#"(?m)^\s*"([^"]+)"\s*:"#).unwrap_unchecked() });
pub static SCREEN_TEXT_RE: Lazy<Regex> = Lazy::new(|| unsafe {
    Regex::new(r#"(?:label|textbutton)\s+_\("([^"]+)"\)"#).unwrap_unchecked()
});

pub static SOURCE_MARKER: &str = "< ";
pub static TRANSLATION_MARKER: &str = ">";

pub static EMPTY_SLOT_COUNT: usize = 9;
pub static QUIT_CONFIRM_LINE: &str = "Are you sure you want to quit?";

// Captions of the engine's built-in joystick screens, which never appear in
// any .rpy source and have to be injected into the template by hand.
pub static JOYSTICK_LINES: [&str; 22] = [
    "Joystick Configuration",
    "Left - Axis 0.0 Negative",
    "Right - Axis 0.0 Positive",
    "Up - Axis 0.1 Negative",
    "Down - Axis 0.1 Positive",
    "Select/Dismiss - Button 0.0",
    "Rollback - Not Assigned",
    "Hold to Skip - Not Assigned",
    "Toggle Skip - Not Assigned",
    "Hide Text - Not Assigned",
    "Menu - Button 0.7",
    "Joystick Mapping - Left",
    "Joystick Mapping - Right",
    "Joystick Mapping - Up",
    "Joystick Mapping - Down",
    "Joystick Mapping - Select/Dismiss",
    "Joystick Mapping - Rollback",
    "Joystick Mapping - Hold to Skip",
    "Joystick Mapping - Toggle Skip",
    "Joystick Mapping - Hide Text",
    "Joystick Mapping - Menu",
    "Move the joystick or press a joystick button to create the mapping. Click the mouse to remove the mapping.",
];

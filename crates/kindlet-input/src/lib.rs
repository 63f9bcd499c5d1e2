//! Hardware key codes for Kindle devices.
//!
//! The device system owns the hardware input and forwards key events to the
//! running application. The codes in this crate identify the device-specific
//! keys in those events: the five-way controller, the page-turn buttons, and
//! the Back, Menu, Text and Symbol keys. Ordinary keyboard keys arrive with
//! their standard codes and are not listed here.
//!
//! Not every device model produces every code. Keyboard layouts differ
//! substantially between models, and on some models Alt activates the
//! numeric row, so be careful with combinations involving Alt. Alt alone
//! produces no key events, but it does appear as a modifier on other keys.
//!
//! Some keys never reach the application:
//!
//! - the volume keys are controlled by the device system;
//! - Home is reserved for exiting applications;
//! - Alt-Shift-G is reserved by the system to take screen shots.
//!
//! Menu and Text are only delivered when the application has not registered
//! a corresponding menu or text options pane, and an unconsumed Back event
//! triggers the system's standard back processing. See the constant
//! documentation on [`KeyCode`] for the per-key details.

mod keycode;

pub use self::keycode::{KeyCode, ParseKeyCodeError};

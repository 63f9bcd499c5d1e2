//! Shared fixtures for the kindlet test suite.

use kindlet_input::KeyCode;

/// The documented key codes: constant, decimal value from the platform
/// documentation, symbolic name. One entry per distinct value; the
/// deprecated `FONT_SIZE` alias is covered by its own test.
pub const DOCUMENTED_KEY_CODES: [(KeyCode, u16, &str); 12] = [
    (KeyCode::BACK, 61441, "BACK"),
    (KeyCode::FIVE_WAY_UP, 33, "FIVE_WAY_UP"),
    (KeyCode::FIVE_WAY_DOWN, 34, "FIVE_WAY_DOWN"),
    (KeyCode::FIVE_WAY_LEFT, 37, "FIVE_WAY_LEFT"),
    (KeyCode::FIVE_WAY_RIGHT, 39, "FIVE_WAY_RIGHT"),
    (KeyCode::FIVE_WAY_SELECT, 61451, "FIVE_WAY_SELECT"),
    (KeyCode::TEXT, 61447, "TEXT"),
    (KeyCode::LEFT_HAND_SIDE_TURN_PAGE, 61449, "LEFT_HAND_SIDE_TURN_PAGE"),
    (KeyCode::RIGHT_HAND_SIDE_TURN_PAGE, 61448, "RIGHT_HAND_SIDE_TURN_PAGE"),
    (KeyCode::TURN_PAGE_BACK, 61450, "TURN_PAGE_BACK"),
    (KeyCode::MENU, 65482, "MENU"),
    (KeyCode::SYMBOL, 61443, "SYMBOL"),
];

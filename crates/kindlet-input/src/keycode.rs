use core::fmt::Display;
use core::str::FromStr;

use thiserror::Error;

/// Code carried by a key event for a Kindle hardware key.
///
/// The device system delivers event codes as raw integers; construction is
/// total and recognition goes through [`KeyCode::name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct KeyCode(u16);

impl KeyCode {
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    pub const fn from_u16(code: u16) -> Self {
        Self(code)
    }
}

impl Display for KeyCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

// The five-way directions reuse standard navigation key values; the
// device-specific keys live in the 0xF000 range, except Menu.

impl KeyCode {
    /// Back button.
    ///
    /// Delivered to the application. If the event is not consumed, the
    /// system's standard back processing runs during key event
    /// post-processing and returns the user to the activity they were in
    /// before entering the application. Applications handling Back on their
    /// own should use it to move one logical step back, and must leave the
    /// event unconsumed when there is no such step.
    pub const BACK: Self = Self(0xF001);

    /// Five-way controller up.
    pub const FIVE_WAY_UP: Self = Self(0x21);
    /// Five-way controller down.
    pub const FIVE_WAY_DOWN: Self = Self(0x22);
    /// Five-way controller left.
    pub const FIVE_WAY_LEFT: Self = Self(0x25);
    /// Five-way controller right.
    pub const FIVE_WAY_RIGHT: Self = Self(0x27);
    /// Pressing in ("select") on the five-way controller.
    pub const FIVE_WAY_SELECT: Self = Self(0xF00B);

    /// Text key, frequently used to control font size and other display
    /// properties.
    ///
    /// Only delivered when the application has not registered a text options
    /// pane for the system to open instead.
    pub const TEXT: Self = Self(0xF007);

    /// Legacy name for the text key.
    #[deprecated(note = "use `KeyCode::TEXT`")]
    pub const FONT_SIZE: Self = Self(0xF007);

    /// Left-side next page button.
    pub const LEFT_HAND_SIDE_TURN_PAGE: Self = Self(0xF009);
    /// Right-side next page button.
    pub const RIGHT_HAND_SIDE_TURN_PAGE: Self = Self(0xF008);
    /// Previous page button.
    pub const TURN_PAGE_BACK: Self = Self(0xF00A);

    /// Menu button.
    ///
    /// Only delivered when the application has not registered a menu for the
    /// system to open instead.
    pub const MENU: Self = Self(0xFFCA);

    /// Symbol key.
    pub const SYMBOL: Self = Self(0xF003);

    /// Every documented key code, one entry per distinct value.
    pub const ALL: [Self; 12] = [
        Self::BACK,
        Self::FIVE_WAY_UP,
        Self::FIVE_WAY_DOWN,
        Self::FIVE_WAY_LEFT,
        Self::FIVE_WAY_RIGHT,
        Self::FIVE_WAY_SELECT,
        Self::TEXT,
        Self::LEFT_HAND_SIDE_TURN_PAGE,
        Self::RIGHT_HAND_SIDE_TURN_PAGE,
        Self::TURN_PAGE_BACK,
        Self::MENU,
        Self::SYMBOL,
    ];

    /// Symbolic name of a documented code, `None` for anything else.
    ///
    /// The value shared by the text key and its deprecated `FONT_SIZE` alias
    /// is reported as `"TEXT"`.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::BACK => Some("BACK"),
            Self::FIVE_WAY_UP => Some("FIVE_WAY_UP"),
            Self::FIVE_WAY_DOWN => Some("FIVE_WAY_DOWN"),
            Self::FIVE_WAY_LEFT => Some("FIVE_WAY_LEFT"),
            Self::FIVE_WAY_RIGHT => Some("FIVE_WAY_RIGHT"),
            Self::FIVE_WAY_SELECT => Some("FIVE_WAY_SELECT"),
            Self::TEXT => Some("TEXT"),
            Self::LEFT_HAND_SIDE_TURN_PAGE => Some("LEFT_HAND_SIDE_TURN_PAGE"),
            Self::RIGHT_HAND_SIDE_TURN_PAGE => Some("RIGHT_HAND_SIDE_TURN_PAGE"),
            Self::TURN_PAGE_BACK => Some("TURN_PAGE_BACK"),
            Self::MENU => Some("MENU"),
            Self::SYMBOL => Some("SYMBOL"),
            _ => None,
        }
    }

    /// Whether this is one of the four five-way controller directions.
    pub fn is_five_way_direction(self) -> bool {
        matches!(
            self,
            Self::FIVE_WAY_UP | Self::FIVE_WAY_DOWN | Self::FIVE_WAY_LEFT | Self::FIVE_WAY_RIGHT
        )
    }

    /// Whether this is any five-way controller code, select included.
    pub fn is_five_way(self) -> bool {
        self.is_five_way_direction() || self == Self::FIVE_WAY_SELECT
    }

    /// Whether this is one of the dedicated page-turn buttons.
    pub fn is_page_turn(self) -> bool {
        matches!(
            self,
            Self::LEFT_HAND_SIDE_TURN_PAGE | Self::RIGHT_HAND_SIDE_TURN_PAGE | Self::TURN_PAGE_BACK
        )
    }
}

impl From<u16> for KeyCode {
    fn from(code: u16) -> Self {
        Self::from_u16(code)
    }
}

impl From<KeyCode> for u16 {
    fn from(code: KeyCode) -> Self {
        code.as_u16()
    }
}

/// Failed to parse a symbolic key code name.
#[derive(Debug, Clone, Error)]
#[error("unknown key code name: {name}")]
pub struct ParseKeyCodeError {
    name: String,
}

impl FromStr for KeyCode {
    type Err = ParseKeyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BACK" => Ok(Self::BACK),
            "FIVE_WAY_UP" => Ok(Self::FIVE_WAY_UP),
            "FIVE_WAY_DOWN" => Ok(Self::FIVE_WAY_DOWN),
            "FIVE_WAY_LEFT" => Ok(Self::FIVE_WAY_LEFT),
            "FIVE_WAY_RIGHT" => Ok(Self::FIVE_WAY_RIGHT),
            "FIVE_WAY_SELECT" => Ok(Self::FIVE_WAY_SELECT),
            "TEXT" | "FONT_SIZE" => Ok(Self::TEXT),
            "LEFT_HAND_SIDE_TURN_PAGE" => Ok(Self::LEFT_HAND_SIDE_TURN_PAGE),
            "RIGHT_HAND_SIDE_TURN_PAGE" => Ok(Self::RIGHT_HAND_SIDE_TURN_PAGE),
            "TURN_PAGE_BACK" => Ok(Self::TURN_PAGE_BACK),
            "MENU" => Ok(Self::MENU),
            "SYMBOL" => Ok(Self::SYMBOL),
            _ => Err(ParseKeyCodeError { name: s.to_owned() }),
        }
    }
}

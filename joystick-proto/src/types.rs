//! Core sample types: JoystickReading, SampleRecord.

/// One joystick module after scaling: push switch plus two centered axes.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickReading {
    /// Switch level as read from the pin (`true` serializes as `1`).
    pub switch: bool,
    pub horizontal: i32,
    pub vertical: i32,
}

impl JoystickReading {
    #[must_use]
    pub const fn new(switch: bool, horizontal: i32, vertical: i32) -> Self {
        Self {
            switch,
            horizontal,
            vertical,
        }
    }

    /// Switch low, both axes at center.
    pub const CENTERED: Self = Self {
        switch: false,
        horizontal: 0,
        vertical: 0,
    };
}

/// The record emitted once per sampling iteration.
///
/// Always serializes as the six keys `S1,H1,V1,S2,H2,V2` in that order:
/// `S`/`H`/`V` are switch, horizontal and vertical, `1`/`2` the joystick.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleRecord {
    pub joystick1: JoystickReading,
    pub joystick2: JoystickReading,
}

impl SampleRecord {
    #[must_use]
    pub const fn new(joystick1: JoystickReading, joystick2: JoystickReading) -> Self {
        Self {
            joystick1,
            joystick2,
        }
    }

    /// Both joysticks centered, both switches low.
    #[must_use]
    pub const fn centered() -> Self {
        Self {
            joystick1: JoystickReading::CENTERED,
            joystick2: JoystickReading::CENTERED,
        }
    }

    /// Field values in serialization order, with the key each is written under.
    #[must_use]
    pub fn fields(&self) -> [(Key, i32); 6] {
        [
            (Key::S1, i32::from(self.joystick1.switch)),
            (Key::H1, self.joystick1.horizontal),
            (Key::V1, self.joystick1.vertical),
            (Key::S2, i32::from(self.joystick2.switch)),
            (Key::H2, self.joystick2.horizontal),
            (Key::V2, self.joystick2.vertical),
        ]
    }
}

/// Record keys, declared in wire order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    S1,
    H1,
    V1,
    S2,
    H2,
    V2,
}

impl Key {
    /// All keys in the order they appear on the wire.
    pub const ALL: [Key; 6] = [Key::S1, Key::H1, Key::V1, Key::S2, Key::H2, Key::V2];

    /// The key text without quotes.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Key::S1 => "S1",
            Key::H1 => "H1",
            Key::V1 => "V1",
            Key::S2 => "S2",
            Key::H2 => "H2",
            Key::V2 => "V2",
        }
    }

    /// Whether the key carries a switch level rather than an axis value.
    #[inline]
    #[must_use]
    pub const fn is_switch(self) -> bool {
        matches!(self, Key::S1 | Key::S2)
    }
}

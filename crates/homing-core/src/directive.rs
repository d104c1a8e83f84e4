//! Single-step move directives.

use crate::displacement::Displacement;
use crate::error::UnknownDirective;
use std::fmt;

/// Cardinal move instruction, parsed from one character of input.
///
/// The alphabet is case-sensitive: only `'L'`, `'R'`, `'U'` and `'D'` are
/// recognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Directive {
    /// Move one unit along -x (`'L'`).
    Left = b'L',
    /// Move one unit along +x (`'R'`).
    Right = b'R',
    /// Move one unit along +y (`'U'`).
    Up = b'U',
    /// Move one unit along -y (`'D'`).
    Down = b'D',
}

impl Directive {
    /// All four directives, in `L R U D` order.
    pub const ALL: [Directive; 4] = [
        Directive::Left,
        Directive::Right,
        Directive::Up,
        Directive::Down,
    ];

    /// Parse a character, returning `None` if it is outside the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use homing_core::Directive;
    ///
    /// assert_eq!(Directive::from_char('U'), Some(Directive::Up));
    /// assert_eq!(Directive::from_char('u'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Directive::Left),
            'R' => Some(Directive::Right),
            'U' => Some(Directive::Up),
            'D' => Some(Directive::Down),
            _ => None,
        }
    }

    /// The character this directive is parsed from.
    pub fn as_char(self) -> char {
        self as u8 as char
    }

    /// Unit vector for this directive.
    pub fn offset(self) -> Displacement {
        match self {
            Directive::Left => Displacement::new(-1, 0),
            Directive::Right => Displacement::new(1, 0),
            Directive::Up => Displacement::new(0, 1),
            Directive::Down => Displacement::new(0, -1),
        }
    }

    /// The directive that undoes this one.
    pub fn opposite(self) -> Self {
        match self {
            Directive::Left => Directive::Right,
            Directive::Right => Directive::Left,
            Directive::Up => Directive::Down,
            Directive::Down => Directive::Up,
        }
    }
}

impl TryFrom<char> for Directive {
    type Error = UnknownDirective;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Directive::from_char(c).ok_or(UnknownDirective(c))
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Commands that can be sent to the menu engine
///
/// One command per front-panel button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Previous entry, or step the edited channel up
    Up,
    /// Next entry, or step the edited channel down
    Down,
    /// Leave the current submenu, or hand `left` to the option
    Left,
    /// Same as select while navigating, otherwise hand `right` to the option
    Right,
    /// Enter, invoke or start adjusting the current entry
    Select,
}

impl Command {
    pub const ALL: [Self; 5] = [Self::Up, Self::Down, Self::Left, Self::Right, Self::Select];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Select => "select",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.as_str() == s)
    }
}

use std::fmt;

/// What occupies a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Red,
    Yellow,
}

impl CellState {
    /// Single-character label used by the text renderer.
    pub fn label(self) -> char {
        match self {
            CellState::Empty => 'O',
            CellState::Red => 'R',
            CellState::Yellow => 'Y',
        }
    }

    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A player's token colour. Within one game it doubles as the player's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Yellow,
}

impl Color {
    /// Get the opposing colour
    pub fn other(self) -> Color {
        match self {
            Color::Red => Color::Yellow,
            Color::Yellow => Color::Red,
        }
    }

    /// Convert colour to cell type
    pub fn to_cell(self) -> CellState {
        match self {
            Color::Red => CellState::Red,
            Color::Yellow => CellState::Yellow,
        }
    }

    /// Get colour name for display
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell_is_empty() {
        assert_eq!(CellState::default(), CellState::Empty);
        assert!(CellState::default().is_empty());
        assert!(!CellState::Red.is_empty());
    }

    #[test]
    fn test_cell_labels() {
        assert_eq!(CellState::Empty.label(), 'O');
        assert_eq!(CellState::Red.label(), 'R');
        assert_eq!(CellState::Yellow.label(), 'Y');
    }

    #[test]
    fn test_other_color() {
        assert_eq!(Color::Red.other(), Color::Yellow);
        assert_eq!(Color::Yellow.other(), Color::Red);
    }

    #[test]
    fn test_color_to_cell() {
        assert_eq!(Color::Red.to_cell(), CellState::Red);
        assert_eq!(Color::Yellow.to_cell(), CellState::Yellow);
    }

    #[test]
    fn test_color_display_uses_cell_label() {
        assert_eq!(Color::Red.to_string(), "R");
        assert_eq!(Color::Yellow.to_string(), "Y");
        assert_eq!(Color::Yellow.name(), "Yellow");
    }
}

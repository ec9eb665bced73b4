use serde::Serialize;

/// Raw byte stored for an empty cell on the C side of the boundary.
pub const EMPTY_RAW: u8 = b' ';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Disk {
    Player1,
    Player2,
}

impl Disk {
    /// Get the other disk
    pub fn other(self) -> Disk {
        match self {
            Disk::Player1 => Disk::Player2,
            Disk::Player2 => Disk::Player1,
        }
    }

    /// Get disk name for display
    pub fn name(self) -> &'static str {
        match self {
            Disk::Player1 => "Player 1",
            Disk::Player2 => "Player 2",
        }
    }

    /// Byte used for this disk across the C ABI
    pub fn to_raw(self) -> u8 {
        match self {
            Disk::Player1 => b'R',
            Disk::Player2 => b'B',
        }
    }

    /// Decode a raw disk byte. The empty marker and unknown bytes are not disks.
    pub fn from_raw(raw: u8) -> Option<Disk> {
        match raw {
            b'R' => Some(Disk::Player1),
            b'B' => Some(Disk::Player2),
            _ => None,
        }
    }

    /// Map a 1-based player number to its disk.
    pub fn from_player_number(number: u8) -> Option<Disk> {
        match number {
            1 => Some(Disk::Player1),
            2 => Some(Disk::Player2),
            _ => None,
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Disk),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn to_raw(self) -> u8 {
        match self {
            Cell::Empty => EMPTY_RAW,
            Cell::Occupied(disk) => disk.to_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_disk() {
        assert_eq!(Disk::Player1.other(), Disk::Player2);
        assert_eq!(Disk::Player2.other(), Disk::Player1);
    }

    #[test]
    fn test_disk_name() {
        assert_eq!(Disk::Player1.name(), "Player 1");
        assert_eq!(Disk::Player2.name(), "Player 2");
    }

    #[test]
    fn test_raw_encoding() {
        assert_eq!(Disk::Player1.to_raw(), 82);
        assert_eq!(Disk::Player2.to_raw(), 66);
        assert_eq!(Cell::Empty.to_raw(), 32);
        assert_eq!(Disk::from_raw(82), Some(Disk::Player1));
        assert_eq!(Disk::from_raw(66), Some(Disk::Player2));
    }

    #[test]
    fn test_unknown_raw_is_not_a_disk() {
        assert_eq!(Disk::from_raw(EMPTY_RAW), None);
        assert_eq!(Disk::from_raw(0), None);
        assert_eq!(Disk::from_raw(b'r'), None);
    }

    #[test]
    fn test_from_player_number() {
        assert_eq!(Disk::from_player_number(1), Some(Disk::Player1));
        assert_eq!(Disk::from_player_number(2), Some(Disk::Player2));
        assert_eq!(Disk::from_player_number(0), None);
        assert_eq!(Disk::from_player_number(3), None);
    }

    #[test]
    fn test_cell_raw() {
        assert!(Cell::default().is_empty());
        assert!(!Cell::Occupied(Disk::Player2).is_empty());
        assert_eq!(Cell::Occupied(Disk::Player2).to_raw(), b'B');
    }
}

use serde::{Deserialize, Serialize};

pub const ROWS: usize = 6;
pub const COLUMNS: usize = 7;

/// Rows top to bottom, `ROWS` of them, each `COLUMNS` wide.
pub type Grid = [[Cell; COLUMNS]; ROWS];

const PLAYER_MARK: &str = "X";
const CPU_MARK: &str = "O";
const EMPTY_MARK: &str = " ";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Cell {
    #[default]
    Empty,
    Player,
    Cpu,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

// Anything the server sends that is not a known mark is an unset cell.
impl From<String> for Cell {
    fn from(mark: String) -> Self {
        match mark.as_str() {
            PLAYER_MARK => Cell::Player,
            CPU_MARK => Cell::Cpu,
            _ => Cell::Empty,
        }
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => EMPTY_MARK,
            Cell::Player => PLAYER_MARK,
            Cell::Cpu => CPU_MARK,
        }
        .to_string()
    }
}

pub fn empty_grid() -> Grid {
    [[Cell::Empty; COLUMNS]; ROWS]
}

/// Iterates every position as `(row, column, cell)`, row 0 first.
pub fn cells(grid: &Grid) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
    grid.iter().enumerate().flat_map(|(row, line)| {
        line.iter()
            .enumerate()
            .map(move |(column, &cell)| (row, column, cell))
    })
}

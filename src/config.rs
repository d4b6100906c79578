use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// Fleet in placement order. Every board holds exactly these ships.
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Aircraft Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Submarine", 3),
    ShipType::new("Cruiser", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in a full fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

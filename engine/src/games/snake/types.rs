#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn up(self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    pub const fn down(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    pub const fn left(self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    pub const fn right(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    /// One cell towards `direction`, not wrapped.
    pub const fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => self.up(),
            Direction::Down => self.down(),
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Accepts direction words and browser arrow key names. Anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        match value {
            "ArrowUp" => return Some(Direction::Up),
            "ArrowDown" => return Some(Direction::Down),
            "ArrowLeft" => return Some(Direction::Left),
            "ArrowRight" => return Some(Direction::Right),
            _ => {}
        }

        match value.to_ascii_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Head,
    Body,
    Food,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub state: CellState,
    pub coord: Point,
}

impl Cell {
    pub const fn new(state: CellState, coord: Point) -> Self {
        Self { state, coord }
    }
}

/// Dimensions of the torus. Both sides are validated on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    width: i32,
    height: i32,
}

impl FieldSize {
    pub const MIN_WIDTH: i32 = 3;

    pub fn new(width: i32, height: i32) -> Result<Self, String> {
        if width <= 0 {
            return Err("Field width must be positive".to_string());
        }
        if height <= 0 {
            return Err("Field height must be positive".to_string());
        }
        if width < Self::MIN_WIDTH {
            return Err(format!(
                "Field width must be at least {} to fit the initial snake",
                Self::MIN_WIDTH
            ));
        }
        // Needs at least one free cell for food beside the initial snake.
        if width as i64 * height as i64 <= 3 {
            return Err("Field must have room for food next to the initial snake".to_string());
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, point: Point) -> bool {
        (0..self.width).contains(&point.x) && (0..self.height).contains(&point.y)
    }

    /// Maps a point at most one cell outside the field back onto the torus.
    /// x is checked before y; a single step only ever leaves on one axis.
    pub fn wrap(&self, point: Point) -> Point {
        if point.x < 0 {
            Point::new(self.width - 1, point.y)
        } else if point.x >= self.width {
            Point::new(0, point.y)
        } else if point.y < 0 {
            Point::new(point.x, self.height - 1)
        } else if point.y >= self.height {
            Point::new(point.x, 0)
        } else {
            point
        }
    }
}

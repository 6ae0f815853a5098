#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,  // +1
    Backward, // -1
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Trigger {
    Next,             // "next" button clicked
    Prev,             // "previous" button clicked
    Indicator(usize), // indicator dot at this position clicked
    Tick,             // auto-advance period elapsed
}

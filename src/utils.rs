use super::*;

/// One of the six faces of the cube. Every color is named after the face it
/// solves onto, so the same type doubles as the color domain.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Face {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

impl Face {
    pub const FACE_SET: [Face; 6] = [Up, Right, Front, Down, Left, Back];

    pub fn symbol(self) -> char {
        match self {
            Up => 'U',
            Right => 'R',
            Front => 'F',
            Down => 'D',
            Left => 'L',
            Back => 'B',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Face> {
        Self::FACE_SET.iter().copied().find(|f| f.symbol() == symbol)
    }

    pub fn parse(s: &str) -> Result<Face, CubeError> {
        let mut chars = s.trim().chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => Face::from_symbol(c.to_ascii_uppercase()),
            _ => None,
        }
        .ok_or_else(|| CubeError::UnknownFace(s.to_string()))
    }

    pub fn label(self) -> &'static str {
        match self {
            Up => "Up (White)",
            Right => "Right (Red)",
            Front => "Front (Green)",
            Down => "Down (Yellow)",
            Left => "Left (Blue)",
            Back => "Back (Orange)",
        }
    }

    fn paint(self, cell: &str) -> ColoredString {
        match self {
            Up => cell.on_bright_white(),
            Right => cell.on_bright_red(),
            Front => cell.on_bright_green(),
            Down => cell.on_bright_yellow(),
            Left => cell.on_bright_blue(),
            Back => cell.on_truecolor(255, 128, 0),
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The color held by one facelet. `Foreign` only comes from untrusted input
/// (facelet strings, snapshot files) and never passes validation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Sticker {
    Painted(Face),
    Foreign(char),
}

impl Sticker {
    pub fn from_symbol(symbol: char) -> Self {
        match Face::from_symbol(symbol) {
            Some(face) => Sticker::Painted(face),
            None => Sticker::Foreign(symbol),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Sticker::Painted(face) => face.symbol(),
            Sticker::Foreign(c) => c,
        }
    }

    pub fn color(self) -> Option<Face> {
        match self {
            Sticker::Painted(face) => Some(face),
            Sticker::Foreign(_) => None,
        }
    }
}

impl From<Face> for Sticker {
    fn from(face: Face) -> Self {
        Sticker::Painted(face)
    }
}

impl std::fmt::Display for Sticker {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cell = match self {
            Sticker::Painted(face) => face.paint("  "),
            Sticker::Foreign(c) => format!("{:<2}", c).bright_white().on_black(),
        };
        write!(f, "{}", cell)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rotation {
    Cw,
    Ccw,
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Ccw = self {
            return write!(f, "'");
        }
        Ok(())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Move(pub Face, pub Rotation);

impl Move {
    pub fn notation(&self) -> String {
        format!("{}{}", self.0, self.1)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, fm: &mut std::fmt::Formatter) -> std::fmt::Result {
        let Move(face, rot) = self;

        write!(
            fm,
            "{}{}",
            face.to_string().bright_yellow(),
            rot.to_string().bright_red()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_order() {
        let symbols: String = Face::FACE_SET.iter().map(|f| f.symbol()).collect();

        assert_eq!(symbols, "URFDLB");
        for (i, face) in Face::FACE_SET.iter().enumerate() {
            assert_eq!(*face as usize, i);
        }
    }

    #[test]
    fn test_symbol_lookup() {
        for face in Face::FACE_SET {
            assert_eq!(Face::from_symbol(face.symbol()), Some(face));
        }
        assert_eq!(Face::from_symbol('X'), None);
        assert_eq!(Face::from_symbol('u'), None);
    }

    #[test]
    fn test_parse_face() {
        assert_eq!(Face::parse("F"), Ok(Front));
        assert_eq!(Face::parse("b"), Ok(Back));
        assert_eq!(
            Face::parse("UR"),
            Err(CubeError::UnknownFace("UR".to_string()))
        );
        assert!(Face::parse("").is_err());
    }

    #[test]
    fn test_foreign_sticker() {
        assert_eq!(Sticker::from_symbol('L'), Sticker::Painted(Left));
        assert_eq!(Sticker::from_symbol('x'), Sticker::Foreign('x'));
        assert_eq!(Sticker::Foreign('x').color(), None);
        assert_eq!(Sticker::Foreign('x').symbol(), 'x');
    }

    #[test]
    fn test_move_notation() {
        assert_eq!(Move(Right, Cw).notation(), "R");
        assert_eq!(Move(Up, Ccw).notation(), "U'");
    }
}

use super::*;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SolveResult {
    Solved {
        solution: &'static str,
    },
    Invalid {
        error: ValidationError,
    },
    Unsolved {
        solution: &'static str,
        moves: &'static [Move],
    },
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved { .. })
    }

    pub fn solution(&self) -> Option<&'static str> {
        match self {
            SolveResult::Solved { solution } | SolveResult::Unsolved { solution, .. } => {
                Some(*solution)
            }
            SolveResult::Invalid { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            SolveResult::Invalid { error } => Some(error),
            _ => None,
        }
    }

    pub fn moves(&self) -> &'static [Move] {
        match self {
            SolveResult::Unsolved { moves, .. } => *moves,
            _ => &[],
        }
    }
}

impl std::fmt::Display for SolveResult {
    fn fmt(&self, fm: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SolveResult::Solved { solution } => write!(fm, "{}", solution.bright_green()),
            SolveResult::Invalid { error } => {
                write!(fm, "{}{}", "ERROR: ".bright_red(), error)
            }
            SolveResult::Unsolved { solution, moves } => {
                writeln!(fm, "{}", solution)?;
                write!(fm, "\n{}", "MOVES: ".bright_green())?;
                for mv in moves.iter() {
                    write!(fm, "{} ", mv)?;
                }
                Ok(())
            }
        }
    }
}

pub struct Advisor<'a> {
    cube: &'a CubeState,
    size: usize,
}

impl<'a> Advisor<'a> {
    pub const SOLVED: &'static str = "Cube is already solved!";

    pub const GUIDE_2X2: &'static str = "Basic 2x2 solving steps:\n\
        1. Solve the white face\n\
        2. Orient and permute the remaining pieces\n\
        \n\
        Note: This is a simplified solver. For optimal solutions, use dedicated 2x2 solving methods.";

    pub const GUIDE_3X3: &'static str = "Basic 3x3 solving steps:\n\
        1. Solve the white face\n\
        2. Solve the middle layer\n\
        3. Orient the remaining pieces\n\
        4. Permute the pieces\n\
        \n\
        Note: This is a simplified solver. For optimal solutions, use dedicated 3x3 solving methods.";

    pub const EXAMPLE_MOVES: [Move; 4] = [
        Move(Right, Cw),
        Move(Up, Cw),
        Move(Right, Ccw),
        Move(Up, Ccw),
    ];

    pub fn new(cube: &'a CubeState, size: usize) -> Advisor<'a> {
        Advisor { cube, size }
    }

    pub fn solve(&self) -> SolveResult {
        if self.cube.is_solved() {
            debug!("cube is solved, skipping validation");
            return SolveResult::Solved {
                solution: Self::SOLVED,
            };
        }
        if let Err(error) = Validator::new(self.cube, self.size).validate() {
            return SolveResult::Invalid { error };
        }
        debug!("cube is valid but unsolved, handing out the {}x{} guide", self.size, self.size);
        SolveResult::Unsolved {
            solution: if self.size == 2 {
                Self::GUIDE_2X2
            } else {
                Self::GUIDE_3X3
            },
            moves: &Self::EXAMPLE_MOVES,
        }
    }
}

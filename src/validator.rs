use super::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid sticker color: {value} (face {face}, position {index})")]
    IllegalSticker { value: char, face: Face, index: usize },
    #[error("Color {color} appears {count} times, but must appear exactly {expected} times")]
    ColorCountMismatch {
        color: Face,
        count: usize,
        expected: usize,
    },
}

pub type Validation = Result<(), ValidationError>;

// Color balance only, piece permutation and parity are not looked at.
pub struct Validator<'a> {
    cube: &'a CubeState,
    size: usize,
}

impl<'a> Validator<'a> {
    pub fn new(cube: &'a CubeState, size: usize) -> Validator<'a> {
        Validator { cube, size }
    }

    fn count_colors(&self) -> Result<[usize; 6], ValidationError> {
        let mut counts = [0_usize; 6];

        for (face, index, sticker) in self.cube.stickers() {
            match sticker {
                Sticker::Painted(color) => counts[color as usize] += 1,
                Sticker::Foreign(value) => {
                    return Err(ValidationError::IllegalSticker { value, face, index })
                }
            }
        }
        Ok(counts)
    }

    pub fn validate(&self) -> Validation {
        let expected = self.size.saturating_mul(self.size);
        let counts = self.count_colors()?;

        // first mismatch in FACE_SET order wins
        let result = match Face::FACE_SET
            .iter()
            .find(|color| counts[**color as usize] != expected)
        {
            Some(color) => Err(ValidationError::ColorCountMismatch {
                color: *color,
                count: counts[*color as usize],
                expected,
            }),
            None => Ok(()),
        };
        debug!("validated {}x{} cube: {:?}", self.size, self.size, result);
        result
    }
}

use super::*;
use rand::Rng;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("Facelet string has {0} stickers, expected six square faces")]
    BadFaceletCount(usize),
    #[error("Face \"{0}\" is not recognized")]
    UnknownFace(String),
    #[error("Sticker {index} is out of range for face {face} ({len} stickers)")]
    IndexOutOfRange { face: Face, index: usize, len: usize },
    #[error("Edit \"{0}\" is not of the form FACE:IDX:COLOR")]
    BadEdit(String),
}

/// Sticker layout of a whole cube, one row-major sequence per face, indexed
/// by `Face as usize`. The shape is the caller's business: nothing here
/// forces every face to hold `size * size` stickers.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CubeState {
    faces: [Vec<Sticker>; 6],
}

impl std::fmt::Display for CubeState {
    fn fmt(&self, fm: &mut std::fmt::Formatter) -> std::fmt::Result {
        let width = Self::side_of(self.faces[Up as usize].len()).max(1);
        let indent = " ".repeat(2 * width + 3);
        let mut result = String::with_capacity(0x100);

        for line in self.faces[Up as usize].chunks(width) {
            result.push_str(&format!("{}{}\n", indent, Self::row_2_str(line)));
        }
        result.push('\n');
        let [left, front, right, back] =
            [Left, Front, Right, Back].map(|f| self.faces[f as usize].chunks(width));
        for (((l, f), r), b) in left.zip(front).zip(right).zip(back) {
            result.push_str(&format!(
                " {}  {}  {}  {}\n",
                Self::row_2_str(l),
                Self::row_2_str(f),
                Self::row_2_str(r),
                Self::row_2_str(b),
            ));
        }
        result.push('\n');
        for line in self.faces[Down as usize].chunks(width) {
            result.push_str(&format!("{}{}\n", indent, Self::row_2_str(line)));
        }
        write!(fm, "{}", result)
    }
}

impl CubeState {
    pub fn solved(size: usize) -> Self {
        let len = size.saturating_mul(size);

        Self {
            faces: Face::FACE_SET.map(|face| vec![Sticker::Painted(face); len]),
        }
    }

    pub fn from_faces(faces: [Vec<Sticker>; 6]) -> Self {
        Self { faces }
    }

    /// Reads a URFDLB facelet string. Whitespace is skipped and the size is
    /// inferred from the sticker count. Unknown symbols are kept as foreign
    /// stickers for the validator to report.
    pub fn parse_facelets(s: &str) -> Result<(Self, usize), CubeError> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        let len = symbols.len() / 6;
        let size = Self::side_of(len);

        if symbols.is_empty() || symbols.len() % 6 != 0 || size * size != len {
            return Err(CubeError::BadFaceletCount(symbols.len()));
        }
        let mut chunks = symbols.chunks(len);
        let faces = Face::FACE_SET.map(|_| {
            chunks
                .next()
                .unwrap_or_default()
                .iter()
                .map(|c| Sticker::from_symbol(*c))
                .collect()
        });
        Ok((Self { faces }, size))
    }

    pub fn to_facelets(&self) -> String {
        self.faces.iter().flatten().map(|s| s.symbol()).collect()
    }

    pub fn face(&self, face: Face) -> &[Sticker] {
        &self.faces[face as usize]
    }

    pub fn stickers(&self) -> impl Iterator<Item = (Face, usize, Sticker)> + '_ {
        Face::FACE_SET.into_iter().flat_map(move |face| {
            self.faces[face as usize]
                .iter()
                .enumerate()
                .map(move |(idx, sticker)| (face, idx, *sticker))
        })
    }

    pub fn is_solved(&self) -> bool {
        self.stickers()
            .all(|(face, _, sticker)| sticker == Sticker::Painted(face))
    }

    pub fn set_sticker(
        &mut self,
        face: Face,
        index: usize,
        sticker: Sticker,
    ) -> Result<Sticker, CubeError> {
        let stickers = &mut self.faces[face as usize];
        let len = stickers.len();
        let slot = stickers
            .get_mut(index)
            .ok_or(CubeError::IndexOutOfRange { face, index, len })?;

        trace!("{}[{}]: {} -> {}", face, index, slot.symbol(), sticker.symbol());
        Ok(std::mem::replace(slot, sticker))
    }

    pub fn scramble<R: Rng>(&mut self, swaps: usize, rng: &mut R) {
        let slots: Vec<(usize, usize)> = (0..6)
            .flat_map(|f| (0..self.faces[f].len()).map(move |i| (f, i)))
            .collect();

        if slots.len() < 2 {
            return;
        }
        for _ in 0..swaps {
            let (fa, ia) = slots[rng.gen_range(0..slots.len())];
            let (fb, ib) = slots[rng.gen_range(0..slots.len())];
            let tmp = self.faces[fa][ia];

            self.faces[fa][ia] = self.faces[fb][ib];
            self.faces[fb][ib] = tmp;
        }
        debug!("scrambled cube with {} swaps", swaps);
    }

    fn side_of(len: usize) -> usize {
        (0..=len).find(|n| n * n >= len).unwrap_or(len)
    }

    fn row_2_str(row: &[Sticker]) -> String {
        row.iter().map(|s| s.to_string()).collect()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Edit {
    pub face: Face,
    pub index: usize,
    pub color: Face,
}

impl Edit {
    pub fn parse(s: &str) -> Result<Edit, CubeError> {
        let parts: Vec<&str> = s.split(':').collect();

        match parts[..] {
            [face, index, color] => Ok(Edit {
                face: Face::parse(face)?,
                index: index
                    .trim()
                    .parse()
                    .map_err(|_| CubeError::BadEdit(s.to_string()))?,
                color: Face::parse(color)?,
            }),
            _ => Err(CubeError::BadEdit(s.to_string())),
        }
    }
}

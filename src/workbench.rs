use super::*;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Workbench {
    size: usize,
    cube: CubeState,
    selected: Option<(Face, usize)>,
    outcome: Option<SolveResult>,
    show_labels: bool,
}

impl std::fmt::Display for Workbench {
    fn fmt(&self, fm: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fm, "{}", self.cube)?;
        if self.show_labels {
            // label what the faces actually hold, whatever size we were handed
            let len = self.cube.face(Up).len();
            writeln!(fm)?;
            for row in (0..len)
                .map(|idx| format!("{:>2}:{:<12}", idx, position_label(self.size, idx)))
                .collect::<Vec<String>>()
                .chunks(self.size.clamp(1, len.max(1)))
            {
                writeln!(fm, " {}", row.concat())?;
            }
        }
        if let Some((face, idx)) = self.selected {
            writeln!(
                fm,
                "\n{}{} {}",
                "SELECTED: ".bright_green(),
                face.label(),
                position_label(self.size, idx)
            )?;
        }
        Ok(())
    }
}

impl Workbench {
    pub fn new(size: usize) -> Self {
        Self::from_cube(CubeState::solved(size), size)
    }

    pub fn from_cube(cube: CubeState, size: usize) -> Self {
        Self {
            size,
            cube,
            selected: None,
            outcome: None,
            show_labels: false,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cube(&self) -> &CubeState {
        &self.cube
    }

    pub fn selected(&self) -> Option<(Face, usize)> {
        self.selected
    }

    pub fn outcome(&self) -> Option<&SolveResult> {
        self.outcome.as_ref()
    }

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    fn clear(&mut self) {
        self.selected = None;
        self.outcome = None;
    }

    pub fn reset(&mut self) {
        self.cube = CubeState::solved(self.size);
        self.clear();
    }

    pub fn resize(&mut self, size: usize) {
        debug!("switching to a {}x{} cube", size, size);
        self.size = size;
        self.reset();
    }

    pub fn select(&mut self, face: Face, index: usize) -> Result<(), CubeError> {
        let len = self.cube.face(face).len();

        if index >= len {
            return Err(CubeError::IndexOutOfRange { face, index, len });
        }
        self.selected = Some((face, index));
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn paint(&mut self, color: Face) -> Result<bool, CubeError> {
        let (face, index) = match self.selected {
            Some(sel) => sel,
            None => return Ok(false),
        };

        self.cube.set_sticker(face, index, Sticker::Painted(color))?;
        self.clear();
        Ok(true)
    }

    pub fn apply(&mut self, edit: Edit) -> Result<(), CubeError> {
        self.select(edit.face, edit.index)?;
        self.paint(edit.color)?;
        Ok(())
    }

    pub fn scramble<R: Rng>(&mut self, swaps: usize, rng: &mut R) {
        self.cube.scramble(swaps, rng);
        self.clear();
    }

    pub fn toggle_labels(&mut self) {
        self.show_labels = !self.show_labels;
    }

    pub fn solve(&mut self) -> &SolveResult {
        self.outcome
            .insert(Advisor::new(&self.cube, self.size).solve())
    }
}

pub fn position_label(size: usize, index: usize) -> String {
    const LABELS_2X2: [&str; 4] = ["Top-Left", "Top-Right", "Bottom-Left", "Bottom-Right"];
    const LABELS_3X3: [&str; 9] = ["TL", "TC", "TR", "ML", "C", "MR", "BL", "BC", "BR"];

    match size {
        2 if index < 4 => LABELS_2X2[index].to_string(),
        3 if index < 9 => LABELS_3X3[index].to_string(),
        0 => format!("#{}", index),
        _ => format!("r{}c{}", index / size, index % size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_bench() {
        let bench = Workbench::new(2);

        assert_eq!(bench.size(), 2);
        assert_eq!(bench.cube(), &CubeState::solved(2));
        assert_eq!(bench.selected(), None);
        assert!(bench.outcome().is_none());
    }

    #[test]
    fn test_paint_selected() {
        let mut bench = Workbench::new(2);

        assert_eq!(bench.paint(Right), Ok(false));
        bench.select(Up, 0).unwrap();
        assert_eq!(bench.selected(), Some((Up, 0)));
        assert_eq!(bench.paint(Right), Ok(true));
        assert_eq!(bench.selected(), None);
        assert_eq!(bench.cube().face(Up)[0], Sticker::Painted(Right));
        assert_eq!(bench.cube().face(Up).len(), 4);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut bench = Workbench::new(3);

        assert_eq!(
            bench.select(Left, 9),
            Err(CubeError::IndexOutOfRange {
                face: Left,
                index: 9,
                len: 9
            })
        );
        assert_eq!(bench.selected(), None);
    }

    #[test]
    fn test_edit_clears_outcome() {
        let mut bench = Workbench::new(2);

        assert!(bench.solve().is_solved());
        assert!(bench.outcome().is_some());
        bench
            .apply(Edit {
                face: Front,
                index: 1,
                color: Back,
            })
            .unwrap();
        assert!(bench.outcome().is_none());
        assert_eq!(
            bench.solve().error().map(|e| e.to_string()).as_deref(),
            Some("Color F appears 3 times, but must appear exactly 4 times")
        );
    }

    #[test]
    fn test_resize_replaces_cube() {
        let mut bench = Workbench::new(2);

        bench.select(Down, 3).unwrap();
        bench.paint(Up).unwrap();
        bench.select(Down, 2).unwrap();
        bench.solve();
        bench.resize(3);
        assert_eq!(bench.size(), 3);
        assert_eq!(bench.cube(), &CubeState::solved(3));
        assert_eq!(bench.selected(), None);
        assert!(bench.outcome().is_none());
    }

    #[test]
    fn test_reset() {
        let mut bench = Workbench::new(3);

        bench.scramble(30, &mut StdRng::seed_from_u64(1));
        bench.reset();
        assert!(bench.cube().is_solved());
        assert!(bench.solve().is_solved());
    }

    #[test]
    fn test_scrambled_bench_is_valid() {
        let mut bench = Workbench::new(3);

        bench.scramble(200, &mut StdRng::seed_from_u64(99));
        match bench.solve() {
            SolveResult::Unsolved { solution, moves } => {
                assert_eq!(*solution, Advisor::GUIDE_3X3);
                assert_eq!(moves.len(), 4);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_position_labels() {
        assert_eq!(position_label(2, 0), "Top-Left");
        assert_eq!(position_label(2, 3), "Bottom-Right");
        assert_eq!(position_label(3, 4), "C");
        assert_eq!(position_label(4, 5), "r1c1");
    }

    #[test]
    fn test_render_selection_and_labels() {
        colored::control::set_override(false);
        let mut bench = Workbench::new(2);

        bench.select(Front, 3).unwrap();
        assert!(!bench.to_string().contains("Top-Left"));
        bench.toggle_labels();
        let view = bench.to_string();
        assert!(view.contains("SELECTED: Front (Green) Bottom-Right"));
        assert!(view.contains(" 0:Top-Left     1:Top-Right"));
        assert!(view.contains(" 2:Bottom-Left  3:Bottom-Right"));

        bench.deselect();
        assert_eq!(bench.selected(), None);
        assert!(!bench.to_string().contains("SELECTED"));
    }

    #[test]
    fn test_labels_follow_faces_not_size() {
        colored::control::set_override(false);
        let mut bench = Workbench::from_cube(CubeState::solved(2), 1 << 32);

        bench.toggle_labels();
        let view = bench.to_string();
        assert_eq!(view.matches(":r0c").count(), 4);
    }

    #[test]
    fn test_toggle_labels() {
        let mut bench = Workbench::new(2);

        assert!(!bench.show_labels());
        bench.toggle_labels();
        assert!(bench.show_labels());
    }
}

use crate::error::CoreError;

/// Grille de caractères row-major, `cols × rows`.
///
/// # Example
/// ```
/// use ring_core::grid::CharGrid;
/// let mut grid = CharGrid::new(4, 2).unwrap();
/// grid.set(3, 1, '#');
/// assert_eq!(grid.get(3, 1), '#');
/// assert_eq!(grid.to_text(), "    \n   #\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGrid {
    /// Flat array of glyphs, row-major.
    pub cells: Vec<char>,
    /// Width in characters.
    pub cols: u32,
    /// Height in characters.
    pub rows: u32,
}

impl CharGrid {
    /// Crée une grille remplie d'espaces.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if `cols` or `rows` is zero or
    /// the grid would not fit in memory.
    pub fn new(cols: u32, rows: u32) -> Result<Self, CoreError> {
        CoreError::check_surface(cols, rows, std::mem::size_of::<char>() as u64)?;
        Ok(Self {
            cells: vec![' '; cols as usize * rows as usize],
            cols,
            rows,
        })
    }

    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, ch: char) {
        let idx = self.index(x, y);
        self.cells[idx] = ch;
    }

    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> char {
        self.cells[self.index(x, y)]
    }

    /// Iterate over the lines, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks_exact(self.cols as usize)
    }

    /// Texte final : une ligne par rangée, chacune terminée par `\n`.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.rows as usize);
        for line in self.lines() {
            out.extend(line);
            out.push('\n');
        }
        out
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.cols && y < self.rows, "cell out of bounds");
        y as usize * self.cols as usize + x as usize
    }
}

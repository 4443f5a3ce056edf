use super::metadata::Version;

// Column of the vertical timing pattern, skipped by the placement walk
const VERT_TIMING_COL: i16 = 6;

/// Next cell of the data placement walk after `(r, c)` in a symbol of width `w`.
///
/// The walk moves through 2-column lanes from the right edge, visiting the
/// right column of a lane before the left one. Right of the vertical timing
/// column the lanes alternate up and down, starting upward from the bottom
/// right corner. Left of it the lanes run down, up, down.
pub fn next_move(r: i16, c: i16, w: i16) -> (i16, i16) {
    let (is_right, upward) = if c > VERT_TIMING_COL {
        (c % 2 == 0, ((c + 1) / 2) % 2 == 0)
    } else {
        (c % 2 == 1, c == 2)
    };

    if is_right {
        return (r, c - 1);
    }
    match upward {
        true if r > 0 => (r - 1, c + 1),
        true if c == VERT_TIMING_COL + 1 => (0, c - 2),
        true => (0, c - 1),
        false if r < w - 1 => (r + 1, c + 1),
        false => (w - 1, c - 1),
    }
}

// Iterator for placing data in encoding region of QR
//------------------------------------------------------------------------------

pub struct EncRegionIter {
    r: i16,
    c: i16,
    width: i16,
}

impl EncRegionIter {
    pub const fn new(version: Version) -> Self {
        let w = version.width() as i16;
        Self { r: w - 1, c: w - 1, width: w }
    }
}

impl Iterator for EncRegionIter {
    type Item = (i16, i16);
    fn next(&mut self) -> Option<Self::Item> {
        if self.c < 0 {
            return None;
        }
        let res = (self.r, self.c);
        (self.r, self.c) = next_move(self.r, self.c, self.width);
        Some(res)
    }
}

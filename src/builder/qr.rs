use std::ops::Deref;

use crate::common::bit_utils::BitStream;
use crate::common::iter::EncRegionIter;
use crate::common::mask::MaskPattern;
use crate::common::metadata::{format_info, Color, ECLevel, Metadata, Version};
use crate::common::version_db::*;

/// A single cell of the symbol, tagged with the region that owns it.
///
/// Everything other than `Empty` and `Data` is reserved and never touched by
/// the payload writer or by masking.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Version(Color),
    Format(Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty => &Color::Light,
            Module::Func(clr) | Module::Version(clr) | Module::Format(clr) | Module::Data(clr) => clr,
        }
    }
}

/// A QR symbol as a square grid of modules, row-major.
#[derive(Debug, Clone)]
pub struct QR {
    grid: Vec<Module>,
    width: usize,
    version: Version,
    ec_level: ECLevel,
    mask: Option<MaskPattern>,
}

// Grid access
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn new(version: Version, ec_level: ECLevel) -> Self {
        let width = version.width();
        Self { grid: vec![Module::Empty; width * width], width, version, ec_level, mask: None }
    }

    pub fn grid(&self) -> &[Module] {
        &self.grid
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// `None` only while the symbol is still being assembled.
    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    pub fn metadata(&self) -> Metadata {
        Metadata { version: self.version, ec_level: self.ec_level, mask: self.mask }
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|m| ***m == Color::Dark).count()
    }

    pub fn is_dark(&self, r: i16, c: i16) -> bool {
        *self.get(r, c) == Color::Dark
    }

    /// Rows of dark (`true`) and light (`false`) modules, without quiet zone.
    pub fn to_bool_matrix(&self) -> Vec<Vec<bool>> {
        self.grid.chunks(self.width).map(|row| row.iter().map(|m| **m == Color::Dark).collect()).collect()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let mut res = String::with_capacity(self.width * (self.width + 1) + 1);
        res.push('\n');
        for row in self.grid.chunks(self.width) {
            res.extend(row.iter().map(|m| match m {
                Module::Empty => '.',
                Module::Func(clr) => clr.select('F', 'f'),
                Module::Version(clr) => clr.select('V', 'v'),
                Module::Format(clr) => clr.select('M', 'm'),
                Module::Data(clr) => clr.select('D', 'd'),
            }));
            res.push('\n');
        }
        res
    }

    // Negative coordinates count back from the far edge
    fn index(&self, r: i16, c: i16) -> usize {
        let w = self.width as i16;
        debug_assert!((-w..w).contains(&r), "Row {r} out of bounds for width {w}");
        debug_assert!((-w..w).contains(&c), "Column {c} out of bounds for width {w}");

        let (r, c) = ((r + w) % w, (c + w) % w);
        r as usize * self.width + c as usize
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.index(r, c)]
    }

    pub(crate) fn set(&mut self, r: i16, c: i16, module: Module) {
        let idx = self.index(r, c);
        self.grid[idx] = module;
    }
}


// Function patterns
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn draw_all_function_patterns(&mut self) {
        let far = self.width as i16 - 7;
        for (r, c) in [(0, 0), (0, far), (far, 0)] {
            self.draw_finder_with_separator(r, c);
        }
        self.draw_timing_patterns();
        self.draw_alignment_patterns();
    }

    // (r, c) is the top left corner of the 7x7 pattern. The separator ring is
    // clipped at the symbol edge.
    fn draw_finder_with_separator(&mut self, r: i16, c: i16) {
        let w = self.width as i16;
        for i in -1..=7_i16 {
            for j in -1..=7_i16 {
                let (row, col) = (r + i, c + j);
                if !(0..w).contains(&row) || !(0..w).contains(&col) {
                    continue;
                }
                let ring = (i - 3).abs().max((j - 3).abs());
                let dark = !matches!(ring, 2 | 4);
                self.set(row, col, Module::Func(Color::from(dark)));
            }
        }
    }

    // Row 6 and column 6 between the separators, dark on even indices
    fn draw_timing_patterns(&mut self) {
        for i in 8..self.width as i16 - 8 {
            let module = Module::Func(Color::from(i % 2 == 0));
            self.set(6, i, module);
            self.set(i, 6, module);
        }
    }

    fn draw_alignment_patterns(&mut self) {
        let last = self.width as i16 - 7;
        let centers = self.version.alignment_pattern();
        let on_finder = |r: i16, c: i16| (r == 6 && (c == 6 || c == last)) || (r == last && c == 6);

        for (r, c) in centers.iter().flat_map(|&r| centers.iter().map(move |&c| (r, c))) {
            if on_finder(r, c) {
                continue;
            }
            for i in -2..=2_i16 {
                for j in -2..=2_i16 {
                    let dark = i.abs().max(j.abs()) != 1;
                    self.set(r + i, c + j, Module::Func(Color::from(dark)));
                }
            }
        }
    }
}

#[cfg(test)]
mod function_pattern_tests {
    use crate::builder::{Module, QR};
    use crate::common::metadata::{Color, ECLevel, Version};

    #[test]
    fn test_function_patterns_v2() {
        let mut qr = QR::new(Version::new(2).unwrap(), ECLevel::M);
        qr.draw_all_function_patterns();
        qr.reserve_format_area();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffFM........Ffffffff\n\
             fFFFFFfFM........FfFFFFFf\n\
             fFfffFfFM........FfFfffFf\n\
             fFfffFfFM........FfFfffFf\n\
             fFfffFfFM........FfFfffFf\n\
             fFFFFFfFM........FfFFFFFf\n\
             fffffffFfFfFfFfFfFfffffff\n\
             FFFFFFFFM........FFFFFFFF\n\
             MMMMMMfMM........MMMMMMMM\n\
             ......F..................\n\
             ......f..................\n\
             ......F..................\n\
             ......f..................\n\
             ......F..................\n\
             ......f..................\n\
             ......F..................\n\
             ......f.........fffff....\n\
             FFFFFFFFf.......fFFFf....\n\
             fffffffFM.......fFfFf....\n\
             fFFFFFfFM.......fFFFf....\n\
             fFfffFfFM.......fffff....\n\
             fFfffFfFM................\n\
             fFfffFfFM................\n\
             fFFFFFfFM................\n\
             fffffffFM................\n"
        );
    }

    #[test]
    fn test_finders_and_separators() {
        for v in [1, 7, 40] {
            let mut qr = QR::new(Version::new(v).unwrap(), ECLevel::L);
            qr.draw_all_function_patterns();
            let w = qr.width() as i16;
            for (r0, c0) in [(0, 0), (0, w - 7), (w - 7, 0)] {
                // Center 3x3 is dark, ring 2 is light, outer ring is dark
                assert!(qr.is_dark(r0 + 3, c0 + 3));
                assert!(qr.is_dark(r0 + 2, c0 + 4));
                assert!(!qr.is_dark(r0 + 1, c0 + 3));
                assert!(qr.is_dark(r0, c0 + 6));
            }
            // Separators
            for i in 0..8 {
                assert_eq!(qr.get(7, i), Module::Func(Color::Light));
                assert_eq!(qr.get(i, -8), Module::Func(Color::Light));
                assert_eq!(qr.get(-8, i), Module::Func(Color::Light));
            }
        }
    }

    #[test]
    fn test_timing_alternates() {
        let mut qr = QR::new(Version::new(10).unwrap(), ECLevel::L);
        qr.draw_all_function_patterns();
        let w = qr.width() as i16;
        for i in 8..w - 8 {
            assert!(matches!(qr.get(6, i), Module::Func(_)));
            assert_eq!(qr.is_dark(6, i), i % 2 == 0);
            assert_eq!(qr.is_dark(i, 6), i % 2 == 0);
        }
    }

    #[test]
    fn test_alignment_pattern_count() {
        let qr = {
            let mut qr = QR::new(Version::new(1).unwrap(), ECLevel::L);
            qr.draw_alignment_patterns();
            qr
        };
        assert!(qr.grid().iter().all(|m| *m == Module::Empty));

        for v in 2..=40 {
            let ver = Version::new(v).unwrap();
            let mut qr = QR::new(ver, ECLevel::L);
            qr.draw_alignment_patterns();
            let n = ver.alignment_pattern().len();
            let drawn = qr.grid().iter().filter(|m| **m != Module::Empty).count();
            assert_eq!(drawn, (n * n - 3) * 25, "Version {v}");
        }
    }

    #[test]
    fn test_alignment_pattern_v7() {
        let mut qr = QR::new(Version::new(7).unwrap(), ECLevel::L);
        qr.draw_alignment_patterns();
        for (r, c) in [(6, 22), (22, 6), (22, 22), (22, 38), (38, 22), (38, 38)] {
            assert!(qr.is_dark(r, c));
            assert!(!qr.is_dark(r + 1, c - 1));
            assert!(qr.is_dark(r - 2, c + 2));
        }
        assert_eq!(qr.get(6, 6), Module::Empty);
        assert_eq!(qr.get(6, 38), Module::Empty);
        assert_eq!(qr.get(38, 6), Module::Empty);
    }
}

// Format & version info
//------------------------------------------------------------------------------

impl QR {
    fn reserve_format_area(&mut self) {
        self.draw_format_info(0);
    }

    fn draw_format_info(&mut self, info: u32) {
        self.draw_bits(info, FORMAT_INFO_BIT_LEN, &FORMAT_INFO_COORDS_MAIN, Module::Format);
        self.draw_bits(info, FORMAT_INFO_BIT_LEN, &FORMAT_INFO_COORDS_SIDE, Module::Format);
        self.set(-8, 8, Module::Func(Color::Dark));
    }

    fn draw_version_info(&mut self) {
        if *self.version < 7 {
            return;
        }
        let info = self.version.info();
        self.draw_bits(info, VERSION_INFO_BIT_LEN, &VERSION_INFO_COORDS_BL, Module::Version);
        self.draw_bits(info, VERSION_INFO_BIT_LEN, &VERSION_INFO_COORDS_TR, Module::Version);
    }

    // Most significant bit goes to the first coordinate
    fn draw_bits(&mut self, bits: u32, len: usize, coords: &[(i16, i16)], module: fn(Color) -> Module) {
        debug_assert_eq!(coords.len(), len, "Coordinate count doesn't match bit length");

        for (i, &(r, c)) in coords.iter().enumerate() {
            let bit = (bits >> (len - 1 - i)) & 1 == 1;
            self.set(r, c, module(Color::from(bit)));
        }
    }
}


// Encoding region
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn draw_encoding_region(&mut self, payload: BitStream) {
        self.reserve_format_area();
        self.draw_version_info();
        self.draw_payload(payload);

        assert!(!self.grid.contains(&Module::Empty), "Empty module found after drawing payload");
    }

    // Payload already carries the remainder bits
    fn draw_payload(&mut self, payload: BitStream) {
        let free = EncRegionIter::new(self.version)
            .filter(|&(r, c)| self.get(r, c) == Module::Empty)
            .collect::<Vec<_>>();
        assert_eq!(free.len(), payload.len(), "Payload doesn't fill the encoding region");

        for ((r, c), bit) in free.into_iter().zip(payload) {
            self.set(r, c, Module::Data(Color::from(bit)));
        }
    }

    pub(crate) fn apply_mask(&mut self, pattern: MaskPattern) {
        let is_masked = pattern.mask_function();
        let w = self.width;
        for (i, module) in self.grid.iter_mut().enumerate() {
            if let Module::Data(clr) = *module {
                if is_masked((i / w) as i16, (i % w) as i16) {
                    *module = Module::Data(!clr);
                }
            }
        }
        self.mask = Some(pattern);
        self.draw_format_info(format_info(self.ec_level, pattern));
    }
}

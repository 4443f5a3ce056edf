use std::ops::Deref;

use rayon::prelude::*;
use tracing::trace;

use super::error::{QRError, QRResult};
use super::metadata::Color;
use crate::builder::QR;

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub fn new(pattern: u8) -> QRResult<Self> {
        match pattern {
            0..=7 => Ok(Self(pattern)),
            _ => Err(QRError::InvalidMaskPattern(pattern)),
        }
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        ((r * c) & 1) + ((r * c) % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        (((r * c) & 1) + ((r * c) % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        (((r + c) & 1) + ((r * c) % 3)) & 1 == 0
    }
}

impl MaskPattern {
    pub fn mask_function(self) -> fn(i16, i16) -> bool {
        match *self {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!("Invalid pattern {}", self.0),
        }
    }
}


// Mask selection
//------------------------------------------------------------------------------

pub fn apply_best_mask(qr: &mut QR) -> MaskPattern {
    let base: &QR = qr;
    let scores = (0..8u8)
        .into_par_iter()
        .map(MaskPattern)
        .map(|m| {
            let mut masked = base.clone();
            masked.apply_mask(m);
            (m, compute_total_penalty(&masked))
        })
        .collect::<Vec<_>>();

    for (m, score) in scores.iter() {
        trace!(mask = **m, score, "Mask penalty");
    }

    let best_mask = lowest_penalty(scores);
    qr.apply_mask(best_mask);
    best_mask
}

/// First pattern with the strictly lowest score, in iteration order.
fn lowest_penalty(scores: impl IntoIterator<Item = (MaskPattern, u32)>) -> MaskPattern {
    let (best_mask, _) = scores
        .into_iter()
        .fold((MaskPattern(0), u32::MAX), |best, cur| if cur.1 < best.1 { cur } else { best });
    best_mask
}


pub fn compute_total_penalty(qr: &QR) -> u32 {
    let adj_pen = compute_adjacent_penalty(qr);
    let blk_pen = compute_block_penalty(qr);
    let fp_pen = compute_finder_pattern_penalty(qr, true) + compute_finder_pattern_penalty(qr, false);
    let bal_pen = compute_balance_penalty(qr);
    adj_pen + blk_pen + fp_pen + bal_pen
}

// Runs of 5 or more same colored modules in a row or column
fn compute_adjacent_penalty(qr: &QR) -> u32 {
    let w = qr.width() as i16;
    let mut pen = 0;
    for i in 0..w {
        pen += line_run_penalty((0..w).map(|j| *qr.get(i, j)));
        pen += line_run_penalty((0..w).map(|j| *qr.get(j, i)));
    }
    pen
}

fn line_run_penalty(line: impl Iterator<Item = Color>) -> u32 {
    let mut pen = 0;
    let mut last = None;
    let mut run = 0;
    for clr in line {
        if last == Some(clr) {
            run += 1;
        } else {
            pen += run_penalty(run);
            last = Some(clr);
            run = 1;
        }
    }
    pen + run_penalty(run)
}

fn run_penalty(run: u32) -> u32 {
    if run >= 5 {
        run - 2
    } else {
        0
    }
}

fn compute_block_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = qr.width() as i16;
    for r in 0..w - 1 {
        for c in 0..w - 1 {
            let clr = *qr.get(r, c);
            if clr == *qr.get(r + 1, c) && clr == *qr.get(r, c + 1) && clr == *qr.get(r + 1, c + 1)
            {
                pen += 3;
            }
        }
    }
    pen
}

// Finder-like 1:1:3:1:1 pattern with 4 light modules on either side
fn compute_finder_pattern_penalty(qr: &QR, is_hor: bool) -> u32 {
    use Color::{Dark as D, Light as L};
    static PATTERN: [Color; 11] = [L, L, L, L, D, L, D, D, D, L, D];

    let mut pen = 0;
    let w = qr.width() as i16;
    for i in 0..w {
        let line = (0..w)
            .map(|j| if is_hor { *qr.get(i, j) } else { *qr.get(j, i) })
            .collect::<Vec<_>>();
        for window in line.windows(PATTERN.len()) {
            if window.iter().eq(PATTERN.iter()) || window.iter().eq(PATTERN.iter().rev()) {
                pen += 40;
            }
        }
    }
    pen
}

// 10 points per 5% step that the dark ratio deviates from 50%
fn compute_balance_penalty(qr: &QR) -> u32 {
    let dark_cnt = qr.count_dark_modules();
    let w = qr.width();
    let tot = w * w;
    let dev = (dark_cnt * 100).abs_diff(tot * 50);
    let k = dev.div_ceil(tot * 5).saturating_sub(1);
    (k * 10) as u32
}

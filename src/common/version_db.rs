// Capacity tables indexed by [version][ECLevel as usize], row 0 unused.
//------------------------------------------------------------------------------

pub static DATA_BIT_CAPACITY: [[usize; 4]; 41] = [
    [0, 0, 0, 0], [152, 128, 104, 72], [272, 224, 176, 128], [440, 352, 272, 208],
    [640, 512, 384, 288], [864, 688, 496, 368], [1088, 864, 608, 480], [1248, 992, 704, 528],
    [1552, 1232, 880, 688], [1856, 1456, 1056, 800], [2192, 1728, 1232, 976], [2592, 2032, 1440, 1120],
    [2960, 2320, 1648, 1264], [3424, 2672, 1952, 1440], [3688, 2920, 2088, 1576], [4184, 3320, 2360, 1784],
    [4712, 3624, 2600, 2024], [5176, 4056, 2936, 2264], [5768, 4504, 3176, 2504], [6360, 5016, 3560, 2728],
    [6888, 5352, 3880, 3080], [7456, 5712, 4096, 3248], [8048, 6256, 4544, 3536], [8752, 6880, 4912, 3712],
    [9392, 7312, 5312, 4112], [10208, 8000, 5744, 4304], [10960, 8496, 6032, 4768], [11744, 9024, 6464, 5024],
    [12248, 9544, 6968, 5288], [13048, 10136, 7288, 5608], [13880, 10984, 7880, 5960], [14744, 11640, 8264, 6344],
    [15640, 12328, 8920, 6760], [16568, 13048, 9368, 7208], [17528, 13800, 9848, 7688], [18448, 14496, 10288, 7888],
    [19472, 15312, 10832, 8432], [20528, 15936, 11408, 8768], [21616, 16816, 12016, 9136], [22496, 17728, 12656, 9776],
    [23648, 18672, 13328, 10208],
];

pub static TOTAL_ECC_CODEWORDS: [[usize; 4]; 41] = [
    [0, 0, 0, 0], [7, 10, 13, 17], [10, 16, 22, 28], [15, 26, 36, 44],
    [20, 36, 52, 64], [26, 48, 72, 88], [36, 64, 96, 112], [40, 72, 108, 130],
    [48, 88, 132, 156], [60, 110, 160, 192], [72, 130, 192, 224], [80, 150, 224, 264],
    [96, 176, 260, 308], [104, 198, 288, 352], [120, 216, 320, 384], [132, 240, 360, 432],
    [144, 280, 408, 480], [168, 308, 448, 532], [180, 338, 504, 588], [196, 364, 546, 650],
    [224, 416, 600, 700], [224, 442, 644, 750], [252, 476, 690, 816], [270, 504, 750, 900],
    [300, 560, 810, 960], [312, 588, 870, 1050], [336, 644, 952, 1110], [360, 700, 1020, 1200],
    [390, 728, 1050, 1260], [420, 784, 1140, 1350], [450, 812, 1200, 1440], [480, 868, 1290, 1530],
    [510, 924, 1350, 1620], [540, 980, 1440, 1710], [570, 1036, 1530, 1800], [570, 1064, 1590, 1890],
    [600, 1120, 1680, 1980], [630, 1204, 1770, 2100], [660, 1260, 1860, 2220], [720, 1316, 1950, 2310],
    [750, 1372, 2040, 2430],
];

pub static SHORT_BLOCK_COUNT: [[usize; 4]; 41] = [
    [0, 0, 0, 0], [1, 1, 1, 1], [1, 1, 1, 1], [1, 1, 2, 2],
    [1, 2, 2, 4], [1, 2, 2, 2], [2, 4, 4, 4], [2, 4, 2, 4],
    [2, 2, 4, 4], [2, 3, 4, 4], [2, 4, 6, 6], [4, 1, 4, 3],
    [2, 6, 4, 7], [4, 8, 8, 12], [3, 4, 11, 11], [5, 5, 5, 11],
    [5, 7, 15, 3], [1, 10, 1, 2], [5, 9, 17, 2], [3, 3, 17, 9],
    [3, 3, 15, 15], [4, 17, 17, 19], [2, 17, 7, 34], [4, 4, 11, 16],
    [6, 6, 11, 30], [8, 8, 7, 22], [10, 19, 28, 33], [8, 22, 8, 12],
    [3, 3, 4, 11], [7, 21, 1, 19], [5, 19, 15, 23], [13, 2, 42, 23],
    [17, 10, 10, 19], [17, 14, 29, 11], [13, 14, 44, 59], [12, 12, 39, 22],
    [6, 6, 46, 2], [17, 29, 49, 24], [4, 13, 48, 42], [20, 40, 43, 10],
    [19, 18, 34, 20],
];

pub static LONG_BLOCK_COUNT: [[usize; 4]; 41] = [
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 2, 2], [0, 0, 0, 0], [0, 0, 4, 1],
    [0, 2, 2, 2], [0, 2, 4, 4], [2, 1, 2, 2], [0, 4, 4, 8],
    [2, 2, 6, 4], [0, 1, 4, 4], [1, 5, 5, 5], [1, 5, 7, 7],
    [1, 3, 2, 13], [5, 1, 15, 17], [1, 4, 1, 19], [4, 11, 4, 16],
    [5, 13, 5, 10], [4, 0, 6, 6], [7, 0, 16, 0], [5, 14, 14, 14],
    [4, 14, 16, 2], [4, 13, 22, 13], [2, 4, 6, 4], [4, 3, 26, 28],
    [10, 23, 31, 31], [7, 7, 37, 26], [10, 10, 25, 25], [3, 29, 1, 28],
    [0, 23, 35, 35], [1, 21, 19, 46], [6, 23, 7, 1], [7, 26, 14, 41],
    [14, 34, 10, 64], [4, 14, 10, 46], [18, 32, 14, 32], [4, 7, 22, 67],
    [6, 31, 34, 61],
];

// Per version tables, index 0 unused
//------------------------------------------------------------------------------

pub static REMAINDER_BITS: [usize; 41] = [
    0, 0, 7, 7, 7, 7, 7, 0, 0, 0, 0, 0, 0, 0, 3, 3, 3, 3, 3, 3, 3,
    4, 4, 4, 4, 4, 4, 4, 3, 3, 3, 3, 3, 3, 3, 0, 0, 0, 0, 0, 0,
];

// Row and column centers of alignment patterns
pub static ALIGNMENT_PATTERN_POSITIONS: [&[i16]; 41] = [
    &[],
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

// 18 bit version info for versions 7 to 40
pub static VERSION_INFOS: [u32; 34] = [
    0x07C94, 0x085BC, 0x09A99, 0x0A4D3, 0x0BBF6, 0x0C762, 0x0D847,
    0x0E60D, 0x0F928, 0x10B78, 0x1145D, 0x12A17, 0x13532, 0x149A6,
    0x15683, 0x168C9, 0x177EC, 0x18EC4, 0x191E1, 0x1AFAB, 0x1B08E,
    0x1CC1A, 0x1D33F, 0x1ED75, 0x1F250, 0x209D5, 0x216F0, 0x228BA,
    0x2379F, 0x24B0B, 0x2542E, 0x26A64, 0x27541, 0x28C69,
];

// 15 bit format info indexed by [ECLevel as usize][mask pattern]
pub static FORMAT_INFOS: [[u32; 8]; 4] = [
    [0x77C4, 0x72F3, 0x7DAA, 0x789D, 0x662F, 0x6318, 0x6C41, 0x6976],
    [0x5412, 0x5125, 0x5E7C, 0x5B4B, 0x45F9, 0x40CE, 0x4F97, 0x4AA0],
    [0x355F, 0x3068, 0x3F31, 0x3A06, 0x24B4, 0x2183, 0x2EDA, 0x2BED],
    [0x1689, 0x13BE, 0x1CE7, 0x19D0, 0x0762, 0x0255, 0x0D0C, 0x083B],
];

// Char count indicator widths indexed by [Mode::index()][version tier]
pub static CHAR_CNT_BITS: [[usize; 3]; 3] = [[10, 12, 14], [9, 11, 13], [8, 16, 16]];

pub static MODE_INDICATOR_BITS: usize = 4;

pub static FORMAT_INFO_BIT_LEN: usize = 15;

pub static VERSION_INFO_BIT_LEN: usize = 18;

// Module coordinates (row, col) of info bits, msb first. Negative values wrap
// from the far edge.
//------------------------------------------------------------------------------

pub static FORMAT_INFO_COORDS_MAIN: [(i16, i16); 15] = [
    (8, 0),
    (8, 1),
    (8, 2),
    (8, 3),
    (8, 4),
    (8, 5),
    (8, 7),
    (8, 8),
    (7, 8),
    (5, 8),
    (4, 8),
    (3, 8),
    (2, 8),
    (1, 8),
    (0, 8),
];

pub static FORMAT_INFO_COORDS_SIDE: [(i16, i16); 15] = [
    (-1, 8),
    (-2, 8),
    (-3, 8),
    (-4, 8),
    (-5, 8),
    (-6, 8),
    (-7, 8),
    (8, -8),
    (8, -7),
    (8, -6),
    (8, -5),
    (8, -4),
    (8, -3),
    (8, -2),
    (8, -1),
];

pub static VERSION_INFO_COORDS_TR: [(i16, i16); 18] = [
    (5, -9),
    (5, -10),
    (5, -11),
    (4, -9),
    (4, -10),
    (4, -11),
    (3, -9),
    (3, -10),
    (3, -11),
    (2, -9),
    (2, -10),
    (2, -11),
    (1, -9),
    (1, -10),
    (1, -11),
    (0, -9),
    (0, -10),
    (0, -11),
];

pub static VERSION_INFO_COORDS_BL: [(i16, i16); 18] = [
    (-9, 5),
    (-10, 5),
    (-11, 5),
    (-9, 4),
    (-10, 4),
    (-11, 4),
    (-9, 3),
    (-10, 3),
    (-11, 3),
    (-9, 2),
    (-10, 2),
    (-11, 2),
    (-9, 1),
    (-10, 1),
    (-11, 1),
    (-9, 0),
    (-10, 0),
    (-11, 0),
];

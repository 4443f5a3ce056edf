mod common {
    use qrweave::{ECLevel, QR};

    // Remainder of polynomial division over GF(2)
    fn bch_remainder(mut value: u32, generator: u32) -> u32 {
        let gen_len = 32 - generator.leading_zeros();
        while 32 - value.leading_zeros() >= gen_len {
            value ^= generator << (32 - value.leading_zeros() - gen_len);
        }
        value
    }

    pub fn expected_format_info(ecl: ECLevel, mask: u8) -> u32 {
        let ecl_bits = match ecl {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        };
        let data = (ecl_bits << 3) | mask as u32;
        ((data << 10) | bch_remainder(data << 10, 0b101_0011_0111)) ^ 0b101_0100_0001_0010
    }

    pub fn expected_version_info(version: usize) -> u32 {
        let data = version as u32;
        (data << 12) | bch_remainder(data << 12, 0b1_1111_0010_0101)
    }

    pub fn read_bits(qr: &QR, coords: impl Iterator<Item = (i16, i16)>) -> u32 {
        coords.fold(0, |acc, (r, c)| (acc << 1) | qr.is_dark(r, c) as u32)
    }

    // Main copy around the top left finder, msb first
    pub fn read_format_info(qr: &QR) -> u32 {
        let coords = (0..=5)
            .map(|c| (8, c))
            .chain([(8, 7), (8, 8), (7, 8)])
            .chain((0..=5).rev().map(|r| (r, 8)));
        read_bits(qr, coords)
    }

    // Copy split below the top right and the bottom left finder, msb first
    pub fn read_side_format_info(qr: &QR) -> u32 {
        let coords = (1..=7).map(|i| (-i, 8)).chain((1..=8).rev().map(|i| (8, -i)));
        read_bits(qr, coords)
    }

    // Block above the bottom left finder, msb first
    pub fn read_version_info(qr: &QR) -> u32 {
        let coords = (0..6).rev().flat_map(|c| (9..=11).map(move |i| (-i, c)));
        read_bits(qr, coords)
    }

    pub fn has_finder_at(matrix: &[Vec<bool>], r: usize, c: usize) -> bool {
        (0..7).all(|i| {
            (0..7).all(|j| {
                let ring = i.max(j).max(6 - i).max(6 - j);
                let exp_dark = ring != 5;
                matrix[r + i][c + j] == exp_dark
            })
        })
    }
}

mod qr_tests {
    use test_case::test_case;

    use qrweave::{ECLevel, MaskPattern, QRBuilder, QRError, Version};

    use super::common::*;

    #[test_case("Hello, world!", 1, ECLevel::L)]
    #[test_case("TEST", 1, ECLevel::M)]
    #[test_case("12345", 1, ECLevel::Q)]
    #[test_case("OK", 1, ECLevel::H)]
    #[test_case("https://www.rust-lang.org/", 3, ECLevel::M)]
    #[test_case("A11111111111111A11111111111111", 7, ECLevel::M)]
    #[test_case("Grüße aus Köln", 10, ECLevel::Q; "latin1_v10_q")]
    #[test_case("1234567890", 27, ECLevel::H)]
    #[test_case("The quick brown fox jumps over the lazy dog", 40, ECLevel::L)]
    fn test_qr_structure(data: &str, v: usize, ecl: ECLevel) {
        let ver = Version::new(v).unwrap();
        let qr = QRBuilder::new(data).version(ver).ec_level(ecl).build().unwrap();
        let w = 4 * v + 17;
        assert_eq!(qr.width(), w);
        assert_eq!(qr.version(), ver);
        assert_eq!(qr.ec_level(), ecl);

        let matrix = qr.to_bool_matrix();
        assert_eq!(matrix.len(), w);
        assert!(has_finder_at(&matrix, 0, 0));
        assert!(has_finder_at(&matrix, 0, w - 7));
        assert!(has_finder_at(&matrix, w - 7, 0));

        // Timing patterns
        for i in 8..w - 8 {
            assert_eq!(matrix[6][i], i % 2 == 0);
            assert_eq!(matrix[i][6], i % 2 == 0);
        }

        // Dark module
        assert!(matrix[w - 8][8]);

        let mask = *qr.mask().unwrap();
        let exp_format = expected_format_info(ecl, mask);
        assert_eq!(read_format_info(&qr), exp_format);
        assert_eq!(read_side_format_info(&qr), exp_format);

        if v >= 7 {
            assert_eq!(read_version_info(&qr), expected_version_info(v));
        }
    }

    #[test]
    fn test_hello_world_auto_version() {
        let qr = QRBuilder::new("HELLO WORLD").ec_level(ECLevel::Q).build().unwrap();
        assert_eq!(*qr.version(), 1);
        assert_eq!(qr.width(), 21);
        assert_eq!(qr.metadata().version, Version::new(1).unwrap());
    }

    #[test_case(0)]
    #[test_case(3)]
    #[test_case(7)]
    fn test_forced_mask(m: u8) {
        let mask = MaskPattern::new(m).unwrap();
        let qr = QRBuilder::new("MASKED").mask(mask).build().unwrap();
        assert_eq!(qr.mask(), Some(mask));
        assert_eq!(read_format_info(&qr), expected_format_info(ECLevel::M, m));
    }

    #[test]
    fn test_metadata_display() {
        let qr = QRBuilder::new("HELLO WORLD")
            .version(Version::new(1).unwrap())
            .ec_level(ECLevel::Q)
            .mask(MaskPattern::new(6).unwrap())
            .build()
            .unwrap();
        assert_eq!(qr.metadata().to_string(), "{ Version: 1, Ec level: Q, Mask: 6 }");
    }

    #[test]
    fn test_rebuild_after_change() {
        let mut builder = QRBuilder::new("first");
        let first = builder.build().unwrap();
        builder.data("second, and much longer than the first one");
        let second = builder.build().unwrap();
        assert!(second.version() > first.version());
    }

    #[test]
    fn test_capacity_boundary() {
        let ver = Version::new(40).unwrap();
        assert!(QRBuilder::new(&"a".repeat(2953)).version(ver).ec_level(ECLevel::L).build().is_ok());
        let res = QRBuilder::new(&"a".repeat(2954)).version(ver).ec_level(ECLevel::L).build();
        assert_eq!(res.err(), Some(QRError::DataTooLong { bits: 4 + 16 + 2954 * 8, capacity: 23648 }));
    }

    #[test]
    fn test_errors() {
        assert_eq!(Version::new(0).err(), Some(QRError::InvalidVersion(0)));
        assert_eq!(Version::new(41).err(), Some(QRError::InvalidVersion(41)));
        assert_eq!(MaskPattern::new(8).err(), Some(QRError::InvalidMaskPattern(8)));
        let res = QRBuilder::new("Ω").build();
        assert_eq!(res.err(), Some(QRError::UnsupportedChar { ch: 'Ω', index: 0 }));
    }
}

mod qr_proptests {
    use proptest::prelude::*;

    use qrweave::{ECLevel, QRBuilder};

    use super::common::*;

    pub fn ec_level_strategy() -> BoxedStrategy<ECLevel> {
        prop_oneof![Just(ECLevel::L), Just(ECLevel::M), Just(ECLevel::Q), Just(ECLevel::H)].boxed()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn proptest_build_latin1(data in "[\\x20-\\xff]{0,200}", ecl in ec_level_strategy()) {
            let qr = QRBuilder::new(&data).ec_level(ecl).build().unwrap();
            let again = QRBuilder::new(&data).ec_level(ecl).build().unwrap();
            prop_assert_eq!(qr.mask(), again.mask());
            prop_assert_eq!(qr.to_bool_matrix(), again.to_bool_matrix());

            let mask = *qr.mask().unwrap();
            prop_assert_eq!(read_format_info(&qr), expected_format_info(ecl, mask));
        }

        #[test]
        fn proptest_smallest_version(data in "[0-9]{1,500}", ecl in ec_level_strategy()) {
            let qr = QRBuilder::new(&data).ec_level(ecl).build().unwrap();
            let v = *qr.version();
            if v > 1 {
                let smaller = qrweave::Version::new(v - 1).unwrap();
                prop_assert!(QRBuilder::new(&data).version(smaller).ec_level(ecl).build().is_err());
            }
        }
    }
}

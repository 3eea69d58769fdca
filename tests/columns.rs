mod tests {
    use pov_wand_engine::{CapacityError, ColumnBuffer};

    const GLYPH_L: [u32; 4] = [0b0001, 0b0010, 0b0100, 0b1000];
    const GLYPH_O: [u32; 4] = [0b1111, 0b1001, 0b1001, 0b1111];

    #[test]
    fn test_exact_fit_has_no_padding() {
        let buffer: ColumnBuffer<16> =
            ColumnBuffer::build(&[&GLYPH_L, &GLYPH_O], 4, 8, 1).unwrap();
        assert_eq!(buffer.len(), 8);
        assert_eq!(buffer.get(0), GLYPH_L[0]);
        assert_eq!(buffer.get(3), GLYPH_L[3]);
        assert_eq!(buffer.get(4), GLYPH_O[0]);
        assert_eq!(buffer.get(7), GLYPH_O[3]);
    }

    #[test]
    fn test_even_slack_splits_into_equal_padding() {
        let buffer: ColumnBuffer<16> =
            ColumnBuffer::build(&[&GLYPH_L, &GLYPH_O], 4, 12, 1).unwrap();
        assert_eq!(buffer.len(), 12);
        // two background columns on each side
        assert_eq!(buffer.get(0), 0);
        assert_eq!(buffer.get(1), 0);
        assert_eq!(buffer.get(2), GLYPH_L[0]);
        assert_eq!(buffer.get(9), GLYPH_O[3]);
        assert_eq!(buffer.get(10), 0);
        assert_eq!(buffer.get(11), 0);
    }

    #[test]
    fn test_scale_repeats_source_columns() {
        let buffer: ColumnBuffer<16> = ColumnBuffer::build(&[&GLYPH_L], 4, 8, 2).unwrap();
        assert_eq!(buffer.len(), 8);
        for source in 0..4 {
            assert_eq!(buffer.get(2 * source), GLYPH_L[source]);
            assert_eq!(buffer.get(2 * source + 1), GLYPH_L[source]);
        }
    }

    #[test]
    fn test_oversized_message_is_rejected() {
        let err = ColumnBuffer::<16>::build(&[&GLYPH_L, &GLYPH_O], 4, 7, 1).unwrap_err();
        assert_eq!(
            err,
            CapacityError {
                required: 8,
                available: 7,
            }
        );

        // scaling alone can push a fitting message over the limit
        assert!(ColumnBuffer::<32>::build(&[&GLYPH_L, &GLYPH_O], 4, 12, 2).is_err());
    }

    #[test]
    fn test_total_columns_bounded_by_storage() {
        assert!(ColumnBuffer::<8>::build(&[&GLYPH_L], 4, 12, 1).is_err());
    }

    #[test]
    fn test_empty_message_is_all_background() {
        let buffer: ColumnBuffer<8> = ColumnBuffer::build(&[], 4, 6, 1).unwrap();
        assert_eq!(buffer.len(), 6);
        for index in 0..6 {
            assert_eq!(buffer.get(index), 0);
        }
    }
}

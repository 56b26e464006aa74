use proptest::prelude::*;
use zx81sprite::asm::{render_listing, AsmStyle};
use zx81sprite::encode::encode;
use zx81sprite::grid::PixelGrid;
use zx81sprite::pattern::{BlockCode, PATTERN_TABLE};

/// Rows of even width and even count, drawn from the alphabet plus one
/// character that is not part of it.
fn grid_lines() -> impl Strategy<Value = Vec<String>> {
    (1usize..=8, 1usize..=8).prop_flat_map(|(half_w, half_h)| {
        let row = proptest::collection::vec(
            prop_oneof![Just('-'), Just('o'), Just('*'), Just('@'), Just('?')],
            half_w * 2,
        )
        .prop_map(|cs| cs.into_iter().collect::<String>());
        proptest::collection::vec(row, half_h * 2)
    })
}

proptest! {
    #[test]
    fn listing_dimensions_follow_grid(lines in grid_lines()) {
        let grid = PixelGrid::from_lines(&lines).unwrap();
        let listing = render_listing(&encode(&grid), &AsmStyle::default());

        let mut out = listing.lines();
        prop_assert_eq!(out.next(), Some("spriteData"));
        let data: Vec<&str> = out.collect();
        prop_assert_eq!(data.len(), lines.len() / 2);
        for line in data {
            let tokens = line.strip_prefix("   DB ").unwrap();
            prop_assert_eq!(tokens.split(',').count(), lines[0].len() / 2);
        }
    }

    #[test]
    fn every_code_is_known(lines in grid_lines()) {
        let grid = PixelGrid::from_lines(&lines).unwrap();
        let encoding = encode(&grid);
        for code in encoding.rows.iter().flatten() {
            prop_assert!(
                *code == BlockCode::BLANK || PATTERN_TABLE.iter().any(|p| p.code == *code)
            );
        }
    }

    #[test]
    fn encoding_is_deterministic(lines in grid_lines()) {
        let grid = PixelGrid::from_lines(&lines).unwrap();
        let style = AsmStyle::default();
        prop_assert_eq!(
            render_listing(&encode(&grid), &style),
            render_listing(&encode(&grid), &style)
        );
    }

    #[test]
    fn diagnostics_match_unknown_cells(lines in grid_lines()) {
        let grid = PixelGrid::from_lines(&lines).unwrap();
        let encoding = encode(&grid);
        for d in &encoding.diagnostics {
            prop_assert_eq!(d.row % 2, 0);
            prop_assert_eq!(d.column % 2, 0);
            prop_assert_eq!(encoding.rows[d.row / 2][d.column / 2], BlockCode::BLANK);
        }
    }
}

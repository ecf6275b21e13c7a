use tui_runner::term::{project, project_all, Region, RegionRect};
use tui_runner::types::{Color, Drawable, RegionId};

fn play_region() -> Region {
    // 10x8 interior.
    Region::new(RegionId::Play, RegionRect::new(0, 0, 12, 10))
}

#[test]
fn three_row_texture_writes_rows_one_to_three_at_column_two() {
    let mut region = play_region();
    let texture = Drawable::texture(2, 1, ["##", "##", "##"]);
    assert_eq!(project(&mut region, &texture), 0);

    for row in 0..region.interior_height() {
        let line = region.interior_row(row).unwrap();
        if (1..=3).contains(&row) {
            assert_eq!(line, "  ##      ", "row {row}");
        } else {
            assert_eq!(line.trim(), "", "row {row}");
        }
    }
    // Buffer coordinates are interior + 1.
    assert_eq!(region.buffer().get(3, 2).map(|c| c.ch), Some('#'));
    assert_eq!(region.buffer().get(4, 4).map(|c| c.ch), Some('#'));
    assert_eq!(region.buffer().get(5, 4).map(|c| c.ch), Some(' '));
}

#[test]
fn texture_rows_are_written_verbatim_including_spaces() {
    let mut region = play_region();
    region.write_glyph(0, 1, 'z', Color::White);
    project(&mut region, &Drawable::texture(0, 0, ["a b"]));
    assert_eq!(region.interior_row(0).unwrap(), "a b       ");
}

#[test]
fn colors_resolve_per_entity() {
    let mut region = play_region();
    project_all(
        &mut region,
        [
            Drawable::glyph(0, 0, 'w'),
            Drawable::glyph(1, 0, 'y').with_color(Color::Yellow),
            Drawable::texture(0, 1, ["mm"]).with_color(Color::Magenta),
        ]
        .iter(),
    );

    let fb = region.buffer();
    assert_eq!(fb.get(1, 1).map(|c| c.color), Some(Color::White));
    assert_eq!(fb.get(2, 1).map(|c| c.color), Some(Color::Yellow));
    assert_eq!(fb.get(1, 2).map(|c| c.color), Some(Color::Magenta));
    assert_eq!(fb.get(2, 2).map(|c| c.color), Some(Color::Magenta));
}

#[test]
fn list_order_decides_overlaps() {
    let mut region = play_region();
    let list = vec![
        Drawable::texture(0, 0, ["aaaa", "aaaa"]),
        Drawable::glyph(1, 1, 'B'),
        Drawable::texture(2, 0, ["cc"]),
    ];
    let projection = project_all(&mut region, &list);
    assert_eq!(projection.drawn, 3);
    assert_eq!(region.interior_row(0).unwrap(), "aacc      ");
    assert_eq!(region.interior_row(1).unwrap(), "aBaa      ");
}

#[test]
fn out_of_bounds_entities_never_touch_the_border() {
    let mut region = play_region();
    let list = vec![
        Drawable::glyph(10, 0, 'x'),
        Drawable::glyph(0, 8, 'x'),
        Drawable::glyph(u16::MAX, u16::MAX, 'x'),
        Drawable::texture(8, 6, ["long row", "long row", "long row"]),
    ];
    let projection = project_all(&mut region, &list);
    assert_eq!(projection.clipped, 3 + (8 - 2) + (8 - 2) + 8);
    assert!(region.border_intact());
    assert_eq!(region.interior_row(6).unwrap(), "        lo");
    assert_eq!(region.interior_row(7).unwrap(), "        lo");
}

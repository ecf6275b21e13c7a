use tui_runner::term::{HeadlessDisplay, SurfaceError, SurfaceLayout, TerminalSurface};
use tui_runner::types::{Color, Drawable, RegionId, STATUS_HEIGHT};

#[test]
fn regions_are_disjoint_and_cover_the_terminal() {
    for status_height in 3..=8u16 {
        for total_height in (status_height + 3)..=40 {
            for total_width in [3u16, 10, 80, 200] {
                let layout = SurfaceLayout::compute(total_width, total_height, status_height)
                    .unwrap_or_else(|e| {
                        panic!("{total_width}x{total_height}/{status_height}: {e}")
                    });

                let play = layout.play;
                let status = layout.status;
                assert_eq!(play.row, 0);
                assert_eq!(play.bottom(), status.row, "no gap or overlap");
                assert_eq!(status.bottom(), total_height);
                assert_eq!(status.height, status_height);
                assert_eq!(play.width, total_width);
                assert_eq!(status.width, total_width);
                assert_eq!((play.col, status.col), (0, 0));
            }
        }
    }
}

#[test]
fn degenerate_heights_fail_at_startup() {
    for total_height in 0..=STATUS_HEIGHT {
        let err = TerminalSurface::new(80, total_height, STATUS_HEIGHT).unwrap_err();
        assert!(matches!(err, SurfaceError::Degenerate { .. }), "{err}");
    }
}

#[test]
fn drawable_at_interior_origin_is_inside_the_border() {
    let mut surface = TerminalSurface::new(10, 12, STATUS_HEIGHT).unwrap();
    surface.draw_entities(&[Drawable::glyph(0, 0, '@').with_color(Color::Green)]);

    let play = surface.region(RegionId::Play);
    let fb = play.buffer();
    assert_eq!(fb.get(1, 1).map(|c| c.ch), Some('@'));
    assert_eq!(fb.get(0, 0).map(|c| c.ch), Some('+'));
    assert_eq!(fb.get(1, 0).map(|c| c.ch), Some('-'));
    assert_eq!(fb.get(0, 1).map(|c| c.ch), Some('|'));
    assert!(play.border_intact());
}

#[test]
fn empty_frame_then_clear_matches_fresh_surface() {
    let fresh = TerminalSurface::new(16, 12, STATUS_HEIGHT).unwrap();
    let mut surface = fresh.clone();
    let mut display = HeadlessDisplay::new();

    surface.draw_entities(&[]);
    surface.flush_all(&mut display).unwrap();
    surface.clear_all();
    assert_eq!(surface, fresh);

    surface.draw_entities(&[
        Drawable::glyph(3, 2, 'x'),
        Drawable::texture(0, 4, ["abc", "def"]).with_color(Color::Red),
    ]);
    surface.write_status("status");
    surface.flush_all(&mut display).unwrap();
    surface.clear_all();
    assert_eq!(surface, fresh);

    for id in RegionId::ALL {
        assert!(surface.region(id).border_intact());
        assert!(surface.region(id).interior_is_blank());
    }
}

#[test]
fn status_text_always_starts_at_the_same_cell() {
    let mut surface = TerminalSurface::new(30, 12, STATUS_HEIGHT).unwrap();
    for text in ["", "a", "score 10", "a much longer status line that will clip"] {
        surface.write_status(text);
        let status = surface.region(RegionId::Status);
        if let Some(first) = text.chars().next() {
            assert_eq!(status.buffer().get(3, 2).map(|c| c.ch), Some(first));
            assert_eq!(status.buffer().get(2, 2).map(|c| c.ch), Some(' '));
        }
        assert!(status.border_intact());
        surface.clear_all();
    }
}

#[test]
fn flush_presents_each_region_at_its_own_offset() {
    let mut surface = TerminalSurface::new(12, 14, STATUS_HEIGHT).unwrap();
    surface.draw_entities(&[Drawable::glyph(2, 1, 'p')]);
    surface.write_status("s");

    let mut display = HeadlessDisplay::new();
    surface.flush(RegionId::Status, &mut display).unwrap();
    surface.flush(RegionId::Play, &mut display).unwrap();

    let play = display.last(RegionId::Play).unwrap();
    let status = display.last(RegionId::Status).unwrap();
    assert_eq!((play.width(), play.height()), (12, 9));
    assert_eq!((status.width(), status.height()), (12, 5));
    assert_eq!(play.get(3, 2).map(|c| c.ch), Some('p'));
    assert_eq!(status.get(3, 2).map(|c| c.ch), Some('s'));
}

use ino_gradient::{EditorConfig, EditorContext, HexColor, PointStore, Renderer};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Red, green and blue lights stacked on (200, 200), in that order
fn stacked_editor() -> EditorContext {
    let config = EditorConfig {
        seed_initial_points: false,
        ..EditorConfig::default()
    };
    let mut store = PointStore::with_rng(&config, Box::new(StdRng::seed_from_u64(5)));
    for (index, color) in [HexColor::RED, HexColor::GREEN, HexColor::BLUE].into_iter().enumerate() {
        let point = store.add();
        store.set_position(index, 200.0, 200.0);
        store.set_color(point.id, color);
    }
    EditorContext::from_parts(&config, store, Renderer::without_labels(&config))
}

fn ids(editor: &EditorContext) -> Vec<u32> {
    editor.points().iter().map(|point| point.id).collect()
}

#[test]
fn test_removing_middle_point_keeps_last_on_top() {
    let mut editor = stacked_editor();
    // Below the handle, where only gradients reach
    let [r, _, b, _] = editor.surface().pixel(200, 230).unwrap();
    assert!(b > 200 && r < 40);

    assert!(editor.remove_point(2));
    assert_eq!(ids(&editor), vec![1, 3]);

    let [r, g, b, a] = editor.surface().pixel(200, 230).unwrap();
    assert!(b > 200, "blue should stay on top: {:?}", [r, g, b, a]);
    assert!(r < 40 && g < 10);
    assert!(a > 250);
}

#[test]
fn test_point_added_after_removal_is_drawn_last() {
    let mut editor = stacked_editor();
    editor.remove_point(2);

    let added = editor.add_point();
    assert_eq!(added.id, 4);
    assert_eq!(ids(&editor), vec![1, 3, 4]);

    // The new black light covers the others just outside its handle
    let x = added.x.round() as u32 + 15;
    let y = added.y.round() as u32;
    let [r, g, b, a] = editor.surface().pixel(x, y).unwrap();
    assert!(r.max(g).max(b) < 40, "black light should be on top: {:?}", [r, g, b, a]);
    assert!(a > 250);
}

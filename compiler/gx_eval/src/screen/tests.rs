use super::*;
use pretty_assertions::assert_eq;

fn picture(points: &[(i64, i64)]) -> Rc<Picture> {
    Rc::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

#[test]
fn empty_screen_renders_nothing() {
    let mut screen = Screen::new();
    assert_eq!(screen.render_ascii(), "");
    screen.push(picture(&[]));
    assert_eq!(screen.render_ascii(), "");
}

#[test]
fn single_layer_diagonal() {
    let mut screen = Screen::new();
    screen.push(picture(&[(0, 0), (1, 1), (2, 2)]));
    assert_eq!(screen.render_ascii(), "origin (0, 0)\n#..\n.#.\n..#\n");
}

#[test]
fn first_layer_is_drawn_on_top() {
    let mut screen = Screen::new();
    screen.push(picture(&[(-1, 0)]));
    screen.push(picture(&[(-1, 0), (0, 0)]));
    assert_eq!(screen.render_ascii(), "origin (-1, 0)\n#+\n");
}

#[test]
fn clear_and_take() {
    let mut screen = Screen::new();
    screen.push(picture(&[(0, 0)]));
    screen.push(picture(&[(1, 0)]));
    assert_eq!(screen.len(), 2);

    let taken = screen.take();
    assert_eq!(taken.len(), 2);
    assert!(screen.is_empty());

    screen.push(picture(&[(0, 0)]));
    screen.clear();
    assert!(screen.is_empty());
}

#[test]
fn huge_picture_is_summarised() {
    let mut screen = Screen::new();
    screen.push(picture(&[(i64::MIN, 0), (i64::MAX, 0)]));
    assert!(screen.render_ascii().contains("too large to render"));
}

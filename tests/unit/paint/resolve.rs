use super::*;

fn red() -> Color {
    Color::rgba(1.0, 0.0, 0.0, 1.0)
}

fn blue() -> Color {
    Color::rgba(0.0, 0.0, 1.0, 1.0)
}

#[test]
fn single_colour_is_solid() {
    let p = resolve_paint(&[red()], Point::ZERO, Point::new(1.0, 1.0)).unwrap();
    assert_eq!(p, Paint::solid(red()));
}

#[test]
fn multiple_colours_spread_evenly() {
    for n in 2..=7_usize {
        let colors: Vec<Color> = (0..n)
            .map(|k| Color::rgba(k as f64, 0.0, 0.0, 1.0))
            .collect();
        let p = resolve_paint(&colors, Point::ZERO, Point::new(10.0, 0.0)).unwrap();
        let Paint::LinearGradient { start, end, stops } = p else {
            panic!("expected gradient for n={n}");
        };
        assert_eq!(start, Point::ZERO);
        assert_eq!(end, Point::new(10.0, 0.0));
        assert_eq!(stops.len(), n);
        assert_eq!(stops[0].offset, 0.0);
        assert_eq!(stops[n - 1].offset, 1.0);
        for (k, stop) in stops.iter().enumerate() {
            assert!((stop.offset - k as f64 / (n - 1) as f64).abs() < 1e-12);
            assert_eq!(stop.color, colors[k]);
        }
    }
}

#[test]
fn stop_order_follows_input_order() {
    let p = resolve_paint(&[blue(), red(), blue()], Point::ZERO, Point::ZERO).unwrap();
    let Paint::LinearGradient { stops, .. } = p else {
        panic!("expected gradient");
    };
    assert_eq!(stops[0].color, blue());
    assert_eq!(stops[1].color, red());
    assert_eq!(stops[1].offset, 0.5);
}

#[test]
fn empty_list_fails_fast() {
    let err = resolve_paint(&[], Point::ZERO, Point::ZERO).unwrap_err();
    assert!(err.to_string().contains("empty colour list"));
}

#[test]
fn invisibility_considers_every_stop() {
    assert!(Paint::transparent().is_invisible());
    let half = resolve_paint(&[Color::TRANSPARENT, red()], Point::ZERO, Point::ZERO).unwrap();
    assert!(!half.is_invisible());
}

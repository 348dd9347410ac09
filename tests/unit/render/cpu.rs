use super::*;
use crate::encode::sink::InMemorySink;
use crate::paint::model::GradientStop;

fn line_quad(a: Point, b: Point) -> [Point; 4] {
    [a, a, b, b]
}

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point> {
    let (p0, p1, p2, p3) = (
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    );
    [
        line_quad(p0, p1),
        line_quad(p1, p2),
        line_quad(p2, p3),
        line_quad(p3, p0),
    ]
    .concat()
}

fn filled(points: Vec<Point>, color: Color, draw_index: u32) -> DrawablePrimitive {
    DrawablePrimitive {
        points,
        fill: Paint::solid(color),
        stroke: Paint::transparent(),
        stroke_width: 0.0,
        line_cap: LineCap::Butt,
        line_join: LineJoin::Miter,
        draw_index,
    }
}

fn configured() -> CpuRenderer {
    let mut r = CpuRenderer::new(CpuRendererOpts::default());
    r.configure(Canvas::new(32, 32).unwrap(), Fps::new(30, 1).unwrap())
        .unwrap();
    r
}

#[test]
fn color_range_scales_and_clamps() {
    let c = Color::rgba(1.0, 0.5, 0.0, 2.0);
    assert_eq!(ColorRange::Unit.to_rgba8(c), [255, 128, 0, 255]);
    let c = Color::rgba(255.0, 51.0, -4.0, f64::NAN);
    assert_eq!(ColorRange::Byte.to_rgba8(c), [255, 51, 0, 0]);
}

#[test]
fn quadruplets_build_subpaths_and_drop_leftovers() {
    assert!(bezpath_from_points(&[Point::ZERO, Point::new(1.0, 1.0)]).is_none());

    let closed = bezpath_from_points(&square(0.0, 0.0, 4.0, 4.0)).unwrap();
    // move + 4 curves + close
    assert_eq!(closed.elements().len(), 6);

    let mut two = square(0.0, 0.0, 4.0, 4.0);
    two.extend(line_quad(Point::new(10.0, 10.0), Point::new(12.0, 10.0)));
    two.push(Point::new(99.0, 99.0));
    let path = bezpath_from_points(&two).unwrap();
    // closed square (6) + move + curve
    assert_eq!(path.elements().len(), 8);
}

#[test]
fn rasterize_requires_configure() {
    let mut r = CpuRenderer::new(CpuRendererOpts::default());
    assert!(r.rasterize().is_err());
    assert!(
        r.attach_surface(Box::new(InMemorySink::new())).is_err(),
        "attach before configure must fail"
    );
}

#[test]
fn background_fills_whole_surface() {
    let mut r = configured();
    r.set_background(Paint::solid(Color::rgba(1.0, 0.0, 0.0, 1.0)));
    let frame = r.rasterize().unwrap();
    assert_eq!((frame.width, frame.height), (32, 32));
    assert_eq!(frame.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(31, 31), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(32, 0), None);
}

#[test]
fn higher_draw_index_is_composited_on_top() {
    let mut r = configured();
    let green = Color::rgba(0.0, 1.0, 0.0, 1.0);
    let blue = Color::rgba(0.0, 0.0, 1.0, 1.0);
    // Added out of order on purpose.
    r.add_primitive(filled(square(4.0, 4.0, 28.0, 28.0), blue, 3));
    r.add_primitive(filled(square(0.0, 0.0, 32.0, 32.0), green, 1));
    let frame = r.rasterize().unwrap();
    assert_eq!(frame.pixel(16, 16), Some([0, 0, 255, 255]));
    assert_eq!(frame.pixel(1, 1), Some([0, 255, 0, 255]));
}

#[test]
fn zero_length_gradient_uses_last_stop() {
    let mut r = configured();
    let stops = vec![
        GradientStop {
            offset: 0.0,
            color: Color::rgba(1.0, 0.0, 0.0, 1.0),
        },
        GradientStop {
            offset: 1.0,
            color: Color::rgba(0.0, 0.0, 1.0, 1.0),
        },
    ];
    r.set_background(Paint::LinearGradient {
        start: Point::new(5.0, 5.0),
        end: Point::new(5.0, 5.0),
        stops,
    });
    let frame = r.rasterize().unwrap();
    assert_eq!(frame.pixel(20, 20), Some([0, 0, 255, 255]));
}

#[test]
fn frames_flow_to_attached_sink_in_order() {
    let mut r = configured();
    r.attach_surface(Box::new(InMemorySink::new())).unwrap();
    for _ in 0..3 {
        r.clear();
        r.set_background(Paint::solid(Color::rgba(0.0, 0.0, 0.0, 1.0)));
        r.render_current_frame().unwrap();
    }
    assert_eq!(r.frames_rendered(), 3);
    assert!(r.last_frame().is_some());
    assert!(
        r.configure(Canvas::new(8, 8).unwrap(), Fps::new(30, 1).unwrap())
            .is_err(),
        "reconfigure while attached must fail"
    );
    r.finish().unwrap();
    r.configure(Canvas::new(8, 8).unwrap(), Fps::new(30, 1).unwrap())
        .unwrap();
}

#[test]
fn clear_drops_previous_primitives() {
    let mut r = configured();
    r.add_primitive(filled(
        square(0.0, 0.0, 32.0, 32.0),
        Color::rgba(1.0, 1.0, 1.0, 1.0),
        1,
    ));
    r.clear();
    let frame = r.rasterize().unwrap();
    assert_eq!(frame.pixel(16, 16), Some([0, 0, 0, 0]));
}

use super::*;

/// Every char is `advance` wide; lines are `advance * 1.2` tall.
struct Monospace {
    advance: f32,
    calls: usize,
}

impl Monospace {
    fn new(advance: f32) -> Self {
        Self { advance, calls: 0 }
    }
}

impl TextMeasure for Monospace {
    fn measure(&mut self, text: &str) -> MockupResult<TextExtent> {
        self.calls += 1;
        Ok(TextExtent {
            width: text.chars().count() as f32 * self.advance,
            height: self.advance * 1.2,
        })
    }
}

struct Failing;

impl TextMeasure for Failing {
    fn measure(&mut self, _text: &str) -> MockupResult<TextExtent> {
        Err(MockupError::font("measure failed"))
    }
}

#[test]
fn empty_and_whitespace_text_yield_no_lines() {
    let mut m = Monospace::new(10.0);
    assert!(wrap_text(&mut m, "", 100.0).unwrap().is_empty());
    assert!(wrap_text(&mut m, "  \t\n ", 100.0).unwrap().is_empty());
}

#[test]
fn fits_on_one_line() {
    let mut m = Monospace::new(10.0);
    let lines = wrap_text(&mut m, "hola mundo", 100.0).unwrap();
    assert_eq!(lines, vec!["hola mundo"]);
}

#[test]
fn breaks_greedily_and_collapses_whitespace() {
    let mut m = Monospace::new(10.0);
    // 8 chars per line.
    let lines = wrap_text(&mut m, "aaa  bbb\tccc ddd", 80.0).unwrap();
    assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
}

#[test]
fn width_equal_to_max_is_accepted() {
    let mut m = Monospace::new(10.0);
    let lines = wrap_text(&mut m, "abcd efg", 80.0).unwrap();
    assert_eq!(lines, vec!["abcd efg"]);
}

#[test]
fn overlong_word_gets_its_own_line() {
    let mut m = Monospace::new(10.0);
    let lines = wrap_text(&mut m, "a supercalifragilistic b", 50.0).unwrap();
    assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
}

#[test]
fn lines_are_non_empty_and_within_bounds() {
    let mut m = Monospace::new(34.0);
    let text = "Desbloquea preguntas más profundas a medida que sube el nivel.";
    let max = 600.0;
    let lines = wrap_text(&mut m, text, max).unwrap();

    assert!(!lines.is_empty());
    for line in &lines {
        assert!(!line.trim().is_empty());
        let w = m.measure(line).unwrap().width;
        assert!(w <= max || !line.contains(' '), "{line:?} is {w}px");
    }
    assert_eq!(lines.join(" "), text);
}

#[test]
fn single_word_is_never_measured() {
    let mut m = Monospace::new(10.0);
    wrap_text(&mut m, "solo", 1.0).unwrap();
    assert_eq!(m.calls, 0);
}

#[test]
fn measure_errors_propagate() {
    assert!(wrap_text(&mut Failing, "one two", 10.0).is_err());
}

#[test]
fn brush_from_rgb_is_opaque() {
    let b = TextBrushRgba8::from(Rgb8::new(35, 42, 52));
    assert_eq!(
        b,
        TextBrushRgba8 {
            r: 35,
            g: 42,
            b: 52,
            a: 255
        }
    );
}

#[test]
fn engine_rejects_bad_size() {
    let font = TitleFont::from_bytes(vec![0u8; 4], 0).unwrap();
    assert!(matches!(
        TextLayoutEngine::new(font.clone(), 0.0, Rgb8::new(0, 0, 0)),
        Err(MockupError::Validation(_))
    ));
    assert!(TextLayoutEngine::new(font, f32::INFINITY, Rgb8::new(0, 0, 0)).is_err());
}

#[test]
fn engine_rejects_non_font_bytes() {
    let font = TitleFont::from_bytes(b"definitely not a font".to_vec(), 0).unwrap();
    assert!(matches!(
        TextLayoutEngine::new(font, 68.0, Rgb8::new(0, 0, 0)),
        Err(MockupError::Font(_))
    ));
}

/// Widths only; full measurement (ink box) is unavailable.
struct WidthOnly;

impl TextMeasure for WidthOnly {
    fn measure(&mut self, _text: &str) -> MockupResult<TextExtent> {
        Err(MockupError::font("ink box not available"))
    }

    fn measure_width(&mut self, text: &str) -> MockupResult<f32> {
        Ok(text.chars().count() as f32 * 10.0)
    }
}

#[test]
fn wrapping_only_needs_widths() {
    let lines = wrap_text(&mut WidthOnly, "aaa bbb ccc", 70.0).unwrap();
    assert_eq!(lines, vec!["aaa bbb", "ccc"]);
}

use super::*;
use crate::foundation::core::PixelRect;

const BASE: image::Rgb<u8> = image::Rgb([10, 200, 30]);
const SHOT: image::Rgb<u8> = image::Rgb([240, 5, 120]);

fn layout(screen: PixelRect, radius: u32) -> MockupLayout {
    MockupLayout {
        screen,
        screen_radius: radius,
        ..MockupLayout::default()
    }
}

#[test]
fn mask_without_radius_is_full() {
    let mask = rounded_rect_mask(5, 3, 0).unwrap();
    assert!(mask.pixels().all(|p| p.0[0] == 255));
}

#[test]
fn mask_corners_are_transparent_and_center_opaque() {
    let mask = rounded_rect_mask(40, 30, 10).unwrap();
    for (x, y) in [(0, 0), (39, 0), (0, 29), (39, 29), (1, 1), (38, 28)] {
        assert_eq!(mask.get_pixel(x, y).0[0], 0, "corner ({x},{y})");
    }
    for (x, y) in [(20, 15), (10, 0), (0, 10), (39, 15), (20, 29)] {
        assert_eq!(mask.get_pixel(x, y).0[0], 255, "inside ({x},{y})");
    }
}

#[test]
fn mask_is_symmetric() {
    let (w, h) = (33, 21);
    let mask = rounded_rect_mask(w, h, 8).unwrap();
    for y in 0..h {
        for x in 0..w {
            let v = mask.get_pixel(x, y).0[0];
            assert_eq!(v, mask.get_pixel(w - 1 - x, y).0[0]);
            assert_eq!(v, mask.get_pixel(x, h - 1 - y).0[0]);
        }
    }
}

#[test]
fn mask_rejects_empty() {
    assert!(rounded_rect_mask(0, 4, 1).is_err());
}

#[test]
fn pasted_content_stays_inside_rounded_rect() {
    let screen = PixelRect::new(5, 7, 40, 30).unwrap();
    let mut base = image::RgbImage::from_pixel(60, 50, BASE);
    let shot = image::RgbImage::from_pixel(80, 60, SHOT);

    paste_screenshot_image(&mut base, &shot, &layout(screen, 10)).unwrap();

    let mask = rounded_rect_mask(40, 30, 10).unwrap();
    for (x, y, px) in base.enumerate_pixels() {
        let inside_mask = screen.contains(x, y) && mask.get_pixel(x - 5, y - 7).0[0] == 255;
        if inside_mask {
            assert_eq!(*px, SHOT, "({x},{y}) should show the screenshot");
        } else {
            assert_eq!(*px, BASE, "({x},{y}) should keep the template");
        }
    }
    assert_eq!(*base.get_pixel(5, 7), BASE);
    assert_eq!(*base.get_pixel(44, 36), BASE);
    assert_eq!(*base.get_pixel(25, 22), SHOT);
}

#[test]
fn paste_clips_at_template_edge() {
    let screen = PixelRect::new(8, 8, 6, 6).unwrap();
    let mut base = image::RgbImage::from_pixel(10, 10, BASE);
    let shot = image::RgbImage::from_pixel(3, 3, SHOT);
    paste_screenshot_image(&mut base, &shot, &layout(screen, 0)).unwrap();
    assert_eq!(*base.get_pixel(9, 9), SHOT);
    assert_eq!(*base.get_pixel(7, 7), BASE);
}

#[test]
fn paste_missing_file_is_err() {
    let mut base = image::RgbImage::new(4, 4);
    let path = std::env::temp_dir().join("storeframe_screen_missing_does_not_exist.png");
    assert!(paste_screenshot(&mut base, &path, &MockupLayout::default()).is_err());
}

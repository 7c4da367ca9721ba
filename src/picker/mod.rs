//! HSV color picker controller.
//!
//! The (hue, saturation, brightness) triple is the single source of truth.
//! Every mutation goes through [`ColorPicker::refresh`], which recomputes the
//! RGB/hex readout and the cursor markers so nothing derived can go stale.

pub mod surface;

use log::{debug, warn};

use crate::core::color::{hsv_to_rgb, rgb_to_hsv, Hsv, Rgba};
use crate::error::HexParseError;
use surface::PixelBuffer;

/// Receives the confirmed color as `#rrggbb`
pub type OnColorSelect = Box<dyn FnMut(String)>;

pub struct ColorPicker {
    hsv: Hsv,
    rgb: Rgba,
    hex: String,
    square_size: (u16, u16),
    hue_track_size: (u16, u16),
    square_cursor: (f32, f32),
    hue_cursor: f32,
    square: PixelBuffer,
    square_revision: u64,
    hue_track: PixelBuffer,
    visible: bool,
    on_select: OnColorSelect,
}

impl ColorPicker {
    pub fn new(square_size: (u16, u16), hue_track_size: (u16, u16), on_select: OnColorSelect) -> Self {
        let hsv = Hsv::new(0.0, 100.0, 100.0);
        let mut picker = ColorPicker {
            hsv,
            rgb: hsv.to_rgb(),
            hex: String::new(),
            square_size,
            hue_track_size,
            square_cursor: (0.0, 0.0),
            hue_cursor: 0.0,
            square: surface::build_square(hsv.h, square_size.0, square_size.1),
            square_revision: 0,
            hue_track: surface::build_hue_track(hue_track_size.0, hue_track_size.1),
            visible: false,
            on_select,
        };
        picker.refresh();
        picker
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn rgb(&self) -> Rgba {
        self.rgb
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn square(&self) -> &PixelBuffer {
        &self.square
    }

    /// Bumped every time the square pixels are rebuilt
    pub fn square_revision(&self) -> u64 {
        self.square_revision
    }

    pub fn hue_track(&self) -> &PixelBuffer {
        &self.hue_track
    }

    pub fn square_size(&self) -> (u16, u16) {
        self.square_size
    }

    pub fn hue_track_size(&self) -> (u16, u16) {
        self.hue_track_size
    }

    /// Cursor marker position inside the square, in local pixels
    pub fn square_cursor(&self) -> (f32, f32) {
        self.square_cursor
    }

    /// Cursor marker offset along the hue track, in local pixels
    pub fn hue_cursor(&self) -> f32 {
        self.hue_cursor
    }

    /// Show the picker preloaded with `current` when it parses
    pub fn open(&mut self, current: &str) {
        if self.set_from_hex(current).is_err() {
            debug!("picker opened with unparseable color {current:?}, keeping {}", self.hex);
        }
        self.visible = true;
    }

    /// Pick saturation (x) and brightness (y) from a point on the square
    pub fn update_from_square(&mut self, local_x: f32, local_y: f32) {
        let (w, h) = (self.square_size.0 as f32, self.square_size.1 as f32);
        let x = local_x.clamp(0.0, w);
        let y = local_y.clamp(0.0, h);

        self.hsv.s = x / w * 100.0;
        self.hsv.v = 100.0 - y / h * 100.0;
        self.refresh();
    }

    /// Pick hue from a point on the track; the square follows the new hue
    pub fn update_from_hue(&mut self, local_y: f32) {
        let h = self.hue_track_size.1 as f32;
        let y = local_y.clamp(0.0, h);

        self.hsv.h = (y / h * 360.0).rem_euclid(360.0);
        self.hue_cursor = y;
        self.rebuild_square();
        self.refresh();
    }

    /// Drive the picker from typed hex; invalid text leaves state untouched
    pub fn set_from_hex(&mut self, text: &str) -> Result<(), HexParseError> {
        let color = text.trim().parse::<Rgba>()?;
        self.set_from_rgb(color);
        Ok(())
    }

    /// Drive the picker from typed channels, each clamped to 0-255
    pub fn set_from_rgb_channels(&mut self, r: i32, g: i32, b: i32) {
        self.set_from_rgb(Rgba::from_channels(r, g, b));
    }

    /// Hand the current color to the host, then close
    pub fn confirm_selection(&mut self) {
        debug!("picker confirmed {}", self.hex);
        (self.on_select)(self.hex.clone());
        self.visible = false;
    }

    /// Close without reporting anything
    pub fn cancel(&mut self) {
        self.visible = false;
    }

    fn set_from_rgb(&mut self, color: Rgba) {
        let hsv = rgb_to_hsv(color);
        let hue_changed = hsv.h != self.hsv.h;
        self.hsv = hsv;
        if hue_changed {
            self.rebuild_square();
        }
        self.refresh();

        if self.rgb != color {
            // Conversion drift would show the user a different color than typed
            warn!("picker drifted from {color} to {}", self.rgb);
        }
    }

    fn rebuild_square(&mut self) {
        self.square = surface::build_square(self.hsv.h, self.square_size.0, self.square_size.1);
        self.square_revision += 1;
    }

    fn refresh(&mut self) {
        self.rgb = hsv_to_rgb(self.hsv.h, self.hsv.s, self.hsv.v);
        self.hex = self.rgb.to_hex();
        self.square_cursor = (
            self.hsv.s / 100.0 * self.square_size.0 as f32,
            (100.0 - self.hsv.v) / 100.0 * self.square_size.1 as f32,
        );
        // The track's bottom edge is hue 0 too; a marker placed there stays put
        let track = self.hue_track_size.1 as f32;
        let placed = (self.hue_cursor / track * 360.0).rem_euclid(360.0);
        if placed != self.hsv.h {
            self.hue_cursor = self.hsv.h / 360.0 * track;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn picker() -> (ColorPicker, Rc<RefCell<Vec<String>>>) {
        let selected = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&selected);
        let picker = ColorPicker::new(
            (200, 200),
            (20, 200),
            Box::new(move |hex| sink.borrow_mut().push(hex)),
        );
        (picker, selected)
    }

    #[test]
    fn starts_at_pure_red() {
        let (picker, _) = picker();
        assert_eq!(picker.hex(), "#ff0000");
        assert_eq!(picker.square_cursor(), (200.0, 0.0));
        assert!(!picker.is_visible());
    }

    #[test]
    fn square_maps_saturation_and_brightness() {
        let (mut picker, _) = picker();
        picker.update_from_square(0.0, 0.0);
        assert_eq!(picker.hex(), "#ffffff");

        picker.update_from_square(100.0, 100.0);
        assert_eq!(picker.hsv(), Hsv::new(0.0, 50.0, 50.0));
        assert_eq!(picker.rgb(), Rgba::rgb(128, 64, 64));
        assert_eq!(picker.square_cursor(), (100.0, 100.0));
    }

    #[test]
    fn square_input_is_clamped() {
        let (mut picker, _) = picker();
        picker.update_from_square(-40.0, 900.0);
        assert_eq!(picker.hsv(), Hsv::new(0.0, 0.0, 0.0));
        assert_eq!(picker.square_cursor(), (0.0, 200.0));

        picker.update_from_square(500.0, -3.0);
        assert_eq!(picker.hsv(), Hsv::new(0.0, 100.0, 100.0));
    }

    #[test]
    fn hue_change_rebuilds_square() {
        let (mut picker, _) = picker();
        let before = picker.square_revision();

        picker.update_from_hue(200.0 / 3.0);
        assert!((picker.hsv().h - 120.0).abs() < 1e-3);
        assert_eq!(picker.hex(), "#00ff00");
        assert_eq!(picker.square_revision(), before + 1);
        assert_eq!(picker.square().pixel(199, 0), Some(Rgba::rgb(0, 255, 0)));
    }

    #[test]
    fn hue_track_bottom_wraps_to_zero() {
        let (mut picker, _) = picker();
        picker.update_from_hue(1000.0);
        assert_eq!(picker.hsv().h, 0.0);
        assert_eq!(picker.hex(), "#ff0000");
        assert_eq!(picker.hue_cursor(), 200.0);
        picker.update_from_square(50.0, 50.0);
        assert_eq!(picker.hue_cursor(), 200.0);

        picker.update_from_hue(-5.0);
        assert_eq!(picker.hsv().h, 0.0);
        assert_eq!(picker.hue_cursor(), 0.0);
    }

    #[test]
    fn hex_entry_round_trips() {
        let (mut picker, _) = picker();
        for hex in ["#123456", "#ABCDEF", "0f0f0f", "#00ff7f"] {
            picker.set_from_hex(hex).unwrap();
            assert_eq!(picker.hex(), format!("#{}", hex.trim_start_matches('#').to_lowercase()));
        }
    }

    #[test]
    fn invalid_hex_keeps_previous_state() {
        let (mut picker, _) = picker();
        picker.set_from_hex("#336699").unwrap();
        let before = picker.hsv();

        assert!(picker.set_from_hex("#33669").is_err());
        assert!(picker.set_from_hex("#zz6699").is_err());
        assert_eq!(picker.hsv(), before);
        assert_eq!(picker.hex(), "#336699");
    }

    #[test]
    fn rgb_channels_are_clamped() {
        let (mut picker, _) = picker();
        picker.set_from_rgb_channels(300, -10, 128);
        assert_eq!(picker.rgb(), Rgba::rgb(255, 0, 128));
        assert_eq!(picker.hex(), "#ff0080");
    }

    #[test]
    fn confirm_reports_and_closes() {
        let (mut picker, selected) = picker();
        picker.open("#00ff00");
        assert!(picker.is_visible());

        picker.confirm_selection();
        assert!(!picker.is_visible());
        assert_eq!(*selected.borrow(), vec!["#00ff00".to_string()]);
    }

    #[test]
    fn cancel_reports_nothing() {
        let (mut picker, selected) = picker();
        picker.open("not a color");
        assert_eq!(picker.hex(), "#ff0000");
        picker.update_from_square(10.0, 10.0);
        picker.cancel();
        assert!(!picker.is_visible());
        assert!(selected.borrow().is_empty());
    }
}

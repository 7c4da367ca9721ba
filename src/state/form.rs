use crate::core::color::Rgba;
use crate::picker::ColorPicker;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Hex,
    Red,
    Green,
    Blue,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Hex, Field::Red, Field::Green, Field::Blue];

    pub fn label(self) -> &'static str {
        match self {
            Field::Hex => "Hex",
            Field::Red => "R",
            Field::Green => "G",
            Field::Blue => "B",
        }
    }

    fn max_len(self) -> usize {
        match self {
            Field::Hex => 7,
            _ => 4,
        }
    }
}

/// Text entry fields of the picker modal
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PickerForm {
    pub hex: String,
    pub red: String,
    pub green: String,
    pub blue: String,
    pub focus: Option<Field>,
}

impl PickerForm {
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Hex => &self.hex,
            Field::Red => &self.red,
            Field::Green => &self.green,
            Field::Blue => &self.blue,
        }
    }

    fn text_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Hex => &mut self.hex,
            Field::Red => &mut self.red,
            Field::Green => &mut self.green,
            Field::Blue => &mut self.blue,
        }
    }

    /// Overwrite every field except the one being typed into
    pub fn sync_from(&mut self, picker: &ColorPicker) {
        let rgb = picker.rgb();
        let values = [
            (Field::Hex, picker.hex().to_string()),
            (Field::Red, rgb.r.to_string()),
            (Field::Green, rgb.g.to_string()),
            (Field::Blue, rgb.b.to_string()),
        ];
        for (field, value) in values {
            if self.focus != Some(field) {
                *self.text_mut(field) = value;
            }
        }
    }

    /// Append a typed character to the focused field and push it to the picker
    pub fn type_char(&mut self, c: char, picker: &mut ColorPicker) {
        let Some(field) = self.focus else { return };
        let text = self.text_mut(field);
        if c.is_control() || text.chars().count() >= field.max_len() {
            return;
        }
        text.push(c);
        self.apply(field, picker);
    }

    pub fn backspace(&mut self, picker: &mut ColorPicker) {
        let Some(field) = self.focus else { return };
        self.text_mut(field).pop();
        self.apply(field, picker);
    }

    fn apply(&mut self, field: Field, picker: &mut ColorPicker) {
        match field {
            // Half-typed hex is expected; the picker keeps its last valid color
            Field::Hex => {
                if picker.set_from_hex(&self.hex).is_err() {
                    return;
                }
            }
            Field::Red | Field::Green | Field::Blue => picker.set_from_rgb_channels(
                parse_channel(&self.red),
                parse_channel(&self.green),
                parse_channel(&self.blue),
            ),
        }
        self.sync_from(picker);
    }
}

/// Hex text typed straight into the side panel.
///
/// While active, every complete color previews on the canvas; the paint color
/// from before editing is kept so an abandoned edit can be rolled back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorEntry {
    text: String,
    original: Option<Rgba>,
}

impl ColorEntry {
    pub fn is_active(&self) -> bool {
        self.original.is_some()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn begin(&mut self, current: Rgba) {
        if self.is_active() {
            return;
        }
        self.original = Some(current);
        self.text = current.to_hex();
    }

    /// Accept hex digits and a leading '#'; returns the color once complete
    pub fn type_char(&mut self, c: char) -> Option<Rgba> {
        let accepted = c.is_ascii_hexdigit() || (c == '#' && self.text.is_empty());
        if !self.is_active() || !accepted || self.text.chars().count() >= Field::Hex.max_len() {
            return None;
        }
        self.text.push(c);
        self.parsed()
    }

    pub fn backspace(&mut self) -> Option<Rgba> {
        if !self.is_active() {
            return None;
        }
        self.text.pop();
        self.parsed()
    }

    /// Stop editing. `Ok` carries the typed color, `Err` the color to restore.
    pub fn finish(&mut self) -> Option<Result<Rgba, Rgba>> {
        let original = self.original.take()?;
        let result = self.parsed().ok_or(original);
        self.text.clear();
        Some(result)
    }

    /// Stop editing and hand back the color from before the edit
    pub fn cancel(&mut self) -> Option<Rgba> {
        self.text.clear();
        self.original.take()
    }

    fn parsed(&self) -> Option<Rgba> {
        self.text.parse::<Rgba>().ok()
    }
}

/// Leading integer of `text`, 0 when there is none
pub fn parse_channel(text: &str) -> i32 {
    let text = text.trim();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end]
        .parse::<i64>()
        .map(|value| (sign * value).clamp(i32::MIN as i64, i32::MAX as i64) as i32)
        .unwrap_or(0)
}

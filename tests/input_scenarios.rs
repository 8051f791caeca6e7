//! End-to-end editing scenarios for masked input.
//!
//! Each test drives a formatter the way a text field would: keystrokes and
//! backspaces at the current caret, feeding every result into the next edit.

use textmask::{
    FormattedTextValue, FormatterOptions, InputFilter, PatternFormatter, PatternInputFormatter,
    TextFormatter, TextInputFormatter,
};

/// Minimal text field state driven by a formatter.
struct Field {
    formatter: PatternInputFormatter,
    value: FormattedTextValue,
    transcript: Vec<String>,
}

impl Field {
    fn new(formatter: PatternInputFormatter) -> Self {
        Self {
            formatter,
            value: FormattedTextValue::default(),
            transcript: Vec::new(),
        }
    }

    fn apply(&mut self, range: std::ops::Range<usize>, replacement: &str) {
        self.value = self
            .formatter
            .format_input(Some(self.value.formatted_text.as_str()), range, replacement);
        self.transcript.push(format!(
            "{:?} @ {}",
            self.value.formatted_text, self.value.caret_begin_offset
        ));
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            let caret = self.value.caret_begin_offset;
            self.apply(caret..caret, &c.to_string());
        }
    }

    fn backspace(&mut self, times: usize) {
        for _ in 0..times {
            let caret = self.value.caret_begin_offset;
            self.apply(caret.saturating_sub(1)..caret, "");
        }
    }

    fn transcript(&self) -> String {
        self.transcript.join("\n")
    }
}

#[test]
fn phone_number_formatting() {
    let f = PatternFormatter::new("### (###) ###-##-##");
    assert_eq!(f.format("1234567890"), "123 (456) 789-0");
    assert_eq!(f.unformat("123 (456) 789-0"), "1234567890");
}

#[test]
fn overflow_is_dropped_at_pattern_end() {
    let f = PatternFormatter::new("##-##");
    assert_eq!(f.format("12345"), "12-34");
}

#[test]
fn delete_relocates_caret_to_preceding_slot() {
    let f = PatternInputFormatter::new("###-###");
    let value = f.format_input(Some("123-45"), 5..6, "");
    insta::assert_debug_snapshot!(value, @r#"
    FormattedTextValue {
        formatted_text: "123-4",
        caret_begin_offset: 5,
    }
    "#);
}

#[test]
fn insert_into_full_field_snaps_to_pattern_end() {
    let f = PatternInputFormatter::new("###-###");
    let value = f.format_input(Some("123-456"), 7..7, "9");
    insta::assert_debug_snapshot!(value, @r#"
    FormattedTextValue {
        formatted_text: "123-456",
        caret_begin_offset: 7,
    }
    "#);
}

#[test]
fn typing_and_erasing_a_phone_number() {
    let mut field = Field::new(PatternInputFormatter::new("+7 (###) ###-##-##"));
    field.type_text("9123456789");
    field.backspace(3);

    insta::assert_snapshot!(field.transcript(), @r#"
    "+7 (9" @ 5
    "+7 (91" @ 6
    "+7 (912" @ 7
    "+7 (912) 3" @ 10
    "+7 (912) 34" @ 11
    "+7 (912) 345" @ 12
    "+7 (912) 345-6" @ 14
    "+7 (912) 345-67" @ 15
    "+7 (912) 345-67-8" @ 17
    "+7 (912) 345-67-89" @ 18
    "+7 (912) 345-67-8" @ 17
    "+7 (912) 345-67" @ 15
    "+7 (912) 345-6" @ 14
    "#);
}

#[test]
fn numeric_filter_ignores_letters() {
    let options = FormatterOptions::default().with_input_filter(InputFilter::NUMERIC);
    let mut field = Field::new(PatternInputFormatter::with_options("##/##", options));
    field.type_text("1x2y3");

    insta::assert_snapshot!(field.transcript(), @r#"
    "1" @ 1
    "1" @ 1
    "12" @ 2
    "12" @ 2
    "12/3" @ 4
    "#);
}

#[test]
fn custom_symbol_date_mask() {
    let mut field = Field::new(PatternInputFormatter::with_symbol("dd.dd.dddd", 'd'));
    field.type_text("17102026");
    assert_eq!(field.value.formatted_text, "17.10.2026");
    assert_eq!(field.value.caret_begin_offset, 10);
    assert_eq!(field.formatter.unformat(&field.value.formatted_text), "17102026");
}

#[test]
fn paste_replaces_selection() {
    let f = PatternInputFormatter::new("#### #### #### ####");
    let value = f.format_input(Some("4111 1111"), 0..9, "5500000000000004");
    assert_eq!(value.formatted_text, "5500 0000 0000 0004");
    assert_eq!(value.caret_begin_offset, 19);
    assert!(f.formatter().is_complete(&value.formatted_text));
}

#[test]
fn absent_text_is_treated_as_empty() {
    let f = PatternInputFormatter::new("(###)");
    assert_eq!(
        f.format_input(None, 0..0, "5"),
        f.format_input(Some(""), 0..0, "5")
    );
    assert_eq!(f.format_opt(None), None);
    assert_eq!(f.unformat_opt(None), None);
}

use super::borders::{LEFT_BORDERS, RIGHT_BORDERS};
use super::{
    contains_border_glyphs, fit, is_structured, mirror, normalize_line, normalize_lines,
    normalize_optional_lines, normalize_text,
};

fn len(s: &str) -> usize {
    s.chars().count()
}

#[test]
fn fit_pads_and_truncates() {
    let chars: Vec<char> = "abc".chars().collect();
    assert_eq!(fit(&chars, 5, '.'), "abc..");
    assert_eq!(fit(&chars, 2, '.'), "ab");
    assert_eq!(fit(&chars, 3, '.'), "abc");
    assert_eq!(fit(&chars, 0, '.'), "");
}

#[test]
fn normalize_line_zero_width_is_empty() {
    assert_eq!(normalize_line("│abc│", 0), "");
    assert_eq!(normalize_line("", 0), "");
}

#[test]
fn normalize_line_empty_becomes_spaces() {
    assert_eq!(normalize_line("", 4), "    ");
}

#[test]
fn normalize_line_single_char_is_padded_with_space() {
    assert_eq!(normalize_line("│", 3), "│  ");
    assert_eq!(normalize_line("x", 1), "x");
}

#[test]
fn normalize_line_uniform_keeps_character() {
    assert_eq!(normalize_line("-----", 8), "--------");
    assert_eq!(normalize_line("=====", 3), "===");
    assert_eq!(normalize_line("──", 5), "─────");
    assert_eq!(normalize_line("**", 4), "****");
}

#[test]
fn normalize_line_synthesizes_right_border() {
    assert_eq!(normalize_line("│abc", 6), "│abc │");
    assert_eq!(normalize_line("┌──", 6), "┌────┐");
    assert_eq!(normalize_line("╚══", 5), "╚═══╝");
}

#[test]
fn normalize_line_truncates_interior_keeping_borders() {
    assert_eq!(normalize_line("┌abcdefgh┐", 6), "┌abcd┐");
    assert_eq!(normalize_line("║ long content here ║", 8), "║ long ║");
}

#[test]
fn normalize_line_uniform_interior_uses_its_fill() {
    assert_eq!(normalize_line("┌──┐", 8), "┌──────┐");
    assert_eq!(normalize_line("+--+", 6), "+----+");
}

#[test]
fn normalize_line_right_border_only_keeps_first_char() {
    assert_eq!(normalize_line("abc│", 5), "abc │");
    assert_eq!(normalize_line("x──┘", 6), "x────┘");
}

#[test]
fn normalize_line_plain_text_is_padded_not_bordered() {
    assert_eq!(normalize_line("Hello", 8), "Hello   ");
    assert_eq!(normalize_line("Hello world", 5), "Hello");
}

#[test]
fn normalize_line_narrow_widths() {
    assert_eq!(normalize_line("│abc", 1), "│");
    assert_eq!(normalize_line("│abc", 2), "││");
    assert_eq!(normalize_line("┌abc┐", 2), "┌┐");
}

#[test]
fn normalize_line_output_always_matches_width() {
    let samples = [
        "",
        "x",
        "│",
        "-----",
        "│abc",
        "┌abcdefgh┐",
        "ab│",
        "Hello world",
        "╔═ TITLE ═╗",
        "+ mixed | glyphs *",
        "ünïcödé │",
    ];
    for line in samples {
        for width in 1..=12 {
            let out = normalize_line(line, width);
            assert_eq!(len(&out), width, "line {:?} width {}", line, width);
        }
    }
}

#[test]
fn mirror_table_is_exact() {
    let pairs = [
        ('│', '│'),
        ('║', '║'),
        ('|', '|'),
        ('┌', '┐'),
        ('└', '┘'),
        ('╔', '╗'),
        ('╚', '╝'),
        ('├', '┤'),
        ('╠', '╣'),
        ('*', '*'),
        ('+', '+'),
    ];
    for (left, right) in pairs {
        assert_eq!(mirror(left), right, "mirror of {:?}", left);
    }
    assert_eq!(mirror('#'), '│');
    assert_eq!(mirror('┐'), '│');
}

#[test]
fn every_left_border_mirrors_into_right_set() {
    for &left in LEFT_BORDERS {
        assert!(RIGHT_BORDERS.contains(&mirror(left)));
    }
}

#[test]
fn normalize_lines_applies_to_every_line() {
    let out = normalize_lines(&["│abc", "-----", "plain"], 6);
    assert_eq!(out, vec!["│abc │", "------", "plain "]);
}

#[test]
fn normalize_lines_empty_input_and_empty_lines() {
    let empty: [&str; 0] = [];
    assert!(normalize_lines(&empty, 10).is_empty());
    assert_eq!(normalize_lines(&[String::new()], 3), vec!["   "]);
}

#[test]
fn is_structured_classification() {
    assert!(!is_structured(""));
    assert!(is_structured("-----"));
    assert!(is_structured("a"));
    assert!(is_structured("text with | pipe"));
    assert!(is_structured("│Hi"));
    assert!(!is_structured("Hello"));
    assert!(!is_structured("Plain prose, with punctuation."));
}

#[test]
fn normalize_text_only_touches_structured_lines() {
    let result = normalize_text("-----\nHello\n│Hi", 6);
    let lines: Vec<&str> = result.split('\n').collect();
    assert_eq!(lines, vec!["------", "Hello", "│Hi  │"]);
}

#[test]
fn normalize_text_leaves_prose_byte_identical() {
    let prose = "The quick brown fox jumps over the lazy dog.\n\nA second paragraph that is far wider than the target.";
    assert_eq!(normalize_text(prose, 10), prose);
}

#[test]
fn normalize_text_empty_input() {
    assert_eq!(normalize_text("", 10), "");
}

#[test]
fn contains_border_glyphs_detection() {
    assert!(!contains_border_glyphs("Hello"));
    assert!(!contains_border_glyphs(""));
    assert!(contains_border_glyphs("┌──┐\n| ok |"));
    assert!(contains_border_glyphs("first\nsecond ║"));
}

#[test]
fn normalize_optional_lines_treats_missing_as_empty() {
    let out = normalize_optional_lines(&[Some("┌─"), None, Some("ab")], 4);
    assert_eq!(out, vec!["┌──┐", "    ", "ab  "]);
    assert!(normalize_optional_lines(&[], 4).is_empty());
}

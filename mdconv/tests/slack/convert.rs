use super::slack;
use insta::assert_snapshot;

#[test]
fn test_headings_render_bold_at_every_level() {
    for level in 1..=6 {
        let markdown = format!("{} Heading {level}", "#".repeat(level));
        assert_eq!(slack(&markdown), format!("*Heading {level}*"));
    }
}

#[test]
fn test_horizontal_rules_render_blank_lines() {
    assert_eq!(slack("above\n___\nbelow"), "above\n\n\n\nbelow");
    assert_eq!(slack("above\n\n---\nbelow"), "above\n\n\n\nbelow");
    assert_eq!(slack("above\n***\nbelow"), "above\n\n\n\nbelow");
}

#[test]
fn test_bold() {
    assert_snapshot!(slack("**This is bold text**"), @"*This is bold text*");
    assert_snapshot!(slack("__This is bold text__"), @"*This is bold text*");
}

#[test]
fn test_italic() {
    assert_snapshot!(slack("*This is italic text*"), @"_This is italic text_");
    assert_snapshot!(slack("_This is italic text_"), @"_This is italic text_");
}

#[test]
fn test_strikethrough() {
    assert_snapshot!(slack("~~Strikethrough~~"), @"~Strikethrough~");
}

#[test]
fn test_blockquote() {
    assert_eq!(slack("> blockquote"), "> blockquote");
}

#[test]
fn test_unordered_markers_all_render_bullets() {
    for marker in ["+", "-", "*"] {
        let markdown = format!("{marker} one\n{marker} two\n{marker} three");
        assert_eq!(slack(&markdown), "• one\n• two\n• three", "marker {marker}");
    }
}

#[test]
fn test_ordered_lists_are_renumbered_from_one() {
    let expected = "1. one\n2. two\n3. three";
    assert_eq!(slack("1. one\n1. two\n1. three"), expected);
    assert_eq!(slack("1. one\n2. two\n3. three"), expected);
    assert_eq!(slack("42. one\n43. two\n44. three"), expected);
    assert_eq!(slack("42. one\n1. two\n1. three"), expected);
}

#[test]
fn test_inline_code() {
    assert_snapshot!(slack("`inline code`"), @"`inline code`");
    assert_eq!(slack("`` spaced ``"), "`spaced`");
}

#[test]
fn test_fenced_code_block() {
    assert_eq!(slack("```\ncode block\n```"), "```\ncode block\n```");
    // Info string is dropped
    assert_eq!(
        slack("```rust\nfn main() {}\n```"),
        "```\nfn main() {}\n```"
    );
}

#[test]
fn test_indented_code_block() {
    assert_eq!(
        slack("\tindented code block\n\twith two lines"),
        "```\nindented code block\nwith two lines\n```"
    );
}

#[test]
fn test_link() {
    assert_snapshot!(
        slack("[evilmonkeyinc](https://github.com/evilmonkeyinc)"),
        @"<https://github.com/evilmonkeyinc|evilmonkeyinc>"
    );
}

#[test]
fn test_link_title_is_rendered_inline() {
    assert_eq!(
        slack("[see `docs`](https://example.com/docs)"),
        "<https://example.com/docs|see `docs`>"
    );
}

#[test]
fn test_autolink() {
    assert_eq!(
        slack("https://example.com"),
        "<https://example.com|https://example.com>"
    );
}

#[test]
fn test_inline_formatting_is_followed_by_a_line_break() {
    // Strong, emphasis and strikethrough are containers, so each gets an exit newline
    assert_eq!(slack("This is **bold** text"), "This is *bold*\n text");
}

#[test]
fn test_multi_line_blockquote() {
    assert_eq!(slack("> one\n> two"), "> one\ntwo");
}

#[test]
fn test_soft_breaks_are_kept() {
    assert_eq!(slack("first line\nsecond line"), "first line\nsecond line");
}

#[test]
fn test_hard_breaks_become_newlines() {
    assert_eq!(slack("line  \nnext"), "line\nnext");
    assert_eq!(slack("line\\\nnext"), "line\nnext");
}

#[test]
fn test_raw_html_passes_through() {
    assert_eq!(slack("a <b>b</b> c"), "a <b>b</b> c");
}

#[test]
fn test_image_renders_alt_text() {
    assert_eq!(slack("![logo](logo.png)"), "logo");
}

#[test]
fn test_crlf_input() {
    assert_eq!(slack("1. one\r\n1. two\r\n"), "1. one\n2. two");
}

#[test]
fn test_empty_and_blank_input() {
    assert_eq!(slack(""), "");
    assert_eq!(slack("\n\n\t \n"), "");
}

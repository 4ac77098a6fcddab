use insta::assert_snapshot;
use mdconv::formats::HttpConverter;
use mdconv::Converter;

fn html(markdown: &str) -> String {
    HttpConverter
        .convert(markdown)
        .expect("html conversion never fails")
}

#[test]
fn test_headings() {
    for level in 1..=6 {
        let markdown = format!("{} Heading {level}", "#".repeat(level));
        assert_eq!(html(&markdown), format!("<h{level}>Heading {level}</h{level}>"));
    }
}

#[test]
fn test_inline_formatting() {
    assert_snapshot!(html("**This is bold text**"), @"<p><strong>This is bold text</strong></p>");
    assert_snapshot!(html("_This is italic text_"), @"<p><em>This is italic text</em></p>");
    assert_snapshot!(html("~~Strikethrough~~"), @"<p><del>Strikethrough</del></p>");
    assert_snapshot!(html("`inline code`"), @"<p><code>inline code</code></p>");
}

#[test]
fn test_link() {
    assert_eq!(
        html("[evilmonkeyinc](https://github.com/evilmonkeyinc)"),
        "<p><a href=\"https://github.com/evilmonkeyinc\">evilmonkeyinc</a></p>"
    );
}

#[test]
fn test_ordered_list_keeps_start_number() {
    let output = html("42. one\n43. two");
    assert!(output.starts_with("<ol start=\"42\">"), "{output}");
}

#[test]
fn test_table_is_rendered() {
    let output = html("| a | b |\n| --- | --- |\n| 1 | 2 |\n");
    assert!(output.starts_with("<table>"), "{output}");
    assert!(output.contains("<th>a</th>"));
    assert!(output.contains("<td>2</td>"));
    assert!(output.ends_with("</table>"));
}

#[test]
fn test_output_is_trimmed() {
    let output = html("\n\nparagraph\n\n");
    assert_eq!(output, "<p>paragraph</p>");
}

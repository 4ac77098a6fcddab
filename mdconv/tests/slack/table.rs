use super::slack;

#[test]
fn test_table_alignment() {
    let markdown = "
| Header 1 | Header 2 | Header 3 |
| --- | --- | --- |
| short value | longer value | really long value |
| qwerty | asdfgh | zxcvbn |
\t\t\t";
    assert_eq!(
        slack(markdown),
        "*Header 1*   *Header 2*    *Header 3*\nshort value  longer value  really long value\nqwerty       asdfgh        zxcvbn"
    );
}

#[test]
fn test_header_only_table() {
    let markdown = "| Name | Value |\n| --- | --- |\n";
    assert_eq!(slack(markdown), "*Name*  *Value*");
}

#[test]
fn test_column_alignment_markers_are_ignored() {
    let markdown = "| L | C | R |\n| :--- | :-: | --: |\n| left | center | right |\n";
    assert_eq!(slack(markdown), "*L*   *C*     *R*\nleft  center  right");
}

#[test]
fn test_cells_with_inline_formatting() {
    let markdown = "| a | b |\n| --- | --- |\n| `x` | [y](https://y.test) |\n";
    assert_eq!(slack(markdown), "*a*  *b*\n`x`  <https://y.test|y>");
}

#[test]
fn test_empty_cells_keep_minimum_width() {
    let markdown = "| a | b |\n| --- | --- |\n|  | z |\n";
    assert_eq!(slack(markdown), "*a*  *b*\n     z");
}

#[test]
fn test_table_between_paragraphs() {
    let markdown = "before\n\n| a | b |\n| --- | --- |\n| 1 | 2 |\n\nafter";
    assert_eq!(slack(markdown), "before\n\n*a*  *b*\n1    2\n\n\n\nafter");
}

#[test]
fn test_wide_characters_count_as_one_column() {
    let markdown = "| ä | b |\n| --- | --- |\n| ü | c |\n";
    assert_eq!(slack(markdown), "*ä*  *b*\nü    c");
}

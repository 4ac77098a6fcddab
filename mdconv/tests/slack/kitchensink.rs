//! Every supported construct in one document, checked byte for byte.

use super::slack;

const KITCHENSINK: &str = r#"
# Heading 1

## Heading 2

### Heading 3

#### Heading 4

##### Heading 5

###### Heading 6

**This is bold text**

__This is bold text__

*This is italic text*

_This is italic text_

~~Strikethrough~~

> blockquote

* one
* two
* three

1. one
1. two
1. three

[evilmonkeyinc](https://github.com/evilmonkeyinc)

| Header 1 | Header 2 | Header 3 |
| --- | --- | --- |
| short value | longer value | really long value |
| qwerty | asdfgh | zxcvbn |
"#;

const EXPECTED: &str = "*Heading 1*\n\n*Heading 2*\n\n*Heading 3*\n\n*Heading 4*\n\n*Heading 5*\n\n*Heading 6*\n\n*This is bold text*\n\n\n*This is bold text*\n\n\n_This is italic text_\n\n\n_This is italic text_\n\n\n~Strikethrough~\n\n> blockquote\n• one\n• two\n• three\n\n1. one\n2. two\n3. three\n\n\n<https://github.com/evilmonkeyinc|evilmonkeyinc>\n\n*Header 1*   *Header 2*    *Header 3*\nshort value  longer value  really long value\nqwerty       asdfgh        zxcvbn";

#[test]
fn test_kitchensink() {
    assert_eq!(slack(KITCHENSINK), EXPECTED);
}

#[test]
fn test_kitchensink_is_deterministic() {
    assert_eq!(slack(KITCHENSINK), slack(KITCHENSINK));
}

#[test]
fn test_kitchensink_with_crlf_line_endings() {
    let crlf = KITCHENSINK.replace('\n', "\r\n");
    assert_eq!(slack(&crlf), EXPECTED);
}

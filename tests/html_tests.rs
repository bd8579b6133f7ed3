use assertkit::assert::{self, HtmlComparison, compare_html, normalize_html};
use assertkit::{Recorder, TestReporter};

#[test]
fn test_equal_html_ignores_whitespace_between_tags() {
    let mut t = TestReporter::named("equal_html");
    assert::equal_html(
        &mut t,
        "<p>Hello world</p><p>This is next line</p>",
        r#"
		<p>Hello world</p>
		<p>This is next line</p>
	"#,
    );
}

#[test]
fn test_equal_html_spaces_between_siblings() {
    let mut t = Recorder::new();
    assert::equal_html(&mut t, "<p>Hello</p> <p>world<p>", "<p>Hello</p>    <p>world<p>");
    assert::equal_html(&mut t, "<ul>\n  <li>a</li>\n</ul>", "<ul><li>a</li></ul>");
    assert!(!t.failed());
}

#[test]
fn test_equal_html_keeps_text_whitespace() {
    let mut t = Recorder::new();
    assert::equal_html(&mut t, "<p>Hello</p>", "<p> Hello </p>");

    assert_eq!(
        t.failures(),
        &["\nexpected:\n<p>Hello</p>\nactual   :\n<p> Hello </p>"]
    );
    assert_eq!(t.helper_calls(), 1);
}

#[test]
fn test_equal_html_reports_trimmed_expected_and_normalized_actual() {
    let mut t = Recorder::new();
    assert::equal_html(&mut t, "\n  <b>x</b>  \n", "<i>y</i>\n\n<b>x</b>");

    let failure = t.last_failure().unwrap();
    assert!(failure.contains("expected:\n<b>x</b>\n"));
    assert!(failure.ends_with("actual   :\n<i>y</i><b>x</b>"));
}

#[test]
fn test_equal_html_does_not_parse_markup() {
    let mut t = Recorder::new();
    assert::equal_html(&mut t, "<a href=\"x\" id=\"y\">", "<a id=\"y\" href=\"x\">");
    assert::equal_html(&mut t, "<p>&amp;</p>", "<p>&</p>");
    assert_eq!(t.failures().len(), 2);
}

#[test]
fn test_compare_html_outcome() {
    assert_eq!(compare_html("<br>", " <br> "), HtmlComparison::Equal);
    assert!(matches!(
        compare_html("<br>", "<hr>"),
        HtmlComparison::Different { .. }
    ));
    assert_eq!(normalize_html("<a>\r\n\t<b>"), "<a><b>");
}

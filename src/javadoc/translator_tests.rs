use super::*;
use crate::config::SummaryStyle;

fn translate(source: &str) -> (String, TranslationReport) {
    CommentTranslator::default().translate(source.to_string()).unwrap()
}

#[test]
fn test_source_without_comments_is_unchanged() {
    let source = "namespace XNATWL\n{\n    public class Empty\n    {\n    }\n}\n";
    let (output, report) = translate(source);
    assert_eq!(output, source);
    assert_eq!(report, TranslationReport::default());
}

#[test]
fn test_copyright_header_is_preserved() {
    let source = "/*\n * Copyright (c) 2008-2012, Matthias Mann\n *\n * All rights reserved.\n */\nusing System;\n";
    let (output, report) = translate(source);
    assert_eq!(output, source);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.translated, 0);
}

#[test]
fn test_copyright_notice_then_documented_method() {
    let source = "/* this is a copyright notice */\n/**\n * Adds two numbers.\n * @param a first\n * @param b second\n * @return sum\n */\nint Add(int a, int b);\n";
    let (output, report) = translate(source);

    let expected = concat!(
        "/* this is a copyright notice */\n",
        "/// <summary>\n",
        "/// Adds two numbers.\n",
        "/// </summary>\n",
        "/// <param name=\"a\">first</param>\n",
        "/// <param name=\"b\">second</param>\n",
        "/// <returns>sum</returns>\n",
        "int Add(int a, int b);\n",
    );
    assert_eq!(output, expected);
    assert_eq!(report, TranslationReport { translated: 1, skipped: 1 });
}

#[test]
fn test_indented_block_keeps_its_column() {
    let source = concat!(
        "    public interface Image\n",
        "    {\n",
        "        /**\n",
        "         * Draws the image in it's original size at the given location\n",
        "         *\n",
        "         * @param state A time source for animation - may be null\n",
        "         * @param x left coordinate\n",
        "         * @see #draw(AnimationState, int, int, int, int)\n",
        "         */\n",
        "        void Draw(AnimationState state, int x);\n",
        "    }\n",
    );
    let (output, _) = translate(source);

    let expected = concat!(
        "    public interface Image\n",
        "    {\n",
        "        /// <summary>\n",
        "        /// Draws the image in it's original size at the given location\n",
        "        /// </summary>\n",
        "        /// <param name=\"state\">A time source for animation - may be null</param>\n",
        "        /// <param name=\"x\">left coordinate</param>\n",
        "        void Draw(AnimationState state, int x);\n",
        "    }\n",
    );
    assert_eq!(output, expected);
}

#[test]
fn test_summary_line_with_tags() {
    let source = "/**\n * Does a thing.\n * @param x the value\n * @return the result */";
    let (output, _) = translate(source);

    assert_eq!(output.matches("<param name=\"x\">").count(), 1);
    assert_eq!(output.matches("<returns>").count(), 1);
    assert!(output.contains("/// <summary>\n/// Does a thing.\n/// </summary>"));
    assert!(output.contains("\n/// <param name=\"x\">the value</param>"));
    assert!(output.ends_with("\n/// <returns>the result</returns>"));
}

#[test]
fn test_see_tags_produce_nothing() {
    let with_see = "/**\n * Creates the FPS counter\n * @see #FPSCounter(int, int)\n * @return the counter\n */";
    let without_see = "/**\n * Creates the FPS counter\n * @return the counter\n */";
    let (with_output, _) = translate(with_see);
    let (without_output, _) = translate(without_see);

    assert_eq!(with_output, without_output);
    assert!(!with_output.contains("see"));
}

#[test]
fn test_multiple_paragraphs() {
    let source = concat!(
        "/**\n",
        " * Creates a new image with is tinted with the specified color.\n",
        " *\n",
        " * Tinting works by multiplying the color of the image's pixels\n",
        " * with the specified color.\n",
        " *\n",
        " * @param color The color used for tinting.\n",
        " */",
    );
    let (output, _) = translate(source);

    let expected = concat!(
        "/// <summary>\n",
        "/// Creates a new image with is tinted with the specified color.\n",
        "/// <para>Tinting works by multiplying the color of the image's pixels with the specified color.</para>\n",
        "/// </summary>\n",
        "/// <param name=\"color\">The color used for tinting.</param>",
    );
    assert_eq!(output, expected);
}

#[test]
fn test_flat_summary_style() {
    let options = TranslatorOptions {
        summary_style: SummaryStyle::Flat,
        ..TranslatorOptions::default()
    };
    let source = "/**\n * First.\n *\n * Second.\n */";
    let (output, _) = CommentTranslator::new(options).translate(source.to_string()).unwrap();
    assert_eq!(output, "/// <summary>\n/// First. Second.\n/// </summary>");
}

#[test]
fn test_throws_tag() {
    let source = "/**\n * Sets the frame count.\n * @throws ArgumentOutOfRangeException if framesToCount <= 0\n */";
    let (output, _) = translate(source);
    assert!(output.ends_with(
        "\n/// <exception cref=\"ArgumentOutOfRangeException\">if framesToCount <= 0</exception>"
    ));
}

#[test]
fn test_inline_comments_are_left_alone() {
    let source = "Foo(/* unused */ 0);\n/* TODO: remove */\nBar();\n";
    let (output, report) = translate(source);
    assert_eq!(output, source);
    assert_eq!(report.skipped, 2);
}

#[test]
fn test_first_line_text_is_ignored() {
    let source = "/** Lost on the delimiter line.\n * Kept.\n */";
    let (output, _) = translate(source);
    assert_eq!(output, "/// <summary>\n/// Kept.\n/// </summary>");
}

#[test]
fn test_tag_only_block_uses_indentation() {
    let source = "class A\n{\n    /**\n     * @param x the value\n     */\n    void F(int x);\n}\n";
    let (output, _) = translate(source);

    let expected = concat!(
        "class A\n{\n",
        "    /// <summary>\n",
        "    /// </summary>\n",
        "    /// <param name=\"x\">the value</param>\n",
        "    void F(int x);\n}\n",
    );
    assert_eq!(output, expected);
}

#[test]
fn test_tag_only_block_with_required_summary_fails() {
    let options = TranslatorOptions {
        padding_policy: PaddingPolicy::Require,
        ..TranslatorOptions::default()
    };
    let source = "class A\n{\n    /**\n     * @param x the value\n     */\n}\n";
    match CommentTranslator::new(options).translate(source.to_string()) {
        Err(TranslateError::UndefinedPadding { line, .. }) => assert_eq!(line, 3),
        other => panic!("Expected UndefinedPadding, got {:?}", other),
    }
}

#[test]
fn test_unterminated_comment_fails() {
    let source = "/**\n * Fine.\n */\nint a;\n/**\n * Broken.\n";
    match CommentTranslator::default().translate(source.to_string()) {
        Err(TranslateError::UnterminatedComment { line, .. }) => assert_eq!(line, 5),
        other => panic!("Expected UnterminatedComment, got {:?}", other),
    }
}

#[test]
fn test_cursor_tracks_spliced_buffer() {
    // The first replacement is longer than the block it replaces, so the
    // second block sits at a shifted offset.
    let source = "/**\n * A.\n */\nint a;\n/**\n * B.\n */\nint b;\n";
    let (output, report) = translate(source);

    let expected = "/// <summary>\n/// A.\n/// </summary>\nint a;\n/// <summary>\n/// B.\n/// </summary>\nint b;\n";
    assert_eq!(output, expected);
    assert_eq!(report.translated, 2);
}

#[test]
fn test_second_run_is_a_no_op() {
    let source = "/* Copyright 2012 */\n/**\n * Adds.\n * @param a first\n */\nint Add(int a);\n";
    let (first, _) = translate(source);
    let (second, _) = translate(&first);
    assert_eq!(first, second);
}

#[test]
fn test_crlf_line_endings() {
    let source = "/**\r\n * Adds.\r\n * @return sum\r\n */\r\nint Add();\r\n";
    let (output, _) = translate(source);
    assert_eq!(
        output,
        "/// <summary>\r\n/// Adds.\r\n/// </summary>\r\n/// <returns>sum</returns>\r\nint Add();\r\n"
    );
}

#[test]
fn test_custom_skip_marker() {
    let options = TranslatorOptions {
        skip_marker: "LICENSE".to_string(),
        ..TranslatorOptions::default()
    };
    let source = "/*\n * LICENSE: MIT\n */\n/*\n * Copyright is no longer special.\n */";
    let (output, report) = CommentTranslator::new(options).translate(source.to_string()).unwrap();
    assert!(output.starts_with("/*\n * LICENSE: MIT\n */\n"));
    assert!(output.ends_with("/// Copyright is no longer special.\n/// </summary>"));
    assert_eq!(report, TranslationReport { translated: 1, skipped: 1 });
}

#[test]
fn test_wrapped_tag_description_continues_as_summary() {
    let source = "/**\n * Summary.\n * @param x the value which\n *        continues\n */";
    let (output, _) = translate(source);
    assert_eq!(
        output,
        "/// <summary>\n/// Summary. continues\n/// </summary>\n/// <param name=\"x\">the value which</param>"
    );
}

#[test]
fn test_block_opener_in_summary_text_is_rescanned() {
    let source = "/**\n * Matches foo/*.cs\n */";
    let (first, _) = translate(source);
    assert_eq!(first, "/// <summary>\n/// Matches foo/*.cs\n/// </summary>");

    // The emitted text still holds an opening delimiter with no close
    match CommentTranslator::default().translate(first) {
        Err(TranslateError::UnterminatedComment { line, .. }) => assert_eq!(line, 2),
        other => panic!("Expected UnterminatedComment, got {:?}", other),
    }
}

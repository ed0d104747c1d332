use css_scan::{scan, LineWindow, ScanOptions};

fn render(source: &str, options: &ScanOptions) -> String {
    let report = scan(source, options);
    let mut output: Vec<String> = report
        .diagnostics
        .iter()
        .map(|d| d.message.clone())
        .collect();
    output.push(format!(
        "-- balance {} in_comment {} lines {}",
        report.final_state.balance, report.final_state.in_comment, report.final_state.line
    ));
    output.join("\n")
}

/// A stylesheet whose trouble spot sits inside the default window.
fn long_stylesheet() -> String {
    let mut css = String::new();
    for i in 1..2420 {
        css.push_str(&format!(".rule-{i} {{ margin: 0; }}\n"));
    }
    // Line 2420: a stray closing brace drops the balance to -1, so the next
    // block bodies are scanned as if they were at root.
    css.push_str("}\n");
    css.push_str("a{b;}\n");
    css.push_str("{x}\n");
    css.push_str("/* { */\n");
    css
}

#[test]
fn test_snapshot_clean_rules() {
    let output = render(
        ".a { color: red; }\n.b { width: 10px; }",
        &ScanOptions::default(),
    );
    insta::assert_snapshot!(output, @"-- balance 0 in_comment false lines 2");
}

#[test]
fn test_snapshot_root_semicolons() {
    let output = render(
        "@charset \"utf-8\";\n@import url(base.css);\n/* { */ .a { b: c; }\n;",
        &ScanOptions::default(),
    );
    insta::assert_snapshot!(output, @r"
    Suspicious semicolon at line 1
    Suspicious semicolon at line 2
    Suspicious semicolon at line 4
    -- balance 0 in_comment false lines 4
    ");
}

#[test]
fn test_snapshot_default_window() {
    let output = render(&long_stylesheet(), &ScanOptions::default());
    insta::assert_snapshot!(output, @r"
    Content at root L2421: b;}\n{x}\n/* { */\n
    Suspicious semicolon at line 2421
    Content at root L2421: ;}\n{x}\n/* { */\n
    Content at root L2422: x}\n/* { */\n
    -- balance -1 in_comment false lines 2424
    ");
}

#[test]
fn test_snapshot_custom_window() {
    let options = ScanOptions::default()
        .with_window(LineWindow::new(2, 2).unwrap())
        .with_snippet_len(4);
    let output = render(".a {}\nab\n.c{}", &options);
    insta::assert_snapshot!(output, @r"
    Content at root L2: ab\n.
    Content at root L2: b\n.c
    -- balance 0 in_comment false lines 3
    ");
}

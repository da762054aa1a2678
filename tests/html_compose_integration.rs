use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fs;

fn extract_base64_payload(html: &str) -> String {
    let start = html.find("base64,").expect("data URI present") + "base64,".len();
    let end = html[start..].find('"').expect("data URI closed") + start;
    html[start..end].to_string()
}

#[test]
fn test_existing_image_marker_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let image_bytes = b"\x89PNG\r\n\x1a\n-- screenshot payload --";
    fs::write(dir.path().join("logo.png"), image_bytes).unwrap();

    let html = manual2pdf::compose_html("Intro\n\n<!-- IMG:logo.png -->", dir.path());

    assert!(html.contains("<img src=\"data:image/png;base64,"));
    let decoded = STANDARD
        .decode(extract_base64_payload(&html))
        .expect("payload should be valid base64");
    assert_eq!(decoded, image_bytes);
}

#[test]
fn test_missing_image_marker_leaves_comment_and_no_image() {
    let dir = tempfile::tempdir().unwrap();

    let html = manual2pdf::compose_html("Intro\n\n<!-- IMG:logo.png -->", dir.path());

    assert!(html.contains("<!-- Image not found: logo.png -->"));
    assert!(!html.contains("<img"));
}

#[test]
fn test_intermediate_html_is_byte_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("shot.jpg"), b"jpeg-ish bytes").unwrap();
    let markdown = "# 訂單查詢\n\n<!-- IMG:shot.jpg -->\n\n<!-- IMG:gone.png -->\n";

    let first = manual2pdf::compose_html(markdown, dir.path());
    let second = manual2pdf::compose_html(markdown, dir.path());
    assert_eq!(first, second);
}

#[test]
fn test_table_and_fenced_code_render_into_fragment() {
    let dir = tempfile::tempdir().unwrap();
    let markdown = "\
| 欄位 | 說明 |
|------|------|
| id   | 訂單編號 |

```
SELECT * FROM orders;
```
";

    let html = manual2pdf::compose_html(markdown, dir.path());
    assert!(html.contains("<table>"));
    assert!(html.contains("<th>欄位</th>"));
    assert!(html.contains("<pre><code>"));
    assert!(html.contains("SELECT * FROM orders;"));
}

#[test]
fn test_manual_like_document_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("login.png"), b"login screenshot").unwrap();

    let markdown = "\
# 使用手冊

## 登入

<!-- IMG:login.png -->

> 請妥善保管密碼。

## 查詢

<!-- IMG:search.png -->

| 步驟 | 動作 |
|------|------|
| 1    | 輸入訂單編號 |
";

    let html = manual2pdf::compose_html(markdown, dir.path());

    // Present screenshot inlined, absent one degraded, document shell intact.
    assert!(html.contains("data:image/png;base64,"));
    assert!(html.contains("class=\"screenshot\""));
    assert!(html.contains("<!-- Image not found: search.png -->"));
    assert!(html.contains("<h1>使用手冊</h1>"));
    assert!(html.contains("<blockquote>"));
    assert!(html.contains("<table>"));
    assert!(html.contains("<html lang=\"zh-TW\">"));
}

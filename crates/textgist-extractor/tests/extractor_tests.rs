//! Integration tests for the Extractor

use docx_rs::{Docx, Paragraph, Run};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::io::Cursor;
use std::time::Duration;
use textgist_domain::{InputSource, UploadedFile};
use textgist_extractor::{ContentExtractor, ExtractError, ExtractorConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn extractor() -> ContentExtractor {
    ContentExtractor::new(ExtractorConfig::default()).unwrap()
}

enum PdfPage<'a> {
    /// A single line of Courier text
    Text(&'a str),
    /// A content stream that is not valid PDF operators
    Garbled,
}

fn build_pdf(pages: &[PdfPage]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        let stream = match page {
            PdfPage::Text(line) => Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ],
            }
            .encode()
            .unwrap(),
            PdfPage::Garbled => b"BT /F1 24 Tf (never closed Tj ] >> ET \xff".to_vec(),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, stream));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Count" => kids.len() as i64,
        "Kids" => kids,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// Serve one response whose headers promise more body than is ever sent
async fn stalled_body_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            let _ = socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\n\
                      Content-Type: text/html\r\n\
                      Content-Length: 1000\r\n\r\n\
                      <html><body><p>Partial",
                )
                .await;
            tokio::time::sleep(Duration::from_secs(4)).await;
        }
    });

    format!("http://{}/slow-body", addr)
}

#[tokio::test]
async fn test_url_extraction_keeps_content_only() {
    let server = MockServer::start().await;
    let page = r#"<!DOCTYPE html>
        <html>
          <head><style>p { color: red; }</style><script>track();</script></head>
          <body>
            <header><h1>Example News</h1></header>
            <nav><ul><li>Home</li><li>Sports</li></ul></nav>
            <main>
              <h1>Foxes Observed Jumping</h1>
              <p>The quick brown fox jumps.</p>
              <ul><li>Quick</li><li>Brown</li></ul>
            </main>
            <aside><p>Advertisement</p></aside>
            <footer><p>All rights reserved</p></footer>
          </body>
        </html>"#;

    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(page, "text/html"))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/article", server.uri());
    let text = extractor().extract(&InputSource::Url(url)).await.unwrap();

    assert_eq!(text, "Foxes Observed Jumping The quick brown fox jumps. Quick Brown");
}

#[tokio::test]
async fn test_url_not_found_is_fetch_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing", server.uri());
    let result = extractor().extract(&InputSource::Url(url)).await;

    match result {
        Err(ExtractError::FetchFailure(message)) => assert!(message.contains("404")),
        other => panic!("Expected FetchFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_url_timeout_is_fetch_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<p>late</p>")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ExtractorConfig {
        fetch_timeout_secs: 1,
        ..ExtractorConfig::default()
    };
    let extractor = ContentExtractor::new(config).unwrap();
    let url = format!("{}/slow", server.uri());
    let result = extractor.extract(&InputSource::Url(url)).await;

    assert!(matches!(result, Err(ExtractError::FetchFailure(_))));
}

#[tokio::test]
async fn test_stalled_body_is_fetch_failure() {
    let url = stalled_body_server().await;
    let config = ExtractorConfig {
        fetch_timeout_secs: 1,
        ..ExtractorConfig::default()
    };
    let extractor = ContentExtractor::new(config).unwrap();
    let result = extractor.extract(&InputSource::Url(url)).await;

    match result {
        Err(e @ ExtractError::FetchFailure(_)) => assert!(e.is_client_error()),
        other => panic!("Expected FetchFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_docx_upload() {
    let mut cursor = Cursor::new(Vec::new());
    Docx::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Alpha line.")))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Beta line.")))
        .build()
        .pack(&mut cursor)
        .unwrap();

    let file = UploadedFile::new("Minutes.DOCX", cursor.into_inner());
    let text = extractor().extract(&InputSource::File(file)).await.unwrap();

    assert_eq!(text, "Alpha line.\nBeta line.");
}

#[tokio::test]
async fn test_pdf_upload_is_read() {
    let file = UploadedFile::new("paper.pdf", build_pdf(&[PdfPage::Text("Hello World")]));
    let text = extractor().extract(&InputSource::File(file)).await.unwrap();

    assert_eq!(text, "Hello World\n");
}

#[tokio::test]
async fn test_pdf_pages_concatenated_in_order() {
    let bytes = build_pdf(&[PdfPage::Text("Hello World"), PdfPage::Text("Second Page")]);
    let file = UploadedFile::new("two-pages.PDF", bytes);
    let text = extractor().extract(&InputSource::File(file)).await.unwrap();

    assert_eq!(text, "Hello World\nSecond Page\n");
}

#[tokio::test]
async fn test_pdf_unreadable_page_does_not_fail_document() {
    let bytes = build_pdf(&[
        PdfPage::Text("Hello World"),
        PdfPage::Garbled,
        PdfPage::Text("Second Page"),
    ]);
    let file = UploadedFile::new("damaged.pdf", bytes);
    let text = extractor().extract(&InputSource::File(file)).await.unwrap();

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    assert_eq!(lines, vec!["Hello World", "Second Page"]);
}

#[tokio::test]
async fn test_docx_bytes_with_pdf_name_fail_to_parse() {
    let mut cursor = Cursor::new(Vec::new());
    Docx::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("x")))
        .build()
        .pack(&mut cursor)
        .unwrap();

    let file = UploadedFile::new("mislabelled.pdf", cursor.into_inner());
    let result = extractor().extract(&InputSource::File(file)).await;

    assert!(matches!(result, Err(ExtractError::ParseFailure(_))));
}

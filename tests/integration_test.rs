use lopdf::{Dictionary, Document, Object, Stream};
use pdf_splitter::{
    process_document, App, AppArgs, Compression, Config, NoopObserver, ProgressFn, SourceFile,
    SplitConfig,
};
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

/// 生成 N 页的 PDF，第 i 页的 MediaBox 宽度为 600 + i，用来识别页面
fn sample_pdf(num_pages: u32) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    let mut kids = Vec::new();

    for i in 1..=num_pages {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"BT ET".to_vec()));
        let page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(600 + i as i64),
                    Object::Integer(800),
                ]),
            ),
            ("Contents", Object::Reference(content_id)),
        ]);
        kids.push(Object::Reference(doc.add_object(page)));
    }

    let pages = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(num_pages as i64)),
        ("Kids", Object::Array(kids)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// 读出压缩包中所有条目（按写入顺序）
fn read_entries(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    (0..archive.len())
        .map(|i| {
            let mut file = archive.by_index(i).unwrap();
            let mut content = Vec::new();
            file.read_to_end(&mut content).unwrap();
            (file.name().to_string(), content)
        })
        .collect()
}

/// 单页 PDF 对应的源页码
fn source_page_of(pdf: &[u8]) -> i64 {
    let doc = Document::load_mem(pdf).unwrap();
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1, "每个条目应该只有一页");

    let page_id = *pages.values().next().unwrap();
    let media_box = doc
        .get_object(page_id)
        .unwrap()
        .as_dict()
        .unwrap()
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap();
    media_box[2].as_i64().unwrap() - 600
}

fn split_config(pages: u32, ranges: &str, exclusions: &str) -> SplitConfig {
    let mut config = SplitConfig::new();
    config.set_file(Some(SourceFile::new("book.pdf", sample_pdf(pages))));
    config.set_ranges(ranges);
    config.set_exclusions(exclusions);
    config
}

fn test_config(dir: &Path) -> Config {
    Config {
        output_dir: dir.join("out").display().to_string(),
        report_file: dir.join("report.txt").display().to_string(),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_split_with_exclusion() {
    let config = split_config(10, "1-5", "3");

    let outcome = process_document(&config, &mut NoopObserver).await;

    assert!(outcome.success, "处理应该成功: {:?}", outcome.error);
    assert_eq!(outcome.succeeded_count(), 5);

    let entries = read_entries(outcome.archive.as_deref().unwrap());
    let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["1.pdf", "2.pdf", "4.pdf", "5.pdf", "6.pdf"]);

    // 编号跳过 3，但源页码连续
    let pages: Vec<i64> = entries.iter().map(|(_, pdf)| source_page_of(pdf)).collect();
    assert_eq!(pages, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_padded_names_with_prefix_and_suffix() {
    let mut config = split_config(12, "08-10", "");
    config.set_prefix("DMC");
    config.set_suffix("_v2");

    let outcome = process_document(&config, &mut NoopObserver).await;

    let entries = read_entries(outcome.archive.as_deref().unwrap());
    let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["DMC08_v2.pdf", "DMC09_v2.pdf", "DMC10_v2.pdf"]);

    // 编号来自范围表达式，导出的是文档开头的页面
    let pages: Vec<i64> = entries.iter().map(|(_, pdf)| source_page_of(pdf)).collect();
    assert_eq!(pages, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_range_numbers_past_document_end() {
    let config = split_config(10, "20-22", "");

    let outcome = process_document(&config, &mut NoopObserver).await;

    assert!(outcome.success);
    assert!(outcome.results.iter().all(|r| r.success));

    let entries = read_entries(outcome.archive.as_deref().unwrap());
    let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["20.pdf", "21.pdf", "22.pdf"]);

    let pages: Vec<i64> = entries.iter().map(|(_, pdf)| source_page_of(pdf)).collect();
    assert_eq!(pages, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_offset_range_exports_first_pages() {
    let config = split_config(10, "3-5", "");

    let outcome = process_document(&config, &mut NoopObserver).await;

    let recorded: Vec<(&str, u32)> = outcome
        .results
        .iter()
        .map(|r| (r.file_name.as_str(), r.page_number))
        .collect();
    assert_eq!(recorded, vec![("3.pdf", 1), ("4.pdf", 2), ("5.pdf", 3)]);

    let entries = read_entries(outcome.archive.as_deref().unwrap());
    let pages: Vec<i64> = entries.iter().map(|(_, pdf)| source_page_of(pdf)).collect();
    assert_eq!(pages, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_oversized_range_aborts() {
    let config = split_config(3, "1-4000000000", "");

    let outcome = process_document(&config, &mut NoopObserver).await;

    assert!(!outcome.success);
    assert!(outcome.error.unwrap().contains("1-4000000000"));
}

#[tokio::test]
async fn test_progress_reaches_completion() {
    let config = split_config(4, "1-4", "");
    let mut seen = Vec::new();

    let outcome = process_document(&config, &mut ProgressFn(|p: f64| seen.push(p))).await;

    assert!(outcome.success);
    assert_eq!(seen.first(), Some(&0.0));
    assert_eq!(seen.last(), Some(&100.0));
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_invalid_ranges_abort_without_archive() {
    let config = split_config(4, "1-3,x", "");

    let outcome = process_document(&config, &mut NoopObserver).await;

    assert!(!outcome.success);
    assert!(outcome.archive.is_none());
    assert!(outcome.results.is_empty());
    assert!(outcome.error.unwrap().contains("x"));
}

#[tokio::test]
async fn test_app_writes_archive_to_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("book.pdf");
    std::fs::write(&input, sample_pdf(6)).unwrap();

    let config = Config {
        compression: Compression::Store,
        ..test_config(dir.path())
    };
    let args = AppArgs {
        input,
        ranges: "1-10".to_string(),
        exclusions: "2".to_string(),
        prefix: "ch".to_string(),
        zip_name: Some("chapter one".to_string()),
        ..Default::default()
    };

    let summary = App::initialize(config, args).await.unwrap().run().await.unwrap();

    assert_eq!(summary.archive_path, dir.path().join("out").join("chapter one.zip"));
    let bytes = std::fs::read(&summary.archive_path).unwrap();
    let names: Vec<String> = read_entries(&bytes).into_iter().map(|(n, _)| n).collect();
    // 文档只有 6 页，请求的 10 页被截断
    assert_eq!(
        names,
        vec!["ch1.pdf", "ch3.pdf", "ch4.pdf", "ch5.pdf", "ch6.pdf", "ch7.pdf"]
    );

    let report = std::fs::read_to_string(dir.path().join("report.txt")).unwrap();
    assert!(report.contains("book.pdf"));
}

#[tokio::test]
async fn test_app_uses_default_zip_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("book.pdf");
    std::fs::write(&input, sample_pdf(2)).unwrap();

    let args = AppArgs {
        input,
        ranges: "1".to_string(),
        ..Default::default()
    };

    let summary = App::initialize(test_config(dir.path()), args)
        .await
        .unwrap()
        .run()
        .await
        .unwrap();

    assert!(summary.archive_path.ends_with("split_files.zip"));
    assert!(summary.archive_path.exists());
}

#[tokio::test]
async fn test_app_rejects_non_pdf_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, "just some notes").unwrap();

    let args = AppArgs {
        input,
        ranges: "1".to_string(),
        ..Default::default()
    };

    let err = App::initialize(test_config(dir.path()), args)
        .await
        .err()
        .unwrap();
    assert!(err.to_string().contains("notes.txt"));
}

#[tokio::test]
async fn test_app_fails_on_bad_ranges() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("book.pdf");
    std::fs::write(&input, sample_pdf(3)).unwrap();

    let args = AppArgs {
        input,
        ranges: "3-1".to_string(),
        ..Default::default()
    };

    let app = App::initialize(test_config(dir.path()), args).await.unwrap();
    assert!(app.run().await.is_err());
    assert!(!dir.path().join("out").exists());
}

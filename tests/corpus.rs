use std::path::Path;

use guarani_corpus::error::Error;
use guarani_corpus::extract::Extractor;
use guarani_corpus::identifiers::{Classifier, Identification, Identifier};
use guarani_corpus::io::{CorpusAssembler, DomainMetadataEntry};
use guarani_corpus::pipelines::CorpusPipeline;
use guarani_corpus::sources::{Page, Seeds};
use tempfile::tempdir;

const GUARANI: &str = "Ñane retã Paraguái oguereko mokõi ñe'ẽ teete, ha avañe'ẽ \
                       oñeñe'ẽ opa rupi. Ko'ãga mitãnguéra oñembo'e hikuái mbo'ehaópe.";

const SPANISH: &str = "El evento cultural reunió a muchas familias del barrio para celebrar \
                       juntos con música y la palabra avañe'ẽ en cada cartel.";

/// Says `label` for any text containing "Ñane retã", `other` otherwise.
struct Keyword {
    label: &'static str,
    other: &'static str,
    prob: f32,
}

impl Identifier for Keyword {
    fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error> {
        let label = if sentence.contains("Ñane retã") {
            self.label
        } else {
            self.other
        };
        Ok(Some(Identification::new(label, self.prob)))
    }
}

fn extractor() -> Extractor {
    Extractor::new(Classifier::new(
        Some(Box::new(Keyword {
            label: "gn",
            other: "es",
            prob: 0.9,
        })),
        Some(Box::new(Keyword {
            label: "grn",
            other: "spa",
            prob: 90.0,
        })),
    ))
}

fn html() -> String {
    format!(
        r#"<html>
<head><style>p {{ color: red; }}</style><script>var gn = "{GUARANI}";</script></head>
<body>
<div class="main-nav">{GUARANI}</div>
<p>{GUARANI}</p>
<div class="content">{SPANISH}</div>
</body>
</html>"#
    )
}

fn read_meta(path: &Path) -> Vec<DomainMetadataEntry> {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test_log::test]
fn html_to_corpus() {
    let dir = tempdir().unwrap();
    let dst = dir.path().join("corpus");

    let pages = vec![
        Ok(Page::from_html(
            "https://www.ejemplo.com.py/noticias/cultura.html".to_string(),
            &html(),
        )),
        Err(Error::Custom("timeout".to_string())),
        Ok(Page::from_html(
            "https://otro.org/".to_string(),
            &format!("<p>{}</p>", SPANISH.replace("avañe'ẽ", "guaraní")),
        )),
    ];

    let summary = CorpusPipeline::process(pages, &extractor(), CorpusAssembler::new(&dst));
    assert_eq!(summary.pages, 2);
    assert_eq!(summary.failed_pages, 1);
    assert_eq!(summary.domains, 1);

    let mut expected: Vec<&str> = GUARANI
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .collect();
    expected.push("avañe'ẽ");
    assert_eq!(summary.words, expected.len());

    let domain_dir = dst.join("ejemplo.com");
    let content = std::fs::read_to_string(domain_dir.join("noticias_cultura.txt")).unwrap();
    assert_eq!(content.lines().collect::<Vec<_>>(), expected);

    let meta = read_meta(&domain_dir.join("ejemplo.com.json"));
    assert_eq!(
        meta,
        vec![DomainMetadataEntry {
            domain: "ejemplo.com.py".to_string(),
            web_page_url: "https://www.ejemplo.com.py/noticias/cultura.html".to_string(),
            file_web_page_content: domain_dir
                .join("noticias_cultura.txt")
                .display()
                .to_string(),
        }]
    );

    assert!(!dst.join("otro").exists());
}

#[test]
fn pages_of_a_domain_share_metadata() {
    let dir = tempdir().unwrap();
    let urls = [
        "https://www.ejemplo.com.py/",
        "https://ejemplo.com.py/a?id=1",
        "https://www.ejemplo.com.py/",
    ];
    let pages = urls
        .iter()
        .map(|url| Ok(Page::new(url.to_string(), vec![GUARANI.to_string()])));

    let summary = CorpusPipeline::process(pages, &extractor(), CorpusAssembler::new(dir.path()));
    assert_eq!(summary.pages, 3);
    assert_eq!(summary.domains, 1);

    let domain_dir = dir.path().join("ejemplo.com");
    let meta = read_meta(&domain_dir.join("ejemplo.com.json"));
    let meta_urls: Vec<_> = meta.iter().map(|e| e.web_page_url.as_str()).collect();
    assert_eq!(
        meta_urls,
        vec!["https://www.ejemplo.com.py/", "https://ejemplo.com.py/a?id=1"]
    );

    // the root page has been seen twice and its file is only created once
    let index = std::fs::read_to_string(domain_dir.join("index.txt")).unwrap();
    let a = std::fs::read_to_string(domain_dir.join("a_id_1.txt")).unwrap();
    assert_eq!(index.lines().count(), 2 * a.lines().count());
}

#[test]
fn seeds_from_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("seeds.csv");
    std::fs::write(
        &path,
        "name,description,url\nABC Color,Diario,https://www.abc.com.py/\n",
    )
    .unwrap();

    let seeds = Seeds::from_csv(&path).unwrap();
    assert_eq!(seeds.len(), 1);
    assert_eq!(seeds.allowed_domains(), vec!["www.abc.com.py"]);

    std::fs::write(&path, "name,description,url\nABC Color,Diario,\n").unwrap();
    assert!(matches!(Seeds::from_csv(&path), Err(Error::Seed(_))));
}

use catalog_core::{
    CatalogConfig, CatalogWidget, DisplaySurface, FileSource, FuzzyIndex, IndexOptions, LoadError,
    Renderer, SearchIndex, StaticSource, filter_records, load_working_set, run_query,
};
use futures::executor::block_on;
use insta::assert_snapshot;
use serde_json::{Value, json};

fn raw_dataset() -> Value {
    json!([
        {"title": "Perfume A", "primaryImageUrl": "a.png"},
        {"title": "", "primaryImageUrl": "b.png"},
        {"title": "Perfume B", "primaryImageUrl": "c.png", "url": "u"},
    ])
}

#[derive(Default)]
struct Page {
    input: String,
    results: Option<String>,
}

impl DisplaySurface for Page {
    fn query_text(&self) -> String {
        self.input.clone()
    }

    fn replace_contents(&mut self, markup: &str) {
        self.results = Some(markup.to_string());
    }
}

fn card_count(html: &str) -> usize {
    html.matches(r#"<div class="card">"#).count()
}

#[test]
fn test_pipeline_stages_compose() {
    let raw = raw_dataset();
    let working_set = filter_records(raw.as_array().unwrap());
    assert_eq!(working_set.len(), 2);

    let index = FuzzyIndex::build(&working_set, &IndexOptions::default());
    let renderer = Renderer::new(&CatalogConfig::default().display).unwrap();

    let everything = run_query("", &working_set, &index);
    let html = renderer.render(&everything).unwrap();
    assert_eq!(card_count(&html), 2);

    let only_a = run_query("Perfume A", &working_set, &index);
    assert_eq!(only_a.len(), 1);
    let html = renderer.render(&only_a).unwrap();
    assert_snapshot!("perfume_a_card", html);
}

#[test]
fn test_widget_scenario() {
    let mut widget: CatalogWidget = CatalogWidget::new(CatalogConfig::default()).unwrap();
    let mut page = Page::default();

    block_on(widget.mount(&StaticSource::from_json(&raw_dataset()), &mut page)).unwrap();
    let initial = page.results.clone().unwrap();
    assert_eq!(card_count(&initial), 2);

    page.input = "Perfume A".to_string();
    widget.trigger(&mut page);
    let html = page.results.clone().unwrap();
    assert_eq!(card_count(&html), 1);
    assert!(html.contains("a.png"));
    assert!(!html.contains("Perfume B"));
    assert!(!html.contains("card-link"));

    page.input = String::new();
    widget.trigger(&mut page);
    assert_eq!(page.results.as_deref(), Some(initial.as_str()));
}

#[test]
fn test_failed_fetch_leaves_page_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut widget: CatalogWidget = CatalogWidget::new(CatalogConfig::default()).unwrap();
    let mut page = Page::default();

    let source = FileSource::new(dir.path().join("fragrance_data.json"));
    let err = block_on(widget.mount(&source, &mut page)).unwrap_err();
    assert!(matches!(err, LoadError::Fetch { .. }));

    page.input = "Perfume A".to_string();
    widget.trigger(&mut page);
    assert!(page.results.is_none());
}

#[test]
fn test_loaded_from_file_with_configured_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("fragrance_data.json");
    std::fs::write(
        &data,
        json!([
            {"title": "Tobacco Vanille", "primaryImageUrl": "tv.png", "url": "tv"},
            {"title": "Tuscan Leather", "primaryImageUrl": "tl.png"},
            {"title": "Neroli Portofino", "primaryImageUrl": "np.png"},
        ])
        .to_string(),
    )
    .unwrap();

    let strict = CatalogConfig::parse("").unwrap();
    let loose = CatalogConfig::parse("[search]\nthreshold = 0.4\n").unwrap();

    let working_set = block_on(load_working_set(&FileSource::new(&data))).unwrap();

    let strict_index = FuzzyIndex::build(&working_set, &strict.search);
    assert!(run_query("Tobaco Vanila", &working_set, &strict_index).is_empty());

    let loose_index = FuzzyIndex::build(&working_set, &loose.search);
    let titles: Vec<_> = run_query("Tobaco Vanila", &working_set, &loose_index)
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, ["Tobacco Vanille"]);
}

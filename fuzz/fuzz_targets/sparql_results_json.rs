#![no_main]

use libfuzzer_sys::fuzz_target;
use lodbrowse_results::QueryResults;
use lodbrowse_view::{NamespaceDictionary, Projection, Role, ViewConfig};
use std::sync::OnceLock;

fuzz_target!(|data: &[u8]| {
    static PROJECTION: OnceLock<Projection> = OnceLock::new();
    let projection = PROJECTION.get_or_init(|| {
        Projection::new(ViewConfig {
            namespaces: Some(NamespaceDictionary::new([
                ("dc", "http://purl.org/dc/terms/"),
                ("ex", "http://example.com/"),
            ])),
            title_predicates: vec!["http://purl.org/dc/terms/title".to_owned()],
            image_predicates: vec!["http://xmlns.com/foaf/0.1/depiction".to_owned()],
            max_images: 2,
            show_images: true,
            fetch_literals: true,
            ..ViewConfig::new("http://example.com/")
        })
    });

    let Ok(results) = QueryResults::parse(data) else {
        return;
    };
    let solutions = results.solutions();
    assert_eq!(solutions.len(), results.len());

    let columns = results.bindings();
    for variable in columns.keys() {
        assert!(results.variables().contains(variable));
    }

    let as_subject = projection.partition_by_role(Role::Subject, &solutions);
    let as_object = projection.partition_by_role(Role::Object, &solutions);
    assert!(as_subject.len() <= solutions.len());
    assert!(as_object.len() <= solutions.len());
    assert!(projection.find_images(&solutions).len() <= 2);
    projection.find_title(&solutions);
    projection.literal_table(&solutions);
});

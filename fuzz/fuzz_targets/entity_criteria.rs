#![no_main]

use kgquery_compiler::{Page, QueryCompiler};
use kgquery_model::EntityQueryCriteria;
use libfuzzer_sys::fuzz_target;
use spargebra::SparqlParser;

fuzz_target!(|data: &[u8]| {
    let Ok(criteria) = serde_json::from_slice::<EntityQueryCriteria>(data) else {
        return;
    };
    let compiler = QueryCompiler::default();
    if let Ok(query) = compiler.compile_entity_query("urn:fuzz:graph", &criteria, Page::default())
    {
        if let Err(error) = SparqlParser::new().parse_query(&query.text) {
            panic!("Invalid query generated: {error}\n{}", query.text);
        }
        let again = compiler
            .compile_entity_query("urn:fuzz:graph", &criteria, Page::default())
            .unwrap();
        assert_eq!(query, again);
    }
    if let Ok(query) = compiler.compile_entity_count("urn:fuzz:graph", &criteria) {
        if let Err(error) = SparqlParser::new().parse_query(&query.text) {
            panic!("Invalid count query generated: {error}\n{}", query.text);
        }
    }
});

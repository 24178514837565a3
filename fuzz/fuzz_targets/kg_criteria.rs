#![no_main]

use kgquery_compiler::{Page, QueryCompiler};
use kgquery_model::KGQueryCriteria;
use libfuzzer_sys::fuzz_target;
use spargebra::SparqlParser;

fuzz_target!(|data: &[u8]| {
    let Ok(criteria) = serde_json::from_slice::<KGQueryCriteria>(data) else {
        return;
    };
    let compiler = QueryCompiler::default();
    if let Ok(query) = compiler.compile_kg_query("urn:fuzz:graph", &criteria, Page::new(10, 5)) {
        if let Err(error) = SparqlParser::new().parse_query(&query.text) {
            panic!("Invalid query generated: {error}\n{}", query.text);
        }
        // Line breaks inside literals are escaped, so this can only match the solution modifier.
        assert_eq!(query.text.matches("\nLIMIT 10 OFFSET 5").count(), 1);
    }
});

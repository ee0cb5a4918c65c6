use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graph2rdf::graph::GraphStore;
use graph2rdf::{GraphToRdf, NQuadsSerializer};

/// `size` person entities, each with an id leaf, two literal fields and an
/// address entity behind an intermediate node
fn build_people(size: usize) -> GraphStore {
    let mut store = GraphStore::new();
    for i in 0..size {
        let person = store.create_node("Person");
        store.set_node_property(person, "rdfIRI", "ref:personId").unwrap();
        store.set_node_property(person, "rdfType", "http://schema.org/Person").unwrap();
        store.set_node_property(person, "https://lschema.org/entitySchema", "Person").unwrap();

        let id = store.create_node("Value");
        store.set_node_property(id, "https://lschema.org/schemaNodeId", "personId").unwrap();
        store
            .set_node_property(id, "https://lschema.org/value", format!("http://ex/people/{}", i))
            .unwrap();
        store.create_edge(person, id, "has").unwrap();

        let name = store.create_node("Value");
        store.set_node_property(name, "rdfPredicate", "http://schema.org/name").unwrap();
        store.set_node_property(name, "https://lschema.org/value", format!("Person{}", i)).unwrap();
        store.create_edge(person, name, "has").unwrap();

        let age = store.create_node("Value");
        store.set_node_property(age, "rdfPredicate", "http://schema.org/age").unwrap();
        store.set_node_property(age, "https://lschema.org/value", (i % 100) as i64).unwrap();
        store.create_edge(person, age, "has").unwrap();

        let via = store.create_node("Object");
        store.set_node_property(via, "rdfPredicate", "http://schema.org/address").unwrap();
        store.create_edge(person, via, "has").unwrap();

        let address = store.create_node("Address");
        store.set_node_property(address, "rdfIRI", "blank").unwrap();
        store.set_node_property(address, "https://lschema.org/entitySchema", "Address").unwrap();
        store.create_edge(via, address, "has").unwrap();

        let city = store.create_node("Value");
        store.set_node_property(city, "rdfPredicate", "http://schema.org/addressLocality").unwrap();
        store.set_node_property(city, "https://lschema.org/value", "Oslo").unwrap();
        store.create_edge(address, city, "has").unwrap();
    }
    store
}

/// Benchmark a full conversion
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for size in [100, 1000, 10_000].iter() {
        let store = build_people(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let quads = GraphToRdf::new(&store).convert_to_quads().unwrap();
                criterion::black_box(quads.len());
            });
        });
    }
    group.finish();
}

/// Benchmark N-Quads output
fn bench_serialize(c: &mut Criterion) {
    let store = build_people(1000);
    let quads = GraphToRdf::new(&store).convert_to_quads().unwrap();

    c.bench_function("serialize_nquads_1000", |b| {
        b.iter(|| {
            let text = NQuadsSerializer::serialize(&quads).unwrap();
            criterion::black_box(text.len());
        });
    });
}

criterion_group!(benches, bench_convert, bench_serialize);
criterion_main!(benches);

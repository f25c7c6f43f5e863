use aignite::aig::Aig;

fn main() {
    tracing_subscriber::fmt::init();

    let path = std::env::args().nth(1).expect("usage: dump <file.aag>");
    let (aig, _names) = Aig::from_aiger(&path).unwrap();

    let counts = aig.counts();
    println!(
        "{}: {} inputs, {} latches, {} ands, {} outputs",
        path, counts.inputs, counts.latches, counts.ands, counts.outputs
    );

    let f = std::fs::File::create("out.dot").unwrap();
    aig.to_graphviz(f).unwrap();
}

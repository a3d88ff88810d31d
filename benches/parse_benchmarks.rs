use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hydronet::app::services::results_parser::ReportParser;
use hydronet::InpParser;
use std::fmt::Write;

fn synthetic_inp(junctions: usize) -> String {
    let mut inp = String::from("[JUNCTIONS]\n");
    for i in 0..junctions {
        writeln!(inp, "J{} {}.5 {}.25 Demand 1.0", i, i, i * 2).unwrap();
    }
    inp.push_str("[RESERVOIRS]\nR1 0 0 100\n[PIPES]\n");
    for i in 1..junctions {
        writeln!(inp, "P{} J{} J{} 250.0 12.0 Roughness 100", i, i - 1, i).unwrap();
    }
    inp
}

fn synthetic_report(nodes: usize) -> String {
    let mut rpt = String::from("** Node Results **\n");
    for i in 0..nodes {
        writeln!(rpt, "N{} 100.0 {}.5 95.0 10.0", i, i).unwrap();
    }
    rpt.push_str("** Link Results **\n");
    for i in 0..nodes {
        writeln!(rpt, "L{} 12.5 0.8 0.02 1", i).unwrap();
    }
    rpt
}

fn bench_inp_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("inp_parser");
    let parser = InpParser::default();
    for size in [100, 10_000] {
        let content = synthetic_inp(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| parser.parse_str(black_box(content)))
        });
    }
    group.finish();
}

fn bench_report_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_parser");
    let parser = ReportParser::default();
    for size in [100, 10_000] {
        let content = synthetic_report(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| parser.parse_str(black_box(content)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_inp_parser, bench_report_parser);
criterion_main!(benches);

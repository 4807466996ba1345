use aprs_telemetry::{parse_comment_telemetry, parse_telemetry_config, parse_telemetry_report};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_comment_telemetry(c: &mut Criterion) {
    let comment = "PHG7130 Mt Hood |!\"+z%P/*(Q!o!!|  Portland";

    c.bench_function("parse_comment_telemetry", |b| {
        b.iter(|| {
            let result = parse_comment_telemetry(black_box(comment));
            let _ = black_box(result);
        })
    });
}

fn benchmark_telemetry_config(c: &mut Criterion) {
    let bodies = [
        "PARM.Vbat,Vsolar,Temp,Pres,Alt,Cam,Chut,Sun,10m,ATV",
        "UNIT.Volts,Volts,deg.C,Mbar,Kft,Click,OPEN,on,on,hi",
        "EQNS.0,5.2,0,0,.53,-32,3,4.39,49,-32,3,18,1,2,3",
        "BITS.10110000,N6XQY Big Balloon Project",
    ];

    c.bench_function("parse_telemetry_config", |b| {
        b.iter(|| {
            for body in &bodies {
                let result = parse_telemetry_config(black_box(body));
                let _ = black_box(result);
            }
        })
    });
}

fn benchmark_telemetry_report(c: &mut Criterion) {
    let report = "#005,199,000,255,073,123,01101001";

    c.bench_function("parse_telemetry_report", |b| {
        b.iter(|| {
            let result = parse_telemetry_report(black_box(report));
            let _ = black_box(result);
        })
    });
}

criterion_group!(
    benches,
    benchmark_comment_telemetry,
    benchmark_telemetry_config,
    benchmark_telemetry_report
);
criterion_main!(benches);

//! End-to-end pipeline benchmarks.
//!
//! Run with: cargo bench -p cipherscope-analysis --bench pipeline_bench

use cipherscope_analysis::pipeline::{AnalysisPipeline, AnalyzeOptions};
use cipherscope_core::{CipherType, CipherscopeConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const PLAINTEXT: &str = "Such methods resist a casual reader but fall quickly to anyone who counts how often each \
letter appears. In ordinary English the letter E is the most common, followed by T, A and O, and a patient analyst \
can match these counts against the ciphertext to rebuild the key one letter at a time.";

fn shifted(text: &str, shift: u8) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| (b'A' + (c.to_ascii_uppercase() as u8 - b'A' + shift) % 26) as char)
        .collect()
}

fn analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);
    let pipeline = AnalysisPipeline::with_defaults(CipherscopeConfig::default()).unwrap();
    let ciphertext = shifted(PLAINTEXT, 7);

    group.bench_function("detect_and_recover", |b| {
        b.iter(|| pipeline.analyze(&ciphertext, &AnalyzeOptions::default()).unwrap());
    });

    for cipher_type in [CipherType::Caesar, CipherType::Affine, CipherType::Vigenere] {
        let options = AnalyzeOptions {
            cipher_type: Some(cipher_type),
            ..AnalyzeOptions::default()
        };
        group.bench_with_input(
            BenchmarkId::new("single_type", cipher_type.as_str()),
            &options,
            |b, options| {
                b.iter(|| pipeline.analyze(&ciphertext, options).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, analyze);
criterion_main!(benches);

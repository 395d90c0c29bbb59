//! Criterion benchmarks for the Garble vowel mixer.
//!
//! Covers the pieces with per-call cost worth watching:
//! - permutation generation from a seed
//! - full `mix` over a paragraph, cold and warm lemma cache

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use garble::cipher::alphabet::VowelAlphabet;
use garble::cipher::digest::LemmaDigest;
use garble::cipher::permutation::PermutationMap;
use garble::cipher::seed::derive_seed;
use garble::mixer::VowelMixer;

const PARAGRAPH: &str = "The quick brown fox jumps over the lazy dog while \
    the children were running through the garden. She walked slowly, \
    thinking about the mice and the geese that lived near the old houses.";

fn bench_permutation_generation(c: &mut Criterion) {
    let alphabet = VowelAlphabet::default();
    let digest = LemmaDigest::sha1();
    let seed = derive_seed(&digest.digest(b"run"));

    c.bench_function("permutation_generate", |b| {
        b.iter(|| PermutationMap::generate(black_box(seed), &alphabet))
    });
}

fn bench_mix_paragraph(c: &mut Criterion) {
    let mut group = c.benchmark_group("mix");
    group.throughput(Throughput::Bytes(PARAGRAPH.len() as u64));

    group.bench_function("paragraph_cold_cache", |b| {
        b.iter(|| {
            let mixer = VowelMixer::new();
            mixer.mix(black_box(PARAGRAPH)).unwrap()
        })
    });

    group.bench_function("paragraph_warm_cache", |b| {
        let mixer = VowelMixer::new();
        mixer.mix(PARAGRAPH).unwrap(); // prime the lemma cache
        b.iter(|| mixer.mix(black_box(PARAGRAPH)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_permutation_generation, bench_mix_paragraph);
criterion_main!(benches);

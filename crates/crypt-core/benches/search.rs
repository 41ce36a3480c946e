use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use crypt_core::common::{FOUR_LETTER_WORDS, THREE_LETTER_WORDS, TWO_LETTER_WORDS};
use crypt_core::dict::WordIndex;
use crypt_core::search::{JointSearch, SearchConfig};
use crypt_core::token::tokens_from_text;

fn bench_index() -> WordIndex {
    WordIndex::from_words(
        TWO_LETTER_WORDS
            .iter()
            .chain(THREE_LETTER_WORDS)
            .chain(FOUR_LETTER_WORDS),
    )
}

fn bench_joint_search(c: &mut Criterion) {
    let index = bench_index();
    let mut group = c.benchmark_group("joint_search");
    for text in ["jtx apc", "jtx epq wk jtx apc", "nc p jtx xll apc"] {
        let tokens = tokens_from_text(text).unwrap();
        let search = JointSearch::new(tokens, &index).unwrap();
        let config = SearchConfig {
            max_results: None,
            progress_interval: 0,
        };
        group.bench_with_input(BenchmarkId::from_parameter(text), &search, |b, s| {
            b.iter(|| s.run(&config, &mut ()))
        });
    }
    group.finish();
}

fn bench_candidates(c: &mut Criterion) {
    let index = bench_index();
    let tokens = tokens_from_text("jtx dbdimmwk epq buxpjxa").unwrap();
    c.bench_function("candidates_for", |b| {
        b.iter(|| {
            tokens
                .iter()
                .map(|t| crypt_core::candidates::candidates_for(t, &index).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_joint_search, bench_candidates);
criterion_main!(benches);
